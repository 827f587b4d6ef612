//! Deadline-based task scheduling for the event loop
//!
//! Tasks are keyed by purpose. Scheduling a key that is already pending
//! replaces its deadline, so a newer request always supersedes an older one.
//! Nothing runs on its own: the loop calls `take_due` with the current time
//! and dispatches whatever has expired.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Purpose of a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Finish the simulated submission
    Submission,
    /// Hide the success acknowledgment
    ToastDismiss,
    /// Remove announcement node `n`
    Announcement(u64),
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: HashMap<TaskKey, Instant>,
}

impl Scheduler {
    /// Schedule `key` to fire `delay` after `now`.
    /// Returns true if a pending task with the same key was superseded.
    pub fn schedule(&mut self, key: TaskKey, now: Instant, delay: Duration) -> bool {
        let superseded = self.pending.insert(key, now + delay).is_some();
        if superseded {
            tracing::debug!("Rescheduled {key:?}, previous deadline dropped");
        }
        superseded
    }

    /// Cancel a pending task. Returns true if one was pending.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        self.pending.remove(&key).is_some()
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    /// Remove and return every task due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<TaskKey> {
        let mut due: Vec<(Instant, TaskKey)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, deadline)| (*deadline, *key))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        for (_, key) in &due {
            self.pending.remove(key);
        }
        due.into_iter().map(|(_, key)| key).collect()
    }
}
