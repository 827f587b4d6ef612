//! Submission lifecycle state machine

use thiserror::Error;

use super::snapshot::FormSnapshot;

/// Where the form is in its submit/acknowledge cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionLifecycle {
    #[default]
    Idle,
    /// Submission in flight, carrying the values being sent
    Submitting { snapshot: FormSnapshot },
    /// Sent; the acknowledgment has not been dismissed yet
    Succeeded,
}

/// A transition that the current state does not allow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("the previous submission has not been acknowledged")]
    AwaitingAcknowledgment,
    #[error("no submission is in flight")]
    NotSubmitting,
    #[error("no submission is awaiting acknowledgment")]
    NotSucceeded,
}

impl SubmissionLifecycle {
    /// Idle -> Submitting
    pub fn begin(&mut self, snapshot: FormSnapshot) -> Result<(), TransitionError> {
        match self {
            Self::Idle => {
                *self = Self::Submitting { snapshot };
                Ok(())
            }
            Self::Submitting { .. } => Err(TransitionError::AlreadySubmitting),
            Self::Succeeded => Err(TransitionError::AwaitingAcknowledgment),
        }
    }

    /// Submitting -> Succeeded, handing back the submitted values
    pub fn complete(&mut self) -> Result<FormSnapshot, TransitionError> {
        match std::mem::take(self) {
            Self::Submitting { snapshot } => {
                *self = Self::Succeeded;
                Ok(snapshot)
            }
            other => {
                *self = other;
                Err(TransitionError::NotSubmitting)
            }
        }
    }

    /// Succeeded -> Idle
    pub fn acknowledge(&mut self) -> Result<(), TransitionError> {
        match self {
            Self::Succeeded => {
                *self = Self::Idle;
                Ok(())
            }
            _ => Err(TransitionError::NotSucceeded),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting { .. } => "submitting",
            Self::Succeeded => "succeeded",
        }
    }
}
