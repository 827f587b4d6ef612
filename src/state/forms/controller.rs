//! Contact form controller
//!
//! Owns validation, error display, query-type interaction, the submission
//! lifecycle and screen-reader announcements for one form. All page access
//! goes through the injected [`Document`]; timers are deadlines in a
//! [`Scheduler`] fired from [`FormController::tick`].

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::bindings::FormBindings;
use super::error_display::{self, is_error_shown, shown_message};
use super::field::{FieldId, FieldInput, FieldState};
use super::lifecycle::{SubmissionLifecycle, TransitionError};
use super::query_type::{self, GroupNav, SELECTED_CLASS};
use super::rules::ValidationRule;
use super::snapshot::FormSnapshot;
use crate::state::{Document, ElementId, LiveAnnouncer, Scheduler, TaskKey};

/// Class that reveals the success acknowledgment
pub const TOAST_SHOW_CLASS: &str = "show";

pub const SUCCESS_ANNOUNCEMENT: &str =
    "Message sent successfully! Thanks for completing the form. We will be in touch soon!";

/// Labels and delays the controller runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub submit_delay: Duration,
    pub toast_duration: Duration,
    pub announcement_ttl: Duration,
    pub submit_label: String,
    pub submitting_label: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            toast_duration: Duration::from_millis(5000),
            announcement_ttl: Duration::from_millis(1000),
            submit_label: "Submit".to_string(),
            submitting_label: "Submitting...".to_string(),
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; `failed` fields did not pass
    Invalid { failed: usize },
    /// All fields passed and the simulated submission started
    Submitting,
    /// A submission is already in flight
    Ignored,
}

pub struct FormController<D: Document> {
    doc: D,
    bindings: FormBindings,
    settings: ControllerSettings,
    states: HashMap<FieldId, FieldState>,
    lifecycle: SubmissionLifecycle,
    scheduler: Scheduler,
    announcer: LiveAnnouncer,
}

impl<D: Document> FormController<D> {
    pub fn new(mut doc: D, bindings: FormBindings, settings: ControllerSettings) -> Self {
        error_display::describe_fields(&mut doc, &bindings);
        doc.set_text(&bindings.submit, &settings.submit_label);
        doc.set_disabled(&bindings.submit, false);

        Self {
            doc,
            bindings,
            settings,
            states: HashMap::new(),
            lifecycle: SubmissionLifecycle::default(),
            scheduler: Scheduler::default(),
            announcer: LiveAnnouncer::default(),
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn bindings(&self) -> &FormBindings {
        &self.bindings
    }

    pub fn lifecycle(&self) -> &SubmissionLifecycle {
        &self.lifecycle
    }

    #[cfg(test)]
    pub fn field_state(&self, field: FieldId) -> FieldState {
        self.states.get(&field).copied().unwrap_or_default()
    }

    pub fn toast_visible(&self) -> bool {
        self.doc.has_class(&self.bindings.toast, TOAST_SHOW_CLASS)
    }

    /// Earliest pending timer, for sizing the event-loop poll
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    #[cfg(test)]
    pub fn is_scheduled(&self, key: TaskKey) -> bool {
        self.scheduler.is_pending(key)
    }

    /// Current values, trimmed
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::capture(&self.doc, &self.bindings)
    }

    // --- Validation -------------------------------------------------------

    fn read_input(&self, field: FieldId) -> FieldInput {
        match field {
            FieldId::QueryType => FieldInput::Choices(query_type::checked_flags(
                &self.doc,
                &self.bindings.query_type,
            )),
            FieldId::Consent => {
                FieldInput::Checked(self.doc.is_checked(&self.bindings.consent.input))
            }
            _ => FieldInput::Text(self.read_text(field)),
        }
    }

    /// Check `field` against its rule, showing or clearing its error
    pub fn validate(&mut self, field: FieldId) -> bool {
        let input = self.read_input(field);
        match ValidationRule::for_field(field).check(&input) {
            Ok(()) => {
                self.clear_error(field);
                self.states.insert(field, FieldState::Valid);
                true
            }
            Err(err) => {
                tracing::debug!("Field {field} invalid: {err}");
                self.show_error(field, &err.to_string());
                self.states.insert(field, FieldState::Invalid);
                false
            }
        }
    }

    pub fn show_error(&mut self, field: FieldId, message: &str) {
        error_display::show_error(&mut self.doc, &self.bindings, field, message);
    }

    pub fn clear_error(&mut self, field: FieldId) {
        error_display::clear_error(&mut self.doc, &self.bindings, field);
    }

    pub fn clear_all_errors(&mut self) {
        for field in FieldId::ALL {
            self.clear_error(field);
        }
    }

    /// Messages of the currently visible error regions, in document order
    pub fn shown_errors(&self) -> Vec<String> {
        FieldId::ALL
            .into_iter()
            .filter_map(|field| shown_message(&self.doc, &self.bindings, field))
            .collect()
    }

    // --- Text fields ------------------------------------------------------

    /// Replace a text field's value, as typing into it would
    pub fn edit(&mut self, field: FieldId, value: &str) {
        let Some(input) = self.bindings.input(field).cloned() else {
            return;
        };
        self.doc.set_value(&input, value);
        self.clear_error(field);
        self.states.insert(field, FieldState::Untouched);
    }

    fn focused_text_field(&self) -> Option<FieldId> {
        self.doc
            .focused()
            .and_then(|id| self.bindings.text_field_of(&id))
    }

    /// Append a character to the focused text field
    pub fn type_char(&mut self, c: char) -> bool {
        let Some(field) = self.focused_text_field() else {
            return false;
        };
        let mut value = self.read_text(field);
        value.push(c);
        self.edit(field, &value);
        true
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) -> bool {
        let Some(field) = self.focused_text_field() else {
            return false;
        };
        let mut value = self.read_text(field);
        value.pop();
        self.edit(field, &value);
        true
    }

    fn read_text(&self, field: FieldId) -> String {
        self.bindings
            .input(field)
            .map(|id| self.doc.value(id))
            .unwrap_or_default()
    }

    // --- Focus ------------------------------------------------------------

    /// Tab stops in order; the query-type group is one stop
    pub fn tab_stops(&self) -> Vec<ElementId> {
        let b = &self.bindings;
        let mut stops = vec![b.first_name.clone(), b.last_name.clone(), b.email.clone()];
        stops.extend(self.group_stop());
        stops.push(b.message.clone());
        stops.push(b.consent.input.clone());
        stops.push(b.submit.clone());
        stops
    }

    /// The checked option, else the first option
    fn group_stop(&self) -> Option<ElementId> {
        let group = &self.bindings.query_type;
        let index = query_type::checked_index(&self.doc, group).unwrap_or(0);
        group.options.get(index).map(|o| o.input.clone())
    }

    /// Move focus to `id`: the previous text field is validated on blur and
    /// a newly focused text field has its error cleared
    pub fn focus(&mut self, id: &ElementId) {
        let previous = self.doc.focused();
        if previous.as_ref() == Some(id) {
            return;
        }

        self.doc.focus(id);

        if let Some(field) = previous.and_then(|prev| self.bindings.text_field_of(&prev)) {
            self.validate(field);
        }
        if let Some(field) = self.bindings.text_field_of(id) {
            self.clear_error(field);
            self.states.insert(field, FieldState::Untouched);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus_step(GroupNav::Next);
    }

    pub fn focus_prev(&mut self) {
        self.focus_step(GroupNav::Previous);
    }

    fn focus_step(&mut self, nav: GroupNav) {
        let stops = self.tab_stops();
        let current = self.doc.focused().and_then(|focused| {
            stops.iter().position(|s| *s == focused).or_else(|| {
                // Any option of the group counts as the group stop
                self.bindings.option_index(&focused).and_then(|_| {
                    stops
                        .iter()
                        .position(|s| self.bindings.option_index(s).is_some())
                })
            })
        });
        let next = match current {
            Some(i) => nav.step(i, stops.len()),
            None if nav == GroupNav::Next => 0,
            None => stops.len().saturating_sub(1),
        };
        if let Some(id) = stops.get(next).cloned() {
            self.focus(&id);
        }
    }

    fn focus_first_error(&mut self) {
        let Some(field) = FieldId::ALL
            .into_iter()
            .find(|field| is_error_shown(&self.doc, &self.bindings, *field))
        else {
            return;
        };
        let target = match field {
            FieldId::QueryType => self.group_stop(),
            FieldId::Consent => Some(self.bindings.consent.input.clone()),
            _ => self.bindings.input(field).cloned(),
        };
        if let Some(id) = target {
            self.focus(&id);
        }
    }

    // --- Query type -------------------------------------------------------

    /// Select option `index` as activating its control would
    pub fn select_query_type(&mut self, index: usize) {
        if index >= self.bindings.query_type.options.len() {
            return;
        }
        query_type::select_option(&mut self.doc, &self.bindings.query_type, index);
        self.on_query_type_change();
    }

    /// A click anywhere in an option's container
    pub fn click_option(&mut self, index: usize) {
        let Some(input) = self
            .bindings
            .query_type
            .options
            .get(index)
            .map(|o| o.input.clone())
        else {
            return;
        };
        self.focus(&input);
        self.select_query_type(index);
    }

    /// Arrow-key navigation from the focused option at `index`.
    /// Returns false for keys the group does not handle.
    pub fn handle_group_key(&mut self, index: usize, code: KeyCode) -> bool {
        let Some(nav) = GroupNav::from_key(code) else {
            return false;
        };
        let len = self.bindings.query_type.options.len();
        if len == 0 {
            return false;
        }
        let next = nav.step(index, len);
        let input = self.bindings.query_type.options[next].input.clone();
        self.focus(&input);
        self.select_query_type(next);
        true
    }

    fn on_query_type_change(&mut self) {
        query_type::sync_selected_flags(&mut self.doc, &self.bindings.query_type);
        self.validate(FieldId::QueryType);
    }

    // --- Consent ----------------------------------------------------------

    /// Flip the checkbox as a direct toggle would
    pub fn toggle_consent(&mut self) {
        let input = &self.bindings.consent.input;
        let checked = !self.doc.is_checked(input);
        self.doc.set_checked(input, checked);
        self.validate(FieldId::Consent);
    }

    /// A click anywhere in the checkbox's container
    pub fn click_consent(&mut self) {
        let input = self.bindings.consent.input.clone();
        self.focus(&input);
        self.toggle_consent();
    }

    // --- Submission -------------------------------------------------------

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        match self.lifecycle {
            SubmissionLifecycle::Submitting { .. } => {
                tracing::debug!("Submit ignored: {}", TransitionError::AlreadySubmitting);
                return SubmitOutcome::Ignored;
            }
            SubmissionLifecycle::Succeeded => {
                self.dismiss_toast();
            }
            SubmissionLifecycle::Idle => {}
        }

        self.clear_all_errors();
        // Every rule runs so all errors surface together
        let results: Vec<bool> = FieldId::ALL
            .into_iter()
            .map(|field| self.validate(field))
            .collect();
        let failed = results.iter().filter(|ok| !**ok).count();

        if failed > 0 {
            tracing::info!("Submit rejected with {failed} invalid field(s)");
            self.focus_first_error();
            self.announce_errors(now);
            return SubmitOutcome::Invalid { failed };
        }

        match self.begin_submission(now) {
            Ok(()) => SubmitOutcome::Submitting,
            Err(err) => {
                tracing::debug!("Submit ignored: {err}");
                SubmitOutcome::Ignored
            }
        }
    }

    fn begin_submission(&mut self, now: Instant) -> Result<(), TransitionError> {
        let snapshot = self.snapshot();
        self.lifecycle.begin(snapshot)?;

        let submit = self.bindings.submit.clone();
        self.focus(&submit);
        self.doc.set_disabled(&submit, true);
        self.doc.set_text(&submit, &self.settings.submitting_label);
        self.scheduler
            .schedule(TaskKey::Submission, now, self.settings.submit_delay);

        tracing::info!("Submission started");
        Ok(())
    }

    fn complete_submission(&mut self, now: Instant) {
        let snapshot = match self.lifecycle.complete() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("Submission timer fired out of turn: {err}");
                return;
            }
        };
        tracing::debug!(
            "Submitted {}",
            serde_json::to_string(&snapshot).unwrap_or_default()
        );

        self.reset_form();
        let submit = self.bindings.submit.clone();
        self.doc.set_disabled(&submit, false);
        self.doc.set_text(&submit, &self.settings.submit_label);

        self.show_toast(now);
        self.announce(now, SUCCESS_ANNOUNCEMENT);
        tracing::info!("Submission complete");
    }

    /// Empty every field, drop all annotations and selection flags
    fn reset_form(&mut self) {
        let inputs: Vec<ElementId> = self.bindings.text_inputs().into_iter().cloned().collect();
        for input in &inputs {
            self.doc.set_value(input, "");
        }
        for option in &self.bindings.query_type.options {
            self.doc.set_checked(&option.input, false);
            self.doc.remove_class(&option.container, SELECTED_CLASS);
        }
        self.doc.set_checked(&self.bindings.consent.input, false);
        self.clear_all_errors();
        self.states.clear();
    }

    // --- Acknowledgment ---------------------------------------------------

    fn show_toast(&mut self, now: Instant) {
        if self.toast_visible() {
            self.hide_toast();
        }
        let toast = self.bindings.toast.clone();
        self.doc.add_class(&toast, TOAST_SHOW_CLASS);
        // The form was just emptied; taking focus here must not validate it
        self.doc.focus(&toast);
        self.scheduler
            .schedule(TaskKey::ToastDismiss, now, self.settings.toast_duration);
        tracing::info!("Showing success acknowledgment");
    }

    fn hide_toast(&mut self) {
        self.doc.remove_class(&self.bindings.toast, TOAST_SHOW_CLASS);
        self.scheduler.cancel(TaskKey::ToastDismiss);
        let first = self.bindings.first_name.clone();
        self.focus(&first);
    }

    /// Dismiss the acknowledgment if it is showing
    pub fn dismiss_toast(&mut self) -> bool {
        if !self.toast_visible() {
            return false;
        }
        self.hide_toast();
        if let Err(err) = self.lifecycle.acknowledge() {
            tracing::debug!("Toast dismissed without pending acknowledgment: {err}");
        }
        true
    }

    /// Escape closes the acknowledgment
    pub fn handle_escape(&mut self) -> bool {
        self.dismiss_toast()
    }

    // --- Announcements ----------------------------------------------------

    pub fn announce(&mut self, now: Instant, message: &str) {
        let root = self.bindings.live_root.clone();
        let announcement = self.announcer.announce(&mut self.doc, &root, message);
        tracing::debug!("Announcing via {}", announcement.node);
        self.scheduler.schedule(
            TaskKey::Announcement(announcement.seq),
            now,
            self.settings.announcement_ttl,
        );
    }

    fn announce_errors(&mut self, now: Instant) {
        let messages = self.shown_errors();
        if messages.is_empty() {
            return;
        }
        let count = messages.len();
        let plural = if count > 1 { "s" } else { "" };
        let text = format!("Form has {count} error{plural}: {}", messages.join(", "));
        self.announce(now, &text);
    }

    // --- Timers -----------------------------------------------------------

    /// Run every task whose deadline has passed
    pub fn tick(&mut self, now: Instant) {
        for key in self.scheduler.take_due(now) {
            match key {
                TaskKey::Submission => self.complete_submission(now),
                TaskKey::ToastDismiss => {
                    self.dismiss_toast();
                }
                TaskKey::Announcement(seq) => self.announcer.retire(&mut self.doc, seq),
            }
        }
    }
}
