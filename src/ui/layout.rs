//! Screen layout for the contact form and mouse hit-testing
//!
//! The same `FormLayout` is used to draw and to map clicks back to form
//! elements, so the two can never disagree.
//!
//! ```text
//! ┌ Contact Us ───────────────────────────────┐
//! │ [First Name        ] [Last Name         ] │
//! │ [Email Address                          ] │
//! │ [ (•) General Enquiry  ( ) Support ...  ] │  query-type group
//! │ [Message                                ] │
//! │ [ [x] I consent ...                     ] │  consent container
//! │ [ Submit ]                                │
//! │ help                                      │
//! └───────────────────────────────────────────┘
//! status / announcements
//! ```

use crate::state::FieldId;
use crate::ui::components::{toast_area, ToastConfig, BUTTON_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};

/// Height of a bordered single-line field
pub const FIELD_HEIGHT: u16 = 3;
/// Minimum height of the message box
pub const MESSAGE_MIN_HEIGHT: u16 = 5;
/// Width of the submit button
pub const SUBMIT_WIDTH: u16 = 20;

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A free-text field
    Field(FieldId),
    /// Container of query-type option `n`
    QueryOption(usize),
    /// The consent container
    Consent,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    /// Outer bordered form area
    pub form: Rect,
    pub first_name: Rect,
    pub last_name: Rect,
    pub email: Rect,
    /// Group container, options sit on its inner row
    pub query_group: Rect,
    pub options: Vec<Rect>,
    pub message: Rect,
    pub consent: Rect,
    pub submit: Rect,
    pub help: Rect,
    pub status: Rect,
}

impl FormLayout {
    pub fn new(area: Rect, option_count: usize) -> Self {
        // Reserve bottom line for status bar
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let form = outer[0];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),    // Names
                Constraint::Length(FIELD_HEIGHT),    // Email
                Constraint::Length(FIELD_HEIGHT),    // Query type
                Constraint::Min(MESSAGE_MIN_HEIGHT), // Message
                Constraint::Length(FIELD_HEIGHT),    // Consent
                Constraint::Length(BUTTON_HEIGHT),   // Submit
                Constraint::Length(1),               // Help text
            ])
            .margin(1)
            .split(form);

        let names = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let query_inner = Block::default().borders(Borders::ALL).inner(rows[2]);
        let options = if option_count == 0 {
            Vec::new()
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, option_count as u32); option_count])
                .split(query_inner)
                .to_vec()
        };

        let submit_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SUBMIT_WIDTH), Constraint::Min(0)])
            .split(rows[5]);

        Self {
            form,
            first_name: names[0],
            last_name: names[1],
            email: rows[1],
            query_group: rows[2],
            options,
            message: rows[3],
            consent: rows[4],
            submit: submit_row[0],
            help: rows[6],
            status: outer[1],
        }
    }

    /// Area of a free-text field
    pub fn text_field(&self, field: FieldId) -> Option<Rect> {
        match field {
            FieldId::FirstName => Some(self.first_name),
            FieldId::LastName => Some(self.last_name),
            FieldId::Email => Some(self.email),
            FieldId::Message => Some(self.message),
            FieldId::QueryType | FieldId::Consent => None,
        }
    }

    /// Where the success toast is drawn
    pub fn toast(&self) -> Rect {
        toast_area(self.form, &ToastConfig::default())
    }

    /// Map a screen cell to the form element under it
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);

        if let Some(index) = self.options.iter().position(|r| r.contains(pos)) {
            return Some(Hit::QueryOption(index));
        }
        if let Some(field) = FieldId::TEXT
            .into_iter()
            .find(|f| self.text_field(*f).is_some_and(|r| r.contains(pos)))
        {
            return Some(Hit::Field(field));
        }
        if self.consent.contains(pos) {
            return Some(Hit::Consent);
        }
        if self.submit.contains(pos) {
            return Some(Hit::Submit);
        }
        None
    }
}
