//! Form field identities and value objects

use std::fmt;

/// The six validated units of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    QueryType,
    Message,
    Consent,
}

impl FieldId {
    /// Validation order, which is also document order
    pub const ALL: [FieldId; 6] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::QueryType,
        FieldId::Message,
        FieldId::Consent,
    ];

    /// Free-text fields: cleared on focus/edit, validated on blur
    pub const TEXT: [FieldId; 4] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email Address",
            FieldId::QueryType => "Query Type",
            FieldId::Message => "Message",
            FieldId::Consent => "I consent to being contacted by the team",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldId::Message)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::QueryType => "queryType",
            FieldId::Message => "message",
            FieldId::Consent => "consent",
        };
        f.write_str(name)
    }
}

/// Validation status of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

/// Current value(s) of a field as read from the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    /// Checked flag of each option in a group, in option order
    Choices(Vec<bool>),
    Checked(bool),
}

impl Default for FieldInput {
    fn default() -> Self {
        FieldInput::Text(String::new())
    }
}
