//! Point-in-time copy of the form's values

use serde::Serialize;

use super::bindings::FormBindings;
use super::query_type::checked_value;
use crate::state::{Document, ElementId};

/// Trimmed field values captured when a submission starts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub query_type: Option<String>,
    pub message: String,
    pub consent: bool,
}

impl FormSnapshot {
    pub fn capture<D: Document>(doc: &D, bindings: &FormBindings) -> Self {
        let text = |id: &ElementId| doc.value(id).trim().to_string();
        Self {
            first_name: text(&bindings.first_name),
            last_name: text(&bindings.last_name),
            email: text(&bindings.email),
            query_type: checked_value(doc, &bindings.query_type),
            message: text(&bindings.message),
            consent: doc.is_checked(&bindings.consent.input),
        }
    }
}
