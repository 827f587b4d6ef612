//! Contact form domain layer
//!
//! - `field`: field identities, states and inputs
//! - `bindings`: logical fields mapped to page elements
//! - `rules`: pure validation rules
//! - `error_display`: inline error annotations
//! - `query_type`: exclusive option group
//! - `lifecycle`: submission state machine
//! - `snapshot`: captured form values
//! - `controller`: the form controller tying these together

mod bindings;
mod controller;
mod error_display;
mod field;
mod lifecycle;
mod query_type;
mod rules;
mod snapshot;

pub use bindings::FormBindings;
pub use controller::{ControllerSettings, FormController};
pub use error_display::ERROR_CLASS;
pub use field::FieldId;
pub use query_type::SELECTED_CLASS;

#[cfg(test)]
pub use field::FieldState;
#[cfg(test)]
pub use lifecycle::SubmissionLifecycle;
