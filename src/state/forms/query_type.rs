//! Query-type radio group: exclusive selection and arrow-key navigation

use crossterm::event::KeyCode;

use super::bindings::QueryTypeBinding;
use crate::state::Document;

/// Class marking the container of the checked option
pub const SELECTED_CLASS: &str = "selected";

/// Direction of a navigation key inside the group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupNav {
    Next,
    Previous,
}

impl GroupNav {
    /// Down/Right move forward, Up/Left move back; anything else is not ours
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Down | KeyCode::Right => Some(Self::Next),
            KeyCode::Up | KeyCode::Left => Some(Self::Previous),
            _ => None,
        }
    }

    /// Index reached from `current` in a group of `len` options, wrapping
    pub fn step(self, current: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Self::Next => (current + 1) % len,
            Self::Previous => (current % len + len - 1) % len,
        }
    }
}

/// Check option `index` and uncheck every other option
pub fn select_option<D: Document>(doc: &mut D, group: &QueryTypeBinding, index: usize) {
    for (i, option) in group.options.iter().enumerate() {
        doc.set_checked(&option.input, i == index);
    }
}

/// Recompute the `selected` flag on every option container
pub fn sync_selected_flags<D: Document>(doc: &mut D, group: &QueryTypeBinding) {
    for option in &group.options {
        if doc.is_checked(&option.input) {
            doc.add_class(&option.container, SELECTED_CLASS);
        } else {
            doc.remove_class(&option.container, SELECTED_CLASS);
        }
    }
}

/// Checked flag of each option, in option order
pub fn checked_flags<D: Document>(doc: &D, group: &QueryTypeBinding) -> Vec<bool> {
    group
        .options
        .iter()
        .map(|o| doc.is_checked(&o.input))
        .collect()
}

/// Index of the first checked option
pub fn checked_index<D: Document>(doc: &D, group: &QueryTypeBinding) -> Option<usize> {
    group.options.iter().position(|o| doc.is_checked(&o.input))
}

/// Value of the checked option
pub fn checked_value<D: Document>(doc: &D, group: &QueryTypeBinding) -> Option<String> {
    checked_index(doc, group).map(|i| group.options[i].value.clone())
}
