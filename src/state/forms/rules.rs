//! Validation rules for the contact form fields
//!
//! Rules are pure: they look at a field's current input and either accept it
//! or return the error whose `Display` text is shown to the user.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::field::{FieldId, FieldInput};

/// `local@domain.tld` with no whitespace and at least one dot after the `@`
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select a query type")]
    MissingQueryType,
    #[error("To submit this form, please consent to being contacted")]
    MissingConsent,
}

/// The rule a field is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Non-empty after trimming
    Required,
    /// Required, then shaped like an email address
    Email,
    /// Exactly one option of a group selected
    ExactlyOne,
    /// Checkbox checked
    Checked,
}

impl ValidationRule {
    pub fn for_field(field: FieldId) -> Self {
        match field {
            FieldId::FirstName | FieldId::LastName | FieldId::Message => Self::Required,
            FieldId::Email => Self::Email,
            FieldId::QueryType => Self::ExactlyOne,
            FieldId::Consent => Self::Checked,
        }
    }

    /// Check an input against this rule.
    ///
    /// An input of the wrong shape for the rule is treated as empty.
    pub fn check(self, input: &FieldInput) -> Result<(), ValidationError> {
        match (self, input) {
            (Self::Required, FieldInput::Text(value)) => required(value),
            (Self::Email, FieldInput::Text(value)) => email(value),
            (Self::ExactlyOne, FieldInput::Choices(checked)) => exactly_one(checked),
            (Self::Checked, FieldInput::Checked(checked)) => consent(*checked),
            (Self::Required | Self::Email, _) => Err(ValidationError::Required),
            (Self::ExactlyOne, _) => Err(ValidationError::MissingQueryType),
            (Self::Checked, _) => Err(ValidationError::MissingConsent),
        }
    }
}

pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if !EMAIL_REGEX.is_match(value.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn exactly_one(checked: &[bool]) -> Result<(), ValidationError> {
    match checked.iter().filter(|c| **c).count() {
        1 => Ok(()),
        _ => Err(ValidationError::MissingQueryType),
    }
}

pub fn consent(checked: bool) -> Result<(), ValidationError> {
    if checked {
        Ok(())
    } else {
        Err(ValidationError::MissingConsent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod required_rule {
        use super::*;

        #[test]
        fn test_blank_fails() {
            assert_eq!(required(""), Err(ValidationError::Required));
        }

        #[test]
        fn test_whitespace_only_fails() {
            assert_eq!(required("   \t\n"), Err(ValidationError::Required));
        }

        #[test]
        fn test_text_passes() {
            assert_eq!(required(" Ada "), Ok(()));
        }

        #[test]
        fn test_message_text() {
            assert_eq!(
                ValidationError::Required.to_string(),
                "This field is required"
            );
        }
    }

    mod email_rule {
        use super::*;

        #[test]
        fn test_simple_address_passes() {
            assert_eq!(email("a@b.co"), Ok(()));
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert_eq!(email("  ada@example.com  "), Ok(()));
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(email(""), Err(ValidationError::Required));
            assert_eq!(email("   "), Err(ValidationError::Required));
        }

        #[test]
        fn test_missing_tld_is_invalid() {
            assert_eq!(email("a@b"), Err(ValidationError::InvalidEmail));
        }

        #[test]
        fn test_inner_whitespace_is_invalid() {
            assert_eq!(email("a b@c.com"), Err(ValidationError::InvalidEmail));
            assert_eq!(email("a@ c.com"), Err(ValidationError::InvalidEmail));
        }

        #[test]
        fn test_double_at_is_invalid() {
            assert_eq!(email("a@@b.com"), Err(ValidationError::InvalidEmail));
        }

        #[test]
        fn test_message_text() {
            assert_eq!(
                ValidationError::InvalidEmail.to_string(),
                "Please enter a valid email address"
            );
        }
    }

    mod group_rule {
        use super::*;

        #[test]
        fn test_no_selection_fails() {
            assert_eq!(
                exactly_one(&[false, false]),
                Err(ValidationError::MissingQueryType)
            );
        }

        #[test]
        fn test_either_single_selection_passes() {
            assert_eq!(exactly_one(&[true, false]), Ok(()));
            assert_eq!(exactly_one(&[false, true]), Ok(()));
        }

        #[test]
        fn test_two_selections_fail() {
            assert_eq!(
                exactly_one(&[true, true]),
                Err(ValidationError::MissingQueryType)
            );
        }

        #[test]
        fn test_empty_group_fails() {
            assert_eq!(exactly_one(&[]), Err(ValidationError::MissingQueryType));
        }
    }

    mod consent_rule {
        use super::*;

        #[test]
        fn test_unchecked_fails() {
            assert_eq!(consent(false), Err(ValidationError::MissingConsent));
            assert_eq!(
                ValidationError::MissingConsent.to_string(),
                "To submit this form, please consent to being contacted"
            );
        }

        #[test]
        fn test_checked_passes() {
            assert_eq!(consent(true), Ok(()));
        }
    }

    mod validation_rule {
        use super::*;

        #[test]
        fn test_for_field() {
            assert_eq!(
                ValidationRule::for_field(FieldId::FirstName),
                ValidationRule::Required
            );
            assert_eq!(
                ValidationRule::for_field(FieldId::Email),
                ValidationRule::Email
            );
            assert_eq!(
                ValidationRule::for_field(FieldId::QueryType),
                ValidationRule::ExactlyOne
            );
            assert_eq!(
                ValidationRule::for_field(FieldId::Consent),
                ValidationRule::Checked
            );
        }

        #[test]
        fn test_check_dispatches_on_input() {
            let rule = ValidationRule::Email;
            assert_eq!(
                rule.check(&FieldInput::Text("a@b".into())),
                Err(ValidationError::InvalidEmail)
            );
            assert_eq!(
                ValidationRule::ExactlyOne.check(&FieldInput::Choices(vec![false, true])),
                Ok(())
            );
        }

        #[test]
        fn test_mismatched_input_is_treated_as_empty() {
            assert_eq!(
                ValidationRule::Checked.check(&FieldInput::Text("yes".into())),
                Err(ValidationError::MissingConsent)
            );
            assert_eq!(
                ValidationRule::Required.check(&FieldInput::Checked(true)),
                Err(ValidationError::Required)
            );
        }
    }
}
