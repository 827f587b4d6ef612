//! Mapping from logical form fields to page elements

use serde::{Deserialize, Serialize};

use super::field::FieldId;
use crate::state::ElementId;

/// One option of the query-type group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionBinding {
    /// The radio control itself
    pub input: ElementId,
    /// Clickable container that carries the `selected` flag
    pub container: ElementId,
    pub value: String,
    pub label: String,
}

/// The mutually exclusive query-type group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTypeBinding {
    /// Group container, annotated on error
    pub group: ElementId,
    pub region: ElementId,
    pub options: Vec<OptionBinding>,
}

/// The consent checkbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentBinding {
    pub input: ElementId,
    /// Visual container, annotated on error
    pub container: ElementId,
    pub region: ElementId,
}

/// Element handles the controller is wired to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormBindings {
    pub form: ElementId,
    pub first_name: ElementId,
    pub last_name: ElementId,
    pub email: ElementId,
    pub message: ElementId,
    pub query_type: QueryTypeBinding,
    pub consent: ConsentBinding,
    pub submit: ElementId,
    pub toast: ElementId,
    /// Where transient announcement nodes are inserted
    pub live_root: ElementId,
}

impl Default for FormBindings {
    fn default() -> Self {
        let option = |value: &str, label: &str| OptionBinding {
            input: ElementId::new(format!("queryType-{value}")),
            container: ElementId::new(format!("queryType-{value}-option")),
            value: value.to_string(),
            label: label.to_string(),
        };
        Self {
            form: "contactForm".into(),
            first_name: "firstName".into(),
            last_name: "lastName".into(),
            email: "email".into(),
            message: "message".into(),
            query_type: QueryTypeBinding {
                group: "queryType-fieldset".into(),
                region: "queryType-error".into(),
                options: vec![
                    option("general", "General Enquiry"),
                    option("support", "Support Request"),
                ],
            },
            consent: ConsentBinding {
                input: "consent".into(),
                container: "consent-container".into(),
                region: "consent-error".into(),
            },
            submit: "submitBtn".into(),
            toast: "successToast".into(),
            live_root: "body".into(),
        }
    }
}

impl FormBindings {
    /// Error region of a text input: `<input id>-error`
    pub fn region_for(input: &ElementId) -> ElementId {
        ElementId::new(format!("{input}-error"))
    }

    /// Text inputs in document order
    pub fn text_inputs(&self) -> [&ElementId; 4] {
        [&self.first_name, &self.last_name, &self.email, &self.message]
    }

    /// Input element of a text field
    pub fn input(&self, field: FieldId) -> Option<&ElementId> {
        match field {
            FieldId::FirstName => Some(&self.first_name),
            FieldId::LastName => Some(&self.last_name),
            FieldId::Email => Some(&self.email),
            FieldId::Message => Some(&self.message),
            FieldId::QueryType | FieldId::Consent => None,
        }
    }

    /// Element that is marked invalid when the field fails
    pub fn target(&self, field: FieldId) -> &ElementId {
        match field {
            FieldId::QueryType => &self.query_type.group,
            FieldId::Consent => &self.consent.container,
            // Text fields are annotated on the input itself
            _ => self.input(field).unwrap_or(&self.form),
        }
    }

    /// Region that carries the field's error text
    pub fn region(&self, field: FieldId) -> ElementId {
        match field {
            FieldId::QueryType => self.query_type.region.clone(),
            FieldId::Consent => self.consent.region.clone(),
            _ => Self::region_for(self.target(field)),
        }
    }

    /// Text field bound to this input, if any
    pub fn text_field_of(&self, id: &ElementId) -> Option<FieldId> {
        FieldId::TEXT
            .into_iter()
            .find(|field| self.input(*field) == Some(id))
    }

    /// Index of the query-type option whose control is `id`
    pub fn option_index(&self, id: &ElementId) -> Option<usize> {
        self.query_type.options.iter().position(|o| &o.input == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_region_derived_from_input_id() {
        let bindings = FormBindings::default();
        assert_eq!(bindings.region(FieldId::FirstName).as_str(), "firstName-error");
        assert_eq!(bindings.region(FieldId::Email).as_str(), "email-error");
        assert_eq!(bindings.region(FieldId::Message).as_str(), "message-error");
    }

    #[test]
    fn test_group_and_consent_regions_are_fixed() {
        let bindings = FormBindings::default();
        assert_eq!(bindings.region(FieldId::QueryType).as_str(), "queryType-error");
        assert_eq!(bindings.region(FieldId::Consent).as_str(), "consent-error");
    }

    #[test]
    fn test_targets_group_and_container_not_controls() {
        let bindings = FormBindings::default();
        assert_eq!(
            bindings.target(FieldId::QueryType),
            &bindings.query_type.group
        );
        assert_eq!(bindings.target(FieldId::Consent), &bindings.consent.container);
        assert_eq!(bindings.target(FieldId::LastName), &bindings.last_name);
    }

    #[test]
    fn test_text_field_of() {
        let bindings = FormBindings::default();
        assert_eq!(
            bindings.text_field_of(&"email".into()),
            Some(FieldId::Email)
        );
        assert_eq!(bindings.text_field_of(&"consent".into()), None);
    }

    #[test]
    fn test_option_lookups() {
        let bindings = FormBindings::default();
        assert_eq!(bindings.option_index(&"queryType-support".into()), Some(1));
        assert_eq!(bindings.option_index(&"queryType-general-option".into()), None);
    }

    #[test]
    fn test_bindings_round_trip_through_json() {
        let bindings = FormBindings::default();
        let json = serde_json::to_string(&bindings).unwrap();
        let parsed: FormBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bindings);
    }
}
