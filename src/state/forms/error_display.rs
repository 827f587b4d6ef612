//! Inline error annotations for form fields

use super::bindings::FormBindings;
use super::field::FieldId;
use crate::state::Document;

/// Class marking a field's target as invalid
pub const ERROR_CLASS: &str = "error";
/// Class making an error region visible
pub const SHOW_CLASS: &str = "show";
pub const ARIA_LIVE: &str = "aria-live";
pub const ARIA_DESCRIBEDBY: &str = "aria-describedby";

/// Mark the field invalid and write `message` into its live region
pub fn show_error<D: Document>(
    doc: &mut D,
    bindings: &FormBindings,
    field: FieldId,
    message: &str,
) {
    doc.add_class(bindings.target(field), ERROR_CLASS);

    let region = bindings.region(field);
    if doc.contains(&region) {
        doc.set_text(&region, message);
        doc.add_class(&region, SHOW_CLASS);
        doc.set_attribute(&region, ARIA_LIVE, "polite");
    }
}

/// Remove the field's error annotation. Clearing a clear field does nothing.
pub fn clear_error<D: Document>(doc: &mut D, bindings: &FormBindings, field: FieldId) {
    if !is_error_shown(doc, bindings, field) {
        return;
    }

    doc.remove_class(bindings.target(field), ERROR_CLASS);

    let region = bindings.region(field);
    if doc.contains(&region) {
        doc.remove_class(&region, SHOW_CLASS);
        doc.remove_attribute(&region, ARIA_LIVE);
        doc.set_text(&region, "");
    }
}

/// Whether either half of the annotation is present
pub fn is_error_shown<D: Document>(doc: &D, bindings: &FormBindings, field: FieldId) -> bool {
    doc.has_class(bindings.target(field), ERROR_CLASS)
        || doc.has_class(&bindings.region(field), SHOW_CLASS)
}

/// Text of the field's visible error region, if shown
pub fn shown_message<D: Document>(
    doc: &D,
    bindings: &FormBindings,
    field: FieldId,
) -> Option<String> {
    let region = bindings.region(field);
    doc.has_class(&region, SHOW_CLASS).then(|| doc.text(&region))
}

/// Point every field's target at its error region
pub fn describe_fields<D: Document>(doc: &mut D, bindings: &FormBindings) {
    for field in FieldId::ALL {
        let target = match field {
            // The checkbox control is described, not its container
            FieldId::Consent => &bindings.consent.input,
            _ => bindings.target(field),
        };
        let region = bindings.region(field);
        doc.set_attribute(target, ARIA_DESCRIBEDBY, region.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MockDocument, Page};

    fn setup() -> (Page, FormBindings) {
        let bindings = FormBindings::default();
        (Page::from_bindings(&bindings), bindings)
    }

    mod show {
        use super::*;

        #[test]
        fn test_show_error_marks_target_and_region() {
            let (mut page, bindings) = setup();
            show_error(&mut page, &bindings, FieldId::Email, "Please enter a valid email address");

            assert!(page.has_class(&bindings.email, ERROR_CLASS));
            let region = bindings.region(FieldId::Email);
            assert!(page.has_class(&region, SHOW_CLASS));
            assert_eq!(page.attribute(&region, ARIA_LIVE).as_deref(), Some("polite"));
            assert_eq!(page.text(&region), "Please enter a valid email address");
        }

        #[test]
        fn test_show_error_replaces_previous_message() {
            let (mut page, bindings) = setup();
            show_error(&mut page, &bindings, FieldId::Email, "This field is required");
            show_error(&mut page, &bindings, FieldId::Email, "Please enter a valid email address");
            assert_eq!(
                shown_message(&page, &bindings, FieldId::Email).as_deref(),
                Some("Please enter a valid email address")
            );
        }

        #[test]
        fn test_group_error_annotates_container() {
            let (mut page, bindings) = setup();
            show_error(&mut page, &bindings, FieldId::QueryType, "Please select a query type");
            assert!(page.has_class(&bindings.query_type.group, ERROR_CLASS));
            for option in &bindings.query_type.options {
                assert!(!page.has_class(&option.input, ERROR_CLASS));
            }
        }

        #[test]
        fn test_consent_error_annotates_container() {
            let (mut page, bindings) = setup();
            show_error(&mut page, &bindings, FieldId::Consent, "consent");
            assert!(page.has_class(&bindings.consent.container, ERROR_CLASS));
            assert!(!page.has_class(&bindings.consent.input, ERROR_CLASS));
        }

        #[test]
        fn test_missing_region_still_marks_target() {
            let (mut page, bindings) = setup();
            page.remove_element(&bindings.region(FieldId::FirstName));
            show_error(&mut page, &bindings, FieldId::FirstName, "This field is required");
            assert!(page.has_class(&bindings.first_name, ERROR_CLASS));
            assert_eq!(shown_message(&page, &bindings, FieldId::FirstName), None);
        }
    }

    mod clear {
        use super::*;

        #[test]
        fn test_clear_error_reverses_show() {
            let (mut page, bindings) = setup();
            show_error(&mut page, &bindings, FieldId::Message, "This field is required");
            clear_error(&mut page, &bindings, FieldId::Message);

            let region = bindings.region(FieldId::Message);
            assert!(!page.has_class(&bindings.message, ERROR_CLASS));
            assert!(!page.has_class(&region, SHOW_CLASS));
            assert_eq!(page.attribute(&region, ARIA_LIVE), None);
            assert_eq!(page.text(&region), "");
        }

        #[test]
        fn test_clear_twice_matches_clear_once() {
            let (mut page, bindings) = setup();
            show_error(&mut page, &bindings, FieldId::Consent, "consent");
            clear_error(&mut page, &bindings, FieldId::Consent);
            let once = page.element(&bindings.consent.region).cloned();
            clear_error(&mut page, &bindings, FieldId::Consent);
            assert_eq!(page.element(&bindings.consent.region).cloned(), once);
        }

        #[test]
        fn test_clear_on_clear_field_touches_nothing() {
            let bindings = FormBindings::default();
            let mut doc = MockDocument::new();
            doc.expect_has_class().return_const(false);
            doc.expect_remove_class().never();
            doc.expect_remove_attribute().never();
            doc.expect_set_text().never();

            for field in FieldId::ALL {
                clear_error(&mut doc, &bindings, field);
            }
        }

        #[test]
        fn test_clear_only_touches_its_own_field() {
            let (mut page, bindings) = setup();
            show_error(&mut page, &bindings, FieldId::FirstName, "This field is required");
            show_error(&mut page, &bindings, FieldId::LastName, "This field is required");
            clear_error(&mut page, &bindings, FieldId::FirstName);
            assert!(!is_error_shown(&page, &bindings, FieldId::FirstName));
            assert!(is_error_shown(&page, &bindings, FieldId::LastName));
        }
    }

    mod describe {
        use super::*;

        #[test]
        fn test_describe_fields_links_regions() {
            let (mut page, bindings) = setup();
            describe_fields(&mut page, &bindings);
            assert_eq!(
                page.attribute(&bindings.first_name, ARIA_DESCRIBEDBY).as_deref(),
                Some("firstName-error")
            );
            assert_eq!(
                page.attribute(&bindings.query_type.group, ARIA_DESCRIBEDBY)
                    .as_deref(),
                Some("queryType-error")
            );
            assert_eq!(
                page.attribute(&bindings.consent.input, ARIA_DESCRIBEDBY).as_deref(),
                Some("consent-error")
            );
        }
    }
}
