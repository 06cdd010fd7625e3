//! Validation error projection tests.

#[cfg(test)]
mod tests {
    use fxml_core::FxmlConfig;
    use fxml_model::{ErrorSet, Record};
    use fxml_xml::{ProjectionOptions, Subject};

    use crate::{registry, render};

    #[test]
    fn test_should_render_base_and_field_errors() {
        let registry = registry();
        let user = Record::new("User");
        let mut errors = ErrorSet::new(&user);
        errors.add_to_base("is invalid");
        errors.add("email", "can't be blank");

        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Errors(&errors),
            &ProjectionOptions::new(),
        );
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <errors>\n  \
             <error message=\"is invalid\"/>\n  \
             <error field=\"email\" message=\"Email can't be blank\"/>\n\
             </errors>"
        );
    }

    #[test]
    fn test_should_skip_missing_messages_and_keep_errors_root() {
        let registry = registry();
        let user = Record::new("User").with_label("password_confirmation", "Confirmation");
        let mut errors = ErrorSet::new(&user);
        errors.push("first_name".to_owned(), None);
        errors.add("first_name", "is too \"short\"");
        errors.add("password_confirmation", "doesn't match");
        errors.add("account_id", "is required");

        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Errors(&errors),
            &ProjectionOptions::new().root("failures").indent(0).skip_instruct(true),
        );
        assert_eq!(
            xml,
            "<errors>\
             <error field=\"firstName\" message=\"First name is too &quot;short&quot;\"/>\
             <error field=\"passwordConfirmation\" message=\"Confirmation doesn't match\"/>\
             <error field=\"accountId\" message=\"Account is required\"/>\
             </errors>"
        );
    }

    #[test]
    fn test_should_render_empty_error_set() {
        let registry = registry();
        let user = Record::new("User");
        let errors = ErrorSet::new(&user);
        assert!(errors.is_empty());

        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Errors(&errors),
            &ProjectionOptions::new().skip_instruct(true),
        );
        assert_eq!(xml, "<errors/>");
    }
}
