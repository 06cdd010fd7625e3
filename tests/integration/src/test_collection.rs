//! Finder result projection tests.

#[cfg(test)]
mod tests {
    use fxml_core::FxmlConfig;
    use fxml_model::{Collection, Entity, Record};
    use fxml_xml::{ProjectionOptions, Subject};

    use crate::{project, registry, render};

    #[test]
    fn test_should_render_empty_result_as_bare_array() {
        let registry = registry();
        let options = ProjectionOptions::new().root("items").include(["tasks"]).indent(4);
        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Collection(Collection::found("Project", Vec::<&dyn Entity>::new())),
            &options,
        );
        assert_eq!(xml, "<projects type=\"array\"/>");
    }

    #[test]
    fn test_should_render_one_child_per_record() {
        let registry = registry();
        let records = vec![project(1, "Apollo"), project(2, "Gemini")];
        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Collection(Collection::from_slice("Project", &records)),
            &ProjectionOptions::new(),
        );

        assert!(xml.starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<projects type=\"array\">"
        ));
        assert_eq!(xml.matches("<project>").count(), 2);
        assert!(xml.contains("<name>Apollo</name>"));
        assert!(xml.contains("<name>Gemini</name>"));
        assert!(!xml.contains("budget"));
        assert!(xml.ends_with("</projects>"));
    }

    #[test]
    fn test_should_name_children_after_root_override() {
        let registry = registry();
        let records = vec![Record::new("Project").with_attribute("name", "Apollo")];
        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Collection(Collection::from_slice("Project", &records)),
            &ProjectionOptions::new().root("items").indent(0).skip_instruct(true),
        );
        assert_eq!(
            xml,
            "<items type=\"array\"><item><name>Apollo</name></item></items>"
        );
    }

    #[test]
    fn test_should_use_generic_container_for_mixed_types() {
        let registry = registry();
        let project = Record::new("Project").with_attribute("name", "Apollo");
        let task = Record::new("Task").with_attribute("title", "Launch");
        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Collection(Collection::found("Project", vec![&project as &dyn Entity, &task])),
            &ProjectionOptions::new().indent(0).skip_instruct(true),
        );
        assert_eq!(
            xml,
            "<records type=\"array\"><record><name>Apollo</name></record>\
             <record><title>Launch</title></record></records>"
        );
    }
}
