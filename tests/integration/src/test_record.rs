//! Single-record projection tests.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fxml_core::{FxmlConfig, TagCase};
    use fxml_model::{PolicyRegistry, Record};
    use fxml_xml::{ProjectionOptions, Subject, format_date};

    use crate::{project, registry, render, user};

    fn compact() -> ProjectionOptions {
        ProjectionOptions::new().indent(0).skip_instruct(true)
    }

    /// Names of every element opened in a document.
    fn tag_names(xml: &str) -> Vec<&str> {
        xml.split('<')
            .skip(1)
            .filter(|s| !s.starts_with(['?', '/']))
            .filter_map(|s| s.split([' ', '>', '/']).next())
            .collect()
    }

    #[test]
    fn test_should_never_emit_policy_excluded_fields() {
        let registry = registry();
        let record = project(1, "Apollo");
        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Record(&record),
            &ProjectionOptions::new().except(["name"]),
        );

        assert!(!xml.contains("budget"));
        assert!(!xml.contains("<name>"));
        assert!(xml.contains("<id type=\"integer\">1</id>"));
    }

    #[test]
    fn test_should_apply_policies_to_included_records() {
        let registry = registry();
        let record = user("quentin", vec![project(1, "Apollo")]);
        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Record(&record),
            &compact(),
        );

        assert_eq!(
            xml,
            "<user><login>quentin</login><projects type=\"array\"><project>\
             <id type=\"integer\">1</id><name>Apollo</name>\
             <due_on type=\"date\">2008/01/02</due_on>\
             <started_at type=\"datetime\">2008/01/02 03:04:05</started_at>\
             <valid type=\"boolean\">true</valid></project></projects></user>"
        );
    }

    #[test]
    fn test_should_render_dates_deterministically() {
        let registry = registry();
        let record = project(1, "Apollo");
        let subject = Subject::Record(&record);
        let first = render(&registry, &FxmlConfig::default(), &subject, &compact());
        let second = render(&registry, &FxmlConfig::default(), &subject, &compact());

        assert_eq!(first, second);
        assert!(first.contains("<due_on type=\"date\">2008/01/02</due_on>"));

        let date = NaiveDate::from_ymd_opt(1999, 12, 31).expect("valid date");
        assert_eq!(format_date(&date), format_date(&date));
        assert_eq!(format_date(&date), "1999/12/31");
    }

    #[test]
    fn test_should_strip_question_marks_from_method_tags() {
        let registry = registry();
        let valid = project(1, "Apollo");
        let invalid = project(2, "");

        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Record(&valid),
            &compact(),
        );
        assert!(xml.contains("<valid type=\"boolean\">true</valid>"));
        assert!(!xml.contains('?'));

        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Record(&invalid),
            &compact(),
        );
        assert!(xml.contains("<valid type=\"boolean\">false</valid>"));
    }

    #[test]
    fn test_should_never_hyphenate_tags() {
        let registry = PolicyRegistry::new();
        let record = Record::new("LineItem")
            .with_attribute("unit-price", 3)
            .with_attribute("first_name", "Ada")
            .with_many(
                "sub-items",
                vec![Record::new("LineItem").with_attribute("shipped-on", "today")],
            );
        let options = compact().include(["sub-items"]);

        for tag_case in [TagCase::Underscore, TagCase::LowerCamel] {
            let config = FxmlConfig::builder().tag_case(tag_case).build();
            let xml = render(&registry, &config, &Subject::Record(&record), &options);
            let tags = tag_names(&xml);
            assert!(!tags.is_empty());
            assert!(tags.iter().all(|t| !t.contains('-')), "hyphenated tag in {xml}");
        }

        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Record(&record),
            &options,
        );
        assert_eq!(
            tag_names(&xml),
            vec!["line_item", "unit_price", "first_name", "sub_items", "sub_item", "shipped_on"]
        );
    }

    #[test]
    fn test_should_hide_sensitive_fields_everywhere() {
        let registry = registry();
        let record = user("aaron", Vec::new());
        let xml = render(
            &registry,
            &FxmlConfig::default(),
            &Subject::Record(&record),
            &ProjectionOptions::new(),
        );

        for field in fxml_core::SENSITIVE_FIELDS {
            assert!(!xml.contains(field), "{field} leaked into {xml}");
        }
        assert!(xml.contains("<projects type=\"array\"/>"));
    }
}
