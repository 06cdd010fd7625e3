//! HTTP response shaping tests.

#[cfg(test)]
mod tests {
    use fxml_core::FxmlConfig;
    use fxml_http::{Format, IntoFxmlResponse, XML_CONTENT_TYPE, render_fxml};
    use fxml_model::{Collection, Entity, ErrorSet, Record};
    use fxml_xml::{ProjectionOptions, Projector, Subject};
    use http::StatusCode;
    use http::header::CONTENT_TYPE;

    use crate::{project, registry};

    #[test]
    fn test_should_serve_fxml_requests_as_xml() {
        let format = Format::from_path("/projects/1.fxml").expect("fxml extension");
        assert_eq!(format, Format::Fxml);

        let registry = registry();
        let config = FxmlConfig::default();
        let projector = Projector::new(&registry, &config).expect("valid config");
        let record = project(1, "Apollo");
        let response = render_fxml(
            &projector,
            &Subject::Record(&record),
            &ProjectionOptions::new(),
            StatusCode::OK,
        )
        .expect("response should build");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], format.content_type());
        let body = std::str::from_utf8(response.body()).expect("utf-8 body");
        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project>"));
    }

    #[test]
    fn test_should_serve_empty_results() {
        let registry = registry();
        let config = FxmlConfig::default();
        let projector = Projector::new(&registry, &config).expect("valid config");
        let response = render_fxml(
            &projector,
            &Subject::Collection(Collection::found("Project", Vec::<&dyn Entity>::new())),
            &ProjectionOptions::new(),
            StatusCode::OK,
        )
        .expect("response should build");

        assert_eq!(response.body().as_ref(), b"<projects type=\"array\"/>");
    }

    #[test]
    fn test_should_serve_errors_as_unprocessable() {
        let registry = registry();
        let config = FxmlConfig::default();
        let projector = Projector::new(&registry, &config).expect("valid config");
        let user = Record::new("User");
        let mut errors = ErrorSet::new(&user);
        errors.add("login", "has already been taken");

        let response = render_fxml(
            &projector,
            &Subject::Errors(&errors),
            &ProjectionOptions::new().indent(0).skip_instruct(true),
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .expect("response should build");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.body().as_ref(),
            b"<errors><error field=\"login\" message=\"Login has already been taken\"/></errors>"
        );
    }

    #[test]
    fn test_should_pass_plain_bodies_through() {
        let response = String::from("<status>ok</status>")
            .into_fxml_response()
            .expect("response should build");
        assert_eq!(response.headers()[CONTENT_TYPE], XML_CONTENT_TYPE);
        assert_eq!(response.body().as_ref(), b"<status>ok</status>");
    }
}
