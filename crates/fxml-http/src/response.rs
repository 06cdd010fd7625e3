//! Projected documents to HTTP responses.
//!
//! A response keeps any content type the caller already set on the builder
//! and defaults to `application/xml` otherwise. Bodies that are already
//! strings pass through unchanged.

use bytes::Bytes;
use fxml_xml::{ProjectionError, ProjectionOptions, Projector, Subject};
use http::StatusCode;
use http::header::CONTENT_TYPE;
use tracing::{debug, error};

use crate::format::XML_CONTENT_TYPE;

/// Errors raised while rendering an fxml response.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The subject could not be projected.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// The response could not be built.
    #[error("failed to build HTTP response: {0}")]
    Http(#[from] http::Error),
}

/// Trait for bodies that can be sent as fxml responses.
pub trait IntoFxmlResponse {
    /// Convert this body into a `200 OK` XML response.
    ///
    /// # Errors
    ///
    /// Returns a `ResponseError` if the response cannot be constructed.
    fn into_fxml_response(self) -> Result<http::Response<Bytes>, ResponseError>;
}

impl IntoFxmlResponse for String {
    fn into_fxml_response(self) -> Result<http::Response<Bytes>, ResponseError> {
        fxml_response(http::Response::builder().status(StatusCode::OK), self)
    }
}

impl IntoFxmlResponse for &str {
    fn into_fxml_response(self) -> Result<http::Response<Bytes>, ResponseError> {
        self.to_owned().into_fxml_response()
    }
}

/// Finish a response builder with an XML body.
///
/// Sets `Content-Type: application/xml` unless the builder already has a
/// content type.
pub fn fxml_response(
    builder: http::response::Builder,
    body: impl Into<Bytes>,
) -> Result<http::Response<Bytes>, ResponseError> {
    let has_content_type = builder
        .headers_ref()
        .is_some_and(|headers| headers.contains_key(CONTENT_TYPE));
    let builder = if has_content_type {
        builder
    } else {
        builder.header(CONTENT_TYPE, XML_CONTENT_TYPE)
    };

    builder.body(body.into()).map_err(|e| {
        error!(error = %e, "failed to build fxml response");
        ResponseError::from(e)
    })
}

/// Project a subject and wrap the document in a response with the given
/// status.
///
/// # Examples
///
/// ```
/// use fxml_core::FxmlConfig;
/// use fxml_http::render_fxml;
/// use fxml_model::{Collection, Entity, PolicyRegistry};
/// use fxml_xml::{ProjectionOptions, Projector, Subject};
///
/// let registry = PolicyRegistry::new();
/// let config = FxmlConfig::default();
/// let projector = Projector::new(&registry, &config).unwrap();
/// let subject = Subject::Collection(Collection::found("Project", Vec::<&dyn Entity>::new()));
///
/// let response = render_fxml(
///     &projector,
///     &subject,
///     &ProjectionOptions::new(),
///     http::StatusCode::OK,
/// )
/// .unwrap();
/// assert_eq!(response.headers()["content-type"], "application/xml");
/// assert_eq!(response.body().as_ref(), b"<projects type=\"array\"/>");
/// ```
pub fn render_fxml(
    projector: &Projector<'_>,
    subject: &Subject<'_>,
    options: &ProjectionOptions,
    status: StatusCode,
) -> Result<http::Response<Bytes>, ResponseError> {
    let document = projector.project(subject, options)?;
    debug!(status = status.as_u16(), bytes = document.len(), "rendering fxml response");
    fxml_response(http::Response::builder().status(status), document)
}
