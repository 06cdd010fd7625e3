//! fxml format alias and HTTP response shaping.
//!
//! Rich clients request fxml documents through the `fxml` format (for
//! example `/projects.fxml`), which is an alias for `application/xml`. This
//! crate resolves that format and wraps projected documents in
//! [`http::Response`] values; writing them to the wire is left to the
//! caller's server.

pub mod format;
pub mod response;

pub use format::{FXML_FORMAT, Format, XML_CONTENT_TYPE};
pub use response::{IntoFxmlResponse, ResponseError, fxml_response, render_fxml};
