//! Projection error types.

use std::io;
use std::string::FromUtf8Error;

/// Errors that can occur while projecting an entity to XML.
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    /// The collaborator failed while resolving an association or invoking a
    /// computed field. The original error is kept unchanged.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),

    /// Included associations nested deeper than the configured limit.
    #[error("association nesting exceeds {max_depth} levels at type {type_name}")]
    DepthExceeded {
        /// Type of the entity that would have exceeded the limit.
        type_name: String,
        /// Configured maximum depth.
        max_depth: usize,
    },

    /// Invalid engine configuration.
    #[error(transparent)]
    Config(#[from] fxml_core::FxmlError),

    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The written document was not valid UTF-8.
    #[error("invalid UTF-8 in XML output: {0}")]
    Utf8(#[from] FromUtf8Error),
}
