//! The `fxml` response format.

use std::fmt;

/// Format name clients use to ask for fxml documents.
pub const FXML_FORMAT: &str = "fxml";

/// Content type of every fxml and xml response.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Response formats served as XML.
///
/// `Fxml` is an alias: it is selected by name (path extension or format
/// parameter) only. A request announcing `application/xml` by content type
/// resolves to plain `Xml`.
///
/// # Examples
///
/// ```
/// use fxml_http::Format;
///
/// assert_eq!(Format::from_extension("FXML"), Some(Format::Fxml));
/// assert_eq!(Format::from_content_type("application/xml; charset=utf-8"), Some(Format::Xml));
/// assert_eq!(Format::Fxml.content_type(), "application/xml");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// The rich-client XML format.
    Fxml,
    /// Plain XML.
    Xml,
}

impl Format {
    /// Resolve a format from a path extension or format parameter.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case(FXML_FORMAT) {
            Some(Self::Fxml)
        } else if ext.eq_ignore_ascii_case("xml") {
            Some(Self::Xml)
        } else {
            None
        }
    }

    /// Resolve a format from a content type or accept entry.
    #[must_use]
    pub fn from_content_type(value: &str) -> Option<Self> {
        let parsed: mime::Mime = value.trim().parse().ok()?;
        let is_xml = parsed.subtype() == mime::XML
            && (parsed.type_() == mime::APPLICATION || parsed.type_() == mime::TEXT);
        is_xml.then_some(Self::Xml)
    }

    /// Resolve a format from a request path such as `/projects.fxml`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let last = path.rsplit('/').next().unwrap_or(path);
        let (_, ext) = last.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Format name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fxml => FXML_FORMAT,
            Self::Xml => "xml",
        }
    }

    /// Content type written on responses.
    #[must_use]
    pub fn content_type(self) -> &'static str {
        XML_CONTENT_TYPE
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
