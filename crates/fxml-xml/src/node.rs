//! Intermediate element tree.
//!
//! Projection first resolves everything it needs from the collaborator into
//! this tree, so collaborator failures surface before any XML is written.

/// One XML element.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub content: Content,
}

/// What an element contains.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Content {
    /// Self-closing.
    Empty,
    Text(String),
    /// Child elements; an empty list renders self-closing.
    Children(Vec<Element>),
}

impl Element {
    pub fn new(name: impl Into<String>, content: Content) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content,
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.push((key.to_owned(), value.into()));
        self
    }

    /// A `type="array"` container.
    pub fn array(name: impl Into<String>, children: Vec<Element>) -> Self {
        Self::new(name, Content::Children(children)).with_attribute("type", "array")
    }
}
