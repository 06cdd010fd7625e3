//! The result of finding records of one type.

use fxml_core::inflect;

use crate::entity::Entity;

/// A finder result that remembers its entity type even when empty.
///
/// An empty result still projects to a typed array tag named after the
/// type, so the client can tell "no projects" from "no data".
#[derive(Debug)]
pub enum Collection<'a> {
    /// No records were found; carries the entity type name.
    Empty(String),
    /// One or more records, in order.
    NonEmpty(Vec<&'a dyn Entity>),
}

impl<'a> Collection<'a> {
    /// Wrap a finder result for the given entity type.
    ///
    /// ```
    /// use fxml_model::{Collection, Entity};
    ///
    /// let found = Collection::found("Project", Vec::<&dyn Entity>::new());
    /// assert!(matches!(found, Collection::Empty(ref t) if t == "Project"));
    /// assert_eq!(found.tag_name(), "projects");
    /// ```
    #[must_use]
    pub fn found(type_name: impl Into<String>, records: Vec<&'a dyn Entity>) -> Self {
        if records.is_empty() {
            Self::Empty(type_name.into())
        } else {
            Self::NonEmpty(records)
        }
    }

    /// Wrap a slice of concrete records of the given entity type.
    #[must_use]
    pub fn from_slice<E: Entity>(type_name: impl Into<String>, records: &'a [E]) -> Self {
        Self::found(
            type_name,
            records.iter().map(|r| r as &dyn Entity).collect(),
        )
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty(_) => 0,
            Self::NonEmpty(records) => records.len(),
        }
    }

    /// Whether no records were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Container tag name.
    ///
    /// The tableized type name, or `records` when a non-empty collection
    /// mixes types.
    #[must_use]
    pub fn tag_name(&self) -> String {
        match self {
            Self::Empty(type_name) => inflect::tableize(type_name),
            Self::NonEmpty(records) => match records.first() {
                Some(first) if records.iter().all(|r| r.type_name() == first.type_name()) => {
                    inflect::tableize(first.type_name())
                }
                _ => "records".to_owned(),
            },
        }
    }
}
