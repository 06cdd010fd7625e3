//! Validation failures attached to a record.

use crate::entity::Entity;

/// Sentinel field key for errors about the record as a whole.
pub const BASE: &str = "base";

/// Validation messages keyed by field name or [`BASE`].
///
/// Fields keep their insertion order and messages keep theirs. Message slots
/// may be absent (`None`); absent slots are skipped when projected.
#[derive(Debug)]
pub struct ErrorSet<'r> {
    owner: &'r dyn Entity,
    entries: Vec<(String, Vec<Option<String>>)>,
}

impl<'r> ErrorSet<'r> {
    /// Create an empty error set for the given record.
    #[must_use]
    pub fn new(owner: &'r dyn Entity) -> Self {
        Self {
            owner,
            entries: Vec::new(),
        }
    }

    /// The record these errors belong to.
    #[must_use]
    pub fn owner(&self) -> &'r dyn Entity {
        self.owner
    }

    /// Add a message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field.into(), Some(message.into()));
    }

    /// Add a message about the record as a whole.
    pub fn add_to_base(&mut self, message: impl Into<String>) {
        self.push(BASE.to_owned(), Some(message.into()));
    }

    /// Add a possibly absent message slot for a field.
    pub fn push(&mut self, field: String, message: Option<String>) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    /// Messages recorded for a field, including absent slots.
    #[must_use]
    pub fn on(&self, field: &str) -> &[Option<String>] {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map_or(&[][..], |(_, messages)| messages.as_slice())
    }

    /// Iterate fields and their message slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<String>])> {
        self.entries
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Number of present messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, messages)| messages)
            .filter(|m| m.is_some())
            .count()
    }

    /// Whether there are no present messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
