//! The collaborator seam between the projection engine and a model layer.

use std::fmt;

use fxml_core::inflect;

use crate::value::Value;

/// A record as seen by the projection engine.
///
/// Implementations are supplied by the model layer. The engine only reads
/// through this trait, at serialization time, and never caches what it reads:
/// computed fields are invoked fresh on every projection.
pub trait Entity: fmt::Debug {
    /// Upper-camel type name, e.g. `ProjectTask`.
    fn type_name(&self) -> &str;

    /// Attribute names in output order.
    fn attribute_names(&self) -> Vec<&str>;

    /// Read one attribute. `None` means the attribute does not exist.
    fn read_attribute(&self, name: &str) -> Option<Value>;

    /// Resolve a named association.
    ///
    /// `Ok(None)` means the association does not exist and is skipped. Errors
    /// are propagated to the caller of the projection unchanged.
    fn association(&self, name: &str) -> anyhow::Result<Option<Related<'_>>>;

    /// Invoke a named computed field.
    ///
    /// `Ok(None)` means no such computed field exists and it is skipped.
    fn invoke(&self, method: &str) -> anyhow::Result<Option<Value>>;

    /// Human-readable label for a field, used in error messages.
    fn human_attribute_name(&self, field: &str) -> String {
        inflect::humanize(field)
    }
}

/// A resolved association.
#[derive(Debug)]
pub enum Related<'a> {
    /// A singular association, possibly unset.
    One(Option<&'a dyn Entity>),
    /// A plural association, possibly empty.
    Many(Vec<&'a dyn Entity>),
}
