//! An in-memory [`Entity`] implementation.

use std::fmt;

use crate::entity::{Entity, Related};
use crate::value::Value;

type ComputedFn = Box<dyn Fn(&Record) -> anyhow::Result<Value>>;

/// An association held by a [`Record`].
#[derive(Debug)]
pub enum Association {
    /// A singular association, possibly unset.
    One(Option<Box<Record>>),
    /// A plural association, possibly empty.
    Many(Vec<Record>),
}

/// A named entity with fields, associations, and computed fields.
///
/// Names are unique within each group: setting an existing name replaces its
/// value and keeps its original position.
///
/// # Examples
///
/// ```
/// use fxml_model::{Entity, Record, Value};
///
/// let project = Record::new("Project")
///     .with_attribute("id", 1)
///     .with_attribute("name", "Apollo")
///     .with_computed("name_length", |r| {
///         let len = r.attribute("name").and_then(Value::as_str).map_or(0, str::len);
///         Ok(Value::from(i64::try_from(len)?))
///     });
///
/// assert_eq!(project.attribute_names(), vec!["id", "name"]);
/// assert_eq!(project.invoke("name_length").unwrap(), Some(Value::Integer(6)));
/// ```
pub struct Record {
    type_name: String,
    attributes: Vec<(String, Value)>,
    associations: Vec<(String, Association)>,
    computed: Vec<(String, ComputedFn)>,
    labels: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record of the given type.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes: Vec::new(),
            associations: Vec::new(),
            computed: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Set an attribute, builder style.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set a singular association, builder style.
    #[must_use]
    pub fn with_one(mut self, name: impl Into<String>, record: Option<Record>) -> Self {
        upsert(
            &mut self.associations,
            name.into(),
            Association::One(record.map(Box::new)),
        );
        self
    }

    /// Set a plural association, builder style.
    #[must_use]
    pub fn with_many(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        upsert(&mut self.associations, name.into(), Association::Many(records));
        self
    }

    /// Define a computed field, builder style.
    #[must_use]
    pub fn with_computed<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record) -> anyhow::Result<Value> + 'static,
    {
        upsert(&mut self.computed, name.into(), Box::new(f) as ComputedFn);
        self
    }

    /// Override the human-readable label of a field.
    #[must_use]
    pub fn with_label(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        upsert(&mut self.labels, field.into(), label.into());
        self
    }

    /// Set or replace an attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        upsert(&mut self.attributes, name.into(), value.into());
    }

    /// Remove an attribute, returning its value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
        let idx = self.attributes.iter().position(|(n, _)| n == name)?;
        Some(self.attributes.remove(idx).1)
    }

    /// Borrow an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        lookup(&self.attributes, name)
    }
}

fn upsert<T>(entries: &mut Vec<(String, T)>, name: String, value: T) {
    match entries.iter_mut().find(|(n, _)| *n == name) {
        Some(entry) => entry.1 = value,
        None => entries.push((name, value)),
    }
}

fn lookup<'a, T>(entries: &'a [(String, T)], name: &str) -> Option<&'a T> {
    entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("type_name", &self.type_name)
            .field("attributes", &self.attributes)
            .field("associations", &self.associations)
            .field(
                "computed",
                &self.computed.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl Entity for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn read_attribute(&self, name: &str) -> Option<Value> {
        self.attribute(name).cloned()
    }

    fn association(&self, name: &str) -> anyhow::Result<Option<Related<'_>>> {
        let related = lookup(&self.associations, name).map(|assoc| match assoc {
            Association::One(record) => {
                Related::One(record.as_deref().map(|r| r as &dyn Entity))
            }
            Association::Many(records) => {
                Related::Many(records.iter().map(|r| r as &dyn Entity).collect())
            }
        });
        Ok(related)
    }

    fn invoke(&self, method: &str) -> anyhow::Result<Option<Value>> {
        lookup(&self.computed, method).map(|f| f(self)).transpose()
    }

    fn human_attribute_name(&self, field: &str) -> String {
        lookup(&self.labels, field)
            .cloned()
            .unwrap_or_else(|| fxml_core::inflect::humanize(field))
    }
}
