//! Projection of entities, collections, and error sets into documents.

use fxml_core::{FxmlConfig, inflect};
use fxml_model::{BASE, Collection, Entity, ErrorSet, PolicyRegistry, Related, Value};
use tracing::{debug, trace};

use crate::error::ProjectionError;
use crate::naming::{sanitize_name, tag_name};
use crate::node::{Content, Element};
use crate::options::{ProjectionOptions, Selection};
use crate::serialize::{format_value, render, type_decoration};

/// Something that can be projected to a document.
#[derive(Debug)]
pub enum Subject<'a> {
    /// A single record.
    Record(&'a dyn Entity),
    /// A finder result, empty or not.
    Collection(Collection<'a>),
    /// Validation errors of a record.
    Errors(&'a ErrorSet<'a>),
    /// A plain ordered map of named values.
    Map(&'a [(String, Value)]),
    /// A plain list of values.
    Values(&'a [Value]),
}

/// Project a subject with the default engine configuration.
///
/// # Examples
///
/// ```
/// use fxml_model::{Collection, Entity, PolicyRegistry};
/// use fxml_xml::{ProjectionOptions, Subject, project};
///
/// let registry = PolicyRegistry::new();
/// let empty = Subject::Collection(Collection::found("Project", Vec::<&dyn Entity>::new()));
/// let xml = project(&registry, &empty, &ProjectionOptions::new()).unwrap();
/// assert_eq!(xml, "<projects type=\"array\"/>");
/// ```
pub fn project(
    registry: &PolicyRegistry,
    subject: &Subject<'_>,
    options: &ProjectionOptions,
) -> Result<String, ProjectionError> {
    let config = FxmlConfig::default();
    Projector::new(registry, &config)?.project(subject, options)
}

/// The projection engine.
///
/// Holds read-only references to the per-type policies and the engine
/// configuration; every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'p> {
    registry: &'p PolicyRegistry,
    config: &'p FxmlConfig,
}

impl<'p> Projector<'p> {
    /// Create a projector.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Config`] if the configuration is invalid.
    pub fn new(
        registry: &'p PolicyRegistry,
        config: &'p FxmlConfig,
    ) -> Result<Self, ProjectionError> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// Project any subject.
    pub fn project(
        &self,
        subject: &Subject<'_>,
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        match subject {
            Subject::Record(entity) => self.project_record(*entity, options),
            Subject::Collection(collection) => self.project_collection(collection, options),
            Subject::Errors(errors) => self.project_errors(errors, options),
            Subject::Map(entries) => self.project_map(entries, options),
            Subject::Values(values) => self.project_values(values, options),
        }
    }

    /// Project a single record.
    ///
    /// The root tag is the underscored type name unless `root` is given.
    pub fn project_record(
        &self,
        entity: &dyn Entity,
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        let root = self.root_tag(options, || inflect::underscore(entity.type_name()));
        debug!(type_name = entity.type_name(), root = %root, "projecting record");

        let selection = Selection::new(options, self.registry.policy_for(entity.type_name()));
        let element = self.record_element(entity, root, &selection, 1)?;
        self.render(&element, options)
    }

    /// Project a finder result.
    ///
    /// An empty result is exactly `<{tableized type} type="array"/>`, with no
    /// declaration and regardless of options. A non-empty result is a
    /// `type="array"` container with one child per record, named with the
    /// singular of the container tag.
    pub fn project_collection(
        &self,
        collection: &Collection<'_>,
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        match collection {
            Collection::Empty(type_name) => {
                let tag = collection.tag_name();
                debug!(type_name = %type_name, root = %tag, "projecting empty collection");
                render(&Element::array(tag, Vec::new()), 0, true)
            }
            Collection::NonEmpty(records) => {
                let container = options
                    .root
                    .as_deref()
                    .map_or_else(|| collection.tag_name(), sanitize_name);
                let child = self.tag(&inflect::singularize(&container));
                let container = self.tag(&container);
                debug!(root = %container, count = records.len(), "projecting collection");

                let children = records
                    .iter()
                    .map(|entity| {
                        let selection =
                            Selection::new(options, self.registry.policy_for(entity.type_name()));
                        self.record_element(*entity, child.clone(), &selection, 1)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                self.render(&Element::array(container, children), options)
            }
        }
    }

    /// Project validation errors.
    ///
    /// The root is always `errors`; `root` is ignored. One `error` element
    /// per present, non-empty message. Errors on [`BASE`] carry only
    /// `message`; field errors carry the lower-camel `field` and a `message`
    /// prefixed with the field's human label.
    pub fn project_errors(
        &self,
        errors: &ErrorSet<'_>,
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        let root = "errors";
        debug!(type_name = errors.owner().type_name(), "projecting errors");

        let mut children = Vec::new();
        for (field, messages) in errors.iter() {
            for message in messages.iter().flatten().filter(|m| !m.is_empty()) {
                let error = Element::new("error", Content::Empty);
                let error = if field == BASE {
                    error.with_attribute("message", message.as_str())
                } else {
                    let label = errors.owner().human_attribute_name(field);
                    error
                        .with_attribute("field", inflect::camelize_lower(field))
                        .with_attribute("message", format!("{label} {message}"))
                };
                children.push(error);
            }
        }

        self.render(&Element::new(root, Content::Children(children)), options)
    }

    /// Project a plain map, one typed element per entry.
    ///
    /// The root tag is `hash` unless `root` is given.
    pub fn project_map(
        &self,
        entries: &[(String, Value)],
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        let root = self.root_tag(options, || "hash".to_owned());
        debug!(root = %root, count = entries.len(), "projecting map");

        let children = entries
            .iter()
            .map(|(key, value)| self.value_element(key, value, options.skip_types))
            .collect();
        self.render(&Element::new(root, Content::Children(children)), options)
    }

    /// Project a plain list of values as a `type="array"` container.
    ///
    /// The container is the plural of the values' kind (`integers`,
    /// `strings`, ...), `records` for mixed, nil, or no values, or `root`.
    /// Children use its singular.
    pub fn project_values(
        &self,
        values: &[Value],
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        let container = options
            .root
            .as_deref()
            .map_or_else(|| values_tag(values), sanitize_name);
        let child = inflect::singularize(&container);
        debug!(root = %container, count = values.len(), "projecting values");

        let children = values
            .iter()
            .map(|value| self.value_element(&child, value, options.skip_types))
            .collect();
        let root = Element::array(self.tag(&container), children);
        self.render(&root, options)
    }

    fn render(
        &self,
        root: &Element,
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        render(
            root,
            options.indent.unwrap_or(self.config.indent),
            options.skip_instruct,
        )
    }

    fn root_tag(&self, options: &ProjectionOptions, default: impl FnOnce() -> String) -> String {
        options
            .root
            .as_deref()
            .map_or_else(|| self.tag(&default()), |root| self.tag(root))
    }

    fn tag(&self, name: &str) -> String {
        tag_name(name, self.config.tag_case)
    }

    /// Build the element for one record: attributes, then computed fields,
    /// then included associations.
    fn record_element(
        &self,
        entity: &dyn Entity,
        tag: String,
        selection: &Selection,
        depth: usize,
    ) -> Result<Element, ProjectionError> {
        if depth > self.config.max_depth {
            return Err(ProjectionError::DepthExceeded {
                type_name: entity.type_name().to_owned(),
                max_depth: self.config.max_depth,
            });
        }

        let mut children = Vec::new();

        for name in entity.attribute_names() {
            if !selection.allows_attribute(name) {
                trace!(field = name, "attribute excluded");
                continue;
            }
            if let Some(value) = entity.read_attribute(name) {
                children.push(self.value_element(name, &value, selection.skip_types));
            }
        }

        for method in &selection.methods {
            if selection.is_excluded(method) {
                trace!(method = %method, "computed field excluded");
                continue;
            }
            match entity.invoke(method)? {
                Some(value) => {
                    children.push(self.value_element(method, &value, selection.skip_types));
                }
                None => trace!(method = %method, "unknown computed field skipped"),
            }
        }

        for name in &selection.include {
            if selection.is_excluded(name) {
                trace!(association = %name, "association excluded");
                continue;
            }
            match entity.association(name)? {
                None => trace!(association = %name, "unknown association skipped"),
                Some(Related::One(None)) => {}
                Some(Related::One(Some(related))) => {
                    let tag = self.tag(name);
                    children.push(self.nested_element(related, tag, selection.skip_types, depth)?);
                }
                Some(Related::Many(related)) => {
                    let child = self.tag(&inflect::singularize(&sanitize_name(name)));
                    let elements = related
                        .into_iter()
                        .map(|r| {
                            self.nested_element(r, child.clone(), selection.skip_types, depth)
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    children.push(Element::array(self.tag(name), elements));
                }
            }
        }

        Ok(Element::new(tag, Content::Children(children)))
    }

    fn nested_element(
        &self,
        entity: &dyn Entity,
        tag: String,
        skip_types: bool,
        depth: usize,
    ) -> Result<Element, ProjectionError> {
        let policy = self.registry.policy_for(entity.type_name());
        let selection = Selection::nested(policy, skip_types);
        self.record_element(entity, tag, &selection, depth + 1)
    }

    fn value_element(&self, name: &str, value: &Value, skip_types: bool) -> Element {
        let tag = self.tag(name);
        let mut element = match format_value(value) {
            Some(text) => Element::new(tag, Content::Text(text)),
            None => Element::new(tag, Content::Empty).with_attribute("nil", "true"),
        };
        if !skip_types {
            if let Some(kind) = type_decoration(value) {
                element = element.with_attribute("type", kind);
            }
        }
        element
    }
}

/// Container tag for a plain value list.
fn values_tag(values: &[Value]) -> String {
    fn plural(value: &Value) -> Option<&'static str> {
        match value {
            Value::Nil => None,
            Value::String(_) => Some("strings"),
            Value::Integer(_) => Some("integers"),
            Value::Float(_) => Some("floats"),
            Value::Boolean(_) => Some("booleans"),
            Value::Date(_) => Some("dates"),
            Value::DateTime(_) => Some("datetimes"),
        }
    }

    match values.first().and_then(plural) {
        Some(first) if values.iter().all(|v| plural(v) == Some(first)) => first.to_owned(),
        _ => "records".to_owned(),
    }
}
