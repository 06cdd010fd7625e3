//! Per-call projection options and their merge with type policies.

use fxml_core::SENSITIVE_FIELDS;
use fxml_model::SerializationPolicy;

use crate::naming::sanitize_name;

/// Per-call document shaping.
///
/// Name lists are merged with the projected type's
/// [`SerializationPolicy`]; they never replace it.
///
/// # Examples
///
/// ```
/// use fxml_xml::ProjectionOptions;
///
/// let options = ProjectionOptions::new()
///     .except(["notes"])
///     .include(["tasks"])
///     .methods(["overdue?"])
///     .skip_instruct(true);
/// assert_eq!(options.except, vec!["notes"]);
/// assert!(options.skip_instruct);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Fields to suppress, in addition to policy and sensitive defaults.
    pub except: Vec<String>,
    /// When non-empty, the only attributes written.
    pub only: Vec<String>,
    /// Associations to expand inline, in addition to policy defaults.
    pub include: Vec<String>,
    /// Computed fields to invoke and write, in addition to policy defaults.
    pub methods: Vec<String>,
    /// Root tag override.
    pub root: Option<String>,
    /// Indentation override; the engine default applies when unset.
    pub indent: Option<usize>,
    /// Omit the XML declaration.
    pub skip_instruct: bool,
    /// Omit `type` decorations.
    pub skip_types: bool,
}

impl ProjectionOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add fields to suppress.
    #[must_use]
    pub fn except<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except.extend(names.into_iter().map(Into::into));
        self
    }

    /// Restrict attributes to these names.
    #[must_use]
    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add associations to expand.
    #[must_use]
    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add computed fields to invoke.
    #[must_use]
    pub fn methods<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(names.into_iter().map(Into::into));
        self
    }

    /// Override the root tag.
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Override the indentation width.
    #[must_use]
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Omit the XML declaration.
    #[must_use]
    pub fn skip_instruct(mut self, skip: bool) -> Self {
        self.skip_instruct = skip;
        self
    }

    /// Omit `type` decorations.
    #[must_use]
    pub fn skip_types(mut self, skip: bool) -> Self {
        self.skip_types = skip;
        self
    }
}

/// The effective field selection for one entity.
///
/// `except` is the union of caller, policy, and sensitive names; `include`
/// and `methods` are the caller's names followed by the policy's, without
/// duplicates. Names are compared after sanitizing but kept raw, since
/// computed fields are invoked by their raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selection {
    pub except: Vec<String>,
    pub only: Vec<String>,
    pub include: Vec<String>,
    pub methods: Vec<String>,
    pub skip_types: bool,
}

impl Selection {
    /// Selection for the projected top-level entity.
    pub fn new(options: &ProjectionOptions, policy: &SerializationPolicy) -> Self {
        let mut except = merged(&[options.except.as_slice(), policy.except.as_slice()]);
        for field in SENSITIVE_FIELDS {
            push_unique(&mut except, field);
        }

        Self {
            except,
            only: merged(&[options.only.as_slice()]),
            include: merged(&[options.include.as_slice(), policy.include.as_slice()]),
            methods: merged(&[options.methods.as_slice(), policy.methods.as_slice()]),
            skip_types: options.skip_types,
        }
    }

    /// Selection for an entity reached through an included association.
    ///
    /// Only the entity's own policy and the sensitive defaults apply.
    pub fn nested(policy: &SerializationPolicy, skip_types: bool) -> Self {
        Self::new(&ProjectionOptions::new().skip_types(skip_types), policy)
    }

    /// Whether a field, method, or association name is suppressed.
    pub fn is_excluded(&self, name: &str) -> bool {
        contains_sanitized(&self.except, name)
    }

    /// Whether an attribute is written.
    pub fn allows_attribute(&self, name: &str) -> bool {
        if self.is_excluded(name) {
            return false;
        }
        self.only.is_empty() || contains_sanitized(&self.only, name)
    }
}

fn contains_sanitized(names: &[String], name: &str) -> bool {
    let key = sanitize_name(name);
    names.iter().any(|n| sanitize_name(n) == key)
}

fn push_unique(out: &mut Vec<String>, name: &str) {
    if !contains_sanitized(out, name) {
        out.push(name.to_owned());
    }
}

/// Ordered union of name lists.
fn merged(lists: &[&[String]]) -> Vec<String> {
    let mut out = Vec::new();
    for name in lists.iter().flat_map(|list| list.iter()) {
        push_unique(&mut out, name);
    }
    out
}
