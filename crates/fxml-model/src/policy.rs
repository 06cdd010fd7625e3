//! Per-type serialization defaults.
//!
//! Every entity type may declare, once, which fields it always hides and
//! which associations and computed fields it always adds to its projected
//! documents. Declarations live in a [`PolicyRegistry`] that is populated at
//! startup and only read afterwards.

use std::collections::HashMap;

use fxml_core::{FxmlError, FxmlResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

static EMPTY_POLICY: SerializationPolicy = SerializationPolicy {
    except: Vec::new(),
    include: Vec::new(),
    methods: Vec::new(),
};

/// Serialization defaults shared by all instances of one entity type.
///
/// Each list is an ordered set: adding a name twice keeps the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationPolicy {
    /// Fields never written.
    pub except: Vec<String>,
    /// Associations always expanded inline.
    pub include: Vec<String>,
    /// Computed fields always invoked and written.
    pub methods: Vec<String>,
}

impl SerializationPolicy {
    /// Create an empty policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add excluded fields.
    #[must_use]
    pub fn with_except<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.except, names);
        self
    }

    /// Add default associations.
    #[must_use]
    pub fn with_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.include, names);
        self
    }

    /// Add default computed fields.
    #[must_use]
    pub fn with_methods<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.methods, names);
        self
    }
}

fn extend_unique<I, S>(target: &mut Vec<String>, names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for name in names {
        let name = name.into();
        if !target.contains(&name) {
            target.push(name);
        }
    }
}

/// Serialization policies keyed by entity type name.
///
/// # Examples
///
/// ```
/// use fxml_model::{PolicyRegistry, SerializationPolicy};
///
/// let mut registry = PolicyRegistry::new();
/// registry
///     .register("Project", SerializationPolicy::new().with_include(["tasks"]))
///     .unwrap();
///
/// assert_eq!(registry.policy_for("Project").include, vec!["tasks"]);
/// assert!(registry.policy_for("Task").include.is_empty());
/// assert!(registry.register("Project", SerializationPolicy::new()).is_err());
/// ```
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    policies: HashMap<String, SerializationPolicy>,
}

impl PolicyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the policy for a type.
    ///
    /// # Errors
    ///
    /// Returns [`FxmlError::DuplicatePolicy`] if the type already has one.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        policy: SerializationPolicy,
    ) -> FxmlResult<()> {
        let type_name = type_name.into();
        if self.policies.contains_key(&type_name) {
            warn!(type_name = %type_name, "serialization policy registered twice");
            return Err(FxmlError::DuplicatePolicy(type_name));
        }
        debug!(
            type_name = %type_name,
            except = policy.except.len(),
            include = policy.include.len(),
            methods = policy.methods.len(),
            "registered serialization policy"
        );
        self.policies.insert(type_name, policy);
        Ok(())
    }

    /// The registered policy for a type, if any.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&SerializationPolicy> {
        self.policies.get(type_name)
    }

    /// The policy for a type, or the empty policy when none is registered.
    #[must_use]
    pub fn policy_for(&self, type_name: &str) -> &SerializationPolicy {
        self.get(type_name).unwrap_or(&EMPTY_POLICY)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether no type has a policy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
