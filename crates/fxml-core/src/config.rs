//! Engine-wide configuration for fxml projection.
//!
//! Provides [`FxmlConfig`] for shaping projected documents. Formatting of
//! dates and the list of sensitive fields are fixed constants rather than
//! configuration: every document renders them the same way.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{FxmlError, FxmlResult};

/// Format used for every date value (`YYYY/MM/DD`).
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Format used for every datetime value (`YYYY/MM/DD HH:MM:SS`).
pub const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Credential-like fields that are excluded from every projected record.
pub const SENSITIVE_FIELDS: [&str; 4] = [
    "crypted_password",
    "salt",
    "remember_token",
    "remember_token_expires_at",
];

/// How field and association names are turned into tag names.
///
/// Hyphenated tags are never produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagCase {
    /// Keep the collaborator's underscore form (`first_name`).
    #[default]
    Underscore,
    /// Render lower-camel tags (`firstName`).
    LowerCamel,
}

/// Projection engine configuration.
///
/// # Examples
///
/// ```
/// use fxml_core::{FxmlConfig, TagCase};
///
/// let config = FxmlConfig::default();
/// assert_eq!(config.indent, 2);
/// assert_eq!(config.tag_case, TagCase::Underscore);
///
/// let compact = FxmlConfig::builder().indent(0).build();
/// assert_eq!(compact.indent, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct FxmlConfig {
    /// Default indentation width in spaces. `0` renders compact output.
    #[builder(default = 2)]
    pub indent: usize,

    /// Tag naming for fields and associations.
    #[builder(default)]
    pub tag_case: TagCase,

    /// Maximum nesting depth of included associations.
    #[builder(default = 8)]
    pub max_depth: usize,
}

impl Default for FxmlConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            tag_case: TagCase::Underscore,
            max_depth: 8,
        }
    }
}

impl FxmlConfig {
    /// Check that the configuration can drive a projection.
    pub fn validate(&self) -> FxmlResult<()> {
        if self.max_depth == 0 {
            return Err(FxmlError::Config(
                "max_depth must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
