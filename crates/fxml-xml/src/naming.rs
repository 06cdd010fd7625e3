//! Tag naming.

use fxml_core::TagCase;
use fxml_core::inflect;

/// Strip every `?` from a field or method name.
///
/// Predicate-style names such as `valid?` are legal fields but not legal
/// tag names.
///
/// ```
/// assert_eq!(fxml_xml::sanitize_name("valid?"), "valid");
/// ```
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.replace('?', "")
}

/// Turn an underscore-form name into a tag name under the configured case.
///
/// Hyphens are never emitted, whatever the input.
pub(crate) fn tag_name(name: &str, case: TagCase) -> String {
    let sanitized = sanitize_name(name);
    match case {
        TagCase::Underscore => sanitized.replace('-', "_"),
        TagCase::LowerCamel => inflect::camelize_lower(&sanitized),
    }
}
