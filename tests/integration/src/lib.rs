//! End-to-end tests for fxml.
//!
//! These exercise the full path from entities and policies through the
//! projection engine to rendered documents and HTTP responses.
//!
//! Run them with:
//! ```text
//! cargo test -p fxml-integration
//! ```

use std::sync::Once;

use chrono::NaiveDate;
use fxml_core::FxmlConfig;
use fxml_model::{PolicyRegistry, Record, SerializationPolicy, Value};
use fxml_xml::{ProjectionOptions, Projector, Subject};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Registry with the policies used across the tests.
///
/// `Project` hides `budget` and always exposes `valid?`; `User` hides
/// `email` and always includes its `projects`.
#[must_use]
pub fn registry() -> PolicyRegistry {
    init_tracing();

    let mut registry = PolicyRegistry::new();
    registry
        .register(
            "Project",
            SerializationPolicy::new()
                .with_except(["budget"])
                .with_methods(["valid?"]),
        )
        .unwrap_or_else(|e| panic!("failed to register Project policy: {e}"));
    registry
        .register(
            "User",
            SerializationPolicy::new()
                .with_except(["email"])
                .with_include(["projects"]),
        )
        .unwrap_or_else(|e| panic!("failed to register User policy: {e}"));
    registry
}

/// Run a projection with the given config and fail the test on error.
#[must_use]
pub fn render(
    registry: &PolicyRegistry,
    config: &FxmlConfig,
    subject: &Subject<'_>,
    options: &ProjectionOptions,
) -> String {
    Projector::new(registry, config)
        .and_then(|projector| projector.project(subject, options))
        .unwrap_or_else(|e| panic!("projection failed: {e}"))
}

/// A project record with a fixed due date.
#[must_use]
pub fn project(id: i64, name: &str) -> Record {
    let due = NaiveDate::from_ymd_opt(2008, 1, 2).expect("valid fixture date");
    Record::new("Project")
        .with_attribute("id", id)
        .with_attribute("name", name)
        .with_attribute("budget", 125_000.5)
        .with_attribute("due_on", due)
        .with_attribute("started_at", due.and_hms_opt(3, 4, 5).expect("valid fixture time"))
        .with_computed("valid?", |r| {
            let name = r.attribute("name").and_then(Value::as_str);
            Ok(Value::from(name.is_some_and(|n| !n.is_empty())))
        })
}

/// A user record carrying every sensitive field.
#[must_use]
pub fn user(login: &str, projects: Vec<Record>) -> Record {
    Record::new("User")
        .with_attribute("login", login)
        .with_attribute("email", format!("{login}@example.com"))
        .with_attribute("crypted_password", "00742970dc9e6319f8019fd54864d3ea740f04b1")
        .with_attribute("salt", "7e3041ebc2fc05a40c60028e2c4901a81035d3cd")
        .with_attribute("remember_token", Value::Nil)
        .with_attribute("remember_token_expires_at", Value::Nil)
        .with_many("projects", projects)
}

mod test_collection;
mod test_errors;
mod test_record;
mod test_response;
