//! Core configuration, error types, and naming inflections for fxml.
//!
//! This crate provides the building blocks shared by the fxml model, XML
//! projection, and HTTP response crates: the engine-wide [`FxmlConfig`],
//! the fixed formatting constants, the configuration error type, and the
//! string inflections used to derive tag names from type and field names.

pub mod config;
mod error;
pub mod inflect;

pub use config::{DATE_FORMAT, DATETIME_FORMAT, FxmlConfig, SENSITIVE_FIELDS, TagCase};
pub use error::{FxmlError, FxmlResult};
