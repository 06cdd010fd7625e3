//! XML projection engine for fxml.
//!
//! This crate turns records, collections of records, and validation error
//! sets into XML documents for rich clients that consume the fxml format.
//! Projection is a pure transform: it reads entities through
//! [`fxml_model::Entity`], applies the per-type
//! [`fxml_model::SerializationPolicy`] merged with per-call
//! [`ProjectionOptions`], and returns a document string.
//!
//! # Key components
//!
//! - [`Projector`] and [`project`] for projecting a [`Subject`]: a record, a finder result, an
//!   error set, or a plain map or value list
//! - [`ProjectionOptions`] for per-call shaping (`except`, `include`, `methods`, `root`, ...)
//! - [`ProjectionError`] for failures raised while reading entities or writing XML
//!
//! # fxml conventions
//!
//! - Tag names never contain hyphens, and `?` is stripped from them
//! - Dates: `YYYY/MM/DD`; datetimes: `YYYY/MM/DD HH:MM:SS`
//! - Typed values carry `type="integer|float|boolean|date|datetime"`, nil values `nil="true"`
//! - An empty collection is exactly `<{tableized type} type="array"/>`
//! - Credential-like fields are never written
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

mod error;
mod naming;
mod node;
mod options;
mod project;
pub mod serialize;

pub use error::ProjectionError;
pub use naming::sanitize_name;
pub use options::ProjectionOptions;
pub use project::{Projector, Subject, project};
pub use serialize::{format_date, format_datetime};
