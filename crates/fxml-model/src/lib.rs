//! Data model for fxml projection.
//!
//! The projection engine never owns the records it serializes. Records are
//! built and mutated by an ORM-like collaborator and reach the engine through
//! the [`Entity`] trait, which also delegates association traversal and
//! computed-field invocation back to that collaborator. [`Record`] is a
//! concrete, in-memory [`Entity`] for callers without their own model layer.
//!
//! # Key components
//!
//! - [`Value`]: scalar field values (strings, numbers, booleans, dates, nil)
//! - [`Entity`] and [`Related`]: the collaborator seam
//! - [`SerializationPolicy`] and [`PolicyRegistry`]: per-type serialization defaults
//! - [`ErrorSet`]: validation failures keyed by field or [`BASE`]
//! - [`Collection`]: the tagged result of a finder, empty or not

mod collection;
mod entity;
mod error_set;
mod policy;
mod record;
mod value;

pub use collection::Collection;
pub use entity::{Entity, Related};
pub use error_set::{BASE, ErrorSet};
pub use policy::{PolicyRegistry, SerializationPolicy};
pub use record::{Association, Record};
pub use value::Value;
