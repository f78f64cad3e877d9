//! Component relationship extraction and aggregation.
//!
//! Decomposes typed request-input schemas into a flat catalog of named,
//! reusable components, recording for each component field whether it is a
//! scalar, a nested object, or an array of objects, and whether it is
//! optional. The catalog is what a schema-document generator consumes to emit
//! a non-redundant component section with cross-references.

mod aggregate;
mod extract;
mod types;

pub use aggregate::extract_all_components;
pub use extract::generate_component_relationships;
pub use types::{ComponentCatalog, FieldDescriptor, FieldMap, FieldType, RelationshipMap};
