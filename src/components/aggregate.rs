//! Merging per-root relationship maps into one component catalog.
//!
//! Each named root schema is extracted independently (in parallel, since the
//! walks are pure), then the dotted-path keys are collapsed to their final
//! segment and folded into a single catalog. The fold runs strictly in the
//! caller's root order, so when two paths collapse to the same leaf name the
//! later-processed entry wins, reproducibly.

use indexmap::IndexMap;
use rayon::prelude::*;

use super::extract::{generate_component_relationships, last_segment};
use super::types::{ComponentCatalog, RelationshipMap};
use crate::error::Result;
use crate::schema::SchemaNode;

/// Extract every named root in `roots` and merge the results into one catalog
/// keyed by component leaf name.
///
/// Name collisions resolve last-write-wins in processing order: root order
/// first, then per-root insertion order. The winning entry keeps the position
/// of the first occurrence, so output ordering is stable either way.
pub fn extract_all_components(
    roots: &IndexMap<String, SchemaNode>,
) -> Result<ComponentCatalog> {
    let partials: Vec<RelationshipMap> = roots
        .par_iter()
        .map(|(name, schema)| generate_component_relationships(schema, name))
        .collect::<Result<_>>()?;

    let mut merged = ComponentCatalog::new();
    for partial in partials {
        for (dotted_path, fields) in partial {
            merged.insert(last_segment(&dotted_path).to_string(), fields);
        }
    }

    Ok(merged)
}
