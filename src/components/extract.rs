//! Component relationship extraction for one named root schema.
//!
//! A depth-first walk over an object schema tree that emits, for every object
//! and array-of-objects node encountered, an entry keyed by the node's full
//! dotted path, mapping each declared field name to a [`FieldDescriptor`].
//! Dotted paths exist only for the duration of the walk; the aggregator in
//! [`super::aggregate`] collapses them to leaf names.

use indexmap::IndexMap;

use super::types::{FieldDescriptor, FieldType, RelationshipMap};
use crate::error::{Error, Result};
use crate::schema::SchemaNode;

/// Walk `schema` (which must be an object node) and return the relationship
/// map for every component reachable from it, keyed by dotted path.
///
/// `name` seeds the path prefix; it may be empty for an unnamed root, in which
/// case the root entry is keyed by the empty string.
///
/// Fails with [`Error::InvalidSchemaShape`] on a non-object root or on an
/// optional directly wrapping another optional.
pub fn generate_component_relationships(
    schema: &SchemaNode,
    name: &str,
) -> Result<RelationshipMap> {
    let SchemaNode::Object { fields } = schema else {
        return Err(Error::invalid_shape(
            name,
            format!("root schema must be an object, found {}", schema.kind_name()),
        ));
    };

    let mut relationships = RelationshipMap::new();
    process_fields(fields, name, &mut relationships)?;
    Ok(relationships)
}

/// The last segment of a dotted path, or the whole path when undotted.
pub(crate) fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn record(out: &mut RelationshipMap, path: &str, key: &str, descriptor: FieldDescriptor) {
    out.entry(path.to_string())
        .or_default()
        .insert(key.to_string(), descriptor);
}

fn process_fields(
    fields: &IndexMap<String, SchemaNode>,
    prefix: &str,
    out: &mut RelationshipMap,
) -> Result<()> {
    // Seed the entry up front so objects with no fields still appear.
    out.entry(prefix.to_string()).or_default();

    for (key, prop) in fields {
        let full_path = join_path(prefix, key);

        match prop {
            SchemaNode::Optional { inner } => {
                process_optional(key, inner, prefix, &full_path, out)?;
            }
            SchemaNode::Object { fields: nested } => {
                record(
                    out,
                    prefix,
                    key,
                    FieldDescriptor::nested(FieldType::Object, false, last_segment(&full_path)),
                );
                process_fields(nested, &full_path, out)?;
            }
            SchemaNode::Array { items } => match items.as_ref() {
                SchemaNode::Object { fields: element } => {
                    record(
                        out,
                        prefix,
                        key,
                        FieldDescriptor::nested(FieldType::Object, false, last_segment(&full_path)),
                    );
                    process_fields(element, &full_path, out)?;
                }
                // Arrays of non-objects carry the array tag but name no component.
                _ => record(out, prefix, key, FieldDescriptor::scalar(FieldType::Array, false)),
            },
            scalar => {
                let field_type = scalar_tag(scalar, &full_path)?;
                record(out, prefix, key, FieldDescriptor::scalar(field_type, false));
            }
        }
    }

    Ok(())
}

fn process_optional(
    key: &str,
    inner: &SchemaNode,
    prefix: &str,
    full_path: &str,
    out: &mut RelationshipMap,
) -> Result<()> {
    match inner {
        SchemaNode::Optional { .. } => Err(Error::invalid_shape(
            full_path,
            "optional wrapping another optional",
        )),
        SchemaNode::Object { fields } => {
            // An optional object emits its own component entry only; the
            // parent's field map does not list it. Downstream catalogs depend
            // on this exact shape.
            process_fields(fields, full_path, out)
        }
        SchemaNode::Array { items } => match items.as_ref() {
            SchemaNode::Object { fields: element } => {
                record(
                    out,
                    prefix,
                    key,
                    FieldDescriptor::nested(FieldType::Array, true, key),
                );
                process_fields(element, full_path, out)
            }
            _ => {
                record(out, prefix, key, FieldDescriptor::scalar(FieldType::Array, true));
                Ok(())
            }
        },
        scalar => {
            let field_type = scalar_tag(scalar, full_path)?;
            record(out, prefix, key, FieldDescriptor::scalar(field_type, true));
            Ok(())
        }
    }
}

/// Tag for a node already known not to be an object, array, or optional.
fn scalar_tag(node: &SchemaNode, path: &str) -> Result<FieldType> {
    match node {
        SchemaNode::String => Ok(FieldType::String),
        SchemaNode::Number => Ok(FieldType::Number),
        SchemaNode::Boolean => Ok(FieldType::Boolean),
        SchemaNode::Date => Ok(FieldType::Date),
        SchemaNode::Void => Ok(FieldType::Void),
        SchemaNode::Object { .. } | SchemaNode::Array { .. } | SchemaNode::Optional { .. } => {
            Err(Error::invalid_shape(
                path,
                format!("expected a scalar kind, found {}", node.kind_name()),
            ))
        }
    }
}
