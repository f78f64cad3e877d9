//! Descriptor and catalog types for component extraction.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shape tag of one component field.
///
/// Serialized as the string tags downstream generators key on: `"object"` for
/// nested components, `"zodArray"` for arrays, or the scalar kind name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "zodArray")]
    Array,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "void")]
    Void,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Object => write!(f, "object"),
            FieldType::Array => write!(f, "zodArray"),
            FieldType::String => write!(f, "string"),
            FieldType::Number => write!(f, "number"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Date => write!(f, "date"),
            FieldType::Void => write!(f, "void"),
        }
    }
}

/// Per-field metadata describing one field of one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Shape of the field's declared type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// True when the declared type was optional-wrapped at this position.
    pub optional: bool,
    /// Catalog key of the nested component, for object and array-of-object
    /// fields. Always a leaf name, never a dotted path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

impl FieldDescriptor {
    /// Descriptor for a scalar-style field (no nested component).
    pub fn scalar(field_type: FieldType, optional: bool) -> Self {
        FieldDescriptor {
            field_type,
            optional,
            component: None,
        }
    }

    /// Descriptor referencing a nested component.
    pub fn nested(field_type: FieldType, optional: bool, component: impl Into<String>) -> Self {
        FieldDescriptor {
            field_type,
            optional,
            component: Some(component.into()),
        }
    }
}

/// Field name to descriptor, in declaration order.
pub type FieldMap = IndexMap<String, FieldDescriptor>;

/// Extractor output: dotted path to field map. Internal to one root walk;
/// the aggregator collapses the dotted paths away.
pub type RelationshipMap = IndexMap<String, FieldMap>;

/// Final merged catalog: component leaf name to field map.
pub type ComponentCatalog = IndexMap<String, FieldMap>;
