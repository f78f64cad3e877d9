//! Typed schema node tree.
//!
//! `SchemaNode` is a closed variant type over the four schema kinds the
//! extractor discriminates: objects (ordered field maps), arrays (one element
//! node), optionals (one inner node), and scalars (kind tag only). `Void`
//! additionally models a "no input" schema so routers can declare operations
//! without a request body.
//!
//! Nodes are serde-serializable, internally tagged on `"type"`, so a router
//! description file can carry schema trees as plain JSON:
//!
//! ```json
//! { "type": "object", "fields": { "name": { "type": "string" } } }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One node of a typed schema definition tree.
///
/// Object fields are kept in declaration order; the extractor and any
/// downstream document generator rely on that order being stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    Object {
        #[serde(default)]
        fields: IndexMap<String, SchemaNode>,
    },
    Array {
        items: Box<SchemaNode>,
    },
    Optional {
        inner: Box<SchemaNode>,
    },
    String,
    Number,
    Boolean,
    Date,
    Void,
}

impl SchemaNode {
    /// Build an object node from `(name, node)` pairs, preserving order.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        SchemaNode::Object {
            fields: fields
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        }
    }

    pub fn array(items: SchemaNode) -> Self {
        SchemaNode::Array {
            items: Box::new(items),
        }
    }

    pub fn optional(inner: SchemaNode) -> Self {
        SchemaNode::Optional {
            inner: Box::new(inner),
        }
    }

    /// Peel exactly one `Optional` layer, if present.
    pub fn unwrap_optional(&self) -> &SchemaNode {
        match self {
            SchemaNode::Optional { inner } => inner,
            other => other,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, SchemaNode::Object { .. })
    }

    pub fn is_void(&self) -> bool {
        matches!(self, SchemaNode::Void)
    }

    /// The node's kind name, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SchemaNode::Object { .. } => "object",
            SchemaNode::Array { .. } => "array",
            SchemaNode::Optional { .. } => "optional",
            SchemaNode::String => "string",
            SchemaNode::Number => "number",
            SchemaNode::Boolean => "boolean",
            SchemaNode::Date => "date",
            SchemaNode::Void => "void",
        }
    }
}
