//! Generator configuration for the document-build entry point.
//!
//! Component definitions and the custom schema generator are explicit values
//! passed to the build, not process-wide registries: whoever assembles the
//! schema document constructs a [`GeneratorConfig`] and owns its lifetime.

use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::schema::SchemaNode;

/// Produces the complete component-schema map, overriding the built-in
/// rendering of `component_definitions`.
pub type ComponentSchemaGenerator = dyn Fn() -> IndexMap<String, Value> + Send + Sync;

/// Explicit configuration for component-schema rendering.
#[derive(Default)]
pub struct GeneratorConfig {
    /// Named schema definitions to render into the document's component
    /// section. References between definitions are not supported.
    pub component_definitions: Option<IndexMap<String, SchemaNode>>,
    /// Custom whole-map generator; wins over `component_definitions`.
    pub schema_generator: Option<Box<ComponentSchemaGenerator>>,
}

impl GeneratorConfig {
    pub fn with_definitions<K, I>(mut self, definitions: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        self.component_definitions = Some(
            definitions
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        );
        self
    }

    pub fn with_generator(
        mut self,
        generator: impl Fn() -> IndexMap<String, Value> + Send + Sync + 'static,
    ) -> Self {
        self.schema_generator = Some(Box::new(generator));
        self
    }

    /// Render the configured component definitions to plain schema objects.
    ///
    /// The custom generator takes precedence when both are set; with neither
    /// configured the result is empty.
    pub fn component_schemas(&self) -> IndexMap<String, Value> {
        if let Some(generator) = &self.schema_generator {
            return generator();
        }

        match &self.component_definitions {
            Some(definitions) => definitions
                .iter()
                .map(|(name, node)| (name.clone(), schema_object(node)))
                .collect(),
            None => IndexMap::new(),
        }
    }
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("component_definitions", &self.component_definitions)
            .field(
                "schema_generator",
                &self.schema_generator.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

/// Render one schema node as a plain JSON schema object.
///
/// Optionality is expressed through the enclosing object's `required` list,
/// so an optional node renders as its inner node.
pub fn schema_object(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::Object { fields } => {
            let mut properties = serde_json::Map::new();
            let mut required = Vec::new();

            for (key, child) in fields {
                if !matches!(child, SchemaNode::Optional { .. }) {
                    required.push(Value::String(key.clone()));
                }
                properties.insert(key.clone(), schema_object(child.unwrap_optional()));
            }

            let mut object = json!({ "type": "object", "properties": properties });
            if !required.is_empty() {
                object["required"] = Value::Array(required);
            }
            object
        }
        SchemaNode::Array { items } => json!({ "type": "array", "items": schema_object(items) }),
        SchemaNode::Optional { inner } => schema_object(inner),
        SchemaNode::String => json!({ "type": "string" }),
        SchemaNode::Number => json!({ "type": "number" }),
        SchemaNode::Boolean => json!({ "type": "boolean" }),
        SchemaNode::Date => json!({ "type": "string", "format": "date-time" }),
        SchemaNode::Void => json!({}),
    }
}
