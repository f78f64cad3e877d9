//! Operation registry and the top-level extraction walk.
//!
//! A [`Router`] is the caller-supplied list of operations, each with a dotted
//! procedure path, an HTTP path template, and an optional input schema. The
//! walk derives a stable key per operation, validates its input, and hands
//! the surviving object schemas to the component aggregator.

use std::fs;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::components::{ComponentCatalog, extract_all_components};
use crate::error::Result;
use crate::generator::GeneratorConfig;
use crate::input::get_input_object;
use crate::path::{get_path_parameters, normalize_path};
use crate::schema::SchemaNode;

/// One registered operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Dotted procedure path, e.g. `user.create`.
    pub procedure: String,
    /// HTTP path template, e.g. `/users/{id}`.
    pub path: String,
    /// Declared input schema. Absent means the operation declares no parser
    /// at all, which is an error; use a void schema for "no input".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<SchemaNode>,
}

impl Operation {
    pub fn new(procedure: impl Into<String>, path: impl Into<String>, input: SchemaNode) -> Self {
        Operation {
            procedure: procedure.into(),
            path: path.into(),
            input: Some(input),
        }
    }
}

/// The full set of operations to extract components from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Router {
    pub operations: Vec<Operation>,
}

impl Router {
    pub fn new(operations: Vec<Operation>) -> Self {
        Router { operations }
    }
}

/// Catalog plus rendered component schema objects, for configured builds.
#[derive(Debug)]
pub struct ExtractedComponents {
    pub relationships: ComponentCatalog,
    pub schemas: IndexMap<String, Value>,
}

/// Stable operation key: the dotted procedure path with `.` replaced by `-`.
pub fn operation_key(procedure: &str) -> String {
    procedure.replace('.', "-")
}

/// Collect the validated input object schema per operation, keyed by the
/// stable operation key, in registration order. Operations whose input is
/// void (and whose path has no parameters) are omitted.
pub fn input_roots(router: &Router) -> Result<IndexMap<String, SchemaNode>> {
    let mut roots = IndexMap::new();

    for operation in &router.operations {
        let key = operation_key(&operation.procedure);
        let path = normalize_path(&operation.path);
        let parameters = get_path_parameters(&path);

        if let Some(object) = get_input_object(operation.input.as_ref(), &parameters, &key)? {
            roots.insert(key, object.clone());
        }
    }

    Ok(roots)
}

/// Extract the merged component catalog for every operation in `router`.
///
/// One malformed operation aborts the whole build; the error names the
/// operation by its stable key.
pub fn extract_schemas(router: &Router) -> Result<ComponentCatalog> {
    let roots = input_roots(router)?;
    extract_all_components(&roots)
}

/// Like [`extract_schemas`], additionally rendering the configured component
/// definitions to plain schema objects.
pub fn extract_schemas_with(
    router: &Router,
    config: &GeneratorConfig,
) -> Result<ExtractedComponents> {
    Ok(ExtractedComponents {
        relationships: extract_schemas(router)?,
        schemas: config.component_schemas(),
    })
}

/// Load a router description from a JSON file.
pub fn load_router(path: &Path) -> anyhow::Result<Router> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read router file: {:?}", path))?;
    let router: Router = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse router file: {:?}", path))?;
    Ok(router)
}
