//! Validation of an operation's declared input schema.

use crate::error::{Error, Result};
use crate::schema::SchemaNode;

/// Resolve an operation's declared input to the object schema the extractor
/// walks, or `None` when the operation takes no input.
///
/// - A missing parser fails with [`Error::InvalidInputParser`].
/// - One optional layer is unwrapped before inspection.
/// - A void schema with no path parameters means "no input": the operation is
///   omitted from extraction entirely, not passed through as a sentinel.
/// - Anything else that is not an object fails with
///   [`Error::InputMustBeObject`]. A void schema on a parameterized path falls
///   under this rule, since the path parameters need an object to live in.
///
/// `operation` is the stable operation key, used in error messages only.
pub fn get_input_object<'a>(
    schema: Option<&'a SchemaNode>,
    path_parameters: &[String],
    operation: &str,
) -> Result<Option<&'a SchemaNode>> {
    let Some(schema) = schema else {
        return Err(Error::InvalidInputParser {
            operation: operation.to_string(),
        });
    };

    let unwrapped = schema.unwrap_optional();

    if path_parameters.is_empty() && unwrapped.is_void() {
        return Ok(None);
    }

    if !unwrapped.is_object() {
        return Err(Error::InputMustBeObject {
            operation: operation.to_string(),
        });
    }

    Ok(Some(unwrapped))
}
