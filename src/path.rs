//! HTTP path normalization and `{param}` extraction.

use std::sync::LazyLock;

use regex::Regex;

static PATH_PARAMETER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("path parameter pattern is valid"));

/// Normalize an operation path to a single leading slash and no trailing
/// slash. The root path stays `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Names of `{param}`-style parameters embedded in `path`, in declaration
/// order, without duplicates.
pub fn get_path_parameters(path: &str) -> Vec<String> {
    let mut parameters: Vec<String> = Vec::new();
    for capture in PATH_PARAMETER.captures_iter(path) {
        let name = capture[1].to_string();
        if !parameters.contains(&name) {
            parameters.push(name);
        }
    }
    parameters
}
