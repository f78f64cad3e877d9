//! Report formatting and printing utilities.
//!
//! Renders the extracted component catalog in a human-readable form. Separate
//! from the extraction logic so refract can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::components::{ComponentCatalog, FieldDescriptor};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the catalog report to stdout.
pub fn print(catalog: &ComponentCatalog, operations: usize, verbose: bool) {
    print_to(catalog, operations, verbose, &mut io::stdout().lock());
}

/// Print the catalog report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(catalog: &ComponentCatalog, operations: usize, verbose: bool, writer: &mut W) {
    for (component, fields) in catalog {
        let _ = writeln!(writer, "{}", component.bold());

        if fields.is_empty() {
            let _ = writeln!(writer, "  {}", "(no fields)".dimmed());
        }
        for (name, descriptor) in fields {
            let _ = writeln!(writer, "  {}: {}", name, describe(descriptor));
        }
        let _ = writeln!(writer);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} component{} extracted from {} operation{}",
            catalog.len(),
            plural(catalog.len()),
            operations,
            plural(operations),
        )
        .green()
    );

    if verbose {
        let references: usize = catalog
            .values()
            .flat_map(|fields| fields.values())
            .filter(|descriptor| descriptor.component.is_some())
            .count();
        let _ = writeln!(writer, "  {} cross-component reference{}", references, plural(references));
    }
}

fn describe(descriptor: &FieldDescriptor) -> String {
    let mut parts = vec![descriptor.field_type.to_string()];
    if descriptor.optional {
        parts.push("optional".to_string());
    }
    if let Some(component) = &descriptor.component {
        parts.push(format!("-> {}", component.cyan()));
    }
    parts.join(", ")
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FieldType;
    use indexmap::IndexMap;

    fn catalog_with_one_component() -> ComponentCatalog {
        let mut fields = IndexMap::new();
        fields.insert(
            "name".to_string(),
            FieldDescriptor::scalar(FieldType::String, false),
        );
        fields.insert(
            "tags".to_string(),
            FieldDescriptor::nested(FieldType::Array, true, "tags"),
        );

        let mut catalog = ComponentCatalog::new();
        catalog.insert("User".to_string(), fields);
        catalog
    }

    #[test]
    fn report_lists_components_and_fields() {
        colored::control::set_override(false);

        let mut output = Vec::new();
        print_to(&catalog_with_one_component(), 3, false, &mut output);
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("User"));
        assert!(text.contains("name: string"));
        assert!(text.contains("tags: zodArray, optional, -> tags"));
        assert!(text.contains("1 component extracted from 3 operations"));
    }

    #[test]
    fn verbose_report_counts_references() {
        colored::control::set_override(false);

        let mut output = Vec::new();
        print_to(&catalog_with_one_component(), 1, true, &mut output);
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("1 cross-component reference"));
    }

    #[test]
    fn empty_component_is_marked() {
        colored::control::set_override(false);

        let mut catalog = ComponentCatalog::new();
        catalog.insert("Empty".to_string(), IndexMap::new());

        let mut output = Vec::new();
        print_to(&catalog, 1, false, &mut output);
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("(no fields)"));
    }
}
