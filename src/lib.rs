//! Refract - schema component catalog extraction
//!
//! Refract derives a set of named, reusable schema components from a
//! collection of typed request-input schemas and detects the structural
//! relationships between them (nesting, arrays-of-objects, optionality), so a
//! downstream schema-document generator can emit a cross-referenced component
//! catalog instead of inlining every structure repeatedly.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `components`: Component relationship extraction and aggregation
//! - `error`: Typed error taxonomy for extraction failures
//! - `generator`: Explicit configuration for component-schema rendering
//! - `input`: Validation of operation input schemas
//! - `path`: HTTP path normalization and parameter extraction
//! - `router`: Operation registry and the top-level extraction walk
//! - `schema`: The typed schema node tree

pub mod cli;
pub mod components;
pub mod error;
pub mod generator;
pub mod input;
pub mod path;
pub mod router;
pub mod schema;
