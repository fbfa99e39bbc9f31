//! Schema module for schema_scout
//!
//! This module handles DDL extraction, table classification and type-mapping
//! suggestions.

pub mod classify;
pub mod extractor;
pub mod type_map;
pub mod types;

// Re-export key types
pub use classify::Classifier;
pub use extractor::{extract_foreign_keys, extract_schema, extract_tables};
pub use types::{Classification, ForeignKeyEdge, ParsedSchema, TsType};
