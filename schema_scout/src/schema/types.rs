//! Type definitions for parsed schema objects

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tables and relationships extracted from one schema dump
///
/// Column definitions stay raw strings (e.g. `id bigint NOT NULL`); they are
/// pattern-matched ad hoc at report time rather than parsed into a typed
/// column model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedSchema {
    /// Table name → column-definition fragments, in source order.
    pub tables: IndexMap<String, Vec<String>>,
    pub foreign_keys: Vec<ForeignKeyEdge>,
}

impl ParsedSchema {
    /// Create a new empty parsed schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table with its column fragments
    pub fn add_table(&mut self, name: impl Into<String>, columns: Vec<String>) {
        self.tables.insert(name.into(), columns);
    }

    /// Add a foreign-key edge
    pub fn add_foreign_key(&mut self, edge: ForeignKeyEdge) {
        self.foreign_keys.push(edge);
    }
}

/// A FOREIGN KEY constraint lifted from an `ALTER TABLE` statement.
///
/// Composite keys keep their comma-joined column capture unsplit; nothing
/// checks that the referenced tables or columns exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyEdge {
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
    pub constraint_name: String,
}

/// Migration-priority buckets for the parsed tables
///
/// Buckets may overlap; a table can satisfy more than one rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    /// Core domain tables, in allowlist order, present in the dump.
    pub core: Vec<String>,
    /// Tables matching the junction-name heuristic.
    pub junction: Vec<String>,
    /// Tables carrying the media name prefix.
    pub media: Vec<String>,
}

impl Classification {
    /// Table names that landed in none of the buckets.
    pub fn remainder<'a>(
        &self,
        tables: impl IntoIterator<Item = &'a String>,
    ) -> Vec<String> {
        tables
            .into_iter()
            .filter(|name| {
                !self.core.contains(*name)
                    && !self.junction.contains(*name)
                    && !self.media.contains(*name)
            })
            .cloned()
            .collect()
    }
}

/// Naive TypeScript type suggestion for a raw column fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TsType {
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "Date")]
    Date,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TsType::Number => "number",
            TsType::String => "string",
            TsType::Date => "Date",
            TsType::Boolean => "boolean",
            TsType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
