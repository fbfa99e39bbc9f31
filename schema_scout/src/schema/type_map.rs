//! Naive SQL → TypeScript type suggestions
//!
//! Pure substring matching on raw column fragments; no DDL parsing. Good
//! enough for a planning report, nothing more.

use crate::schema::types::TsType;

/// Suggest a TypeScript type for a raw column fragment.
pub fn suggest_type(fragment: &str) -> TsType {
    if fragment.contains("bigint") || fragment.contains("integer") {
        TsType::Number
    } else if fragment.contains("character varying") || fragment.contains("text") {
        TsType::String
    } else if fragment.contains("timestamp") {
        TsType::Date
    } else if fragment.contains("boolean") {
        TsType::Boolean
    } else {
        TsType::Unknown
    }
}

/// First whitespace-delimited token of the fragment, i.e. the column name.
pub fn field_name(fragment: &str) -> Option<&str> {
    fragment.split_whitespace().next()
}

/// A field is optional unless its fragment declares `NOT NULL`.
pub fn is_nullable(fragment: &str) -> bool {
    !fragment.contains("NOT NULL")
}
