//! Naming utilities for schema_scout
//!
//! Table names are snake_case plurals in a Rails-style dump; the report
//! needs TypeScript-flavored names derived from them.

use inflector::Inflector;

/// TypeScript interface name for a table (`story_places` → `StoryPlaces`).
pub fn interface_name(table: &str) -> String {
    table.to_pascal_case()
}

/// Singular entity name for the migration plan (`communities` → `Community`).
pub fn entity_name(table: &str) -> String {
    table.to_singular().to_pascal_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_name() {
        assert_eq!(interface_name("users"), "Users");
        assert_eq!(interface_name("story_places"), "StoryPlaces");
        assert_eq!(interface_name("curriculums"), "Curriculums");
    }

    #[test]
    fn test_entity_name() {
        assert_eq!(entity_name("communities"), "Community");
        assert_eq!(entity_name("stories"), "Story");
        assert_eq!(entity_name("users"), "User");
        assert_eq!(entity_name("places"), "Place");
    }
}
