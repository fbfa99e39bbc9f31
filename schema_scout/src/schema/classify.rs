//! Table classification heuristics
//!
//! Buckets parsed tables for migration prioritization. The junction rule is a
//! name heuristic, not a relational check: any table whose name carries an
//! underscore and contains a core-table name as a substring counts, so
//! coincidental matches (`stories_backup`) land in the junction bucket too.

use indexmap::IndexMap;

use crate::config::ClassifyConfig;
use crate::schema::types::Classification;

/// Classifier for parsed table names
pub struct Classifier<'a> {
    config: &'a ClassifyConfig,
}

impl<'a> Classifier<'a> {
    /// Create a new classifier
    pub fn new(config: &'a ClassifyConfig) -> Self {
        Self { config }
    }

    /// Bucket the parsed tables into core, junction and media lists.
    ///
    /// The core bucket follows allowlist order and keeps only tables present
    /// in the dump; the other buckets follow dump order.
    pub fn classify(&self, tables: &IndexMap<String, Vec<String>>) -> Classification {
        let core = self
            .config
            .core_tables
            .iter()
            .filter(|name| tables.contains_key(name.as_str()))
            .cloned()
            .collect();

        let junction = tables
            .keys()
            .filter(|name| self.is_junction(name.as_str()))
            .cloned()
            .collect();

        let media = tables
            .keys()
            .filter(|name| self.is_media(name.as_str()))
            .cloned()
            .collect();

        Classification {
            core,
            junction,
            media,
        }
    }

    /// Junction-name heuristic: underscore plus a core-table substring.
    pub fn is_junction(&self, name: &str) -> bool {
        name.contains('_')
            && self
                .config
                .core_tables
                .iter()
                .any(|core| name.contains(core.as_str()))
    }

    /// Media tables carry the configured name prefix.
    pub fn is_media(&self, name: &str) -> bool {
        name.starts_with(&self.config.media_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_map(names: &[&str]) -> IndexMap<String, Vec<String>> {
        names
            .iter()
            .map(|name| (name.to_string(), vec!["id bigint NOT NULL".to_string()]))
            .collect()
    }

    #[test]
    fn test_story_speakers_is_junction() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);

        assert!(classifier.is_junction("story_speakers"));
    }

    #[test]
    fn test_active_storage_blobs_is_media() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);

        assert!(classifier.is_media("active_storage_blobs"));
    }

    #[test]
    fn test_core_bucket_keeps_allowlist_order() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);

        // Dump order differs from allowlist order; `themes` is absent.
        let tables = table_map(&["stories", "communities", "users"]);
        let classes = classifier.classify(&tables);

        assert_eq!(classes.core, ["communities", "users", "stories"]);
    }

    #[test]
    fn test_plain_core_table_is_not_junction() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);

        assert!(!classifier.is_junction("users"));
        assert!(!classifier.is_junction("photographs"));
    }

    // Substring containment over-matches; this is accepted behavior, not a
    // defect to fix.
    #[test]
    fn test_coincidental_substring_overmatches() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);

        assert!(classifier.is_junction("stories_backup"));
    }

    #[test]
    fn test_buckets_may_overlap() {
        let mut config = ClassifyConfig::default();
        config.core_tables.push("storage".to_string());
        let classifier = Classifier::new(&config);

        let tables = table_map(&["active_storage_blobs"]);
        let classes = classifier.classify(&tables);

        assert_eq!(classes.junction, ["active_storage_blobs"]);
        assert_eq!(classes.media, ["active_storage_blobs"]);
    }
}
