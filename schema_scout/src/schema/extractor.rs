//! DDL extraction
//!
//! Single-pass regex extraction of `CREATE TABLE` blocks and foreign-key
//! constraints from `pg_dump`-style DDL text. Column definitions pass through
//! as raw strings; unexpected syntax degrades silently to empty or partial
//! results.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::types::{ForeignKeyEdge, ParsedSchema};

static TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)CREATE TABLE "public"\."(\w+)" \((.*?)\);"#)
        .expect("table pattern is valid")
});

static QUOTED_IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("quoted identifier pattern is valid"));

static FOREIGN_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"ALTER TABLE (?:ONLY )?public\.(\w+) ADD CONSTRAINT (\w+) FOREIGN KEY \(([^)]+)\) REFERENCES public\.(\w+)\(([^)]+)\)",
    )
    .expect("foreign key pattern is valid")
});

/// Extract both tables and foreign keys from the dump text.
pub fn extract_schema(ddl: &str) -> ParsedSchema {
    ParsedSchema {
        tables: extract_tables(ddl),
        foreign_keys: extract_foreign_keys(ddl),
    }
}

/// Extract `CREATE TABLE "public"."<name>" (...)` blocks.
///
/// Returns table name → column-definition fragments in source order. Each
/// fragment is a trimmed line of the table body with the trailing comma and
/// identifier quoting removed; comment-only lines are dropped. Embedded
/// parentheses or commas inside a definition (inline `CHECK` constraints)
/// are not handled and can leave malformed fragments.
pub fn extract_tables(ddl: &str) -> IndexMap<String, Vec<String>> {
    let mut tables = IndexMap::new();

    for caps in TABLE_RE.captures_iter(ddl) {
        let name = caps[1].to_string();
        let columns = caps[2]
            .trim()
            .split('\n')
            .map(|line| line.trim().trim_end_matches(','))
            .filter(|line| !line.is_empty() && !line.starts_with("--"))
            .map(|line| QUOTED_IDENT_RE.replace_all(line, "$1").trim().to_string())
            .collect();

        tables.insert(name, columns);
    }

    tables
}

/// Extract `ALTER TABLE ... ADD CONSTRAINT ... FOREIGN KEY` statements.
///
/// Edges come back in statement order. Composite keys are captured as one
/// comma-joined string; splitting is left to the caller.
pub fn extract_foreign_keys(ddl: &str) -> Vec<ForeignKeyEdge> {
    FOREIGN_KEY_RE
        .captures_iter(ddl)
        .map(|caps| ForeignKeyEdge {
            source_table: caps[1].to_string(),
            constraint_name: caps[2].to_string(),
            source_column: caps[3].to_string(),
            target_table: caps[4].to_string(),
            target_column: caps[5].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS_TABLE: &str = r#"CREATE TABLE "public"."users" (
    "id" bigint NOT NULL,
    "name" character varying
);"#;

    #[test]
    fn test_extract_single_table() {
        let tables = extract_tables(USERS_TABLE);

        assert_eq!(tables.len(), 1);
        let columns = &tables["users"];
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0], "id bigint NOT NULL");
        assert_eq!(columns[1], "name character varying");
    }

    #[test]
    fn test_table_order_follows_source() {
        let ddl = r#"CREATE TABLE "public"."stories" (
    "id" bigint NOT NULL
);
CREATE TABLE "public"."communities" (
    "id" bigint NOT NULL
);"#;

        let tables = extract_tables(ddl);
        let names: Vec<&String> = tables.keys().collect();
        assert_eq!(names, ["stories", "communities"]);
    }

    #[test]
    fn test_comment_lines_are_dropped() {
        let ddl = r#"CREATE TABLE "public"."places" (
    -- geographic anchor for a story
    "id" bigint NOT NULL,
    "name" text
);"#;

        let tables = extract_tables(ddl);
        assert_eq!(tables["places"].len(), 2);
    }

    #[test]
    fn test_extract_foreign_key() {
        let ddl = "ALTER TABLE ONLY public.stories ADD CONSTRAINT fk_x \
                   FOREIGN KEY (community_id) REFERENCES public.communities(id)";

        let edges = extract_foreign_keys(ddl);

        assert_eq!(edges.len(), 1);
        assert_eq!(
            edges[0],
            ForeignKeyEdge {
                source_table: "stories".to_string(),
                source_column: "community_id".to_string(),
                target_table: "communities".to_string(),
                target_column: "id".to_string(),
                constraint_name: "fk_x".to_string(),
            }
        );
    }

    #[test]
    fn test_foreign_key_without_only_keyword() {
        let ddl = "ALTER TABLE public.stories ADD CONSTRAINT fk_y \
                   FOREIGN KEY (place_id) REFERENCES public.places(id)";

        let edges = extract_foreign_keys(ddl);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].constraint_name, "fk_y");
    }

    #[test]
    fn test_composite_key_stays_unsplit() {
        let ddl = "ALTER TABLE ONLY public.story_places ADD CONSTRAINT fk_sp \
                   FOREIGN KEY (story_id, place_id) REFERENCES public.stories(id, revision)";

        let edges = extract_foreign_keys(ddl);
        assert_eq!(edges[0].source_column, "story_id, place_id");
        assert_eq!(edges[0].target_column, "id, revision");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let ddl = format!(
            "{}\nALTER TABLE ONLY public.users ADD CONSTRAINT fk_c \
             FOREIGN KEY (community_id) REFERENCES public.communities(id);",
            USERS_TABLE
        );

        let first = extract_schema(&ddl);
        let second = extract_schema(&ddl);

        assert_eq!(first.tables, second.tables);
        assert_eq!(first.foreign_keys, second.foreign_keys);
    }

    #[test]
    fn test_non_matching_text_yields_empty_results() {
        let parsed = extract_schema("SELECT * FROM somewhere;");
        assert!(parsed.tables.is_empty());
        assert!(parsed.foreign_keys.is_empty());
    }

    // Inline constraints with embedded parens are not decomposed; the line
    // lands in the fragment list as-is.
    #[test]
    fn test_inline_check_constraint_passes_through() {
        let ddl = r#"CREATE TABLE "public"."themes" (
    "id" bigint NOT NULL,
    CONSTRAINT positive_id CHECK ((id > 0))
);"#;

        let tables = extract_tables(ddl);
        assert_eq!(
            tables["themes"],
            vec![
                "id bigint NOT NULL".to_string(),
                "CONSTRAINT positive_id CHECK ((id > 0))".to_string(),
            ]
        );
    }
}
