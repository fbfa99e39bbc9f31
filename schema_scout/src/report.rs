//! Report rendering
//!
//! This module renders the console report and the consolidated summary file
//! from the parsed schema.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::schema::type_map;
use crate::schema::types::{Classification, ParsedSchema, TsType};
use crate::utils::naming;

const SECTION_RULE: &str = "==================================================";

/// Report generator for a parsed schema
pub struct Reporter<'a> {
    config: &'a Config,
}

impl<'a> Reporter<'a> {
    /// Create a new reporter
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the full console report.
    pub fn render_console(&self, schema: &ParsedSchema, classes: &Classification) -> String {
        let mut out = String::new();

        out.push_str("🔍 Analyzing database schema for TypeScript migration\n");

        self.push_core_tables(&mut out, schema, classes);
        self.push_junction_tables(&mut out, schema, classes);
        self.push_media_tables(&mut out, classes);
        self.push_foreign_keys(&mut out, schema);
        self.push_type_insights(&mut out, schema, classes);
        self.push_migration_priority(&mut out, schema, classes);

        out
    }

    fn push_core_tables(
        &self,
        out: &mut String,
        schema: &ParsedSchema,
        classes: &Classification,
    ) {
        let max_columns = self.config.report.max_core_columns;

        out.push_str("\n📊 CORE DOMAIN TABLES:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');

        for table in &classes.core {
            let Some(columns) = schema.tables.get(table) else {
                continue;
            };

            out.push_str(&format!("\n🏷️  {}:\n", table.to_uppercase()));
            for column in columns.iter().take(max_columns) {
                out.push_str(&format!("   • {}\n", column));
            }
            if columns.len() > max_columns {
                out.push_str(&format!(
                    "   ... and {} more columns\n",
                    columns.len() - max_columns
                ));
            }
        }
    }

    fn push_junction_tables(
        &self,
        out: &mut String,
        schema: &ParsedSchema,
        classes: &Classification,
    ) {
        out.push_str("\n🔗 RELATIONSHIP TABLES:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');

        for table in &classes.junction {
            out.push_str(&format!("• {}\n", table));
            if let Some(columns) = schema.tables.get(table) {
                for column in columns {
                    out.push_str(&format!("  - {}\n", column));
                }
            }
        }
    }

    fn push_media_tables(&self, out: &mut String, classes: &Classification) {
        out.push_str("\n📱 MEDIA TABLES:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');

        for table in &classes.media {
            out.push_str(&format!("• {}\n", table));
        }
    }

    fn push_foreign_keys(&self, out: &mut String, schema: &ParsedSchema) {
        out.push_str("\n🔗 FOREIGN KEY RELATIONSHIPS:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');

        for fk in &schema.foreign_keys {
            out.push_str(&format!(
                "• {}.{} → {}.{}\n",
                fk.source_table, fk.source_column, fk.target_table, fk.target_column
            ));
        }
    }

    fn push_type_insights(
        &self,
        out: &mut String,
        schema: &ParsedSchema,
        classes: &Classification,
    ) {
        out.push_str("\n🎯 TYPESCRIPT MIGRATION INSIGHTS:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');
        out.push_str("\n📋 Recommended TypeScript Types:\n");

        for preview in self.interface_previews(schema, classes) {
            out.push_str(&format!("\n// {} entity\n", preview.interface));
            out.push_str(&format!("interface {} {{\n", preview.interface));

            for field in &preview.fields {
                let optional = if field.nullable { "?" } else { "" };
                out.push_str(&format!(
                    "  {}{}: {};\n",
                    field.name, optional, field.ts_type
                ));
            }

            out.push_str("  // ... other fields\n");
            out.push_str("}\n");
        }
    }

    fn push_migration_priority(
        &self,
        out: &mut String,
        schema: &ParsedSchema,
        classes: &Classification,
    ) {
        out.push_str("\n🗺️ MIGRATION PRIORITY:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');

        let mut step = 0;
        let mut push_step = |out: &mut String, label: &str, names: &str| {
            step += 1;
            out.push_str(&format!("{}. {}: {}\n", step, label, names));
        };

        if !classes.core.is_empty() {
            let entities: Vec<String> =
                classes.core.iter().map(|t| naming::entity_name(t)).collect();
            push_step(out, "Core entities", &entities.join(", "));
        }
        if !classes.junction.is_empty() {
            push_step(out, "Relationship tables", &classes.junction.join(", "));
        }
        if !classes.media.is_empty() {
            push_step(out, "Media tables", &classes.media.join(", "));
        }

        let remainder = classes.remainder(schema.tables.keys());
        if !remainder.is_empty() {
            push_step(out, "Remaining tables", &remainder.join(", "));
        }
    }

    /// Render the summary file in the plain-text format.
    pub fn render_summary_text(
        &self,
        schema: &ParsedSchema,
        classes: &Classification,
    ) -> String {
        let mut out = String::new();

        out.push_str("SCHEMA MIGRATION ANALYSIS\n");
        out.push_str(&format!("Generated: {}\n\n", generated_at()));

        out.push_str("CORE TABLES:\n");
        for table in &classes.core {
            let Some(columns) = schema.tables.get(table) else {
                continue;
            };

            out.push_str(&format!("\n{}:\n", table));
            for column in columns {
                out.push_str(&format!("  {}\n", column));
            }
        }

        out.push_str("\nFOREIGN KEYS:\n");
        for fk in &schema.foreign_keys {
            out.push_str(&format!(
                "{}.{} → {}.{}\n",
                fk.source_table, fk.source_column, fk.target_table, fk.target_column
            ));
        }

        out
    }

    /// Render the summary file in the JSON format.
    pub fn render_summary_json(
        &self,
        schema: &ParsedSchema,
        classes: &Classification,
    ) -> Result<String> {
        let document = AnalysisDocument {
            generated_at: generated_at(),
            schema,
            classification: classes,
            interfaces: self.interface_previews(schema, classes),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Path of the summary file for the configured format.
    pub fn summary_path(&self) -> PathBuf {
        let report = &self.config.report;

        let file_name = if report.format == "json" {
            Path::new(&report.file_name).with_extension("json")
        } else {
            PathBuf::from(&report.file_name)
        };

        report.output_directory.join(file_name)
    }

    /// Write the summary file, creating the output directory if absent.
    /// An existing file of the same name is overwritten.
    pub fn write_summary(
        &self,
        schema: &ParsedSchema,
        classes: &Classification,
    ) -> Result<PathBuf> {
        let report = &self.config.report;

        let content = match report.format.as_str() {
            "text" => self.render_summary_text(schema, classes),
            "json" => self.render_summary_json(schema, classes)?,
            other => {
                return Err(Error::ReportError(format!(
                    "Unsupported report format: {}",
                    other
                )))
            }
        };

        fs::create_dir_all(&report.output_directory)?;
        let path = self.summary_path();
        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "summary written");

        Ok(path)
    }

    fn interface_previews(
        &self,
        schema: &ParsedSchema,
        classes: &Classification,
    ) -> Vec<InterfacePreview> {
        let max_fields = self.config.report.max_preview_fields;

        classes
            .core
            .iter()
            .filter_map(|table| {
                let columns = schema.tables.get(table)?;

                let fields = columns
                    .iter()
                    .take(max_fields)
                    .filter_map(|fragment| {
                        Some(FieldSuggestion {
                            name: type_map::field_name(fragment)?.to_string(),
                            ts_type: type_map::suggest_type(fragment),
                            nullable: type_map::is_nullable(fragment),
                        })
                    })
                    .collect();

                Some(InterfacePreview {
                    table: table.clone(),
                    interface: naming::interface_name(table),
                    fields,
                })
            })
            .collect()
    }
}

fn generated_at() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Top-level shape of the JSON summary
#[derive(Serialize)]
struct AnalysisDocument<'a> {
    generated_at: String,
    #[serde(flatten)]
    schema: &'a ParsedSchema,
    classification: &'a Classification,
    interfaces: Vec<InterfacePreview>,
}

/// One TypeScript interface preview
#[derive(Serialize)]
struct InterfacePreview {
    table: String,
    interface: String,
    fields: Vec<FieldSuggestion>,
}

/// One suggested interface field
#[derive(Serialize)]
struct FieldSuggestion {
    name: String,
    ts_type: TsType,
    nullable: bool,
}
