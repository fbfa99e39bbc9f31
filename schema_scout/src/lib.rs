//! schema_scout: offline PostgreSQL schema-dump analysis for migration planning
//!
//! schema_scout reads a `pg_dump`-style DDL file, extracts table and
//! foreign-key definitions with regular expressions, and produces a
//! migration-planning report on the console plus a consolidated summary file.

pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export main types for easier access
pub use config::Config;
pub use error::{Error, Result};
pub use report::Reporter;
pub use schema::classify::Classifier;
pub use schema::types::{Classification, ForeignKeyEdge, ParsedSchema};

use std::path::{Path, PathBuf};

/// Initialize schema_scout with the specified configuration file
pub fn init<P: AsRef<Path>>(config_path: P) -> Result<SchemaScout> {
    let config = config::load_from_file(config_path)?;
    Ok(SchemaScout::new(config))
}

/// Outcome of a single analysis run
#[derive(Debug)]
pub enum RunOutcome {
    /// The input dump was absent; nothing was produced.
    MissingInput,
    /// The report was produced and the summary written.
    Completed { summary_path: PathBuf },
}

/// The main client for running a schema analysis
pub struct SchemaScout {
    config: Config,
}

impl SchemaScout {
    /// Create a new client from configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Access the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the schema dump text, or `None` when the file is absent
    pub fn load_schema(&self) -> Result<Option<String>> {
        loader::load_schema_text(&self.config.input.schema_path)
    }

    /// Parse tables and foreign keys out of the dump text
    pub fn parse_schema(&self, ddl: &str) -> ParsedSchema {
        schema::extractor::extract_schema(ddl)
    }

    /// Bucket the parsed tables for migration planning
    pub fn classify(&self, parsed: &ParsedSchema) -> Classification {
        Classifier::new(&self.config.classify).classify(&parsed.tables)
    }

    /// Complete workflow: load, parse, classify, print, write the summary
    ///
    /// A missing input file is not an error: the run prints a not-found
    /// indication and returns without producing any artifacts.
    pub fn run(&self) -> Result<RunOutcome> {
        let Some(ddl) = self.load_schema()? else {
            println!(
                "❌ Schema file not found: {}",
                self.config.input.schema_path.display()
            );
            return Ok(RunOutcome::MissingInput);
        };

        let parsed = self.parse_schema(&ddl);
        let classes = self.classify(&parsed);
        tracing::info!(
            tables = parsed.tables.len(),
            foreign_keys = parsed.foreign_keys.len(),
            "schema dump parsed"
        );

        let reporter = Reporter::new(&self.config);
        if !self.config.report.quiet {
            print!("{}", reporter.render_console(&parsed, &classes));
        }

        let summary_path = reporter.write_summary(&parsed, &classes)?;
        if !self.config.report.quiet {
            println!(
                "\n✅ Analysis complete! Detailed results saved to {}",
                summary_path.display()
            );
        }

        Ok(RunOutcome::Completed { summary_path })
    }
}
