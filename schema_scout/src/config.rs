//! Configuration handling for schema_scout

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Load configuration from a TOML file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config_str = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Represents the complete schema_scout configuration
///
/// Every section is optional; the defaults reproduce the zero-configuration
/// behavior (fixed relative input/output paths, the stock core-table list).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub report: ReportConfig,
    pub classify: ClassifyConfig,
    pub logging: Option<LoggingConfig>,
}

/// Input location configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub schema_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from("dump-analysis/schema.sql"),
        }
    }
}

/// Report generation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    pub output_directory: PathBuf,
    /// Summary file name; for the `json` format the extension is swapped to
    /// `.json`.
    pub file_name: String,
    /// `text` or `json`
    pub format: String,
    /// Suppress the console report; the summary file is still written.
    pub quiet: bool,
    /// How many columns of each core table the console report shows.
    pub max_core_columns: usize,
    /// How many fields each TypeScript interface preview shows.
    pub max_preview_fields: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("migration-analysis"),
            file_name: "schema_analysis.txt".to_string(),
            format: "text".to_string(),
            quiet: false,
            max_core_columns: 10,
            max_preview_fields: 5,
        }
    }
}

/// Table classification configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Tables considered central to the domain, in migration-priority order.
    pub core_tables: Vec<String>,
    /// Name prefix marking attachment/media tables.
    pub media_prefix: String,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            core_tables: [
                "communities",
                "users",
                "stories",
                "places",
                "speakers",
                "themes",
                "curriculums",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            media_prefix: "active_storage".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub stdout: bool,
    pub include_timestamps: bool,
}
