//! Command-line entry point for schema_scout

use std::path::PathBuf;

use clap::Parser;

use schema_scout::utils::logging;
use schema_scout::{config, Config, SchemaScout};

#[derive(Parser, Debug)]
#[command(
    name = "schema_scout",
    version,
    about = "Analyze a PostgreSQL schema dump for migration planning"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the SQL schema dump
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Directory the summary file is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Summary format: text or json
    #[arg(short, long)]
    format: Option<String>,

    /// Suppress the console report; the summary file is still written
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from_file(path)?,
        None => Config::default(),
    };

    if let Some(schema) = cli.schema {
        config.input.schema_path = schema;
    }
    if let Some(output_dir) = cli.output_dir {
        config.report.output_directory = output_dir;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if cli.quiet {
        config.report.quiet = true;
    }

    logging::init_logging(&config.logging)?;

    SchemaScout::new(config).run()?;

    Ok(())
}
