use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use scpi_catalog_core::{Catalog, validate_catalog};
use scpi_catalog_extract::builder::{SourceDocument, build_catalog};
use scpi_catalog_extract::report::report_for;

/// Output format for catalogs and reports.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("catalog validation failed with {0} error(s)")]
    InvalidCatalog(usize),
}

#[derive(Debug, Parser)]
#[command(name = "scpi-catalog")]
#[command(about = "Build and validate instrument command catalogs from guide tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a catalog from a source-document JSON file.
    Build(BuildArgs),
    /// Emit the aggregate extraction report for a source document.
    Report(ReportArgs),
    /// Validate one or more catalog JSON files.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// Source document: table of contents plus per-category rows.
    input: PathBuf,
    /// Output path; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Output format (default: json).
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Source document: table of contents plus per-category rows.
    input: PathBuf,
    /// Output format (default: json).
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Catalog JSON files to check.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Build(args) => run_build(args),
        Command::Report(args) => run_report(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_build(args: BuildArgs) -> Result<(), CliError> {
    let doc = read_document(&args.input)?;
    let catalog = build_catalog(&doc);
    let rendered = render(&catalog, args.format)?;

    match args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<(), CliError> {
    let doc = read_document(&args.input)?;
    let report = report_for(&build_catalog(&doc));
    println!("{}", render(&report, args.format)?);
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let mut total_errors = 0;

    for path in &args.inputs {
        let catalog: Catalog = serde_json::from_str(&fs::read_to_string(path)?)?;
        let errors = validate_catalog(&catalog);
        for error in &errors {
            eprintln!("{}: {error}", path.display());
        }
        if errors.is_empty() {
            println!("{}: ok ({} entries)", path.display(), catalog.entry_count());
        }
        total_errors += errors.len();
    }

    if total_errors > 0 {
        return Err(CliError::InvalidCatalog(total_errors));
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<SourceDocument, CliError> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn render<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}
