//! ForestSleuth — leaf, category and subtree-size analysis of record forests.
//!
//! Thin binary entry point. All logic lives in the `forestsleuth-core` crate.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use forestsleuth_core::fixture::reference_records;
use forestsleuth_core::loader::RecordFormat;
use forestsleuth_core::{analyse, validate, ForestReport, Record};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "forestsleuth",
    version,
    about = "Analyse a flat file/folder record collection: leaves, top categories, largest subtree"
)]
struct Cli {
    /// Record file (.json or .csv). Uses the built-in reference records when omitted.
    input: Option<PathBuf>,

    /// Number of categories to rank.
    #[arg(short = 'k', long = "top", default_value_t = 3)]
    top: usize,

    /// Input format, overriding detection by file extension.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Reject duplicate ids, missing parents and self-parented records instead of analysing them.
    #[arg(long)]
    strict: bool,

    /// Print the report as pretty JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Json,
    Csv,
}

impl From<InputFormat> for RecordFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => RecordFormat::Json,
            InputFormat::Csv => RecordFormat::Csv,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging. Logs go to stderr so stdout stays
    // parseable in --json mode.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let records = match &cli.input {
        Some(path) => match load_records(path, cli.format) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Rejected input {}: {e:#}", path.display());
                return Err(e);
            }
        },
        None => {
            tracing::info!("No input given; using the reference records");
            reference_records()
        }
    };
    tracing::info!("Analysing {} records", records.len());

    if cli.strict {
        if let Err(e) = validate(&records) {
            tracing::warn!("Validation failed: {e}");
            return Err(e).context("input records are malformed");
        }
    }

    let report = analyse(&records, cli.top);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn load_records(path: &Path, format: Option<InputFormat>) -> anyhow::Result<Vec<Record>> {
    let format = match format {
        Some(f) => f.into(),
        None => RecordFormat::from_path(path)?,
    };
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let records = format
        .load(BufReader::new(file))
        .with_context(|| format!("failed to load records from {}", path.display()))?;
    Ok(records)
}

fn print_report(report: &ForestReport) {
    println!(
        "Records: {}  Roots: {}  Leaf records: {}",
        report.record_count, report.root_count, report.leaf_count
    );

    println!("\nLeaves ({}):", report.leaves.len());
    for name in &report.leaves {
        println!("  {name}");
    }

    println!("\nTop categories:");
    for (rank, category) in report.top_categories.iter().enumerate() {
        println!("  {:>2}. {} ({})", rank + 1, category.name, category.count);
    }

    println!("\nSubtree totals:");
    for total in &report.subtrees {
        println!("  {:>12}  {} (id {})", total.size, total.name, total.id);
    }

    println!("\nLargest subtree size: {}", report.largest_subtree_size);
}
