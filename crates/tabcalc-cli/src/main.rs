//! tabcalc CLI - spreadsheet grid evaluator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tabcalc::prelude::*;

#[derive(Parser)]
#[command(name = "tabcalc")]
#[command(author, version, about = "Spreadsheet grid evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every cell of a grid and output the values to stdout or file
    Eval {
        /// Input grid file (header line `rows<TAB>columns`, then tab-separated rows)
        input: PathBuf,

        /// Output file (default: stdout)
        output: Option<PathBuf>,

        /// Write values only, without column letters and row numbers
        #[arg(short, long)]
        plain: bool,

        /// Accept a row count that differs from the header
        #[arg(long)]
        lenient: bool,
    },

    /// Show information about a grid
    Info {
        /// Input grid file
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            input,
            output,
            plain,
            lenient,
        } => eval(&input, output.as_deref(), plain, lenient),
        Commands::Info { input, json } => show_info(&input, json),
    }
}

fn open(input: &Path, lenient: bool) -> Result<Spreadsheet> {
    let options = TsvReadOptions {
        strict_rows: !lenient,
        ..Default::default()
    };
    TsvReader::read_file(input, &options)
        .with_context(|| format!("Failed to read '{}'", input.display()))
}

fn eval(input: &Path, output: Option<&Path>, plain: bool, lenient: bool) -> Result<()> {
    let mut sheet = open(input, lenient)?;
    let stats = sheet.calculate();

    let options = TsvWriteOptions {
        labels: !plain,
        ..Default::default()
    };

    if let Some(output_path) = output {
        TsvWriter::write_file(&sheet, output_path, &options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Calculated {} cells ({} formulas, {} errors), wrote {} rows to '{}'",
            stats.cells_calculated,
            stats.formula_count,
            stats.errors,
            sheet.row_count(),
            output_path.display()
        );
    } else {
        TsvWriter::write(&sheet, io::stdout().lock(), &options)
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

#[derive(Serialize)]
struct GridInfo {
    file: String,
    rows: usize,
    columns: usize,
    cells: BTreeMap<&'static str, usize>,
    stats: CalculationStats,
}

fn show_info(input: &Path, json: bool) -> Result<()> {
    let mut sheet = open(input, false)?;

    let mut cells: BTreeMap<&'static str, usize> =
        CellKind::ALL.iter().map(|kind| (kind.as_str(), 0)).collect();
    for cell in sheet.cells() {
        *cells.entry(cell.kind().as_str()).or_default() += 1;
    }

    let info = GridInfo {
        file: input.display().to_string(),
        rows: sheet.row_count(),
        columns: sheet.column_count(),
        cells,
        stats: sheet.calculate(),
    };

    if json {
        let text = serde_json::to_string_pretty(&info).context("Failed to serialize info")?;
        println!("{}", text);
        return Ok(());
    }

    println!("File: {}", info.file);
    println!("Size: {} rows x {} columns", info.rows, info.columns);
    println!();
    println!("  Cells:");
    for (kind, count) in &info.cells {
        println!("    {}: {}", kind, count);
    }
    println!();
    println!("  Formulas: {}", info.stats.formula_count);
    println!("  Errors: {}", info.stats.errors);
    println!("    Circular references: {}", info.stats.circular_references);
    println!("    Division by zero: {}", info.stats.division_by_zero);

    Ok(())
}
