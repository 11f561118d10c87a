//! Command-line interface for fakecsv
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 1000 en_US rows with names and emails, exported as CSV, xlsx and JSON
//! fakecsv generate --fields "Full Name,Email" --output-dir out
//!
//! # Healthcare preset in French with a custom column and noise
//! fakecsv generate --locale fr_FR --preset Healthcare \
//!   --custom Score:Integer --row-count 200 \
//!   --null-percent 10 --duplicates --duplicate-fraction 0.2 --seed 42
//!
//! # Inspect without writing files
//! fakecsv generate --preset Finance --no-export --summary \
//!   --chart City --search paris --sql-table accounts
//! ```
//!
//! ## List
//! ```bash
//! # Supported locales, built-in fields and presets
//! fakecsv list
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use fakecsv::export::{sql_preview, to_csv, write_exports};
use fakecsv::summary::{describe, search, unique_values, value_counts};
use fakecsv::{GenerateArgs, Table, TableSlot};
use fakecsv_core::{BuiltinField, CategoryPreset, Locale};

/// Widest bar printed by `--chart`.
const CHART_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "fakecsv")]
#[command(about = "Generate locale-aware fake tabular datasets with controlled noise")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a table, export it and optionally inspect it
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// List supported locales, built-in fields and category presets
    List,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args)?,
        Commands::List => print_catalog(),
    }

    Ok(())
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = args.to_run_config()?;
    let slot = TableSlot::new();

    let outcome = fakecsv::run(&config, &slot).context("Failed to generate table")?;
    let table = outcome.table;
    tracing::info!(
        "Generated {} rows x {} columns in {:?} (seed={})",
        table.row_count(),
        table.column_count(),
        outcome.synthesis.duration,
        outcome.seed
    );

    if !args.no_export {
        let written = write_exports(&table, &args.output_dir, &args.formats)
            .with_context(|| format!("Failed to export to {:?}", args.output_dir))?;
        for file in &written {
            println!("Wrote {} ({} bytes)", file.path.display(), file.bytes);
        }
    }

    if args.preview > 0 {
        let preview = to_csv(&table.head(args.preview)).context("Failed to render preview")?;
        print!("{preview}");
    }

    if args.summary {
        print_summary(&table);
    }

    if let Some(column) = &args.chart {
        print_chart(&table, column)?;
    }

    if let Some(query) = &args.search {
        let found = search(&table, query, !args.case_sensitive);
        println!("Search '{}': {} matching rows", query, found.row_count());
        if !found.is_empty() {
            print!("{}", to_csv(&found).context("Failed to render search results")?);
        }
    }

    if let Some(table_name) = &args.sql_table {
        let sql = sql_preview(&table, table_name, args.sql_limit)
            .context("Failed to build SQL preview")?;
        println!("{sql}");
    }

    Ok(())
}

fn print_summary(table: &Table) {
    println!("Summary");
    print!("{}", describe(table));

    println!();
    println!("Unique values");
    for listing in unique_values(table) {
        println!("{} ({} unique)", listing.column, listing.distinct);
        println!("  {}", listing.sample.join(", "));
    }
}

fn print_chart(table: &Table, column: &str) -> anyhow::Result<()> {
    let counts = value_counts(table, column)
        .with_context(|| format!("Failed to count values of '{column}'"))?;
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    let label_width = counts
        .iter()
        .map(|c| c.value.to_string().chars().count())
        .max()
        .unwrap_or(0);

    println!("{column}");
    for entry in &counts {
        let bar = if max == 0 { 0 } else { entry.count * CHART_WIDTH / max };
        println!(
            "{:<label_width$} | {} {}",
            entry.value.to_string(),
            "#".repeat(bar.max(1)),
            entry.count
        );
    }
    Ok(())
}

fn print_catalog() {
    println!("Locales:");
    for locale in Locale::ALL {
        println!("  {:<6} {}", locale.code(), locale.label());
    }

    println!("Fields:");
    for field in BuiltinField::ALL {
        println!("  {}", field.name());
    }

    println!("Presets:");
    for preset in CategoryPreset::ALL {
        let fields: Vec<&str> = preset.fields().iter().map(|f| f.name()).collect();
        println!("  {:<11} {}", preset.name(), fields.join(", "));
    }
}
