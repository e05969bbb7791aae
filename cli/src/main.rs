//! okrdeck CLI - OKR status-report extraction tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use okrdeck::{extract_with_options, CsvCleaner, ExtractOptions};

#[derive(Parser)]
#[command(name = "okrdeck")]
#[command(version)]
#[command(about = "Extract OKR status-report tables from slide-deck documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract OKR records from a JSON-serialized document to CSV
    Extract {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long, value_name = "FILE", default_value = "okr_table_data.csv")]
        output: PathBuf,

        /// Scan hidden pages too
        #[arg(long)]
        include_hidden: bool,

        /// Print the table-recognition summary after extracting
        #[arg(long)]
        summary: bool,
    },

    /// Clean a previously extracted CSV dataset
    Clean {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long, value_name = "FILE", default_value = "okr_data_clean.csv")]
        output: PathBuf,
    },

    /// Show which tables in a document match the OKR schema
    Summary {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Scan hidden pages too
        #[arg(long)]
        include_hidden: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            output,
            include_hidden,
            summary,
        } => cmd_extract(&input, &output, include_hidden, summary),
        Commands::Clean { input, output } => cmd_clean(&input, &output),
        Commands::Summary {
            input,
            include_hidden,
        } => cmd_summary(&input, include_hidden),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    input: &Path,
    output: &Path,
    include_hidden: bool,
    summary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = okrdeck::read_document(input)?;
    let options = ExtractOptions::new().include_hidden(include_hidden);
    let extraction = extract_with_options(&doc, options)?;

    okrdeck::output::write_csv(&extraction, output)?;

    if summary {
        println!("{}", extraction.report);
    }
    println!(
        "{} {} OKR table entr{} successfully extracted to {}",
        "Done:".green().bold(),
        extraction.records.len(),
        if extraction.records.len() == 1 { "y" } else { "ies" },
        output.display()
    );
    Ok(())
}

fn cmd_clean(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    CsvCleaner::new().clean_file(input, output)?;
    println!(
        "{} cleaned dataset written to {}",
        "Done:".green().bold(),
        output.display()
    );
    Ok(())
}

fn cmd_summary(input: &Path, include_hidden: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = okrdeck::read_document(input)?;
    let options = ExtractOptions::new().include_hidden(include_hidden);
    let extraction = extract_with_options(&doc, options)?;

    for sighting in &extraction.report.tables {
        if sighting.matched {
            println!("{} on page {}", "OKR table".green(), sighting.page);
        } else {
            println!("{} on page {}", "Not an OKR table".yellow(), sighting.page);
        }
    }
    println!(
        "\n{} total table(s) found, with {} match(es) for an OKR table.",
        extraction.report.total(),
        extraction.report.matches()
    );
    Ok(())
}
