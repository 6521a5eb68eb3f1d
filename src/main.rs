use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use order_reports::cli;
use order_reports::error::ReportError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "order-reports")]
#[command(about = "Split a sales CSV into one formatted Excel report per order.")]
#[command(long_about = "Order Reports - one Excel workbook per sales order

Reads a sales CSV, groups line items by ORDER ID, computes
TOTAL PRICE (ITEM QUANTITY x ITEM PRICE) and a GRAND TOTAL per order,
and writes Orders_<YYYY-MM-DD>/Order_<id>.xlsx next to the input file.

REQUIRED COLUMNS:
  ORDER ID, ITEM NUMBER, PRODUCT LINE, PRODUCT CODE, ITEM QUANTITY,
  ITEM PRICE, STATUS, CUSTOMER NAME, ORDER DATE

EXAMPLES:
  order-reports sales_data.csv          # Write reports
  order-reports sales_data.csv -v       # Show per-order progress
  RUST_LOG=order_reports=debug order-reports sales_data.csv")]
#[command(version)]
struct Cli {
    /// Path to the sales data CSV file
    sales_csv: PathBuf,

    /// Show per-order progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "❌ Error:".bold().red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = parse_cli()?;
    init_tracing(cli.verbose);

    let sales_csv = cli::resolve_input(cli.sales_csv)?;
    cli::generate(sales_csv.clone(), cli.verbose)
        .with_context(|| format!("Failed to write order reports for {}", sales_csv.display()))?;

    Ok(())
}

/// Parse arguments, turning clap's usage failures into a `ReportError::Usage`
/// so they exit with status 1. Help and version still print and exit 0.
fn parse_cli() -> Result<Cli, ReportError> {
    Cli::try_parse().map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => ReportError::Usage(
            err.to_string()
                .trim_start_matches("error: ")
                .trim_end()
                .to_string(),
        ),
    })
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "order_reports=info"
    } else {
        "order_reports=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
