use crate::core::OrderBook;
use crate::error::{ReportError, ReportResult};
use crate::excel::OrderExporter;
use crate::parser;
use crate::types::RunSummary;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Format an amount the way the reports display it ($1,234.50)
fn format_currency(n: f64) -> String {
    let cents = (n.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if n < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Check that the sales CSV exists and is a regular file
pub fn resolve_input(path: PathBuf) -> ReportResult<PathBuf> {
    if !path.is_file() {
        return Err(ReportError::NotFound(path));
    }
    Ok(path)
}

/// `Orders_<YYYY-MM-DD>` next to the input file
pub fn orders_dir_for(sales_csv: &Path, run_date: NaiveDate) -> PathBuf {
    let parent = sales_csv.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("Orders_{}", run_date.format("%Y-%m-%d")))
}

/// Create the dated orders directory if it does not exist yet
pub fn create_orders_dir(sales_csv: &Path, run_date: NaiveDate) -> ReportResult<PathBuf> {
    let orders_dir = orders_dir_for(sales_csv, run_date);
    if orders_dir.is_dir() {
        debug!(dir = %orders_dir.display(), "orders directory already exists");
    } else {
        fs::create_dir_all(&orders_dir)?;
        info!(dir = %orders_dir.display(), "created orders directory");
    }
    Ok(orders_dir)
}

/// Parse the sales CSV and write one report per order into `orders_dir`.
///
/// The whole file is parsed before the first report is written.
pub fn process_sales_data(
    sales_csv: &Path,
    orders_dir: &Path,
    exporter: &OrderExporter,
    verbose: bool,
) -> ReportResult<Vec<PathBuf>> {
    if verbose {
        println!("{}", "📖 Reading sales data...".cyan());
    }

    let records = parser::parse_sales_csv(sales_csv)?;
    let book = OrderBook::from_records(records);
    info!(
        orders = book.len(),
        items = book.item_count(),
        "grouped sales records"
    );

    if verbose {
        println!(
            "   Found {} orders, {} line items\n",
            book.len(),
            book.item_count()
        );
        println!("{}", "📊 Writing order reports...".cyan());
    }

    let mut reports = Vec::with_capacity(book.len());
    for group in book.groups() {
        let path = exporter.export(group, orders_dir)?;
        if verbose {
            println!(
                "   Order {}: {} items, total {}",
                group.order_id.bright_blue().bold(),
                group.items.len(),
                format_currency(group.grand_total).bold()
            );
        }
        reports.push(path);
    }

    Ok(reports)
}

/// Run the whole pipeline for a resolved input and a fixed run date
pub fn generate_reports(
    sales_csv: &Path,
    run_date: NaiveDate,
    verbose: bool,
) -> ReportResult<RunSummary> {
    let orders_dir = create_orders_dir(sales_csv, run_date)?;
    let exporter = OrderExporter::new();
    let reports = process_sales_data(sales_csv, &orders_dir, &exporter, verbose)?;
    info!(
        reports = reports.len(),
        dir = %orders_dir.display(),
        "order reports written"
    );
    Ok(RunSummary {
        orders_dir,
        reports,
    })
}

/// Execute the generate command, dated with today's local date
pub fn generate(sales_csv: PathBuf, verbose: bool) -> ReportResult<RunSummary> {
    let run_date = Local::now().date_naive();

    println!("{}", "🔥 Order Reports - Excel Export".bold().green());
    println!("   Input:    {}", sales_csv.display());
    println!("   Run date: {}\n", run_date.format("%Y-%m-%d"));

    let summary = generate_reports(&sales_csv, run_date, verbose)?;

    if verbose {
        println!();
    }
    println!("{}", "✅ Export Complete!".bold().green());
    println!("   Orders directory: {}", summary.orders_dir.display());
    println!("   Reports written:  {}\n", summary.reports.len());

    Ok(summary)
}
