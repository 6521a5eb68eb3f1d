//! Order Reports - split a sales CSV into per-order Excel reports
//!
//! Reads a flat table of sales line items, groups them by `ORDER ID`,
//! computes `TOTAL PRICE = ITEM QUANTITY * ITEM PRICE` per line and a grand
//! total per order, then writes one formatted `.xlsx` file per order into an
//! `Orders_<YYYY-MM-DD>` directory next to the input.
//!
//! # Example
//!
//! ```no_run
//! use order_reports::core::OrderBook;
//! use order_reports::excel::OrderExporter;
//! use order_reports::parser::parse_sales_csv;
//! use std::path::Path;
//!
//! let records = parse_sales_csv(Path::new("sales_data.csv"))?;
//! let book = OrderBook::from_records(records);
//!
//! let exporter = OrderExporter::new();
//! for group in book.groups() {
//!     let path = exporter.export(group, Path::new("Orders_2024-01-15"))?;
//!     println!("{}: {}", group.order_id, path.display());
//! }
//! # Ok::<(), order_reports::error::ReportError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use error::{ReportError, ReportResult};
pub use types::{ItemNumber, LineItem, OrderGroup, ReportRow, RunSummary, SalesRecord};
