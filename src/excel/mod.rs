//! Excel export of per-order reports
//!
//! Each order becomes one workbook with a single worksheet: a styled header,
//! one row per line item and a trailing grand total row.

mod exporter;
pub mod layout;

pub use exporter::OrderExporter;
pub use layout::{CellValue, ColumnSpec, ReportColumn, ReportLayout};
