use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

//==============================================================================
// Input rows
//==============================================================================

/// One line item from the sales CSV.
///
/// Header names are a compatibility contract with the input format and are
/// matched exactly (case and spelling).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "ORDER ID")]
    pub order_id: String,

    #[serde(rename = "ITEM NUMBER")]
    pub item_number: ItemNumber,

    #[serde(rename = "PRODUCT LINE")]
    pub product_line: String,

    #[serde(rename = "PRODUCT CODE")]
    pub product_code: String,

    #[serde(rename = "ITEM QUANTITY")]
    pub item_quantity: f64,

    #[serde(rename = "ITEM PRICE")]
    pub item_price: f64,

    #[serde(rename = "STATUS")]
    pub status: String,

    #[serde(rename = "CUSTOMER NAME")]
    pub customer_name: String,

    /// Passed through verbatim, never parsed as a date
    #[serde(rename = "ORDER DATE")]
    pub order_date: String,
}

/// Sort key for the `ITEM NUMBER` column.
///
/// Values that parse as finite numbers (`3`, `1.5`, `-1`) order numerically;
/// anything else (`A1`) is kept as text. Numbers sort before text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum ItemNumber {
    Number(f64),
    Text(String),
}

impl From<String> for ItemNumber {
    fn from(raw: String) -> Self {
        match raw.trim().parse::<f64>() {
            // + 0.0 folds -0.0 into 0.0 so Eq and Ord agree
            Ok(n) if n.is_finite() => ItemNumber::Number(n + 0.0),
            _ => ItemNumber::Text(raw),
        }
    }
}

impl From<&str> for ItemNumber {
    fn from(raw: &str) -> Self {
        ItemNumber::from(raw.to_string())
    }
}

impl From<u32> for ItemNumber {
    fn from(n: u32) -> Self {
        ItemNumber::Number(f64::from(n))
    }
}

impl Eq for ItemNumber {}

impl Ord for ItemNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ItemNumber::Number(a), ItemNumber::Number(b)) => a.total_cmp(b),
            (ItemNumber::Number(_), ItemNumber::Text(_)) => Ordering::Less,
            (ItemNumber::Text(_), ItemNumber::Number(_)) => Ordering::Greater,
            (ItemNumber::Text(a), ItemNumber::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for ItemNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemNumber::Number(n) => write!(f, "{}", n),
            ItemNumber::Text(s) => f.write_str(s),
        }
    }
}

//==============================================================================
// Derived model
//==============================================================================

/// A sales record with its derived total price
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub record: SalesRecord,
    /// `item_quantity * item_price`, unrounded
    pub total_price: f64,
}

impl LineItem {
    pub fn new(record: SalesRecord) -> Self {
        let total_price = record.item_quantity * record.item_price;
        Self {
            record,
            total_price,
        }
    }
}

/// All line items sharing one order identifier, sorted by item number
#[derive(Debug, Clone, PartialEq)]
pub struct OrderGroup {
    pub order_id: String,
    pub items: Vec<LineItem>,
    pub grand_total: f64,
}

impl OrderGroup {
    /// Rows as rendered in the report: every item, then the grand total
    pub fn report_rows(&self) -> impl Iterator<Item = ReportRow<'_>> {
        self.items
            .iter()
            .map(ReportRow::Item)
            .chain(std::iter::once(ReportRow::GrandTotal {
                total: self.grand_total,
            }))
    }
}

/// A row in an order report.
///
/// The grand total is its own variant so label and numeric cells never share
/// a column type with regular items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportRow<'a> {
    Item(&'a LineItem),
    GrandTotal { total: f64 },
}

//==============================================================================
// Run results
//==============================================================================

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub orders_dir: PathBuf,
    /// Report files in the order they were written
    pub reports: Vec<PathBuf>,
}
