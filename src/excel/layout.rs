//! Column layout for order reports

use crate::types::{ItemNumber, LineItem, ReportRow};

/// Currency number format for price columns
pub const CURRENCY_FORMAT: &str = "$#,##0.00";

/// Label written in the item-number column of the summary row
pub const GRAND_TOTAL_LABEL: &str = "GRAND TOTAL";

/// A column of an order report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportColumn {
    OrderId,
    OrderDate,
    ItemNumber,
    ProductLine,
    ProductCode,
    ItemQuantity,
    ItemPrice,
    TotalPrice,
    Status,
    CustomerName,
}

/// The value of one cell, before formatting
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

impl ReportColumn {
    pub fn header(self) -> &'static str {
        match self {
            ReportColumn::OrderId => "ORDER ID",
            ReportColumn::OrderDate => "ORDER DATE",
            ReportColumn::ItemNumber => "ITEM NUMBER",
            ReportColumn::ProductLine => "PRODUCT LINE",
            ReportColumn::ProductCode => "PRODUCT CODE",
            ReportColumn::ItemQuantity => "ITEM QUANTITY",
            ReportColumn::ItemPrice => "ITEM PRICE",
            ReportColumn::TotalPrice => "TOTAL PRICE",
            ReportColumn::Status => "STATUS",
            ReportColumn::CustomerName => "CUSTOMER NAME",
        }
    }

    /// Width in Excel character units
    pub fn default_width(self) -> f64 {
        match self {
            ReportColumn::OrderId => 10.0,
            ReportColumn::OrderDate => 11.0,
            ReportColumn::ItemNumber => 13.0,
            ReportColumn::ProductLine => 15.0,
            ReportColumn::ProductCode => 15.0,
            ReportColumn::ItemQuantity => 15.0,
            ReportColumn::ItemPrice => 13.0,
            ReportColumn::TotalPrice => 13.0,
            ReportColumn::Status => 10.0,
            ReportColumn::CustomerName => 30.0,
        }
    }

    pub fn is_currency(self) -> bool {
        matches!(self, ReportColumn::ItemPrice | ReportColumn::TotalPrice)
    }

    fn item_value(self, item: &LineItem) -> CellValue<'_> {
        let record = &item.record;
        match self {
            ReportColumn::OrderId => CellValue::Text(&record.order_id),
            ReportColumn::OrderDate => CellValue::Text(&record.order_date),
            ReportColumn::ItemNumber => match &record.item_number {
                ItemNumber::Number(n) => CellValue::Number(*n),
                ItemNumber::Text(s) => CellValue::Text(s),
            },
            ReportColumn::ProductLine => CellValue::Text(&record.product_line),
            ReportColumn::ProductCode => CellValue::Text(&record.product_code),
            ReportColumn::ItemQuantity => CellValue::Number(record.item_quantity),
            ReportColumn::ItemPrice => CellValue::Number(record.item_price),
            ReportColumn::TotalPrice => CellValue::Number(item.total_price),
            ReportColumn::Status => CellValue::Text(&record.status),
            ReportColumn::CustomerName => CellValue::Text(&record.customer_name),
        }
    }
}

/// A column and its width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub column: ReportColumn,
    pub width: f64,
}

impl From<ReportColumn> for ColumnSpec {
    fn from(column: ReportColumn) -> Self {
        Self {
            column,
            width: column.default_width(),
        }
    }
}

/// Column order, widths and formats used when writing an order report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub columns: Vec<ColumnSpec>,
    pub currency_format: String,
    pub grand_total_label: String,
}

impl Default for ReportLayout {
    fn default() -> Self {
        let columns = [
            ReportColumn::OrderId,
            ReportColumn::OrderDate,
            ReportColumn::ItemNumber,
            ReportColumn::ProductLine,
            ReportColumn::ProductCode,
            ReportColumn::ItemQuantity,
            ReportColumn::ItemPrice,
            ReportColumn::TotalPrice,
            ReportColumn::Status,
            ReportColumn::CustomerName,
        ];
        Self {
            columns: columns.into_iter().map(ColumnSpec::from).collect(),
            currency_format: CURRENCY_FORMAT.to_string(),
            grand_total_label: GRAND_TOTAL_LABEL.to_string(),
        }
    }
}

impl ReportLayout {
    /// Value of `column` for one report row.
    ///
    /// The grand total row carries the label under item number and the total
    /// under total price; every other cell is blank.
    pub fn cell<'a>(&'a self, row: &ReportRow<'a>, column: ReportColumn) -> CellValue<'a> {
        match *row {
            ReportRow::Item(item) => column.item_value(item),
            ReportRow::GrandTotal { total } => match column {
                ReportColumn::ItemNumber => CellValue::Text(&self.grand_total_label),
                ReportColumn::TotalPrice => CellValue::Number(total),
                _ => CellValue::Blank,
            },
        }
    }
}
