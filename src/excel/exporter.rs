//! Excel exporter implementation

use super::layout::{CellValue, ReportLayout};
use crate::error::{ReportError, ReportResult};
use crate::types::{OrderGroup, ReportRow};
use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes one `.xlsx` report per order
#[derive(Debug, Clone, Default)]
pub struct OrderExporter {
    layout: ReportLayout,
}

/// Formats shared by every cell of one workbook
struct ReportFormats {
    header: Format,
    currency: Format,
}

impl OrderExporter {
    /// Create an exporter with the default column layout
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: ReportLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Path of the report for `order_id` inside `orders_dir`
    pub fn report_path(orders_dir: &Path, order_id: &str) -> PathBuf {
        orders_dir.join(format!("Order_{}.xlsx", order_id))
    }

    /// Worksheet name used for `order_id`
    pub fn sheet_name(order_id: &str) -> String {
        format!("Order {}", order_id)
    }

    /// Write the report for one order, replacing any existing file.
    ///
    /// Returns the path written.
    pub fn export(&self, group: &OrderGroup, orders_dir: &Path) -> ReportResult<PathBuf> {
        let output_path = Self::report_path(orders_dir, &group.order_id);
        let formats = self.create_formats();

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(Self::sheet_name(&group.order_id))
            .map_err(|e| ReportError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.set_columns(worksheet, &formats)?;
        self.write_header(worksheet, &formats)?;

        for (idx, row) in group.report_rows().enumerate() {
            // +1 for header row
            let excel_row = (idx + 1) as RowNum;
            self.write_row(worksheet, excel_row, &row, &formats)?;
        }

        workbook
            .save(&output_path)
            .map_err(|e| ReportError::Export(format!("Failed to save Excel file: {}", e)))?;

        debug!(
            order_id = %group.order_id,
            rows = group.items.len() + 1,
            path = %output_path.display(),
            "wrote order report"
        );

        Ok(output_path)
    }

    fn create_formats(&self) -> ReportFormats {
        ReportFormats {
            header: Format::new().set_bold().set_align(FormatAlign::Center),
            currency: Format::new().set_num_format(&self.layout.currency_format),
        }
    }

    /// Apply column widths, plus the currency format on price columns
    fn set_columns(&self, worksheet: &mut Worksheet, formats: &ReportFormats) -> ReportResult<()> {
        for (col_idx, spec) in self.layout.columns.iter().enumerate() {
            let col = col_idx as ColNum;
            worksheet
                .set_column_width(col, spec.width)
                .map_err(|e| ReportError::Export(format!("Failed to set column width: {}", e)))?;

            if spec.column.is_currency() {
                worksheet
                    .set_column_format(col, &formats.currency)
                    .map_err(|e| {
                        ReportError::Export(format!("Failed to set column format: {}", e))
                    })?;
            }
        }
        Ok(())
    }

    fn write_header(&self, worksheet: &mut Worksheet, formats: &ReportFormats) -> ReportResult<()> {
        for (col_idx, spec) in self.layout.columns.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col_idx as ColNum, spec.column.header(), &formats.header)
                .map_err(|e| ReportError::Export(format!("Failed to write header: {}", e)))?;
        }
        Ok(())
    }

    fn write_row(
        &self,
        worksheet: &mut Worksheet,
        row: RowNum,
        report_row: &ReportRow<'_>,
        formats: &ReportFormats,
    ) -> ReportResult<()> {
        for (col_idx, spec) in self.layout.columns.iter().enumerate() {
            let col = col_idx as ColNum;
            match self.layout.cell(report_row, spec.column) {
                CellValue::Text(value) => {
                    worksheet
                        .write_string(row, col, value)
                        .map_err(|e| ReportError::Export(format!("Failed to write text: {}", e)))?;
                }
                CellValue::Number(value) if spec.column.is_currency() => {
                    worksheet
                        .write_number_with_format(row, col, value, &formats.currency)
                        .map_err(|e| {
                            ReportError::Export(format!("Failed to write amount: {}", e))
                        })?;
                }
                CellValue::Number(value) => {
                    worksheet.write_number(row, col, value).map_err(|e| {
                        ReportError::Export(format!("Failed to write number: {}", e))
                    })?;
                }
                CellValue::Blank => {}
            }
        }
        Ok(())
    }
}
