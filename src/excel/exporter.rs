//! Excel exporter implementation - Sheet → Excel (.xlsx)

use crate::error::{RosterError, RosterResult};
use crate::types::{CellValue, Sheet};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Writes one sheet to a fresh workbook, replacing any existing file
pub struct ExcelExporter {
    sheet: Sheet,
}

impl ExcelExporter {
    /// Create a new Excel exporter
    pub fn new(sheet: Sheet) -> Self {
        Self { sheet }
    }

    /// Export the sheet to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> RosterResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&self.sheet.name)
            .map_err(|e| RosterError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_header(worksheet)?;
        self.write_rows(worksheet)?;
        worksheet.autofit();

        workbook
            .save(output_path)
            .map_err(|e| RosterError::Export(format!("Failed to save Excel file: {}", e)))?;

        tracing::info!(
            path = %output_path.display(),
            sheet = %self.sheet.name,
            rows = self.sheet.len(),
            "wrote workbook"
        );
        Ok(())
    }

    fn write_header(&self, worksheet: &mut Worksheet) -> RosterResult<()> {
        let header_format = Format::new().set_bold();
        for (col, header) in self.sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }
        Ok(())
    }

    fn write_rows(&self, worksheet: &mut Worksheet) -> RosterResult<()> {
        let width = self.sheet.headers.len();
        for (row_idx, row) in self.sheet.rows.iter().enumerate() {
            let excel_row = (row_idx + 1) as u32;
            // Cells past the header width have no column to land in
            for (col, value) in row.iter().take(width).enumerate() {
                let excel_col = col as u16;
                match value {
                    CellValue::Empty => {}
                    CellValue::Text(s) if s.is_empty() => {}
                    CellValue::Text(s) => {
                        worksheet.write_string(excel_row, excel_col, s)?;
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number(excel_row, excel_col, *n)?;
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(excel_row, excel_col, *b)?;
                    }
                }
            }
        }
        Ok(())
    }
}
