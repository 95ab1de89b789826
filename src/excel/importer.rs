//! Excel importer implementation - Excel (.xlsx) → Sheet

use crate::error::{RosterError, RosterResult};
use crate::types::{CellValue, Sheet};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Reads worksheets of an .xlsx file into memory.
///
/// The first row of a worksheet is taken as the header row; every later row
/// becomes a data row padded to the header width.
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> RosterResult<Xlsx<BufReader<File>>> {
        open_workbook(&self.path).map_err(|e: calamine::XlsxError| RosterError::Workbook {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Names of all worksheets, in workbook order
    pub fn sheet_names(&self) -> RosterResult<Vec<String>> {
        Ok(self.open()?.sheet_names().to_vec())
    }

    /// Read the worksheet with the given name
    pub fn read_sheet(&self, sheet_name: &str) -> RosterResult<Sheet> {
        let mut workbook = self.open()?;
        let available = workbook.sheet_names().to_vec();
        if !available.iter().any(|name| name == sheet_name) {
            return Err(RosterError::SheetNotFound {
                path: self.path.display().to_string(),
                sheet: sheet_name.to_string(),
                available,
            });
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| RosterError::Workbook {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let sheet = Self::range_to_sheet(sheet_name, &range);
        tracing::info!(
            path = %self.path.display(),
            sheet = sheet_name,
            rows = sheet.len(),
            columns = sheet.headers.len(),
            "loaded worksheet"
        );
        Ok(sheet)
    }

    /// Read the first worksheet in the workbook
    pub fn read_first_sheet(&self) -> RosterResult<Sheet> {
        let names = self.sheet_names()?;
        let first = names.first().ok_or_else(|| RosterError::Workbook {
            path: self.path.display().to_string(),
            message: "workbook has no worksheets".to_string(),
        })?;
        self.read_sheet(first)
    }

    /// Read a named worksheet, or the first one when no name is given
    pub fn read(&self, sheet_name: Option<&str>) -> RosterResult<Sheet> {
        match sheet_name {
            Some(name) => self.read_sheet(name),
            None => self.read_first_sheet(),
        }
    }

    fn range_to_sheet(sheet_name: &str, range: &Range<Data>) -> Sheet {
        if range.is_empty() {
            return Sheet::new(sheet_name, Vec::new());
        }

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|header_row| {
                header_row
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| match Self::convert_cell(cell) {
                        CellValue::Empty => format!("Unnamed: {}", col),
                        value => value.to_text(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let width = headers.len();
        let mut sheet = Sheet::new(sheet_name, headers);
        for row in rows {
            let mut values: Vec<CellValue> = row.iter().map(Self::convert_cell).collect();
            values.resize(width, CellValue::Empty);
            sheet.push_row(values);
        }
        sheet
    }

    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            other => CellValue::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell() {
        assert_eq!(ExcelImporter::convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(
            ExcelImporter::convert_cell(&Data::String(String::new())),
            CellValue::Empty
        );
        assert_eq!(
            ExcelImporter::convert_cell(&Data::String("Jane".into())),
            CellValue::text("Jane")
        );
        assert_eq!(ExcelImporter::convert_cell(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(
            ExcelImporter::convert_cell(&Data::Bool(true)),
            CellValue::Bool(true)
        );
    }

    #[test]
    fn test_range_to_sheet_pads_rows_and_names_blank_headers() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), Data::String("Regno".into()));
        range.set_value((0, 2), Data::String("Name".into()));
        range.set_value((1, 0), Data::String("21BCE1001".into()));
        range.set_value((2, 2), Data::String("Asha".into()));

        let sheet = ExcelImporter::range_to_sheet("BCE", &range);
        assert_eq!(sheet.headers, vec!["Regno", "Unnamed: 1", "Name"]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rows[0].len(), 3);
        assert_eq!(sheet.cell(0, 0), &CellValue::text("21BCE1001"));
        assert_eq!(sheet.cell(1, 2), &CellValue::text("Asha"));
    }

    #[test]
    fn test_missing_file_is_workbook_error() {
        let importer = ExcelImporter::new("/nonexistent/roster.xlsx");
        let err = importer.read_first_sheet().unwrap_err();
        assert!(matches!(err, RosterError::Workbook { .. }));
    }
}
