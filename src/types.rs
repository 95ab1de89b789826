use crate::error::{RosterError, RosterResult};
use std::fmt;

//==============================================================================
// Cell Values
//==============================================================================

/// A single worksheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Build a text cell
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// True only for cells with no content at all.
    ///
    /// Whitespace-only text is content here; row filters use this so a name
    /// of spaces still counts as present.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Missing cells are empty or blank after trimming
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Render the cell as text; missing cells become the empty string
    ///
    /// Integral numbers are rendered without a fraction so that IDs and
    /// registration numbers stored as numbers survive as `"21"`, not `"21.0"`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

//==============================================================================
// Sheets
//==============================================================================

static EMPTY_CELL: CellValue = CellValue::Empty;

/// An in-memory worksheet: a header row followed by data rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Convenience constructor for fixed output layouts
    pub fn with_columns(name: impl Into<String>, headers: &[&str]) -> Self {
        Self::new(name, headers.iter().map(|h| h.to_string()).collect())
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with this exact header
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Resolve every required header to its column index.
    ///
    /// Fails with all missing headers listed, in the order requested.
    pub fn require_columns(&self, required: &[&str]) -> RosterResult<Vec<usize>> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(RosterError::MissingColumns {
                sheet: self.name.clone(),
                columns: missing,
            });
        }

        Ok(required
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect())
    }

    /// Cell at (row, col); anything out of range reads as empty
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Index of the column with this header, appending it when absent.
    ///
    /// An appended column reads as empty in every existing row.
    pub fn ensure_column(&mut self, header: &str) -> usize {
        match self.column_index(header) {
            Some(col) => col,
            None => {
                self.headers.push(header.to_string());
                self.headers.len() - 1
            }
        }
    }

    /// Overwrite one cell, padding the row with empty cells as needed
    pub fn set_cell(&mut self, row: usize, col: usize, value: CellValue) {
        if let Some(cells) = self.rows.get_mut(row) {
            if cells.len() <= col {
                cells.resize(col + 1, CellValue::Empty);
            }
            cells[col] = value;
        }
    }

    /// All values of one column, in row order
    pub fn column(&self, header: &str) -> Option<Vec<&CellValue>> {
        let col = self.column_index(header)?;
        Some((0..self.rows.len()).map(|row| self.cell(row, col)).collect())
    }
}
