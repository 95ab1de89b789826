//! Converter jobs
//!
//! Each job is a single batch run: load the input sheet(s), check the
//! required columns, transform in memory, write one new workbook. Every
//! option has a default equal to the file and sheet names the review
//! office actually uses, so each job runs with no arguments.
//!
//! Jobs split into a pure `transform` over [`Sheet`]s and a `run` that adds
//! the workbook I/O, so the transforms are testable without files.

pub mod bai_students;
pub mod bce_panel;
pub mod bds_panel;
pub mod classify_projects;
pub mod internship;
pub mod mca_projects;
pub mod merge_emails;
pub mod mis_internship;
pub mod panel_ids;
pub mod regno_emails;
pub mod template;

use crate::error::{RosterError, RosterResult};
use crate::excel::ExcelExporter;
use crate::types::{CellValue, Sheet};
use std::path::{Path, PathBuf};

/// Faculty list column holding the display name
pub const FACULTY_NAME_COLUMN: &str = "Name of the Faculty";
/// Faculty list column holding the employee ID
pub const FACULTY_ID_COLUMN: &str = "Emp Id";

/// Sheet name used when a job has no fixed output sheet
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Student email domain for generated addresses
pub const STUDENT_EMAIL_DOMAIN: &str = "vitstudent.ac.in";
/// Domain for addresses built from lower-cased registration numbers
pub const CAMPUS_EMAIL_DOMAIN: &str = "vit.ac.in";

/// What a job wrote
#[derive(Debug, Clone)]
pub struct JobReport {
    pub output: PathBuf,
    pub sheet: Sheet,
    /// Cells changed by jobs that update an existing sheet
    pub updated: usize,
}

impl JobReport {
    pub fn rows(&self) -> usize {
        self.sheet.len()
    }

    pub fn with_updated(mut self, updated: usize) -> Self {
        self.updated = updated;
        self
    }
}

/// Write the finished sheet and hand back the report
pub(crate) fn write_output(sheet: Sheet, output: &Path) -> RosterResult<JobReport> {
    ExcelExporter::new(sheet.clone()).export(output)?;
    Ok(JobReport {
        output: output.to_path_buf(),
        sheet,
        updated: 0,
    })
}

/// Jobs that rewrite a sheet in place refuse one with no data rows
pub(crate) fn require_rows(sheet: &Sheet) -> RosterResult<()> {
    if sheet.is_empty() {
        return Err(RosterError::Validation(format!(
            "sheet '{}' has no rows",
            sheet.name
        )));
    }
    Ok(())
}

/// Cell text with non-breaking spaces turned into spaces, then trimmed
pub fn clean_text(cell: &CellValue) -> String {
    cell.to_text().replace('\u{00A0}', " ").trim().to_string()
}

/// Build a student email address from a registration number
pub fn student_email(registration_number: &str, domain: &str) -> String {
    format!("{}@{}", registration_number, domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text(&CellValue::text("\u{00A0} Panel 3 \u{00A0}")), "Panel 3");
        assert_eq!(clean_text(&CellValue::Empty), "");
        assert_eq!(clean_text(&CellValue::Number(4.0)), "4");
    }

    #[test]
    fn test_student_email() {
        assert_eq!(
            student_email("25mca1001", STUDENT_EMAIL_DOMAIN),
            "25mca1001@vitstudent.ac.in"
        );
    }

    #[test]
    fn test_require_rows() {
        let mut sheet = Sheet::with_columns("Data", &["Panel"]);
        assert_eq!(
            require_rows(&sheet).unwrap_err().to_string(),
            "Validation error: sheet 'Data' has no rows"
        );
        sheet.push_row(vec![CellValue::Empty]);
        assert!(require_rows(&sheet).is_ok());
    }
}
