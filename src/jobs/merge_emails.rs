//! Fill student emails in a project sheet from a second workbook, joined on
//! the registration number

use super::{clean_text, require_rows, write_output, JobReport, DEFAULT_SHEET_NAME};
use crate::error::RosterResult;
use crate::excel::ExcelImporter;
use crate::types::{CellValue, Sheet};
use std::collections::HashMap;
use std::path::PathBuf;

/// Join key in the sheet being filled
pub const TARGET_KEY_COLUMN: &str = "Student RegNo 1";
/// Filled in the target; appended when absent
pub const TARGET_EMAIL_COLUMN: &str = "Student Email 1";
/// Join key in the email source
pub const SOURCE_KEY_COLUMN: &str = "REGISTER NUMBER";
pub const SOURCE_EMAIL_COLUMN: &str = "Email ID";

#[derive(Debug, Clone)]
pub struct MergeEmailsOptions {
    /// Sheet whose emails get filled
    pub target: PathBuf,
    pub target_sheet: Option<String>,
    /// Sheet the emails come from
    pub source: PathBuf,
    pub source_sheet: Option<String>,
    pub output: PathBuf,
}

impl Default for MergeEmailsOptions {
    fn default() -> Self {
        Self {
            target: PathBuf::from("brs_internship.xlsx"),
            target_sheet: None,
            source: PathBuf::from("Panel_BRS_With_Email.xlsx"),
            source_sheet: None,
            output: PathBuf::from("brs_internship_with_emails.xlsx"),
        }
    }
}

/// Registration number → email. Later rows overwrite earlier ones; rows
/// missing either value are ignored.
fn email_index(source: &Sheet, key_col: usize, email_col: usize) -> HashMap<String, String> {
    let mut index = HashMap::new();
    for row in 0..source.len() {
        let key = clean_text(source.cell(row, key_col));
        let email = clean_text(source.cell(row, email_col));
        if key.is_empty() || email.is_empty() {
            continue;
        }
        index.insert(key, email);
    }
    index
}

/// Copy the target with its email column filled wherever the registration
/// number has a source email. Other emails are left as they were.
///
/// Returns the sheet and the number of rows filled.
pub fn transform(target: &Sheet, source: &Sheet) -> RosterResult<(Sheet, usize)> {
    require_rows(target)?;
    require_rows(source)?;
    let key_col = target.require_columns(&[TARGET_KEY_COLUMN])?[0];
    let source_cols = source.require_columns(&[SOURCE_KEY_COLUMN, SOURCE_EMAIL_COLUMN])?;

    let index = email_index(source, source_cols[0], source_cols[1]);

    let mut out = target.clone();
    out.name = DEFAULT_SHEET_NAME.to_string();
    let email_col = out.ensure_column(TARGET_EMAIL_COLUMN);

    let mut filled = 0;
    for row in 0..target.len() {
        let key = clean_text(target.cell(row, key_col));
        if key.is_empty() {
            continue;
        }
        if let Some(email) = index.get(&key) {
            out.set_cell(row, email_col, CellValue::text(email.as_str()));
            filled += 1;
        }
    }

    tracing::info!(
        rows = out.len(),
        known_emails = index.len(),
        filled,
        "merged student emails"
    );
    Ok((out, filled))
}

pub fn run(options: &MergeEmailsOptions) -> RosterResult<JobReport> {
    let target = ExcelImporter::new(&options.target).read(options.target_sheet.as_deref())?;
    let source = ExcelImporter::new(&options.source).read(options.source_sheet.as_deref())?;
    let (sheet, filled) = transform(&target, &source)?;
    Ok(write_output(sheet, &options.output)?.with_updated(filled))
}
