//! Campus email addresses built from registration numbers

use super::{
    clean_text, require_rows, student_email, write_output, JobReport, CAMPUS_EMAIL_DOMAIN,
    DEFAULT_SHEET_NAME,
};
use crate::error::RosterResult;
use crate::excel::ExcelImporter;
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

pub const REGNO_COLUMN: &str = "Student RegNo 1";
/// Overwritten in every row; appended when absent
pub const EMAIL_COLUMN: &str = "Student Email 1";

#[derive(Debug, Clone)]
pub struct RegnoEmailsOptions {
    pub input: PathBuf,
    /// Input worksheet; the first sheet when unset
    pub sheet: Option<String>,
    pub output: PathBuf,
    pub email_domain: String,
}

impl Default for RegnoEmailsOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("MIA_proj.xlsx"),
            sheet: None,
            output: PathBuf::from("MIA_with_emails.xlsx"),
            email_domain: CAMPUS_EMAIL_DOMAIN.to_string(),
        }
    }
}

/// `{regno in lower case}@{domain}`, or empty when there is no regno
pub fn campus_email(regno: &CellValue, domain: &str) -> String {
    let id = clean_text(regno).to_lowercase();
    if id.is_empty() {
        String::new()
    } else {
        student_email(&id, domain)
    }
}

/// Returns the sheet and the number of addresses generated.
pub fn transform(input: &Sheet, options: &RegnoEmailsOptions) -> RosterResult<(Sheet, usize)> {
    require_rows(input)?;
    let regno_col = input.require_columns(&[REGNO_COLUMN])?[0];

    let mut out = input.clone();
    out.name = DEFAULT_SHEET_NAME.to_string();
    let email_col = out.ensure_column(EMAIL_COLUMN);

    let mut generated = 0;
    for row in 0..input.len() {
        let email = campus_email(input.cell(row, regno_col), &options.email_domain);
        if !email.is_empty() {
            generated += 1;
        }
        out.set_cell(row, email_col, CellValue::Text(email));
    }

    tracing::info!(rows = out.len(), generated, "generated campus emails");
    Ok((out, generated))
}

pub fn run(options: &RegnoEmailsOptions) -> RosterResult<JobReport> {
    let input = ExcelImporter::new(&options.input).read(options.sheet.as_deref())?;
    let (sheet, generated) = transform(&input, options)?;
    Ok(write_output(sheet, &options.output)?.with_updated(generated))
}
