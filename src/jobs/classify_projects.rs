//! Fill Specialization and Type for every titled project in an upload sheet

use super::{require_rows, write_output, JobReport};
use crate::catalog::ProjectClassifier;
use crate::error::{RosterError, RosterResult};
use crate::excel::ExcelImporter;
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

pub const PROJECT_COLUMN: &str = "Project Name";
pub const SPECIALIZATION_COLUMN: &str = "Specialization";
pub const TYPE_COLUMN: &str = "Type";

#[derive(Debug, Clone)]
pub struct ClassifyProjectsOptions {
    pub input: PathBuf,
    /// Input worksheet; the first sheet when unset
    pub sheet: Option<String>,
    pub output: PathBuf,
}

impl Default for ClassifyProjectsOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("MIA_with_emails.xlsx"),
            sheet: None,
            output: PathBuf::from("MIA_with_specialization.xlsx"),
        }
    }
}

fn header_key(header: &str) -> String {
    header.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Column whose header matches ignoring case and spacing
fn find_column(sheet: &Sheet, header: &str) -> Option<usize> {
    let wanted = header_key(header);
    sheet.headers.iter().position(|h| header_key(h) == wanted)
}

/// Copy the sheet with both columns set for every row that has a project
/// name. Untitled rows keep whatever they had.
///
/// Returns the sheet and the number of rows classified.
pub fn transform(input: &Sheet, classifier: &ProjectClassifier) -> RosterResult<(Sheet, usize)> {
    require_rows(input)?;
    let project_col =
        find_column(input, PROJECT_COLUMN).ok_or_else(|| RosterError::MissingColumns {
            sheet: input.name.clone(),
            columns: vec![PROJECT_COLUMN.to_string()],
        })?;

    let mut out = input.clone();
    let spec_col = find_column(&out, SPECIALIZATION_COLUMN)
        .unwrap_or_else(|| out.ensure_column(SPECIALIZATION_COLUMN));
    let type_col =
        find_column(&out, TYPE_COLUMN).unwrap_or_else(|| out.ensure_column(TYPE_COLUMN));

    let mut classified = 0;
    for row in 0..input.len() {
        let title = input.cell(row, project_col);
        if title.is_missing() {
            continue;
        }
        let class = classifier.classify(&title.to_text());
        out.set_cell(row, spec_col, CellValue::text(class.specialization));
        out.set_cell(row, type_col, CellValue::text(class.project_type.as_str()));
        classified += 1;
    }

    tracing::info!(rows = out.len(), classified, "classified projects");
    Ok((out, classified))
}

pub fn run(options: &ClassifyProjectsOptions) -> RosterResult<JobReport> {
    let input = ExcelImporter::new(&options.input).read(options.sheet.as_deref())?;
    let (sheet, classified) = transform(&input, &ProjectClassifier::default())?;
    Ok(write_output(sheet, &options.output)?.with_updated(classified))
}
