//! Internship project list: tag project names and keep their panel

use super::{clean_text, write_output, JobReport, DEFAULT_SHEET_NAME};
use crate::error::RosterResult;
use crate::excel::ExcelImporter;
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

pub const PROJECT_COLUMN: &str = "Project Name";
pub const PANEL_COLUMN: &str = "Panel";

/// Appended to every project name
pub const INTERNSHIP_SUFFIX: &str = " (INTERNSHIP)";

#[derive(Debug, Clone)]
pub struct InternshipOptions {
    pub input: PathBuf,
    /// Input worksheet; the first sheet when unset
    pub sheet: Option<String>,
    pub output: PathBuf,
}

impl Default for InternshipOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Internship.xlsx"),
            sheet: None,
            output: PathBuf::from("Internship_Project_Panel_with_INTERNSHIP.xlsx"),
        }
    }
}

/// Clean both columns and suffix the project name.
///
/// Rows with an empty project name are dropped.
pub fn transform(input: &Sheet) -> RosterResult<Sheet> {
    let cols = input.require_columns(&[PROJECT_COLUMN, PANEL_COLUMN])?;
    let (project_col, panel_col) = (cols[0], cols[1]);

    let mut out = Sheet::with_columns(DEFAULT_SHEET_NAME, &[PROJECT_COLUMN, PANEL_COLUMN]);
    for row in 0..input.len() {
        let project = clean_text(input.cell(row, project_col));
        if project.is_empty() {
            continue;
        }
        out.push_row(vec![
            CellValue::Text(format!("{}{}", project, INTERNSHIP_SUFFIX)),
            CellValue::Text(clean_text(input.cell(row, panel_col))),
        ]);
    }

    tracing::info!(
        input_rows = input.len(),
        output_rows = out.len(),
        "tagged internship projects"
    );
    Ok(out)
}

pub fn run(options: &InternshipOptions) -> RosterResult<JobReport> {
    let input = ExcelImporter::new(&options.input).read(options.sheet.as_deref())?;
    let sheet = transform(&input)?;
    write_output(sheet, &options.output)
}
