//! Panel cells with inline IDs: rewrite each as "ID NAME & ID NAME"

use super::{require_rows, write_output, JobReport, DEFAULT_SHEET_NAME};
use crate::error::RosterResult;
use crate::excel::ExcelImporter;
use crate::panel::{clean, PanelParser};
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

pub const PANEL_COLUMN: &str = "Panel";

#[derive(Debug, Clone)]
pub struct PanelIdsOptions {
    pub input: PathBuf,
    /// Input worksheet; the first sheet when unset
    pub sheet: Option<String>,
    pub output: PathBuf,
}

impl Default for PanelIdsOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Internship_bps_brs.xlsx"),
            sheet: None,
            output: PathBuf::from("Internship_bps_brs_empid_name.xlsx"),
        }
    }
}

/// Rewrite the `Panel` column, keeping every other column as it is.
///
/// Returns the new sheet and the number of panel cells whose text changed.
pub fn transform(input: &Sheet, parser: &PanelParser) -> RosterResult<(Sheet, usize)> {
    require_rows(input)?;
    let panel_col = input.require_columns(&[PANEL_COLUMN])?[0];

    let mut out = input.clone();
    out.name = DEFAULT_SHEET_NAME.to_string();

    let mut updated = 0;
    for row in 0..input.len() {
        let old = input.cell(row, panel_col).to_text();
        let new = parser.format_panel(&old);
        if clean(&old) != new {
            updated += 1;
        }
        out.set_cell(row, panel_col, CellValue::Text(new));
    }

    tracing::info!(rows = out.len(), updated, "rewrote panel cells");
    Ok((out, updated))
}

pub fn run(options: &PanelIdsOptions) -> RosterResult<JobReport> {
    let input = ExcelImporter::new(&options.input).read(options.sheet.as_deref())?;
    let parser = PanelParser::new()?;
    let (sheet, updated) = transform(&input, &parser)?;
    Ok(write_output(sheet, &options.output)?.with_updated(updated))
}
