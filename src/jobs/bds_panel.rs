//! BDS review panels: one "ID NAME & ID NAME" panel string per student

use super::{write_output, JobReport, FACULTY_ID_COLUMN, FACULTY_NAME_COLUMN};
use crate::error::RosterResult;
use crate::excel::ExcelImporter;
use crate::resolver::{NameResolver, Roster};
use crate::types::{CellValue, Sheet};
use std::collections::HashSet;
use std::path::PathBuf;

pub const OUTPUT_SHEET: &str = "Panel Details";
pub const OUTPUT_COLUMNS: [&str; 2] = ["Student Name", "Panel"];

#[derive(Debug, Clone)]
pub struct BdsPanelOptions {
    pub students: PathBuf,
    pub student_sheet: String,
    pub faculty: PathBuf,
    pub faculty_sheet: String,
    pub output: PathBuf,
    /// Written in place of an ID when a panel member cannot be resolved
    pub unresolved: String,
}

impl Default for BdsPanelOptions {
    fn default() -> Self {
        Self {
            students: PathBuf::from("FALL AY 25-26 BDS INDUSTRIAL INTERNSHIP PANEL MEMBERS.xlsx"),
            student_sheet: "BDS PANEL".to_string(),
            faculty: PathBuf::from("SCOPE FACULTY LIST-28.10.2025-Dr. M. Jayasudha.xlsx"),
            faculty_sheet: "Sheet1".to_string(),
            output: PathBuf::from("BDS_Students_Panel_With_EmployeeIDs.xlsx"),
            unresolved: "emp".to_string(),
        }
    }
}

/// Format one or two resolved panel members.
///
/// Each member is `(employee id, normalized name)`; a member with an empty
/// name is left out.
pub fn panel_string(first: (&str, &str), second: (&str, &str)) -> String {
    let (id_1, name_1) = first;
    let (id_2, name_2) = second;
    match (name_1.is_empty(), name_2.is_empty()) {
        (false, false) => format!("{} {} & {} {}", id_1, name_1, id_2, name_2),
        (false, true) => format!("{} {}", id_1, name_1),
        (true, false) => format!("{} {}", id_2, name_2),
        (true, true) => String::new(),
    }
}

/// Deduplicate on registration number (first row wins) and build panel strings.
///
/// Rows without a registration number count as one shared key, so only the
/// first of them survives.
pub fn transform(students: &Sheet, resolver: &NameResolver<'_>) -> RosterResult<Sheet> {
    let cols = students.require_columns(&["Regno", "Name", "Panel Member 1", "Panel Member 2"])?;
    let (regno_col, name_col, panel1_col, panel2_col) = (cols[0], cols[1], cols[2], cols[3]);

    let mut seen: HashSet<Option<String>> = HashSet::new();
    let mut out = Sheet::with_columns(OUTPUT_SHEET, &OUTPUT_COLUMNS);

    for row in 0..students.len() {
        let regno = students.cell(row, regno_col);
        let key = if regno.is_empty() {
            None
        } else {
            Some(regno.to_text())
        };
        if !seen.insert(key) {
            tracing::debug!(row, regno = %regno, "dropping duplicate registration number");
            continue;
        }

        let panel_1 = students.cell(row, panel1_col).to_text();
        let panel_2 = students.cell(row, panel2_col).to_text();

        let id_1 = resolver.lookup(&panel_1);
        let id_2 = resolver.lookup(&panel_2);
        let name_1 = resolver.normalize(&panel_1);
        let name_2 = resolver.normalize(&panel_2);

        let panel = panel_string((id_1.as_str(), name_1.as_str()), (id_2.as_str(), name_2.as_str()));
        out.push_row(vec![students.cell(row, name_col).clone(), CellValue::Text(panel)]);
    }

    tracing::info!(
        students = students.len(),
        unique = out.len(),
        "built BDS panel strings"
    );
    Ok(out)
}

/// Rows whose panel string is not empty
pub fn students_with_panels(sheet: &Sheet) -> usize {
    sheet
        .column("Panel")
        .map(|cells| cells.into_iter().filter(|c| !c.is_missing()).count())
        .unwrap_or(0)
}

pub fn run(options: &BdsPanelOptions) -> RosterResult<JobReport> {
    let students = ExcelImporter::new(&options.students).read_sheet(&options.student_sheet)?;
    let faculty = ExcelImporter::new(&options.faculty).read_sheet(&options.faculty_sheet)?;

    let roster = Roster::from_sheet(&faculty, FACULTY_NAME_COLUMN, FACULTY_ID_COLUMN)?;
    let resolver = NameResolver::new(&roster, options.unresolved.clone());

    let sheet = transform(&students, &resolver)?;
    write_output(sheet, &options.output)
}
