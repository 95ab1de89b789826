//! BCE review panels: add employee IDs next to each panel member

use super::{write_output, JobReport, FACULTY_ID_COLUMN, FACULTY_NAME_COLUMN};
use crate::error::RosterResult;
use crate::excel::ExcelImporter;
use crate::resolver::{NameResolver, Roster};
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

pub const OUTPUT_SHEET: &str = "Panel Details";

pub const OUTPUT_COLUMNS: [&str; 6] = [
    "Student Name",
    "Registration Number",
    "Panel Member 1",
    "Panel Member 1 Employee ID",
    "Panel Member 2",
    "Panel Member 2 Employee ID",
];

#[derive(Debug, Clone)]
pub struct BcePanelOptions {
    /// Workbook holding both the student and the faculty sheet
    pub workbook: PathBuf,
    pub student_sheet: String,
    pub faculty_sheet: String,
    pub output: PathBuf,
    /// Written when a panel member cannot be resolved
    pub unresolved: String,
}

impl Default for BcePanelOptions {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from("FALL 25-26 INDUSTRIAL INTERNSHIP REVIEW- PANEL.xlsx"),
            student_sheet: "BCE".to_string(),
            faculty_sheet: "Faculty details".to_string(),
            output: PathBuf::from("BCE_Students_Panel_Details.xlsx"),
            unresolved: String::new(),
        }
    }
}

/// One output row per student with both a registration number and a name.
///
/// Duplicates pass through; names and numbers are copied unchanged.
pub fn transform(students: &Sheet, resolver: &NameResolver<'_>) -> RosterResult<Sheet> {
    let cols = students.require_columns(&["Regno", "Name", "Panel Member 1", "Panel Member 2"])?;
    let (regno_col, name_col, panel1_col, panel2_col) = (cols[0], cols[1], cols[2], cols[3]);

    let mut out = Sheet::with_columns(OUTPUT_SHEET, &OUTPUT_COLUMNS);
    for row in 0..students.len() {
        let regno = students.cell(row, regno_col);
        let name = students.cell(row, name_col);
        if regno.is_empty() || name.is_empty() {
            continue;
        }

        let panel_1 = present_or_blank(students.cell(row, panel1_col));
        let panel_2 = present_or_blank(students.cell(row, panel2_col));
        let emp_id_1 = resolver.lookup_cell(&panel_1);
        let emp_id_2 = resolver.lookup_cell(&panel_2);

        out.push_row(vec![
            name.clone(),
            regno.clone(),
            panel_1,
            CellValue::Text(emp_id_1),
            panel_2,
            CellValue::Text(emp_id_2),
        ]);
    }

    tracing::info!(
        students = students.len(),
        records = out.len(),
        "resolved BCE panel members"
    );
    Ok(out)
}

fn present_or_blank(cell: &CellValue) -> CellValue {
    if cell.is_missing() {
        CellValue::text("")
    } else {
        cell.clone()
    }
}

pub fn run(options: &BcePanelOptions) -> RosterResult<JobReport> {
    let importer = ExcelImporter::new(&options.workbook);
    let students = importer.read_sheet(&options.student_sheet)?;
    let faculty = importer.read_sheet(&options.faculty_sheet)?;

    let roster = Roster::from_sheet(&faculty, FACULTY_NAME_COLUMN, FACULTY_ID_COLUMN)?;
    let resolver = NameResolver::new(&roster, options.unresolved.clone());

    let sheet = transform(&students, &resolver)?;
    write_output(sheet, &options.output)
}
