//! MIS internship upload sheet: one project row per student, panel IDs
//! taken from "Name (empid)" pairs and carried down to rows without a panel

use super::internship::INTERNSHIP_SUFFIX;
use super::{write_output, JobReport};
use crate::error::RosterResult;
use crate::excel::ExcelImporter;
use crate::panel::PanelParser;
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

pub const OUTPUT_SHEET: &str = "Internship_Projects";

pub const REGNO_COLUMN: &str = "REGISTER NUMBER";
pub const NAME_COLUMN: &str = "STUDENT NAME";
pub const EMAIL_COLUMN: &str = "Email ID";
pub const PANEL_COLUMN: &str = "Panel";

pub const OUTPUT_COLUMNS: [&str; 16] = [
    "Project Name",
    "Guide Faculty Employee ID",
    "School",
    "Department",
    "Specialization",
    "Type",
    "Student Name 1",
    "Student RegNo 1",
    "Student Email 1",
    "Student Name 2",
    "Student RegNo 2",
    "Student Email 2",
    "Student Name 3",
    "Student RegNo 3",
    "Student Email 3",
    "Panel",
];

const OUTPUT_PANEL_COL: usize = 15;

#[derive(Debug, Clone)]
pub struct MisInternshipOptions {
    pub input: PathBuf,
    /// Input worksheet; the first sheet when unset
    pub sheet: Option<String>,
    pub output: PathBuf,
    pub guide_employee_id: String,
    pub school: String,
    pub department: String,
    pub specialization: String,
    pub project_type: String,
}

impl Default for MisInternshipOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Panel_MIS_With Email (1).xlsx"),
            sheet: None,
            output: PathBuf::from("Transformed_Internship.xlsx"),
            guide_employee_id: "FAC0010".to_string(),
            school: "SCOPE".to_string(),
            department: "M.Tech Integrated (MIS)".to_string(),
            specialization: "general".to_string(),
            project_type: "Software".to_string(),
        }
    }
}

/// Build the 16-column upload sheet.
///
/// A row whose panel holds no `Name (digits)` pair reuses the last parsed
/// panel above it. Rows with no content at all are skipped.
pub fn transform(
    input: &Sheet,
    parser: &PanelParser,
    options: &MisInternshipOptions,
) -> RosterResult<Sheet> {
    let cols = input.require_columns(&[REGNO_COLUMN, NAME_COLUMN, EMAIL_COLUMN, PANEL_COLUMN])?;
    let (regno_col, name_col, email_col, panel_col) = (cols[0], cols[1], cols[2], cols[3]);

    let mut out = Sheet::with_columns(OUTPUT_SHEET, &OUTPUT_COLUMNS);
    let mut last_panel: Option<String> = None;

    for (row, cells) in input.rows.iter().enumerate() {
        if cells.iter().all(CellValue::is_empty) {
            continue;
        }

        if let Some(panel) = parser.parse_tagged_pairs(&input.cell(row, panel_col).to_text()) {
            last_panel = Some(panel);
        }
        let panel = last_panel.clone().unwrap_or_default();

        let regno = input.cell(row, regno_col);
        let mut record = vec![
            CellValue::Text(format!("{}{}", regno, INTERNSHIP_SUFFIX)),
            CellValue::text(options.guide_employee_id.as_str()),
            CellValue::text(options.school.as_str()),
            CellValue::text(options.department.as_str()),
            CellValue::text(options.specialization.as_str()),
            CellValue::text(options.project_type.as_str()),
            input.cell(row, name_col).clone(),
            regno.clone(),
            input.cell(row, email_col).clone(),
        ];
        record.extend(std::iter::repeat(CellValue::text("")).take(6));
        record.push(CellValue::Text(panel));
        out.push_row(record);
    }

    tracing::info!(
        input_rows = input.len(),
        records = out.len(),
        with_panel = rows_with_panel(&out),
        "built MIS internship records"
    );
    Ok(out)
}

/// Records whose panel is not blank
pub fn rows_with_panel(sheet: &Sheet) -> usize {
    (0..sheet.len())
        .filter(|&row| !sheet.cell(row, OUTPUT_PANEL_COL).is_missing())
        .count()
}

pub fn run(options: &MisInternshipOptions) -> RosterResult<JobReport> {
    let input = ExcelImporter::new(&options.input).read(options.sheet.as_deref())?;
    let parser = PanelParser::new()?;
    let sheet = transform(&input, &parser, options)?;
    write_output(sheet, &options.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> Sheet {
        let mut sheet = Sheet::with_columns(
            "Sheet1",
            &["S.No", "REGISTER NUMBER", "STUDENT NAME", "Email ID", "Panel"],
        );
        let rows: [[&str; 5]; 5] = [
            [
                "1",
                "22MIS1001",
                "Asha",
                "asha@x.in",
                "V. Muthumanikandan (51328) and Rajesh R(52879)",
            ],
            ["2", "22MIS1002", "Bala", "bala@x.in", ""],
            ["", "", "", "", ""],
            ["3", "22MIS1003", "Chitra", "", "see above"],
            ["4", "22MIS1004", "Dev", "dev@x.in", "Anand K (50001)"],
        ];
        for row in rows {
            sheet.push_row(
                row.iter()
                    .map(|s| if s.is_empty() { CellValue::Empty } else { CellValue::text(*s) })
                    .collect(),
            );
        }
        sheet
    }

    #[test]
    fn test_panel_carried_down() {
        let parser = PanelParser::new().unwrap();
        let out = transform(&input(), &parser, &MisInternshipOptions::default()).unwrap();

        assert_eq!(out.name, "Internship_Projects");
        assert_eq!(out.len(), 4, "blank row skipped");

        let first = "51328 V. Muthumanikandan & 52879 Rajesh R";
        let panels: Vec<String> = (0..out.len()).map(|r| out.cell(r, 15).to_text()).collect();
        assert_eq!(panels, vec![first, first, first, "50001 Anand K"]);
        assert_eq!(rows_with_panel(&out), 4);
    }

    #[test]
    fn test_fixed_and_student_columns() {
        let parser = PanelParser::new().unwrap();
        let out = transform(&input(), &parser, &MisInternshipOptions::default()).unwrap();

        assert_eq!(
            out.rows[0][..9].to_vec(),
            vec![
                CellValue::text("22MIS1001 (INTERNSHIP)"),
                CellValue::text("FAC0010"),
                CellValue::text("SCOPE"),
                CellValue::text("M.Tech Integrated (MIS)"),
                CellValue::text("general"),
                CellValue::text("Software"),
                CellValue::text("Asha"),
                CellValue::text("22MIS1001"),
                CellValue::text("asha@x.in"),
            ]
        );
        assert!(out.rows[0][9..15].iter().all(CellValue::is_empty));
        assert_eq!(out.cell(2, 8), &CellValue::Empty);
    }

    #[test]
    fn test_rows_before_any_panel_stay_blank() {
        let mut sheet = Sheet::with_columns(
            "Sheet1",
            &["REGISTER NUMBER", "STUDENT NAME", "Email ID", "Panel"],
        );
        sheet.push_row(vec![
            CellValue::text("22MIS1001"),
            CellValue::text("Asha"),
            CellValue::Empty,
            CellValue::text("TBD"),
        ]);
        let parser = PanelParser::new().unwrap();
        let out = transform(&sheet, &parser, &MisInternshipOptions::default()).unwrap();
        assert_eq!(out.cell(0, 15), &CellValue::text(""));
        assert_eq!(rows_with_panel(&out), 0);
    }
}
