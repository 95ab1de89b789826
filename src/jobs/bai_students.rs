//! BAI internship students: build the student upload sheet from a panel list

use super::{student_email, write_output, JobReport, STUDENT_EMAIL_DOMAIN};
use crate::error::{RosterError, RosterResult};
use crate::excel::ExcelImporter;
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

pub const OUTPUT_SHEET: &str = "Students";

/// Names given to the first four input columns, by position
pub const INPUT_COLUMNS: [&str; 4] = ["S.No.", "Registration Number", "Student Name", "Panel"];

pub const OUTPUT_COLUMNS: [&str; 9] = [
    "Project Name",
    "School",
    "Department",
    "Specialization",
    "Type",
    "Guide Faculty Employee ID",
    "Student Name 1",
    "Reg No.",
    "Email ID",
];

#[derive(Debug, Clone)]
pub struct BaiStudentsOptions {
    pub input: PathBuf,
    pub sheet: String,
    pub output: PathBuf,
    pub school: String,
    pub department: String,
    pub specialization: String,
    pub project_type: String,
    pub guide_employee_id: String,
    pub email_domain: String,
}

impl Default for BaiStudentsOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Panel_Members_BAI.xlsx"),
            sheet: "Panel_Details".to_string(),
            output: PathBuf::from("BAI_Students_Database22.xlsx"),
            school: "Scope".to_string(),
            department: "Internship".to_string(),
            specialization: "General".to_string(),
            project_type: "Software".to_string(),
            guide_employee_id: "FAC0010".to_string(),
            email_domain: STUDENT_EMAIL_DOMAIN.to_string(),
        }
    }
}

/// The input's own header row is not trusted: the first data row is a
/// second header line and is skipped, and columns are read by position.
pub fn transform(input: &Sheet, options: &BaiStudentsOptions) -> RosterResult<Sheet> {
    if input.headers.len() < INPUT_COLUMNS.len() {
        return Err(RosterError::MissingColumns {
            sheet: input.name.clone(),
            columns: INPUT_COLUMNS[input.headers.len()..]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        });
    }
    let (regno_col, name_col) = (1, 2);

    let mut out = Sheet::with_columns(OUTPUT_SHEET, &OUTPUT_COLUMNS);
    for row in 1..input.len() {
        let regno = input.cell(row, regno_col);
        if regno.is_empty() {
            continue;
        }
        let regno = regno.to_text();
        let email = student_email(&regno, &options.email_domain);
        let student = input.cell(row, name_col);

        out.push_row(vec![
            student.clone(),
            CellValue::text(options.school.as_str()),
            CellValue::text(options.department.as_str()),
            CellValue::text(options.specialization.as_str()),
            CellValue::text(options.project_type.as_str()),
            CellValue::text(options.guide_employee_id.as_str()),
            student.clone(),
            CellValue::Text(regno),
            CellValue::Text(email),
        ]);
    }

    tracing::info!(input_rows = input.len(), records = out.len(), "built BAI student records");
    Ok(out)
}

pub fn run(options: &BaiStudentsOptions) -> RosterResult<JobReport> {
    let input = ExcelImporter::new(&options.input).read_sheet(&options.sheet)?;
    let sheet = transform(&input, options)?;
    write_output(sheet, &options.output)
}
