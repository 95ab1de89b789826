//! Sample workbook for the bulk team upload form

use super::{write_output, JobReport, DEFAULT_SHEET_NAME};
use crate::error::RosterResult;
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

/// Team members per row in the upload form
pub const TEAM_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct TemplateOptions {
    pub output: PathBuf,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("students_data.xlsx"),
        }
    }
}

struct SampleTeam {
    school: &'static str,
    department: &'static str,
    specialization: &'static str,
    members: &'static [(&'static str, &'static str, &'static str)],
}

const SAMPLE_TEAMS: [SampleTeam; 2] = [
    SampleTeam {
        school: "SCOPE",
        department: "BTech",
        specialization: "AI/ML",
        members: &[
            ("John Doe", "21BCE1001", "john.doe@vitstudent.ac.in"),
            ("Jane Smith", "21BCE1002", "jane.smith@vitstudent.ac.in"),
            ("Mike Johnson", "21BCE1003", "mike.johnson@vitstudent.ac.in"),
        ],
    },
    SampleTeam {
        school: "SENSE",
        department: "MCA",
        specialization: "Web Development",
        members: &[
            ("Alice Brown", "21MCA2001", "alice.brown@vitstudent.ac.in"),
            ("Bob Wilson", "21MCA2002", "bob.wilson@vitstudent.ac.in"),
        ],
    },
];

/// Header row: School, Department, Specialization, then name / regno /
/// email for each team slot
pub fn headers() -> Vec<String> {
    let mut headers = vec![
        "School".to_string(),
        "Department".to_string(),
        "Specialization".to_string(),
    ];
    for n in 1..=TEAM_SIZE {
        headers.push(format!("Student Name {}", n));
        headers.push(format!("Student RegNo {}", n));
        headers.push(format!("Student Email {}", n));
    }
    headers
}

pub fn transform() -> Sheet {
    let mut sheet = Sheet::new(DEFAULT_SHEET_NAME, headers());
    for team in &SAMPLE_TEAMS {
        let mut row = vec![
            CellValue::text(team.school),
            CellValue::text(team.department),
            CellValue::text(team.specialization),
        ];
        for slot in 0..TEAM_SIZE {
            match team.members.get(slot) {
                Some((name, regno, email)) => {
                    row.push(CellValue::text(*name));
                    row.push(CellValue::text(*regno));
                    row.push(CellValue::text(*email));
                }
                None => row.extend([CellValue::Empty, CellValue::Empty, CellValue::Empty]),
            }
        }
        sheet.push_row(row);
    }
    sheet
}

pub fn run(options: &TemplateOptions) -> RosterResult<JobReport> {
    write_output(transform(), &options.output)
}
