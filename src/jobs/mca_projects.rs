//! MCA project database from the project catalog

use super::{student_email, write_output, JobReport, STUDENT_EMAIL_DOMAIN};
use crate::catalog::ProjectCatalog;
use crate::error::RosterResult;
use crate::types::{CellValue, Sheet};
use std::path::PathBuf;

pub const OUTPUT_SHEET: &str = "Projects";

pub const OUTPUT_COLUMNS: [&str; 6] = [
    "Project Name",
    "School",
    "Department",
    "Specialization",
    "Type",
    "Email ID",
];

#[derive(Debug, Clone)]
pub struct McaProjectsOptions {
    pub catalog: PathBuf,
    pub output: PathBuf,
    pub school: String,
    pub department: String,
    pub email_domain: String,
}

impl Default for McaProjectsOptions {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("data/mca_projects.yaml"),
            output: PathBuf::from("MCA_Projects_Database.xlsx"),
            school: "Scope".to_string(),
            department: "MCA 1st Year".to_string(),
            email_domain: STUDENT_EMAIL_DOMAIN.to_string(),
        }
    }
}

/// One row per catalog project, tagged by title keywords
pub fn transform(catalog: &ProjectCatalog, options: &McaProjectsOptions) -> RosterResult<Sheet> {
    catalog.validate()?;

    let mut out = Sheet::with_columns(OUTPUT_SHEET, &OUTPUT_COLUMNS);
    for (project, regno) in catalog.assignments() {
        out.push_row(vec![
            CellValue::text(project),
            CellValue::text(options.school.as_str()),
            CellValue::text(options.department.as_str()),
            CellValue::text(catalog.specialization(project)),
            CellValue::text(catalog.project_type(project).as_str()),
            CellValue::Text(student_email(regno, &options.email_domain)),
        ]);
    }
    Ok(out)
}

pub fn run(options: &McaProjectsOptions) -> RosterResult<JobReport> {
    let catalog = ProjectCatalog::load(&options.catalog)?;
    let sheet = transform(&catalog, options)?;
    write_output(sheet, &options.output)
}
