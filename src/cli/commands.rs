use crate::error::RosterResult;
use crate::excel::ExcelImporter;
use crate::jobs::bai_students::BaiStudentsOptions;
use crate::jobs::bce_panel::BcePanelOptions;
use crate::jobs::bds_panel::{self, BdsPanelOptions};
use crate::jobs::classify_projects::ClassifyProjectsOptions;
use crate::jobs::internship::InternshipOptions;
use crate::jobs::mca_projects::McaProjectsOptions;
use crate::jobs::merge_emails::MergeEmailsOptions;
use crate::jobs::mis_internship::{self, MisInternshipOptions};
use crate::jobs::panel_ids::PanelIdsOptions;
use crate::jobs::regno_emails::RegnoEmailsOptions;
use crate::jobs::template::TemplateOptions;
use crate::jobs::{self, JobReport, FACULTY_ID_COLUMN, FACULTY_NAME_COLUMN};
use crate::resolver::{MatchPolicy, NameResolver, Resolution, Roster};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Rows of the BDS sample shown after a run
const SAMPLE_ROWS: usize = 10;
/// Records of the MIS sample shown after a run
const MIS_SAMPLE_ROWS: usize = 5;

fn print_banner(title: &str) {
    println!("{}", format!("📋 Rosterkit - {}", title).bold().green());
}

fn print_inputs(inputs: &[(&str, &Path)]) {
    for (label, path) in inputs {
        println!("   {:<8} {}", format!("{}:", label), path.display());
    }
    println!();
}

fn print_written(report: &JobReport) {
    println!(
        "{} Excel file '{}' created successfully!",
        "✓".green().bold(),
        report.output.display().to_string().bright_blue()
    );
}

/// Execute the internship command
pub fn internship(options: InternshipOptions, verbose: bool) -> RosterResult<()> {
    print_banner("Internship Projects");
    print_inputs(&[("Input", options.input.as_path()), ("Output", options.output.as_path())]);

    if verbose {
        println!("{}", "📖 Reading project list...".cyan());
    }
    let report = jobs::internship::run(&options)?;

    print_written(&report);
    println!("{} Rows: {}", "✓".green().bold(), report.rows());
    Ok(())
}

/// Execute the bce-panel command
pub fn bce_panel(options: BcePanelOptions, verbose: bool) -> RosterResult<()> {
    print_banner("BCE Panel Employee IDs");
    print_inputs(&[("Input", options.workbook.as_path()), ("Output", options.output.as_path())]);

    if verbose {
        println!(
            "{}",
            format!(
                "📖 Reading sheets '{}' and '{}'...",
                options.student_sheet, options.faculty_sheet
            )
            .cyan()
        );
    }
    let report = jobs::bce_panel::run(&options)?;

    print_written(&report);
    println!("{} Total student records: {}", "✓".green().bold(), report.rows());
    println!("\nColumns in output file:");
    for column in &report.sheet.headers {
        println!("  - {}", column.cyan());
    }
    Ok(())
}

/// Execute the bds-panel command
pub fn bds_panel(options: BdsPanelOptions, verbose: bool) -> RosterResult<()> {
    print_banner("BDS Panel Strings");
    print_inputs(&[
        ("Students", options.students.as_path()),
        ("Faculty", options.faculty.as_path()),
        ("Output", options.output.as_path()),
    ]);

    if verbose {
        println!("{}", "📖 Reading student and faculty workbooks...".cyan());
    }
    let report = jobs::bds_panel::run(&options)?;

    print_written(&report);
    println!("{} Total students: {}", "✓".green().bold(), report.rows());
    println!(
        "{} Students with panels: {}",
        "✓".green().bold(),
        bds_panel::students_with_panels(&report.sheet)
    );

    println!("\nSample output (first {} rows):", SAMPLE_ROWS);
    println!("{:<30} {}", "Student Name".bold(), "Panel".bold());
    for row in report.sheet.rows.iter().take(SAMPLE_ROWS) {
        let name = row.first().map(|c| c.to_text()).unwrap_or_default();
        let panel = row.get(1).map(|c| c.to_text()).unwrap_or_default();
        println!("{:<30} {}", name, panel);
    }
    Ok(())
}

/// Execute the bai-students command
pub fn bai_students(options: BaiStudentsOptions, verbose: bool) -> RosterResult<()> {
    print_banner("BAI Student Database");
    print_inputs(&[("Input", options.input.as_path()), ("Output", options.output.as_path())]);

    if verbose {
        println!("{}", format!("📖 Reading sheet '{}'...", options.sheet).cyan());
    }
    let report = jobs::bai_students::run(&options)?;

    print_written(&report);
    println!("{} Records: {}", "✓".green().bold(), report.rows());
    Ok(())
}

/// Execute the mca-projects command
pub fn mca_projects(options: McaProjectsOptions, verbose: bool) -> RosterResult<()> {
    print_banner("MCA Project Database");
    print_inputs(&[("Catalog", options.catalog.as_path()), ("Output", options.output.as_path())]);

    if verbose {
        println!("{}", "📖 Loading project catalog...".cyan());
    }
    let report = jobs::mca_projects::run(&options)?;

    print_written(&report);
    println!("{} Total projects: {}", "✓".green().bold(), report.rows());
    Ok(())
}

/// Execute the panel-ids command
pub fn panel_ids(options: PanelIdsOptions, verbose: bool) -> RosterResult<()> {
    print_banner("Panel IDs");
    print_inputs(&[("Input", options.input.as_path()), ("Output", options.output.as_path())]);

    if verbose {
        println!("{}", "📖 Formatting 'Panel' as 'ID NAME & ID NAME'...".cyan());
    }
    let report = jobs::panel_ids::run(&options)?;

    print_written(&report);
    println!("{} Rows: {}", "✓".green().bold(), report.rows());
    println!("{} Panels updated: {}", "✓".green().bold(), report.updated);
    Ok(())
}

/// Execute the mis-internship command
pub fn mis_internship(options: MisInternshipOptions, verbose: bool) -> RosterResult<()> {
    print_banner("MIS Internship Projects");
    print_inputs(&[("Input", options.input.as_path()), ("Output", options.output.as_path())]);

    if verbose {
        println!("{}", "📖 Reading students and parsing panels...".cyan());
    }
    let report = jobs::mis_internship::run(&options)?;
    let with_panel = mis_internship::rows_with_panel(&report.sheet);

    print_written(&report);
    println!("{} Total records: {}", "✓".green().bold(), report.rows());
    println!("{} Records with panel: {}", "✓".green().bold(), with_panel);
    println!(
        "{} Records without panel: {}",
        "✓".green().bold(),
        report.rows() - with_panel
    );

    println!("\nSample output (first {} rows):", MIS_SAMPLE_ROWS);
    for (i, row) in report.sheet.rows.iter().take(MIS_SAMPLE_ROWS).enumerate() {
        let cell = |col: usize| row.get(col).map(|c| c.to_text()).unwrap_or_default();
        println!("  {} {}", format!("Row {}:", i + 1).bold(), cell(0));
        println!("     {} / {} / {}", cell(6), cell(7), cell(8));
        println!("     Panel: {}", cell(15).cyan());
    }
    Ok(())
}

/// Execute the merge-emails command
pub fn merge_emails(options: MergeEmailsOptions, verbose: bool) -> RosterResult<()> {
    print_banner("Merge Student Emails");
    print_inputs(&[
        ("Target", options.target.as_path()),
        ("Source", options.source.as_path()),
        ("Output", options.output.as_path()),
    ]);

    if verbose {
        println!(
            "{}",
            format!(
                "📖 Matching '{}' to '{}'...",
                jobs::merge_emails::SOURCE_KEY_COLUMN,
                jobs::merge_emails::TARGET_KEY_COLUMN
            )
            .cyan()
        );
    }
    let report = jobs::merge_emails::run(&options)?;

    print_written(&report);
    println!("{} Rows processed: {}", "✓".green().bold(), report.rows());
    println!("{} Emails filled: {}", "✓".green().bold(), report.updated);
    Ok(())
}

/// Execute the regno-emails command
pub fn regno_emails(options: RegnoEmailsOptions, verbose: bool) -> RosterResult<()> {
    print_banner("Registration Number Emails");
    print_inputs(&[("Input", options.input.as_path()), ("Output", options.output.as_path())]);

    if verbose {
        println!(
            "{}",
            format!("📖 Building '{{regno}}@{}' addresses...", options.email_domain).cyan()
        );
    }
    let report = jobs::regno_emails::run(&options)?;

    print_written(&report);
    println!("{} Rows: {}", "✓".green().bold(), report.rows());
    println!("{} Emails generated: {}", "✓".green().bold(), report.updated);
    Ok(())
}

/// Execute the classify-projects command
pub fn classify_projects(options: ClassifyProjectsOptions, verbose: bool) -> RosterResult<()> {
    print_banner("Classify Projects");
    print_inputs(&[("Input", options.input.as_path()), ("Output", options.output.as_path())]);

    if verbose {
        println!("{}", "📖 Classifying project titles...".cyan());
    }
    let report = jobs::classify_projects::run(&options)?;

    print_written(&report);
    println!("{} Rows: {}", "✓".green().bold(), report.rows());
    println!("{} Projects classified: {}", "✓".green().bold(), report.updated);
    Ok(())
}

/// Execute the template command
pub fn template(options: TemplateOptions) -> RosterResult<()> {
    print_banner("Upload Template");
    let report = jobs::template::run(&options)?;
    print_written(&report);
    Ok(())
}

/// Execute the resolve command: show how each name resolves
pub fn resolve(
    faculty: PathBuf,
    sheet: Option<String>,
    names: Vec<String>,
    unresolved: String,
    exact_only: bool,
) -> RosterResult<()> {
    print_banner("Resolve Panel Members");
    print_inputs(&[("Faculty", faculty.as_path())]);

    let faculty_sheet = ExcelImporter::new(&faculty).read(sheet.as_deref())?;
    let roster = Roster::from_sheet(&faculty_sheet, FACULTY_NAME_COLUMN, FACULTY_ID_COLUMN)?;
    let policy = if exact_only {
        MatchPolicy::ExactOnly
    } else {
        MatchPolicy::FirstContainment
    };
    let resolver = NameResolver::new(&roster, unresolved).with_policy(policy);

    println!("   Roster keys: {}\n", roster.len());
    for name in &names {
        let key = resolver.normalize(name);
        let outcome = match resolver.resolve(name) {
            Resolution::Exact(id) => format!("{} (exact)", id).green(),
            Resolution::Partial(id) => format!("{} (partial)", id).yellow(),
            Resolution::Unresolved => {
                format!("{:?} (unresolved)", resolver.sentinel()).red()
            }
        };
        println!("   {:<30} {:<30} → {}", name, key.bright_blue(), outcome);
    }
    Ok(())
}
