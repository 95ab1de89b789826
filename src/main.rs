use clap::{Parser, Subcommand};
use colored::Colorize;
use rosterkit::cli;
use rosterkit::error::RosterResult;
use rosterkit::jobs::bai_students::BaiStudentsOptions;
use rosterkit::jobs::bce_panel::BcePanelOptions;
use rosterkit::jobs::bds_panel::BdsPanelOptions;
use rosterkit::jobs::classify_projects::ClassifyProjectsOptions;
use rosterkit::jobs::internship::InternshipOptions;
use rosterkit::jobs::mca_projects::McaProjectsOptions;
use rosterkit::jobs::merge_emails::MergeEmailsOptions;
use rosterkit::jobs::mis_internship::MisInternshipOptions;
use rosterkit::jobs::panel_ids::PanelIdsOptions;
use rosterkit::jobs::regno_emails::RegnoEmailsOptions;
use rosterkit::jobs::template::TemplateOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rosterkit")]
#[command(about = "Batch Excel converters for internship review rosters.")]
#[command(long_about = "Rosterkit - batch Excel converters for internship review rosters

Every job runs with no arguments: file and sheet names default to the
workbooks the review office circulates. Flags override them.

COMMANDS:
  internship        - Tag internship project names and keep their panel
  bce-panel         - Add employee IDs next to BCE panel members
  bds-panel         - Build 'ID NAME & ID NAME' panel strings for BDS
  bai-students      - Build the BAI student upload sheet
  mca-projects      - Build the MCA project database from the catalog
  template          - Write the sample bulk-upload workbook
  panel-ids         - Rewrite 'Name (50123)' panel cells as '50123 Name'
  mis-internship    - Build the MIS internship upload sheet
  merge-emails      - Fill student emails from a second workbook
  regno-emails      - Build campus emails from registration numbers
  classify-projects - Fill Specialization and Type from project titles
  resolve           - Show how names resolve against a faculty list

EXAMPLES:
  rosterkit bce-panel
  rosterkit bds-panel --unresolved ''
  rosterkit resolve 'Dr. M. Jayasudha' Jayasudha --faculty faculty.xlsx

LOGGING:
  RUST_LOG=rosterkit=debug shows partial and unresolved name matches.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag internship project names and keep their panel
    Internship {
        /// Input workbook [default: Internship.xlsx]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input sheet [default: first sheet]
        #[arg(long)]
        sheet: Option<String>,

        /// Output workbook [default: Internship_Project_Panel_with_INTERNSHIP.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Add employee IDs next to BCE panel members.

Reads the student sheet and the faculty sheet from the same workbook.
Students without a registration number or name are skipped; duplicates
are kept. Unresolved panel members get the --unresolved value (empty by
default).")]
    /// Add employee IDs next to BCE panel members
    BcePanel {
        /// Workbook with both sheets [default: FALL 25-26 INDUSTRIAL INTERNSHIP REVIEW- PANEL.xlsx]
        #[arg(short, long)]
        workbook: Option<PathBuf>,

        /// Student sheet [default: BCE]
        #[arg(long)]
        student_sheet: Option<String>,

        /// Faculty sheet [default: Faculty details]
        #[arg(long)]
        faculty_sheet: Option<String>,

        /// Output workbook [default: BCE_Students_Panel_Details.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Value written for unresolved panel members [default: empty]
        #[arg(long)]
        unresolved: Option<String>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Build 'ID NAME & ID NAME' panel strings for BDS students.

Students are deduplicated on registration number, first row wins.
Unresolved panel members get the --unresolved value ('emp' by default).")]
    /// Build combined panel strings for BDS students
    BdsPanel {
        /// Student workbook [default: FALL AY 25-26 BDS INDUSTRIAL INTERNSHIP PANEL MEMBERS.xlsx]
        #[arg(short, long)]
        students: Option<PathBuf>,

        /// Student sheet [default: BDS PANEL]
        #[arg(long)]
        student_sheet: Option<String>,

        /// Faculty workbook [default: SCOPE FACULTY LIST-28.10.2025-Dr. M. Jayasudha.xlsx]
        #[arg(short, long)]
        faculty: Option<PathBuf>,

        /// Faculty sheet [default: Sheet1]
        #[arg(long)]
        faculty_sheet: Option<String>,

        /// Output workbook [default: BDS_Students_Panel_With_EmployeeIDs.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Value written for unresolved panel members [default: emp]
        #[arg(long)]
        unresolved: Option<String>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build the BAI student upload sheet from the panel list
    BaiStudents {
        /// Input workbook [default: Panel_Members_BAI.xlsx]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input sheet [default: Panel_Details]
        #[arg(long)]
        sheet: Option<String>,

        /// Output workbook [default: BAI_Students_Database22.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Guide faculty employee ID for every row [default: FAC0010]
        #[arg(long)]
        guide: Option<String>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build the MCA project database from the project catalog
    McaProjects {
        /// Catalog YAML [default: data/mca_projects.yaml]
        #[arg(short, long, env = "ROSTERKIT_CATALOG")]
        catalog: Option<PathBuf>,

        /// Output workbook [default: MCA_Projects_Database.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write the sample bulk-upload workbook
    Template {
        /// Output workbook [default: students_data.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(long_about = "Rewrite panel cells that carry inline employee IDs.

Each 'Panel' cell is split into two members on ' and ', '&' or ','. A
member's ID is '(digits)' anywhere, else trailing digits, else leading
digits. The cell becomes 'ID NAME & ID NAME'; every other column is kept.")]
    /// Rewrite 'Name (50123)' panel cells as '50123 Name'
    PanelIds {
        /// Input workbook [default: Internship_bps_brs.xlsx]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input sheet [default: first sheet]
        #[arg(long)]
        sheet: Option<String>,

        /// Output workbook [default: Internship_bps_brs_empid_name.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Build the MIS internship upload sheet.

One project row per student. Panels are read from 'Name (empid)' pairs; a
row without one reuses the last panel above it.")]
    /// Build the MIS internship upload sheet
    MisInternship {
        /// Input workbook [default: Panel_MIS_With Email (1).xlsx]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input sheet [default: first sheet]
        #[arg(long)]
        sheet: Option<String>,

        /// Output workbook [default: Transformed_Internship.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Guide faculty employee ID for every row [default: FAC0010]
        #[arg(long)]
        guide: Option<String>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Fill 'Student Email 1' from a second workbook by registration number
    MergeEmails {
        /// Workbook to fill [default: brs_internship.xlsx]
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Target sheet [default: first sheet]
        #[arg(long)]
        target_sheet: Option<String>,

        /// Workbook with 'REGISTER NUMBER' and 'Email ID' [default: Panel_BRS_With_Email.xlsx]
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Source sheet [default: first sheet]
        #[arg(long)]
        source_sheet: Option<String>,

        /// Output workbook [default: brs_internship_with_emails.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build 'Student Email 1' from the lower-cased registration number
    RegnoEmails {
        /// Input workbook [default: MIA_proj.xlsx]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input sheet [default: first sheet]
        #[arg(long)]
        sheet: Option<String>,

        /// Output workbook [default: MIA_with_emails.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Email domain [default: vit.ac.in]
        #[arg(long)]
        domain: Option<String>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Fill Specialization and Type from project titles
    ClassifyProjects {
        /// Input workbook [default: MIA_with_emails.xlsx]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input sheet [default: first sheet]
        #[arg(long)]
        sheet: Option<String>,

        /// Output workbook [default: MIA_with_specialization.xlsx]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how names resolve against a faculty list
    Resolve {
        /// Names to resolve
        #[arg(required = true)]
        names: Vec<String>,

        /// Faculty workbook
        #[arg(short, long)]
        faculty: PathBuf,

        /// Faculty sheet [default: first sheet]
        #[arg(long)]
        sheet: Option<String>,

        /// Value shown for unresolved names
        #[arg(long, default_value = "")]
        unresolved: String,

        /// Disable the substring fallback
        #[arg(long)]
        exact_only: bool,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rosterkit=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli.command) {
        eprintln!("{} {}", "❌ Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> RosterResult<()> {
    match command {
        Commands::Internship {
            input,
            sheet,
            output,
            verbose,
        } => {
            let mut options = InternshipOptions::default();
            if let Some(input) = input {
                options.input = input;
            }
            if sheet.is_some() {
                options.sheet = sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            cli::internship(options, verbose)
        }

        Commands::BcePanel {
            workbook,
            student_sheet,
            faculty_sheet,
            output,
            unresolved,
            verbose,
        } => {
            let mut options = BcePanelOptions::default();
            if let Some(workbook) = workbook {
                options.workbook = workbook;
            }
            if let Some(sheet) = student_sheet {
                options.student_sheet = sheet;
            }
            if let Some(sheet) = faculty_sheet {
                options.faculty_sheet = sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            if let Some(unresolved) = unresolved {
                options.unresolved = unresolved;
            }
            cli::bce_panel(options, verbose)
        }

        Commands::BdsPanel {
            students,
            student_sheet,
            faculty,
            faculty_sheet,
            output,
            unresolved,
            verbose,
        } => {
            let mut options = BdsPanelOptions::default();
            if let Some(students) = students {
                options.students = students;
            }
            if let Some(sheet) = student_sheet {
                options.student_sheet = sheet;
            }
            if let Some(faculty) = faculty {
                options.faculty = faculty;
            }
            if let Some(sheet) = faculty_sheet {
                options.faculty_sheet = sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            if let Some(unresolved) = unresolved {
                options.unresolved = unresolved;
            }
            cli::bds_panel(options, verbose)
        }

        Commands::BaiStudents {
            input,
            sheet,
            output,
            guide,
            verbose,
        } => {
            let mut options = BaiStudentsOptions::default();
            if let Some(input) = input {
                options.input = input;
            }
            if let Some(sheet) = sheet {
                options.sheet = sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            if let Some(guide) = guide {
                options.guide_employee_id = guide;
            }
            cli::bai_students(options, verbose)
        }

        Commands::McaProjects {
            catalog,
            output,
            verbose,
        } => {
            let mut options = McaProjectsOptions::default();
            if let Some(catalog) = catalog {
                options.catalog = catalog;
            }
            if let Some(output) = output {
                options.output = output;
            }
            cli::mca_projects(options, verbose)
        }

        Commands::Template { output } => {
            let mut options = TemplateOptions::default();
            if let Some(output) = output {
                options.output = output;
            }
            cli::template(options)
        }

        Commands::PanelIds {
            input,
            sheet,
            output,
            verbose,
        } => {
            let mut options = PanelIdsOptions::default();
            if let Some(input) = input {
                options.input = input;
            }
            if sheet.is_some() {
                options.sheet = sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            cli::panel_ids(options, verbose)
        }

        Commands::MisInternship {
            input,
            sheet,
            output,
            guide,
            verbose,
        } => {
            let mut options = MisInternshipOptions::default();
            if let Some(input) = input {
                options.input = input;
            }
            if sheet.is_some() {
                options.sheet = sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            if let Some(guide) = guide {
                options.guide_employee_id = guide;
            }
            cli::mis_internship(options, verbose)
        }

        Commands::MergeEmails {
            target,
            target_sheet,
            source,
            source_sheet,
            output,
            verbose,
        } => {
            let mut options = MergeEmailsOptions::default();
            if let Some(target) = target {
                options.target = target;
            }
            if target_sheet.is_some() {
                options.target_sheet = target_sheet;
            }
            if let Some(source) = source {
                options.source = source;
            }
            if source_sheet.is_some() {
                options.source_sheet = source_sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            cli::merge_emails(options, verbose)
        }

        Commands::RegnoEmails {
            input,
            sheet,
            output,
            domain,
            verbose,
        } => {
            let mut options = RegnoEmailsOptions::default();
            if let Some(input) = input {
                options.input = input;
            }
            if sheet.is_some() {
                options.sheet = sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            if let Some(domain) = domain {
                options.email_domain = domain;
            }
            cli::regno_emails(options, verbose)
        }

        Commands::ClassifyProjects {
            input,
            sheet,
            output,
            verbose,
        } => {
            let mut options = ClassifyProjectsOptions::default();
            if let Some(input) = input {
                options.input = input;
            }
            if sheet.is_some() {
                options.sheet = sheet;
            }
            if let Some(output) = output {
                options.output = output;
            }
            cli::classify_projects(options, verbose)
        }

        Commands::Resolve {
            names,
            faculty,
            sheet,
            unresolved,
            exact_only,
        } => cli::resolve(faculty, sheet, names, unresolved, exact_only),
    }
}
