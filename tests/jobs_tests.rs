//! End-to-end job tests: real workbooks in, real workbooks out

use pretty_assertions::assert_eq;
use rosterkit::excel::ExcelImporter;
use rosterkit::jobs::bai_students::{self, BaiStudentsOptions};
use rosterkit::jobs::bce_panel::{self, BcePanelOptions};
use rosterkit::jobs::bds_panel::{self, BdsPanelOptions};
use rosterkit::jobs::classify_projects::{self, ClassifyProjectsOptions};
use rosterkit::jobs::internship::{self, InternshipOptions};
use rosterkit::jobs::mca_projects::{self, McaProjectsOptions};
use rosterkit::jobs::merge_emails::{self, MergeEmailsOptions};
use rosterkit::jobs::mis_internship::{self, MisInternshipOptions};
use rosterkit::jobs::panel_ids::{self, PanelIdsOptions};
use rosterkit::jobs::regno_emails::{self, RegnoEmailsOptions};
use rosterkit::jobs::template::{self, TemplateOptions};
use rosterkit::{CellValue, RosterError, Sheet};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

fn text(s: &str) -> CellValue {
    if s.is_empty() {
        CellValue::Empty
    } else {
        CellValue::text(s)
    }
}

fn sheet(name: &str, headers: &[&str], rows: &[&[&str]]) -> Sheet {
    let mut sheet = Sheet::with_columns(name, headers);
    for row in rows {
        sheet.push_row(row.iter().map(|s| text(s)).collect());
    }
    sheet
}

/// Write several sheets into one workbook
fn write_workbook(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name).unwrap();
        for (col, header) in sheet.headers.iter().enumerate() {
            if !header.is_empty() {
                worksheet.write_string(0, col as u16, header).unwrap();
            }
        }
        for (row_idx, row) in sheet.rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                let (r, c) = ((row_idx + 1) as u32, col as u16);
                match cell {
                    CellValue::Text(s) => {
                        worksheet.write_string(r, c, s).unwrap();
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(r, c, *b).unwrap();
                    }
                    CellValue::Empty => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

fn faculty_sheet(name: &str) -> Sheet {
    sheet(
        name,
        &["S.No", "Emp Id", "Name of the Faculty"],
        &[
            &["1", "E1", "Dr. Jane Doe"],
            &["2", "E2", "Prof. John Alan Smith"],
            &["3", "", "Dr. Missing Id"],
            &["4", "E4", "Mrs. Priya   Raman"],
        ],
    )
}

fn student_rows() -> Vec<&'static [&'static str]> {
    let rows: [&'static [&'static str]; 6] = [
        &["21BXX001", "Asha", "Dr. Jane Doe", "Smith"],
        &["21BXX002", "Bala", "Priya Raman", ""],
        &["", "Chitra", "Jane Doe", ""],
        &["21BXX001", "Asha (repeat)", "Missing Id", "Unknown Person"],
        &["21BXX005", "", "Jane Doe", ""],
        &["21BXX006", "Devi", "", ""],
    ];
    rows.to_vec()
}

const STUDENT_HEADERS: [&str; 4] = ["Regno", "Name", "Panel Member 1", "Panel Member 2"];

// ═══════════════════════════════════════════════════════════════════════════
// BCE PANEL
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_bce_panel_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = temp_dir.path().join("review.xlsx");
    let output = temp_dir.path().join("bce_out.xlsx");

    write_workbook(
        &workbook,
        &[
            sheet("BCE", &STUDENT_HEADERS, &student_rows()),
            faculty_sheet("Faculty details"),
        ],
    );

    let options = BcePanelOptions {
        workbook,
        output: output.clone(),
        ..BcePanelOptions::default()
    };
    let report = bce_panel::run(&options).unwrap();
    assert_eq!(report.rows(), 4, "rows missing regno or name are dropped");

    let written = ExcelImporter::new(&output).read_sheet("Panel Details").unwrap();
    assert_eq!(written.headers, bce_panel::OUTPUT_COLUMNS.to_vec());

    let ids: Vec<(String, String)> = written
        .rows
        .iter()
        .map(|r| (r[3].to_text(), r[5].to_text()))
        .collect();
    assert_eq!(
        ids,
        vec![
            ("E1".to_string(), "E2".to_string()),
            ("E4".to_string(), String::new()),
            (String::new(), String::new()),
            (String::new(), String::new()),
        ]
    );
    // duplicate registration numbers pass through
    assert_eq!(written.cell(2, 1), &CellValue::text("21BXX001"));
}

#[test]
fn test_bce_panel_missing_column_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = temp_dir.path().join("review.xlsx");
    let output = temp_dir.path().join("bce_out.xlsx");

    write_workbook(
        &workbook,
        &[
            sheet("BCE", &["Regno", "Name", "Panel Member 1"], &[]),
            faculty_sheet("Faculty details"),
        ],
    );

    let options = BcePanelOptions {
        workbook,
        output: output.clone(),
        ..BcePanelOptions::default()
    };
    let err = bce_panel::run(&options).unwrap_err();
    assert!(matches!(err, RosterError::MissingColumns { .. }));
    assert!(!output.exists(), "no output on fatal errors");
}

// ═══════════════════════════════════════════════════════════════════════════
// BDS PANEL
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_bds_panel_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let students = temp_dir.path().join("bds.xlsx");
    let faculty = temp_dir.path().join("faculty.xlsx");
    let output = temp_dir.path().join("bds_out.xlsx");

    write_workbook(&students, &[sheet("BDS PANEL", &STUDENT_HEADERS, &student_rows())]);
    write_workbook(&faculty, &[faculty_sheet("Sheet1")]);

    let options = BdsPanelOptions {
        students,
        faculty,
        output: output.clone(),
        ..BdsPanelOptions::default()
    };
    bds_panel::run(&options).unwrap();

    let written = ExcelImporter::new(&output).read_sheet("Panel Details").unwrap();
    let panels: Vec<String> = written.rows.iter().map(|r| r[1].to_text()).collect();
    assert_eq!(
        panels,
        vec![
            "E1 JANE DOE & E2 SMITH",
            "E4 PRIYA RAMAN",
            "E1 JANE DOE",
            "E1 JANE DOE",
            "",
        ]
    );
    assert_eq!(written.len(), 5, "one duplicate registration number dropped");
    assert_eq!(bds_panel::students_with_panels(&written), 4);
}

#[test]
fn test_bds_panel_sentinel_is_configurable() {
    let temp_dir = TempDir::new().unwrap();
    let students = temp_dir.path().join("bds.xlsx");
    let faculty = temp_dir.path().join("faculty.xlsx");
    let output = temp_dir.path().join("bds_out.xlsx");

    write_workbook(
        &students,
        &[sheet("BDS PANEL", &STUDENT_HEADERS, &[&["21BDS1", "Asha", "Dr. Nobody", "Jane Doe"]])],
    );
    write_workbook(&faculty, &[faculty_sheet("Sheet1")]);

    for (sentinel, expected) in [("emp", "emp NOBODY & E1 JANE DOE"), ("", " NOBODY & E1 JANE DOE")] {
        let options = BdsPanelOptions {
            students: students.clone(),
            faculty: faculty.clone(),
            output: output.clone(),
            unresolved: sentinel.to_string(),
            ..BdsPanelOptions::default()
        };
        let report = bds_panel::run(&options).unwrap();
        assert_eq!(report.sheet.cell(0, 1), &CellValue::text(expected));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INTERNSHIP / BAI / MCA / TEMPLATE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_internship_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("Internship.xlsx");
    let output = temp_dir.path().join("out.xlsx");

    write_workbook(
        &input,
        &[sheet(
            "Data",
            &["Project Name", "Guide", "Panel"],
            &[
                &["Smart\u{00A0}Grid ", "X", "Panel 1"],
                &["", "Y", "Panel 2"],
                &["Chatbot", "Z", ""],
            ],
        )],
    );

    let options = InternshipOptions {
        input,
        output: output.clone(),
        ..InternshipOptions::default()
    };
    let report = internship::run(&options).unwrap();
    assert_eq!(report.rows(), 2);

    let written = ExcelImporter::new(&output).read_sheet("Sheet1").unwrap();
    assert_eq!(
        written.rows,
        vec![
            vec![text("Smart Grid (INTERNSHIP)"), text("Panel 1")],
            vec![text("Chatbot (INTERNSHIP)"), CellValue::Empty],
        ]
    );
}

#[test]
fn test_bai_students_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bai.xlsx");
    let output = temp_dir.path().join("bai_out.xlsx");

    write_workbook(
        &input,
        &[sheet(
            "Panel_Details",
            &["PANEL MEMBERS", "", "", ""],
            &[
                &["S.No.", "Registration Number", "Student Name", "Panel"],
                &["1", "22BAI1001", "Asha", "P1"],
                &["2", "", "Ghost", "P1"],
                &["3", "22BAI1003", "Chitra", "P2"],
            ],
        )],
    );

    let options = BaiStudentsOptions {
        input,
        output: output.clone(),
        guide_employee_id: "FAC0042".to_string(),
        ..BaiStudentsOptions::default()
    };
    let report = bai_students::run(&options).unwrap();
    assert_eq!(report.rows(), 2);

    let written = ExcelImporter::new(&output).read_sheet("Students").unwrap();
    assert_eq!(written.headers, bai_students::OUTPUT_COLUMNS.to_vec());
    assert_eq!(written.cell(1, 0), &text("Chitra"));
    assert_eq!(written.cell(1, 5), &text("FAC0042"));
    assert_eq!(written.cell(1, 8), &text("22BAI1003@vitstudent.ac.in"));
}

#[test]
fn test_mca_projects_from_bundled_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("mca.xlsx");

    let options = McaProjectsOptions {
        catalog: Path::new(env!("CARGO_MANIFEST_DIR")).join("data/mca_projects.yaml"),
        output: output.clone(),
        ..McaProjectsOptions::default()
    };
    let report = mca_projects::run(&options).unwrap();
    assert_eq!(report.rows(), 78);

    let written = ExcelImporter::new(&output).read_sheet("Projects").unwrap();
    assert_eq!(written.cell(0, 0), &text("Text Steganography system"));
    assert_eq!(written.cell(0, 5), &text("25mca1001@vitstudent.ac.in"));
    assert_eq!(written.cell(1, 3), &text("AI/ML"));
}

#[test]
fn test_mca_projects_missing_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let options = McaProjectsOptions {
        catalog: temp_dir.path().join("missing.yaml"),
        output: temp_dir.path().join("mca.xlsx"),
        ..McaProjectsOptions::default()
    };
    assert!(matches!(mca_projects::run(&options), Err(RosterError::Io(_))));
}

#[test]
fn test_template_written() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("students_data.xlsx");

    template::run(&TemplateOptions {
        output: output.clone(),
    })
    .unwrap();

    let written = ExcelImporter::new(&output).read_first_sheet().unwrap();
    assert_eq!(written.headers, template::headers());
    assert_eq!(written.len(), 2);
    assert_eq!(written.cell(1, 3), &text("Alice Brown"));
}

// ═══════════════════════════════════════════════════════════════════════════
// INLINE PANEL IDS / MIS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_panel_ids_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("Internship_bps_brs.xlsx");
    let output = temp_dir.path().join("panel_ids.xlsx");

    write_workbook(
        &input,
        &[sheet(
            "BPS",
            &["Regno", "Project Name", "Panel"],
            &[
                &["21BPS001", "Alpha", "Dr. Asha Rao (50123) and Vikram N(51234)"],
                &["21BPS002", "Beta", "Meera Iyer 52001, 53002 Ravi K"],
                &["21BPS003", "Gamma", ""],
            ],
        )],
    );

    let options = PanelIdsOptions {
        input,
        output: output.clone(),
        ..PanelIdsOptions::default()
    };
    let report = panel_ids::run(&options).unwrap();
    assert_eq!(report.rows(), 3);
    assert_eq!(report.updated, 2);

    let written = ExcelImporter::new(&output).read_sheet("Sheet1").unwrap();
    assert_eq!(written.headers, vec!["Regno", "Project Name", "Panel"]);
    assert_eq!(
        written.column("Panel").unwrap(),
        vec![
            &text("50123 Dr. Asha Rao & 51234 Vikram N"),
            &text("52001 Meera Iyer & 53002 Ravi K"),
            &CellValue::Empty,
        ]
    );
    assert_eq!(written.cell(1, 1), &text("Beta"));
}

#[test]
fn test_mis_internship_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("mis.xlsx");
    let output = temp_dir.path().join("mis_out.xlsx");

    write_workbook(
        &input,
        &[sheet(
            "Sheet1",
            &["REGISTER NUMBER", "STUDENT NAME", "Email ID", "Panel"],
            &[
                &[
                    "22MIS1001",
                    "Asha",
                    "asha@x.in",
                    "V. Muthumanikandan (51328) and Rajesh R(52879)",
                ],
                &["22MIS1002", "Bala", "bala@x.in", ""],
                &["22MIS1003", "Chitra", "chitra@x.in", "Anand K (50001)"],
            ],
        )],
    );

    let options = MisInternshipOptions {
        input,
        output: output.clone(),
        guide_employee_id: "FAC0042".to_string(),
        ..MisInternshipOptions::default()
    };
    let report = mis_internship::run(&options).unwrap();
    assert_eq!(report.rows(), 3);
    assert_eq!(mis_internship::rows_with_panel(&report.sheet), 3);

    let written = ExcelImporter::new(&output).read_sheet("Internship_Projects").unwrap();
    assert_eq!(written.headers, mis_internship::OUTPUT_COLUMNS.to_vec());
    assert_eq!(written.cell(1, 0), &text("22MIS1002 (INTERNSHIP)"));
    assert_eq!(written.cell(1, 1), &text("FAC0042"));
    assert_eq!(written.cell(1, 8), &text("bala@x.in"));
    assert_eq!(
        written.cell(1, 15),
        &text("51328 V. Muthumanikandan & 52879 Rajesh R")
    );
    assert_eq!(written.cell(2, 15), &text("50001 Anand K"));
}

// ═══════════════════════════════════════════════════════════════════════════
// EMAILS / CLASSIFICATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_merge_emails_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("brs_internship.xlsx");
    let source = temp_dir.path().join("Panel_BRS_With_Email.xlsx");
    let output = temp_dir.path().join("merged.xlsx");

    write_workbook(
        &target,
        &[sheet(
            "Projects",
            &["Project Name", "Student RegNo 1"],
            &[&["Alpha", "21BRS001"], &["Beta", "21BRS404"]],
        )],
    );
    write_workbook(
        &source,
        &[sheet(
            "Panel",
            &["REGISTER NUMBER", "STUDENT NAME", "Email ID"],
            &[
                &["21BRS001", "Asha", "first@vit.ac.in"],
                &["21BRS001", "Asha", "asha@vit.ac.in"],
            ],
        )],
    );

    let options = MergeEmailsOptions {
        target,
        source,
        output: output.clone(),
        ..MergeEmailsOptions::default()
    };
    let report = merge_emails::run(&options).unwrap();
    assert_eq!(report.updated, 1);

    let written = ExcelImporter::new(&output).read_sheet("Sheet1").unwrap();
    assert_eq!(
        written.headers,
        vec!["Project Name", "Student RegNo 1", "Student Email 1"]
    );
    assert_eq!(written.cell(0, 2), &text("asha@vit.ac.in"));
    assert_eq!(written.cell(1, 2), &CellValue::Empty);
}

#[test]
fn test_merge_emails_missing_source_column() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("brs_internship.xlsx");
    let source = temp_dir.path().join("Panel_BRS_With_Email.xlsx");
    let output = temp_dir.path().join("merged.xlsx");

    write_workbook(
        &target,
        &[sheet("Projects", &["Student RegNo 1"], &[&["21BRS001"]])],
    );
    write_workbook(
        &source,
        &[sheet("Panel", &["REGISTER NUMBER"], &[&["21BRS001"]])],
    );

    let options = MergeEmailsOptions {
        target,
        source,
        output: output.clone(),
        ..MergeEmailsOptions::default()
    };
    match merge_emails::run(&options) {
        Err(RosterError::MissingColumns { sheet, columns }) => {
            assert_eq!(sheet, "Panel");
            assert_eq!(columns, vec!["Email ID"]);
        }
        other => panic!("expected missing columns, got {:?}", other.map(|r| r.rows())),
    }
    assert!(!output.exists());
}

#[test]
fn test_regno_emails_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("MIA_proj.xlsx");
    let output = temp_dir.path().join("MIA_with_emails.xlsx");

    write_workbook(
        &input,
        &[sheet(
            "MIA",
            &["Project Name", "Student RegNo 1"],
            &[&["Alpha", "22MIA1001"], &["Beta", ""]],
        )],
    );

    let options = RegnoEmailsOptions {
        input,
        output: output.clone(),
        ..RegnoEmailsOptions::default()
    };
    let report = regno_emails::run(&options).unwrap();
    assert_eq!(report.updated, 1);

    let written = ExcelImporter::new(&output).read_sheet("Sheet1").unwrap();
    assert_eq!(
        written.column("Student Email 1").unwrap(),
        vec![&text("22mia1001@vit.ac.in"), &CellValue::Empty]
    );
}

#[test]
fn test_classify_projects_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("MIA_with_emails.xlsx");
    let output = temp_dir.path().join("classified.xlsx");

    write_workbook(
        &input,
        &[sheet(
            "MIA",
            &["Project Name", "Specialization", "Type", "Student RegNo 1"],
            &[
                &["Drone detection", "general", "Software", "22MIA1001"],
                &["Blockchain voting", "", "", "22MIA1002"],
                &["", "keep", "me", "22MIA1003"],
            ],
        )],
    );

    let options = ClassifyProjectsOptions {
        input,
        output: output.clone(),
        ..ClassifyProjectsOptions::default()
    };
    let report = classify_projects::run(&options).unwrap();
    assert_eq!(report.updated, 2);

    let written = ExcelImporter::new(&output).read_sheet("MIA").unwrap();
    assert_eq!(
        written.rows,
        vec![
            vec![
                text("Drone detection"),
                text("ai/ml"),
                text("Hardware"),
                text("22MIA1001")
            ],
            vec![
                text("Blockchain voting"),
                text("blockchain"),
                text("Software"),
                text("22MIA1002")
            ],
            vec![CellValue::Empty, text("keep"), text("me"), text("22MIA1003")],
        ]
    );
}
