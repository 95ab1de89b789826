//! CLI command handlers

pub mod commands;

pub use commands::{
    bai_students, bce_panel, bds_panel, classify_projects, internship, mca_projects,
    merge_emails, mis_internship, panel_ids, regno_emails, resolve, template,
};
