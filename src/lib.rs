//! Rosterkit - batch Excel converters for internship review rosters
//!
//! Each job reads one or two workbooks, cleans names, resolves panel
//! members to employee IDs and writes a fresh workbook.
//!
//! # Features
//!
//! - Faculty name → employee ID resolution with honorific stripping
//! - Panel sheets for BCE (ID columns) and BDS (combined panel string)
//! - Panel cells with inline IDs rewritten to the same "ID NAME" form
//! - Student and project upload sheets for BAI, MCA and MIS cohorts
//! - Email fill-in by registration number, and title-based classification
//! - Excel import/export
//!
//! # Example
//!
//! ```
//! use rosterkit::resolver::{NameResolver, Roster};
//!
//! let roster = Roster::from_faculty([("Dr. Jane Doe", "E1"), ("John Alan Smith", "E2")])?;
//! let resolver = NameResolver::new(&roster, "emp");
//!
//! assert_eq!(resolver.lookup("jane doe"), "E1");
//! assert_eq!(resolver.lookup("Smith"), "E2");
//! assert_eq!(resolver.lookup(""), "emp");
//! # Ok::<(), rosterkit::error::RosterError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod excel;
pub mod jobs;
pub mod panel;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use error::{RosterError, RosterResult};
pub use resolver::{MatchPolicy, NameResolver, Resolution, Roster};
pub use types::{CellValue, Sheet};
