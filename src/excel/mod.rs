//! Excel workbook I/O
//!
//! - Import: one worksheet of an .xlsx → [`Sheet`](crate::types::Sheet)
//! - Export: one [`Sheet`](crate::types::Sheet) → a new .xlsx workbook

mod exporter;
mod importer;

pub use exporter::ExcelExporter;
pub use importer::ExcelImporter;
