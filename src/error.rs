use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read workbook {path}: {message}")]
    Workbook { path: String, message: String },

    #[error("Sheet '{sheet}' not found in {path} (available: {})", .available.join(", "))]
    SheetNotFound {
        path: String,
        sheet: String,
        available: Vec<String>,
    },

    #[error("Missing required column(s) in sheet '{sheet}': {}", .columns.join(", "))]
    MissingColumns { sheet: String, columns: Vec<String> },

    #[error("Export error: {0}")]
    Export(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<rust_xlsxwriter::XlsxError> for RosterError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        RosterError::Export(err.to_string())
    }
}
