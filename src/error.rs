//! Error types for the converter

use thiserror::Error;

/// Everything that can stop a conversion run.
///
/// Usage errors are reported by clap before a run starts and never show up here.
#[derive(Debug, Error)]
pub enum Xlsx2CsvError {
    /// The source could not be opened or is not a valid XLSX container
    #[error("{0}")]
    OpenError(String),

    /// The workbook has no worksheets
    #[error("no sheets found in file")]
    NoSheets,

    /// The requested worksheet is absent from the workbook
    #[error("sheet '{0}' does not exist")]
    SheetNotFound(String),

    /// Any other failure while reading worksheet data
    #[error("{0}")]
    ReadError(String),

    /// The CSV destination could not be created or written
    #[error("{0}")]
    WriteError(String),

    /// Releasing a resource failed after its work was done; logged, never fatal
    #[error("{0}")]
    CloseError(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Xlsx2CsvError>;
