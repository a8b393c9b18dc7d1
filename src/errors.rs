//! The single error type shared by every stage of the export pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// All failure modes of an export run.
///
/// Per-file variants (`FileRead`, `MalformedSuite`) are reported as warnings
/// by the caller and never abort the walk; the remaining variants are fatal.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("input directory '{}' was not found or is not a directory", .0.display())]
    InputDirMissing(PathBuf),

    #[error("failed to read '{}': {source}", .file.display())]
    FileRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed suite file '{}': {reason}", .file.display())]
    MalformedSuite { file: PathBuf, reason: String },

    #[error("no active sheet to append a row to")]
    NoActiveSheet,

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("failed to create output directory '{}': {source}", .dir.display())]
    CreateOutputDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save workbook '{}': {reason}", .file.display())]
    WorkbookSave { file: PathBuf, reason: String },
}
