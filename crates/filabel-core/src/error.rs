//! Error taxonomy for the classification pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::BackendError;
use crate::labels::{FileKind, LabelError};

/// Failure of a single classification attempt.
///
/// Every variant is terminal: nothing is retried internally, and failures
/// propagate unchanged to the caller. A response that parses to zero valid
/// labels is not an error — it is a result with an empty label list.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The target file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// No classifier claims the file.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(PathBuf),

    /// A classifier was handed a file its own support check rejects.
    /// Unreachable through the dispatcher.
    #[error("file {path} is not a supported {kind} file")]
    UnsupportedFile { kind: FileKind, path: PathBuf },

    /// Label catalog resolution failed.
    #[error("label catalog error: {0}")]
    Labels(#[from] LabelError),

    /// The chat backend call failed.
    #[error("chat backend error: {0}")]
    Backend(#[from] BackendError),

    /// Reading the target file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
