use std::path::PathBuf;

/// All domain errors for shiftdecode.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum ShiftDecodeError {
    #[error("Invalid argument: {detail}")]
    InvalidArgument { detail: String },

    #[error("Invalid state: {detail}")]
    InvalidState { detail: String },

    #[error("Line index {index} out of range (message has {len} lines)")]
    OutOfRange { index: usize, len: usize },

    #[error(
        "Internal error: {detail}\n\n  \
         This is a bug in shiftdecode. No output was produced."
    )]
    Internal { detail: String },

    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Key parse error in {source_name}: {detail}\n\n  \
         Expected format: integers separated by commas or whitespace (e.g. 3,1,4).\n  \
         Comments (#) are allowed."
    )]
    KeyParse { source_name: String, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShiftDecodeError>;
