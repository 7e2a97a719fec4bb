use miette::Diagnostic;
use thiserror::Error;

use crate::types::Colour;

/// Main error type for hues operations
#[derive(Error, Diagnostic, Debug)]
pub enum HuesError {
    #[error("Range error: {message}")]
    #[diagnostic(code(hues::range))]
    Range {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Format error: {message}")]
    #[diagnostic(code(hues::format))]
    Format {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Colour {colour} is not in the palette")]
    #[diagnostic(code(hues::not_found))]
    NotFound { colour: Colour },

    #[error("Invariant error: {message}")]
    #[diagnostic(code(hues::invariant))]
    Invariant {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(hues::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(hues::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(hues::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

/// Coarse classification of a [`HuesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Range,
    Format,
    NotFound,
    Invariant,
    Io,
    Parse,
}

impl HuesError {
    /// The kind of failure, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HuesError::Range { .. } => ErrorKind::Range,
            HuesError::Format { .. } => ErrorKind::Format,
            HuesError::NotFound { .. } => ErrorKind::NotFound,
            HuesError::Invariant { .. } => ErrorKind::Invariant,
            HuesError::IoError(_) | HuesError::Io { .. } => ErrorKind::Io,
            HuesError::Parse { .. } => ErrorKind::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, HuesError>;
