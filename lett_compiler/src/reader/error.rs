//! Construction errors for character sources

use crate::logging::{codes, Code};
use std::io;
use std::path::{Path, PathBuf};

/// Failure to bind a reader to its source; raised before any scanning
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReaderError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Invalid source '{}': {reason}", .path.display())]
    InvalidSource { path: PathBuf, reason: String },

    #[error("I/O error reading {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl ReaderError {
    /// Classify an `io::Error` raised while opening or reading `path`
    pub fn from_io(path: &Path, error: &io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => ReaderError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => ReaderError::PermissionDenied { path },
            _ => ReaderError::Io {
                path,
                message: error.to_string(),
            },
        }
    }

    pub fn invalid_source(path: &Path, reason: &str) -> Self {
        ReaderError::InvalidSource {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            ReaderError::FileNotFound { .. } => codes::reader::FILE_NOT_FOUND,
            ReaderError::PermissionDenied { .. } => codes::reader::PERMISSION_DENIED,
            ReaderError::InvalidSource { .. } => codes::reader::INVALID_SOURCE,
            ReaderError::Io { .. } => codes::reader::IO_ERROR,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ReaderError::FileNotFound { path }
            | ReaderError::PermissionDenied { path }
            | ReaderError::InvalidSource { path, .. }
            | ReaderError::Io { path, .. } => path,
        }
    }
}
