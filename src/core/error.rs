//! core/error.rs
//! Hard failures of an extraction call.
//!
//! A missing tag field is never an error: the resolver fills it in.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid MP3 file: {}", .0.display())]
    InvalidContainer(PathBuf),

    /// Size lookup failed after a successful decode.
    #[error("Failed to stat file {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to scan {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
