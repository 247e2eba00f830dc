//! Error types for the ingestion gate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ingestion gate errors
///
/// Per-file validation failures are not errors: they travel inside the
/// [`IngestionReport`](crate::IngestionReport) so one walk surfaces every
/// problem in a course at once. This enum covers the walk itself failing.
#[derive(Debug, Error)]
pub enum Error {
    /// Course root does not exist on disk
    #[error("Course root directory does not exist: {}", .0.display())]
    CourseRootNotFound(PathBuf),

    /// Course root exists but is not a directory
    #[error("Course root is not a directory: {}", .0.display())]
    CourseRootNotADirectory(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration parse error
    #[error("Configuration parse error: {0}")]
    Config(#[from] toml::de::Error),
}
