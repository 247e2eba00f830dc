//! course-ingest: validation and classification gate for course document corpora
//!
//! Maps raw course files on disk to a typed `source_type` taxonomy, enforces
//! strict format-per-type compatibility, and reports every problem in a course
//! in a single pass. Downstream chunking/embedding consumes the accepted
//! records and never re-derives classification.
//!
//! Classification is purely structural: a file's immediate parent directory
//! decides its source type, never its content.

pub mod config;
pub mod error;
pub mod types;
pub mod validation;
pub mod walker;

pub use config::WalkConfig;
pub use error::{Error, Result};
pub use types::{
    candidate::{IngestionCandidate, ValidationOutcome},
    report::{AcceptedDocument, IngestionReport, OverallStatus, ReportSummary},
    source::{FileFormat, SourceType},
};
pub use validation::{DirectoryClassifier, FormatRegistry, Validator};
pub use walker::CourseWalker;
