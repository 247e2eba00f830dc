//! Core types for the ingestion gate

pub mod candidate;
pub mod report;
pub mod source;

pub use candidate::{IngestionCandidate, ValidationOutcome};
pub use report::{AcceptedDocument, IngestionReport, OverallStatus, ReportSummary};
pub use source::{FileFormat, SourceType};
