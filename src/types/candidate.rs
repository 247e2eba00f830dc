//! Per-file validation records

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::source::{FileFormat, SourceType};

/// Outcome of validating one candidate file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// File is well-typed and correctly placed
    Accepted,
    /// Extension is outside the globally supported format set
    RejectedFormat { reason: String },
    /// Directory placement does not resolve to any source type
    RejectedUnresolvableType { reason: String },
    /// Format is supported but not allowed for the resolved source type
    RejectedMapping { reason: String },
}

/// One file under consideration for ingestion.
///
/// Constructed exclusively through the per-outcome constructors so the
/// canonical reason strings are built in exactly one place. Operators
/// pattern-match these strings against the troubleshooting docs, so their
/// wording is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestionCandidate {
    /// Path as enumerated by the walk
    pub path: PathBuf,
    /// Detected format, if the extension is supported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FileFormat>,
    /// Resolved source type, if the placement is recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Validation outcome
    pub outcome: ValidationOutcome,
}

impl IngestionCandidate {
    /// Candidate that passed every check
    pub fn accepted(path: PathBuf, source_type: SourceType, format: FileFormat) -> Self {
        Self {
            path,
            format: Some(format),
            source_type: Some(source_type),
            outcome: ValidationOutcome::Accepted,
        }
    }

    /// Candidate rejected because its extension is not supported at all.
    ///
    /// `extension` is the dotted lowercase extension as found on disk
    /// (empty string when the file has none).
    pub fn rejected_format(path: PathBuf, extension: &str) -> Self {
        Self {
            path,
            format: None,
            source_type: None,
            outcome: ValidationOutcome::RejectedFormat {
                reason: format!("File format '{}' is not supported", extension),
            },
        }
    }

    /// Candidate rejected because no source type can be resolved from its
    /// directory placement
    pub fn rejected_unresolvable(path: PathBuf, format: FileFormat) -> Self {
        Self {
            path,
            format: Some(format),
            source_type: None,
            outcome: ValidationOutcome::RejectedUnresolvableType {
                reason: "Cannot infer source_type from path".to_string(),
            },
        }
    }

    /// Candidate rejected because its format is not in the allowed set for
    /// its resolved source type
    pub fn rejected_mapping(path: PathBuf, format: FileFormat, source_type: SourceType) -> Self {
        Self {
            path,
            format: Some(format),
            source_type: Some(source_type),
            outcome: ValidationOutcome::RejectedMapping {
                reason: format!(
                    "File format '{}' is not allowed for source_type '{}'",
                    format.extension(),
                    source_type.as_str()
                ),
            },
        }
    }

    /// Whether this candidate passed validation
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, ValidationOutcome::Accepted)
    }

    /// Failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match &self.outcome {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::RejectedFormat { reason }
            | ValidationOutcome::RejectedUnresolvableType { reason }
            | ValidationOutcome::RejectedMapping { reason } => Some(reason),
        }
    }

    /// Path of the candidate file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_format_reason() {
        let candidate = IngestionCandidate::rejected_format(PathBuf::from("notes/a.xlsx"), ".xlsx");
        assert!(!candidate.is_accepted());
        assert_eq!(candidate.reason(), Some("File format '.xlsx' is not supported"));
        assert_eq!(candidate.format, None);
        assert_eq!(candidate.source_type, None);
    }

    #[test]
    fn test_rejected_unresolvable_reason() {
        let candidate =
            IngestionCandidate::rejected_unresolvable(PathBuf::from("misc/a.pdf"), FileFormat::Pdf);
        assert_eq!(candidate.reason(), Some("Cannot infer source_type from path"));
        assert_eq!(candidate.format, Some(FileFormat::Pdf));
        assert_eq!(candidate.source_type, None);
    }

    #[test]
    fn test_rejected_mapping_reason() {
        let candidate = IngestionCandidate::rejected_mapping(
            PathBuf::from("exams/midterm.pptx"),
            FileFormat::Pptx,
            SourceType::Exam,
        );
        assert_eq!(
            candidate.reason(),
            Some("File format '.pptx' is not allowed for source_type 'exam'")
        );
    }

    #[test]
    fn test_accepted_has_no_reason() {
        let candidate = IngestionCandidate::accepted(
            PathBuf::from("lectures/lecture01.pptx"),
            SourceType::LectureSlides,
            FileFormat::Pptx,
        );
        assert!(candidate.is_accepted());
        assert_eq!(candidate.reason(), None);
    }
}
