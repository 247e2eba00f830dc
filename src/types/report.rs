//! Whole-course ingestion reports

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::candidate::IngestionCandidate;
use super::source::{FileFormat, SourceType};

/// Overall status of a course walk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Every candidate was accepted (or no candidates exist)
    AllValid,
    /// At least one candidate was rejected
    HasFailures,
}

/// Validated record handed to downstream chunking/embedding.
///
/// Downstream consumers take `source_type` from here and never re-derive it;
/// the report is the single source of truth for classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcceptedDocument {
    /// File path
    pub path: PathBuf,
    /// Resolved source type
    pub source_type: SourceType,
    /// Detected format
    pub format: FileFormat,
}

/// Per-outcome counts for one walk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    /// Total candidates considered
    pub total: usize,
    /// Candidates accepted
    pub accepted: usize,
    /// Candidates with an unsupported extension
    pub rejected_format: usize,
    /// Candidates whose placement resolves to no source type
    pub rejected_unresolvable_type: usize,
    /// Candidates whose format is not allowed for their source type
    pub rejected_mapping: usize,
}

/// Ordered outcomes for one course walk.
///
/// Built once by [`CourseWalker::walk`](crate::CourseWalker::walk) and
/// immutable afterwards: there is no API for appending or editing
/// candidates, so two walks over an unchanged tree serialize to identical
/// bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestionReport {
    candidates: Vec<IngestionCandidate>,
}

impl IngestionReport {
    /// Finalize a report from candidates in walk order
    pub fn from_candidates(candidates: Vec<IngestionCandidate>) -> Self {
        Self { candidates }
    }

    /// All candidates, in walk order
    pub fn candidates(&self) -> &[IngestionCandidate] {
        &self.candidates
    }

    /// `HasFailures` iff at least one candidate is not accepted
    pub fn overall_status(&self) -> OverallStatus {
        if self.candidates.iter().all(IngestionCandidate::is_accepted) {
            OverallStatus::AllValid
        } else {
            OverallStatus::HasFailures
        }
    }

    /// Every failure as `(path, reason)`, in walk order
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.candidates
            .iter()
            .filter_map(|c| c.reason().map(|reason| (c.path(), reason)))
    }

    /// Every accepted candidate as a downstream-ready record, in walk order
    pub fn accepted(&self) -> impl Iterator<Item = AcceptedDocument> + '_ {
        self.candidates.iter().filter_map(|c| match (c.source_type, c.format) {
            (Some(source_type), Some(format)) if c.is_accepted() => Some(AcceptedDocument {
                path: c.path.clone(),
                source_type,
                format,
            }),
            _ => None,
        })
    }

    /// Per-outcome counts
    pub fn summary(&self) -> ReportSummary {
        use super::candidate::ValidationOutcome;

        let mut summary = ReportSummary {
            total: self.candidates.len(),
            accepted: 0,
            rejected_format: 0,
            rejected_unresolvable_type: 0,
            rejected_mapping: 0,
        };
        for candidate in &self.candidates {
            match candidate.outcome {
                ValidationOutcome::Accepted => summary.accepted += 1,
                ValidationOutcome::RejectedFormat { .. } => summary.rejected_format += 1,
                ValidationOutcome::RejectedUnresolvableType { .. } => {
                    summary.rejected_unresolvable_type += 1;
                }
                ValidationOutcome::RejectedMapping { .. } => summary.rejected_mapping += 1,
            }
        }
        summary
    }

    /// Number of candidates in the report
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the walk found no candidates at all
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_candidates() -> Vec<IngestionCandidate> {
        vec![
            IngestionCandidate::accepted(
                PathBuf::from("lectures/l01.pptx"),
                SourceType::LectureSlides,
                FileFormat::Pptx,
            ),
            IngestionCandidate::rejected_mapping(
                PathBuf::from("exams/midterm.pptx"),
                FileFormat::Pptx,
                SourceType::Exam,
            ),
            IngestionCandidate::rejected_format(PathBuf::from("notes/a.xlsx"), ".xlsx"),
        ]
    }

    #[test]
    fn test_empty_report_is_all_valid() {
        let report = IngestionReport::from_candidates(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.overall_status(), OverallStatus::AllValid);
        assert_eq!(report.failures().count(), 0);
        assert_eq!(report.accepted().count(), 0);
    }

    #[test]
    fn test_overall_status_has_failures() {
        let report = IngestionReport::from_candidates(sample_candidates());
        assert_eq!(report.overall_status(), OverallStatus::HasFailures);
    }

    #[test]
    fn test_failures_carry_path_and_reason() {
        let report = IngestionReport::from_candidates(sample_candidates());
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].0, Path::new("exams/midterm.pptx"));
        assert_eq!(
            failures[0].1,
            "File format '.pptx' is not allowed for source_type 'exam'"
        );
    }

    #[test]
    fn test_accepted_records_are_downstream_ready() {
        let report = IngestionReport::from_candidates(sample_candidates());
        let accepted: Vec<_> = report.accepted().collect();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].path, PathBuf::from("lectures/l01.pptx"));
        assert_eq!(accepted[0].source_type, SourceType::LectureSlides);
        assert_eq!(accepted[0].format, FileFormat::Pptx);
    }

    #[test]
    fn test_summary_counts() {
        let report = IngestionReport::from_candidates(sample_candidates());
        let summary = report.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.rejected_format, 1);
        assert_eq!(summary.rejected_unresolvable_type, 0);
        assert_eq!(summary.rejected_mapping, 1);
    }
}
