//! Course tree enumeration and report assembly

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::WalkConfig;
use crate::error::{Error, Result};
use crate::types::candidate::IngestionCandidate;
use crate::types::report::IngestionReport;
use crate::validation::Validator;

/// Walks a course root and validates every candidate file.
///
/// The walk never stops at the first failure: one report surfaces every
/// problem in a course at once. Candidates are ordered lexicographically by
/// path, so two walks over an unchanged tree produce identical reports.
#[derive(Debug, Clone, Default)]
pub struct CourseWalker {
    config: WalkConfig,
}

impl CourseWalker {
    /// Walker with the given configuration
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Enumerate, validate, and report every file under `course_root`.
    ///
    /// # Errors
    ///
    /// Fails if the course root is missing or not a directory, or if the
    /// filesystem walk itself fails. Per-file validation failures are not
    /// errors; they are carried in the report.
    pub fn walk(&self, course_root: &Path) -> Result<IngestionReport> {
        if !course_root.exists() {
            return Err(Error::CourseRootNotFound(course_root.to_path_buf()));
        }
        if !course_root.is_dir() {
            return Err(Error::CourseRootNotADirectory(course_root.to_path_buf()));
        }

        let mut paths = self.enumerate(course_root)?;
        paths.sort();

        let validator = Validator::scoped_to(course_root);
        let candidates: Vec<IngestionCandidate> = if self.config.parallel {
            // Pure per-path computation over read-only tables; the ordered
            // collect preserves the lexicographic report order.
            paths.par_iter().map(|path| validator.validate(path)).collect()
        } else {
            paths.iter().map(|path| validator.validate(path)).collect()
        };

        for candidate in &candidates {
            if let Some(reason) = candidate.reason() {
                tracing::warn!("{}: {}", candidate.path().display(), reason);
            }
        }

        let report = IngestionReport::from_candidates(candidates);
        let summary = report.summary();
        tracing::info!(
            "Walked {}: {} candidates, {} accepted, {} rejected",
            course_root.display(),
            summary.total,
            summary.accepted,
            summary.total - summary.accepted
        );
        Ok(report)
    }

    fn enumerate(&self, course_root: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        let entries = WalkDir::new(course_root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if self.config.should_skip(&name) {
                tracing::debug!("Skipping {}", entry.path().display());
                return false;
            }
            true
        });

        for entry in entries {
            let entry = entry?;
            if entry.file_type().is_file() {
                paths.push(entry.path().to_path_buf());
            }
        }
        Ok(paths)
    }
}
