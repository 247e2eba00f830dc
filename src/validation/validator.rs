//! Single-file validation

use std::path::{Path, PathBuf};

use super::classifier::DirectoryClassifier;
use super::formats::FormatRegistry;
use crate::types::candidate::IngestionCandidate;
use crate::types::source::FileFormat;

/// Validates one file: format support, source-type resolution, and
/// format-per-type compatibility, in that order.
///
/// Checks short-circuit on the first failure. Format support comes first
/// because an unsupported extension is unambiguous regardless of placement;
/// type resolution comes before the compatibility check because a file
/// cannot be checked against a table it has no type for.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    course_root: Option<PathBuf>,
}

impl Validator {
    /// Validator with no course root scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator scoped to a course root.
    ///
    /// Files directly under the root never classify, even when the root
    /// directory itself carries a canonical name like `notes`.
    pub fn scoped_to(course_root: impl Into<PathBuf>) -> Self {
        Self {
            course_root: Some(course_root.into()),
        }
    }

    /// Produce the candidate record for `path`
    pub fn validate(&self, path: &Path) -> IngestionCandidate {
        let extension = raw_extension(path);
        let Some(format) = FileFormat::from_extension(&extension) else {
            return IngestionCandidate::rejected_format(path.to_path_buf(), &extension);
        };

        // Only the immediate parent directory is consulted; deeper nesting
        // classifies each file by its own parent.
        let parent = path.parent().filter(|p| Some(*p) != self.course_root.as_deref());
        let source_type = parent
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .and_then(DirectoryClassifier::classify);
        let Some(source_type) = source_type else {
            return IngestionCandidate::rejected_unresolvable(path.to_path_buf(), format);
        };

        if !FormatRegistry::is_allowed(source_type, format) {
            return IngestionCandidate::rejected_mapping(path.to_path_buf(), format, source_type);
        }

        IngestionCandidate::accepted(path.to_path_buf(), source_type, format)
    }
}

/// Dotted lowercase extension as found on disk, empty when absent
fn raw_extension(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_lowercase()),
        _ => String::new(),
    }
}
