//! Global format support and per-type compatibility tables

use crate::types::source::{FileFormat, SourceType};

/// Static format tables.
///
/// Both tables are compile-time constants over closed enums: extending
/// either taxonomy fails to compile until every row here is revisited, so
/// partial support cannot slip in silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatRegistry;

impl FormatRegistry {
    /// Whether `extension` is in the globally supported set.
    ///
    /// Case-insensitive; a leading dot is ignored.
    pub fn is_supported(extension: &str) -> bool {
        FileFormat::from_extension(extension).is_some()
    }

    /// Formats allowed for `source_type`.
    ///
    /// Every source type has a non-empty allowed set, and every entry is
    /// drawn from the global [`FileFormat`] set. `.txt` is globally
    /// supported but appears in no row: plain-text files always fail the
    /// compatibility check with a reason naming the resolved type.
    pub fn allowed_formats(source_type: SourceType) -> &'static [FileFormat] {
        match source_type {
            SourceType::CourseNotes => &[FileFormat::Pdf, FileFormat::Docx, FileFormat::Md],
            SourceType::LectureSlides => &[FileFormat::Pptx, FileFormat::Pdf],
            SourceType::StudentNotes => &[FileFormat::Docx, FileFormat::Md, FileFormat::Pdf],
            SourceType::Syllabus => &[FileFormat::Pdf, FileFormat::Docx],
            SourceType::PracticeProblems => &[FileFormat::Pdf, FileFormat::Docx],
            SourceType::Exam => &[FileFormat::Pdf],
            SourceType::Solution => &[FileFormat::Pdf, FileFormat::Docx],
            SourceType::Assignment => &[FileFormat::Pdf, FileFormat::Docx],
        }
    }

    /// Whether `format` is allowed for `source_type`
    pub fn is_allowed(source_type: SourceType, format: FileFormat) -> bool {
        Self::allowed_formats(source_type).contains(&format)
    }
}
