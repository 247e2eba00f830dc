//! Closed source-type and file-format taxonomies

use serde::{Deserialize, Serialize};

/// Semantic category of a course document.
///
/// This is never inferred from content. It is resolved purely from the
/// file's position in the course directory tree, so the taxonomy stays a
/// closed enum: adding a variant forces every compatibility table in
/// [`crate::validation`] to be updated at compile time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Instructor-authored course notes
    CourseNotes,
    /// Lecture slide decks
    LectureSlides,
    /// Student-authored notes
    StudentNotes,
    /// Course syllabus
    Syllabus,
    /// Tutorial / practice problem sets
    PracticeProblems,
    /// Exam papers
    Exam,
    /// Published solutions
    Solution,
    /// Assignment handouts
    Assignment,
}

impl SourceType {
    /// Every source type, in declaration order
    pub const ALL: [SourceType; 8] = [
        SourceType::CourseNotes,
        SourceType::LectureSlides,
        SourceType::StudentNotes,
        SourceType::Syllabus,
        SourceType::PracticeProblems,
        SourceType::Exam,
        SourceType::Solution,
        SourceType::Assignment,
    ];

    /// Canonical snake_case name, as used in reports and reason strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::CourseNotes => "course_notes",
            SourceType::LectureSlides => "lecture_slides",
            SourceType::StudentNotes => "student_notes",
            SourceType::Syllabus => "syllabus",
            SourceType::PracticeProblems => "practice_problems",
            SourceType::Exam => "exam",
            SourceType::Solution => "solution",
            SourceType::Assignment => "assignment",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported file formats, derived from the file extension.
///
/// Any extension outside this set is categorically unsupported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// PDF document
    Pdf,
    /// Microsoft PowerPoint presentation (.pptx)
    Pptx,
    /// Microsoft Word document (.docx)
    Docx,
    /// Markdown file
    Md,
    /// Plain text file
    Txt,
}

impl FileFormat {
    /// Every supported format, in declaration order
    pub const ALL: [FileFormat; 5] = [
        FileFormat::Pdf,
        FileFormat::Pptx,
        FileFormat::Docx,
        FileFormat::Md,
        FileFormat::Txt,
    ];

    /// Detect format from an extension.
    ///
    /// Matching is case-insensitive and a leading dot is ignored, so
    /// `"pdf"`, `".pdf"` and `".PDF"` all resolve to [`FileFormat::Pdf`].
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "pptx" => Some(Self::Pptx),
            "docx" => Some(Self::Docx),
            "md" => Some(Self::Md),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Canonical dotted lowercase extension (".pdf" etc.)
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Pptx => ".pptx",
            Self::Docx => ".docx",
            Self::Md => ".md",
            Self::Txt => ".txt",
        }
    }

    /// Bare lowercase name without the dot
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Pptx => "pptx",
            Self::Docx => "docx",
            Self::Md => "md",
            Self::Txt => "txt",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
