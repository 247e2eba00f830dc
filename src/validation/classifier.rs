//! Directory-name to source-type classification

use crate::types::source::SourceType;

/// Maps a file's immediate parent directory name to a source type.
///
/// Lookup is exact: the eight canonical names only, no aliases and no case
/// folding (`Lectures` does not classify). An unrecognized name is a
/// classification failure for the caller to report, not an error here.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryClassifier;

impl DirectoryClassifier {
    /// Resolve a directory name to a source type, if recognized
    pub fn classify(directory_name: &str) -> Option<SourceType> {
        match directory_name {
            "course_notes" => Some(SourceType::CourseNotes),
            "syllabus" => Some(SourceType::Syllabus),
            "lectures" => Some(SourceType::LectureSlides),
            "notes" => Some(SourceType::StudentNotes),
            "tutorials" => Some(SourceType::PracticeProblems),
            "exams" => Some(SourceType::Exam),
            "solutions" => Some(SourceType::Solution),
            "assignments" => Some(SourceType::Assignment),
            _ => None,
        }
    }

    /// Canonical directory name for a source type (inverse of [`classify`])
    ///
    /// [`classify`]: DirectoryClassifier::classify
    pub fn canonical_directory(source_type: SourceType) -> &'static str {
        match source_type {
            SourceType::CourseNotes => "course_notes",
            SourceType::Syllabus => "syllabus",
            SourceType::LectureSlides => "lectures",
            SourceType::StudentNotes => "notes",
            SourceType::PracticeProblems => "tutorials",
            SourceType::Exam => "exams",
            SourceType::Solution => "solutions",
            SourceType::Assignment => "assignments",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_directories_classify() {
        assert_eq!(DirectoryClassifier::classify("course_notes"), Some(SourceType::CourseNotes));
        assert_eq!(DirectoryClassifier::classify("syllabus"), Some(SourceType::Syllabus));
        assert_eq!(DirectoryClassifier::classify("lectures"), Some(SourceType::LectureSlides));
        assert_eq!(DirectoryClassifier::classify("notes"), Some(SourceType::StudentNotes));
        assert_eq!(DirectoryClassifier::classify("tutorials"), Some(SourceType::PracticeProblems));
        assert_eq!(DirectoryClassifier::classify("exams"), Some(SourceType::Exam));
        assert_eq!(DirectoryClassifier::classify("solutions"), Some(SourceType::Solution));
        assert_eq!(DirectoryClassifier::classify("assignments"), Some(SourceType::Assignment));
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        assert_eq!(DirectoryClassifier::classify("Lectures"), None);
        assert_eq!(DirectoryClassifier::classify("lecture"), None);
        assert_eq!(DirectoryClassifier::classify("exam"), None);
        assert_eq!(DirectoryClassifier::classify("hw"), None);
        assert_eq!(DirectoryClassifier::classify("homework"), None);
        assert_eq!(DirectoryClassifier::classify(""), None);
        assert_eq!(DirectoryClassifier::classify("misc"), None);
    }

    #[test]
    fn test_mapping_is_one_to_one() {
        for source_type in SourceType::ALL {
            let dir = DirectoryClassifier::canonical_directory(source_type);
            assert_eq!(DirectoryClassifier::classify(dir), Some(source_type));
        }
    }
}
