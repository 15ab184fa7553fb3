use thiserror::Error;

use crate::QuestionType;

/// Validation failure for a whole survey document.
///
/// Display output is the user-facing message; the hosting UI shows it
/// verbatim. Section and question failures carry their 1-based position so
/// the message points at the offending element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("Survey data is not a valid object")]
    NotAnObject,

    #[error("Survey is missing required \"id\" field")]
    MissingId,

    #[error("Survey is missing required \"title\" field")]
    MissingTitle,

    #[error("Survey must have either \"sections\" or \"questions\" array")]
    NoQuestions,

    /// A section failed validation. `index` is 1-based.
    #[error("Section {index}: {source}")]
    Section { index: usize, source: SectionError },

    /// A flat-list question failed validation. `index` is 1-based.
    #[error("Question {index}: {source}")]
    Question { index: usize, source: QuestionError },

    /// Recoverable catch-all for failures outside the field checks,
    /// e.g. a document that passes the schema pass but fails to deserialize.
    #[error("Validation error: {0}")]
    Invalid(String),
}

impl SurveyError {
    /// Wrap a section failure with its 1-based position.
    pub fn section(index: usize, source: SectionError) -> Self {
        Self::Section { index, source }
    }

    /// Wrap a flat-question failure with its 1-based position.
    pub fn question(index: usize, source: QuestionError) -> Self {
        Self::Question { index, source }
    }
}

/// Validation failure for a single section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("Section data is not a valid object")]
    NotAnObject,

    #[error("Section is missing required \"id\" field")]
    MissingId,

    #[error("Section is missing required \"title\" field")]
    MissingTitle,

    #[error("Section is missing a \"questions\" array")]
    MissingQuestions,

    #[error("Section must contain at least one question")]
    NoQuestions,

    /// A question within the section failed validation. `index` is 1-based.
    #[error("Question {index}: {source}")]
    Question { index: usize, source: QuestionError },
}

impl SectionError {
    /// Wrap a question failure with its 1-based position.
    pub fn question(index: usize, source: QuestionError) -> Self {
        Self::Question { index, source }
    }
}

/// Validation failure for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("Question data is not a valid object")]
    NotAnObject,

    #[error("Question is missing required \"id\" field")]
    MissingId,

    #[error("Question is missing required \"question\" text")]
    MissingText,

    #[error("Question is missing required \"type\" field")]
    MissingType,

    #[error(
        "Unknown question type \"{0}\" (valid types: text, radio, checkbox, likert, yesno, rating, ranking)"
    )]
    UnknownType(String),

    #[error("Questions of type \"{0}\" require a non-empty \"options\" array")]
    MissingOptions(QuestionType),

    #[error("Question \"options\" entries must be non-empty strings")]
    BlankOption,

    #[error("Question \"required\" field must be a boolean")]
    RequiredNotBool,
}
