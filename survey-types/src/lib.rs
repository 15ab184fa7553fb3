//! Core types for survey documents and respondent answers.
//!
//! This crate provides the foundational types for working with surveys:
//! - `Survey` and `Section` - The document structure
//! - `Question` and `QuestionType` - Individual questions and their types
//! - `AnswerValue` and `Answers` - Respondent-supplied data keyed by question id
//! - `SurveyError`, `SectionError`, `QuestionError` - Validation error types

mod question;
pub use question::{Question, QuestionType};

mod survey;
pub use survey::{Section, Survey};

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::Answers;

mod error;
pub use error::{QuestionError, SectionError, SurveyError};
