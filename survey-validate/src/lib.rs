//! # survey-validate
//!
//! Validation and progress computation for survey documents.
//!
//! Survey documents arrive as JSON from any transport. Validation happens in
//! two stages:
//!
//! 1. **Schema validation** ([`validate_survey`]) checks a raw
//!    [`serde_json::Value`] field by field, so malformed documents produce a
//!    readable message instead of a deserializer error.
//! 2. **Document loading** ([`parse_document`] / [`survey_from_value`])
//!    validates, then deserializes into the typed [`Survey`] model.
//!
//! Answers are checked against their question type with [`validate_answer`]
//! (a strict, submission-grade check) while [`section_progress`] counts
//! answers under a looser "has the respondent touched this question" bar.
//!
//! Everything here is pure and synchronous: no I/O, no shared state, every
//! function is safe to call concurrently.
//!
//! ```
//! use survey_validate::{parse_document, section_progress, Answers};
//!
//! let survey = parse_document(
//!     r#"{
//!         "id": "s1",
//!         "title": "Quick poll",
//!         "sections": [{
//!             "id": "sec1",
//!             "title": "One question",
//!             "questions": [
//!                 {"id": "q1", "question": "Any thoughts?", "type": "text", "required": true}
//!             ]
//!         }]
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut answers = Answers::new();
//! answers.insert("q1", "plenty");
//!
//! let progress = section_progress(&survey.sections[0], &answers);
//! assert_eq!(progress.percentage, 100);
//! ```

// Re-export all types from survey-types
pub use survey_types::*;

mod schema;
pub use schema::{validate_question, validate_section, validate_survey};

mod document;
pub use document::{parse_document, survey_from_value};

mod answer;
pub use answer::{accepts, validate_answer};

mod progress;
pub use progress::{
    Progress, can_submit, has_meaningful_answer, missing_required, section_progress,
    survey_progress,
};
