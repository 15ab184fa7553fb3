//! Loading raw JSON documents into the typed survey model.

use serde_json::Value;

use survey_types::{Survey, SurveyError};

use crate::schema;

/// Parse and validate a JSON survey document.
///
/// Parse failures surface as [`SurveyError::Invalid`]; structural problems
/// surface with the message from the schema pass.
pub fn parse_document(text: &str) -> Result<Survey, SurveyError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| SurveyError::Invalid(err.to_string()))?;
    survey_from_value(value)
}

/// Validate an already-parsed JSON value and convert it into a [`Survey`].
pub fn survey_from_value(value: Value) -> Result<Survey, SurveyError> {
    schema::validate_survey(&value)?;
    serde_json::from_value(value).map_err(|err| SurveyError::Invalid(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_types::QuestionType;

    #[test]
    fn parses_valid_document() {
        let survey = parse_document(
            r#"{
                "id": "s1",
                "title": "T",
                "sections": [{
                    "id": "sec1",
                    "title": "S",
                    "questions": [
                        {"id": "q1", "type": "text", "question": "Q?", "required": true}
                    ]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(survey.id, "s1");
        assert_eq!(survey.sections.len(), 1);
        let question = &survey.sections[0].questions[0];
        assert_eq!(question.question_type, QuestionType::Text);
        assert!(question.required);
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = parse_document("{not json").unwrap_err();
        assert!(matches!(err, SurveyError::Invalid(_)));
        assert!(err.to_string().starts_with("Validation error: "));
    }

    #[test]
    fn structural_problems_keep_their_message() {
        let err = parse_document(r#"{"id": "s1"}"#).unwrap_err();
        assert_eq!(err, SurveyError::MissingTitle);
    }
}
