//! Field-by-field schema validation of raw survey documents.
//!
//! Operates on [`serde_json::Value`] rather than the typed model so a
//! malformed document yields a message that points at the broken field.
//! Checks run in document order and stop at the first failure.

use serde_json::{Map, Value};

use survey_types::{QuestionError, QuestionType, SectionError, SurveyError};

/// Validate a raw survey document.
///
/// Checks, in order: the value is an object; `id` and `title` are present;
/// a non-empty `sections` or `questions` array exists; every section and
/// every flat question is valid. The first failure is returned, with
/// section/question failures wrapped in their 1-based position.
pub fn validate_survey(value: &Value) -> Result<(), SurveyError> {
    let Some(survey) = value.as_object() else {
        return Err(SurveyError::NotAnObject);
    };
    if !has_field(survey, "id") {
        return Err(SurveyError::MissingId);
    }
    if !has_field(survey, "title") {
        return Err(SurveyError::MissingTitle);
    }

    let sections = non_empty_array(survey.get("sections"));
    let questions = non_empty_array(survey.get("questions"));
    if sections.is_none() && questions.is_none() {
        return Err(SurveyError::NoQuestions);
    }

    if let Some(sections) = sections {
        for (index, section) in sections.iter().enumerate() {
            validate_section(section)
                .map_err(|source| SurveyError::section(index + 1, source))?;
        }
    }
    if let Some(questions) = questions {
        for (index, question) in questions.iter().enumerate() {
            validate_question(question)
                .map_err(|source| SurveyError::question(index + 1, source))?;
        }
    }
    Ok(())
}

/// Validate a raw section: an object with `id`, `title`, and a non-empty
/// `questions` array whose entries are all valid questions.
pub fn validate_section(value: &Value) -> Result<(), SectionError> {
    let Some(section) = value.as_object() else {
        return Err(SectionError::NotAnObject);
    };
    if !has_field(section, "id") {
        return Err(SectionError::MissingId);
    }
    if !has_field(section, "title") {
        return Err(SectionError::MissingTitle);
    }
    let Some(questions) = section.get("questions").and_then(Value::as_array) else {
        return Err(SectionError::MissingQuestions);
    };
    if questions.is_empty() {
        return Err(SectionError::NoQuestions);
    }
    for (index, question) in questions.iter().enumerate() {
        validate_question(question).map_err(|source| SectionError::question(index + 1, source))?;
    }
    Ok(())
}

/// Validate a raw question: an object with `id`, non-blank `question` text,
/// a recognized `type`, options where the type demands them, and a boolean
/// `required` if one is given.
pub fn validate_question(value: &Value) -> Result<(), QuestionError> {
    let Some(question) = value.as_object() else {
        return Err(QuestionError::NotAnObject);
    };
    if !has_field(question, "id") {
        return Err(QuestionError::MissingId);
    }
    if !question
        .get("question")
        .and_then(Value::as_str)
        .is_some_and(|text| !text.trim().is_empty())
    {
        return Err(QuestionError::MissingText);
    }
    let Some(raw_type) = question.get("type").and_then(Value::as_str) else {
        return Err(QuestionError::MissingType);
    };
    let question_type = raw_type
        .parse::<QuestionType>()
        .map_err(|_| QuestionError::UnknownType(raw_type.to_string()))?;

    if question_type.needs_options() {
        let Some(options) = non_empty_array(question.get("options")) else {
            return Err(QuestionError::MissingOptions(question_type));
        };
        for option in options {
            if !option
                .as_str()
                .is_some_and(|label| !label.trim().is_empty())
            {
                return Err(QuestionError::BlankOption);
            }
        }
    }

    match question.get("required") {
        None | Some(Value::Null) | Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err(QuestionError::RequiredNotBool),
    }
}

/// Check that a field is present and usable: it exists, is not null, and if
/// it's a string it's non-blank.
fn has_field(object: &Map<String, Value>, key: &str) -> bool {
    match object.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value.and_then(Value::as_array).filter(|array| !array.is_empty())
}
