use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique question id, used as the key into [`crate::Answers`].
    pub id: String,

    /// The prompt text shown to the respondent.
    pub question: String,

    /// The question type (determines the expected answer shape).
    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// The options to choose from. Required for option-backed types
    /// (radio, checkbox, likert, ranking), unused for the rest.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Whether an answer must be supplied before submission.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl Question {
    /// Create a new question with no options, not required.
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        question_type: QuestionType,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            question_type,
            options: Vec::new(),
            required: false,
        }
    }

    /// Set the option list.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Mark this question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// The type of a question, determining the expected answer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Free text input. Answered with a non-empty string.
    Text,

    /// Single choice from options. Answered with the chosen option label.
    Radio,

    /// Any number of choices from options. Answered with a list of labels.
    Checkbox,

    /// Agreement scale over options. Answered with the chosen scale label.
    Likert,

    /// Yes/no choice. Answered with a string ("yes"/"no").
    YesNo,

    /// Star rating. Answered with a number in (0, 5].
    Rating,

    /// Rank every option. Answered with a map from option label to position.
    Ranking,
}

impl QuestionType {
    /// All question types, in declaration order.
    pub const ALL: [QuestionType; 7] = [
        QuestionType::Text,
        QuestionType::Radio,
        QuestionType::Checkbox,
        QuestionType::Likert,
        QuestionType::YesNo,
        QuestionType::Rating,
        QuestionType::Ranking,
    ];

    /// The type name as it appears in survey documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Text => "text",
            QuestionType::Radio => "radio",
            QuestionType::Checkbox => "checkbox",
            QuestionType::Likert => "likert",
            QuestionType::YesNo => "yesno",
            QuestionType::Rating => "rating",
            QuestionType::Ranking => "ranking",
        }
    }

    /// Check if this type requires a non-empty `options` list.
    pub fn needs_options(&self) -> bool {
        matches!(
            self,
            QuestionType::Radio
                | QuestionType::Checkbox
                | QuestionType::Likert
                | QuestionType::Ranking
        )
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    /// Parse a document type string. Surrounding whitespace is tolerated;
    /// the name itself must match exactly (type names are lowercase).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(QuestionType::Text),
            "radio" => Ok(QuestionType::Radio),
            "checkbox" => Ok(QuestionType::Checkbox),
            "likert" => Ok(QuestionType::Likert),
            "yesno" => Ok(QuestionType::YesNo),
            "rating" => Ok(QuestionType::Rating),
            "ranking" => Ok(QuestionType::Ranking),
            other => Err(format!("Unknown question type: {other}")),
        }
    }
}
