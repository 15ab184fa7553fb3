//! A flat legacy-form poll with no sections.

use survey_types::{Question, QuestionType, Survey};

/// The quick poll as a typed value.
pub fn quick_poll() -> Survey {
    Survey::new("quick-poll", "Lunch Poll")
        .with_question(
            Question::new("attending", "Are you coming to the team lunch?", QuestionType::YesNo)
                .required(),
        )
        .with_question(
            Question::new("cuisine", "Pick a cuisine:", QuestionType::Radio)
                .with_options(["Italian", "Thai", "Mexican"])
                .required(),
        )
        .with_question(Question::new(
            "allergies",
            "Any allergies we should know about?",
            QuestionType::Text,
        ))
}

/// The same poll as a JSON document.
pub const QUICK_POLL_JSON: &str = r#"{
    "id": "quick-poll",
    "title": "Lunch Poll",
    "questions": [
        {
            "id": "attending",
            "question": "Are you coming to the team lunch?",
            "type": "yesno",
            "required": true
        },
        {
            "id": "cuisine",
            "question": "Pick a cuisine:",
            "type": "radio",
            "options": ["Italian", "Thai", "Mexican"],
            "required": true
        },
        {
            "id": "allergies",
            "question": "Any allergies we should know about?",
            "type": "text"
        }
    ]
}"#;
