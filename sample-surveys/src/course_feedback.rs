//! A sectioned end-of-course feedback survey using every question type.

use survey_types::{Question, QuestionType, Section, Survey};

/// The course feedback survey as a typed value.
pub fn course_feedback() -> Survey {
    Survey::new("course-feedback", "End of Course Feedback")
        .with_section(
            Section::new("about-you", "About you")
                .with_question(
                    Question::new("role", "What best describes you?", QuestionType::Radio)
                        .with_options(["Student", "Professional", "Hobbyist"])
                        .required(),
                )
                .with_question(
                    Question::new("first-course", "Is this your first course with us?", QuestionType::YesNo)
                        .required(),
                ),
        )
        .with_section(
            Section::new("content", "Course content")
                .with_question(
                    Question::new("rating", "How would you rate the course overall?", QuestionType::Rating)
                        .required(),
                )
                .with_question(
                    Question::new(
                        "pace",
                        "The pace of the course was right for me.",
                        QuestionType::Likert,
                    )
                    .with_options([
                        "Strongly disagree",
                        "Disagree",
                        "Neutral",
                        "Agree",
                        "Strongly agree",
                    ])
                    .required(),
                )
                .with_question(
                    Question::new("topics", "Which topics did you enjoy?", QuestionType::Checkbox)
                        .with_options(["Lectures", "Exercises", "Projects", "Guest talks"]),
                )
                .with_question(
                    Question::new(
                        "priorities",
                        "Rank what we should improve first.",
                        QuestionType::Ranking,
                    )
                    .with_options(["Materials", "Pacing", "Support"])
                    .required(),
                ),
        )
        .with_section(
            Section::new("closing", "Closing")
                .with_question(Question::new(
                    "comments",
                    "Anything else you'd like to tell us?",
                    QuestionType::Text,
                )),
        )
}

/// The same survey as a JSON document.
pub const COURSE_FEEDBACK_JSON: &str = r#"{
    "id": "course-feedback",
    "title": "End of Course Feedback",
    "sections": [
        {
            "id": "about-you",
            "title": "About you",
            "questions": [
                {
                    "id": "role",
                    "question": "What best describes you?",
                    "type": "radio",
                    "options": ["Student", "Professional", "Hobbyist"],
                    "required": true
                },
                {
                    "id": "first-course",
                    "question": "Is this your first course with us?",
                    "type": "yesno",
                    "required": true
                }
            ]
        },
        {
            "id": "content",
            "title": "Course content",
            "questions": [
                {
                    "id": "rating",
                    "question": "How would you rate the course overall?",
                    "type": "rating",
                    "required": true
                },
                {
                    "id": "pace",
                    "question": "The pace of the course was right for me.",
                    "type": "likert",
                    "options": [
                        "Strongly disagree",
                        "Disagree",
                        "Neutral",
                        "Agree",
                        "Strongly agree"
                    ],
                    "required": true
                },
                {
                    "id": "topics",
                    "question": "Which topics did you enjoy?",
                    "type": "checkbox",
                    "options": ["Lectures", "Exercises", "Projects", "Guest talks"]
                },
                {
                    "id": "priorities",
                    "question": "Rank what we should improve first.",
                    "type": "ranking",
                    "options": ["Materials", "Pacing", "Support"],
                    "required": true
                }
            ]
        },
        {
            "id": "closing",
            "title": "Closing",
            "questions": [
                {
                    "id": "comments",
                    "question": "Anything else you'd like to tell us?",
                    "type": "text"
                }
            ]
        }
    ]
}"#;
