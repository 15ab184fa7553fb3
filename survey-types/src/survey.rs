use serde::{Deserialize, Serialize};

use crate::Question;

/// The top-level survey document.
///
/// A survey is a structured collection of questions, grouped into sections
/// or supplied as a flat list (the legacy form). It's presentation-agnostic —
/// the same document can back a wizard, a form, or a printed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Unique survey id.
    pub id: String,

    /// Title shown to the respondent.
    pub title: String,

    /// Question groups. A valid survey has at least one section or at
    /// least one flat question.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,

    /// Flat question list (legacy form, no sections).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<Question>,
}

impl Survey {
    /// Create a new survey with no sections or questions.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sections: Vec::new(),
            questions: Vec::new(),
        }
    }

    /// Append a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a flat question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Iterate over every question in the survey: all section questions in
    /// order, then the flat questions.
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
            .chain(self.questions.iter())
    }

    /// Total number of questions across sections and the flat list.
    pub fn question_count(&self) -> usize {
        self.all_questions().count()
    }

    /// Check if the survey has no questions at all.
    pub fn is_empty(&self) -> bool {
        self.all_questions().next().is_none()
    }
}

/// A named group of questions within a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section id.
    pub id: String,

    /// Section title shown to the respondent.
    pub title: String,

    /// The questions in this section. A valid section has at least one.
    pub questions: Vec<Question>,
}

impl Section {
    /// Create a new empty section.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Append a question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Number of questions in this section.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the section has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionType;

    #[test]
    fn all_questions_walks_sections_then_flat() {
        let survey = Survey::new("s1", "Feedback")
            .with_section(
                Section::new("sec1", "About you")
                    .with_question(Question::new("q1", "Name?", QuestionType::Text)),
            )
            .with_section(
                Section::new("sec2", "Opinions")
                    .with_question(Question::new("q2", "Rating?", QuestionType::Rating)),
            )
            .with_question(Question::new("q3", "Anything else?", QuestionType::Text));

        let ids: Vec<_> = survey.all_questions().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
        assert_eq!(survey.question_count(), 3);
        assert!(!survey.is_empty());
    }

    #[test]
    fn empty_survey() {
        let survey = Survey::new("s1", "Empty");
        assert!(survey.is_empty());
        assert_eq!(survey.question_count(), 0);
    }

    #[test]
    fn sectionless_document_round_trips() {
        let survey = Survey::new("legacy", "Flat")
            .with_question(Question::new("q1", "Hello?", QuestionType::YesNo));
        let json = serde_json::to_string(&survey).unwrap();
        assert!(!json.contains("sections"));
        let round: Survey = serde_json::from_str(&json).unwrap();
        assert_eq!(round, survey);
    }
}
