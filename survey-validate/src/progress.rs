//! Answer progress and the submission gate.
//!
//! Progress counts questions the respondent has *touched*, a deliberately
//! looser bar than submission-grade validity: a partially filled ranking
//! counts toward progress, but [`crate::validate_answer`] still rejects it
//! for a required question.

use serde::Serialize;

use survey_types::{Answers, AnswerValue, QuestionType, Section, Survey};

use crate::answer;

/// How far through a set of questions the respondent is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Questions with a meaningful answer.
    pub current: usize,

    /// Total number of questions.
    pub total: usize,

    /// `current / total`, rounded to the nearest percent. 0 when there are
    /// no questions.
    pub percentage: u8,
}

impl Progress {
    /// Compute progress from a count of answered questions.
    pub fn new(current: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((current as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            current,
            total,
            percentage,
        }
    }
}

/// Check whether an answer counts as "the respondent touched this question".
///
/// Same shape checks as [`crate::validate_answer`], minus the required and
/// ranking-completeness constraints: a ranking with at least one ranked
/// option counts.
pub fn has_meaningful_answer(answer: Option<&AnswerValue>, question_type: QuestionType) -> bool {
    let Some(answer) = answer else {
        return false;
    };
    match (question_type, answer) {
        (QuestionType::Text, AnswerValue::Text(text)) => !text.trim().is_empty(),
        (QuestionType::Checkbox, AnswerValue::Multi(picks)) => !picks.is_empty(),
        (
            QuestionType::Radio | QuestionType::Likert | QuestionType::YesNo,
            AnswerValue::Text(choice),
        ) => !choice.is_empty(),
        (QuestionType::Rating, AnswerValue::Number(score)) => *score > 0.0 && *score <= 5.0,
        (QuestionType::Ranking, AnswerValue::Ranking(ranks)) => !ranks.is_empty(),
        _ => false,
    }
}

/// Compute answer progress for one section.
pub fn section_progress(section: &Section, answers: &Answers) -> Progress {
    let current = section
        .questions
        .iter()
        .filter(|question| {
            has_meaningful_answer(answers.get(&question.id), question.question_type)
        })
        .count();
    Progress::new(current, section.questions.len())
}

/// Compute answer progress across the whole survey, sections and flat
/// questions alike.
pub fn survey_progress(survey: &Survey, answers: &Answers) -> Progress {
    let current = survey
        .all_questions()
        .filter(|question| {
            has_meaningful_answer(answers.get(&question.id), question.question_type)
        })
        .count();
    Progress::new(current, survey.question_count())
}

/// Ids of required questions whose answer does not pass submission-grade
/// validation, in document order.
pub fn missing_required<'a>(survey: &'a Survey, answers: &Answers) -> Vec<&'a str> {
    survey
        .all_questions()
        .filter(|question| !answer::accepts(question, answers.get(&question.id)))
        .map(|question| question.id.as_str())
        .collect()
}

/// Check whether every required question has a valid answer. The hosting
/// flow refuses to submit while this is false.
pub fn can_submit(survey: &Survey, answers: &Answers) -> bool {
    survey
        .all_questions()
        .all(|question| answer::accepts(question, answers.get(&question.id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_types::Question;

    fn section() -> Section {
        Section::new("sec1", "S")
            .with_question(Question::new("q1", "Q?", QuestionType::Text).required())
            .with_question(Question::new("q2", "Pick:", QuestionType::Checkbox).with_options(["a", "b"]))
            .with_question(
                Question::new("q3", "Order:", QuestionType::Ranking)
                    .with_options(["A", "B", "C"])
                    .required(),
            )
    }

    #[test]
    fn empty_answers_give_zero_progress() {
        let progress = section_progress(&section(), &Answers::new());
        assert_eq!(
            progress,
            Progress {
                current: 0,
                total: 3,
                percentage: 0
            }
        );
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let mut answers = Answers::new();
        answers.insert("q1", "hello");
        let progress = section_progress(&section(), &answers);
        // 1 of 3 rounds to 33
        assert_eq!(progress.current, 1);
        assert_eq!(progress.percentage, 33);

        answers.insert("q2", vec!["a".to_string()]);
        let progress = section_progress(&section(), &answers);
        // 2 of 3 rounds to 67
        assert_eq!(progress.percentage, 67);
    }

    #[test]
    fn empty_section_is_zero_percent() {
        let empty = Section::new("sec0", "Empty");
        assert_eq!(section_progress(&empty, &Answers::new()), Progress::new(0, 0));
    }

    #[test]
    fn partial_ranking_counts_toward_progress_but_blocks_submission() {
        let survey = Survey::new("s1", "T").with_section(section());
        let mut answers = Answers::new();
        answers.insert("q1", "done");
        answers.insert("q3", AnswerValue::from([("A", 1)]));

        let progress = section_progress(&survey.sections[0], &answers);
        assert_eq!(progress.current, 2);

        assert!(!can_submit(&survey, &answers));
        assert_eq!(missing_required(&survey, &answers), vec!["q3"]);

        answers.insert("q3", AnswerValue::from([("A", 1), ("B", 2), ("C", 3)]));
        assert!(can_submit(&survey, &answers));
        assert!(missing_required(&survey, &answers).is_empty());
    }

    #[test]
    fn blank_text_does_not_count() {
        let mut answers = Answers::new();
        answers.insert("q1", "   ");
        assert_eq!(section_progress(&section(), &answers).current, 0);
    }

    #[test]
    fn adding_an_answer_never_lowers_progress() {
        let section = section();
        let mut answers = Answers::new();
        let mut previous = section_progress(&section, &answers);

        let steps: [(&str, AnswerValue); 3] = [
            ("q1", AnswerValue::from("text")),
            ("q2", AnswerValue::from(vec!["b".to_string()])),
            ("q3", AnswerValue::from([("A", 1)])),
        ];
        for (id, value) in steps {
            answers.insert(id, value);
            let next = section_progress(&section, &answers);
            assert_eq!(next.current, previous.current + 1);
            assert!(next.percentage >= previous.percentage);
            previous = next;
        }
        assert_eq!(previous.percentage, 100);
    }

    #[test]
    fn survey_progress_spans_sections_and_flat_questions() {
        let survey = Survey::new("s1", "T")
            .with_section(section())
            .with_question(Question::new("q4", "Overall?", QuestionType::Rating));

        let mut answers = Answers::new();
        answers.insert("q4", 4i64);

        let progress = survey_progress(&survey, &answers);
        assert_eq!(progress.current, 1);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percentage, 25);
    }

    #[test]
    fn optional_questions_do_not_block_submission() {
        let survey = Survey::new("s1", "T")
            .with_question(Question::new("q1", "Optional?", QuestionType::Text));
        assert!(can_submit(&survey, &Answers::new()));
    }
}
