//! Submission-grade answer validation.

use std::collections::BTreeMap;

use survey_types::{AnswerValue, Question, QuestionType};

/// Check whether an answer satisfies a question for submission.
///
/// Not-required questions accept anything, including no answer at all.
/// Required questions demand a value of the right shape:
///
/// - `Text`: non-blank string
/// - `Checkbox`: at least one chosen label
/// - `Radio` / `Likert` / `YesNo`: non-empty string
/// - `Rating`: number in `(0, 5]`
/// - `Ranking`: a complete ranking (see below)
///
/// A ranking is complete when its ranks are exactly the positions
/// `1..=N` with no duplicates or gaps. If `total_ranking_options` is
/// given, the number of ranked labels must also equal it, so every option
/// of the question is ranked exactly once.
pub fn validate_answer(
    answer: Option<&AnswerValue>,
    question_type: QuestionType,
    required: bool,
    total_ranking_options: Option<usize>,
) -> bool {
    if !required {
        return true;
    }
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
        (QuestionType::Ranking, AnswerValue::Ranking(ranks)) => {
            is_complete_ranking(ranks, total_ranking_options)
        }
        _ => false,
    }
}

/// Check whether an answer satisfies a question, deriving the expected
/// ranking size from the question's own option list.
pub fn accepts(question: &Question, answer: Option<&AnswerValue>) -> bool {
    let total_ranking_options =
        (question.question_type == QuestionType::Ranking).then(|| question.options.len());
    validate_answer(
        answer,
        question.question_type,
        question.required,
        total_ranking_options,
    )
}

/// A ranking is complete when the sorted rank positions are exactly
/// `1..=len` - positive, no duplicates, no gaps - and, when the expected
/// option count is known, every option is ranked.
fn is_complete_ranking(ranks: &BTreeMap<String, i64>, expected_options: Option<usize>) -> bool {
    if ranks.is_empty() {
        return false;
    }
    if expected_options.is_some_and(|count| ranks.len() != count) {
        return false;
    }
    let mut positions: Vec<i64> = ranks.values().copied().collect();
    positions.sort_unstable();
    positions
        .iter()
        .zip(1i64..)
        .all(|(&position, expected)| position == expected)
}
