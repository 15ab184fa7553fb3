use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single answer value supplied by a respondent.
///
/// The expected shape depends on the question type: text questions produce
/// `Text`, checkbox questions produce `Multi`, rating questions produce
/// `Number`, and ranking questions produce `Ranking` (option label → rank
/// position). Radio, likert, and yesno questions produce `Text` holding the
/// chosen label.
///
/// Serialized untagged, so answers read and write as plain JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A string value (text input or a chosen option label).
    Text(String),

    /// A list of chosen option labels (checkbox questions).
    Multi(Vec<String>),

    /// A numeric value (rating questions).
    Number(f64),

    /// A map from option label to rank position (ranking questions).
    Ranking(BTreeMap<String, i64>),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list of labels.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Multi(picks) => Some(picks),
            _ => None,
        }
    }

    /// Try to get this value as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get this value as a ranking map.
    pub fn as_ranking(&self) -> Option<&BTreeMap<String, i64>> {
        match self {
            Self::Ranking(ranks) => Some(ranks),
            _ => None,
        }
    }

    /// Get the shape name of this value for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Multi(_) => "Multi",
            Self::Number(_) => "Number",
            Self::Ranking(_) => "Ranking",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(picks: Vec<String>) -> Self {
        Self::Multi(picks)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<BTreeMap<String, i64>> for AnswerValue {
    fn from(ranks: BTreeMap<String, i64>) -> Self {
        Self::Ranking(ranks)
    }
}

impl<const N: usize> From<[(&str, i64); N]> for AnswerValue {
    fn from(pairs: [(&str, i64); N]) -> Self {
        Self::Ranking(
            pairs
                .into_iter()
                .map(|(label, rank)| (label.to_string(), rank))
                .collect(),
        )
    }
}
