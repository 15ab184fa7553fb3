use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::AnswerValue;

/// Collected answers for a survey, keyed by question id.
///
/// The validator only reads from this map; ownership and persistence
/// (local caching, remote submission) belong to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<String, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer for the given question id, replacing any previous one.
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(question_id.into(), value.into());
    }

    /// Get the answer for the given question id.
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.values.get(question_id)
    }

    /// Check if an answer exists for the given question id.
    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }

    /// Remove the answer for the given question id.
    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.values.remove(question_id)
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another answer set into this one, overwriting on conflicts.
    pub fn extend(&mut self, other: Answers) {
        self.values.extend(other.values);
    }
}

impl IntoIterator for Answers {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a String, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("q1", "hello");
        answers.insert("q2", 4i64);

        assert_eq!(answers.get("q1").and_then(AnswerValue::as_text), Some("hello"));
        assert_eq!(answers.get("q2").and_then(AnswerValue::as_number), Some(4.0));
        assert!(answers.get("q3").is_none());
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn insert_replaces() {
        let mut answers = Answers::new();
        answers.insert("q1", "first");
        answers.insert("q1", "second");
        assert_eq!(answers.get("q1").and_then(AnswerValue::as_text), Some("second"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn transparent_serde() {
        let answers: Answers = serde_json::from_str(
            r#"{"q1": "yes", "q2": ["a"], "q3": 3, "q4": {"A": 1}}"#,
        )
        .unwrap();
        assert_eq!(answers.len(), 4);
        assert_eq!(answers.get("q1").and_then(AnswerValue::as_text), Some("yes"));
        assert!(answers.get("q4").and_then(AnswerValue::as_ranking).is_some());
    }
}
