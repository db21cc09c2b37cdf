//! Core data model types for quizdeck.
//!
//! A question-set document is a JSON array of loosely-shaped records
//! ([`QuestionRecord`]). Each record is resolved exactly once at load time
//! into a [`Question`] whose [`QuestionKind`] is fixed from then on.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire tag for multiple-choice records.
pub const MULTIPLE_CHOICE: &str = "multiple_choice";
/// Wire tag for fill-in-the-blank records.
pub const FILL_BLANK: &str = "fill_blank";

/// A question record as it appears in a question-set document.
///
/// Every field is optional; instructional content is trusted, so missing
/// text is rendered as empty rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Prompt shown to the learner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Value>,
    /// Explicit kind tag (`multiple_choice` or `fill_blank`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Choices for multiple-choice records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Value>>,
    /// Ground truth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<Value>,
}

impl QuestionRecord {
    /// Read a record out of an arbitrary JSON value.
    ///
    /// Non-object values (and objects whose fields have unexpected shapes)
    /// are accepted field by field: anything unusable is treated as absent.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            question: obj.get("question").filter(|v| !v.is_null()).cloned(),
            kind: obj
                .get("type")
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_owned),
            options: obj.get("options").and_then(Value::as_array).cloned(),
            answer: obj.get("answer").filter(|v| !v.is_null()).cloned(),
        }
    }
}

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick one of the listed options; compared exactly.
    MultipleChoice { options: Vec<String> },
    /// Type the answer; compared after normalization.
    FillBlank,
}

impl QuestionKind {
    /// The wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => MULTIPLE_CHOICE,
            QuestionKind::FillBlank => FILL_BLANK,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice { .. } => write!(f, "multiple choice"),
            QuestionKind::FillBlank => write!(f, "fill in the blank"),
        }
    }
}

/// A resolved question, ready for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text (empty when the record had none).
    pub text: String,
    /// Resolved kind, including the option list for multiple choice.
    pub kind: QuestionKind,
    /// Authoritative answer, stringified.
    pub answer: String,
}

impl Question {
    /// Resolve a raw record.
    ///
    /// An explicit `type` wins (`multiple_choice` → multiple choice, any other
    /// tag → fill in the blank). Without one, a non-empty `options` list
    /// makes it multiple choice. A multiple-choice record with no options
    /// and a string answer gets that answer as its only option.
    pub fn from_record(record: &QuestionRecord) -> Self {
        let text = record.question.as_ref().map(stringify).unwrap_or_default();
        let answer = record.answer.as_ref().map(stringify).unwrap_or_default();
        let options: Vec<String> = record
            .options
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(stringify)
            .collect();

        let is_multiple_choice = match record.kind.as_deref().filter(|t| !t.is_empty()) {
            Some(tag) => tag == MULTIPLE_CHOICE,
            None => !options.is_empty(),
        };

        let kind = if is_multiple_choice {
            let string_answer = record.answer.as_ref().is_some_and(Value::is_string);
            let options = if options.is_empty() && string_answer {
                vec![answer.clone()]
            } else {
                options
            };
            QuestionKind::MultipleChoice { options }
        } else {
            QuestionKind::FillBlank
        };

        Self { text, kind, answer }
    }

    /// Convenience constructor for a multiple-choice question.
    pub fn multiple_choice(text: &str, options: &[&str], answer: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: QuestionKind::MultipleChoice {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
            answer: answer.to_string(),
        }
    }

    /// Convenience constructor for a fill-in-the-blank question.
    pub fn fill_blank(text: &str, answer: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: QuestionKind::FillBlank,
            answer: answer.to_string(),
        }
    }

    /// Options in document order, empty for fill-in-the-blank.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => options,
            QuestionKind::FillBlank => &[],
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }
}

/// One incorrect submission, kept for the end-of-session review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswer {
    /// Question text as shown.
    pub question: String,
    /// What the learner gave, unnormalized.
    pub user_answer: String,
    /// The authoritative answer, unnormalized.
    pub correct_answer: String,
}

/// Render a JSON scalar the way it reads on screen: strings verbatim,
/// everything else in its JSON form.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: Value) -> Question {
        Question::from_record(&QuestionRecord::from_value(&value))
    }

    #[test]
    fn infers_multiple_choice_from_options() {
        let q = resolve(json!({
            "question": "Which metal is ferromagnetic?",
            "options": ["Iron", "Copper", "Zinc"],
            "answer": "Iron"
        }));
        assert!(q.is_multiple_choice());
        assert_eq!(q.options(), ["Iron", "Copper", "Zinc"]);
        assert_eq!(q.answer, "Iron");
    }

    #[test]
    fn infers_fill_blank_without_options() {
        let q = resolve(json!({"question": "Bond sharing electrons?", "answer": "covalent bond"}));
        assert_eq!(q.kind, QuestionKind::FillBlank);
        assert!(q.options().is_empty());
    }

    #[test]
    fn empty_options_without_type_is_fill_blank() {
        let q = resolve(json!({"question": "q", "options": [], "answer": "a"}));
        assert_eq!(q.kind, QuestionKind::FillBlank);
    }

    #[test]
    fn explicit_type_wins() {
        let q = resolve(json!({
            "question": "q",
            "type": "fill_blank",
            "options": ["a", "b"],
            "answer": "a"
        }));
        assert_eq!(q.kind, QuestionKind::FillBlank);

        let q = resolve(json!({"question": "q", "type": "true_false", "answer": "true"}));
        assert_eq!(q.kind, QuestionKind::FillBlank);
    }

    #[test]
    fn empty_type_falls_back_to_inference() {
        let q = resolve(json!({"question": "q", "type": "", "options": ["a", "b"], "answer": "a"}));
        assert_eq!(q.options(), ["a", "b"]);

        let q = resolve(json!({"question": "q", "type": "", "answer": "a"}));
        assert_eq!(q.kind, QuestionKind::FillBlank);

        let record = QuestionRecord {
            kind: Some(String::new()),
            options: Some(vec![json!("x")]),
            ..QuestionRecord::default()
        };
        assert!(Question::from_record(&record).is_multiple_choice());
    }

    #[test]
    fn synthesizes_single_option_from_string_answer() {
        let q = resolve(json!({"question": "q", "type": "multiple_choice", "answer": "only"}));
        assert_eq!(q.options(), ["only"]);

        let q = resolve(json!({
            "question": "q",
            "type": "multiple_choice",
            "options": [],
            "answer": 4
        }));
        assert!(q.options().is_empty());
        assert_eq!(q.answer, "4");
    }

    #[test]
    fn missing_fields_become_empty() {
        let q = resolve(json!({}));
        assert_eq!(q.text, "");
        assert_eq!(q.answer, "");
        assert_eq!(q.kind, QuestionKind::FillBlank);

        let q = resolve(json!(17));
        assert_eq!(q.text, "");
    }

    #[test]
    fn non_string_scalars_are_stringified() {
        let q = resolve(json!({"question": "2 + 2?", "options": [3, 4, 5], "answer": 4}));
        assert_eq!(q.options(), ["3", "4", "5"]);
        assert_eq!(q.answer, "4");
    }

    #[test]
    fn kind_tags() {
        assert_eq!(QuestionKind::FillBlank.tag(), "fill_blank");
        assert_eq!(
            QuestionKind::MultipleChoice { options: vec![] }.tag(),
            "multiple_choice"
        );
        assert_eq!(QuestionKind::FillBlank.to_string(), "fill in the blank");
    }

    #[test]
    fn record_serde_uses_type_field() {
        let record: QuestionRecord =
            serde_json::from_value(json!({"question": "q", "type": "fill_blank", "answer": "a"})).unwrap();
        assert_eq!(record.kind.as_deref(), Some("fill_blank"));
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["type"], "fill_blank");
        assert!(back.get("options").is_none());
    }
}
