//! Question pools: loading and validating question-set documents.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{QuizError, ValidationError};
use crate::model::{Question, QuestionKind, QuestionRecord, FILL_BLANK, MULTIPLE_CHOICE};

/// The validated questions for one topic.
///
/// Sessions never borrow from the pool; they take owned copies, so nothing a
/// session does (retry scheduling in particular) can reach back into it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPool {
    questions: Vec<Question>,
    records: Vec<Value>,
}

impl QuestionPool {
    /// Build a pool from a parsed question-set document.
    ///
    /// The document must be a non-empty JSON array. Elements are accepted
    /// as-is; see [`Question::from_record`] for how each one is resolved.
    pub fn load(raw: &Value) -> Result<Self, QuizError> {
        let Some(items) = raw.as_array() else {
            return Err(ValidationError::Malformed(format!(
                "expected a JSON array of questions, found {}",
                json_type_name(raw)
            ))
            .into());
        };
        if items.is_empty() {
            return Err(ValidationError::Empty.into());
        }

        let questions = items
            .iter()
            .map(|item| Question::from_record(&QuestionRecord::from_value(item)))
            .collect();

        tracing::debug!(count = items.len(), "loaded question pool");

        Ok(Self {
            questions,
            records: items.clone(),
        })
    }

    /// Parse question-set text and build a pool from it.
    pub fn from_json_str(content: &str) -> Result<Self, QuizError> {
        let raw: Value = serde_json::from_str(content)
            .map_err(|e| ValidationError::Malformed(format!("invalid JSON: {e}")))?;
        Self::load(&raw)
    }

    /// Build a pool directly from resolved questions (useful for testing).
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            records: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Owned copies of every question, in document order.
    pub fn to_vec(&self) -> Vec<Question> {
        self.questions.clone()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A non-fatal issue found in a question pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Zero-based position of the record in the document.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Check a pool for content problems that would not stop a session but
/// probably surprise the learner.
pub fn validate_pool(pool: &QuestionPool) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut warn = |index: usize, message: String| {
        tracing::warn!(index, "{message}");
        warnings.push(ValidationWarning { index, message });
    };

    // Raw-record checks only apply to pools loaded from a document.
    for (index, raw) in pool.records.iter().enumerate() {
        let Some(obj) = raw.as_object() else {
            warn(index, format!("record is a JSON {}, not an object", json_type_name(raw)));
            continue;
        };
        let tag = obj.get("type").and_then(Value::as_str).filter(|t| !t.is_empty());
        if let Some(tag) = tag {
            if tag != MULTIPLE_CHOICE && tag != FILL_BLANK {
                warn(index, format!("unknown type '{tag}', treated as {FILL_BLANK}"));
            }
        }
        let has_options = obj
            .get("options")
            .and_then(Value::as_array)
            .is_some_and(|o| !o.is_empty());
        if !has_options && pool.questions[index].options().len() == 1 {
            warn(
                index,
                "multiple choice without options; the answer is the only choice".into(),
            );
        }
    }

    let mut seen = HashSet::new();
    for (index, q) in pool.questions.iter().enumerate() {
        if q.text.trim().is_empty() {
            warn(index, "question text is empty".into());
        } else if !seen.insert(q.text.as_str()) {
            warn(index, format!("duplicate question: {}", q.text));
        }
        if q.answer.trim().is_empty() {
            warn(index, "answer is empty".into());
        }
        if let QuestionKind::MultipleChoice { options } = &q.kind {
            if options.is_empty() {
                warn(index, "multiple choice has no selectable options".into());
            } else if !options.contains(&q.answer) {
                warn(index, "answer is not one of the options".into());
            }
        }
    }

    warnings.sort_by_key(|w| w.index);
    warnings
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
