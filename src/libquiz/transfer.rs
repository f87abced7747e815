use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ImportError, Result};
use crate::question::Question;
use crate::store::QuizStore;

/// A kept id, or `None` when the element needs a fresh one. Absent, null,
/// `false`, `0` and `""` all count as missing; other scalars keep their text.
fn imported_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(id) if id.is_empty() => None,
        Value::String(id) => Some(id.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn choice_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Whole, non-negative numbers index a choice; anything else grades nothing.
fn imported_index(value: Option<&Value>) -> Option<usize> {
    let value = value?;
    if let Some(index) = value.as_u64() {
        return usize::try_from(index).ok();
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
        .map(|f| f as usize)
}

/// Builds a question from an element that passed [`validate_element`].
fn imported_question(element: &Value) -> (Option<String>, Question) {
    let question = Question {
        id: String::new(),
        question: element
            .get("question")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        choices: element
            .get("choices")
            .and_then(Value::as_array)
            .map(|choices| choices.iter().map(choice_text).collect())
            .unwrap_or_default(),
        correct_index: imported_index(element.get("correctIndex")),
    };
    (imported_id(element.get("id")), question)
}

/// `quickquiz-<unix millis>.json`
pub fn default_export_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("quickquiz-{millis}.json")
}

fn validate_element(index: usize, element: &Value) -> Result<(), ImportError> {
    let has_text = element
        .get("question")
        .and_then(Value::as_str)
        .is_some_and(|text| !text.is_empty());
    let enough_choices = element
        .get("choices")
        .and_then(Value::as_array)
        .is_some_and(|choices| choices.len() >= 2);
    if has_text && enough_choices {
        Ok(())
    } else {
        warn!("[Import] Element {} is missing text or choices", index);
        Err(ImportError::MalformedQuestion(index))
    }
}

impl QuizStore {
    /// The whole quiz as pretty-printed JSON.
    pub fn export_quiz(&self) -> Result<String> {
        debug!("[Export] Serializing {} questions", self.quiz.len());
        Ok(serde_json::to_string_pretty(&self.quiz)?)
    }

    /// Replaces the quiz with the questions in `text`. Nothing changes unless
    /// every element is acceptable. Answers are kept.
    pub fn import_quiz(&mut self, text: &str) -> Result<usize, ImportError> {
        let parsed: Value =
            serde_json::from_str(text).map_err(|e| ImportError::InvalidJson(e.to_string()))?;
        let Value::Array(elements) = parsed else {
            return Err(ImportError::NotAnArray);
        };
        for (index, element) in elements.iter().enumerate() {
            validate_element(index, element)?;
        }

        let imported: Vec<(Option<String>, Question)> =
            elements.iter().map(imported_question).collect();

        let mut taken: HashSet<String> = imported.iter().filter_map(|(id, _)| id.clone()).collect();
        let mut quiz = Vec::with_capacity(imported.len());
        for (id, mut question) in imported {
            question.id = match id {
                Some(id) => id,
                None => loop {
                    let id = self.id_generator().next_id();
                    if taken.insert(id.clone()) {
                        break id;
                    }
                },
            };
            quiz.push(question);
        }

        let count = quiz.len();
        self.replace_questions(quiz);
        info!("[Import] Imported {} questions", count);
        Ok(count)
    }
}
