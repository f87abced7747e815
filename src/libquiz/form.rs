use crate::error::ValidationError;
use crate::question::{Question, CHOICES_PER_QUESTION};

/// The authoring form: a question being written or edited, not yet part of
/// the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionForm {
    pub question: String,
    pub choices: [String; CHOICES_PER_QUESTION],
    pub correct_index: usize,
}

/// Trimmed, checked form contents, ready to become a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidForm {
    pub question: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

impl QuestionForm {
    pub fn new(
        question: impl Into<String>,
        choices: [String; CHOICES_PER_QUESTION],
        correct_index: usize,
    ) -> Self {
        Self {
            question: question.into(),
            choices,
            correct_index,
        }
    }

    /// Loads an existing question. Imported questions may carry any number of
    /// choices; missing slots stay empty and extra ones are dropped.
    pub fn from_question(question: &Question) -> Self {
        let mut choices: [String; CHOICES_PER_QUESTION] = Default::default();
        for (slot, choice) in choices.iter_mut().zip(&question.choices) {
            slot.clone_from(choice);
        }
        Self {
            question: question.question.clone(),
            choices,
            correct_index: question.correct_index.unwrap_or_default(),
        }
    }

    pub fn set_choice(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.choices.get_mut(index) {
            *slot = text.into();
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn validate(&self) -> Result<ValidForm, ValidationError> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(ValidationError::MissingQuestion);
        }
        let choices: Vec<String> = self.choices.iter().map(|c| c.trim().to_string()).collect();
        if choices.iter().any(String::is_empty) {
            return Err(ValidationError::MissingChoice);
        }
        if self.correct_index >= CHOICES_PER_QUESTION {
            return Err(ValidationError::CorrectIndexOutOfRange(self.correct_index));
        }
        Ok(ValidForm {
            question: question.to_string(),
            choices,
            correct_index: self.correct_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(items: [&str; 4]) -> [String; 4] {
        items.map(String::from)
    }

    #[test]
    fn trims_every_field() {
        let form = QuestionForm::new("  2+2? ", choices([" 3", "4 ", " 5 ", "6"]), 1);
        let valid = form.validate().unwrap();
        assert_eq!(valid.question, "2+2?");
        assert_eq!(valid.choices, vec!["3", "4", "5", "6"]);
        assert_eq!(valid.correct_index, 1);
    }

    #[test]
    fn checks_run_in_order() {
        let blank = QuestionForm::new("   ", choices(["", "", "", ""]), 9);
        assert_eq!(blank.validate(), Err(ValidationError::MissingQuestion));

        let missing_choice = QuestionForm::new("q", choices(["a", "  ", "c", "d"]), 9);
        assert_eq!(missing_choice.validate(), Err(ValidationError::MissingChoice));

        let bad_index = QuestionForm::new("q", choices(["a", "b", "c", "d"]), 4);
        assert_eq!(
            bad_index.validate(),
            Err(ValidationError::CorrectIndexOutOfRange(4))
        );
    }

    #[test]
    fn loading_a_short_question_leaves_blank_slots() {
        let question = Question {
            id: "x".into(),
            question: "Yes?".into(),
            choices: vec!["yes".into(), "no".into()],
            correct_index: Some(0),
        };
        let form = QuestionForm::from_question(&question);
        assert_eq!(form.choices, choices(["yes", "no", "", ""]));
        assert_eq!(form.validate(), Err(ValidationError::MissingChoice));
    }

    #[test]
    fn set_choice_ignores_out_of_range_slots() {
        let mut form = QuestionForm::default();
        form.set_choice(2, "three");
        form.set_choice(7, "nowhere");
        assert_eq!(form.choices[2], "three");
        assert!(!form.is_empty());
    }
}
