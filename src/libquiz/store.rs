use log::{debug, info};
use std::collections::HashMap;

use crate::error::ValidationError;
use crate::form::QuestionForm;
use crate::grading::AnswerRecord;
use crate::question::{IdGenerator, Question, CHOICES_PER_QUESTION};

pub const DELETE_PROMPT: &str = "Delete this question?";
pub const CLEAR_PROMPT: &str = "Clear entire quiz (all questions)?";

/// The quiz being authored and taken, the student's answers, and the
/// authoring form.
#[derive(Debug, Default)]
pub struct QuizStore {
    pub(crate) quiz: Vec<Question>,
    pub(crate) answers: HashMap<String, AnswerRecord>,
    pub form: QuestionForm,
    ids: IdGenerator,
}

impl QuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(quiz: Vec<Question>) -> Self {
        Self {
            quiz,
            ..Self::default()
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.quiz
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.quiz.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.quiz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiz.is_empty()
    }

    /// Validates and appends a question, then clears the authoring form.
    pub fn add_question(
        &mut self,
        question: &str,
        choices: [String; CHOICES_PER_QUESTION],
        correct_index: usize,
    ) -> Result<&Question, ValidationError> {
        let valid = QuestionForm::new(question, choices, correct_index).validate()?;
        let id = self.fresh_id();
        debug!("[Store] Adding question {} ({:?})", id, valid.question);
        self.quiz.push(Question {
            id,
            question: valid.question,
            choices: valid.choices,
            correct_index: Some(valid.correct_index),
        });
        self.form = QuestionForm::default();
        Ok(&self.quiz[self.quiz.len() - 1])
    }

    /// Submits the authoring form. On failure the form keeps its contents.
    pub fn submit_form(&mut self) -> Result<&Question, ValidationError> {
        let QuestionForm {
            question,
            choices,
            correct_index,
        } = self.form.clone();
        self.add_question(&question, choices, correct_index)
    }

    pub fn reset_form(&mut self) {
        self.form = QuestionForm::default();
    }

    /// Removes the question with `id` if `confirm` agrees. Returns whether a
    /// question was removed.
    pub fn delete_question(&mut self, id: &str, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm(DELETE_PROMPT) {
            debug!("[Store] Delete of {} declined", id);
            return false;
        }
        let before = self.quiz.len();
        self.quiz.retain(|q| q.id != id);
        let removed = self.quiz.len() != before;
        if removed {
            info!("[Store] Deleted question {}", id);
        }
        removed
    }

    /// Moves the question into the authoring form and out of the quiz. It
    /// comes back only if the form is submitted again.
    pub fn edit_question(&mut self, id: &str) -> bool {
        let Some(position) = self.quiz.iter().position(|q| q.id == id) else {
            debug!("[Store] Nothing to edit for {}", id);
            return false;
        };
        let question = self.quiz.remove(position);
        self.form = QuestionForm::from_question(&question);
        info!("[Store] Editing question {}", id);
        true
    }

    /// Drops every question and every answer if `confirm` agrees.
    pub fn clear_quiz(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm(CLEAR_PROMPT) {
            return false;
        }
        info!("[Store] Clearing {} questions", self.quiz.len());
        self.quiz.clear();
        self.answers.clear();
        true
    }

    pub(crate) fn replace_questions(&mut self, quiz: Vec<Question>) {
        self.quiz = quiz;
    }

    /// An id that no current question uses.
    pub(crate) fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.question(&id).is_none() {
                return id;
            }
        }
    }

    pub(crate) fn id_generator(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }
}
