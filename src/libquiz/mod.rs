//! QuickQuiz core: the quiz data model, the authoring store, grading,
//! JSON import/export and the SQLite-backed persistence entry.
//!
//! The four-function evaluator used by the `calculator` binary also lives
//! here in [`arithmetic`]; it shares nothing with the quiz modules.

pub mod arithmetic;
pub mod db;
pub mod error;
pub mod form;
pub mod grading;
pub mod question;
pub mod store;
pub mod transfer;

pub use error::{ArithmeticError, Error, ImportError, ValidationError};
pub use form::QuestionForm;
pub use grading::{AnswerRecord, Band, Score};
pub use question::Question;
pub use store::QuizStore;
