use thiserror::Error;

/// Rejected authoring input. The store is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter the question text.")]
    MissingQuestion,
    #[error("Please fill in all 4 choices.")]
    MissingChoice,
    #[error("Select the correct answer.")]
    CorrectIndexOutOfRange(usize),
}

/// Rejected import payload. The current quiz is not replaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Imported JSON must be an array of questions.")]
    NotAnArray,
    #[error("Each question must have text and at least 2 choices.")]
    MalformedQuestion(usize),
}

/// A calculation that has no numeric result. The message is the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Error: Cannot divide by zero!")]
    DivideByZero,
    #[error("Invalid operator!")]
    InvalidOperator(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("cannot encode quiz: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot access file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_users_see() {
        assert_eq!(
            ArithmeticError::DivideByZero.to_string(),
            "Error: Cannot divide by zero!"
        );
        assert_eq!(
            ArithmeticError::InvalidOperator("%".into()).to_string(),
            "Invalid operator!"
        );
        assert_eq!(
            ValidationError::CorrectIndexOutOfRange(7).to_string(),
            "Select the correct answer."
        );
        assert_eq!(
            ImportError::MalformedQuestion(3).to_string(),
            "Each question must have text and at least 2 choices."
        );
    }

    #[test]
    fn wrapped_errors_stay_transparent() {
        let err: Error = ImportError::NotAnArray.into();
        assert_eq!(err.to_string(), "Imported JSON must be an array of questions.");
    }
}
