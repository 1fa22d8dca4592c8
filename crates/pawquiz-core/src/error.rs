//! Question data error types.
//!
//! These describe data-quality problems found when a question set is loaded.
//! The engine itself never fails; these are caught at the load boundary so
//! that the engine only ever sees playable data.

use thiserror::Error;

/// A data-quality problem in a question set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizDataError {
    /// Two questions share an id, which would conflate their selections.
    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(String),

    /// A question offers nothing to choose.
    #[error("question {0} has no options")]
    NoOptions(String),

    /// Two options in the same question share an id.
    #[error("question {question_id} has duplicate option id: {option_id}")]
    DuplicateOptionId {
        question_id: String,
        option_id: String,
    },

    /// No option is flagged correct; the question always scores as wrong.
    #[error("question {0} has no option flagged correct")]
    NoCorrectOption(String),

    /// More than one option is flagged correct.
    #[error("question {question_id} has {count} options flagged correct")]
    MultipleCorrectOptions { question_id: String, count: usize },

    /// The prompt is blank.
    #[error("question {0} has an empty prompt")]
    EmptyPrompt(String),
}

impl QuizDataError {
    /// Returns `true` if the set must not be played with this problem.
    ///
    /// Non-fatal problems still produce a well-defined score.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            QuizDataError::DuplicateQuestionId(_)
                | QuizDataError::NoOptions(_)
                | QuizDataError::DuplicateOptionId { .. }
        )
    }

    /// The id of the question the problem was found in.
    pub fn question_id(&self) -> &str {
        match self {
            QuizDataError::DuplicateQuestionId(id)
            | QuizDataError::NoOptions(id)
            | QuizDataError::NoCorrectOption(id)
            | QuizDataError::EmptyPrompt(id) => id,
            QuizDataError::DuplicateOptionId { question_id, .. }
            | QuizDataError::MultipleCorrectOptions { question_id, .. } => question_id,
        }
    }
}
