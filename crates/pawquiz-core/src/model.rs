//! Core data model types for pawquiz.
//!
//! A `QuestionSet` is an ordered, immutable sequence of `Question`s, each
//! carrying an ordered list of `QuizOption`s. These are supplied by
//! configuration and never change for the lifetime of a session.

use serde::{Deserialize, Serialize};

/// An answerable choice within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Identifier, unique within the parent question.
    pub id: String,
    /// Display label.
    pub text: String,
    /// Whether this is the correct answer. Exactly one option per question
    /// should set this; the engine does not enforce it.
    #[serde(default)]
    pub correct: bool,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, correct: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            correct,
        }
    }
}

/// A single quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique across the question sequence.
    pub id: String,
    /// The question text shown to the user.
    pub prompt: String,
    /// Ordered, non-empty list of choices.
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// Look up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Whether `option_id` names an option flagged correct.
    ///
    /// Unknown ids and questions with no correct option both yield `false`.
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.option(option_id).is_some_and(|o| o.correct)
    }

    /// Number of options flagged correct.
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }
}

/// A loadable quiz: header text plus the fixed question sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Identifier for this quiz.
    pub id: String,
    /// Heading shown above every question.
    #[serde(default = "default_title")]
    pub title: String,
    /// Hint shown under the heading.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// The questions, in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

pub(crate) fn default_title() -> String {
    "Test Your Knowledge".to_string()
}

pub(crate) fn default_subtitle() -> String {
    "Answer all questions to see your results".to_string()
}

impl QuestionSet {
    /// Build a set with the default heading text.
    pub fn new(id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: default_title(),
            subtitle: default_subtitle(),
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
