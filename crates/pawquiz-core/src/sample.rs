//! Built-in sample quiz.

use std::path::Path;

use anyhow::Result;

use crate::model::QuestionSet;
use crate::parser::parse_question_set_str;

/// TOML source of the sample quiz, also written out by `pawquiz init`.
pub const SAMPLE_QUIZ: &str = r#"[quiz]
id = "sample"
title = "Test Your Knowledge"
subtitle = "Answer all questions to see your results"

[[questions]]
id = "q1"
prompt = "1. What sound does a cat make?"
options = [
    { id = "a", text = "Bhau-Bhau" },
    { id = "b", text = "Meow-Meow", correct = true },
    { id = "c", text = "Oink-Oink" },
]

[[questions]]
id = "q2"
prompt = "2. Which of these is a mammal?"
options = [
    { id = "a", text = "Crocodile" },
    { id = "b", text = "Dolphin", correct = true },
    { id = "c", text = "Shark" },
]

[[questions]]
id = "q3"
prompt = "3. Which planet is known as the red planet?"
options = [
    { id = "a", text = "Venus" },
    { id = "b", text = "Mars", correct = true },
    { id = "c", text = "Jupiter" },
]
"#;

/// Parse the built-in sample quiz.
pub fn sample_question_set() -> Result<QuestionSet> {
    parse_question_set_str(SAMPLE_QUIZ, Path::new("<builtin sample>"))
}
