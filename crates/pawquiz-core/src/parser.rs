//! TOML question set parser.
//!
//! Loads question sets from TOML files and directories, and validates them
//! before they reach the engine.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::QuizDataError;
use crate::model::{default_subtitle, default_title, Question, QuestionSet, QuizOption};

/// Intermediate TOML structure for parsing question set files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_subtitle")]
    subtitle: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    prompt: String,
    #[serde(default)]
    options: Vec<TomlOption>,
}

#[derive(Debug, Deserialize)]
struct TomlOption {
    id: String,
    text: String,
    #[serde(default)]
    correct: bool,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet`.
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            id: q.id,
            prompt: q.prompt,
            options: q
                .options
                .into_iter()
                .map(|o| QuizOption {
                    id: o.id,
                    text: o.text,
                    correct: o.correct,
                })
                .collect(),
        })
        .collect();

    Ok(QuestionSet {
        id: parsed.quiz.id,
        title: parsed.quiz.title,
        subtitle: parsed.quiz.subtitle,
        questions,
    })
}

/// Recursively load all `.toml` question set files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// Check a question set for data-quality problems, in question order.
pub fn validate_question_set(set: &QuestionSet) -> Vec<QuizDataError> {
    let mut problems = Vec::new();
    let mut seen_ids = HashSet::new();

    for question in &set.questions {
        if !seen_ids.insert(question.id.as_str()) {
            problems.push(QuizDataError::DuplicateQuestionId(question.id.clone()));
        }

        if question.prompt.trim().is_empty() {
            problems.push(QuizDataError::EmptyPrompt(question.id.clone()));
        }

        if question.options.is_empty() {
            problems.push(QuizDataError::NoOptions(question.id.clone()));
            continue;
        }

        let mut seen_options = HashSet::new();
        for option in &question.options {
            if !seen_options.insert(option.id.as_str()) {
                problems.push(QuizDataError::DuplicateOptionId {
                    question_id: question.id.clone(),
                    option_id: option.id.clone(),
                });
            }
        }

        match question.correct_count() {
            0 => problems.push(QuizDataError::NoCorrectOption(question.id.clone())),
            1 => {}
            count => problems.push(QuizDataError::MultipleCorrectOptions {
                question_id: question.id.clone(),
                count,
            }),
        }
    }

    problems
}

/// Reject a set with fatal problems; non-fatal ones are logged.
pub fn ensure_playable(set: &QuestionSet) -> Result<(), QuizDataError> {
    for problem in validate_question_set(set) {
        if problem.is_fatal() {
            return Err(problem);
        }
        tracing::warn!(quiz = %set.id, "{problem}");
    }
    Ok(())
}
