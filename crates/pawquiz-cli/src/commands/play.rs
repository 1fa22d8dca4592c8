//! The `pawquiz play` command.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;

use pawquiz_core::engine::{Completion, SessionObserver};
use pawquiz_core::model::QuestionSet;
use pawquiz_core::parser::{ensure_playable, parse_question_set};
use pawquiz_core::sample::sample_question_set;
use pawquiz_shell::{load_config_from, run_session, SessionOptions, Shell, ViewOptions};

/// Logs session transitions.
struct LogObserver {
    quiz_id: String,
}

impl SessionObserver for LogObserver {
    fn on_select(&self, session_id: Uuid, question_id: &str, option_id: &str) {
        tracing::debug!(quiz = %self.quiz_id, session = %session_id, question_id, option_id, "option selected");
    }

    fn on_move(&self, session_id: Uuid, index: usize, total: usize) {
        tracing::debug!(quiz = %self.quiz_id, session = %session_id, "question {}/{}", index + 1, total);
    }

    fn on_complete(&self, session_id: Uuid, completion: &Completion) {
        tracing::info!(
            quiz = %self.quiz_id,
            session = %session_id,
            score = completion.score,
            "finished with {}/{} correct",
            completion.correct,
            completion.total
        );
    }

    fn on_restart(&self, session_id: Uuid) {
        tracing::info!(quiz = %self.quiz_id, session = %session_id, "new session");
    }
}

pub fn execute(
    quiz_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    once: bool,
    json: bool,
    reduced_motion: bool,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if reduced_motion {
        config.reduced_motion = true;
    }

    let set = match quiz_path.or_else(|| config.quiz_file.clone()) {
        Some(path) => parse_question_set(&path)?,
        None => {
            tracing::info!("no quiz configured, playing the built-in sample");
            sample_question_set()?
        }
    };
    check_playable(&set)?;

    let observer = LogObserver {
        quiz_id: set.id.clone(),
    };
    let mut shell = Shell::new(set, ViewOptions::from(&config)).with_observer(Box::new(observer));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summaries = run_session(
        &mut shell,
        stdin.lock(),
        &mut out,
        SessionOptions { once, json },
    )?;

    tracing::debug!("{} quiz(zes) completed", summaries.len());
    Ok(())
}

fn check_playable(set: &QuestionSet) -> Result<()> {
    ensure_playable(set).with_context(|| format!("question set '{}' cannot be played", set.id))
}
