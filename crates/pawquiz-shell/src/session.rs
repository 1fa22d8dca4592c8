//! Line-oriented session loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pawquiz_core::engine::Completion;

use crate::input::parse_input;
use crate::shell::{Outcome, Shell};

/// Summary of one finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub quiz_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub score: u32,
    pub total: usize,
    pub correct: usize,
    pub answered: usize,
}

impl SessionSummary {
    fn new(shell: &Shell, session_id: Uuid, completion: &Completion) -> Self {
        Self {
            session_id,
            quiz_id: shell.quiz_id().to_string(),
            started_at: shell.started_at(),
            finished_at: Utc::now(),
            score: completion.score,
            total: completion.total,
            correct: completion.correct,
            answered: completion.answered,
        }
    }
}

/// Loop behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Stop after the first completion.
    pub once: bool,
    /// Print one JSON summary line per completion instead of screens.
    pub json: bool,
}

/// Read inputs line by line until quit, end of input, or (with `once`) the
/// first completion. Returns a summary for every completed session.
pub fn run_session<R: BufRead, W: Write>(
    shell: &mut Shell,
    input: R,
    out: &mut W,
    options: SessionOptions,
) -> Result<Vec<SessionSummary>> {
    let mut summaries = Vec::new();

    if !options.json {
        write!(out, "{}", shell.render())?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        let Some(parsed) = parse_input(&line) else {
            if !options.json {
                writeln!(out, "\nUnrecognised input {line:?}. Type ? for help.")?;
                out.flush()?;
            }
            continue;
        };

        let session_id = shell.engine().map(|e| e.session_id());
        let outcome = shell.handle(parsed);
        tracing::trace!(?parsed, ?outcome, "input handled");

        match outcome {
            Outcome::Quit => break,
            Outcome::Completed(completion) => {
                let summary =
                    SessionSummary::new(shell, session_id.unwrap_or_default(), &completion);
                if options.json {
                    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
                } else {
                    write!(out, "\n{}", shell.render())?;
                }
                out.flush()?;
                summaries.push(summary);
                if options.once {
                    break;
                }
            }
            Outcome::Continue | Outcome::Restarted => {
                if !options.json {
                    write!(out, "\n{}", shell.render())?;
                    out.flush()?;
                }
            }
        }
    }

    Ok(summaries)
}
