//! Text rendering of the quiz screens.
//!
//! Every function here is a pure function of engine state and view options.

use std::fmt::Write as _;

use pawquiz_core::engine::{Completion, QuizEngine};

use crate::config::PawquizConfig;
use crate::mascot::beckon;

/// Shown instead of the quiz when the question set is empty.
pub const EMPTY_MESSAGE: &str = "No questions available.";

pub const HELP: &str = "\
Commands:
  1, 2, 3 ...        choose an option
  n, next, finish    next question (or finish on the last one)
  p, prev            previous question
  right / left       arrow keys (ESC[C / ESC[D also work)
  r, restart         start again from the results screen
  q, quit            leave";

/// Presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub progress_bar_width: usize,
    pub show_mascot: bool,
    pub reduced_motion: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::from(&PawquizConfig::default())
    }
}

impl From<&PawquizConfig> for ViewOptions {
    fn from(config: &PawquizConfig) -> Self {
        Self {
            progress_bar_width: config.progress_bar_width,
            show_mascot: config.show_mascot,
            reduced_motion: config.reduced_motion,
        }
    }
}

/// Draw `[#####---------------] 25%`.
pub fn progress_bar(percent: u32, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(width - filled)
    )
}

/// Render the current question with progress, options and navigation.
///
/// Falls back to the empty-state message when there is no current question.
pub fn render_question(
    title: &str,
    subtitle: &str,
    engine: &QuizEngine,
    options: &ViewOptions,
) -> String {
    let (Some(question), Some(index)) = (engine.current_question(), engine.current_index()) else {
        return render_empty();
    };

    let progress = engine.progress();
    let selected = engine.selected_option(&question.id);
    let mut out = String::new();

    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{subtitle}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", progress_bar(progress, options.progress_bar_width));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", question.prompt);

    for (n, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(option.id.as_str()) {
            "(*)"
        } else {
            "( )"
        };
        let _ = writeln!(out, "  {marker} {}. {}", n + 1, option.text);
    }
    let _ = writeln!(out);

    let previous = if index == 0 {
        "[p] Previous (disabled)"
    } else {
        "[p] Previous"
    };
    let next = if engine.is_last() {
        "[n] Finish"
    } else {
        "[n] Next"
    };
    let _ = writeln!(
        out,
        "{previous}   {}/{} answered   {next}",
        engine.answered_count(),
        engine.total()
    );

    if options.show_mascot {
        let _ = writeln!(out, "{}", beckon(progress, options.reduced_motion).cue());
    }

    out
}

/// Render the empty-state screen.
pub fn render_empty() -> String {
    format!("{EMPTY_MESSAGE}\n")
}

/// The final score screen. Holds nothing but what it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView {
    pub score: u32,
    pub correct: usize,
    pub total: usize,
}

impl From<&Completion> for ResultView {
    fn from(completion: &Completion) -> Self {
        Self {
            score: completion.score,
            correct: completion.correct,
            total: completion.total,
        }
    }
}

impl ResultView {
    pub fn render(&self) -> String {
        format!(
            "Keep Learning!\n\
             Your Final score is\n\
             \n\
             {}%\n\
             {} of {} correct\n\
             \n\
             [r] Start Again   [q] Quit\n",
            self.score, self.correct, self.total
        )
    }
}
