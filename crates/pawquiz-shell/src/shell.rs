//! The presentation shell.
//!
//! Routes user input into the quiz engine and renders whatever screen the
//! engine's state calls for. The shell keeps only presentation state (the
//! header text, view options and a one-shot notice); everything about the
//! quiz itself is read from the engine.

use chrono::{DateTime, Utc};

use pawquiz_core::engine::{Completion, QuizEngine, SessionObserver, Step};
use pawquiz_core::model::QuestionSet;

use crate::input::{Action, Input, KeyListener};
use crate::render::{self, ResultView, ViewOptions};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The question set has no questions; the quiz never starts.
    Empty,
    Question,
    Result,
}

/// What handling one input led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The quiz just finished.
    Completed(Completion),
    /// A new session started from the result screen.
    Restarted,
    Quit,
}

/// Presentation shell around a single quiz engine.
pub struct Shell {
    quiz_id: String,
    title: String,
    subtitle: String,
    engine: Option<QuizEngine>,
    keys: KeyListener,
    view: ViewOptions,
    started_at: DateTime<Utc>,
    notice: Option<String>,
}

impl Shell {
    /// Build a shell for a question set.
    ///
    /// An empty set gets no engine at all and stays on the empty screen.
    pub fn new(set: QuestionSet, view: ViewOptions) -> Self {
        let engine = if set.is_empty() {
            tracing::info!(quiz = %set.id, "question set is empty");
            None
        } else {
            Some(QuizEngine::new(set.questions))
        };

        Self {
            quiz_id: set.id,
            title: set.title,
            subtitle: set.subtitle,
            engine,
            keys: KeyListener::default(),
            view,
            started_at: Utc::now(),
            notice: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.engine = self.engine.map(|e| e.with_observer(observer));
        self
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn engine(&self) -> Option<&QuizEngine> {
        self.engine.as_ref()
    }

    /// When the current session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The message left by the last input, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn screen(&self) -> Screen {
        match &self.engine {
            None => Screen::Empty,
            Some(engine) if engine.is_finished() => Screen::Result,
            Some(_) => Screen::Question,
        }
    }

    /// Apply one user input.
    pub fn handle(&mut self, input: Input) -> Outcome {
        self.notice = None;

        match input {
            Input::Quit => return Outcome::Quit,
            Input::Help => {
                self.notice = Some(render::HELP.to_string());
                return Outcome::Continue;
            }
            _ => {}
        }

        let Some(engine) = self.engine.as_mut() else {
            self.notice = Some(render::EMPTY_MESSAGE.to_string());
            return Outcome::Continue;
        };

        match input {
            Input::Choose(number) => {
                let Some(question) = engine.current_question() else {
                    self.notice = Some("The quiz is over. Press r to start again.".into());
                    return Outcome::Continue;
                };
                match number
                    .checked_sub(1)
                    .and_then(|i| question.options.get(i))
                {
                    Some(option) => {
                        let (question_id, option_id) = (question.id.clone(), option.id.clone());
                        engine.select_option(&question_id, &option_id);
                    }
                    None => {
                        self.notice = Some(format!(
                            "There is no option {number}; choose 1-{}.",
                            question.options.len()
                        ));
                    }
                }
                Outcome::Continue
            }
            Input::Next => step_outcome(engine.go_next()),
            Input::Previous => step_outcome(engine.go_previous()),
            Input::Key(key) => match self.keys.on_key(key) {
                Some(Action::Next) => step_outcome(engine.go_next()),
                Some(Action::Previous) => step_outcome(engine.go_previous()),
                None => Outcome::Continue,
            },
            Input::Restart => {
                if engine.is_finished() {
                    engine.restart();
                    self.started_at = Utc::now();
                    Outcome::Restarted
                } else {
                    self.notice =
                        Some("Finish the quiz first; restart is on the results screen.".into());
                    Outcome::Continue
                }
            }
            Input::Quit | Input::Help => Outcome::Continue,
        }
    }

    /// Render the current screen, followed by any notice.
    pub fn render(&self) -> String {
        let mut out = match (&self.engine, self.screen()) {
            (Some(engine), Screen::Question) => {
                render::render_question(&self.title, &self.subtitle, engine, &self.view)
            }
            (Some(engine), Screen::Result) => match engine.completion() {
                Some(completion) => ResultView::from(completion).render(),
                None => render::render_empty(),
            },
            _ => render::render_empty(),
        };

        if let Some(notice) = &self.notice {
            out.push('\n');
            out.push_str(notice);
            out.push('\n');
        }
        out
    }
}

fn step_outcome(step: Step) -> Outcome {
    match step {
        Step::Completed(completion) => Outcome::Completed(completion),
        Step::Moved(_) | Step::Stayed => Outcome::Continue,
    }
}
