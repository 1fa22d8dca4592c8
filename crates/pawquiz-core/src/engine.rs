//! The quiz state machine.
//!
//! A session is either `InProgress` (a current question index plus the
//! answers given so far) or `Finished` (the final score). The engine owns
//! this state exclusively; the presentation shell only reads it and feeds
//! transitions in.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Question;
use crate::scoring::round_percent;

/// Question id → selected option id.
pub type Selections = BTreeMap<String, String>;

/// Final tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Percentage of questions answered correctly, rounded half-up.
    pub score: u32,
    /// Questions answered correctly.
    pub correct: usize,
    /// Questions answered at least once.
    pub answered: usize,
    /// Questions in the quiz.
    pub total: usize,
}

/// Session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    InProgress {
        current_index: usize,
        selections: Selections,
    },
    Finished(Completion),
}

impl QuizState {
    fn fresh() -> Self {
        QuizState::InProgress {
            current_index: 0,
            selections: Selections::new(),
        }
    }
}

/// Outcome of a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The current index changed to the given value.
    Moved(usize),
    /// Nothing changed (clamped at the first question, or already finished).
    Stayed,
    /// The session finished with this result.
    Completed(Completion),
}

/// Receives notifications about session transitions.
pub trait SessionObserver {
    fn on_select(&self, session_id: Uuid, question_id: &str, option_id: &str);
    fn on_move(&self, session_id: Uuid, index: usize, total: usize);
    fn on_complete(&self, session_id: Uuid, completion: &Completion);
    fn on_restart(&self, session_id: Uuid);
}

/// No-op session observer.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_select(&self, _: Uuid, _: &str, _: &str) {}
    fn on_move(&self, _: Uuid, _: usize, _: usize) {}
    fn on_complete(&self, _: Uuid, _: &Completion) {}
    fn on_restart(&self, _: Uuid) {}
}

/// Tally a set of selections against the questions.
///
/// A question counts as correct only when its selection names an option
/// flagged correct. Unanswered questions and questions without a correct
/// option count as wrong.
pub fn score_selections(questions: &[Question], selections: &Selections) -> Completion {
    let correct = questions
        .iter()
        .filter(|q| {
            selections
                .get(&q.id)
                .is_some_and(|option_id| q.is_correct(option_id))
        })
        .count();

    Completion {
        score: round_percent(correct, questions.len()),
        correct,
        answered: selections.len(),
        total: questions.len(),
    }
}

/// The quiz engine.
pub struct QuizEngine {
    questions: Vec<Question>,
    state: QuizState,
    session_id: Uuid,
    observer: Box<dyn SessionObserver>,
}

impl QuizEngine {
    /// Start a fresh session at the first question.
    ///
    /// The questions are expected to have passed
    /// [`ensure_playable`](crate::parser::ensure_playable).
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            state: QuizState::fresh(),
            session_id: Uuid::new_v4(),
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished(_))
    }

    /// The final tally, once finished.
    pub fn completion(&self) -> Option<&Completion> {
        match &self.state {
            QuizState::Finished(completion) => Some(completion),
            QuizState::InProgress { .. } => None,
        }
    }

    /// Index of the question being shown; `None` once finished.
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            QuizState::InProgress { current_index, .. } => Some(*current_index),
            QuizState::Finished(_) => None,
        }
    }

    /// The question being shown; `None` once finished or for an empty quiz.
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    /// Whether the current question is the last one (Next becomes Finish).
    pub fn is_last(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 >= self.questions.len())
    }

    /// The answers given so far; `None` once finished.
    pub fn selections(&self) -> Option<&Selections> {
        match &self.state {
            QuizState::InProgress { selections, .. } => Some(selections),
            QuizState::Finished(_) => None,
        }
    }

    /// The option chosen for a question, if any.
    pub fn selected_option(&self, question_id: &str) -> Option<&str> {
        self.selections()
            .and_then(|s| s.get(question_id))
            .map(String::as_str)
    }

    /// Number of distinct questions answered at least once.
    pub fn answered_count(&self) -> usize {
        match &self.state {
            QuizState::InProgress { selections, .. } => selections.len(),
            QuizState::Finished(completion) => completion.answered,
        }
    }

    /// Percentage of questions answered, independent of position.
    pub fn progress(&self) -> u32 {
        round_percent(self.answered_count(), self.questions.len())
    }

    /// Percentage of questions answered correctly.
    ///
    /// Reflects the current selections while in progress and the final
    /// score once finished.
    pub fn score(&self) -> u32 {
        match &self.state {
            QuizState::InProgress { selections, .. } => {
                score_selections(&self.questions, selections).score
            }
            QuizState::Finished(completion) => completion.score,
        }
    }

    /// Record (or overwrite) the answer to a question.
    ///
    /// Ids are not validated; the caller only offers options that exist.
    pub fn select_option(&mut self, question_id: &str, option_id: &str) {
        let QuizState::InProgress { selections, .. } = &mut self.state else {
            tracing::debug!(question_id, option_id, "selection ignored, session finished");
            return;
        };

        if selections.get(question_id).map(String::as_str) == Some(option_id) {
            return;
        }
        selections.insert(question_id.to_string(), option_id.to_string());
        self.observer
            .on_select(self.session_id, question_id, option_id);
    }

    /// Advance to the next question, or finish when on the last one.
    ///
    /// Finishing does not require the current question to be answered.
    pub fn go_next(&mut self) -> Step {
        let total = self.questions.len();
        let QuizState::InProgress {
            current_index,
            selections,
        } = &mut self.state
        else {
            return Step::Stayed;
        };

        if *current_index + 1 < total {
            *current_index += 1;
            let index = *current_index;
            self.observer.on_move(self.session_id, index, total);
            return Step::Moved(index);
        }

        let completion = score_selections(&self.questions, selections);
        self.state = QuizState::Finished(completion);
        tracing::debug!(
            session = %self.session_id,
            score = completion.score,
            correct = completion.correct,
            total = completion.total,
            "quiz completed"
        );
        self.observer.on_complete(self.session_id, &completion);
        Step::Completed(completion)
    }

    /// Go back one question, clamped at the first.
    pub fn go_previous(&mut self) -> Step {
        let total = self.questions.len();
        match &mut self.state {
            QuizState::InProgress { current_index, .. } if *current_index > 0 => {
                *current_index -= 1;
                let index = *current_index;
                self.observer.on_move(self.session_id, index, total);
                Step::Moved(index)
            }
            _ => Step::Stayed,
        }
    }

    /// Discard everything and start a new session at the first question.
    pub fn restart(&mut self) {
        self.state = QuizState::fresh();
        self.session_id = Uuid::new_v4();
        tracing::debug!(session = %self.session_id, "quiz restarted");
        self.observer.on_restart(self.session_id);
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("questions", &self.questions.len())
            .field("state", &self.state)
            .field("session_id", &self.session_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::model::QuizOption;

    fn three_questions() -> Vec<Question> {
        (1..=3)
            .map(|n| {
                Question::new(
                    format!("q{n}"),
                    format!("Question {n}"),
                    vec![
                        QuizOption::new("a", "Wrong", false),
                        QuizOption::new("b", "Right", true),
                        QuizOption::new("c", "Also wrong", false),
                    ],
                )
            })
            .collect()
    }

    fn finish(engine: &mut QuizEngine) -> Completion {
        loop {
            if let Step::Completed(c) = engine.go_next() {
                return c;
            }
        }
    }

    #[test]
    fn starts_fresh_at_first_question() {
        let engine = QuizEngine::new(three_questions());
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(engine.current_question().unwrap().id, "q1");
        assert_eq!(engine.answered_count(), 0);
        assert_eq!(engine.progress(), 0);
        assert!(!engine.is_finished());
        assert!(!engine.is_last());
    }

    #[test]
    fn index_stays_in_bounds_for_every_navigation_sequence() {
        for len in 0..=10u32 {
            for mask in 0u32..(1 << len) {
                let mut engine = QuizEngine::new(three_questions());
                for bit in 0..len {
                    if engine.is_finished() {
                        break;
                    }
                    if mask & (1 << bit) != 0 {
                        engine.go_next();
                    } else {
                        engine.go_previous();
                    }
                    if let Some(i) = engine.current_index() {
                        assert!(i < 3, "index {i} out of range after mask {mask:b}");
                    }
                }
            }
        }
    }

    #[test]
    fn previous_at_first_question_is_noop() {
        let mut engine = QuizEngine::new(three_questions());
        engine.select_option("q1", "a");
        let before = engine.state().clone();
        assert_eq!(engine.go_previous(), Step::Stayed);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn next_and_previous_move_one_step() {
        let mut engine = QuizEngine::new(three_questions());
        assert_eq!(engine.go_next(), Step::Moved(1));
        assert_eq!(engine.go_next(), Step::Moved(2));
        assert!(engine.is_last());
        assert_eq!(engine.go_previous(), Step::Moved(1));
        assert!(!engine.is_last());
    }

    #[test]
    fn next_on_last_question_finishes_irreversibly() {
        let mut engine = QuizEngine::new(three_questions());
        engine.go_next();
        engine.go_next();
        let step = engine.go_next();
        assert!(matches!(step, Step::Completed(_)));
        assert!(engine.is_finished());
        assert_eq!(engine.current_index(), None);

        assert_eq!(engine.go_next(), Step::Stayed);
        assert_eq!(engine.go_previous(), Step::Stayed);
        engine.select_option("q1", "b");
        assert!(engine.is_finished());
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn select_is_idempotent() {
        let mut engine = QuizEngine::new(three_questions());
        engine.select_option("q1", "b");
        let once = engine.selections().cloned();
        engine.select_option("q1", "b");
        assert_eq!(engine.selections().cloned(), once);
        assert_eq!(engine.answered_count(), 1);
    }

    #[test]
    fn select_overwrites_without_growing() {
        let mut engine = QuizEngine::new(three_questions());
        engine.select_option("q1", "a");
        engine.select_option("q1", "c");
        assert_eq!(engine.answered_count(), 1);
        assert_eq!(engine.selected_option("q1"), Some("c"));
    }

    #[test]
    fn progress_counts_answers_not_position() {
        let mut engine = QuizEngine::new(three_questions());
        engine.go_next();
        engine.go_next();
        assert_eq!(engine.progress(), 0);

        engine.select_option("q3", "a");
        assert_eq!(engine.progress(), 33);
        engine.go_previous();
        engine.go_previous();
        assert_eq!(engine.progress(), 33);
        engine.select_option("q1", "a");
        assert_eq!(engine.progress(), 67);
    }

    #[test]
    fn score_counts_exact_correct_matches() {
        let mut engine = QuizEngine::new(three_questions());
        engine.select_option("q1", "b");
        engine.select_option("q2", "missing");
        assert_eq!(engine.score(), 33);
    }

    #[test]
    fn question_without_correct_option_scores_zero() {
        let mut questions = three_questions();
        for option in &mut questions[0].options {
            option.correct = false;
        }
        let mut engine = QuizEngine::new(questions);
        engine.select_option("q1", "b");
        engine.select_option("q2", "b");
        engine.select_option("q3", "b");
        assert_eq!(finish(&mut engine).correct, 2);
        assert_eq!(engine.score(), 67);
    }

    #[test]
    fn scenario_partial_answers() {
        let mut engine = QuizEngine::new(three_questions());
        engine.select_option("q1", "b");
        engine.go_next();
        engine.select_option("q2", "a");
        engine.go_next();
        let completion = finish(&mut engine);
        assert_eq!(
            completion,
            Completion {
                score: 33,
                correct: 1,
                answered: 2,
                total: 3
            }
        );
    }

    #[test]
    fn scenario_all_correct() {
        let mut engine = QuizEngine::new(three_questions());
        for id in ["q1", "q2", "q3"] {
            engine.select_option(id, "b");
        }
        assert_eq!(engine.progress(), 100);
        assert_eq!(finish(&mut engine).score, 100);
        assert_eq!(engine.score(), 100);
        assert_eq!(engine.progress(), 100);
    }

    #[test]
    fn scenario_reanswer_same_question() {
        let mut engine = QuizEngine::new(three_questions());
        engine.select_option("q1", "a");
        engine.select_option("q1", "b");
        assert_eq!(engine.selections().unwrap().len(), 1);
        assert_eq!(engine.progress(), 33);
    }

    #[test]
    fn scenario_empty_quiz() {
        let mut engine = QuizEngine::new(Vec::new());
        assert_eq!(engine.progress(), 0);
        assert_eq!(engine.score(), 0);
        assert!(engine.current_question().is_none());
        assert!(engine.is_last());
        let step = engine.go_next();
        assert_eq!(
            step,
            Step::Completed(Completion {
                score: 0,
                correct: 0,
                answered: 0,
                total: 0
            })
        );
    }

    #[test]
    fn restart_resets_everything() {
        let mut engine = QuizEngine::new(three_questions());
        engine.select_option("q1", "b");
        engine.go_next();
        let first_session = engine.session_id();

        engine.restart();
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(engine.answered_count(), 0);
        assert_ne!(engine.session_id(), first_session);

        finish(&mut engine);
        engine.restart();
        assert!(!engine.is_finished());
        assert_eq!(engine.current_index(), Some(0));
        assert!(engine.selections().unwrap().is_empty());
    }

    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl SessionObserver for Recorder {
        fn on_select(&self, _: Uuid, question_id: &str, option_id: &str) {
            self.events
                .borrow_mut()
                .push(format!("select {question_id}={option_id}"));
        }
        fn on_move(&self, _: Uuid, index: usize, total: usize) {
            self.events.borrow_mut().push(format!("move {index}/{total}"));
        }
        fn on_complete(&self, _: Uuid, completion: &Completion) {
            self.events
                .borrow_mut()
                .push(format!("complete {}", completion.score));
        }
        fn on_restart(&self, _: Uuid) {
            self.events.borrow_mut().push("restart".into());
        }
    }

    #[test]
    fn observer_sees_each_transition_once() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder {
            events: Rc::clone(&events),
        };
        let mut engine = QuizEngine::new(three_questions()).with_observer(Box::new(recorder));

        engine.select_option("q1", "b");
        engine.select_option("q1", "b");
        engine.go_previous();
        engine.go_next();
        engine.go_next();
        engine.go_next();
        engine.restart();

        assert_eq!(
            *events.borrow(),
            vec![
                "select q1=b",
                "move 1/3",
                "move 2/3",
                "complete 33",
                "restart"
            ]
        );
    }
}
