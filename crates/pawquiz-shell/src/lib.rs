//! pawquiz-shell — Presentation shell for the quiz engine.
//!
//! Turns typed input into engine transitions, renders the question, empty
//! and result screens, and loads the user's configuration.

pub mod config;
pub mod input;
pub mod mascot;
pub mod render;
pub mod session;
pub mod shell;

pub use config::{load_config_from, PawquizConfig};
pub use render::ViewOptions;
pub use session::{run_session, SessionOptions, SessionSummary};
pub use shell::{Outcome, Screen, Shell};
