//! pawquiz-core — Quiz data model, question-set loading, and the quiz engine.
//!
//! This crate defines the question data model, the TOML loader and its
//! validation pass, the percentage scoring helpers, and the `QuizEngine`
//! state machine that the presentation shell drives.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod sample;
pub mod scoring;
