//! Core quiz engine: question generation, distractors and answer checking.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `shuffle`   | Fisher-Yates shuffle and uniform pick over any `rand::Rng` |
//! | `choices`   | Prompt/answer field lookup and same-category distractor building |
//! | `generator` | `QuizEngine` state machine and the pure `check_answer()` |
//! | `session`   | Quiz-page controller: categories, mode, one answer per question |

pub mod choices;
pub mod generator;
pub mod session;
pub mod shuffle;

pub use choices::{answer_field, build_choices, prompt_field, DEFAULT_MAX_CHOICES};
pub use generator::{check_answer, QuizEngine};
pub use session::QuizSession;
