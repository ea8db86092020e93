//! Quiz session engine.
//!
//! Filters the kana catalog by the active configuration, asks questions with
//! multiple-choice distractors, scores answers and schedules the move to the
//! next question.

mod config;
mod engine;
mod options;
mod pool;
mod state;

pub use config::{InputMode, QuizConfiguration, QuizMode};
pub use engine::{EngineTiming, QuizEngine};
pub use options::{correct_answer, generate_options, MAX_OPTIONS};
pub use pool::{compute_available_pool, plain_hiragana, select_question};
pub use state::{Feedback, Phase, QuizState};
