//! The quiz session engine.
//!
//! All configuration and state lives behind one mutex. Question generation
//! and the feedback timers run as tokio tasks; each mutation publishes a
//! fresh [`QuizState`] snapshot on a watch channel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::config::{InputMode, QuizConfiguration, QuizMode};
use super::options::generate_options;
use super::pool::{compute_available_pool, select_question};
use super::state::{Feedback, Phase, QuizState};

const CORRECT_MESSAGE: &str = "Correct!";

/// Delays used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineTiming {
    /// How long feedback stays visible after an answer.
    pub feedback_delay: Duration,
    /// Simulated latency of preparing a question.
    pub loading_delay: Duration,
}

impl Default for EngineTiming {
    fn default() -> Self {
        Self {
            feedback_delay: Duration::from_secs(2),
            loading_delay: Duration::from_millis(100),
        }
    }
}

struct Inner {
    config: QuizConfiguration,
    state: QuizState,
    rng: Box<dyn RngCore + Send>,
    /// Ticket of the most recent `generate_new_question` call.
    request: u64,
    /// Bumped by every answer. Feedback-clear timers compare against it.
    answer_epoch: u64,
    /// Bumped by every answer and every config write. Auto-advance compares against it.
    advance_epoch: u64,
    pending_advance: Option<JoinHandle<()>>,
}

impl Inner {
    fn refresh_question(&mut self) {
        let pool = compute_available_pool(&self.config);
        self.state.current_question = select_question(&pool, &mut self.rng);
        self.state.options = match self.state.current_question {
            Some(question) => generate_options(&question, &pool, self.config.mode, &mut self.rng),
            None => Vec::new(),
        };
    }

    fn regenerate_options(&mut self) {
        let Some(question) = self.state.current_question else {
            return;
        };
        let pool = compute_available_pool(&self.config);
        self.state.options = generate_options(&question, &pool, self.config.mode, &mut self.rng);
    }
}

struct Shared {
    inner: Mutex<Inner>,
    updates: watch::Sender<QuizState>,
    timing: EngineTiming,
}

/// Handle to a running quiz session. Clones share the same session.
#[derive(Clone)]
pub struct QuizEngine {
    shared: Arc<Shared>,
}

impl QuizEngine {
    /// Create an engine seeded from OS entropy.
    pub fn new(config: QuizConfiguration, timing: EngineTiming) -> Self {
        Self::with_rng(config, timing, StdRng::from_os_rng())
    }

    /// Create an engine with a caller-supplied random source.
    ///
    /// The first question is generated before this returns.
    pub fn with_rng<R>(config: QuizConfiguration, timing: EngineTiming, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        let mut inner = Inner {
            config,
            state: QuizState::default(),
            rng: Box::new(rng),
            request: 0,
            answer_epoch: 0,
            advance_epoch: 0,
            pending_advance: None,
        };
        inner.refresh_question();

        let (updates, _) = watch::channel(inner.state.clone());
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                updates,
                timing,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.shared.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &QuizState) {
        self.shared.updates.send_replace(state.clone());
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> QuizState {
        self.lock().state.clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock().state.phase()
    }

    pub fn config(&self) -> QuizConfiguration {
        self.lock().config
    }

    pub fn timing(&self) -> EngineTiming {
        self.shared.timing
    }

    /// Receive a new snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.shared.updates.subscribe()
    }

    /// Replace the whole configuration.
    pub fn set_config(&self, config: QuizConfiguration) {
        self.update_config(|current| *current = config);
    }

    /// Switch the quiz direction. Options of the current question follow.
    pub fn set_mode(&self, mode: QuizMode) {
        self.update_config(|config| config.mode = mode);
    }

    pub fn set_input_mode(&self, input_mode: InputMode) {
        self.update_config(|config| config.input_mode = input_mode);
    }

    pub fn set_include_hiragana(&self, include: bool) {
        self.update_config(|config| config.include_hiragana = include);
    }

    pub fn set_include_katakana(&self, include: bool) {
        self.update_config(|config| config.include_katakana = include);
    }

    pub fn set_include_dakuten(&self, include: bool) {
        self.update_config(|config| config.include_dakuten = include);
    }

    pub fn set_include_handakuten(&self, include: bool) {
        self.update_config(|config| config.include_handakuten = include);
    }

    /// Apply a config write. Does not pick a new question; callers follow up
    /// with [`generate_new_question`](Self::generate_new_question).
    fn update_config(&self, apply: impl FnOnce(&mut QuizConfiguration)) {
        let mut inner = self.lock();
        let previous_mode = inner.config.mode;
        apply(&mut inner.config);

        // A pending auto-advance would overwrite whatever the caller generates next.
        inner.advance_epoch += 1;
        inner.pending_advance = None;

        if inner.config.mode != previous_mode {
            inner.regenerate_options();
        }
        debug!("configuration changed: {:?}", inner.config);
        self.publish(&inner.state);
    }

    /// Re-derive the options of the current question from the current config.
    pub fn regenerate_options(&self) {
        let mut inner = self.lock();
        inner.regenerate_options();
        self.publish(&inner.state);
    }

    /// Prepare a new question from the configuration current at commit time.
    ///
    /// Returns `false` if a later call superseded this one; its result is
    /// discarded and the later call commits instead. A pending auto-advance
    /// from an earlier correct answer is dropped so it cannot replace the
    /// question fetched here.
    pub async fn generate_new_question(&self) -> bool {
        let ticket = {
            let mut inner = self.lock();
            inner.advance_epoch += 1;
            inner.pending_advance = None;
            self.start_request(&mut inner)
        };
        self.finish_request(ticket).await
    }

    fn start_request(&self, inner: &mut Inner) -> u64 {
        inner.request += 1;
        inner.state.is_loading = true;
        self.publish(&inner.state);
        inner.request
    }

    async fn finish_request(&self, ticket: u64) -> bool {
        tokio::time::sleep(self.shared.timing.loading_delay).await;

        let mut inner = self.lock();
        if inner.request != ticket {
            debug!("question request {} superseded by {}", ticket, inner.request);
            return false;
        }
        inner.refresh_question();
        inner.state.is_loading = false;
        self.publish(&inner.state);
        true
    }

    /// Score an answer against the current question's romanization.
    ///
    /// Case-insensitive, in every quiz mode. A correct answer increments the
    /// score and moves to a new question once the feedback delay passes; a
    /// wrong one only shows feedback and keeps the question.
    ///
    /// Answers are ignored (and count as wrong) while a question is loading
    /// or while the feedback for a correct answer is still showing.
    ///
    /// Timers need a tokio runtime. Without one, feedback stays visible.
    pub fn check_answer(&self, submitted: &str) -> bool {
        let mut inner = self.lock();
        let feedback = &inner.state.feedback;
        if inner.state.is_loading || (feedback.visible && feedback.correct) {
            debug!("answer {:?} ignored while {:?}", submitted, inner.state.phase());
            return false;
        }
        let expected = inner.state.current_question.map(|question| question.romanization);
        let correct = expected.is_some_and(|romaji| submitted.to_lowercase() == romaji.to_lowercase());

        inner.answer_epoch += 1;
        inner.advance_epoch += 1;
        if let Some(pending) = inner.pending_advance.take() {
            pending.abort();
        }

        if correct {
            inner.state.score += 1;
        }
        inner.state.feedback = if correct {
            Feedback {
                message: CORRECT_MESSAGE.to_string(),
                correct: true,
                visible: true,
            }
        } else {
            Feedback {
                message: format!("Incorrect. The correct answer is {}", expected.unwrap_or_default()),
                correct: false,
                visible: true,
            }
        };
        debug!("answer {:?} correct={} score={}", submitted, correct, inner.state.score);
        self.publish(&inner.state);

        let Ok(runtime) = Handle::try_current() else {
            warn!("no tokio runtime; feedback timers not scheduled");
            return correct;
        };

        let answer_epoch = inner.answer_epoch;
        let engine = self.clone();
        if correct {
            let advance_epoch = inner.advance_epoch;
            inner.pending_advance = Some(runtime.spawn(async move {
                engine.auto_advance(answer_epoch, advance_epoch).await;
            }));
        } else {
            runtime.spawn(async move {
                engine.auto_clear(answer_epoch).await;
            });
        }

        correct
    }

    async fn auto_clear(&self, answer_epoch: u64) {
        tokio::time::sleep(self.shared.timing.feedback_delay).await;
        let mut inner = self.lock();
        if inner.answer_epoch != answer_epoch {
            debug!("stale feedback timer ignored");
            return;
        }
        inner.state.feedback.visible = false;
        self.publish(&inner.state);
    }

    async fn auto_advance(&self, answer_epoch: u64, advance_epoch: u64) {
        tokio::time::sleep(self.shared.timing.feedback_delay).await;
        let ticket = {
            let mut inner = self.lock();
            if inner.answer_epoch != answer_epoch {
                debug!("stale auto-advance ignored");
                return;
            }
            inner.state.feedback.visible = false;
            if inner.advance_epoch == advance_epoch {
                inner.pending_advance = None;
                Some(self.start_request(&mut inner))
            } else {
                debug!("auto-advance superseded, question kept");
                self.publish(&inner.state);
                None
            }
        };

        if let Some(ticket) = ticket {
            self.finish_request(ticket).await;
        }
    }
}
