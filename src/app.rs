use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::{watch, Mutex};

use crate::kana::find_by_glyph;
use crate::quiz::{InputMode, Phase, QuizConfiguration, QuizEngine, QuizMode, QuizState};
use crate::training::TrainingSession;

/// Number of rows on the settings screen.
pub const SETTINGS_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Quiz,
    Practice,
    Settings,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Quiz => Tab::Practice,
            Tab::Practice => Tab::Settings,
            Tab::Settings => Tab::Quiz,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Quiz => "Quiz",
            Tab::Practice => "Practice",
            Tab::Settings => "Settings",
        }
    }
}

/// Presentation state around a quiz engine and a practice session.
pub struct App {
    pub tab: Tab,
    engine: QuizEngine,
    updates: watch::Receiver<QuizState>,
    quiz: QuizState,
    selected_option: usize,
    typed_answer: String,
    settings_cursor: usize,
    training: Arc<Mutex<TrainingSession>>,
    practice_input: String,
}

impl App {
    pub fn new(engine: QuizEngine, practice_latency: Duration) -> Self {
        let mut updates = engine.subscribe();
        let quiz = updates.borrow_and_update().clone();
        Self {
            tab: Tab::Quiz,
            engine,
            updates,
            quiz,
            selected_option: 0,
            typed_answer: String::new(),
            settings_cursor: 0,
            training: Arc::new(Mutex::new(TrainingSession::new(practice_latency))),
            practice_input: String::new(),
        }
    }

    /// Pull the latest engine snapshot. Resets the answer inputs when the
    /// question changes.
    pub fn sync(&mut self) {
        if !matches!(self.updates.has_changed(), Ok(true)) {
            return;
        }
        let latest = self.updates.borrow_and_update().clone();
        if latest.current_question != self.quiz.current_question || latest.options != self.quiz.options {
            self.selected_option = 0;
            self.typed_answer.clear();
        }
        self.quiz = latest;
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn config(&self) -> QuizConfiguration {
        self.engine.config()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn typed_answer(&self) -> &str {
        &self.typed_answer
    }

    pub fn settings_cursor(&self) -> usize {
        self.settings_cursor
    }

    pub fn practice_input(&self) -> &str {
        &self.practice_input
    }

    pub fn training(&self) -> &Arc<Mutex<TrainingSession>> {
        &self.training
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    /// Answers are taken while a question is shown, and during feedback for
    /// a wrong answer so the user can retry.
    pub fn accepts_answers(&self) -> bool {
        match self.quiz.phase() {
            Phase::Ready => true,
            Phase::Feedback => !self.quiz.feedback.correct,
            Phase::Loading => false,
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.quiz.options.len();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.quiz.options.len();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Submit the highlighted option.
    ///
    /// Options are glyphs in romaji-to-kana mode; the engine scores
    /// romanizations, so the glyph is translated first.
    pub fn submit_choice(&mut self) -> Option<bool> {
        if !self.accepts_answers() {
            return None;
        }
        let option = self.quiz.options.get(self.selected_option)?;
        let answer = match self.engine.config().mode {
            QuizMode::KanaToRomaji => option.clone(),
            QuizMode::RomajiToKana => find_by_glyph(option)
                .map(|entry| entry.romanization.to_string())
                .unwrap_or_else(|| option.clone()),
        };
        Some(self.engine.check_answer(&answer))
    }

    pub fn typed_push(&mut self, c: char) {
        self.typed_answer.push(c);
    }

    pub fn typed_pop(&mut self) {
        self.typed_answer.pop();
    }

    pub fn submit_typed(&mut self) -> Option<bool> {
        let answer = self.typed_answer.trim();
        if !self.accepts_answers() || answer.is_empty() {
            return None;
        }
        let correct = self.engine.check_answer(answer);
        if !correct {
            self.typed_answer.clear();
        }
        Some(correct)
    }

    /// Ask the engine for a new question without blocking the UI.
    pub fn request_question(&self) {
        let engine = self.engine.clone();
        tokio::spawn(async move {
            engine.generate_new_question().await;
        });
    }

    pub fn settings_next(&mut self) {
        self.settings_cursor = (self.settings_cursor + 1) % SETTINGS_ROWS;
    }

    pub fn settings_previous(&mut self) {
        self.settings_cursor = (self.settings_cursor + SETTINGS_ROWS - 1) % SETTINGS_ROWS;
    }

    /// Flip the setting under the cursor and fetch a question that matches.
    pub fn toggle_setting(&mut self) {
        let config = self.engine.config();
        match self.settings_cursor {
            0 => self.engine.set_mode(config.mode.toggled()),
            1 => self.engine.set_input_mode(config.input_mode.toggled()),
            2 => self.engine.set_include_hiragana(!config.include_hiragana),
            3 => self.engine.set_include_katakana(!config.include_katakana),
            4 => self.engine.set_include_dakuten(!config.include_dakuten),
            _ => self.engine.set_include_handakuten(!config.include_handakuten),
        }
        debug!("toggled setting row {}", self.settings_cursor);
        self.request_question();
    }

    pub fn is_typed_input(&self) -> bool {
        self.engine.config().input_mode == InputMode::Typed
    }

    pub fn practice_push(&mut self, c: char) {
        self.practice_input.push(c);
    }

    pub fn practice_pop(&mut self) {
        self.practice_input.pop();
    }

    /// Check the typed translation in the background. Nothing happens until
    /// there is a phrase and some input.
    pub fn submit_translation(&mut self) {
        let translation = self.practice_input.trim().to_string();
        if translation.is_empty() {
            return;
        }
        let training = Arc::clone(&self.training);
        tokio::spawn(async move {
            let mut session = training.lock().await;
            if session.original_phrase().is_empty() {
                return;
            }
            session.user_translation = translation;
            session.check_translation().await;
        });
    }

    /// Fetch the next practice phrase in the background.
    pub fn next_phrase(&mut self) {
        self.practice_input.clear();
        let training = Arc::clone(&self.training);
        tokio::spawn(async move {
            training.lock().await.generate_new_phrase().await;
        });
    }

    /// Change a practice option, unless a request is in flight, and fetch a
    /// phrase that matches the new options.
    pub fn adjust_practice(&mut self, adjust: impl FnOnce(&mut TrainingSession)) {
        let Ok(mut session) = self.training.try_lock() else {
            return;
        };
        adjust(&mut session);
        session.clear_feedback();
        drop(session);
        self.next_phrase();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::quiz::EngineTiming;
    use crate::training::TranslationDirection;

    fn app(config: QuizConfiguration) -> App {
        let engine = QuizEngine::with_rng(config, EngineTiming::default(), StdRng::seed_from_u64(2));
        App::new(engine, Duration::from_millis(10))
    }

    #[tokio::test(start_paused = true)]
    async fn test_choice_in_romaji_to_kana_maps_back() {
        let mut app = app(QuizConfiguration {
            mode: QuizMode::RomajiToKana,
            ..QuizConfiguration::default()
        });
        let question = app.quiz().current_question.unwrap();
        let index = app.quiz().options.iter().position(|o| o == question.glyph).unwrap();
        app.selected_option = index;

        assert_eq!(app.submit_choice(), Some(true));
        app.sync();
        assert_eq!(app.quiz().score, 1);
        assert!(!app.accepts_answers());
        assert_eq!(app.submit_choice(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_typed_answer_allows_retry() {
        let mut app = app(QuizConfiguration::default());
        for c in "zzz".chars() {
            app.typed_push(c);
        }
        assert_eq!(app.submit_typed(), Some(false));
        app.sync();
        assert!(app.accepts_answers());
        assert!(app.typed_answer().is_empty());
        assert_eq!(app.submit_typed(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_option_selection_wraps() {
        let mut app = app(QuizConfiguration::default());
        app.select_previous_option();
        assert_eq!(app.selected_option(), app.quiz().options.len() - 1);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_setting_requests_question() {
        let mut app = app(QuizConfiguration::default());
        app.settings_next();
        app.settings_next();
        app.settings_next();
        app.toggle_setting();
        assert!(!app.config().include_katakana);

        tokio::time::sleep(Duration::from_millis(200)).await;
        app.sync();
        let question = app.quiz().current_question.unwrap();
        assert_eq!(question.script, crate::kana::Script::Hiragana);
        assert!(!app.quiz().is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_translation_is_not_checked() {
        let mut app = app(QuizConfiguration::default());
        app.submit_translation();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(app.training().lock().await.feedback().is_empty());

        app.practice_push('x');
        app.submit_translation();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(app.training().lock().await.feedback().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_practice_options_fetch_matching_phrase() {
        let mut app = app(QuizConfiguration::default());
        app.next_phrase();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(app.training().lock().await.correct_translation(), "Good morning");

        app.adjust_practice(|s| s.direction = s.direction.toggled());
        tokio::time::sleep(Duration::from_millis(50)).await;
        let session = app.training().lock().await;
        assert_eq!(session.direction, TranslationDirection::OtherToJapanese);
        assert_eq!(session.original_phrase(), "Thank you");
        assert_eq!(session.correct_translation(), "ありがとう");
    }
}
