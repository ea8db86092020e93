//! # kana-quiz
//!
//! A terminal kana trainer: kana/romaji quizzes with configurable filters and
//! a small phrase translation drill.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kana_quiz::{run, App, EngineTiming, KanaQuizError, QuizConfiguration, QuizEngine};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), KanaQuizError> {
//!     let engine = QuizEngine::new(QuizConfiguration::default(), EngineTiming::default());
//!     run(App::new(engine, Duration::from_secs(1))).await
//! }
//! ```

mod app;
mod error;
pub mod kana;
pub mod quiz;
mod settings;
pub mod terminal;
pub mod training;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;

pub use app::{App, Tab};
pub use error::{ConfigError, KanaQuizError};
pub use quiz::{EngineTiming, QuizConfiguration, QuizEngine};
pub use settings::load_settings;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Run the trainer in the terminal until the user quits.
pub async fn run(mut app: App) -> Result<(), KanaQuizError> {
    let mut session = terminal::TerminalSession::start()?;
    info!("terminal session started");

    loop {
        app.sync();
        session.terminal().draw(|frame| ui::render(frame, &app))?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_input(&mut app, key) {
                    break;
                }
            }
        }
    }

    info!("terminal session finished");
    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Tab => {
            app.next_tab();
            return false;
        }
        _ => {}
    }

    match app.tab {
        Tab::Quiz if app.is_typed_input() => handle_typed_input(app, key.code),
        Tab::Quiz => handle_choice_input(app, key.code),
        Tab::Practice => handle_practice_input(app, key),
        Tab::Settings => handle_settings_input(app, key.code),
    }
}

fn handle_choice_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_choice();
            false
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.request_question();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_typed_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.typed_push(c),
        KeyCode::Backspace => app.typed_pop(),
        KeyCode::Enter => {
            app.submit_typed();
        }
        _ => {}
    }
    false
}

fn handle_settings_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.settings_previous();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.settings_next();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_setting();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_practice_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.next_phrase(),
            KeyCode::Char('d') => app.adjust_practice(|s| s.direction = s.direction.toggled()),
            KeyCode::Char('f') => app.adjust_practice(|s| s.japanese_format = s.japanese_format.next()),
            KeyCode::Char('l') => app.adjust_practice(|s| s.difficulty = s.difficulty.next()),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char(c) => app.practice_push(c),
        KeyCode::Backspace => app.practice_pop(),
        KeyCode::Enter => app.submit_translation(),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn app() -> App {
        let engine = QuizEngine::with_rng(
            QuizConfiguration::default(),
            EngineTiming::default(),
            StdRng::seed_from_u64(4),
        );
        App::new(engine, Duration::from_millis(10))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_keys() {
        let mut app = app();
        assert!(handle_input(&mut app, press(KeyCode::Esc)));
        assert!(handle_input(&mut app, press(KeyCode::Char('q'))));

        app.next_tab();
        assert_eq!(app.tab, Tab::Practice);
        assert!(!handle_input(&mut app, press(KeyCode::Char('q'))));
        assert_eq!(app.practice_input(), "q");
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_cycles_screens() {
        let mut app = app();
        for expected in [Tab::Practice, Tab::Settings, Tab::Quiz] {
            assert!(!handle_input(&mut app, press(KeyCode::Tab)));
            assert_eq!(app.tab, expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_settings_switch_to_typed_input() {
        let mut app = app();
        app.tab = Tab::Settings;
        handle_input(&mut app, press(KeyCode::Char('j')));
        handle_input(&mut app, press(KeyCode::Enter));
        assert!(app.is_typed_input());

        app.tab = Tab::Quiz;
        assert!(!handle_input(&mut app, press(KeyCode::Char('q'))));
        assert_eq!(app.typed_answer(), "q");
    }
}
