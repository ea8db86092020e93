use serde::{Deserialize, Serialize};

/// Which side of the kana is shown as the question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizMode {
    #[default]
    KanaToRomaji,
    RomajiToKana,
}

impl QuizMode {
    pub fn label(self) -> &'static str {
        match self {
            QuizMode::KanaToRomaji => "Kana to Romaji",
            QuizMode::RomajiToKana => "Romaji to Kana",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            QuizMode::KanaToRomaji => QuizMode::RomajiToKana,
            QuizMode::RomajiToKana => QuizMode::KanaToRomaji,
        }
    }
}

/// How the user answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    #[default]
    MultipleChoice,
    Typed,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            InputMode::MultipleChoice => "Multiple Choice",
            InputMode::Typed => "Keyboard Input",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InputMode::MultipleChoice => InputMode::Typed,
            InputMode::Typed => InputMode::MultipleChoice,
        }
    }
}

/// User-selected quiz filters and modes.
///
/// Missing fields in a settings file fall back to the defaults, so
/// `{"include_katakana": false}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfiguration {
    pub mode: QuizMode,
    pub input_mode: InputMode,
    pub include_hiragana: bool,
    pub include_katakana: bool,
    pub include_dakuten: bool,
    pub include_handakuten: bool,
}

impl Default for QuizConfiguration {
    fn default() -> Self {
        Self {
            mode: QuizMode::default(),
            input_mode: InputMode::default(),
            include_hiragana: true,
            include_katakana: true,
            include_dakuten: true,
            include_handakuten: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_include_everything() {
        let config = QuizConfiguration::default();
        assert_eq!(config.mode, QuizMode::KanaToRomaji);
        assert_eq!(config.input_mode, InputMode::MultipleChoice);
        assert!(config.include_hiragana);
        assert!(config.include_katakana);
        assert!(config.include_dakuten);
        assert!(config.include_handakuten);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: QuizConfiguration =
            serde_json::from_str(r#"{"mode":"romaji-to-kana","include_dakuten":false}"#).unwrap();
        assert_eq!(config.mode, QuizMode::RomajiToKana);
        assert!(!config.include_dakuten);
        assert!(config.include_handakuten);
        assert_eq!(config.input_mode, InputMode::MultipleChoice);
    }

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(QuizMode::KanaToRomaji.toggled(), QuizMode::RomajiToKana);
        assert_eq!(InputMode::Typed.toggled(), InputMode::MultipleChoice);
    }
}
