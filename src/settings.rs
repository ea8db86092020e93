use std::fs;
use std::path::Path;

use log::info;

use crate::error::ConfigError;
use crate::quiz::QuizConfiguration;

/// Read a quiz configuration from a JSON file. Missing keys take defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<QuizConfiguration, ConfigError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_settings(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("loaded settings from {}", path.display());
    Ok(config)
}

fn parse_settings(json: &str) -> Result<QuizConfiguration, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::process;

    use super::*;
    use crate::quiz::{InputMode, QuizMode};

    #[test]
    fn test_parse_full_settings() {
        let config = parse_settings(
            r#"{
                "mode": "kana-to-romaji",
                "input_mode": "typed",
                "include_hiragana": true,
                "include_katakana": false,
                "include_dakuten": false,
                "include_handakuten": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.mode, QuizMode::KanaToRomaji);
        assert_eq!(config.input_mode, InputMode::Typed);
        assert!(!config.include_katakana);
        assert!(!config.include_dakuten);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse_settings("{}").unwrap(), QuizConfiguration::default());
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let missing = env::temp_dir().join(format!("kana-quiz-missing-{}.json", process::id()));
        let err = load_settings(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("kana-quiz-missing"));

        let bad = env::temp_dir().join(format!("kana-quiz-bad-{}.json", process::id()));
        fs::write(&bad, r#"{"mode": "sideways"}"#).unwrap();
        let err = load_settings(&bad).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        fs::remove_file(&bad).unwrap();
    }
}
