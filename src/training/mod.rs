//! Phrase translation practice.
//!
//! There is no translation service behind this: phrases come from a short
//! built-in list and answers are compared literally. The delays stand in for
//! the network round trip a real backend would need.

use std::time::Duration;

use log::debug;

/// How Japanese text is written in prompts and answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JapaneseFormat {
    Romaji,
    KanaOnly,
    #[default]
    Normal,
}

impl JapaneseFormat {
    pub fn label(self) -> &'static str {
        match self {
            JapaneseFormat::Romaji => "Romaji",
            JapaneseFormat::KanaOnly => "Kana Only",
            JapaneseFormat::Normal => "Normal Japanese",
        }
    }

    pub fn next(self) -> Self {
        match self {
            JapaneseFormat::Romaji => JapaneseFormat::KanaOnly,
            JapaneseFormat::KanaOnly => JapaneseFormat::Normal,
            JapaneseFormat::Normal => JapaneseFormat::Romaji,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranslationDirection {
    #[default]
    JapaneseToOther,
    OtherToJapanese,
}

impl TranslationDirection {
    pub fn label(self) -> &'static str {
        match self {
            TranslationDirection::JapaneseToOther => "Japanese → Other",
            TranslationDirection::OtherToJapanese => "Other → Japanese",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TranslationDirection::JapaneseToOther => TranslationDirection::OtherToJapanese,
            TranslationDirection::OtherToJapanese => TranslationDirection::JapaneseToOther,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Longest English phrase (in words) offered at this level.
    pub fn max_word_count(self) -> usize {
        match self {
            Difficulty::Beginner => 3,
            Difficulty::Intermediate => 5,
            Difficulty::Advanced => 8,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Beginner => Difficulty::Intermediate,
            Difficulty::Intermediate => Difficulty::Advanced,
            Difficulty::Advanced => Difficulty::Beginner,
        }
    }
}

struct Phrase {
    english: &'static str,
    romaji: &'static str,
    kana: &'static str,
    normal: &'static str,
}

impl Phrase {
    fn japanese(&self, format: JapaneseFormat) -> &'static str {
        match format {
            JapaneseFormat::Romaji => self.romaji,
            JapaneseFormat::KanaOnly => self.kana,
            JapaneseFormat::Normal => self.normal,
        }
    }

    fn word_count(&self) -> usize {
        self.english.split_whitespace().count()
    }
}

const PHRASES: &[Phrase] = &[
    Phrase {
        english: "Good morning",
        romaji: "ohayou gozaimasu",
        kana: "おはよう ございます",
        normal: "おはようございます",
    },
    Phrase {
        english: "Thank you",
        romaji: "arigatou",
        kana: "ありがとう",
        normal: "ありがとう",
    },
    Phrase {
        english: "Where is the station?",
        romaji: "eki wa doko desu ka",
        kana: "えき は どこ です か",
        normal: "駅はどこですか",
    },
    Phrase {
        english: "I would like some water please",
        romaji: "mizu wo kudasai",
        kana: "みず を ください",
        normal: "水をください",
    },
    Phrase {
        english: "Good evening",
        romaji: "konbanwa",
        kana: "こんばんは",
        normal: "こんばんは",
    },
];

const PERFECT_MESSAGE: &str = "Perfect! Your translation is correct.";

/// State of one translation practice session.
#[derive(Debug)]
pub struct TrainingSession {
    pub japanese_format: JapaneseFormat,
    pub direction: TranslationDirection,
    pub difficulty: Difficulty,
    pub user_translation: String,
    original_phrase: String,
    correct_translation: String,
    is_loading: bool,
    feedback: String,
    next_phrase: usize,
    latency: Duration,
}

impl TrainingSession {
    pub fn new(latency: Duration) -> Self {
        Self {
            japanese_format: JapaneseFormat::default(),
            direction: TranslationDirection::default(),
            difficulty: Difficulty::default(),
            user_translation: String::new(),
            original_phrase: String::new(),
            correct_translation: String::new(),
            is_loading: false,
            feedback: String::new(),
            next_phrase: 0,
            latency,
        }
    }

    pub fn original_phrase(&self) -> &str {
        &self.original_phrase
    }

    pub fn correct_translation(&self) -> &str {
        &self.correct_translation
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn clear_feedback(&mut self) {
        self.feedback.clear();
    }

    /// Move to the next canned phrase that fits the difficulty.
    pub async fn generate_new_phrase(&mut self) {
        self.is_loading = true;
        tokio::time::sleep(self.latency).await;

        let max_words = self.difficulty.max_word_count();
        let index = (0..PHRASES.len())
            .map(|offset| (self.next_phrase + offset) % PHRASES.len())
            .find(|&index| PHRASES[index].word_count() <= max_words)
            .unwrap_or(0);
        self.next_phrase = (index + 1) % PHRASES.len();

        let phrase = &PHRASES[index];
        let japanese = phrase.japanese(self.japanese_format);
        let (original, answer) = match self.direction {
            TranslationDirection::JapaneseToOther => (japanese, phrase.english),
            TranslationDirection::OtherToJapanese => (phrase.english, japanese),
        };
        debug!("practice phrase {:?}", original);

        self.original_phrase = original.to_string();
        self.correct_translation = answer.to_string();
        self.user_translation.clear();
        self.feedback.clear();
        self.is_loading = false;
    }

    /// Compare the user's translation with the expected one, ignoring case.
    /// Does nothing before the first phrase.
    pub async fn check_translation(&mut self) {
        if self.correct_translation.is_empty() {
            return;
        }
        self.is_loading = true;
        tokio::time::sleep(self.latency).await;

        self.feedback = if self.user_translation.to_lowercase() == self.correct_translation.to_lowercase() {
            PERFECT_MESSAGE.to_string()
        } else {
            format!("Close! The correct translation would be: {}", self.correct_translation)
        };
        self.is_loading = false;
    }
}
