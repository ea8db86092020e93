use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::kana::{all_entries, Diacritic, KanaEntry, Script};

use super::config::QuizConfiguration;

/// Hiragana without any dakuten or handakuten entries.
pub fn plain_hiragana() -> Vec<KanaEntry> {
    all_entries(Script::Hiragana)
        .iter()
        .filter(|entry| entry.diacritic() == Diacritic::Plain)
        .copied()
        .collect()
}

/// Entries the quiz may ask about under `config`. Never empty.
pub fn compute_available_pool(config: &QuizConfiguration) -> Vec<KanaEntry> {
    let mut scripts = Vec::with_capacity(2);
    if config.include_hiragana {
        scripts.push(Script::Hiragana);
    }
    if config.include_katakana {
        scripts.push(Script::Katakana);
    }
    if scripts.is_empty() {
        debug!("no script enabled, using hiragana");
        scripts.push(Script::Hiragana);
    }

    let pool: Vec<KanaEntry> = scripts
        .into_iter()
        .flat_map(all_entries)
        .filter(|entry| match entry.diacritic() {
            Diacritic::Plain => true,
            Diacritic::Dakuten => config.include_dakuten,
            Diacritic::Handakuten => config.include_handakuten,
        })
        .copied()
        .collect();

    if pool.is_empty() {
        debug!("filtered pool is empty, falling back to plain hiragana");
        return plain_hiragana();
    }
    pool
}

/// Uniform pick from the pool. `None` only when the pool is empty.
pub fn select_question<R: Rng + ?Sized>(pool: &[KanaEntry], rng: &mut R) -> Option<KanaEntry> {
    pool.choose(rng).copied()
}
