use rand::seq::SliceRandom;
use rand::Rng;

use crate::kana::KanaEntry;

use super::config::QuizMode;

/// Upper bound on multiple-choice options, correct answer included.
pub const MAX_OPTIONS: usize = 4;

/// The option text that counts as correct for `question` in `mode`.
pub fn correct_answer(question: &KanaEntry, mode: QuizMode) -> &'static str {
    match mode {
        QuizMode::KanaToRomaji => question.romanization,
        QuizMode::RomajiToKana => question.glyph,
    }
}

/// Build the shuffled option list for `question`.
///
/// Distractors come from `pool` minus any entry with the question's glyph.
/// Entries sharing the question's romanization stay eligible but collapse
/// into the correct answer by value. A small pool yields fewer than
/// [`MAX_OPTIONS`] options.
pub fn generate_options<R: Rng + ?Sized>(
    question: &KanaEntry,
    pool: &[KanaEntry],
    mode: QuizMode,
    rng: &mut R,
) -> Vec<String> {
    let correct = correct_answer(question, mode);

    let mut candidates: Vec<&'static str> = Vec::new();
    for entry in pool.iter().filter(|entry| entry.glyph != question.glyph) {
        let value = correct_answer(entry, mode);
        if !candidates.contains(&value) {
            candidates.push(value);
        }
    }

    let mut options = vec![correct.to_string()];
    while options.len() < MAX_OPTIONS && !candidates.is_empty() {
        let index = rng.random_range(0..candidates.len());
        let candidate = candidates.swap_remove(index);
        if !options.iter().any(|option| option.as_str() == candidate) {
            options.push(candidate.to_string());
        }
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::kana::{all_entries, Script};
    use crate::quiz::{compute_available_pool, QuizConfiguration};

    fn hira(glyph: &str) -> KanaEntry {
        *all_entries(Script::Hiragana)
            .iter()
            .find(|e| e.glyph == glyph)
            .unwrap()
    }

    #[test]
    fn test_correct_answer_by_mode() {
        let ka = hira("か");
        assert_eq!(correct_answer(&ka, QuizMode::KanaToRomaji), "ka");
        assert_eq!(correct_answer(&ka, QuizMode::RomajiToKana), "か");
    }

    #[test]
    fn test_options_contain_correct_once_without_duplicates() {
        let pool = compute_available_pool(&QuizConfiguration::default());
        let mut rng = StdRng::seed_from_u64(42);
        for question in &pool {
            for mode in [QuizMode::KanaToRomaji, QuizMode::RomajiToKana] {
                let options = generate_options(question, &pool, mode, &mut rng);
                let correct = correct_answer(question, mode);
                assert_eq!(options.len(), MAX_OPTIONS);
                assert_eq!(options.iter().filter(|o| o.as_str() == correct).count(), 1);
                let unique: HashSet<_> = options.iter().collect();
                assert_eq!(unique.len(), options.len());
            }
        }
    }

    #[test]
    fn test_pa_options_come_from_combined_pool() {
        let pool = compute_available_pool(&QuizConfiguration::default());
        let pa = hira("ぱ");
        let romanizations: HashSet<_> = pool.iter().map(|e| e.romanization).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let options = generate_options(&pa, &pool, QuizMode::KanaToRomaji, &mut rng);
        assert!(options.contains(&"pa".to_string()));
        assert!(options.iter().all(|o| romanizations.contains(o.as_str())));
    }

    #[test]
    fn test_exclusion_is_by_glyph_not_romanization() {
        let ji = hira("じ");
        let dji = hira("ぢ");
        let a = hira("あ");

        // ぢ is the only other entry; its "ji" merges with the correct answer.
        let mut rng = StdRng::seed_from_u64(1);
        let options = generate_options(&ji, &[ji, dji], QuizMode::KanaToRomaji, &mut rng);
        assert_eq!(options, vec!["ji".to_string()]);

        // In romaji-to-kana mode ぢ is a real distractor.
        let options = generate_options(&ji, &[ji, dji, a], QuizMode::RomajiToKana, &mut rng);
        let set: HashSet<_> = options.iter().map(String::as_str).collect();
        assert_eq!(set, HashSet::from(["じ", "ぢ", "あ"]));
    }

    #[test]
    fn test_small_pool_yields_fewer_options() {
        let a = hira("あ");
        let i = hira("い");
        let mut rng = StdRng::seed_from_u64(9);

        let options = generate_options(&a, &[a], QuizMode::KanaToRomaji, &mut rng);
        assert_eq!(options, vec!["a".to_string()]);

        let options = generate_options(&a, &[a, i], QuizMode::KanaToRomaji, &mut rng);
        assert_eq!(options.len(), 2);
        assert!(options.contains(&"i".to_string()));
    }

    #[test]
    fn test_same_seed_same_options() {
        let pool = compute_available_pool(&QuizConfiguration::default());
        let question = hira("ね");
        let first = generate_options(&question, &pool, QuizMode::KanaToRomaji, &mut StdRng::seed_from_u64(5));
        let second = generate_options(&question, &pool, QuizMode::KanaToRomaji, &mut StdRng::seed_from_u64(5));
        assert_eq!(first, second);
    }
}
