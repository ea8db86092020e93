use super::entry::{KanaEntry, Script};

const fn h(glyph: &'static str, romanization: &'static str) -> KanaEntry {
    KanaEntry::new(Script::Hiragana, glyph, romanization)
}

const fn k(glyph: &'static str, romanization: &'static str) -> KanaEntry {
    KanaEntry::new(Script::Katakana, glyph, romanization)
}

static HIRAGANA: [KanaEntry; 71] = [
    h("あ", "a"), h("い", "i"), h("う", "u"), h("え", "e"), h("お", "o"),
    h("か", "ka"), h("き", "ki"), h("く", "ku"), h("け", "ke"), h("こ", "ko"),
    h("さ", "sa"), h("し", "shi"), h("す", "su"), h("せ", "se"), h("そ", "so"),
    h("た", "ta"), h("ち", "chi"), h("つ", "tsu"), h("て", "te"), h("と", "to"),
    h("な", "na"), h("に", "ni"), h("ぬ", "nu"), h("ね", "ne"), h("の", "no"),
    h("は", "ha"), h("ひ", "hi"), h("ふ", "fu"), h("へ", "he"), h("ほ", "ho"),
    h("ま", "ma"), h("み", "mi"), h("む", "mu"), h("め", "me"), h("も", "mo"),
    h("や", "ya"), h("ゆ", "yu"), h("よ", "yo"),
    h("ら", "ra"), h("り", "ri"), h("る", "ru"), h("れ", "re"), h("ろ", "ro"),
    h("わ", "wa"), h("を", "wo"),
    h("ん", "n"),
    // dakuten
    h("が", "ga"), h("ぎ", "gi"), h("ぐ", "gu"), h("げ", "ge"), h("ご", "go"),
    h("ざ", "za"), h("じ", "ji"), h("ず", "zu"), h("ぜ", "ze"), h("ぞ", "zo"),
    h("だ", "da"), h("ぢ", "ji"), h("づ", "zu"), h("で", "de"), h("ど", "do"),
    h("ば", "ba"), h("び", "bi"), h("ぶ", "bu"), h("べ", "be"), h("ぼ", "bo"),
    // handakuten
    h("ぱ", "pa"), h("ぴ", "pi"), h("ぷ", "pu"), h("ぺ", "pe"), h("ぽ", "po"),
];

static KATAKANA: [KanaEntry; 71] = [
    k("ア", "a"), k("イ", "i"), k("ウ", "u"), k("エ", "e"), k("オ", "o"),
    k("カ", "ka"), k("キ", "ki"), k("ク", "ku"), k("ケ", "ke"), k("コ", "ko"),
    k("サ", "sa"), k("シ", "shi"), k("ス", "su"), k("セ", "se"), k("ソ", "so"),
    k("タ", "ta"), k("チ", "chi"), k("ツ", "tsu"), k("テ", "te"), k("ト", "to"),
    k("ナ", "na"), k("ニ", "ni"), k("ヌ", "nu"), k("ネ", "ne"), k("ノ", "no"),
    k("ハ", "ha"), k("ヒ", "hi"), k("フ", "fu"), k("ヘ", "he"), k("ホ", "ho"),
    k("マ", "ma"), k("ミ", "mi"), k("ム", "mu"), k("メ", "me"), k("モ", "mo"),
    k("ヤ", "ya"), k("ユ", "yu"), k("ヨ", "yo"),
    k("ラ", "ra"), k("リ", "ri"), k("ル", "ru"), k("レ", "re"), k("ロ", "ro"),
    k("ワ", "wa"), k("ヲ", "wo"),
    k("ン", "n"),
    // dakuten
    k("ガ", "ga"), k("ギ", "gi"), k("グ", "gu"), k("ゲ", "ge"), k("ゴ", "go"),
    k("ザ", "za"), k("ジ", "ji"), k("ズ", "zu"), k("ゼ", "ze"), k("ゾ", "zo"),
    k("ダ", "da"), k("ヂ", "ji"), k("ヅ", "zu"), k("デ", "de"), k("ド", "do"),
    k("バ", "ba"), k("ビ", "bi"), k("ブ", "bu"), k("ベ", "be"), k("ボ", "bo"),
    // handakuten
    k("パ", "pa"), k("ピ", "pi"), k("プ", "pu"), k("ペ", "pe"), k("ポ", "po"),
];

/// All entries of one script, in table order.
pub fn all_entries(script: Script) -> &'static [KanaEntry] {
    match script {
        Script::Hiragana => &HIRAGANA,
        Script::Katakana => &KATAKANA,
    }
}

/// Look up an entry in either script by its glyph.
pub fn find_by_glyph(glyph: &str) -> Option<KanaEntry> {
    HIRAGANA
        .iter()
        .chain(KATAKANA.iter())
        .find(|entry| entry.glyph == glyph)
        .copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::kana::Diacritic;

    #[test]
    fn test_tables_are_parallel() {
        let hira = all_entries(Script::Hiragana);
        let kata = all_entries(Script::Katakana);
        assert_eq!(hira.len(), 71);
        assert_eq!(kata.len(), 71);
        for (h, k) in hira.iter().zip(kata) {
            assert_eq!(h.romanization, k.romanization);
            assert_eq!(h.script, Script::Hiragana);
            assert_eq!(k.script, Script::Katakana);
        }
    }

    #[test]
    fn test_glyphs_are_unique() {
        let glyphs: HashSet<_> = all_entries(Script::Hiragana)
            .iter()
            .chain(all_entries(Script::Katakana))
            .map(|e| e.glyph)
            .collect();
        assert_eq!(glyphs.len(), 142);
    }

    #[test]
    fn test_find_by_glyph() {
        assert_eq!(find_by_glyph("ヂ").map(|e| e.romanization), Some("ji"));
        assert_eq!(find_by_glyph("ヂ").map(|e| e.script), Some(Script::Katakana));
        assert_eq!(find_by_glyph("ka"), None);
    }

    #[test]
    fn test_diacritic_counts() {
        let hira = all_entries(Script::Hiragana);
        let count = |d: Diacritic| hira.iter().filter(|e| e.diacritic() == d).count();
        // じ and ぢ romanize to "ji" and classify as plain.
        assert_eq!(count(Diacritic::Plain), 48);
        assert_eq!(count(Diacritic::Dakuten), 18);
        assert_eq!(count(Diacritic::Handakuten), 5);
    }
}
