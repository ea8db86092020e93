use serde::Serialize;

/// Which kana script an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub fn label(self) -> &'static str {
        match self {
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
        }
    }
}

/// Diacritic class of a kana, derived from the first letter of its romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diacritic {
    /// No diacritic (includes ん / "n").
    Plain,
    /// Voiced: g, z, d, b rows.
    Dakuten,
    /// Semi-voiced: p row.
    Handakuten,
}

impl Diacritic {
    /// Classify a romanization by its leading letter.
    ///
    /// There is no exceptions table. じ and ぢ both romanize to "ji", which
    /// starts with `j`, so both classify as plain.
    pub fn classify(romanization: &str) -> Self {
        match romanization.as_bytes().first() {
            Some(b'g' | b'z' | b'd' | b'b') => Diacritic::Dakuten,
            Some(b'p') => Diacritic::Handakuten,
            _ => Diacritic::Plain,
        }
    }
}

/// One kana and its romanization.
///
/// Equality is by value over all three fields, so the same romanization in
/// two scripts (or two glyphs sharing "ji") are different entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KanaEntry {
    pub script: Script,
    pub glyph: &'static str,
    pub romanization: &'static str,
}

impl KanaEntry {
    pub const fn new(script: Script, glyph: &'static str, romanization: &'static str) -> Self {
        Self {
            script,
            glyph,
            romanization,
        }
    }

    pub fn diacritic(&self) -> Diacritic {
        Diacritic::classify(self.romanization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_prefix() {
        assert_eq!(Diacritic::classify("ga"), Diacritic::Dakuten);
        assert_eq!(Diacritic::classify("zu"), Diacritic::Dakuten);
        assert_eq!(Diacritic::classify("do"), Diacritic::Dakuten);
        assert_eq!(Diacritic::classify("bi"), Diacritic::Dakuten);
        assert_eq!(Diacritic::classify("pa"), Diacritic::Handakuten);
        assert_eq!(Diacritic::classify("n"), Diacritic::Plain);
        assert_eq!(Diacritic::classify("shi"), Diacritic::Plain);
        assert_eq!(Diacritic::classify("ji"), Diacritic::Plain);
        assert_eq!(Diacritic::classify(""), Diacritic::Plain);
    }

    #[test]
    fn test_entries_compare_by_value() {
        let hi = KanaEntry::new(Script::Hiragana, "か", "ka");
        let kata = KanaEntry::new(Script::Katakana, "カ", "ka");
        assert_eq!(hi, KanaEntry::new(Script::Hiragana, "か", "ka"));
        assert_ne!(hi, kata);
    }
}
