//! Kana reference data.
//!
//! A fixed catalog of hiragana and katakana with their romanizations.
//! Nothing here is mutable; the quiz engine only reads and filters it.

mod catalog;
mod entry;

pub use catalog::{all_entries, find_by_glyph};
pub use entry::{Diacritic, KanaEntry, Script};
