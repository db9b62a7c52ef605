//! Word and character statistics for input text

use serde::Serialize;

/// Number of whitespace-separated tokens in `text`
///
/// Leading and trailing whitespace is ignored and runs of whitespace count
/// as a single separator, so blank text has zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters (Unicode scalar values) in `text`
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Word and character counts for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        TextStats {
            words: word_count(text),
            chars: char_count(text),
        }
    }
}
