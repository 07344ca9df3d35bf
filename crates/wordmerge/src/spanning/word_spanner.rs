//! # Word Spanner

use std::sync::LazyLock;

use regex::Regex;

/// Word split pattern.
///
/// Maximal runs of word characters (letters, digits, underscore);
/// or a single character which is neither a word character nor whitespace.
pub const WORD_PATTERN: &str = r"\w+|[^\w\s]";

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("WORD_PATTERN must compile"));

/// Splits text into word units.
///
/// Whitespace runs are dropped; no unit is ever empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordSpanner;

impl WordSpanner {
    /// Create a new spanner.
    pub fn new() -> Self {
        Self
    }

    /// Lazily split `text` into word units, left to right.
    ///
    /// The returned iterator is `Clone`, so a split can be restarted
    /// from any point.
    pub fn split<'t>(
        &self,
        text: &'t str,
    ) -> WordSpans<'t> {
        WordSpans { text, pos: 0 }
    }
}

/// Iterator over the word units of a text.
#[derive(Debug, Clone)]
pub struct WordSpans<'t> {
    text: &'t str,

    /// Byte offset of the next search.
    pos: usize,
}

impl<'t> WordSpans<'t> {
    /// The unsearched remainder of the text.
    pub fn remaining(&self) -> &'t str {
        &self.text[self.pos..]
    }
}

impl<'t> Iterator for WordSpans<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }
        match WORD_REGEX.find_at(self.text, self.pos) {
            Some(m) => {
                // Matches are never empty; the cursor always advances.
                self.pos = m.end();
                Some(m.as_str())
            }
            None => {
                self.pos = self.text.len();
                None
            }
        }
    }
}

impl core::iter::FusedIterator for WordSpans<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        WordSpanner::new().split(text).collect()
    }

    #[test]
    fn test_split_words_and_punctuation() {
        assert_eq!(
            split("Volcano: Mount St. Helens, elevation 2549 meters"),
            vec![
                "Volcano",
                ":",
                "Mount",
                "St",
                ".",
                "Helens",
                ",",
                "elevation",
                "2549",
                "meters"
            ]
        );
    }

    #[test]
    fn test_split_drops_whitespace() {
        assert_eq!(split(""), Vec::<&str>::new());
        assert_eq!(split(" \t\n  "), Vec::<&str>::new());
        assert_eq!(split("  a\n\nb  "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_punctuation_runs_are_single_chars() {
        assert_eq!(split("$$!"), vec!["$", "$", "!"]);
        assert_eq!(split("snake_case_1"), vec!["snake_case_1"]);
    }

    #[test]
    fn test_split_unicode_words() {
        assert_eq!(split("café naïve"), vec!["café", "naïve"]);
        assert_eq!(split("x→y"), vec!["x", "→", "y"]);
    }

    #[test]
    fn test_split_is_restartable() {
        let spans = WordSpanner::new().split("one two three");
        let restart = spans.clone();
        assert_eq!(spans.count(), 3);
        assert_eq!(restart.collect::<Vec<_>>(), vec!["one", "two", "three"]);

        let mut spans = WordSpanner::new().split("lava, ash");
        assert_eq!(spans.next(), Some("lava"));

        let resume = spans.clone();
        assert_eq!(resume.remaining(), ", ash");
        assert_eq!(spans.collect::<Vec<_>>(), vec![",", "ash"]);
        assert_eq!(resume.collect::<Vec<_>>(), vec![",", "ash"]);
    }

    #[test]
    fn test_split_is_fused() {
        let mut spans = WordSpanner::new().split("a  ");
        assert_eq!(spans.next(), Some("a"));
        assert_eq!(spans.next(), None);
        assert_eq!(spans.next(), None);
        assert_eq!(spans.remaining(), "");
    }
}
