//! Secret word representation
//!
//! A `Word` stores the six-letter secret along with the set of letters it contains,
//! so membership checks during scoring do not rescan the word.

use derive_more::{Display, Error};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Number of letters in every secret word (and the guess input limit)
pub const WORD_LENGTH: usize = 6;

/// Secret used when none is configured
pub const DEFAULT_SECRET: &str = "weedle";

/// A six-letter secret word with its letter set
///
/// Immutable once built: the letter set is derived in [`Word::new`] and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
    letters: FxHashSet<char>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    /// Word does not have exactly [`WORD_LENGTH`] characters
    #[display("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// Word contains something other than a letter
    #[display("Word contains invalid character '{character}'")]
    InvalidCharacter { character: char },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 6 characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use terminal_wordle::core::Word;
    ///
    /// let word = Word::new("Weedle").unwrap();
    /// assert_eq!(word.text(), "weedle");
    /// assert!(word.has_letter('e'));
    ///
    /// assert!(Word::new("crane").is_err());
    /// assert!(Word::new("we3dle").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let chars: Vec<char> = text.chars().collect();
        let chars: [char; WORD_LENGTH] = chars.try_into().map_err(|chars: Vec<char>| {
            WordError::InvalidLength {
                expected: WORD_LENGTH,
                actual: chars.len(),
            }
        })?;

        if let Some(&character) = chars.iter().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter { character });
        }

        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters in order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-5)
    ///
    /// # Panics
    /// Panics if position >= 6
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// Check whether a guess is exactly this word (case-sensitive)
    #[inline]
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        self.text == guess
    }

    /// Get the count of each letter in the word
    ///
    /// Used by frequency-aware scoring.
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for Word {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET).expect("default secret is a valid word")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("weedle").unwrap();
        assert_eq!(word.text(), "weedle");
        assert_eq!(word.chars(), &['w', 'e', 'e', 'd', 'l', 'e']);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("WEEDLE").unwrap();
        assert_eq!(word.text(), "weedle");

        let word2 = Word::new("WeEdLe").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("crane"),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 5
            })
        );
        assert_eq!(
            Word::new("bulbasaur"),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 9
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            Word::new("weed1e"),
            Err(WordError::InvalidCharacter { character: '1' })
        );
        assert!(Word::new("weed e").is_err());
        assert!(Word::new("weedl!").is_err());
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        let word = Word::new("pokémo").unwrap();
        assert_eq!(word.char_at(3), 'é');
    }

    #[test]
    fn word_letter_set() {
        let word = Word::new("weedle").unwrap();
        assert_eq!(word.letters().len(), 4);
        for letter in ['w', 'e', 'd', 'l'] {
            assert!(word.has_letter(letter));
        }
        assert!(!word.has_letter('a'));
        assert!(!word.has_letter('W'));
    }

    #[test]
    fn word_matches_is_case_sensitive() {
        let word = Word::new("weedle").unwrap();
        assert!(word.matches("weedle"));
        assert!(!word.matches("WEEDLE"));
        assert!(!word.matches("weedl"));
    }

    #[test]
    fn word_char_counts() {
        let counts = Word::new("weedle").unwrap().char_counts();
        assert_eq!(counts.get(&'w'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&3));
        assert_eq!(counts.get(&'d'), Some(&1));
        assert_eq!(counts.get(&'l'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn word_default_is_weedle() {
        assert_eq!(Word::default().text(), DEFAULT_SECRET);
    }

    #[test]
    fn word_error_display() {
        let err = Word::new("abc").unwrap_err();
        assert_eq!(err.to_string(), "Word must be exactly 6 letters, got 3");
    }

    #[test]
    fn word_display() {
        let word = Word::new("kakuna").unwrap();
        assert_eq!(format!("{word}"), "kakuna");
    }
}
