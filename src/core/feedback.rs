//! Per-letter feedback for a guess
//!
//! Each guessed character is classified as:
//! - Correct (right letter, right position)
//! - Present (letter is in the secret word, wrong position)
//! - Absent (letter not in the secret word)
//!
//! Two scoring rules are supported, see [`Scoring`].

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Correct,
    Present,
    Absent,
}

impl LetterScore {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Rule used to decide Present vs Absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Membership only: a letter that occurs anywhere in the secret is Present at
    /// every non-matching position, however often it is repeated in the guess.
    #[default]
    Positional,
    /// Frequency-aware: exact matches consume letters first, then each remaining
    /// occurrence of a letter in the secret can mark at most one Present.
    Standard,
}

impl Scoring {
    /// Look up a scoring rule by name, falling back to positional
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "standard" | "frequency" | "strict" => Self::Standard,
            _ => Self::Positional,
        }
    }

    /// Canonical name of the rule
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scored guess: one [`LetterScore`] per guessed character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    letters: Vec<(char, LetterScore)>,
}

impl Feedback {
    /// Classify `guess` against `secret`
    ///
    /// The guess is expected to be no longer than the secret (the input line enforces
    /// this); any extra characters are scored Absent.
    ///
    /// # Examples
    /// ```
    /// use terminal_wordle::core::{Feedback, LetterScore::*, Scoring, Word};
    ///
    /// let secret = Word::new("weedle").unwrap();
    /// let feedback = Feedback::classify(&secret, "abcdef", Scoring::Positional);
    ///
    /// // d sits where the secret has it, e only elsewhere
    /// assert_eq!(
    ///     feedback.scores(),
    ///     vec![Absent, Absent, Absent, Correct, Present, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn classify(secret: &Word, guess: &str, scoring: Scoring) -> Self {
        match scoring {
            Scoring::Positional => Self::classify_positional(secret, guess),
            Scoring::Standard => Self::classify_standard(secret, guess),
        }
    }

    fn classify_positional(secret: &Word, guess: &str) -> Self {
        let letters = guess
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let score = if secret.chars().get(i) == Some(&ch) {
                    LetterScore::Correct
                } else if secret.has_letter(ch) {
                    LetterScore::Present
                } else {
                    LetterScore::Absent
                };
                (ch, score)
            })
            .collect();

        Self { letters }
    }

    fn classify_standard(secret: &Word, guess: &str) -> Self {
        let mut available = secret.char_counts();

        // First pass: mark exact matches and remove them from the pool
        let mut letters: Vec<(char, LetterScore)> = guess
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if secret.chars().get(i) == Some(&ch) {
                    if let Some(count) = available.get_mut(&ch) {
                        *count = count.saturating_sub(1);
                    }
                    (ch, LetterScore::Correct)
                } else {
                    (ch, LetterScore::Absent)
                }
            })
            .collect();

        // Second pass: grant Present from whatever is left, left to right
        for (ch, score) in &mut letters {
            if *score == LetterScore::Absent
                && let Some(count) = available.get_mut(&*ch)
                && *count > 0
            {
                *score = LetterScore::Present;
                *count -= 1;
            }
        }

        Self { letters }
    }

    /// Scores in guess order
    #[must_use]
    pub fn scores(&self) -> Vec<LetterScore> {
        self.letters.iter().map(|&(_, score)| score).collect()
    }

    /// Guessed characters paired with their scores
    #[must_use]
    pub fn letters(&self) -> &[(char, LetterScore)] {
        &self.letters
    }

    /// Number of scored characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True when nothing was guessed (an empty commit)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True when every position is Correct and the guess filled the whole word
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.letters.len() == WORD_LENGTH
            && self
                .letters
                .iter()
                .all(|&(_, score)| score == LetterScore::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|&(_, score)| score.emoji()).collect()
    }
}
