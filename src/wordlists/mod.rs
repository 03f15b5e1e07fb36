//! Secret word lists
//!
//! Provides the embedded list of secret words and random selection from it.

mod embedded;

pub use embedded::{SECRETS, SECRETS_COUNT};

use crate::core::{DEFAULT_SECRET, Word};
use rand::seq::IndexedRandom;

/// Pick a random secret from the embedded list
///
/// # Examples
/// ```
/// use terminal_wordle::wordlists::{random_secret, SECRETS};
///
/// let word = random_secret();
/// assert!(SECRETS.contains(&word.text()));
/// ```
#[must_use]
pub fn random_secret() -> Word {
    let text = SECRETS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(DEFAULT_SECRET);
    Word::new(text).unwrap_or_default()
}
