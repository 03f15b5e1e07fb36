//! Core domain types for the game
//!
//! Secret word, scoring and the turn state machine. Nothing here touches the
//! terminal, so all of it is testable without a TTY.

mod feedback;
mod game;
mod word;

pub use feedback::{Feedback, LetterScore, Scoring};
pub use game::{Effect, Game, GameEvent, GameStatus, GuessRow, MAX_GUESSES};
pub use word::{DEFAULT_SECRET, WORD_LENGTH, Word, WordError};
