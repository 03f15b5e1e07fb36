//! Terminal Wordle
//!
//! A six-letter word guessing game for the terminal: six attempts, per-letter
//! feedback in color.
//!
//! # Quick Start
//!
//! ```rust
//! use terminal_wordle::core::{Effect, Game, GameEvent, LetterScore};
//!
//! let mut game = Game::default();
//! assert_eq!(game.handle_event(GameEvent::Commit("lxxdxe".into())), Effect::NextTurn);
//!
//! let rows = game.guesses();
//! assert_eq!(rows[0].feedback.scores()[3], LetterScore::Correct);
//! ```

// Core domain types
pub mod core;

// Embedded secret words
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
