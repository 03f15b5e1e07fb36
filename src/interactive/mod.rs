//! Interactive terminal game
//!
//! Key handling, the input line and board rendering on top of ratatui/crossterm.

mod app;
mod input;
pub mod rendering;

pub use app::{App, Outcome, run_tui};
pub use input::LineInput;
