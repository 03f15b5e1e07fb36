//! Terminal output formatting
//!
//! Plain-terminal rendering of a finished game.

pub mod display;
pub mod formatters;

pub use display::print_summary;
