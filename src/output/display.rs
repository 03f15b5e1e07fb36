//! End-of-game summary printed after the terminal is restored

use super::formatters::{colored_guess, result_message, share_grid};
use crate::core::Game;
use crate::interactive::Outcome;
use colored::Colorize;

/// Print the board, the result and the share grid
pub fn print_summary(game: &Game, outcome: Outcome) {
    println!("\n{}", "─".repeat(30).cyan());

    for row in game.guesses() {
        println!("  {}", colored_guess(&row.feedback));
    }

    println!();
    let message = result_message(game, outcome);
    match outcome {
        Outcome::Won => println!("{}", message.green().bold()),
        Outcome::Lost => println!("{}", message.red().bold()),
        Outcome::Quit => println!("{}", message.bright_black()),
    }

    if !game.guesses().is_empty() {
        println!("\n{}", share_grid(game));
    }
    println!("{}", "─".repeat(30).cyan());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEvent;

    #[test]
    fn summary_prints_for_every_outcome() {
        let mut game = Game::default();
        print_summary(&game, Outcome::Quit);

        game.handle_event(GameEvent::Commit("pidgey".into()));
        game.handle_event(GameEvent::Commit("weedle".into()));
        print_summary(&game, Outcome::Won);

        let mut lost = Game::default();
        for _ in 0..6 {
            lost.handle_event(GameEvent::Commit("pidgey".into()));
        }
        print_summary(&lost, Outcome::Lost);
    }
}
