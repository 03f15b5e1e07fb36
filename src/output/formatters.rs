//! Formatting utilities for terminal output

use crate::core::{Feedback, Game, LetterScore, MAX_GUESSES};
use crate::interactive::Outcome;
use colored::{ColoredString, Colorize};

/// Color one guessed letter by its score
#[must_use]
pub fn colored_letter(letter: char, score: LetterScore) -> ColoredString {
    let text = letter.to_uppercase().to_string();
    match score {
        LetterScore::Correct => text.black().on_green().bold(),
        LetterScore::Present => text.black().on_yellow().bold(),
        LetterScore::Absent => text.white().on_red().bold(),
    }
}

/// Render a scored guess as a string of colored letters
#[must_use]
pub fn colored_guess(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|&(letter, score)| colored_letter(letter, score).to_string())
        .collect()
}

/// Score line for the share header: "3/6" when won, "X/6" otherwise
#[must_use]
pub fn score_label(game: &Game) -> String {
    if game.is_won() {
        format!("{}/{MAX_GUESSES}", game.turn() + 1)
    } else {
        format!("X/{MAX_GUESSES}")
    }
}

/// One-line result shown under the summary board
#[must_use]
pub fn result_message(game: &Game, outcome: Outcome) -> String {
    match outcome {
        Outcome::Won => {
            let guesses = game.turn() + 1;
            let noun = if guesses == 1 { "guess" } else { "guesses" };
            format!("✅ Solved in {guesses} {noun}!")
        }
        Outcome::Lost => format!(
            "❌ Out of guesses, the word was {}",
            game.secret().text().to_uppercase()
        ),
        Outcome::Quit => "Gave up.".to_string(),
    }
}

/// Emoji grid of all committed guesses, one row per guess
#[must_use]
pub fn share_grid(game: &Game) -> String {
    let rows: Vec<String> = game
        .guesses()
        .iter()
        .map(|row| row.feedback.to_emoji())
        .collect();

    format!("Wordle {}\n\n{}", score_label(game), rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEvent;

    fn played(guesses: &[&str]) -> Game {
        let mut game = Game::default();
        for guess in guesses {
            game.handle_event(GameEvent::Commit((*guess).to_string()));
        }
        game
    }

    #[test]
    fn score_label_for_win_and_loss() {
        assert_eq!(score_label(&played(&["pidgey", "weedle"])), "2/6");
        assert_eq!(score_label(&played(&["pidgey"; 6])), "X/6");
        assert_eq!(score_label(&played(&[])), "X/6");
    }

    #[test]
    fn result_message_counts_guesses() {
        let first_try = played(&["weedle"]);
        assert_eq!(
            result_message(&first_try, Outcome::Won),
            "✅ Solved in 1 guess!"
        );

        let third_try = played(&["pidgey", "kakuna", "weedle"]);
        assert_eq!(
            result_message(&third_try, Outcome::Won),
            "✅ Solved in 3 guesses!"
        );
    }

    #[test]
    fn result_message_for_loss_and_quit() {
        assert_eq!(
            result_message(&played(&["pidgey"; 6]), Outcome::Lost),
            "❌ Out of guesses, the word was WEEDLE"
        );
        assert_eq!(result_message(&played(&[]), Outcome::Quit), "Gave up.");
    }

    #[test]
    fn share_grid_lists_rows_in_order() {
        let grid = share_grid(&played(&["lxxdxe", "weedle"]));
        assert_eq!(grid, "Wordle 2/6\n\n🟨⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let game = played(&["lxxdxe"]);
        let rows = game.guesses();
        assert_eq!(colored_guess(&rows[0].feedback), "LXXDXE");
        colored::control::unset_override();
    }
}
