//! Game state machine
//!
//! Holds the secret word and committed guesses, and advances turns in response to
//! [`GameEvent`]s. Knows nothing about terminals or key codes: the caller turns key
//! presses into events and acts on the returned [`Effect`].

use super::{Feedback, Scoring, Word};
use tracing::{debug, info, instrument};

/// Number of guesses a player gets
pub const MAX_GUESSES: usize = 6;

/// Input to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Player asked to leave
    Quit,
    /// Player submitted the text of the active slot
    Commit(String),
}

impl GameEvent {
    /// Event name without its payload, safe to log
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Commit(_) => "commit",
        }
    }
}

/// What the caller should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed
    None,
    /// Guess recorded, next slot is now active
    NextTurn,
    /// Guess matched the secret
    Won,
    /// Last guess used without a match
    Lost,
    /// Terminate the program
    Quit,
}

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing { turn: usize },
    Won { turn: usize },
    Lost,
}

/// A committed guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow<'a> {
    pub index: usize,
    pub text: &'a str,
    pub feedback: Feedback,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    scoring: Scoring,
    slots: [Option<String>; MAX_GUESSES],
    turn: usize,
    won: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Word::default(), Scoring::default())
    }
}

impl Game {
    /// Start a fresh game: six empty slots, turn 0, not won
    #[must_use]
    pub fn new(secret: Word, scoring: Scoring) -> Self {
        debug!(%scoring, "New game");
        Self {
            secret,
            scoring,
            slots: Default::default(),
            turn: 0,
            won: false,
        }
    }

    /// Apply one event and report what happened
    ///
    /// # Examples
    /// ```
    /// use terminal_wordle::core::{Effect, Game, GameEvent};
    ///
    /// let mut game = Game::default();
    /// assert_eq!(game.handle_event(GameEvent::Commit("pidgey".into())), Effect::NextTurn);
    /// assert_eq!(game.handle_event(GameEvent::Commit("weedle".into())), Effect::Won);
    /// assert!(game.is_won());
    /// assert_eq!(game.guesses_left(), 5);
    /// ```
    #[instrument(level = "debug", skip(self, event), fields(turn = self.turn, kind = event.kind()))]
    pub fn handle_event(&mut self, event: GameEvent) -> Effect {
        match event {
            GameEvent::Quit => {
                info!(turn = self.turn, won = self.won, "Player quit");
                Effect::Quit
            }
            GameEvent::Commit(text) => self.commit(text),
        }
    }

    fn commit(&mut self, text: String) -> Effect {
        if self.is_over() {
            debug!("Ignoring commit after game end");
            return Effect::None;
        }

        let matched = self.secret.matches(&text);
        self.slots[self.turn] = Some(text);

        if matched {
            self.won = true;
            info!(guesses = self.turn + 1, "Secret word guessed");
            return Effect::Won;
        }

        self.turn += 1;
        if self.turn == MAX_GUESSES {
            info!("Out of guesses");
            Effect::Lost
        } else {
            debug!(turn = self.turn, "Advanced to next turn");
            Effect::NextTurn
        }
    }

    /// Current status of the game
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won { turn: self.turn }
        } else if self.turn >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing { turn: self.turn }
        }
    }

    /// Index of the active slot, or the winning slot once won
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Guesses still available (`6 - turn`)
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        MAX_GUESSES - self.turn
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        !self.won && self.turn >= MAX_GUESSES
    }

    /// True once no further guesses are accepted
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.won || self.turn >= MAX_GUESSES
    }

    /// Slot accepting input, if the game is still going
    #[must_use]
    pub const fn active_slot(&self) -> Option<usize> {
        if self.is_over() {
            None
        } else {
            Some(self.turn)
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Committed text of a slot, `None` if not yet committed
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index)?.as_deref()
    }

    /// Scored rows for every committed slot, in order
    #[must_use]
    pub fn guesses(&self) -> Vec<GuessRow<'_>> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_deref().map(|text| GuessRow {
                    index,
                    text,
                    feedback: self.score(text),
                })
            })
            .collect()
    }

    /// Score arbitrary text against this game's secret
    #[must_use]
    pub fn score(&self, guess: &str) -> Feedback {
        Feedback::classify(&self.secret, guess, self.scoring)
    }
}
