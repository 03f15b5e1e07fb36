//! Board rendering with ratatui
//!
//! [`board`] is a pure function of the game and input line; [`ui`] only places its
//! output on screen.

use super::app::App;
use super::input::LineInput;
use crate::core::{Game, LetterScore, MAX_GUESSES, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Padding, Paragraph},
};

const PANEL_WIDTH: u16 = 28;

const BACKGROUND: Color = Color::Rgb(0x7D, 0x56, 0xF4);
const FOREGROUND: Color = Color::Rgb(0xFA, 0xFA, 0xFA);
const GREEN: Color = Color::Rgb(0x77, 0xDD, 0x77);
const YELLOW: Color = Color::Rgb(0xFD, 0xFD, 0x96);
const RED: Color = Color::Rgb(0xFF, 0x69, 0x61);

/// Style for a scored letter
#[must_use]
pub fn score_style(score: LetterScore) -> Style {
    let color = match score {
        LetterScore::Correct => GREEN,
        LetterScore::Present => YELLOW,
        LetterScore::Absent => RED,
    };
    Style::default()
        .fg(color)
        .bg(BACKGROUND)
        .add_modifier(Modifier::BOLD)
}

/// Render the whole board as styled text
///
/// Header with the remaining guess count, one line per slot, then the footer.
#[must_use]
pub fn board(game: &Game, input: &LineInput) -> Text<'static> {
    let mut lines = vec![
        Line::from(format!("Guess the {WORD_LENGTH}-letter word.")),
        Line::from(format!("Guesses left: {}", game.guesses_left())),
        Line::default(),
    ];

    let active = game.active_slot();
    for index in 0..MAX_GUESSES {
        let line = if active == Some(index) {
            input.view()
        } else if let Some(text) = game.slot(index) {
            scored_line(game, text)
        } else {
            Line::default()
        };
        lines.push(line);
    }

    if game.is_won() {
        lines.push(Line::from("You won!"));
        lines.push(Line::from("Press ctrl-c to quit."));
    } else if game.is_lost() {
        lines.push(Line::default());
        lines.push(Line::from(format!("The word was {}.", game.secret())));
    } else {
        lines.push(Line::default());
        lines.push(Line::from("Press ctrl-c to give up."));
    }

    Text::from(lines)
}

fn scored_line(game: &Game, text: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = game
        .score(text)
        .letters()
        .iter()
        .map(|&(ch, score)| Span::styled(ch.to_string(), score_style(score)))
        .collect();
    Line::from(spans)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let text = board(&app.game, &app.input);
    // one row of padding above and below
    let height = text.height() as u16 + 2;

    let area = centered(f.area(), PANEL_WIDTH, height);

    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(FOREGROUND)
                .bg(BACKGROUND)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().padding(Padding::uniform(1)));

    f.render_widget(panel, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
