//! Single-line text input
//!
//! Owns the live text and cursor of the active guess slot. The game state only
//! ever sees the committed string.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const PLACEHOLDER: &str = "Guess";

/// Editable line with a fixed character limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInput {
    chars: Vec<char>,
    cursor: usize,
    limit: usize,
}

impl LineInput {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            limit,
        }
    }

    /// Current text
    #[must_use]
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// Cursor position in characters (0..=len)
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Empty the line, e.g. after a commit
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns true if the line changed or the cursor moved.
    ///
    /// Enter and Ctrl-C are not editing keys and are left to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('a') if ctrl => self.move_to(0),
            KeyCode::Char('e') if ctrl => self.move_to(self.chars.len()),
            KeyCode::Char('u') if ctrl => self.delete_to_start(),
            KeyCode::Char('k') if ctrl => self.delete_to_end(),
            KeyCode::Char(_) if ctrl => false,
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_to(self.cursor.saturating_sub(1)),
            KeyCode::Right => self.move_to((self.cursor + 1).min(self.chars.len())),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.chars.len()),
            _ => false,
        }
    }

    fn insert(&mut self, c: char) -> bool {
        if self.chars.len() >= self.limit || c.is_control() {
            return false;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.chars.drain(..self.cursor);
        self.cursor = 0;
        true
    }

    fn delete_to_end(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.truncate(self.cursor);
        true
    }

    fn move_to(&mut self, position: usize) -> bool {
        let moved = position != self.cursor;
        self.cursor = position;
        moved
    }

    /// Styled view of the line with a block cursor
    ///
    /// An empty line shows a dimmed placeholder under the cursor.
    #[must_use]
    pub fn view(&self) -> Line<'static> {
        let text_style = Style::default()
            .fg(Color::Rgb(0xFA, 0xFA, 0xFA))
            .bg(Color::Rgb(0x7D, 0x56, 0xF4));
        let cursor_style = text_style.add_modifier(Modifier::REVERSED);

        let mut spans = vec![Span::styled("> ", text_style)];

        if self.chars.is_empty() {
            let mut placeholder = PLACEHOLDER.chars();
            if let Some(first) = placeholder.next() {
                spans.push(Span::styled(
                    first.to_string(),
                    cursor_style.add_modifier(Modifier::DIM),
                ));
            }
            spans.push(Span::styled(
                placeholder.collect::<String>(),
                text_style.add_modifier(Modifier::DIM),
            ));
            return Line::from(spans);
        }

        let before: String = self.chars[..self.cursor].iter().collect();
        spans.push(Span::styled(before, text_style));

        match self.chars.get(self.cursor) {
            Some(&under) => {
                spans.push(Span::styled(under.to_string(), cursor_style));
                let after: String = self.chars[self.cursor + 1..].iter().collect();
                spans.push(Span::styled(after, text_style));
            }
            None => spans.push(Span::styled(" ", cursor_style)),
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(text: &str) -> LineInput {
        let mut input = LineInput::new(6);
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn typing_appends_characters() {
        let input = typed("weed");
        assert_eq!(input.value(), "weed");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn limit_is_enforced() {
        let mut input = typed("weedlexyz");
        assert_eq!(input.value(), "weedle");
        assert!(!input.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(input.value().chars().count(), input.limit());
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = typed("weedle");
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "weedl");

        input.handle_key(key(KeyCode::Home));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.value(), "eedl");
        assert_eq!(input.cursor(), 0);
        assert!(!input.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn insert_at_cursor() {
        let mut input = typed("wedle");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Char('e')));
        assert_eq!(input.value(), "weedle");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = typed("ab");
        assert!(!input.handle_key(key(KeyCode::Right)));
        assert_eq!(input.cursor(), 2);
        input.handle_key(key(KeyCode::Home));
        assert!(!input.handle_key(key(KeyCode::Left)));
        assert_eq!(input.cursor(), 0);
        input.handle_key(key(KeyCode::End));
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn control_shortcuts() {
        let mut input = typed("weedle");
        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor(), 0);
        input.handle_key(ctrl('e'));
        assert_eq!(input.cursor(), 6);

        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        assert!(input.handle_key(ctrl('k')));
        assert_eq!(input.value(), "weed");

        input.handle_key(key(KeyCode::Left));
        assert!(input.handle_key(ctrl('u')));
        assert_eq!(input.value(), "d");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let mut input = LineInput::new(6);
        assert!(!input.handle_key(ctrl('x')));
        assert!(!input.handle_key(key(KeyCode::Char('\u{7}'))));
        assert!(input.is_empty());
    }

    #[test]
    fn clear_resets_line() {
        let mut input = typed("weedle");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn view_shows_placeholder_when_empty() {
        let line = LineInput::new(6).view();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "> Guess");
    }

    #[test]
    fn view_shows_text_and_cursor() {
        let mut input = typed("weed");
        let text: String = input.view().spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "> weed ");

        input.handle_key(key(KeyCode::Home));
        let line = input.view();
        assert_eq!(line.spans[2].content, "w");
        assert!(line.spans[2].style.add_modifier.contains(Modifier::REVERSED));
    }
}
