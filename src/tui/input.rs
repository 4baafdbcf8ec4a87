//! Single-line input field handling for the terminal user interface.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// What a key press did to an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Enter was pressed; the caller should commit the value.
    Submit,
    /// Escape was pressed; the caller should return focus without committing.
    Cancel,
    /// The value or cursor changed (or the key was ignored).
    Edited,
}

/// A text input field with a cursor measured in characters.
#[derive(Clone, Debug)]
pub struct InputField {
    value: String,
    cursor: usize,
    placeholder: &'static str,
}

impl InputField {
    /// Create an empty input field showing `placeholder` while empty.
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder,
        }
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    /// Replace the content and move the cursor to the end.
    pub fn set_text(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> InputOutcome {
        match key {
            KeyCode::Enter => return InputOutcome::Submit,
            KeyCode::Esc => return InputOutcome::Cancel,
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.value.remove(at);
            }
            KeyCode::Delete if self.cursor < self.value.chars().count() => {
                let at = self.byte_offset(self.cursor);
                self.value.remove(at);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => {}
        }
        InputOutcome::Edited
    }

    /// Render the field on a single line; shows the cursor when focused.
    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let widget = if self.value.is_empty() && !focused {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.value.as_str())
        };
        f.render_widget(widget, area);
        if focused {
            let x = area.x + (self.cursor as u16).min(area.width.saturating_sub(1));
            f.set_cursor_position((x, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(field: &mut InputField, s: &str) {
        for c in s.chars() {
            field.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_editing() {
        let mut field = InputField::new("+[New Project]");
        type_str(&mut field, "Gardn");
        field.handle_key(KeyCode::Left);
        type_str(&mut field, "e");
        assert_eq!(field.text(), "Garden");

        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Delete);
        assert_eq!(field.text(), "arden");
        field.handle_key(KeyCode::End);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.text(), "arde");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut field = InputField::new("");
        type_str(&mut field, "café");
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.text(), "caf");
        field.handle_key(KeyCode::Left);
        type_str(&mut field, "ñ");
        assert_eq!(field.text(), "cañf");
    }

    #[test]
    fn test_enter_and_escape() {
        let mut field = InputField::new("");
        assert_eq!(field.handle_key(KeyCode::Enter), InputOutcome::Submit);
        assert_eq!(field.handle_key(KeyCode::Esc), InputOutcome::Cancel);
        assert_eq!(field.handle_key(KeyCode::Char('x')), InputOutcome::Edited);
    }
}
