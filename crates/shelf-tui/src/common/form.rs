//! Single-line text field for form screens.

use crossterm::event::{KeyCode, KeyEvent};

/// Editable single-line text field with a character cursor.
///
/// Password fields set `masked` and render bullets instead of the value.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    /// Cursor position in characters (0..=len).
    cursor: usize,
    masked: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field that renders bullets instead of its value.
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string to render: bullets for masked fields.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Applies an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_insert_and_backspace_at_cursor() {
        let mut field = TextField::new();
        for c in "abc".chars() {
            field.insert(c);
        }
        field.handle_key(&key(KeyCode::Left));
        field.insert('X');
        assert_eq!(field.value(), "abXc");

        field.backspace();
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_masked_display_hides_value() {
        let mut field = TextField::masked();
        for c in "pw1".chars() {
            field.insert(c);
        }
        assert_eq!(field.display(), "•••");
        assert_eq!(field.value(), "pw1");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = TextField::new();
        field.handle_key(&key(KeyCode::Left));
        assert_eq!(field.cursor(), 0);
        field.insert('a');
        field.handle_key(&key(KeyCode::Right));
        assert_eq!(field.cursor(), 1);
        field.handle_key(&key(KeyCode::Home));
        field.handle_key(&key(KeyCode::Delete));
        assert!(field.is_empty());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::new();
        for c in "héllo".chars() {
            field.insert(c);
        }
        field.handle_key(&key(KeyCode::Home));
        field.handle_key(&key(KeyCode::Right));
        field.handle_key(&key(KeyCode::Right));
        field.backspace();
        assert_eq!(field.value(), "hllo");
    }
}
