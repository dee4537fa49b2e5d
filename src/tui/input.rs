/// Single-line text buffer for the "new item" prompt.
///
/// `cursor_position` is a byte offset and always sits on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub buffer: String,
    pub cursor_position: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    /// Empties the buffer and hands back what was typed.
    pub fn take(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.buffer)
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(ch) = self.buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= ch.len_utf8();
            self.buffer.remove(self.cursor_position);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_position < self.buffer.len() {
            self.buffer.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(ch) = self.buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= ch.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor_position..].chars().next() {
            self.cursor_position += ch.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.buffer.len();
    }

    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("abc");
        assert_eq!(input.cursor_position, 3);

        input.backspace();
        assert_eq!(input.buffer, "ab");
        assert_eq!(input.cursor_position, 2);
    }

    #[test]
    fn test_cursor_movement_and_insert_in_middle() {
        let mut input = typed("ac");
        input.move_cursor_left();
        input.insert_char('b');

        assert_eq!(input.buffer, "abc");
        assert_eq!(input.split_at_cursor(), ("ab", "c"));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = typed("héllo");
        input.move_cursor_home();
        input.move_cursor_right();
        input.move_cursor_right();
        assert_eq!(input.cursor_position, 3); // 'h' + 2-byte 'é'

        input.backspace();
        assert_eq!(input.buffer, "hllo");
        assert_eq!(input.cursor_position, 1);
    }

    #[test]
    fn test_cursor_boundaries() {
        let mut input = typed("xy");

        input.move_cursor_right();
        assert_eq!(input.cursor_position, 2);
        input.delete();
        assert_eq!(input.buffer, "xy");

        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor_position, 0);
        input.backspace();
        assert_eq!(input.buffer, "xy");

        input.delete();
        assert_eq!(input.buffer, "y");
    }

    #[test]
    fn test_take_resets() {
        let mut input = typed("milk");

        assert_eq!(input.take(), "milk");
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor_position, 0);
    }
}
