//! State of a single-line text field (compose box, search, profile fields).

use unicode_width::UnicodeWidthStr;

/// Maximum allowed input length in characters.
const MAX_INPUT_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputState {
    text: String,
    /// Cursor position (character index, not byte).
    cursor_position: usize,
}

impl TextInputState {
    /// Creates a field pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.set_text(text);
        state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Terminal column width of the text before the cursor.
    pub fn cursor_display_width(&self) -> usize {
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text[..byte_idx].width()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a character at the current cursor position.
    /// Returns false if the input would exceed the maximum length.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.char_count() >= MAX_INPUT_LENGTH {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        true
    }

    /// Appends `value` at the end of the text regardless of where the cursor
    /// is, then moves the cursor to the end.
    /// Returns false (and leaves the text untouched) if the result would
    /// exceed the maximum length.
    pub fn append_str(&mut self, value: &str) -> bool {
        if self.char_count() + value.chars().count() > MAX_INPUT_LENGTH {
            return false;
        }
        self.text.push_str(value);
        self.move_cursor_end();
        true
    }

    /// Replaces the whole text, truncated to the maximum length.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.text = if text.chars().count() > MAX_INPUT_LENGTH {
            text.chars().take(MAX_INPUT_LENGTH).collect()
        } else {
            text
        };
        self.move_cursor_end();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    /// Deletes the character at the cursor position (delete key).
    pub fn delete_char_at(&mut self) {
        if self.cursor_position < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    /// Clears all text and resets cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInputState {
        let mut state = TextInputState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    #[test]
    fn new_state_is_empty() {
        let state = TextInputState::default();
        assert!(state.is_empty());
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn insert_char_appends_and_moves_cursor() {
        let state = typed("Hi");

        assert_eq!(state.text(), "Hi");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn insert_char_at_middle_position() {
        let mut state = typed("Ho");
        state.move_cursor_left();
        state.insert_char('i');

        assert_eq!(state.text(), "Hio");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn delete_char_before_removes_previous_char() {
        let mut state = typed("Hi");
        state.delete_char_before();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor_position(), 1);
    }

    #[test]
    fn delete_char_before_at_start_does_nothing() {
        let mut state = typed("H");
        state.move_cursor_home();
        state.delete_char_before();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn delete_char_at_removes_current_char() {
        let mut state = typed("Hi");
        state.move_cursor_home();
        state.delete_char_at();

        assert_eq!(state.text(), "i");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn delete_char_at_end_does_nothing() {
        let mut state = typed("H");
        state.delete_char_at();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor_position(), 1);
    }

    #[test]
    fn cursor_movement_stays_within_text() {
        let mut state = typed("abc");

        state.move_cursor_left();
        state.move_cursor_left();
        state.move_cursor_left();
        state.move_cursor_left();
        assert_eq!(state.cursor_position(), 0);

        state.move_cursor_right();
        assert_eq!(state.cursor_position(), 1);

        state.move_cursor_end();
        state.move_cursor_right();
        assert_eq!(state.cursor_position(), 3);
    }

    #[test]
    fn clear_resets_state() {
        let mut state = typed("Hi");
        state.clear();

        assert!(state.is_empty());
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn handles_unicode_characters() {
        let mut state = typed("Привет");
        assert_eq!(state.cursor_position(), 6);

        state.delete_char_before();
        assert_eq!(state.text(), "Приве");

        state.move_cursor_home();
        state.delete_char_at();
        assert_eq!(state.text(), "риве");
    }

    #[test]
    fn append_str_ignores_cursor_and_lands_at_end() {
        let mut state = typed("Hello");
        state.move_cursor_home();

        assert!(state.append_str("🔥"));

        assert_eq!(state.text(), "Hello🔥");
        assert_eq!(state.cursor_position(), 6);
    }

    #[test]
    fn append_str_counts_multi_codepoint_emoji_as_chars() {
        let mut state = TextInputState::default();

        state.append_str("❤️");

        assert_eq!(state.text(), "❤️");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn append_str_rejects_overflow() {
        let mut state = TextInputState::with_text("x".repeat(MAX_INPUT_LENGTH));

        assert!(!state.append_str("y"));
        assert_eq!(state.text().chars().count(), MAX_INPUT_LENGTH);
    }

    #[test]
    fn with_text_places_cursor_at_end() {
        let state = TextInputState::with_text("Bio");

        assert_eq!(state.text(), "Bio");
        assert_eq!(state.cursor_position(), 3);
    }

    #[test]
    fn set_text_truncates_to_max_length() {
        let mut state = TextInputState::default();
        state.set_text("z".repeat(MAX_INPUT_LENGTH + 10));

        assert_eq!(state.text().chars().count(), MAX_INPUT_LENGTH);
        assert_eq!(state.cursor_position(), MAX_INPUT_LENGTH);
    }

    #[test]
    fn cursor_display_width_accounts_for_wide_chars() {
        let mut state = typed("a");
        state.append_str("😀");

        assert_eq!(state.cursor_display_width(), 3);

        state.move_cursor_left();
        assert_eq!(state.cursor_display_width(), 1);
    }

    #[test]
    fn insert_char_respects_max_length_limit() {
        let mut state = TextInputState::default();
        for _ in 0..MAX_INPUT_LENGTH {
            assert!(state.insert_char('x'));
        }
        assert!(!state.insert_char('y'));
        assert_eq!(state.text().chars().count(), MAX_INPUT_LENGTH);
    }
}
