/// Emoji offered by the compose box picker.
pub const EMOJI_PALETTE: [&str; 12] = [
    "😀", "😂", "❤️", "👍", "🔥", "✨", "🎉", "💯", "😊", "🚀", "👌", "💪",
];

/// Grid picker over `EMOJI_PALETTE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPickerState {
    open: bool,
    cursor: usize,
    columns: usize,
}

impl Default for EmojiPickerState {
    fn default() -> Self {
        Self::new(6)
    }
}

impl EmojiPickerState {
    pub fn new(columns: usize) -> Self {
        Self {
            open: false,
            cursor: 0,
            columns: columns.clamp(1, EMOJI_PALETTE.len()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlighted(&self) -> &'static str {
        EMOJI_PALETTE[self.cursor]
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(EMOJI_PALETTE.len() - 1);
    }

    pub fn move_up(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + self.columns < EMOJI_PALETTE.len() {
            self.cursor += self.columns;
        }
    }
}
