use super::message::Message;

/// Scroll margin - number of items to keep visible above/below cursor before scrolling.
const SCROLL_MARGIN: usize = 5;

/// Message thread shown on the right of the chats panel.
///
/// The list is global: it is not scoped to the selected chat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThreadState {
    messages: Vec<Message>,
    selected_index: Option<usize>,
    scroll_offset: usize,
}

impl ThreadState {
    pub fn new(messages: Vec<Message>) -> Self {
        let mut state = Self::default();
        state.set_messages(messages);
        state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_messages(&mut self, messages: Vec<Message>) {
        self.selected_index = messages.len().checked_sub(1);
        self.messages = messages;
        self.scroll_offset = 0;
    }

    /// Appends a message to the end and moves the selection onto it.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.selected_index = Some(self.messages.len() - 1);
    }

    /// Selects the next message (moves down in the list).
    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(idx) if idx + 1 < self.messages.len() => Some(idx + 1),
            Some(idx) => Some(idx),
        };
    }

    /// Selects the previous message (moves up in the list).
    pub fn select_previous(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(self.messages.len() - 1),
            Some(idx) => Some(idx.saturating_sub(1)),
        };
    }

    /// Keeps the selected row visible with `SCROLL_MARGIN` rows around it.
    ///
    /// `element_index` is the row of the selection in the rendered list.
    /// `viewport_height` is the number of visible rows in the list area.
    pub fn update_scroll_offset(&mut self, element_index: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        let effective_margin = SCROLL_MARGIN.min(viewport_height / 2);

        if element_index < self.scroll_offset + effective_margin {
            self.scroll_offset = element_index.saturating_sub(effective_margin);
        }

        let visible_bottom = self.scroll_offset + viewport_height;
        if element_index + effective_margin >= visible_bottom {
            self.scroll_offset =
                (element_index + effective_margin + 1).saturating_sub(viewport_height);
        }
    }
}
