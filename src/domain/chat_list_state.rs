use super::{
    chat::{Chat, ChatCategory},
    text_input_state::TextInputState,
};

/// Sidebar tab restricting the list to one chat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatTab {
    #[default]
    All,
    Personal,
    Groups,
    Channels,
}

impl ChatTab {
    pub const ALL: [ChatTab; 4] = [
        ChatTab::All,
        ChatTab::Personal,
        ChatTab::Groups,
        ChatTab::Channels,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Personal => "Personal",
            Self::Groups => "Groups",
            Self::Channels => "Channels",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn matches(self, category: ChatCategory) -> bool {
        match self {
            Self::All => true,
            Self::Personal => category == ChatCategory::Personal,
            Self::Groups => category == ChatCategory::Group,
            Self::Channels => category == ChatCategory::Channel,
        }
    }
}

/// Returns the chats whose name contains `query` (case-insensitive) and
/// whose category belongs to `tab`, in their original order.
pub fn filter_chats<'a>(chats: &'a [Chat], query: &str, tab: ChatTab) -> Vec<&'a Chat> {
    let needle = query.to_lowercase();
    chats
        .iter()
        .filter(|chat| chat.name.to_lowercase().contains(&needle))
        .filter(|chat| tab.matches(chat.category))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatListState {
    chats: Vec<Chat>,
    query: TextInputState,
    tab: ChatTab,
    /// Highlighted row within the visible (filtered) list.
    cursor_index: Option<usize>,
    /// Chat opened in the thread view. Survives filtering.
    selected_chat_id: Option<i64>,
}

impl ChatListState {
    pub fn new(chats: Vec<Chat>) -> Self {
        let mut state = Self::default();
        state.set_chats(chats);
        state
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn query(&self) -> &TextInputState {
        &self.query
    }

    pub fn tab(&self) -> ChatTab {
        self.tab
    }

    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor_index
    }

    pub fn visible_chats(&self) -> Vec<&Chat> {
        filter_chats(&self.chats, self.query.text(), self.tab)
    }

    pub fn chat_under_cursor(&self) -> Option<&Chat> {
        let index = self.cursor_index?;
        self.visible_chats().get(index).copied()
    }

    pub fn selected_chat(&self) -> Option<&Chat> {
        let chat_id = self.selected_chat_id?;
        self.chats.iter().find(|chat| chat.chat_id == chat_id)
    }

    pub fn set_chats(&mut self, chats: Vec<Chat>) {
        self.refilter(|state| state.chats = chats);
        if self.selected_chat().is_none() {
            self.selected_chat_id = None;
        }
    }

    /// Applies an edit to the search query and re-resolves the cursor.
    pub fn edit_query(&mut self, edit: impl FnOnce(&mut TextInputState)) {
        self.refilter(|state| edit(&mut state.query));
    }

    pub fn set_tab(&mut self, tab: ChatTab) {
        self.refilter(|state| state.tab = tab);
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.set_tab(self.tab.previous());
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.cursor_index else {
            return;
        };

        let last_index = self.visible_chats().len().saturating_sub(1);
        self.cursor_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.cursor_index else {
            return;
        };

        self.cursor_index = Some(index.saturating_sub(1));
    }

    /// Opens the chat under the cursor and returns it.
    pub fn open_under_cursor(&mut self) -> Option<&Chat> {
        let chat_id = self.chat_under_cursor()?.chat_id;
        self.selected_chat_id = Some(chat_id);
        self.selected_chat()
    }

    fn refilter(&mut self, change: impl FnOnce(&mut Self)) {
        let previous_chat_id = self.chat_under_cursor().map(|chat| chat.chat_id);
        change(self);
        let cursor_index = resolve_cursor_index(&self.visible_chats(), previous_chat_id);
        self.cursor_index = cursor_index;
    }
}

fn resolve_cursor_index(visible: &[&Chat], previous_chat_id: Option<i64>) -> Option<usize> {
    if visible.is_empty() {
        return None;
    }

    previous_chat_id
        .and_then(|chat_id| visible.iter().position(|chat| chat.chat_id == chat_id))
        .or(Some(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(chat_id: i64, name: &str, category: ChatCategory) -> Chat {
        Chat {
            chat_id,
            name: name.to_owned(),
            last_message: String::new(),
            time: "12:00".to_owned(),
            unread_count: 0,
            avatar: String::new(),
            category,
            is_online: None,
        }
    }

    fn sample() -> Vec<Chat> {
        vec![
            chat(1, "Maria Petrova", ChatCategory::Personal),
            chat(2, "Dev Team", ChatCategory::Group),
            chat(3, "Design Chat", ChatCategory::Group),
            chat(4, "Tech News", ChatCategory::Channel),
            chat(5, "Ivan Sidorov", ChatCategory::Personal),
        ]
    }

    fn ids(chats: &[&Chat]) -> Vec<i64> {
        chats.iter().map(|chat| chat.chat_id).collect()
    }

    fn type_query(state: &mut ChatListState, text: &str) {
        for ch in text.chars() {
            state.edit_query(|query| {
                query.insert_char(ch);
            });
        }
    }

    #[test]
    fn empty_query_on_all_tab_keeps_every_chat_in_order() {
        let chats = sample();

        assert_eq!(ids(&filter_chats(&chats, "", ChatTab::All)), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn filter_matches_name_substring_case_insensitively() {
        let chats = sample();

        assert_eq!(ids(&filter_chats(&chats, "DE", ChatTab::All)), [2, 3]);
        assert_eq!(ids(&filter_chats(&chats, "petr", ChatTab::All)), [1]);
    }

    #[test]
    fn filter_handles_non_ascii_case() {
        let chats = vec![chat(1, "Мария Петрова", ChatCategory::Personal)];

        assert_eq!(ids(&filter_chats(&chats, "МАРИЯ", ChatTab::All)), [1]);
    }

    #[test]
    fn filter_returns_exactly_the_matching_subset() {
        let chats = sample();
        let query = "an";

        let matched = ids(&filter_chats(&chats, query, ChatTab::All));
        let expected: Vec<i64> = chats
            .iter()
            .filter(|chat| chat.name.to_lowercase().contains(query))
            .map(|chat| chat.chat_id)
            .collect();

        assert_eq!(matched, expected);
    }

    #[test]
    fn filter_combines_query_with_tab() {
        let chats = sample();

        assert_eq!(ids(&filter_chats(&chats, "", ChatTab::Groups)), [2, 3]);
        assert_eq!(ids(&filter_chats(&chats, "", ChatTab::Channels)), [4]);
        assert_eq!(ids(&filter_chats(&chats, "i", ChatTab::Personal)), [1, 5]);
        assert!(filter_chats(&chats, "news", ChatTab::Personal).is_empty());
    }

    #[test]
    fn tabs_cycle_in_both_directions() {
        assert_eq!(ChatTab::All.next(), ChatTab::Personal);
        assert_eq!(ChatTab::Channels.next(), ChatTab::All);
        assert_eq!(ChatTab::All.previous(), ChatTab::Channels);
    }

    #[test]
    fn new_state_puts_cursor_on_first_chat_without_selection() {
        let state = ChatListState::new(sample());

        assert_eq!(state.cursor_index(), Some(0));
        assert!(state.selected_chat().is_none());
    }

    #[test]
    fn empty_state_has_no_cursor() {
        let state = ChatListState::new(vec![]);

        assert_eq!(state.cursor_index(), None);
        assert!(state.chat_under_cursor().is_none());
    }

    #[test]
    fn cursor_moves_within_visible_bounds() {
        let mut state = ChatListState::new(sample());
        state.set_tab(ChatTab::Groups);

        state.select_next();
        state.select_next();
        assert_eq!(state.chat_under_cursor().map(|chat| chat.chat_id), Some(3));

        state.select_previous();
        state.select_previous();
        assert_eq!(state.chat_under_cursor().map(|chat| chat.chat_id), Some(2));
    }

    #[test]
    fn open_under_cursor_selects_chat() {
        let mut state = ChatListState::new(sample());
        state.select_next();

        let opened = state.open_under_cursor().map(|chat| chat.chat_id);

        assert_eq!(opened, Some(2));
        assert_eq!(state.selected_chat().map(|chat| chat.chat_id), Some(2));
    }

    #[test]
    fn selection_survives_filtering_it_out_of_view() {
        let mut state = ChatListState::new(sample());
        state.open_under_cursor();

        type_query(&mut state, "news");

        assert_eq!(ids(&state.visible_chats()), [4]);
        assert_eq!(state.selected_chat().map(|chat| chat.chat_id), Some(1));
    }

    #[test]
    fn cursor_follows_chat_when_it_stays_visible() {
        let mut state = ChatListState::new(sample());
        state.select_next();
        state.select_next();

        state.set_tab(ChatTab::Groups);

        assert_eq!(state.cursor_index(), Some(1));
        assert_eq!(state.chat_under_cursor().map(|chat| chat.chat_id), Some(3));
    }

    #[test]
    fn cursor_resets_to_first_when_chat_disappears() {
        let mut state = ChatListState::new(sample());
        state.select_next();

        state.set_tab(ChatTab::Channels);

        assert_eq!(state.chat_under_cursor().map(|chat| chat.chat_id), Some(4));
    }

    #[test]
    fn cursor_clears_when_nothing_matches() {
        let mut state = ChatListState::new(sample());

        type_query(&mut state, "zzz");

        assert_eq!(state.cursor_index(), None);
        assert!(state.open_under_cursor().is_none());
    }

    #[test]
    fn set_chats_drops_selection_of_missing_chat() {
        let mut state = ChatListState::new(sample());
        state.open_under_cursor();

        state.set_chats(vec![chat(9, "Other", ChatCategory::Group)]);

        assert!(state.selected_chat().is_none());
        assert_eq!(state.cursor_index(), Some(0));
    }
}
