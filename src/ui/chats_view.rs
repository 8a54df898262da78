//! Chats panel: sidebar (search, tabs, chat list) and the open thread.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    chat::Chat,
    chat_list_state::{ChatListState, ChatTab},
    emoji_picker_state::{EmojiPickerState, EMOJI_PALETTE},
    shell_state::{ActivePane, ShellState},
};

use super::{
    message_rendering::{build_message_list_elements, element_to_list_item},
    styles,
    text_field::{render_text_field, TextField},
};

pub fn render_chats_panel(frame: &mut Frame<'_>, area: Rect, state: &mut ShellState) {
    let [sidebar_area, thread_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .areas(area);

    render_sidebar(frame, sidebar_area, state);
    render_thread(frame, thread_area, state);
}

fn border_style(is_active: bool) -> ratatui::style::Style {
    if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    }
}

fn render_sidebar(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let [search_area, tabs_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

    let active_pane = state.active_pane();
    let chat_list = state.chat_list();

    render_text_field(
        frame,
        search_area,
        TextField {
            title: "Search",
            placeholder: "Press / to search chats",
            input: chat_list.query(),
            focused: active_pane == ActivePane::Search,
        },
    );

    frame.render_widget(chat_tabs(chat_list.tab()), tabs_area);

    render_chat_list(
        frame,
        list_area,
        chat_list,
        active_pane == ActivePane::ChatList,
    );
}

fn chat_tabs(active: ChatTab) -> Tabs<'static> {
    Tabs::new(ChatTab::ALL.iter().map(|tab| tab.label()))
        .select(active.index())
        .style(styles::tab_style())
        .highlight_style(styles::active_tab_style())
        .divider("|")
}

fn render_chat_list(frame: &mut Frame<'_>, area: Rect, chat_list: &ChatListState, is_active: bool) {
    let visible = chat_list.visible_chats();
    let title = format!("Chats ({})", visible.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    if visible.is_empty() {
        frame.render_widget(Paragraph::new("No chats found").block(block), area);
        return;
    }

    // Inner width = area width - 2 (borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let selected_id = chat_list.selected_chat().map(|chat| chat.chat_id);
    let items: Vec<ListItem<'static>> = visible
        .iter()
        .map(|chat| chat_list_item(chat, selected_id == Some(chat.chat_id), inner_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles::selection_style());

    let mut list_state = ListState::default();
    list_state.select(chat_list.cursor_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn chat_list_item(chat: &Chat, is_selected: bool, width: usize) -> ListItem<'static> {
    ListItem::new(chat_list_item_lines(chat, is_selected, width).to_vec())
}

/// Two rows per chat: avatar, name and time; then preview and badges.
fn chat_list_item_lines(chat: &Chat, is_selected: bool, width: usize) -> [Line<'static>; 2] {
    let marker = if is_selected { "▌" } else { " " };
    let avatar = format!("{marker}{:<2} ", chat.avatar);
    let indent = " ".repeat(avatar.width());

    let name_padding = width.saturating_sub(avatar.width() + chat.name.width() + chat.time.width());
    let header = Line::from(vec![
        Span::styled(avatar, styles::avatar_style()),
        Span::styled(chat.name.clone(), styles::chat_name_style()),
        Span::raw(" ".repeat(name_padding)),
        Span::styled(chat.time.clone(), styles::timestamp_style()),
    ]);

    let unread_badge = if chat.unread_count > 0 {
        format!(" [{}]", chat.unread_count)
    } else {
        String::new()
    };
    let online_indicator = if chat.is_online() { " \u{25CF}" } else { "" };

    let suffix_len = unread_badge.width() + online_indicator.width();
    let available = width.saturating_sub(indent.width() + suffix_len);
    let (preview, padding) = fit_preview(&chat.last_message, available);

    let mut spans = vec![
        Span::raw(indent),
        Span::styled(preview, styles::chat_preview_style()),
        Span::raw(" ".repeat(padding)),
    ];
    if !unread_badge.is_empty() {
        spans.push(Span::styled(unread_badge, styles::unread_count_style()));
    }
    if !online_indicator.is_empty() {
        spans.push(Span::styled(
            online_indicator.to_owned(),
            styles::online_indicator_style(),
        ));
    }

    [header, Line::from(spans)]
}

/// Truncates `preview` with an ellipsis to fit `available` columns and
/// returns the padding needed to right-align the badges.
fn fit_preview(preview: &str, available: usize) -> (String, usize) {
    let normalized = preview.split_whitespace().collect::<Vec<_>>().join(" ");
    let width = normalized.width();

    if width <= available {
        return (normalized, available - width);
    }

    let budget = available.saturating_sub(3);
    let mut used = 0;
    let mut truncated = String::new();
    for ch in normalized.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }
    truncated.push_str("...");
    let padding = available.saturating_sub(truncated.width());

    (truncated, padding)
}

fn render_thread(frame: &mut Frame<'_>, area: Rect, state: &mut ShellState) {
    let Some(chat) = state.chat_list().selected_chat().cloned() else {
        let placeholder = Paragraph::new("Select a chat to start messaging").block(
            Block::default()
                .title("Messages")
                .borders(Borders::ALL)
                .border_style(styles::inactive_panel_border_style()),
        );
        frame.render_widget(placeholder, area);
        return;
    };

    let picker_height = if state.emoji_picker().is_open() {
        emoji_grid_height(state.emoji_picker())
    } else {
        0
    };

    let [header_area, messages_area, picker_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(picker_height),
            Constraint::Length(3),
        ])
        .areas(area);

    render_thread_header(frame, header_area, &chat);
    render_messages(frame, messages_area, state, &chat.name);

    if picker_height > 0 {
        render_emoji_picker(frame, picker_area, state.emoji_picker());
    }

    render_text_field(
        frame,
        input_area,
        TextField {
            title: "Message",
            placeholder: "Press 'i' to type a message...",
            input: state.message_input(),
            focused: state.active_pane() == ActivePane::MessageInput
                && !state.emoji_picker().is_open(),
        },
    );
}

fn render_thread_header(frame: &mut Frame<'_>, area: Rect, chat: &Chat) {
    let line = Line::from(vec![
        Span::styled(format!("{} ", chat.avatar), styles::avatar_style()),
        Span::styled(chat.name.clone(), styles::chat_name_style()),
        Span::raw("  "),
        Span::styled(
            chat.presence_label(),
            styles::presence_style(chat.is_online()),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(header, area);
}

fn render_messages(frame: &mut Frame<'_>, area: Rect, state: &mut ShellState, contact_name: &str) {
    let block = Block::default()
        .title("Messages")
        .borders(Borders::ALL)
        .border_style(border_style(state.active_pane() == ActivePane::Messages));

    let messages = state.thread().messages();
    if messages.is_empty() {
        frame.render_widget(Paragraph::new("No messages yet").block(block), area);
        return;
    }

    let elements = build_message_list_elements(messages, contact_name);
    let items: Vec<ListItem<'static>> = elements.iter().map(element_to_list_item).collect();

    // Calculate viewport height (area height minus borders)
    let viewport_height = area.height.saturating_sub(2) as usize;
    let selected_index = state.thread().selected_index();

    if let Some(idx) = selected_index {
        state
            .thread_mut()
            .update_scroll_offset(idx, viewport_height);
    }

    // The offset counts items while the viewport counts rows, so the
    // selection is always passed on for ratatui to keep it in view. Only
    // the focused pane shows the highlight.
    let highlight = if state.active_pane() == ActivePane::Messages {
        styles::selection_style()
    } else {
        ratatui::style::Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    let mut list_state = ListState::default();
    list_state.select(selected_index);
    *list_state.offset_mut() = state.thread().scroll_offset();
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn emoji_grid_height(picker: &EmojiPickerState) -> u16 {
    let rows = EMOJI_PALETTE.len().div_ceil(picker.columns());
    rows as u16 + 2
}

fn render_emoji_picker(frame: &mut Frame<'_>, area: Rect, picker: &EmojiPickerState) {
    let lines: Vec<Line<'static>> = emoji_grid_lines(picker);

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title("Emoji (Enter: insert, Esc: close)")
            .borders(Borders::ALL)
            .border_style(styles::active_panel_border_style()),
    );
    frame.render_widget(grid, area);
}

fn emoji_grid_lines(picker: &EmojiPickerState) -> Vec<Line<'static>> {
    EMOJI_PALETTE
        .chunks(picker.columns())
        .enumerate()
        .map(|(row, emojis)| {
            let spans: Vec<Span<'static>> = emojis
                .iter()
                .enumerate()
                .map(|(col, emoji)| {
                    let index = row * picker.columns() + col;
                    let cell = format!(" {emoji} ");
                    if index == picker.cursor() {
                        Span::styled(cell, styles::emoji_highlight_style())
                    } else {
                        Span::raw(cell)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
