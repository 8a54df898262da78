use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{blocklist_state::BlocklistState, contact::Contact};

use super::styles;

pub fn render_blocklist_panel(frame: &mut Frame<'_>, area: Rect, blocklist: &BlocklistState) {
    let block = Block::default()
        .title(format!("Blocked users ({})", blocklist.contacts().len()))
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style());

    if blocklist.is_empty() {
        frame.render_widget(Paragraph::new("No blocked users").block(block), area);
        return;
    }

    let items: Vec<ListItem<'static>> = blocklist
        .contacts()
        .iter()
        .map(|contact| ListItem::new(contact_line(contact)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles::selection_style());

    let mut list_state = ListState::default();
    list_state.select(blocklist.selected_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn contact_line(contact: &Contact) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<3}", contact.avatar), styles::avatar_style()),
        Span::styled(contact.name.clone(), styles::chat_name_style()),
        Span::styled("  blocked  u: unblock", styles::hint_style()),
    ])
}
