use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::domain::settings_state::{SettingRow, SettingValue, SettingsState};

use super::styles;

pub fn render_settings_panel(frame: &mut Frame<'_>, area: Rect, settings: &SettingsState) {
    let (items, selected) = build_settings_items(settings);

    let list = List::new(items)
        .block(
            Block::default()
                .title("Settings")
                .borders(Borders::ALL)
                .border_style(styles::active_panel_border_style()),
        )
        .highlight_style(styles::selection_style());

    let mut list_state = ListState::default();
    list_state.select(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Flattens sections into list items. Returns the visual index of the row
/// under the cursor, accounting for section headers.
fn build_settings_items(settings: &SettingsState) -> (Vec<ListItem<'static>>, Option<usize>) {
    let mut items = Vec::new();
    let mut selected = None;
    let mut flat_index = 0;

    for section in settings.sections() {
        items.push(ListItem::new(Line::from(Span::styled(
            section.title,
            styles::section_title_style(),
        ))));

        for row in &section.rows {
            if flat_index == settings.cursor() {
                selected = Some(items.len());
            }
            items.push(ListItem::new(setting_row_lines(row)));
            flat_index += 1;
        }
    }

    (items, selected)
}

fn setting_row_lines(row: &SettingRow) -> Vec<Line<'static>> {
    let value_style = match row.value {
        SettingValue::Toggle(true) => styles::setting_on_style(),
        SettingValue::Toggle(false) => styles::setting_off_style(),
        SettingValue::Choice { .. } => styles::setting_choice_style(),
    };

    vec![
        Line::from(vec![
            Span::raw(format!("  {:<20}", row.title)),
            Span::styled(format!("[{}]", row.value.label()), value_style),
        ]),
        Line::from(Span::styled(
            format!("  {}", row.description),
            styles::hint_style(),
        )),
    ]
}
