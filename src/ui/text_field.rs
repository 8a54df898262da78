//! Single-line text field rendering shared by the compose box, search box,
//! profile editor and group dialog.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::text_input_state::TextInputState;

use super::styles;

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

pub struct TextField<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub input: &'a TextInputState,
    pub focused: bool,
}

/// Renders a bordered field and, when focused, places the terminal cursor
/// at the caret.
pub fn render_text_field(frame: &mut Frame<'_>, area: Rect, field: TextField<'_>) {
    let border_style = if field.focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let line = build_input_line(field.input, field.placeholder, field.focused);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(field.title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if field.focused {
        // Saturating math keeps very long inputs from overflowing u16.
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(field.input.cursor_display_width().min(u16::MAX as usize) as u16)
            .min(area.right().saturating_sub(2));
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn build_input_line(input: &TextInputState, placeholder: &str, is_focused: bool) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input.is_empty() && !is_focused {
        Line::from(vec![
            prompt,
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(input.text().to_owned(), styles::input_text_style()),
        ])
    }
}
