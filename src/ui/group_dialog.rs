//! "New group" overlay. Purely presentational; submitting creates nothing.

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::domain::group_dialog_state::{GroupDialogField, GroupDialogState};

use super::{
    styles,
    text_field::{render_text_field, TextField},
};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 10;

pub fn render_group_dialog(frame: &mut Frame<'_>, dialog: &GroupDialogState) {
    let area = centered_rect(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("New group")
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, members_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

    render_text_field(
        frame,
        name_area,
        TextField {
            title: "Group name",
            placeholder: "Enter a name",
            input: dialog.name(),
            focused: dialog.focused_field() == GroupDialogField::Name,
        },
    );
    render_text_field(
        frame,
        members_area,
        TextField {
            title: "Members",
            placeholder: "Add people",
            input: dialog.members(),
            focused: dialog.focused_field() == GroupDialogField::Members,
        },
    );

    let hint = Paragraph::new(Line::styled(
        "Tab: switch field | Enter: create | Esc: cancel",
        styles::hint_style(),
    ));
    frame.render_widget(hint, hint_area);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
