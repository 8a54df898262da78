use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::profile_state::{ProfileField, ProfileState};

use super::{
    styles,
    text_field::{render_text_field, TextField},
};

pub fn render_profile_panel(frame: &mut Frame<'_>, area: Rect, profile: &ProfileState) {
    let block = Block::default()
        .title("Profile")
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [identity_area, fields_area, contacts_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(1),
        ])
        .areas(inner);

    frame.render_widget(Paragraph::new(identity_lines(profile)), identity_area);

    if profile.is_editing() {
        render_edit_fields(frame, fields_area, profile);
    } else {
        frame.render_widget(Paragraph::new(read_only_lines(profile)), fields_area);
    }

    frame.render_widget(Paragraph::new(contact_lines(profile)), contacts_area);
}

fn identity_lines(profile: &ProfileState) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", profile.avatar()), styles::avatar_style()),
            Span::styled(profile.name().text().to_owned(), styles::chat_name_style()),
        ]),
        Line::from(Span::styled(
            profile.bio().text().to_owned(),
            styles::chat_preview_style(),
        )),
    ]
}

fn read_only_lines(profile: &ProfileState) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Name", styles::field_label_style())),
        Line::from(profile.name().text().to_owned()),
        Line::from(Span::styled("Bio", styles::field_label_style())),
        Line::from(profile.bio().text().to_owned()),
        Line::default(),
        Line::from(Span::styled("e: edit profile", styles::hint_style())),
    ]
}

fn render_edit_fields(frame: &mut Frame<'_>, area: Rect, profile: &ProfileState) {
    let [name_area, bio_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .areas(area);

    render_text_field(
        frame,
        name_area,
        TextField {
            title: "Name",
            placeholder: "Your name",
            input: profile.name(),
            focused: profile.focused_field() == ProfileField::Name,
        },
    );
    render_text_field(
        frame,
        bio_area,
        TextField {
            title: "Bio",
            placeholder: "A few words about yourself",
            input: profile.bio(),
            focused: profile.focused_field() == ProfileField::Bio,
        },
    );
}

fn contact_lines(profile: &ProfileState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Contact information",
        styles::section_title_style(),
    ))];

    lines.extend(profile.contact_rows().into_iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), styles::field_label_style()),
            Span::raw(value.to_owned()),
        ])
    }));

    lines
}
