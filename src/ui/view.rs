use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::shell_state::{ActivePane, Panel, ShellState};

use super::{
    blocklist_view::render_blocklist_panel, chats_view::render_chats_panel,
    group_dialog::render_group_dialog, profile_view::render_profile_panel,
    settings_view::render_settings_panel, styles,
};

/// Width of the navigation rail: hotkey, label and borders.
const NAV_WIDTH: u16 = 16;

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [nav_area, panel_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(NAV_WIDTH), Constraint::Min(1)])
        .areas(content_area);

    render_nav_rail(frame, nav_area, state.panel());

    match state.panel() {
        Panel::Chats => render_chats_panel(frame, panel_area, state),
        Panel::Profile => render_profile_panel(frame, panel_area, state.profile()),
        Panel::Settings => render_settings_panel(frame, panel_area, state.settings()),
        Panel::Blocklist => render_blocklist_panel(frame, panel_area, state.blocklist()),
    }

    let status = Paragraph::new(status_line(state)).style(styles::status_line_style());
    frame.render_widget(status, status_area);

    if state.group_dialog().is_open() {
        render_group_dialog(frame, state.group_dialog());
    }
}

fn render_nav_rail(frame: &mut Frame<'_>, area: Rect, active: Panel) {
    let rail = Paragraph::new(nav_lines(active)).block(
        Block::default()
            .title("chatdeck")
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(rail, area);
}

fn nav_lines(active: Panel) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Panel::ALL
        .iter()
        .map(|panel| {
            let style = if *panel == active {
                styles::nav_active_style()
            } else {
                styles::nav_item_style()
            };
            Line::from(Span::styled(
                format!(" {} {} ", panel.hotkey(), panel.label()),
                style,
            ))
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(" n New group", styles::hint_style())));
    lines
}

fn status_line(state: &ShellState) -> String {
    if state.group_dialog().is_open() {
        return "Tab: switch field | Enter: create | Esc: cancel".to_owned();
    }

    let hint = match state.panel() {
        Panel::Chats if state.emoji_picker().is_open() => {
            "arrows/hjkl: pick emoji | Enter: insert | Esc: close"
        }
        Panel::Chats => match state.active_pane() {
            ActivePane::ChatList => {
                "j/k: navigate | l/Enter: open | /: search | Tab/[ ]: tabs | i: compose | q: quit"
            }
            ActivePane::Search => "type to filter | Enter/Esc: back to list",
            ActivePane::Messages => {
                "j/k: navigate | i: compose | e: emoji | h/Esc: back to chats | q: quit"
            }
            ActivePane::MessageInput => "Enter: send | Ctrl+E: emoji | Esc: cancel",
        },
        Panel::Profile if state.profile().is_editing() => {
            "Tab: switch field | Enter: save | Esc: cancel"
        }
        Panel::Profile => "e: edit | 1-4: switch panel | q: quit",
        Panel::Settings => "j/k: navigate | Space/Enter: change | 1-4: switch panel | q: quit",
        Panel::Blocklist => "j/k: navigate | u/Enter: unblock | 1-4: switch panel | q: quit",
    };

    format!("{} | {hint}", state.panel().label())
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        infra::{
            config::{ProfileConfig, UiConfig},
            seed::BuiltinSeed,
            stubs::FixedClock,
        },
        usecases::{seed::build_shell_state, send_message::send_message},
    };

    fn seeded_state() -> ShellState {
        build_shell_state(&BuiltinSeed, &ProfileConfig::default(), &UiConfig::default())
            .expect("builtin seed is valid")
    }

    fn render_to_text(state: &mut ShellState) -> String {
        render_sized(state, 120, 30)
    }

    fn render_sized(state: &mut ShellState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("draw must succeed");

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn status_line_names_panel_and_hints() {
        let mut state = ShellState::default();
        assert!(status_line(&state).starts_with("Chats | j/k: navigate"));

        state.set_panel(Panel::Blocklist);
        assert!(status_line(&state).contains("u/Enter: unblock"));
    }

    #[test]
    fn status_line_follows_compose_focus() {
        let mut state = ShellState::default();
        state.set_active_pane(ActivePane::MessageInput);

        assert!(status_line(&state).contains("Enter: send"));
    }

    #[test]
    fn nav_rail_lists_every_panel_with_hotkey() {
        let lines = nav_lines(Panel::Settings);
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(text[0], " 1 Chats ");
        assert_eq!(text[3], " 4 Blocked ");
        assert_eq!(lines[2].spans[0].style, styles::nav_active_style());
    }

    #[test]
    fn renders_seeded_chat_list() {
        let mut state = seeded_state();

        let screen = render_to_text(&mut state);

        assert!(screen.contains("Maria Petrova"));
        assert!(screen.contains("Tech News"));
        assert!(screen.contains("Select a chat to start messaging"));
    }

    #[test]
    fn renders_open_thread_with_presence() {
        let mut state = seeded_state();
        state.chat_list_mut().open_under_cursor();

        let screen = render_to_text(&mut state);

        assert!(screen.contains("online"));
        assert!(screen.contains("Cool! Tell me more?"));
    }

    #[test]
    fn renders_every_panel_without_panicking() {
        let mut state = seeded_state();

        for panel in Panel::ALL {
            state.set_panel(panel);
            let screen = render_to_text(&mut state);
            assert!(screen.contains(panel.label()));
        }
    }

    #[test]
    fn renders_group_dialog_over_panel() {
        let mut state = seeded_state();
        state.group_dialog_mut().open();

        let screen = render_to_text(&mut state);

        assert!(screen.contains("New group"));
        assert!(screen.contains("Group name"));
    }

    #[test]
    fn renders_empty_blocklist_state() {
        let mut state = seeded_state();
        state.set_panel(Panel::Blocklist);
        for id in [1, 2] {
            state.blocklist_mut().unblock(id);
        }

        let screen = render_to_text(&mut state);

        assert!(screen.contains("No blocked users"));
    }

    #[test]
    fn sent_message_stays_visible_on_short_terminal() {
        let mut state = seeded_state();
        state.chat_list_mut().open_under_cursor();
        state.set_active_pane(ActivePane::MessageInput);
        state.message_input_mut().set_text("freshly sent");
        let (thread, input) = state.thread_and_input_mut();
        send_message(thread, input, &FixedClock("15:45")).expect("non-empty text must send");

        let screen = render_sized(&mut state, 100, 14);

        assert!(screen.contains("freshly sent"));
    }

    #[test]
    fn newest_message_visible_after_several_sends() {
        let mut state = seeded_state();
        state.chat_list_mut().open_under_cursor();
        state.set_active_pane(ActivePane::MessageInput);
        for text in ["one", "two", "three", "last of many"] {
            state.message_input_mut().set_text(text);
            let (thread, input) = state.thread_and_input_mut();
            send_message(thread, input, &FixedClock("15:45")).expect("must send");
            let _ = render_sized(&mut state, 100, 14);
        }

        let screen = render_sized(&mut state, 100, 14);

        assert!(screen.contains("last of many"));
    }
}
