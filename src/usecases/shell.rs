use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        shell_state::{ActivePane, Panel, ShellState},
        text_input_state::TextInputState,
    },
    infra::contracts::Clock,
};

use super::{
    contracts::ShellOrchestrator,
    send_message::{send_message, SendMessageError},
};

pub struct DefaultShellOrchestrator<C>
where
    C: Clock,
{
    state: ShellState,
    clock: C,
}

impl<C> DefaultShellOrchestrator<C>
where
    C: Clock,
{
    pub fn with_state(state: ShellState, clock: C) -> Self {
        Self { state, clock }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if self.state.group_dialog().is_open() {
            self.handle_group_dialog_key(&key);
            return;
        }

        if !self.state.is_typing() && self.handle_global_key(&key) {
            return;
        }

        match self.state.panel() {
            Panel::Chats => self.handle_chats_key(&key),
            Panel::Profile => self.handle_profile_key(&key),
            Panel::Settings => self.handle_settings_key(&key),
            Panel::Blocklist => self.handle_blocklist_key(&key),
        }
    }

    /// Keys available whenever no text field has focus.
    fn handle_global_key(&mut self, key: &KeyInput) -> bool {
        let Some(ch) = key.printable_char() else {
            return false;
        };

        if ch == 'q' {
            self.state.stop();
            return true;
        }

        if ch == 'n' {
            self.state.group_dialog_mut().open();
            tracing::debug!("new group dialog opened");
            return true;
        }

        if let Some(panel) = Panel::from_hotkey(ch) {
            tracing::debug!(panel = panel.label(), "panel switched");
            self.state.set_panel(panel);
            return true;
        }

        false
    }

    fn handle_chats_key(&mut self, key: &KeyInput) {
        if self.state.emoji_picker().is_open() {
            self.handle_emoji_picker_key(key);
            return;
        }

        match self.state.active_pane() {
            ActivePane::ChatList => self.handle_chat_list_key(key),
            ActivePane::Search => match key.key.as_str() {
                "enter" | "esc" | "down" => self.state.set_active_pane(ActivePane::ChatList),
                _ => self
                    .state
                    .chat_list_mut()
                    .edit_query(|query| apply_text_edit(query, key)),
            },
            ActivePane::Messages => match key.key.as_str() {
                "j" | "down" => self.state.thread_mut().select_next(),
                "k" | "up" => self.state.thread_mut().select_previous(),
                "i" => self.state.set_active_pane(ActivePane::MessageInput),
                "e" => self.state.emoji_picker_mut().toggle(),
                "h" | "left" | "esc" => self.state.set_active_pane(ActivePane::ChatList),
                _ => {}
            },
            ActivePane::MessageInput => match key.key.as_str() {
                "enter" => self.send_composed_message(),
                "esc" => self.state.set_active_pane(ActivePane::Messages),
                "e" if key.ctrl => self.state.emoji_picker_mut().toggle(),
                _ => apply_text_edit(self.state.message_input_mut(), key),
            },
        }
    }

    fn handle_chat_list_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "j" | "down" => self.state.chat_list_mut().select_next(),
            "k" | "up" => self.state.chat_list_mut().select_previous(),
            "tab" | "]" => self.state.chat_list_mut().next_tab(),
            "backtab" | "[" => self.state.chat_list_mut().previous_tab(),
            "/" => self.state.set_active_pane(ActivePane::Search),
            "enter" | "l" | "right" => {
                let opened = self
                    .state
                    .chat_list_mut()
                    .open_under_cursor()
                    .map(|chat| chat.chat_id);
                if let Some(chat_id) = opened {
                    tracing::debug!(chat_id, "chat opened");
                    self.state.set_active_pane(ActivePane::Messages);
                }
            }
            "i" => {
                if self.state.chat_list().selected_chat().is_some() {
                    self.state.set_active_pane(ActivePane::MessageInput);
                }
            }
            _ => {}
        }
    }

    fn handle_emoji_picker_key(&mut self, key: &KeyInput) {
        let picker = self.state.emoji_picker_mut();
        match key.key.as_str() {
            "h" | "left" => picker.move_left(),
            "l" | "right" => picker.move_right(),
            "k" | "up" => picker.move_up(),
            "j" | "down" => picker.move_down(),
            "e" if key.ctrl => picker.close(),
            "esc" => picker.close(),
            "enter" => {
                let emoji = picker.highlighted();
                picker.close();
                if !self.state.message_input_mut().append_str(emoji) {
                    tracing::debug!("emoji dropped: compose field is full");
                }
                self.state.set_active_pane(ActivePane::MessageInput);
            }
            _ => {}
        }
    }

    fn send_composed_message(&mut self) {
        let (thread, input) = self.state.thread_and_input_mut();
        match send_message(thread, input, &self.clock) {
            Ok(message) => {
                tracing::info!(
                    message_id = message.id,
                    chars = message.text.chars().count(),
                    "message appended"
                );
            }
            Err(SendMessageError::EmptyMessage) => {
                tracing::debug!("empty message ignored");
            }
        }
    }

    fn handle_profile_key(&mut self, key: &KeyInput) {
        let profile = self.state.profile_mut();

        if !profile.is_editing() {
            if key.printable_char() == Some('e') {
                profile.start_edit();
            }
            return;
        }

        match key.key.as_str() {
            "tab" | "backtab" => profile.toggle_field(),
            "enter" => {
                profile.save();
                tracing::info!(
                    name_chars = profile.name().text().chars().count(),
                    bio_chars = profile.bio().text().chars().count(),
                    "profile saved"
                );
            }
            "esc" => profile.cancel(),
            _ => {
                if let Some(input) = profile.focused_input_mut() {
                    apply_text_edit(input, key);
                }
            }
        }
    }

    fn handle_settings_key(&mut self, key: &KeyInput) {
        let settings = self.state.settings_mut();
        match key.key.as_str() {
            "j" | "down" => settings.select_next(),
            "k" | "up" => settings.select_previous(),
            " " | "enter" => {
                if let Some(row) = settings.activate() {
                    tracing::debug!(setting = row.title, value = row.value.label(), "setting changed");
                }
            }
            _ => {}
        }
    }

    fn handle_blocklist_key(&mut self, key: &KeyInput) {
        let blocklist = self.state.blocklist_mut();
        match key.key.as_str() {
            "j" | "down" => blocklist.select_next(),
            "k" | "up" => blocklist.select_previous(),
            "u" | "enter" => {
                let Some(contact_id) = blocklist.selected_contact().map(|c| c.contact_id) else {
                    return;
                };
                if blocklist.unblock(contact_id).is_some() {
                    tracing::info!(contact_id, "contact unblocked");
                }
            }
            _ => {}
        }
    }

    fn handle_group_dialog_key(&mut self, key: &KeyInput) {
        let dialog = self.state.group_dialog_mut();
        match key.key.as_str() {
            "tab" | "backtab" => dialog.toggle_field(),
            "esc" => dialog.close(),
            "enter" => {
                tracing::info!(
                    name_chars = dialog.name().text().chars().count(),
                    "group creation requested; groups are not supported"
                );
                dialog.close();
            }
            _ => apply_text_edit(dialog.focused_input_mut(), key),
        }
    }
}

impl<C> ShellOrchestrator for DefaultShellOrchestrator<C>
where
    C: Clock,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        Ok(())
    }
}

/// Applies a line-editing key to a text field. Unknown keys are ignored.
fn apply_text_edit(input: &mut TextInputState, key: &KeyInput) {
    match key.key.as_str() {
        "backspace" => input.delete_char_before(),
        "delete" => input.delete_char_at(),
        "left" => input.move_cursor_left(),
        "right" => input.move_cursor_right(),
        "home" => input.move_cursor_home(),
        "end" => input.move_cursor_end(),
        "u" if key.ctrl => input.clear(),
        _ => {
            if let Some(ch) = key.printable_char() {
                if !input.insert_char(ch) {
                    tracing::debug!("input ignored: field is full");
                }
            }
        }
    }
}
