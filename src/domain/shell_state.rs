use super::{
    blocklist_state::BlocklistState, chat_list_state::ChatListState,
    emoji_picker_state::EmojiPickerState, group_dialog_state::GroupDialogState,
    profile_state::ProfileState, settings_state::SettingsState,
    text_input_state::TextInputState, thread_state::ThreadState,
};

/// Top-level view. Any panel is reachable from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Chats,
    Profile,
    Settings,
    Blocklist,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::Chats,
        Panel::Profile,
        Panel::Settings,
        Panel::Blocklist,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Chats => "Chats",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Blocklist => "Blocked",
        }
    }

    /// Digit key that switches to this panel.
    pub fn hotkey(self) -> char {
        match self {
            Self::Chats => '1',
            Self::Profile => '2',
            Self::Settings => '3',
            Self::Blocklist => '4',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.hotkey() == key)
    }
}

/// Focused pane inside the chats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    ChatList,
    Search,
    Messages,
    MessageInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    panel: Panel,
    active_pane: ActivePane,
    chat_list: ChatListState,
    thread: ThreadState,
    message_input: TextInputState,
    emoji_picker: EmojiPickerState,
    profile: ProfileState,
    settings: SettingsState,
    blocklist: BlocklistState,
    group_dialog: GroupDialogState,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            panel: Panel::default(),
            active_pane: ActivePane::default(),
            chat_list: ChatListState::default(),
            thread: ThreadState::default(),
            message_input: TextInputState::default(),
            emoji_picker: EmojiPickerState::default(),
            profile: ProfileState::new(Default::default()),
            settings: SettingsState::default(),
            blocklist: BlocklistState::default(),
            group_dialog: GroupDialogState::default(),
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Switches the visible panel. Nothing else changes.
    pub fn set_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn chat_list(&self) -> &ChatListState {
        &self.chat_list
    }

    pub fn chat_list_mut(&mut self) -> &mut ChatListState {
        &mut self.chat_list
    }

    pub fn thread(&self) -> &ThreadState {
        &self.thread
    }

    pub fn thread_mut(&mut self) -> &mut ThreadState {
        &mut self.thread
    }

    pub fn message_input(&self) -> &TextInputState {
        &self.message_input
    }

    pub fn message_input_mut(&mut self) -> &mut TextInputState {
        &mut self.message_input
    }

    /// Thread and compose box borrowed together for sending.
    pub fn thread_and_input_mut(&mut self) -> (&mut ThreadState, &mut TextInputState) {
        (&mut self.thread, &mut self.message_input)
    }

    pub fn emoji_picker(&self) -> &EmojiPickerState {
        &self.emoji_picker
    }

    pub fn emoji_picker_mut(&mut self) -> &mut EmojiPickerState {
        &mut self.emoji_picker
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileState {
        &mut self.profile
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsState {
        &mut self.settings
    }

    pub fn blocklist(&self) -> &BlocklistState {
        &self.blocklist
    }

    pub fn blocklist_mut(&mut self) -> &mut BlocklistState {
        &mut self.blocklist
    }

    pub fn group_dialog(&self) -> &GroupDialogState {
        &self.group_dialog
    }

    pub fn group_dialog_mut(&mut self) -> &mut GroupDialogState {
        &mut self.group_dialog
    }

    /// True while keystrokes go into a text field or the emoji picker.
    pub fn is_typing(&self) -> bool {
        self.group_dialog.is_open()
            || match self.panel {
                Panel::Chats => {
                    self.emoji_picker.is_open()
                        || matches!(
                            self.active_pane,
                            ActivePane::Search | ActivePane::MessageInput
                        )
                }
                Panel::Profile => self.profile.is_editing(),
                Panel::Settings | Panel::Blocklist => false,
            }
    }
}
