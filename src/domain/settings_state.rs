//! Settings panel rows. Values live in memory only and affect nothing else.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Toggle(bool),
    /// One of `options`, by index.
    Choice {
        options: &'static [&'static str],
        index: usize,
    },
}

impl SettingValue {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle(true) => "on",
            Self::Toggle(false) => "off",
            Self::Choice { options, index } => options.get(*index).copied().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
    pub title: &'static str,
    pub description: &'static str,
    pub value: SettingValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSection {
    pub title: &'static str,
    pub rows: Vec<SettingRow>,
}

const LAST_SEEN_OPTIONS: &[&str] = &["Everyone", "Contacts", "Nobody"];
const FONT_SIZE_OPTIONS: &[&str] = &["Small", "Medium", "Large"];

fn toggle(title: &'static str, description: &'static str, on: bool) -> SettingRow {
    SettingRow {
        title,
        description,
        value: SettingValue::Toggle(on),
    }
}

fn choice(
    title: &'static str,
    description: &'static str,
    options: &'static [&'static str],
    index: usize,
) -> SettingRow {
    SettingRow {
        title,
        description,
        value: SettingValue::Choice { options, index },
    }
}

fn default_sections() -> Vec<SettingsSection> {
    vec![
        SettingsSection {
            title: "Notifications",
            rows: vec![
                toggle("Message sound", "Play a sound on new messages", true),
                toggle("Push notifications", "Show notifications on this device", true),
                toggle("Message preview", "Show message text in notifications", false),
            ],
        },
        SettingsSection {
            title: "Privacy",
            rows: vec![
                choice("Last seen", "Who can see when I was online", LAST_SEEN_OPTIONS, 0),
                toggle("Online status", "Show when I am online", true),
                toggle("Read receipts", "Send read status", true),
            ],
        },
        SettingsSection {
            title: "Appearance",
            rows: vec![
                toggle("Dark theme", "Use the dark color scheme", true),
                choice("Font size", "Choose the text size", FONT_SIZE_OPTIONS, 1),
            ],
        },
        SettingsSection {
            title: "Calls",
            rows: vec![
                toggle("Incoming calls", "Allow incoming calls", true),
                toggle("Video calls", "Allow video calls", true),
            ],
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    sections: Vec<SettingsSection>,
    /// Flat row index across all sections.
    cursor: usize,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            cursor: 0,
        }
    }
}

impl SettingsState {
    pub fn sections(&self) -> &[SettingsSection] {
        &self.sections
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|section| section.rows.len()).sum()
    }

    pub fn select_next(&mut self) {
        self.cursor = (self.cursor + 1).min(self.row_count().saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn row(&self, flat_index: usize) -> Option<&SettingRow> {
        self.sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .nth(flat_index)
    }

    /// Flips the toggle or advances the choice under the cursor.
    /// Returns the row after the change.
    pub fn activate(&mut self) -> Option<&SettingRow> {
        let row = self
            .sections
            .iter_mut()
            .flat_map(|section| section.rows.iter_mut())
            .nth(self.cursor)?;

        match &mut row.value {
            SettingValue::Toggle(on) => *on = !*on,
            SettingValue::Choice { options, index } => *index = (*index + 1) % options.len(),
        }

        Some(row)
    }
}
