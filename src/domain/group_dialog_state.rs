use super::text_input_state::TextInputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupDialogField {
    #[default]
    Name,
    Members,
}

/// "New group" dialog. It collects input but creates nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupDialogState {
    open: bool,
    name: TextInputState,
    members: TextInputState,
    focused_field: GroupDialogField,
}

impl GroupDialogState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn name(&self) -> &TextInputState {
        &self.name
    }

    pub fn members(&self) -> &TextInputState {
        &self.members
    }

    pub fn focused_field(&self) -> GroupDialogField {
        self.focused_field
    }

    /// Opens the dialog with blank fields.
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle_field(&mut self) {
        self.focused_field = match self.focused_field {
            GroupDialogField::Name => GroupDialogField::Members,
            GroupDialogField::Members => GroupDialogField::Name,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInputState {
        match self.focused_field {
            GroupDialogField::Name => &mut self.name,
            GroupDialogField::Members => &mut self.members,
        }
    }
}
