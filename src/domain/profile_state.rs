use super::{
    profile::{initials, Profile},
    text_input_state::TextInputState,
};

/// Editable field of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    Name,
    Bio,
}

/// Profile panel. Name and bio are bound directly to the form fields, so
/// leaving edit mode (save or cancel) never transforms or reverts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    name: TextInputState,
    bio: TextInputState,
    phone: String,
    email: String,
    location: String,
    editing: bool,
    focused_field: ProfileField,
}

impl ProfileState {
    pub fn new(profile: Profile) -> Self {
        Self {
            name: TextInputState::with_text(profile.name),
            bio: TextInputState::with_text(profile.bio),
            phone: profile.phone,
            email: profile.email,
            location: profile.location,
            editing: false,
            focused_field: ProfileField::Name,
        }
    }

    pub fn name(&self) -> &TextInputState {
        &self.name
    }

    pub fn bio(&self) -> &TextInputState {
        &self.bio
    }

    pub fn avatar(&self) -> String {
        initials(self.name.text())
    }

    /// Static contact rows: phone, email, location.
    pub fn contact_rows(&self) -> [(&'static str, &str); 3] {
        [
            ("Phone", &self.phone),
            ("Email", &self.email),
            ("Location", &self.location),
        ]
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn focused_field(&self) -> ProfileField {
        self.focused_field
    }

    pub fn start_edit(&mut self) {
        self.editing = true;
        self.focused_field = ProfileField::Name;
    }

    /// Leaves edit mode keeping the entered text as is.
    pub fn save(&mut self) {
        self.editing = false;
    }

    /// Leaves edit mode. Edits are bound directly, so nothing is reverted.
    pub fn cancel(&mut self) {
        self.editing = false;
    }

    pub fn toggle_field(&mut self) {
        self.focused_field = match self.focused_field {
            ProfileField::Name => ProfileField::Bio,
            ProfileField::Bio => ProfileField::Name,
        };
    }

    /// The field receiving key input. `None` outside edit mode.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        if !self.editing {
            return None;
        }

        Some(match self.focused_field {
            ProfileField::Name => &mut self.name,
            ProfileField::Bio => &mut self.bio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Alexander Ivanov".to_owned(),
            bio: "Developer | Moscow".to_owned(),
            phone: "+7 900 123-45-67".to_owned(),
            email: "alex@example.com".to_owned(),
            location: "Moscow, Russia".to_owned(),
        }
    }

    #[test]
    fn starts_in_view_mode() {
        let mut state = ProfileState::new(profile());

        assert!(!state.is_editing());
        assert!(state.focused_input_mut().is_none());
        assert_eq!(state.avatar(), "AI");
    }

    #[test]
    fn edits_are_applied_in_place_and_kept_on_save() {
        let mut state = ProfileState::new(profile());
        state.start_edit();

        if let Some(field) = state.focused_input_mut() {
            field.set_text("Alex");
        }
        state.save();

        assert!(!state.is_editing());
        assert_eq!(state.name().text(), "Alex");
        assert_eq!(state.avatar(), "A");
    }

    #[test]
    fn cancel_leaves_edit_mode_without_reverting() {
        let mut state = ProfileState::new(profile());
        state.start_edit();
        state.toggle_field();

        if let Some(field) = state.focused_input_mut() {
            field.append_str("!");
        }
        state.cancel();

        assert!(!state.is_editing());
        assert_eq!(state.bio().text(), "Developer | Moscow!");
    }

    #[test]
    fn save_accepts_empty_name() {
        let mut state = ProfileState::new(profile());
        state.start_edit();

        if let Some(field) = state.focused_input_mut() {
            field.clear();
        }
        state.save();

        assert_eq!(state.name().text(), "");
    }

    #[test]
    fn toggle_field_switches_between_name_and_bio() {
        let mut state = ProfileState::new(profile());
        state.start_edit();

        state.toggle_field();
        assert_eq!(state.focused_field(), ProfileField::Bio);

        state.toggle_field();
        assert_eq!(state.focused_field(), ProfileField::Name);
    }

    #[test]
    fn start_edit_focuses_name_field() {
        let mut state = ProfileState::new(profile());
        state.start_edit();
        state.toggle_field();
        state.save();

        state.start_edit();

        assert_eq!(state.focused_field(), ProfileField::Name);
    }

    #[test]
    fn contact_rows_expose_static_details() {
        let state = ProfileState::new(profile());

        let rows = state.contact_rows();

        assert_eq!(rows[0], ("Phone", "+7 900 123-45-67"));
        assert_eq!(rows[1], ("Email", "alex@example.com"));
        assert_eq!(rows[2], ("Location", "Moscow, Russia"));
    }
}
