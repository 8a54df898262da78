use super::contact::Contact;

/// Blocked contacts. Every contact held here has `blocked == true`;
/// unblocking removes it from the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlocklistState {
    contacts: Vec<Contact>,
    selected_index: Option<usize>,
}

impl BlocklistState {
    /// Keeps only the contacts flagged as blocked.
    pub fn new(contacts: Vec<Contact>) -> Self {
        let contacts: Vec<Contact> = contacts
            .into_iter()
            .filter(|contact| contact.blocked)
            .collect();
        let selected_index = if contacts.is_empty() { None } else { Some(0) };
        Self {
            contacts,
            selected_index,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected_index.and_then(|index| self.contacts.get(index))
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.contacts.len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }

    /// Removes the contact with `contact_id`. Unknown ids are a no-op.
    /// Returns the removed contact.
    pub fn unblock(&mut self, contact_id: i64) -> Option<Contact> {
        let position = self
            .contacts
            .iter()
            .position(|contact| contact.contact_id == contact_id)?;
        let removed = self.contacts.remove(position);

        self.selected_index = match self.selected_index {
            _ if self.contacts.is_empty() => None,
            Some(index) => Some(index.min(self.contacts.len() - 1)),
            None => Some(0),
        };

        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(contact_id: i64, name: &str) -> Contact {
        Contact {
            contact_id,
            name: name.to_owned(),
            avatar: String::new(),
            blocked: true,
        }
    }

    fn ids(state: &BlocklistState) -> Vec<i64> {
        state.contacts().iter().map(|c| c.contact_id).collect()
    }

    #[test]
    fn new_ignores_contacts_that_are_not_blocked() {
        let mut friend = contact(2, "Friend");
        friend.blocked = false;

        let state = BlocklistState::new(vec![contact(1, "A"), friend, contact(3, "C")]);

        assert_eq!(ids(&state), [1, 3]);
        assert!(state.contacts().iter().all(|c| c.blocked));
    }

    #[test]
    fn unblock_removes_exactly_that_contact() {
        let mut state =
            BlocklistState::new(vec![contact(1, "A"), contact(2, "B"), contact(3, "C")]);

        let removed = state.unblock(2);

        assert_eq!(removed.map(|c| c.contact_id), Some(2));
        assert_eq!(ids(&state), [1, 3]);
    }

    #[test]
    fn unblock_unknown_id_is_noop() {
        let mut state = BlocklistState::new(vec![contact(1, "A"), contact(2, "B")]);
        let before = state.clone();

        assert!(state.unblock(42).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn unblock_last_contact_clears_selection() {
        let mut state = BlocklistState::new(vec![contact(1, "A")]);

        state.unblock(1);

        assert!(state.is_empty());
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn selection_is_clamped_after_removing_tail() {
        let mut state = BlocklistState::new(vec![contact(1, "A"), contact(2, "B")]);
        state.select_next();

        state.unblock(2);

        assert_eq!(state.selected_contact().map(|c| c.contact_id), Some(1));
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut state = BlocklistState::new(vec![contact(1, "A"), contact(2, "B")]);

        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index(), Some(1));

        state.select_previous();
        state.select_previous();
        assert_eq!(state.selected_index(), Some(0));
    }
}
