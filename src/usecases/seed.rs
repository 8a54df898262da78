//! Builds the initial shell state from seed data.

use std::collections::HashSet;

use thiserror::Error;

use crate::{
    domain::{
        blocklist_state::BlocklistState, chat::Chat, chat_list_state::ChatListState,
        contact::Contact, emoji_picker_state::EmojiPickerState, message::Message,
        profile::Profile, profile_state::ProfileState, shell_state::ShellState,
        thread_state::ThreadState,
    },
    infra::config::{ProfileConfig, UiConfig},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub chats: Vec<Chat>,
    pub messages: Vec<Message>,
    pub blocked_contacts: Vec<Contact>,
    pub profile: Profile,
}

pub trait SeedSource {
    fn load(&self) -> SeedData;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i64 },
}

/// Checks that identifiers are unique within each collection.
pub fn validate(seed: &SeedData) -> Result<(), SeedError> {
    ensure_unique("chat", seed.chats.iter().map(|chat| chat.chat_id))?;
    ensure_unique(
        "message",
        seed.messages.iter().map(|message| i64::from(message.id)),
    )?;
    ensure_unique(
        "contact",
        seed.blocked_contacts.iter().map(|contact| contact.contact_id),
    )
}

fn ensure_unique(kind: &'static str, ids: impl Iterator<Item = i64>) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

/// Loads, validates, and applies config overrides to the seed, producing
/// the state the shell starts with.
pub fn build_shell_state(
    source: &dyn SeedSource,
    profile_overrides: &ProfileConfig,
    ui: &UiConfig,
) -> Result<ShellState, SeedError> {
    let mut seed = source.load();
    validate(&seed)?;

    if let Some(name) = &profile_overrides.name {
        seed.profile.name = name.clone();
    }
    if let Some(bio) = &profile_overrides.bio {
        seed.profile.bio = bio.clone();
    }

    tracing::debug!(
        chats = seed.chats.len(),
        messages = seed.messages.len(),
        blocked_contacts = seed.blocked_contacts.len(),
        "seed data loaded"
    );

    let mut state = ShellState::default();
    *state.chat_list_mut() = ChatListState::new(seed.chats);
    *state.thread_mut() = ThreadState::new(seed.messages);
    *state.blocklist_mut() = BlocklistState::new(seed.blocked_contacts);
    *state.profile_mut() = ProfileState::new(seed.profile);
    *state.emoji_picker_mut() = EmojiPickerState::new(ui.emoji_columns);

    Ok(state)
}
