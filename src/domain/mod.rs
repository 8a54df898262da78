//! Domain layer: entities and UI state.

pub mod blocklist_state;
pub mod chat;
pub mod chat_list_state;
pub mod contact;
pub mod emoji_picker_state;
pub mod events;
pub mod group_dialog_state;
pub mod message;
pub mod profile;
pub mod profile_state;
pub mod settings_state;
pub mod shell_state;
pub mod text_input_state;
pub mod thread_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
