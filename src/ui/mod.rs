//! UI layer: terminal session, key decoding and panel rendering.

mod blocklist_view;
mod chats_view;
mod event_source;
mod group_dialog;
mod message_rendering;
mod profile_view;
mod settings_view;
pub mod shell;
mod styles;
mod terminal;
mod text_field;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
