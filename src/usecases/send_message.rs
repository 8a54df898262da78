//! Use case for sending a message from the compose box.
//!
//! Sending appends to the in-memory thread; nothing leaves the process.

use crate::{
    domain::{
        message::{next_message_id, Message, Sender},
        text_input_state::TextInputState,
        thread_state::ThreadState,
    },
    infra::contracts::Clock,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Message text is empty after trimming whitespace.
    EmptyMessage,
}

/// Appends the compose text as an outgoing message and clears the input.
///
/// The text is stored as typed; only the emptiness check trims it. On
/// `EmptyMessage` neither the thread nor the input is touched.
pub fn send_message(
    thread: &mut ThreadState,
    input: &mut TextInputState,
    clock: &dyn Clock,
) -> Result<Message, SendMessageError> {
    if input.text().trim().is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    let message = Message {
        id: next_message_id(thread.messages()),
        text: input.text().to_owned(),
        time: clock.now_label(),
        sender: Sender::Me,
    };

    thread.append(message.clone());
    input.clear();

    Ok(message)
}
