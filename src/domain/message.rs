/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Them,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub text: String,
    /// Display time ("14:31").
    pub time: String,
    pub sender: Sender,
}

impl Message {
    pub fn is_outgoing(&self) -> bool {
        self.sender == Sender::Me
    }
}

/// Returns the id the next appended message should get.
pub fn next_message_id(messages: &[Message]) -> i32 {
    messages
        .iter()
        .map(|message| message.id)
        .max()
        .map_or(1, |id| id.saturating_add(1))
}
