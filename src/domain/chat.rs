/// Category of a chat, used by the sidebar tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatCategory {
    /// 1-to-1 conversation with a person.
    #[default]
    Personal,
    /// Group chat.
    Group,
    /// Broadcast channel.
    Channel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub chat_id: i64,
    pub name: String,
    pub last_message: String,
    /// Display time of the last message ("14:32", "yesterday").
    pub time: String,
    pub unread_count: u32,
    /// Avatar initials.
    pub avatar: String,
    pub category: ChatCategory,
    /// Presence of the chat partner. Only known for personal chats.
    pub is_online: Option<bool>,
}

impl Chat {
    pub fn is_online(&self) -> bool {
        self.is_online == Some(true)
    }

    /// Status line shown under the chat name in the thread header.
    pub fn presence_label(&self) -> &'static str {
        if self.is_online() {
            "online"
        } else {
            "last seen recently"
        }
    }
}
