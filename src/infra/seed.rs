//! Built-in demo data loaded on every start.

use crate::{
    domain::{
        chat::{Chat, ChatCategory},
        contact::Contact,
        message::{Message, Sender},
        profile::Profile,
    },
    usecases::seed::{SeedData, SeedSource},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSeed;

impl SeedSource for BuiltinSeed {
    fn load(&self) -> SeedData {
        SeedData {
            chats: chats(),
            messages: messages(),
            blocked_contacts: blocked_contacts(),
            profile: profile(),
        }
    }
}

fn chat(
    chat_id: i64,
    name: &str,
    last_message: &str,
    time: &str,
    unread_count: u32,
    category: ChatCategory,
    is_online: Option<bool>,
) -> Chat {
    Chat {
        chat_id,
        name: name.to_owned(),
        last_message: last_message.to_owned(),
        time: time.to_owned(),
        unread_count,
        avatar: crate::domain::profile::initials(name),
        category,
        is_online,
    }
}

fn chats() -> Vec<Chat> {
    use ChatCategory::{Channel, Group, Personal};

    vec![
        chat(1, "Maria Petrova", "Hi! How are you?", "14:32", 2, Personal, Some(true)),
        chat(2, "Dev Team", "Call tomorrow at 10:00", "13:15", 5, Group, None),
        chat(3, "Design Chat", "New mockups are ready", "12:48", 0, Group, None),
        chat(4, "Tech News", "React 19 is out", "11:20", 12, Channel, None),
        chat(5, "Ivan Sidorov", "Great, thanks!", "yesterday", 0, Personal, Some(false)),
    ]
}

fn message(id: i32, text: &str, time: &str, sender: Sender) -> Message {
    Message {
        id,
        text: text.to_owned(),
        time: time.to_owned(),
        sender,
    }
}

fn messages() -> Vec<Message> {
    vec![
        message(1, "Hi! How are you?", "14:30", Sender::Them),
        message(2, "Hi! All good, working on a new project", "14:31", Sender::Me),
        message(3, "Cool! Tell me more?", "14:32", Sender::Them),
    ]
}

fn blocked_contacts() -> Vec<Contact> {
    [(1, "Spam Spammer"), (2, "Annoying Person")]
        .into_iter()
        .map(|(contact_id, name)| Contact {
            contact_id,
            name: name.to_owned(),
            avatar: crate::domain::profile::initials(name),
            blocked: true,
        })
        .collect()
}

fn profile() -> Profile {
    Profile {
        name: "Alexander Ivanov".to_owned(),
        bio: "Developer | Moscow".to_owned(),
        phone: "+7 900 123-45-67".to_owned(),
        email: "alex@example.com".to_owned(),
        location: "Moscow, Russia".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::seed::validate;

    #[test]
    fn builtin_seed_passes_validation() {
        assert_eq!(validate(&BuiltinSeed.load()), Ok(()));
    }

    #[test]
    fn builtin_seed_has_expected_shape() {
        let seed = BuiltinSeed.load();

        assert_eq!(seed.chats.len(), 5);
        assert_eq!(seed.messages.len(), 3);
        assert_eq!(seed.blocked_contacts.len(), 2);
        assert_eq!(seed.chats[0].avatar, "MP");
        assert!(seed.chats[0].is_online());
        assert!(seed.blocked_contacts.iter().all(|contact| contact.blocked));
    }
}
