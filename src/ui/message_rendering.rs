//! Message list rendering logic.
//!
//! Consecutive messages from the same sender are grouped: only the first
//! one carries the sender header. Own messages are right-aligned.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::message::{Message, Sender};

use super::styles;

const OWN_SENDER_LABEL: &str = "You";

/// One visual row group in the messages list, one per message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageListElement {
    pub time: String,
    /// Present only on the first message of a sender group.
    pub sender: Option<String>,
    pub content: String,
    pub outgoing: bool,
}

/// Builds the visual elements for `messages`, naming incoming messages
/// after `contact_name`.
pub fn build_message_list_elements(
    messages: &[Message],
    contact_name: &str,
) -> Vec<MessageListElement> {
    let mut prev_sender: Option<Sender> = None;

    messages
        .iter()
        .map(|message| {
            let show_sender = prev_sender != Some(message.sender);
            prev_sender = Some(message.sender);

            let sender_name = if message.is_outgoing() {
                OWN_SENDER_LABEL
            } else {
                contact_name
            };

            MessageListElement {
                time: message.time.clone(),
                sender: show_sender.then(|| sender_name.to_owned()),
                content: message.text.clone(),
                outgoing: message.is_outgoing(),
            }
        })
        .collect()
}

/// Converts a list element to a ListItem for ratatui rendering.
pub fn element_to_list_item(element: &MessageListElement) -> ListItem<'static> {
    ListItem::new(message_item_lines(element))
}

fn message_item_lines(element: &MessageListElement) -> Vec<Line<'static>> {
    let alignment = if element.outgoing {
        Alignment::Right
    } else {
        Alignment::Left
    };

    let mut lines = Vec::new();

    if let Some(sender) = &element.sender {
        let sender_style = if element.outgoing {
            styles::outgoing_sender_style()
        } else {
            styles::message_sender_style()
        };
        lines.push(Line::from(Span::styled(sender.clone(), sender_style)).alignment(alignment));
    }

    let mut content_lines = element.content.lines().peekable();
    if content_lines.peek().is_none() {
        lines.push(content_line("", &element.time, alignment));
    }
    while let Some(text_line) = content_lines.next() {
        // Time goes on the last line of the bubble.
        let time = if content_lines.peek().is_none() {
            element.time.as_str()
        } else {
            ""
        };
        lines.push(content_line(text_line, time, alignment));
    }

    lines
}

fn content_line(text: &str, time: &str, alignment: Alignment) -> Line<'static> {
    let mut spans = vec![Span::styled(text.to_owned(), styles::message_text_style())];
    if !time.is_empty() {
        spans.push(Span::styled(format!("  {time}"), styles::message_time_style()));
    }
    Line::from(spans).alignment(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: i32, text: &str, sender: Sender) -> Message {
        Message {
            id,
            text: text.to_owned(),
            time: "14:30".to_owned(),
            sender,
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn groups_consecutive_messages_from_same_sender() {
        let messages = vec![
            msg(1, "First", Sender::Them),
            msg(2, "Second", Sender::Them),
        ];

        let elements = build_message_list_elements(&messages, "Maria Petrova");

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].sender.as_deref(), Some("Maria Petrova"));
        assert_eq!(elements[1].sender, None);
    }

    #[test]
    fn shows_sender_when_sender_changes() {
        let messages = vec![
            msg(1, "Hi", Sender::Them),
            msg(2, "Hello", Sender::Me),
            msg(3, "How are you?", Sender::Them),
        ];

        let elements = build_message_list_elements(&messages, "Maria Petrova");

        let senders: Vec<_> = elements.iter().map(|e| e.sender.as_deref()).collect();
        assert_eq!(
            senders,
            [Some("Maria Petrova"), Some("You"), Some("Maria Petrova")]
        );
        assert!(elements[1].outgoing);
    }

    #[test]
    fn empty_messages_produce_no_elements() {
        assert!(build_message_list_elements(&[], "Nobody").is_empty());
    }

    #[test]
    fn outgoing_message_is_right_aligned_with_time() {
        let element = MessageListElement {
            time: "15:00".to_owned(),
            sender: Some("You".to_owned()),
            content: "Sounds good".to_owned(),
            outgoing: true,
        };

        let lines = message_item_lines(&element);

        assert_eq!(lines.len(), 2);
        assert!(lines
            .iter()
            .all(|line| line.alignment == Some(Alignment::Right)));
        assert_eq!(line_text(&lines[1]), "Sounds good  15:00");
    }

    #[test]
    fn multiline_content_puts_time_on_last_line() {
        let element = MessageListElement {
            time: "09:15".to_owned(),
            sender: None,
            content: "line one\nline two".to_owned(),
            outgoing: false,
        };

        let lines = message_item_lines(&element);

        assert_eq!(line_text(&lines[0]), "line one");
        assert_eq!(line_text(&lines[1]), "line two  09:15");
    }
}
