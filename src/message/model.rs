use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::model::User;
use crate::user;

use super::{Id, Kind};

/// A single message in a chat. Immutable once created; the live list for a
/// chat is held by the state container, keyed by chat id.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub id: Id,
    pub content: String,
    pub sender: User,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub kind: Kind,
}

impl Message {
    pub fn new(sender: User, content: &str) -> Self {
        Self {
            id: Id::random(),
            content: content.to_string(),
            sender,
            timestamp: Utc::now(),
            kind: Kind::Text,
        }
    }

    pub fn with_timestamp(self, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, ..self }
    }

    pub fn with_kind(self, kind: Kind) -> Self {
        Self { kind, ..self }
    }
}

pub fn filter_by_sender<'a>(messages: &'a [Message], sender: &user::Id) -> Vec<&'a Message> {
    messages.iter().filter(|m| m.sender.id == *sender).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_messages_by_sender() {
        let alice = User::new("a", "Alice", "a@example.com");
        let bob = User::new("b", "Bob", "b@example.com");

        let messages = vec![
            Message::new(alice.clone(), "hi"),
            Message::new(bob.clone(), "hello"),
            Message::new(alice.clone(), "how are you"),
        ];

        let from_alice = filter_by_sender(&messages, &alice.id);
        assert_eq!(from_alice.len(), 2);
        assert!(from_alice.iter().all(|m| m.sender.id == alice.id));
    }

    #[test]
    fn random_ids_are_distinct() {
        assert_ne!(Id::random(), Id::random());
    }
}
