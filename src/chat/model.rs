use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::message::model::Message;
use crate::user::model::User;

use super::Id;

const PREVIEW_LEN: usize = 50;

/// A conversation thread between the agent and one or more participants.
/// Only the last message is embedded here; the full message list lives in
/// the state container, keyed by chat id.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Chat {
    id: Id,
    pub participants: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_message: Option<Message>,
    #[serde(default)]
    unread_count: u32,
}

impl Chat {
    pub fn new(id: impl Into<Id>, participants: Vec<User>) -> Self {
        Self {
            id: id.into(),
            participants,
            last_message: None,
            unread_count: 0,
        }
    }

    pub fn with_last_message(self, message: Message) -> Self {
        Self {
            last_message: Some(message),
            ..self
        }
    }

    pub fn with_unread(self, unread_count: u32) -> Self {
        Self {
            unread_count,
            ..self
        }
    }

    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub const fn last_message(&self) -> Option<&Message> {
        self.last_message.as_ref()
    }

    pub const fn unread_count(&self) -> u32 {
        self.unread_count
    }
}

impl Chat {
    /// Fold a newly appended message into the chat record. A message authored
    /// by the viewer clears the unread counter; anything else bumps it.
    pub fn record_message(&mut self, message: Message, authored: bool) {
        self.unread_count = if authored { 0 } else { self.unread_count + 1 };
        self.last_message = Some(message);
    }

    pub fn last_message_preview(&self) -> String {
        let Some(message) = &self.last_message else {
            return "No messages yet".to_string();
        };

        if message.content.chars().count() > PREVIEW_LEN {
            let truncated: String = message.content.chars().take(PREVIEW_LEN).collect();
            format!("{truncated}...")
        } else {
            message.content.clone()
        }
    }
}

/// Chats ordered by last-message timestamp, newest first. Chats without a
/// last message sort after those with one and keep their relative order.
pub fn sort_by_recency(chats: &[Chat]) -> Vec<Chat> {
    let mut sorted = chats.to_vec();
    sorted.sort_by(|a, b| match (&a.last_message, &b.last_message) {
        (Some(a), Some(b)) => b.timestamp.cmp(&a.timestamp),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

pub fn total_unread(chats: &[Chat]) -> u32 {
    chats.iter().map(Chat::unread_count).sum()
}
