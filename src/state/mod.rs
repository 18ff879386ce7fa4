use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::chat;
use crate::chat::model::Chat;
use crate::message::model::Message;
use crate::user;
use crate::user::model::User;
use crate::view::Navigation;

pub mod container;
pub mod reducer;

/// The whole in-memory object tree. The presentation layer reads it and emits
/// [`Action`]s; nothing else mutates it.
#[derive(Clone, Debug)]
pub struct AppState {
    pub current_user: Option<User>,
    pub selected_chat_id: Option<chat::Id>,
    pub chats: Vec<Chat>,
    pub messages: HashMap<chat::Id, Vec<Message>>,
    pub active_navigation: Navigation,
}

impl AppState {
    pub fn empty() -> Self {
        Self {
            current_user: None,
            selected_chat_id: None,
            chats: Vec::new(),
            messages: HashMap::new(),
            active_navigation: Navigation::AiAssistant,
        }
    }
}

/// Closed set of state transitions. Each variant carries a precisely typed
/// payload; there is no unknown-action arm to fall through.
#[derive(Clone, Debug)]
pub enum Action {
    SetCurrentUser(User),
    SelectChat(chat::Id),
    AddMessage {
        chat_id: chat::Id,
        message: Message,
    },
    SetActiveNavigation(Navigation),
    SetUserStatus(user::Status),
    AddChat(Chat),
    UpdateChat(Chat),
}

pub fn default_user() -> User {
    User::new("current", "John Agent", "john@ey.com")
}

/// Seed dataset used when the store holds no chats yet.
pub fn default_chats(now: DateTime<Utc>) -> Vec<Chat> {
    let seeded = |chat_id: &str, name: &str, email: &str, last: &str, unread| {
        let participant = User::new(format!("user{chat_id}"), name, email);
        let last_message = Message::new(participant.clone(), last).with_timestamp(now);

        Chat::new(chat_id, vec![participant])
            .with_last_message(last_message)
            .with_unread(unread)
    };

    vec![
        seeded(
            "1",
            "Customer Support",
            "support@example.com",
            "How can I help you today?",
            2,
        ),
        seeded(
            "2",
            "Sales Team",
            "sales@example.com",
            "Thank you for your inquiry",
            0,
        ),
        seeded(
            "3",
            "Technical Support",
            "tech@example.com",
            "Issue has been resolved",
            1,
        ),
    ]
}
