use chrono::{DateTime, Duration, Utc};

use crate::chat;
use crate::message::model::Message;
use crate::state::{Action, container::Container};
use crate::user::model::User;

pub const WELCOME: &str = "Hello! I am your AI Virtual Assistant. How can I help you optimize customer interactions today?";

pub const ANALYTICS_REPLY: &str = "I can analyze sentiment patterns for you. Based on recent WhatsApp interactions, customer satisfaction is trending at 89% with positive sentiment increasing by 12% this week. Would you like detailed analytics?";

pub fn user() -> User {
    User::new("assistant", "AI Virtual Assistant", "ai@ey.com")
}

/// Simulated assistant driving the canned conversation flow: a welcome
/// message for freshly opened chats and a delayed reply to anything the
/// agent sends.
pub struct Responder {
    delay: Duration,
}

impl Responder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self::new(Duration::milliseconds(millis))
    }

    /// Post the welcome message into a chat that has no messages yet.
    pub fn greet_if_empty(&self, container: &mut Container, chat_id: &chat::Id) {
        let empty = container
            .state()
            .messages
            .get(chat_id)
            .is_none_or(|messages| messages.is_empty());
        if !empty {
            return;
        }

        container.dispatch(Action::AddMessage {
            chat_id: chat_id.clone(),
            message: Message::new(user(), WELCOME),
        });
    }

    /// Schedule the canned reply to fire after the configured delay. The
    /// reply targets `chat_id` as of now; later navigation does not move it.
    pub fn acknowledge(&self, container: &mut Container, chat_id: chat::Id, now: DateTime<Utc>) {
        container.schedule_reply(chat_id, user(), ANALYTICS_REPLY, now + self.delay);
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::from_millis(1000)
    }
}
