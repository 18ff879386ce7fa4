use std::collections::HashMap;

use log::{error, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::chat;
use crate::chat::model::Chat;
use crate::message::model::Message;
use crate::user;

use super::Key;
use super::medium::Medium;

/// Typed accessors over the string-keyed medium. Reads fall back to a default
/// on missing or corrupt entries; writes are logged and swallowed on failure.
/// Neither ever surfaces an error to the caller, so in-memory state always
/// stays usable even when persistence degrades.
pub struct Repository {
    medium: Box<dyn Medium>,
}

impl Repository {
    pub fn new(medium: Box<dyn Medium>) -> Self {
        Self { medium }
    }

    pub fn read<T: DeserializeOwned>(&self, key: Key, default: T) -> T {
        let Some(raw) = self.medium.get(key.as_str()) else {
            return default;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("corrupt entry under {key}: {e}");
                default
            }
        }
    }

    pub fn write<T: Serialize>(&mut self, key: Key, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                error!("could not serialize {key}: {e}");
                return;
            }
        };

        if let Err(e) = self.medium.put(key.as_str(), &raw) {
            error!("could not persist {key}: {e}");
        }
    }
}

impl Repository {
    pub fn chats(&self) -> Vec<Chat> {
        self.read(Key::Chats, Vec::new())
    }

    pub fn save_chats(&mut self, chats: &[Chat]) {
        self.write(Key::Chats, &chats);
    }

    /// Full message map, timestamps rehydrated from their ISO-8601 form.
    pub fn messages(&self) -> HashMap<chat::Id, Vec<Message>> {
        self.read(Key::Messages, HashMap::new())
    }

    pub fn save_messages(&mut self, messages: &HashMap<chat::Id, Vec<Message>>) {
        self.write(Key::Messages, messages);
    }

    pub fn selected_chat(&self) -> Option<chat::Id> {
        self.read(Key::SelectedChat, None)
    }

    pub fn save_selected_chat(&mut self, id: Option<&chat::Id>) {
        self.write(Key::SelectedChat, &id);
    }

    pub fn user_status(&self) -> user::Status {
        self.read(Key::UserStatus, user::Status::default())
    }

    pub fn save_user_status(&mut self, status: user::Status) {
        self.write(Key::UserStatus, &status);
    }
}
