use crate::user;

use super::{Action, AppState};

/// Which persisted slices an action dirtied. The container writes exactly
/// these through after the reducer returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Persist {
    pub chats: bool,
    pub messages: bool,
    pub selected_chat: bool,
    pub user_status: Option<user::Status>,
}

impl Persist {
    pub const fn none() -> Self {
        Self {
            chats: false,
            messages: false,
            selected_chat: false,
            user_status: None,
        }
    }
}

/// Pure state transition. Never fails: unknown chat ids degrade to partial or
/// no-op updates, a missing current user is guarded, payloads are taken as
/// given. All persistence happens in the container, keyed off the returned
/// [`Persist`].
pub fn apply(state: &mut AppState, action: Action) -> Persist {
    match action {
        Action::SetCurrentUser(user) => {
            state.current_user = Some(user);
            Persist::none()
        }

        Action::SelectChat(chat_id) => {
            // Intentionally not validated against the chat collection.
            state.selected_chat_id = Some(chat_id);
            Persist {
                selected_chat: true,
                ..Persist::none()
            }
        }

        Action::AddMessage { chat_id, message } => {
            let authored = state
                .current_user
                .as_ref()
                .is_some_and(|user| user.id == message.sender.id);

            // Unknown chat id: the chat-side update is a no-op, but the
            // message is still stored under that key.
            if let Some(chat) = state.chats.iter_mut().find(|c| *c.id() == chat_id) {
                chat.record_message(message.clone(), authored);
            }

            state.messages.entry(chat_id).or_default().push(message);

            Persist {
                chats: true,
                messages: true,
                ..Persist::none()
            }
        }

        Action::SetActiveNavigation(navigation) => {
            state.active_navigation = navigation;
            Persist::none()
        }

        Action::SetUserStatus(status) => {
            if let Some(user) = state.current_user.as_mut() {
                user.status = Some(status);
            }
            Persist {
                user_status: Some(status),
                ..Persist::none()
            }
        }

        Action::AddChat(chat) => {
            // No uniqueness check on the id.
            state.chats.push(chat);
            Persist {
                chats: true,
                ..Persist::none()
            }
        }

        Action::UpdateChat(chat) => {
            if let Some(existing) = state.chats.iter_mut().find(|c| c.id() == chat.id()) {
                *existing = chat;
            }
            Persist {
                chats: true,
                ..Persist::none()
            }
        }
    }
}
