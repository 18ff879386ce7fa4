use std::collections::HashSet;
use std::mem;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::chat;
use crate::message::model::Message;
use crate::storage::repository::Repository;
use crate::user::model::User;

use super::{Action, AppState, default_chats, default_user, reducer};

/// A reply waiting for its timer. Not cancelable: it fires against the chat
/// id it was scheduled for, even if the selection has moved since.
#[derive(Clone, Debug)]
struct PendingReply {
    chat_id: chat::Id,
    sender: User,
    content: String,
    due: DateTime<Utc>,
}

/// Single authoritative mutation point. Every transition goes through
/// [`Container::dispatch`], which applies the pure reducer and then writes
/// the dirtied slices through to the store. A failed write is logged and
/// swallowed; in-memory state advances regardless.
pub struct Container {
    state: AppState,
    repository: Repository,
    pending: Vec<PendingReply>,
}

impl Container {
    /// Seed state from the store, falling back to the default dataset when no
    /// chats were ever persisted. Message lists referencing unknown chat ids
    /// are dropped here, since the per-key writes give no cross-slice
    /// transaction to keep them consistent.
    pub fn load(mut repository: Repository) -> Self {
        let mut chats = repository.chats();
        if chats.is_empty() {
            info!("no persisted chats, seeding default dataset");
            chats = default_chats(Utc::now());
            repository.save_chats(&chats);
        }

        let mut messages = repository.messages();
        let known: HashSet<&chat::Id> = chats.iter().map(|c| c.id()).collect();
        let before = messages.len();
        messages.retain(|chat_id, _| known.contains(chat_id));
        if messages.len() < before {
            warn!(
                "dropped {} orphaned message list(s) referencing unknown chats",
                before - messages.len()
            );
            repository.save_messages(&messages);
        }

        let current_user = default_user().with_status(repository.user_status());
        let selected_chat_id = repository.selected_chat();

        let state = AppState {
            current_user: Some(current_user),
            selected_chat_id,
            chats,
            messages,
            ..AppState::empty()
        };

        Self {
            state,
            repository,
            pending: Vec::new(),
        }
    }

    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let persist = reducer::apply(&mut self.state, action);

        if persist.chats {
            self.repository.save_chats(&self.state.chats);
        }
        if persist.messages {
            self.repository.save_messages(&self.state.messages);
        }
        if persist.selected_chat {
            self.repository
                .save_selected_chat(self.state.selected_chat_id.as_ref());
        }
        if let Some(status) = persist.user_status {
            self.repository.save_user_status(status);
        }
    }
}

impl Container {
    pub fn schedule_reply(
        &mut self,
        chat_id: chat::Id,
        sender: User,
        content: impl Into<String>,
        due: DateTime<Utc>,
    ) {
        self.pending.push(PendingReply {
            chat_id,
            sender,
            content: content.into(),
            due,
        });
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Drain every reply whose timer has elapsed, applying each to its
    /// original chat id.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let (ready, waiting): (Vec<_>, Vec<_>) = mem::take(&mut self.pending)
            .into_iter()
            .partition(|reply| reply.due <= now);
        self.pending = waiting;

        for reply in ready {
            let message = Message::new(reply.sender, &reply.content).with_timestamp(now);
            self.dispatch(Action::AddMessage {
                chat_id: reply.chat_id,
                message,
            });
        }
    }
}
