#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use agent_console::assistant;
    use agent_console::chat;
    use agent_console::chat::model::Chat;
    use agent_console::message::model::Message;
    use agent_console::state::container::Container;
    use agent_console::state::{Action, default_user};
    use agent_console::storage::medium::{MemoryMedium, Medium};
    use agent_console::storage::repository::Repository;
    use agent_console::user;
    use agent_console::user::model::User;

    fn open(medium: &MemoryMedium) -> Container {
        Container::load(Repository::new(Box::new(medium.clone())))
    }

    #[test]
    fn load_seeds_default_dataset_into_empty_store() {
        let medium = MemoryMedium::new();
        let container = open(&medium);

        let state = container.state();
        assert_eq!(state.chats.len(), 3);
        assert_eq!(state.chats[0].unread_count(), 2);
        assert_eq!(state.chats[1].unread_count(), 0);
        assert_eq!(state.chats[2].unread_count(), 1);
        assert_eq!(
            state.current_user.as_ref().unwrap().name,
            "John Agent"
        );

        // The seed is written through, so a reopen does not reseed.
        let reopened = open(&medium);
        assert_eq!(reopened.state().chats.len(), 3);
    }

    #[test]
    fn dispatched_changes_survive_a_reopen() {
        let medium = MemoryMedium::new();
        let mut container = open(&medium);

        container.dispatch(Action::SelectChat(chat::Id::from("2")));
        container.dispatch(Action::SetUserStatus(user::Status::Busy));
        container.dispatch(Action::AddMessage {
            chat_id: chat::Id::from("1"),
            message: Message::new(default_user(), "hi"),
        });

        let reopened = open(&medium);
        let state = reopened.state();

        assert_eq!(state.selected_chat_id, Some(chat::Id::from("2")));
        assert_eq!(
            state.current_user.as_ref().unwrap().status,
            Some(user::Status::Busy)
        );
        assert_eq!(state.chats[0].unread_count(), 0);
        assert_eq!(
            state.chats[0].last_message().unwrap().content,
            "hi"
        );
        assert_eq!(state.messages[&chat::Id::from("1")].len(), 1);
    }

    #[test]
    fn load_drops_message_lists_for_unknown_chats() {
        let medium = MemoryMedium::new();

        // First boot seeds chats 1-3, then a message lands under a chat id
        // that never makes it into the collection.
        let mut container = open(&medium);
        let ghost = User::new("ghost", "Ghost", "ghost@example.com");
        container.dispatch(Action::AddMessage {
            chat_id: chat::Id::from("404"),
            message: Message::new(ghost, "orphan"),
        });
        assert!(container.state().messages.contains_key(&chat::Id::from("404")));

        let reopened = open(&medium);
        assert!(!reopened.state().messages.contains_key(&chat::Id::from("404")));

        // The pruned map was written back, not just filtered in memory.
        let raw = medium.get("cx_messages").unwrap();
        assert!(!raw.contains("orphan"));
    }

    #[test]
    fn unknown_chat_message_does_not_touch_chat_records() {
        let medium = MemoryMedium::new();
        let mut container = open(&medium);

        let ghost = User::new("ghost", "Ghost", "ghost@example.com");
        container.dispatch(Action::AddMessage {
            chat_id: chat::Id::from("404"),
            message: Message::new(ghost, "anyone?"),
        });

        let counts: Vec<u32> = container
            .state()
            .chats
            .iter()
            .map(Chat::unread_count)
            .collect();
        assert_eq!(counts, vec![2, 0, 1]);
    }

    #[test]
    fn assistant_greets_an_empty_chat_once() {
        let medium = MemoryMedium::new();
        let mut container = open(&medium);
        let responder = assistant::Responder::default();
        let chat_id = chat::Id::from("1");

        responder.greet_if_empty(&mut container, &chat_id);
        responder.greet_if_empty(&mut container, &chat_id);

        let messages = &container.state().messages[&chat_id];
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, assistant::WELCOME);
        assert_eq!(messages[0].sender.id, user::Id::from("assistant"));
        // The greeting is not authored by the agent, so it counts as unread.
        assert_eq!(container.state().chats[0].unread_count(), 3);
    }

    #[test]
    fn scheduled_reply_waits_for_its_delay() {
        let medium = MemoryMedium::new();
        let mut container = open(&medium);
        let responder = assistant::Responder::from_millis(1000);
        let now = Utc::now();

        responder.acknowledge(&mut container, chat::Id::from("1"), now);
        assert_eq!(container.pending_replies(), 1);

        container.tick(now + Duration::milliseconds(500));
        assert_eq!(container.pending_replies(), 1);
        assert!(!container.state().messages.contains_key(&chat::Id::from("1")));

        container.tick(now + Duration::milliseconds(1000));
        assert_eq!(container.pending_replies(), 0);

        let messages = &container.state().messages[&chat::Id::from("1")];
        assert_eq!(messages[0].content, assistant::ANALYTICS_REPLY);
    }

    #[test]
    fn scheduled_reply_hits_its_original_chat_after_navigation_moves() {
        let medium = MemoryMedium::new();
        let mut container = open(&medium);
        let responder = assistant::Responder::from_millis(1000);
        let now = Utc::now();

        container.dispatch(Action::SelectChat(chat::Id::from("1")));
        responder.acknowledge(&mut container, chat::Id::from("1"), now);

        // Agent moves on before the timer fires.
        container.dispatch(Action::SelectChat(chat::Id::from("3")));
        container.tick(now + Duration::seconds(2));

        let state = container.state();
        assert_eq!(state.selected_chat_id, Some(chat::Id::from("3")));
        assert_eq!(state.messages[&chat::Id::from("1")].len(), 1);
        assert!(!state.messages.contains_key(&chat::Id::from("3")));
        assert_eq!(
            state.chats[0].last_message().unwrap().content,
            assistant::ANALYTICS_REPLY
        );
    }
}
