use chrono::Utc;
use log::info;

use agent_console::chat::model::{sort_by_recency, total_unread};
use agent_console::settings;
use agent_console::state::container::Container;
use agent_console::storage::medium::FileMedium;
use agent_console::storage::repository::Repository;

fn main() {
    let config = settings::Config::default();

    let medium =
        FileMedium::new(&config.storage.dir).expect("storage directory should be writable");
    let container = Container::load(Repository::new(Box::new(medium)));

    let state = container.state();
    info!(
        "console ready: {} chat(s), {} unread, status {}",
        state.chats.len(),
        total_unread(&state.chats),
        state
            .current_user
            .as_ref()
            .and_then(|u| u.status)
            .unwrap_or_default(),
    );

    for chat in sort_by_recency(&state.chats) {
        let name = chat
            .participants
            .first()
            .map(|p| p.name.as_str())
            .unwrap_or("(empty)");
        info!(
            "[{}] {name}: {} ({})",
            chat.unread_count(),
            chat.last_message_preview(),
            chat.last_message()
                .map(|m| agent_console::queue::model::format_time_ago(m.timestamp, Utc::now()))
                .unwrap_or_default(),
        );
    }
}
