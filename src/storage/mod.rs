use std::fmt::Display;

pub mod medium;
pub mod repository;

type Result<T> = std::result::Result<T, Error>;

/// Logical keys of the persisted layout. Everything the console keeps across
/// restarts lives under one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Chats,
    Messages,
    SelectedChat,
    UserStatus,
}

impl Key {
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Chats => "cx_chats",
            Self::Messages => "cx_messages",
            Self::SelectedChat => "cx_selected_chat",
            Self::UserStatus => "cx_user_status",
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    _Io(#[from] std::io::Error),
    #[error(transparent)]
    _Serde(#[from] serde_json::Error),
}
