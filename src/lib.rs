pub mod assistant;
pub mod chat;
pub mod message;
pub mod queue;
pub mod settings;
pub mod state;
pub mod storage;
pub mod user;
pub mod view;
