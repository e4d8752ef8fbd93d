pub mod app;
pub mod chat;
pub mod cli;
pub mod constants;
pub mod runtime;
pub mod tui;
pub mod utils;

pub use app::{load_config, Config};
pub use chat::{transition, ConversationState, Message, Session};
pub use tui::run_ui;
pub use utils::StatbotError;
