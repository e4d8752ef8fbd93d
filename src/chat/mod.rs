// Gateway module for the conversation engine - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod machine;
mod message;
mod report;
mod session;

// Reference data is public so the CLI can list it
pub mod catalog;
pub mod tables;

// Public re-exports - the ONLY way to access chat functionality
pub use catalog::Button;
pub use machine::{open, transition, ConversationState, GlobalCommand, Transition};
pub use message::{ChartKind, ChartSpec, Message, Role, Series};
pub use report::RegionDelta;
pub use session::Session;
pub use tables::{SchoolLevel, Subject};
