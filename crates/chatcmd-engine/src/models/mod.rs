pub mod command;
pub mod message;

pub use command::Command;
pub use message::{ChatMessage, Message};
