//! # chatcmd-engine
//!
//! Parses bot commands out of rich-text chat messages.
//!
//! ```
//! use chatcmd_engine::{Command, Message};
//!
//! let message = Message::new(r#"<b>/define java</b> "foo bar" 2"#);
//! let command = Command::from_message(message, Some("/")).unwrap();
//!
//! assert_eq!(command.command_name(), "define");
//! assert_eq!(command.content(), r#"<b>java</b> "foo bar" 2"#);
//! assert_eq!(command.content_as_args(), vec!["**java**", "foo bar", "2"]);
//! ```
//!
//! See [`parsing`] for the scanners and [`markup`] for HTML conversion.

pub mod markup;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use markup::{ChatMarkdown, MarkupConverter};
pub use models::{ChatMessage, Command, Message};
pub use parsing::{ParseResult, split, split_args};
