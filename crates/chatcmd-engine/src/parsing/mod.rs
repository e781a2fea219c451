//! # Command Parsing
//!
//! Two single-pass scanners that turn a chat message body into a command.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` over codepoints with one character of lookback
//! - **`splitter`**: `split()` separates the command name from the content,
//!   tracking markup tags that are still open where the name ends
//! - **`args`**: `split_args()` tokenizes converted content into arguments,
//!   honoring double quotes and backslash escapes
//! - **`whitespace`**: the separator predicate and trim shared by both scanners
//!
//! ## Carrying Markup Across the Split
//!
//! In `<b>/define java</b>` the bold tag opens before the command name and
//! closes inside the content. The splitter reports `<b>` as still open so the
//! caller can prepend it to `java</b>` and keep the formatting intact. Tags
//! opened and closed entirely within the name (`<b>/define</b> java`) are not
//! reported.

pub mod args;
pub mod cursor;
pub mod splitter;
pub mod whitespace;

pub use args::split_args;
pub use splitter::{ParseResult, TagFrame, split};
