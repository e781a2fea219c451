use std::fmt;

use crate::markup::{self, MarkupConverter, unescape_entities};
use crate::models::ChatMessage;
use crate::parsing::whitespace::trim;
use crate::parsing::{split, split_args};

/// A chat message in the form of a bot command, e.g. `/define java`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command<M> {
    message: M,
    command_name: String,
    content: String,
}

impl<M: ChatMessage> Command<M> {
    pub fn new(message: M, command_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            message,
            command_name: command_name.into(),
            content: content.into(),
        }
    }

    /// Parses a command out of a chat message.
    ///
    /// With a `trigger`, the command name must start with it and the trigger is
    /// removed. Without one, the first word is the command name. Returns `None`
    /// if the message is not a command.
    ///
    /// Tags still open where the command name ends are re-opened at the start
    /// of the content. The content is trimmed unless the message uses a
    /// fixed-width font.
    pub fn from_message(message: M, trigger: Option<&str>) -> Option<Self> {
        let (command_name, content) = {
            let body = message.body();
            let parts = split(body);

            let unescaped = unescape_entities(&parts.command_name_raw);
            let name = match trigger {
                Some(trigger) => match unescaped.strip_prefix(trigger) {
                    Some(name) => name,
                    None => {
                        log::debug!("{unescaped:?} does not start with trigger {trigger:?}");
                        return None;
                    }
                },
                None => &*unescaped,
            };
            if name.is_empty() {
                log::debug!("message has no command name");
                return None;
            }

            let rest = match parts.content(body) {
                None => "",
                Some(rest) if message.is_fixed_width_font() => rest,
                Some(rest) => trim(rest),
            };
            let mut content = parts.open_tag_prefix();
            content.push_str(rest);

            (name.to_string(), content)
        };

        Some(Self {
            message,
            command_name,
            content,
        })
    }

    /// The message the command was parsed from.
    pub fn message(&self) -> &M {
        &self.message
    }

    /// The command name without the trigger. For `/define java` this is `define`.
    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    /// The text after the command name, with HTML formatting preserved.
    /// Empty if there is no text after the name.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_fixed_width_font(&self) -> bool {
        self.message.is_fixed_width_font()
    }

    /// The content converted to Markdown.
    pub fn content_markdown(&self) -> String {
        markup::to_markdown(&self.content, self.is_fixed_width_font())
    }

    pub fn content_markdown_with<C: MarkupConverter + ?Sized>(&self, converter: &C) -> String {
        converter.to_display_markup(&self.content, self.is_fixed_width_font())
    }

    /// The Markdown content split into arguments.
    ///
    /// For `/define <b>java</b> "foo bar" 2` this is `["**java**", "foo bar", "2"]`.
    pub fn content_as_args(&self) -> Vec<String> {
        if trim(&self.content).is_empty() {
            return Vec::new();
        }
        split_args(trim(&self.content_markdown()))
    }

    pub fn content_as_args_with<C: MarkupConverter + ?Sized>(&self, converter: &C) -> Vec<String> {
        if trim(&self.content).is_empty() {
            return Vec::new();
        }
        split_args(trim(&self.content_markdown_with(converter)))
    }
}

impl<M: fmt::Debug> fmt::Display for Command<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Command [message={:?}, command_name={}, content={}]",
            self.message, self.command_name, self.content
        )
    }
}
