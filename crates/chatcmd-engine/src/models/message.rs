use serde::Serialize;

/// Read-only view of a chat message that may contain a command.
pub trait ChatMessage {
    /// The message body as authored, possibly containing inline HTML.
    fn body(&self) -> &str;

    /// Whether the message is rendered in a monospace font. Whitespace in
    /// fixed-width messages is treated as intentional formatting.
    fn is_fixed_width_font(&self) -> bool;
}

impl<T: ChatMessage + ?Sized> ChatMessage for &T {
    fn body(&self) -> &str {
        (**self).body()
    }

    fn is_fixed_width_font(&self) -> bool {
        (**self).is_fixed_width_font()
    }
}

/// An owned chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Message {
    pub id: u64,
    pub author: Option<String>,
    pub body: String,
    pub fixed_width_font: bool,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_fixed_width_font(mut self, fixed_width_font: bool) -> Self {
        self.fixed_width_font = fixed_width_font;
        self
    }
}

impl ChatMessage for Message {
    fn body(&self) -> &str {
        &self.body
    }

    fn is_fixed_width_font(&self) -> bool {
        self.fixed_width_font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let message = Message::new("/define java")
            .with_id(42)
            .with_author("alice")
            .with_fixed_width_font(true);

        assert_eq!(message.id, 42);
        assert_eq!(message.author.as_deref(), Some("alice"));
        assert_eq!(message.body(), "/define java");
        assert!(message.is_fixed_width_font());
    }

    #[test]
    fn references_are_messages() {
        fn body_of(message: impl ChatMessage) -> String {
            message.body().to_string()
        }

        let message = Message::new("hi");
        assert_eq!(body_of(&message), "hi");
    }
}
