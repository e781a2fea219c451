//! # Markup Conversion
//!
//! Collaborators the command assembly relies on:
//!
//! - [`unescape_entities`] decodes HTML character references in the command name
//! - [`MarkupConverter`] turns chat HTML into display markup; [`ChatMarkdown`]
//!   is the default implementation producing chat-flavored Markdown

mod markdown;

pub use markdown::ChatMarkdown;

use std::borrow::Cow;

/// Converts inline chat markup to a lightweight display markup.
///
/// Implementations should leave plain text without markup or entities unchanged.
/// Conversion is not idempotent once entities are involved: decoding
/// `&lt;b&gt;x&lt;/b&gt;` yields the literal markup `<b>x</b>`, which a second
/// pass would convert again. Convert each piece of content exactly once.
pub trait MarkupConverter {
    fn to_display_markup(&self, text: &str, fixed_width_font: bool) -> String;
}

/// Converts chat HTML to Markdown with the default [`ChatMarkdown`] converter.
pub fn to_markdown(text: &str, fixed_width_font: bool) -> String {
    ChatMarkdown.to_display_markup(text, fixed_width_font)
}

/// Decodes named and numeric HTML character references (`&amp;`, `&#60;`).
pub fn unescape_entities(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
