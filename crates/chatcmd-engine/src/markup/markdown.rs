use std::sync::OnceLock;

use regex::Regex;

use super::{MarkupConverter, unescape_entities};

/// Converts chat HTML to chat-flavored Markdown.
///
/// | HTML                          | Markdown            |
/// |-------------------------------|---------------------|
/// | `<b>`, `<strong>`             | `**text**`          |
/// | `<i>`, `<em>`                 | `*text*`            |
/// | `<code>`                      | `` `text` ``        |
/// | `<strike>`, `<s>`, `<del>`    | `---text---`        |
/// | `<a href="u" title="t">`      | `[text](u "t")`     |
/// | `<br>`                        | newline             |
///
/// Other tags are dropped and their text kept. Entities are decoded in text
/// only, so `&lt;b&gt;` becomes a literal `<b>`. Fixed-width content is
/// preformatted and only has its entities decoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChatMarkdown;

impl MarkupConverter for ChatMarkdown {
    fn to_display_markup(&self, text: &str, fixed_width_font: bool) -> String {
        if fixed_width_font {
            return unescape_entities(text).into_owned();
        }

        let mut out = String::with_capacity(text.len());
        let mut links: Vec<Option<Link>> = Vec::new();
        let mut rest = text;

        while let Some(lt) = rest.find('<') {
            push_text(&mut out, &rest[..lt]);
            let after = &rest[lt + 1..];

            let Some(gt) = after.find('>') else {
                rest = &rest[lt..];
                break;
            };

            match Tag::parse(&after[..gt]) {
                Some(tag) => {
                    tag.write_markdown(&mut out, &mut links);
                    rest = &after[gt + 1..];
                }
                None => {
                    out.push('<');
                    rest = after;
                }
            }
        }

        push_text(&mut out, rest);
        out
    }
}

fn push_text(out: &mut String, text: &str) {
    out.push_str(&unescape_entities(text));
}

struct Tag<'a> {
    name: String,
    closing: bool,
    attributes: &'a str,
}

impl<'a> Tag<'a> {
    /// Parses the text between `<` and `>`. Returns `None` if it does not
    /// look like a tag, e.g. the `< b >` in `a < b > c`.
    fn parse(inner: &'a str) -> Option<Self> {
        let (closing, body) = match inner.strip_prefix('/') {
            Some(body) => (true, body),
            None => (false, inner),
        };

        let name_end = body
            .find(|c: char| c.is_whitespace() || c == '/')
            .unwrap_or(body.len());
        let name = &body[..name_end];
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }

        Some(Self {
            name: name.to_ascii_lowercase(),
            closing,
            attributes: &body[name_end..],
        })
    }

    fn write_markdown(&self, out: &mut String, links: &mut Vec<Option<Link>>) {
        match self.name.as_str() {
            "b" | "strong" => out.push_str("**"),
            "i" | "em" => out.push('*'),
            "code" => out.push('`'),
            "strike" | "s" | "del" => out.push_str("---"),
            "br" if !self.closing => out.push('\n'),
            "a" if !self.closing => {
                let link = Link::from_attributes(self.attributes);
                if link.is_some() {
                    out.push('[');
                }
                links.push(link);
            }
            "a" => {
                if let Some(Some(link)) = links.pop() {
                    link.write_markdown(out);
                }
            }
            _ => {}
        }
    }
}

struct Link {
    href: String,
    title: Option<String>,
}

impl Link {
    /// Reads `href` and `title` from the attribute text. `None` without an `href`.
    fn from_attributes(attributes: &str) -> Option<Self> {
        let mut href = None;
        let mut title = None;

        for caps in attribute_regex().captures_iter(attributes) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| unescape_entities(m.as_str()).into_owned());
            match caps[1].to_ascii_lowercase().as_str() {
                "href" => href = value,
                "title" => title = value,
                _ => {}
            }
        }

        Some(Self { href: href?, title })
    }

    fn write_markdown(&self, out: &mut String) {
        out.push_str("](");
        out.push_str(&self.href);
        if let Some(title) = &self.title {
            out.push_str(" \"");
            out.push_str(title);
            out.push('"');
        }
        out.push(')');
    }
}

fn attribute_regex() -> &'static Regex {
    static ATTRIBUTE_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE_REGEX.get_or_init(|| {
        Regex::new(r#"([A-Za-z][A-Za-z0-9-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("Invalid attribute regex")
    })
}
