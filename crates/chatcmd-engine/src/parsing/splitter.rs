use super::cursor::Cursor;
use super::whitespace::is_whitespace;

/// One markup tag that is open at the current scan position.
///
/// `opening_text` stays `None` until the tag's closing `>` has been reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFrame {
    pub name: String,
    pub opening_text: Option<String>,
}

/// The output of a single [`split`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Full opening-tag text of every tag still open where the command name
    /// ended, outer to inner.
    pub open_tags_before_command_name: Vec<String>,
    /// The command name with all markup removed. Entities are not decoded.
    pub command_name_raw: String,
    /// Byte offset where the content begins, or `None` if there is no content.
    pub content_start: Option<usize>,
}

impl ParseResult {
    /// The open tags concatenated, ready to be prepended to the content.
    pub fn open_tag_prefix(&self) -> String {
        self.open_tags_before_command_name.concat()
    }

    /// The raw content slice of `raw`, the input this result was produced from.
    pub fn content<'a>(&self, raw: &'a str) -> Option<&'a str> {
        self.content_start.and_then(|start| raw.get(start..))
    }
}

/// Splits rich-text chat input into its command name and content.
///
/// Scans `raw` once, left to right. The command name ends at the first
/// whitespace outside a tag; leading whitespace is skipped. Tags that are
/// still open at that point are reported so they can be re-opened at the start
/// of the content. Malformed markup never fails the scan: a closing tag pops
/// frames until it finds its match, emptying the stack if there is none.
///
/// ```
/// use chatcmd_engine::parsing::split;
///
/// let result = split("<b><i>/define</i> java</b>");
/// assert_eq!(result.command_name_raw, "/define");
/// assert_eq!(result.open_tags_before_command_name, vec!["<b>"]);
/// assert_eq!(result.content_start, Some(18));
/// ```
pub fn split(raw: &str) -> ParseResult {
    Splitter::new(raw).run()
}

struct Splitter<'a> {
    raw: &'a str,
    name: String,
    stack: Vec<TagFrame>,
    in_tag: bool,
    in_tag_name: bool,
    in_closing_tag: bool,
    first_non_whitespace_seen: bool,
    /// Byte offset of the `<` that opened the current tag.
    tag_start: usize,
    tag_name_start: usize,
    /// Name of the current tag once whitespace has ended it.
    tag_name: Option<String>,
}

impl<'a> Splitter<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            name: String::new(),
            stack: Vec::new(),
            in_tag: false,
            in_tag_name: false,
            in_closing_tag: false,
            first_non_whitespace_seen: false,
            tag_start: 0,
            tag_name_start: 0,
            tag_name: None,
        }
    }

    fn run(mut self) -> ParseResult {
        let mut cur = Cursor::new(self.raw);
        let mut content_start = None;

        while let Some(c) = cur.next() {
            let i = cur.index();

            if is_whitespace(c) {
                if !self.first_non_whitespace_seen {
                    continue;
                }
                if !self.in_tag {
                    content_start = Some(cur.offset());
                    break;
                }
                self.end_tag_name_at_whitespace(i);
                continue;
            }

            self.first_non_whitespace_seen = true;

            match c {
                '<' => self.start_tag(i),
                '/' if self.in_tag && cur.prev() == Some('<') => self.start_closing_tag(i),
                '>' if self.in_tag => self.end_tag(i),
                _ if !self.in_tag => self.name.push(c),
                _ => {}
            }
        }

        let open_tags_before_command_name = self
            .stack
            .into_iter()
            .filter_map(|frame| frame.opening_text)
            .collect();

        ParseResult {
            open_tags_before_command_name,
            command_name_raw: self.name,
            content_start,
        }
    }

    fn start_tag(&mut self, i: usize) {
        self.in_tag = true;
        self.in_tag_name = true;
        self.in_closing_tag = false;
        self.tag_start = i;
        self.tag_name_start = i + 1;
        self.tag_name = None;
    }

    fn start_closing_tag(&mut self, i: usize) {
        self.in_closing_tag = true;
        self.tag_name_start = i + 1;
    }

    fn end_tag_name_at_whitespace(&mut self, i: usize) {
        if !self.in_tag_name {
            return;
        }
        let name = self.raw[self.tag_name_start..i].to_string();
        if !self.in_closing_tag {
            self.push_frame(name.clone());
        }
        self.tag_name = Some(name);
        self.in_tag_name = false;
    }

    fn end_tag(&mut self, i: usize) {
        let name = match self.tag_name.take() {
            Some(name) => name,
            None => {
                let name = self.raw[self.tag_name_start..i].to_string();
                if !self.in_closing_tag {
                    self.push_frame(name.clone());
                }
                name
            }
        };

        if self.in_closing_tag {
            self.pop_until(&name);
        } else if let Some(frame) = self.stack.last_mut() {
            // '>' is one byte, so the tag text ends right after it
            frame.opening_text = Some(self.raw[self.tag_start..=i].to_string());
        }

        self.in_tag = false;
        self.in_tag_name = false;
        self.in_closing_tag = false;
    }

    fn push_frame(&mut self, name: String) {
        self.stack.push(TagFrame {
            name,
            opening_text: None,
        });
    }

    /// Removes frames from the top of the stack through the innermost frame
    /// named `name`. With no such frame the whole stack is discarded.
    fn pop_until(&mut self, name: &str) {
        match self.stack.iter().rposition(|frame| frame.name == name) {
            Some(index) => {
                if index + 1 < self.stack.len() {
                    log::trace!(
                        "closing </{name}> discards {} unclosed tag(s)",
                        self.stack.len() - index - 1
                    );
                }
                self.stack.truncate(index);
            }
            None => {
                log::trace!("closing </{name}> has no opening tag");
                self.stack.clear();
            }
        }
    }
}
