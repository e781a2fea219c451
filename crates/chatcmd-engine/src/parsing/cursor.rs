/// A cursor for codepoint-by-codepoint scanning with one character of lookback.
///
/// Operates over a string slice. All positions are byte offsets into `s` and
/// always fall on a char boundary, so they can be used to slice the input.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    s: &'a str,
    /// Byte offset of the next unread character.
    i: usize,
    /// Byte offset of the character most recently returned by `next()`.
    current: usize,
    /// The character before the one most recently returned by `next()`.
    prev: Option<char>,
    /// The character most recently returned by `next()`.
    last: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            current: 0,
            prev: None,
            last: None,
        }
    }

    /// Byte offset of the character most recently returned by `next()`.
    pub fn index(&self) -> usize {
        self.current
    }

    /// Byte offset just past the character most recently returned by `next()`.
    pub fn offset(&self) -> usize {
        self.i
    }

    /// The character immediately before the current one, if any.
    pub fn prev(&self) -> Option<char> {
        self.prev
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.s[self.i..].chars().next()?;
        self.current = self.i;
        self.i += c.len_utf8();
        self.prev = self.last;
        self.last = Some(c);
        Some(c)
    }
}
