/// A scan cursor for parameter extraction with position tracking.
///
/// Operates over one paragraph, advancing a byte index as each parameter
/// kind consumes its share of the text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The paragraph being scanned.
    s: &'a str,
    /// Current byte index into `s`.
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at byte offset `at` of `s`.
    pub fn new(s: &'a str, at: usize) -> Self {
        Self { s, i: at.min(s.len()) }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of the paragraph.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Returns the unconsumed remainder of the paragraph.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Advances past any leading whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.i += rest.len() - rest.trim_start().len();
    }

    /// Consumes and returns the run of bytes up to the next whitespace
    /// character (or end of paragraph).
    pub fn take_until_whitespace(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.i += end;
        &rest[..end]
    }

    /// Consumes up to and including the next pair of `"` characters,
    /// returning the text between them. Returns `None` (without moving past
    /// the end) when no matching pair exists.
    pub fn take_quoted(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let open = rest.find('"')?;
        let inner = &rest[open + 1..];
        let close = inner.find('"')?;
        self.i += open + 1 + close + 1;
        Some(&inner[..close])
    }
}
