/// Lazy paragraph segmenter over a raw document.
///
/// A paragraph is a contiguous run of lines ending at the first line whose
/// trimmed form is empty or ends with `]`, or at end of input. The
/// terminating line belongs to the paragraph.
///
/// Yields slices of the original text with their newlines intact, so
/// concatenating every yielded slice reproduces the input exactly.
///
/// Inherited limitation: a tag that closes mid-line, where the line does not
/// itself end with `]`, is not split off into its own paragraph.
pub struct Paragraphs<'a> {
    rest: &'a str,
}

impl<'a> Paragraphs<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let mut end = 0;
        loop {
            let line_end = match self.rest[end..].find('\n') {
                Some(i) => end + i + 1,
                None => self.rest.len(),
            };
            let trimmed = self.rest[end..line_end].trim();
            end = line_end;
            if trimmed.is_empty() || trimmed.ends_with(']') || end == self.rest.len() {
                let (para, rest) = self.rest.split_at(end);
                self.rest = rest;
                return Some(para);
            }
        }
    }
}
