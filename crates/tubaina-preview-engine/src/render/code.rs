/// Opening code-tag token, matched against the start of a trimmed line.
pub const OPEN_MARKER: &str = "[code";
/// Closing code-tag token.
pub const CLOSE_MARKER: &str = "[/code";

/// Stateful tracker for (possibly nested) code regions.
///
/// States are `Normal` (depth 0) and in-code (depth > 0). Entering a region
/// sets depth 1; while inside, each line whose trimmed form starts with the
/// opening token increments the depth and each closing token decrements it.
/// Everything seen at depth > 0 is held verbatim, nested marker lines
/// included, and flushed as one `<pre>` block when the depth returns to
/// zero. No escaping and no paragraph or inline rules apply inside.
#[derive(Debug, Default)]
pub struct CodeTracker {
    depth: usize,
    text: String,
}

impl CodeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while inside a code region.
    pub fn active(&self) -> bool {
        self.depth > 0
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enters a code region at depth 1 (called on the opening tag paragraph,
    /// which itself is not part of the region's text).
    pub fn enter(&mut self) {
        debug_assert_eq!(self.depth, 0);
        self.depth = 1;
        self.text.clear();
    }

    /// Feeds one paragraph seen while inside the region. Returns the
    /// finished HTML block once the closing line brings the depth to zero.
    pub fn consume(&mut self, paragraph: &str) -> Option<String> {
        for line in paragraph.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with(CLOSE_MARKER) {
                self.depth -= 1;
                if self.depth == 0 {
                    return Some(self.flush());
                }
            } else if trimmed.starts_with(OPEN_MARKER) {
                self.depth += 1;
            }
            self.text.push_str(line);
            self.text.push('\n');
        }
        None
    }

    /// Emits the accumulated region as one preformatted block, resetting the
    /// tracker. Also used at end of document to salvage an unterminated
    /// region.
    pub fn flush(&mut self) -> String {
        self.depth = 0;
        let text = std::mem::take(&mut self.text);
        format!("<pre class=\"code\">{text}</pre>\n")
    }
}
