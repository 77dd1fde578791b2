//! # HTML Rendering
//!
//! Drives the paragraph stream through tag dispatch and accumulates the
//! output document.
//!
//! - **`headings`**: per-kind open/closed state for chapter/section/title
//!   wrappers
//! - **`code`**: `CodeTracker`, the nested code-region state machine
//! - **`dispatch`**: `TagKind` and the per-tag fragment emitters
//! - **`template`**: the fixed page skeleton
//!
//! The renderer never hard-fails: unrecognized tags, malformed parameters
//! and unterminated code regions degrade to [`RenderWarning`]s and a
//! best-effort complete document.

pub mod code;
pub mod dispatch;
pub mod headings;
pub mod template;

use thiserror::Error;

use crate::parsing::{Paragraphs, TagRegistry, extract_params};
use code::CodeTracker;
use dispatch::TagKind;
use headings::{HeadingKind, HeadingState};

/// A recoverable condition met while rendering one document.
///
/// Warnings are data; the caller decides the diagnostics stream. None of
/// them stop rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderWarning {
    #[error("unknown tag \"{name}\", ignoring")]
    UnrecognizedTag { name: String },
    #[error("malformed parameters for tag \"{tag}\": {reason}")]
    MalformedParameters { tag: String, reason: String },
    #[error("document ended inside a code block (depth {depth}), flushing as-is")]
    UnterminatedCode { depth: usize },
}

/// The finished document plus everything worth reporting about it.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// A complete HTML document, best effort even for broken input.
    pub html: String,
    /// Recoverable conditions in document order.
    pub warnings: Vec<RenderWarning>,
}

/// Renders a document with the builtin tag table.
pub fn render_document(text: &str, style: &str) -> RenderOutput {
    render_document_with(&TagRegistry::builtin(), text, style)
}

/// Renders a document against a caller-supplied tag registry.
///
/// Pure function of its inputs: all rendering state lives inside the call,
/// so identical input and style yield byte-identical output.
pub fn render_document_with(registry: &TagRegistry, text: &str, style: &str) -> RenderOutput {
    let mut renderer = Renderer::new(registry);
    for paragraph in Paragraphs::new(text) {
        renderer.push_paragraph(paragraph);
    }
    let (body, warnings) = renderer.finish();
    RenderOutput {
        html: template::compose(&body, style),
        warnings,
    }
}

/// Accumulates body HTML across the paragraph stream.
struct Renderer<'r> {
    registry: &'r TagRegistry,
    headings: HeadingState,
    code: CodeTracker,
    in_list: bool,
    body: String,
    warnings: Vec<RenderWarning>,
}

impl<'r> Renderer<'r> {
    fn new(registry: &'r TagRegistry) -> Self {
        Self {
            registry,
            headings: HeadingState::default(),
            code: CodeTracker::new(),
            in_list: false,
            body: String::new(),
            warnings: Vec::new(),
        }
    }

    fn push_paragraph(&mut self, paragraph: &str) {
        if self.code.active() {
            if let Some(block) = self.code.consume(paragraph) {
                self.body.push_str(&block);
            }
            return;
        }

        let trimmed = paragraph.trim_start();
        if trimmed.trim_end().is_empty() {
            return;
        }
        if trimmed.starts_with('[') {
            self.dispatch_tag(trimmed);
        } else {
            self.wrap_prose(paragraph.trim_end());
        }
    }

    /// Plain prose: one container per paragraph, `<ul>` while in list mode.
    fn wrap_prose(&mut self, paragraph: &str) {
        let (open, close) = if self.in_list {
            ("<ul>", "</ul>")
        } else {
            ("<p>", "</p>")
        };
        self.body.push_str(&format!("{open}{paragraph}{close}\n"));
    }

    fn dispatch_tag(&mut self, paragraph: &str) {
        let name = tag_name(paragraph);
        let Some(kinds) = self.registry.lookup(name) else {
            self.warnings.push(RenderWarning::UnrecognizedTag {
                name: name.to_string(),
            });
            return;
        };

        let (params, issues) = extract_params(paragraph, kinds);
        for issue in issues {
            self.warnings.push(RenderWarning::MalformedParameters {
                tag: name.to_ascii_lowercase(),
                reason: issue.to_string(),
            });
        }

        match TagKind::from_name(name) {
            Some(kind @ (TagKind::Chapter | TagKind::Section | TagKind::Title)) => {
                // heading() is total for these three kinds
                if let Some(heading) = kind.heading() {
                    self.open_heading(heading, &params);
                }
            }
            Some(TagKind::Img) => self.body.push_str(&dispatch::img_fragment(&params)),
            Some(TagKind::Code) => self.code.enter(),
            Some(TagKind::List) => self.in_list = !self.in_list,
            // Recognized tags without an emission rule yet.
            Some(TagKind::Box | TagKind::Quote) => {}
            // Registered by the caller as data; nothing to emit for it.
            None => {}
        }
    }

    fn open_heading(&mut self, kind: HeadingKind, params: &[String]) {
        let was_open = self.headings.open(kind);
        let title = params.first().map(String::as_str).unwrap_or("");
        self.body
            .push_str(&dispatch::heading_fragment(kind, title, was_open));
    }

    /// End of stream: salvage an open code region, then close every heading
    /// wrapper still open, in fixed enumeration order (not document order).
    fn finish(mut self) -> (String, Vec<RenderWarning>) {
        if self.code.active() {
            self.warnings.push(RenderWarning::UnterminatedCode {
                depth: self.code.depth(),
            });
            let block = self.code.flush();
            self.body.push_str(&block);
        }
        for kind in HeadingKind::ALL {
            if self.headings.is_open(kind) {
                self.body.push_str("</div>\n");
            }
        }
        (self.body, self.warnings)
    }
}

/// The tag name of a paragraph that opens with `[`: everything after the
/// bracket up to the first whitespace or `]`.
fn tag_name(paragraph: &str) -> &str {
    let after = &paragraph[1..];
    let end = after
        .find(|c: char| c.is_whitespace() || c == ']')
        .unwrap_or(after.len());
    &after[..end]
}
