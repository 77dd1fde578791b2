//! # tubaina-preview-engine
//!
//! Converts Tubaina (`.afc`) book markup to a complete HTML document.
//!
//! The input is a plain-text document of prose paragraphs interleaved with
//! bracket-delimited directives such as `[chapter Intro]` or `[img photo.png]`.
//! [`render_document`] runs the whole pipeline: paragraph segmentation, tag
//! recognition, parameter extraction and HTML emission, then wraps the body
//! and a caller-supplied style string in a fixed page skeleton.
//!
//! ```
//! use tubaina_preview_engine::render_document;
//!
//! let out = render_document("[chapter Intro]\nHello, book.\n", "");
//! assert!(out.html.contains("<h1>Intro</h1>"));
//! assert!(out.warnings.is_empty());
//! ```

pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::params::ParamKind;
pub use parsing::registry::TagRegistry;
pub use render::{RenderOutput, RenderWarning, render_document, render_document_with};
