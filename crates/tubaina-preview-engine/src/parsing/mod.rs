//! # Markup Parsing
//!
//! The parsing side of the pipeline, leaves first:
//!
//! - **`paragraphs`**: `Paragraphs` splits the raw document into a lazy
//!   stream of paragraph slices
//! - **`cursor`**: `Cursor` tracks a scan position inside one paragraph
//! - **`params`**: `extract_params` pulls ordered parameter values out of a
//!   tag paragraph according to its declared `ParamKind` sequence
//! - **`registry`**: `TagRegistry` maps tag names to their parameter grammar
//!
//! ## Key invariants
//!
//! - Every input byte belongs to exactly one yielded paragraph; concatenating
//!   the paragraph slices reproduces the document byte-for-byte
//! - Parameter extraction never fails the document: missing trailing
//!   parameters are absent, malformed ones degrade to empty values plus a
//!   [`params::ParamIssue`]

pub mod cursor;
pub mod paragraphs;
pub mod params;
pub mod registry;

pub use cursor::Cursor;
pub use paragraphs::Paragraphs;
pub use params::{ParamKind, extract_params};
pub use registry::TagRegistry;
