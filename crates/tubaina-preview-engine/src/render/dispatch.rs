use super::headings::HeadingKind;

/// The closed set of builtin tags the renderer dispatches on.
///
/// Exhaustive matching over this enum keeps every tag's emission rule
/// explicit, including the recognized-but-not-rendered ones; a tag name
/// outside the set is either caller-registered data (extracted, not
/// emitted) or an unrecognized-tag warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Chapter,
    Section,
    Title,
    Img,
    Code,
    List,
    /// Recognized, parameters extracted, no emission rule yet.
    Box,
    /// Recognized, parameters extracted, no emission rule yet.
    Quote,
}

impl TagKind {
    /// Case-insensitive mapping from tag name.
    pub fn from_name(name: &str) -> Option<TagKind> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "chapter" => TagKind::Chapter,
            "section" => TagKind::Section,
            "title" => TagKind::Title,
            "img" => TagKind::Img,
            "code" => TagKind::Code,
            "list" => TagKind::List,
            "box" => TagKind::Box,
            "quote" => TagKind::Quote,
            _ => return None,
        };
        Some(kind)
    }

    pub fn heading(self) -> Option<HeadingKind> {
        match self {
            TagKind::Chapter => Some(HeadingKind::Chapter),
            TagKind::Section => Some(HeadingKind::Section),
            TagKind::Title => Some(HeadingKind::Title),
            _ => None,
        }
    }
}

/// Wrapper `div` plus heading element for a chapter/section/title tag.
/// When that kind was already open, its previous wrapper is closed first.
pub fn heading_fragment(kind: HeadingKind, title: &str, was_open: bool) -> String {
    let mut html = String::new();
    if was_open {
        html.push_str("</div>\n");
    }
    html.push_str(&format!("<div class=\"{}\">\n", kind.class_name()));
    let element = kind.element();
    html.push_str(&format!("<{element}>{title}</{element}>\n"));
    html
}

/// `img` element from positional parameters: src, optional width, optional
/// caption paragraph. Parameters beyond the third are ignored.
pub fn img_fragment(params: &[String]) -> String {
    let src = params.first().map(String::as_str).unwrap_or("");
    let mut html = format!("<img src=\"{src}\"");
    if let Some(width) = params.get(1) {
        html.push_str(&format!(" width=\"{width}\""));
    }
    html.push_str(">\n");
    if let Some(caption) = params.get(2) {
        html.push_str(&format!("<p class=\"caption\">{caption}</p>\n"));
    }
    html
}
