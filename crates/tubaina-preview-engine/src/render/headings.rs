/// The three heading-producing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    Chapter,
    Section,
    Title,
}

impl HeadingKind {
    /// Fixed enumeration order, also the order dangling wrappers are closed
    /// in at end of document.
    pub const ALL: [HeadingKind; 3] = [
        HeadingKind::Chapter,
        HeadingKind::Section,
        HeadingKind::Title,
    ];

    /// The CSS class carried by the wrapper `div`.
    pub fn class_name(self) -> &'static str {
        match self {
            HeadingKind::Chapter => "chapter",
            HeadingKind::Section => "section",
            HeadingKind::Title => "title",
        }
    }

    /// The heading element for this kind.
    pub fn element(self) -> &'static str {
        match self {
            HeadingKind::Chapter => "h1",
            HeadingKind::Section => "h2",
            HeadingKind::Title => "h3",
        }
    }
}

/// Open/closed tracking for the heading wrapper of each kind.
///
/// Each kind is an independent flag: a new chapter closes the previous
/// chapter's wrapper, but sibling kinds never close each other. One instance
/// is owned by each render call; nothing is shared between documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingState {
    chapter: bool,
    section: bool,
    title: bool,
}

impl HeadingState {
    /// Marks `kind` open, returning whether it was already open (in which
    /// case the caller owes a closing wrapper first).
    pub fn open(&mut self, kind: HeadingKind) -> bool {
        let flag = self.flag_mut(kind);
        std::mem::replace(flag, true)
    }

    pub fn is_open(&self, kind: HeadingKind) -> bool {
        match kind {
            HeadingKind::Chapter => self.chapter,
            HeadingKind::Section => self.section,
            HeadingKind::Title => self.title,
        }
    }

    fn flag_mut(&mut self, kind: HeadingKind) -> &mut bool {
        match kind {
            HeadingKind::Chapter => &mut self.chapter,
            HeadingKind::Section => &mut self.section,
            HeadingKind::Title => &mut self.title,
        }
    }
}
