use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::params::ParamKind;

/// The table of supported tags: tag name to declared parameter grammar.
///
/// Lookup is case-insensitive. The registry is plain data so callers and
/// tests can extend the supported tags without touching the algorithms; the
/// builtin table covers the tags the renderer knows how to emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRegistry {
    tags: HashMap<String, Vec<ParamKind>>,
}

impl TagRegistry {
    /// The builtin Tubaina tag table.
    pub fn builtin() -> Self {
        use ParamKind::*;
        let mut registry = Self {
            tags: HashMap::new(),
        };
        registry.register("chapter", vec![FreeText]);
        registry.register("section", vec![FreeText]);
        registry.register("title", vec![FreeText]);
        registry.register("box", vec![FreeText]);
        registry.register("code", vec![BareToken]);
        registry.register("list", vec![BareToken]);
        registry.register("img", vec![BareToken, PrefixedToken, QuotedString]);
        registry.register("quote", vec![QuotedString, FreeText]);
        registry
    }

    /// Adds or replaces a tag. The name is normalized to lowercase.
    pub fn register(&mut self, name: &str, kinds: Vec<ParamKind>) {
        self.tags.insert(name.to_ascii_lowercase(), kinds);
    }

    /// Case-insensitive lookup of a tag's parameter grammar.
    pub fn lookup(&self, name: &str) -> Option<&[ParamKind]> {
        self.tags
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(&name.to_ascii_lowercase())
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tags_are_present() {
        let registry = TagRegistry::builtin();
        for tag in ["chapter", "section", "title", "box", "code", "list", "img", "quote"] {
            assert!(registry.contains(tag), "missing builtin tag {tag}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = TagRegistry::builtin();
        assert_eq!(registry.lookup("CHAPTER"), registry.lookup("chapter"));
        assert!(registry.lookup("Img").is_some());
    }

    #[test]
    fn unknown_tag_is_none() {
        assert_eq!(TagRegistry::builtin().lookup("foobar"), None);
    }

    #[test]
    fn img_grammar_is_positional() {
        use ParamKind::*;
        let registry = TagRegistry::builtin();
        assert_eq!(
            registry.lookup("img"),
            Some([BareToken, PrefixedToken, QuotedString].as_slice())
        );
    }

    #[test]
    fn callers_can_register_extra_tags() {
        let mut registry = TagRegistry::builtin();
        registry.register("Note", vec![ParamKind::FreeText]);
        assert_eq!(
            registry.lookup("note"),
            Some([ParamKind::FreeText].as_slice())
        );
    }
}
