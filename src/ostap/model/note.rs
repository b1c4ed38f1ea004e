use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: String,
    text: String,
}

impl Note {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Lowercased `#word` markers found in the text, in order of appearance.
    ///
    /// Always derived from the current text; there is no stored tag list.
    pub fn tags(&self) -> Vec<String> {
        extract_tags(&self.text)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = normalize_tag(tag);
        self.tags().iter().any(|t| *t == wanted)
    }
}

pub fn extract_tags(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TAG_RE
        .captures_iter(&lowered)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Accepts `errand`, `#errand` or `#Errand` alike.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().trim_start_matches('#').to_lowercase()
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_lowercased_words_after_hash() {
        let note = Note::new("1000", "Buy milk #Errand and #home_stuff, not # this");
        assert_eq!(note.tags(), vec!["errand", "home_stuff"]);
    }

    #[test]
    fn edit_recomputes_tags() {
        let mut note = Note::new("1000", "buy milk #errand");
        assert!(note.has_tag("errand"));
        note.edit("call mom");
        assert!(note.tags().is_empty());
        assert!(!note.has_tag("errand"));
    }

    #[test]
    fn has_tag_accepts_hash_prefix() {
        let note = Note::new("1000", "#Work meeting");
        assert!(note.has_tag("#work"));
        assert!(note.has_tag("WORK"));
    }
}
