//! Parsed documentation comments.

use smol_str::SmolStr;

/// A single `@tag` inside a comment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommentTag {
    /// Tag name without the leading `@`, e.g. `inheritdoc`.
    pub tag_name: SmolStr,
    /// The parameter name for `@param`-style tags.
    pub param_name: Option<SmolStr>,
    pub text: String,
}

impl CommentTag {
    pub fn new(tag_name: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            param_name: None,
            text: text.into(),
        }
    }
}

/// The documentation attached to a reflection.
///
/// Only tag detection and whole-comment copying matter to resolution; tag
/// parsing happens when the graph is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    /// The first paragraph.
    pub short_text: String,
    /// Everything after the first paragraph.
    pub text: String,
    /// Text of the `@returns` tag, kept apart from the tag list.
    pub returns: Option<String>,
    pub tags: Vec<CommentTag>,
}

impl Comment {
    /// Create a new empty comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comment with only a short text.
    pub fn with_short_text(short_text: impl Into<String>) -> Self {
        Self {
            short_text: short_text.into(),
            ..Self::default()
        }
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: CommentTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Check whether a tag with the given name is present. Case-sensitive.
    pub fn has_tag(&self, tag_name: &str) -> bool {
        self.tag(tag_name).is_some()
    }

    /// Get the first tag with the given name.
    pub fn tag(&self, tag_name: &str) -> Option<&CommentTag> {
        self.tags.iter().find(|tag| tag.tag_name == tag_name)
    }

    /// Replace this comment's content with a copy of `other`.
    pub fn copy_from(&mut self, other: &Comment) {
        self.short_text.clone_from(&other.short_text);
        self.text.clone_from(&other.text);
        self.returns.clone_from(&other.returns);
        self.tags.clone_from(&other.tags);
    }
}
