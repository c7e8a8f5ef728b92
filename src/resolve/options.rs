//! Options controlling the implements/inheritance pass.

use smol_str::SmolStr;

/// Tag that asks for documentation to be inherited.
pub const DEFAULT_INHERIT_DOC_TAG: &str = "inheritdoc";

/// Resolve-phase priority of the pass. Negative so it runs after listeners
/// that still add members to declarations.
pub const DEFAULT_PRIORITY: i32 = -10;

/// Which interface overload a class signature links to when several interface
/// overloads share the same parameter types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverloadTieBreak {
    /// Keep the first matching interface overload.
    #[default]
    First,
    /// Let each later matching overload replace the previous one.
    Last,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ResolveOptions {
    pub inherit_doc_tag: SmolStr,
    pub priority: i32,
    pub overload_tie_break: OverloadTieBreak,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            inherit_doc_tag: SmolStr::new_static(DEFAULT_INHERIT_DOC_TAG),
            priority: DEFAULT_PRIORITY,
            overload_tie_break: OverloadTieBreak::First,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inherit_doc_tag(mut self, tag: impl Into<SmolStr>) -> Self {
        self.inherit_doc_tag = tag.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_overload_tie_break(mut self, tie_break: OverloadTieBreak) -> Self {
        self.overload_tie_break = tie_break;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ResolveOptions::default();
        assert_eq!(options.inherit_doc_tag, "inheritdoc");
        assert_eq!(options.priority, -10);
        assert_eq!(options.overload_tie_break, OverloadTieBreak::First);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_keeps_defaults() {
        let options: ResolveOptions =
            serde_json::from_str(r#"{ "overloadTieBreak": "last" }"#).unwrap();
        assert_eq!(options.overload_tie_break, OverloadTieBreak::Last);
        assert_eq!(options.inherit_doc_tag, DEFAULT_INHERIT_DOC_TAG);
    }
}
