//! Identifiers for nodes of the symbol graph.

use std::fmt;

/// A handle for one reflection in a [`ProjectReflection`](crate::models::ProjectReflection).
///
/// `ReflectionId` is a lightweight handle (just a u32). The reflection itself
/// lives in the project's arena, so links between members of different types
/// are plain ids rather than shared pointers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReflectionId(pub u32);

impl ReflectionId {
    /// Create a new ReflectionId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Debug for ReflectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReflectionId({})", self.0)
    }
}

impl fmt::Display for ReflectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ReflectionId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifies the project that owns a set of reflections.
///
/// Every typed reference carries one. It is opaque to resolution.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectId(pub u32);

impl fmt::Debug for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflection_id_equality() {
        let a = ReflectionId::new(1);
        let b = ReflectionId::new(1);
        let c = ReflectionId::new(2);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_reflection_id_display() {
        assert_eq!(ReflectionId::new(7).to_string(), "#7");
        assert_eq!(format!("{:?}", ReflectionId::new(7)), "ReflectionId(7)");
    }

    #[test]
    fn test_reflection_id_size() {
        assert_eq!(std::mem::size_of::<ReflectionId>(), 4);
    }
}
