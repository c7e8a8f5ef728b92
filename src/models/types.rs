//! Types as seen by the documentation model.
//!
//! Only [`Type::Reference`] points back into the graph. The other variants
//! exist so that parameter lists can be compared structurally.

use smol_str::SmolStr;

use crate::base::{ProjectId, ReflectionId};

/// A type reference to another declaration of the project.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceType {
    /// Display name, e.g. `Shape` or `Shape.area` for member links.
    pub name: SmolStr,
    /// The reflection this reference resolves to, if it resolved at all.
    pub target: Option<ReflectionId>,
    /// The project owning `target`.
    pub project: ProjectId,
    pub type_arguments: Vec<Type>,
}

impl ReferenceType {
    pub fn new(name: impl Into<SmolStr>, target: ReflectionId, project: ProjectId) -> Self {
        Self {
            name: name.into(),
            target: Some(target),
            project,
            type_arguments: Vec::new(),
        }
    }

    /// A reference whose target could not be resolved to a reflection.
    pub fn unresolved(name: impl Into<SmolStr>, project: ProjectId) -> Self {
        Self {
            name: name.into(),
            target: None,
            project,
            type_arguments: Vec::new(),
        }
    }

    pub fn with_type_arguments(mut self, type_arguments: Vec<Type>) -> Self {
        self.type_arguments = type_arguments;
        self
    }

    fn equals(&self, other: &ReferenceType) -> bool {
        let same_target = match (self.target, other.target) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.name == other.name,
            _ => false,
        };
        same_target && is_type_list_equal_ordered(&self.type_arguments, &other.type_arguments)
    }
}

/// A type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Reference(ReferenceType),
    /// Built-in types such as `string` or `void`.
    Intrinsic(SmolStr),
    /// Literal types, stored in their source form (`"a"`, `42`, `true`).
    Literal(SmolStr),
    Array(Box<Type>),
    Union(Vec<Type>),
    Intersection(Vec<Type>),
    Tuple(Vec<Type>),
    /// Anything the graph builder could not classify.
    Unknown(SmolStr),
}

impl Type {
    pub fn intrinsic(name: impl Into<SmolStr>) -> Self {
        Type::Intrinsic(name.into())
    }

    /// Returns the reference if this is a reference type.
    pub fn as_reference(&self) -> Option<&ReferenceType> {
        match self {
            Type::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Structural equality.
    ///
    /// Unions and intersections are unordered; everything else is compared
    /// in order. Generic substitution is not attempted.
    pub fn equals(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Reference(a), Type::Reference(b)) => a.equals(b),
            (Type::Intrinsic(a), Type::Intrinsic(b))
            | (Type::Literal(a), Type::Literal(b))
            | (Type::Unknown(a), Type::Unknown(b)) => a == b,
            (Type::Array(a), Type::Array(b)) => a.equals(b),
            (Type::Tuple(a), Type::Tuple(b)) => is_type_list_equal_ordered(a, b),
            (Type::Union(a), Type::Union(b)) | (Type::Intersection(a), Type::Intersection(b)) => {
                is_type_list_equivalent(a, b)
            }
            _ => false,
        }
    }
}

/// Compare two parameter type lists position by position.
///
/// A parameter without a declared type only equals another parameter without
/// a declared type.
pub fn is_type_list_equal(a: &[Option<&Type>], b: &[Option<&Type>]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(left, right)| match (left, right) {
            (Some(left), Some(right)) => left.equals(right),
            (None, None) => true,
            _ => false,
        })
}

fn is_type_list_equal_ordered(a: &[Type], b: &[Type]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(left, right)| left.equals(right))
}

fn is_type_list_equivalent(a: &[Type], b: &[Type]) -> bool {
    a.len() == b.len()
        && a.iter().all(|left| b.iter().any(|right| left.equals(right)))
        && b.iter().all(|right| a.iter().any(|left| left.equals(right)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str, target: u32) -> Type {
        Type::Reference(ReferenceType::new(name, ReflectionId::new(target), ProjectId::default()))
    }

    #[test]
    fn test_reference_equality_uses_target() {
        assert!(reference("A", 1).equals(&reference("Alias", 1)));
        assert!(!reference("A", 1).equals(&reference("A", 2)));
    }

    #[test]
    fn test_unresolved_reference_equality_uses_name() {
        let a = Type::Reference(ReferenceType::unresolved("Foo", ProjectId::default()));
        let b = Type::Reference(ReferenceType::unresolved("Foo", ProjectId::default()));
        let c = Type::Reference(ReferenceType::unresolved("Bar", ProjectId::default()));
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert!(!a.equals(&reference("Foo", 1)));
    }

    #[test]
    fn test_reference_equality_compares_type_arguments() {
        let list = |argument: &str| {
            Type::Reference(
                ReferenceType::new("List", ReflectionId::new(1), ProjectId::default())
                    .with_type_arguments(vec![Type::intrinsic(argument)]),
            )
        };
        let bare = reference("List", 1);

        assert!(list("string").equals(&list("string")));
        assert!(!list("string").equals(&list("number")));
        assert!(!list("string").equals(&bare));
    }

    #[test]
    fn test_union_is_unordered() {
        let a = Type::Union(vec![Type::intrinsic("string"), Type::intrinsic("number")]);
        let b = Type::Union(vec![Type::intrinsic("number"), Type::intrinsic("string")]);
        assert!(a.equals(&b));
    }

    #[test]
    fn test_tuple_is_ordered() {
        let a = Type::Tuple(vec![Type::intrinsic("string"), Type::intrinsic("number")]);
        let b = Type::Tuple(vec![Type::intrinsic("number"), Type::intrinsic("string")]);
        assert!(!a.equals(&b));
    }

    #[test]
    fn test_type_list_equal() {
        let string = Type::intrinsic("string");
        let number = Type::intrinsic("number");

        assert!(is_type_list_equal(&[Some(&string)], &[Some(&string)]));
        assert!(is_type_list_equal(&[], &[]));
        assert!(is_type_list_equal(&[None], &[None]));
        assert!(!is_type_list_equal(&[Some(&string)], &[Some(&number)]));
        assert!(!is_type_list_equal(&[Some(&string)], &[None]));
        assert!(!is_type_list_equal(&[Some(&string)], &[Some(&string), Some(&number)]));
    }
}
