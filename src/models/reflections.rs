//! Reflections - the nodes of the symbol graph.

use std::fmt;

use smol_str::SmolStr;

use crate::base::ReflectionId;
use super::comment::Comment;
use super::kind::{ReflectionFlags, ReflectionKind};
use super::types::{ReferenceType, Type};

// ============================================================================
// RELATIONS
// ============================================================================

/// The cross-type relationships a member or signature can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// The member implements an interface member.
    ImplementationOf,
    /// The member is visible through a supertype.
    InheritedFrom,
    /// The member redeclares a supertype member.
    Overwrites,
}

impl Relation {
    /// The field name used by renderers.
    pub fn display(&self) -> &'static str {
        match self {
            Relation::ImplementationOf => "implementationOf",
            Relation::InheritedFrom => "inheritedFrom",
            Relation::Overwrites => "overwrites",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Relationship fields shared by declarations and signatures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relations {
    pub implementation_of: Option<ReferenceType>,
    pub inherited_from: Option<ReferenceType>,
    pub overwrites: Option<ReferenceType>,
}

impl Relations {
    pub fn get(&self, relation: Relation) -> Option<&ReferenceType> {
        match relation {
            Relation::ImplementationOf => self.implementation_of.as_ref(),
            Relation::InheritedFrom => self.inherited_from.as_ref(),
            Relation::Overwrites => self.overwrites.as_ref(),
        }
    }

    /// Set a relation, returning the reference it replaced.
    pub fn set(&mut self, relation: Relation, reference: ReferenceType) -> Option<ReferenceType> {
        let slot = match relation {
            Relation::ImplementationOf => &mut self.implementation_of,
            Relation::InheritedFrom => &mut self.inherited_from,
            Relation::Overwrites => &mut self.overwrites,
        };
        slot.replace(reference)
    }
}

// ============================================================================
// REFLECTIONS
// ============================================================================

/// A class, interface, member or any other named declaration.
#[derive(Clone, Debug)]
pub struct DeclarationReflection {
    pub id: ReflectionId,
    pub name: SmolStr,
    pub kind: ReflectionKind,
    pub flags: ReflectionFlags,
    pub parent: Option<ReflectionId>,
    pub comment: Option<Comment>,
    /// Direct members, in declaration order.
    pub children: Vec<ReflectionId>,
    /// Overloads of a callable member, in declaration order.
    pub signatures: Vec<ReflectionId>,
    /// Types listed in an `implements` clause.
    pub implemented_types: Vec<Type>,
    /// Types listed in an `extends` clause.
    pub extended_types: Vec<Type>,
    pub relations: Relations,
}

impl DeclarationReflection {
    pub fn new(id: ReflectionId, name: impl Into<SmolStr>, kind: ReflectionKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            flags: ReflectionFlags::default(),
            parent: None,
            comment: None,
            children: Vec::new(),
            signatures: Vec::new(),
            implemented_types: Vec::new(),
            extended_types: Vec::new(),
            relations: Relations::default(),
        }
    }

    pub fn is_static(&self) -> bool {
        self.flags.is_static
    }

    /// The pre-existing `overwrites` marker, if an earlier pass set one.
    pub fn get_overwrites(&self) -> Option<&ReferenceType> {
        self.relations.overwrites.as_ref()
    }
}

/// One overload of a callable declaration.
#[derive(Clone, Debug)]
pub struct SignatureReflection {
    pub id: ReflectionId,
    pub name: SmolStr,
    pub kind: ReflectionKind,
    pub flags: ReflectionFlags,
    pub parent: Option<ReflectionId>,
    pub comment: Option<Comment>,
    pub parameters: Vec<ReflectionId>,
    pub return_type: Option<Type>,
    pub relations: Relations,
}

impl SignatureReflection {
    pub fn new(id: ReflectionId, name: impl Into<SmolStr>, kind: ReflectionKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            flags: ReflectionFlags::default(),
            parent: None,
            comment: None,
            parameters: Vec::new(),
            return_type: None,
            relations: Relations::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParameterReflection {
    pub id: ReflectionId,
    pub name: SmolStr,
    pub flags: ReflectionFlags,
    pub parent: Option<ReflectionId>,
    pub comment: Option<Comment>,
    pub param_type: Option<Type>,
}

impl ParameterReflection {
    pub fn new(id: ReflectionId, name: impl Into<SmolStr>, param_type: Option<Type>) -> Self {
        Self {
            id,
            name: name.into(),
            flags: ReflectionFlags::default(),
            parent: None,
            comment: None,
            param_type,
        }
    }
}

/// Any node of the symbol graph.
#[derive(Clone, Debug)]
pub enum Reflection {
    Declaration(DeclarationReflection),
    Signature(SignatureReflection),
    Parameter(ParameterReflection),
}

impl Reflection {
    pub fn id(&self) -> ReflectionId {
        match self {
            Reflection::Declaration(d) => d.id,
            Reflection::Signature(s) => s.id,
            Reflection::Parameter(p) => p.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Reflection::Declaration(d) => &d.name,
            Reflection::Signature(s) => &s.name,
            Reflection::Parameter(p) => &p.name,
        }
    }

    pub fn kind(&self) -> ReflectionKind {
        match self {
            Reflection::Declaration(d) => d.kind,
            Reflection::Signature(s) => s.kind,
            Reflection::Parameter(_) => ReflectionKind::Parameter,
        }
    }

    pub fn flags(&self) -> &ReflectionFlags {
        match self {
            Reflection::Declaration(d) => &d.flags,
            Reflection::Signature(s) => &s.flags,
            Reflection::Parameter(p) => &p.flags,
        }
    }

    pub fn parent(&self) -> Option<ReflectionId> {
        match self {
            Reflection::Declaration(d) => d.parent,
            Reflection::Signature(s) => s.parent,
            Reflection::Parameter(p) => p.parent,
        }
    }

    pub fn comment(&self) -> Option<&Comment> {
        match self {
            Reflection::Declaration(d) => d.comment.as_ref(),
            Reflection::Signature(s) => s.comment.as_ref(),
            Reflection::Parameter(p) => p.comment.as_ref(),
        }
    }

    pub fn comment_mut(&mut self) -> &mut Option<Comment> {
        match self {
            Reflection::Declaration(d) => &mut d.comment,
            Reflection::Signature(s) => &mut s.comment,
            Reflection::Parameter(p) => &mut p.comment,
        }
    }

    /// Relationship fields, for the variants that carry them.
    pub fn relations(&self) -> Option<&Relations> {
        match self {
            Reflection::Declaration(d) => Some(&d.relations),
            Reflection::Signature(s) => Some(&s.relations),
            Reflection::Parameter(_) => None,
        }
    }

    pub fn relations_mut(&mut self) -> Option<&mut Relations> {
        match self {
            Reflection::Declaration(d) => Some(&mut d.relations),
            Reflection::Signature(s) => Some(&mut s.relations),
            Reflection::Parameter(_) => None,
        }
    }

    pub fn as_declaration(&self) -> Option<&DeclarationReflection> {
        match self {
            Reflection::Declaration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_signature(&self) -> Option<&SignatureReflection> {
        match self {
            Reflection::Signature(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&ParameterReflection> {
        match self {
            Reflection::Parameter(p) => Some(p),
            _ => None,
        }
    }

    /// Short variant label used in diagnostics.
    pub fn variant(&self) -> &'static str {
        match self {
            Reflection::Declaration(_) => "declaration",
            Reflection::Signature(_) => "signature",
            Reflection::Parameter(_) => "parameter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::ProjectId;

    #[test]
    fn test_relations_set_returns_previous() {
        let mut relations = Relations::default();
        let first = ReferenceType::new("A.f", ReflectionId::new(1), ProjectId::default());
        let second = ReferenceType::new("B.f", ReflectionId::new(2), ProjectId::default());

        assert!(relations.set(Relation::Overwrites, first.clone()).is_none());
        assert_eq!(relations.set(Relation::Overwrites, second.clone()), Some(first));
        assert_eq!(relations.get(Relation::Overwrites), Some(&second));
        assert!(relations.get(Relation::InheritedFrom).is_none());
    }

    #[test]
    fn test_relation_display() {
        assert_eq!(Relation::ImplementationOf.to_string(), "implementationOf");
        assert_eq!(Relation::InheritedFrom.to_string(), "inheritedFrom");
        assert_eq!(Relation::Overwrites.to_string(), "overwrites");
    }
}
