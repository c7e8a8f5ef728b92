//! The project - arena owning every reflection of the symbol graph.

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{ProjectId, ReflectionId};
use super::kind::ReflectionKind;
use super::reflections::{
    DeclarationReflection, ParameterReflection, Reflection, Relation, SignatureReflection,
};
use super::types::{ReferenceType, Type};

/// A relationship edge written into the graph by [`ProjectReflection::annotate`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub relation: Relation,
    /// The member or signature that received the reference.
    pub source: ReflectionId,
    /// The member or signature it points at.
    pub target: ReflectionId,
    /// Reference name, `<Type>.<Member>`.
    pub name: SmolStr,
    /// Whether a previous value of the same relation was replaced.
    pub replaced: bool,
}

/// Why an edge could not be written.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("reflection {0} does not exist")]
    MissingReflection(ReflectionId),
    #[error("{id} is a {variant} and cannot carry {relation} links")]
    NotLinkable {
        id: ReflectionId,
        variant: &'static str,
        relation: Relation,
    },
    #[error("cannot link {from_variant} {from} to {to_variant} {to}")]
    VariantMismatch {
        from: ReflectionId,
        from_variant: &'static str,
        to: ReflectionId,
        to_variant: &'static str,
    },
}

/// The root of a symbol graph.
///
/// Reflections are stored in insertion order, which is also the order in
/// which the host visits declarations during resolution.
#[derive(Clone, Debug)]
pub struct ProjectReflection {
    id: ProjectId,
    name: SmolStr,
    reflections: IndexMap<ReflectionId, Reflection>,
    next_id: u32,
}

impl ProjectReflection {
    /// Create a new empty project.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self::with_id(ProjectId::default(), name)
    }

    pub fn with_id(id: ProjectId, name: impl Into<SmolStr>) -> Self {
        Self {
            id,
            name: name.into(),
            reflections: IndexMap::new(),
            next_id: 0,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn allocate_id(&mut self) -> ReflectionId {
        let id = ReflectionId::new(self.next_id);
        self.next_id += 1;
        id
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Add a top-level declaration.
    pub fn add_declaration(&mut self, name: impl Into<SmolStr>, kind: ReflectionKind) -> ReflectionId {
        let id = self.allocate_id();
        self.reflections
            .insert(id, Reflection::Declaration(DeclarationReflection::new(id, name, kind)));
        id
    }

    /// Add a declaration as the last child of `parent`.
    ///
    /// Returns `None` if `parent` is not a declaration of this project.
    pub fn add_child(
        &mut self,
        parent: ReflectionId,
        name: impl Into<SmolStr>,
        kind: ReflectionKind,
    ) -> Option<ReflectionId> {
        self.declaration(parent)?;
        let id = self.allocate_id();
        let mut child = DeclarationReflection::new(id, name, kind);
        child.parent = Some(parent);
        self.reflections.insert(id, Reflection::Declaration(child));
        self.declaration_mut(parent)?.children.push(id);
        Some(id)
    }

    /// Add an overload to a callable declaration. The signature takes the
    /// owner's name.
    ///
    /// Returns `None` if `owner` is not a declaration or `kind` is not a
    /// signature kind.
    pub fn add_signature(&mut self, owner: ReflectionId, kind: ReflectionKind) -> Option<ReflectionId> {
        if !kind.is_signature() {
            return None;
        }
        let name = self.declaration(owner)?.name.clone();
        let id = self.allocate_id();
        let mut signature = SignatureReflection::new(id, name, kind);
        signature.parent = Some(owner);
        self.reflections.insert(id, Reflection::Signature(signature));
        self.declaration_mut(owner)?.signatures.push(id);
        Some(id)
    }

    /// Append a parameter to a signature.
    pub fn add_parameter(
        &mut self,
        signature: ReflectionId,
        name: impl Into<SmolStr>,
        param_type: Option<Type>,
    ) -> Option<ReflectionId> {
        self.signature(signature)?;
        let id = self.allocate_id();
        let mut parameter = ParameterReflection::new(id, name, param_type);
        parameter.parent = Some(signature);
        self.reflections.insert(id, Reflection::Parameter(parameter));
        self.signature_mut(signature)?.parameters.push(id);
        Some(id)
    }

    /// Build a reference owned by this project.
    pub fn reference_to(&self, name: impl Into<SmolStr>, target: ReflectionId) -> ReferenceType {
        ReferenceType::new(name, target, self.id)
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    pub fn get(&self, id: ReflectionId) -> Option<&Reflection> {
        self.reflections.get(&id)
    }

    pub fn get_mut(&mut self, id: ReflectionId) -> Option<&mut Reflection> {
        self.reflections.get_mut(&id)
    }

    pub fn contains(&self, id: ReflectionId) -> bool {
        self.reflections.contains_key(&id)
    }

    pub fn declaration(&self, id: ReflectionId) -> Option<&DeclarationReflection> {
        self.get(id).and_then(Reflection::as_declaration)
    }

    pub fn declaration_mut(&mut self, id: ReflectionId) -> Option<&mut DeclarationReflection> {
        match self.get_mut(id)? {
            Reflection::Declaration(d) => Some(d),
            _ => None,
        }
    }

    pub fn signature(&self, id: ReflectionId) -> Option<&SignatureReflection> {
        self.get(id).and_then(Reflection::as_signature)
    }

    pub fn signature_mut(&mut self, id: ReflectionId) -> Option<&mut SignatureReflection> {
        match self.get_mut(id)? {
            Reflection::Signature(s) => Some(s),
            _ => None,
        }
    }

    pub fn parameter(&self, id: ReflectionId) -> Option<&ParameterReflection> {
        self.get(id).and_then(Reflection::as_parameter)
    }

    pub fn parameter_mut(&mut self, id: ReflectionId) -> Option<&mut ParameterReflection> {
        match self.get_mut(id)? {
            Reflection::Parameter(p) => Some(p),
            _ => None,
        }
    }

    /// The parameter types of a signature, in order.
    pub fn parameter_types(&self, signature: ReflectionId) -> Vec<Option<&Type>> {
        self.signature(signature)
            .map(|sig| {
                sig.parameters
                    .iter()
                    .map(|&id| self.parameter(id).and_then(|p| p.param_type.as_ref()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ids of every declaration, in insertion order.
    pub fn declarations(&self) -> Vec<ReflectionId> {
        self.reflections
            .values()
            .filter_map(Reflection::as_declaration)
            .map(|d| d.id)
            .collect()
    }

    /// Get the total number of reflections.
    pub fn len(&self) -> usize {
        self.reflections.len()
    }

    /// Check if the project is empty.
    pub fn is_empty(&self) -> bool {
        self.reflections.is_empty()
    }

    // ========================================================================
    // ANNOTATION
    // ========================================================================

    /// Point `source`'s `relation` field at `target`.
    ///
    /// Both ends must exist and be the same variant, either two declarations
    /// or two signatures.
    pub fn annotate(
        &mut self,
        source: ReflectionId,
        relation: Relation,
        name: impl Into<SmolStr>,
        target: ReflectionId,
    ) -> Result<Link, LinkError> {
        let target_variant = self
            .get(target)
            .ok_or(LinkError::MissingReflection(target))?
            .variant();
        let project = self.id;
        let name = name.into();

        let reflection = self
            .get_mut(source)
            .ok_or(LinkError::MissingReflection(source))?;
        let source_variant = reflection.variant();
        if matches!(reflection, Reflection::Parameter(_)) {
            return Err(LinkError::NotLinkable {
                id: source,
                variant: source_variant,
                relation,
            });
        }
        if source_variant != target_variant {
            return Err(LinkError::VariantMismatch {
                from: source,
                from_variant: source_variant,
                to: target,
                to_variant: target_variant,
            });
        }

        let relations = reflection.relations_mut().ok_or(LinkError::NotLinkable {
            id: source,
            variant: source_variant,
            relation,
        })?;
        let previous = relations.set(relation, ReferenceType::new(name.clone(), target, project));

        Ok(Link {
            relation,
            source,
            target,
            name,
            replaced: previous.is_some(),
        })
    }
}
