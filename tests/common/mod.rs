//! Shared graph-building helpers for integration tests.
#![allow(dead_code)]

use tydoc::ReflectionId;
use tydoc::models::{
    Comment, CommentTag, ProjectReflection, ReferenceType, ReflectionFlags, ReflectionKind,
    Relation, Type,
};

pub fn string() -> Type {
    Type::intrinsic("string")
}

pub fn number() -> Type {
    Type::intrinsic("number")
}

pub fn boolean() -> Type {
    Type::intrinsic("boolean")
}

/// A comment asking to inherit documentation.
pub fn inheritdoc() -> Comment {
    Comment::with_short_text("placeholder").with_tag(CommentTag::new("inheritdoc", ""))
}

pub fn doc(text: &str) -> Comment {
    Comment::with_short_text(text)
}

/// Thin builder over [`ProjectReflection`].
pub struct Graph {
    pub project: ProjectReflection,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            project: ProjectReflection::new("test"),
        }
    }

    pub fn class(&mut self, name: &str) -> ReflectionId {
        self.project.add_declaration(name, ReflectionKind::Class)
    }

    pub fn interface(&mut self, name: &str) -> ReflectionId {
        self.project.add_declaration(name, ReflectionKind::Interface)
    }

    pub fn property(&mut self, owner: ReflectionId, name: &str) -> ReflectionId {
        self.project
            .add_child(owner, name, ReflectionKind::Property)
            .expect("owner is a declaration")
    }

    pub fn static_property(&mut self, owner: ReflectionId, name: &str) -> ReflectionId {
        let id = self.property(owner, name);
        self.project.declaration_mut(id).unwrap().flags = ReflectionFlags::statik();
        id
    }

    pub fn method(&mut self, owner: ReflectionId, name: &str) -> ReflectionId {
        self.project
            .add_child(owner, name, ReflectionKind::Method)
            .expect("owner is a declaration")
    }

    pub fn static_method(&mut self, owner: ReflectionId, name: &str) -> ReflectionId {
        let id = self.method(owner, name);
        self.project.declaration_mut(id).unwrap().flags = ReflectionFlags::statik();
        id
    }

    /// Add an overload taking parameters of the given types.
    pub fn signature(&mut self, method: ReflectionId, params: &[Type]) -> ReflectionId {
        let sig = self
            .project
            .add_signature(method, ReflectionKind::CallSignature)
            .expect("method is a declaration");
        for (index, param_type) in params.iter().enumerate() {
            self.project
                .add_parameter(sig, format!("p{index}"), Some(param_type.clone()))
                .unwrap();
        }
        sig
    }

    pub fn parameters(&self, sig: ReflectionId) -> Vec<ReflectionId> {
        self.project.signature(sig).unwrap().parameters.clone()
    }

    pub fn implements(&mut self, class: ReflectionId, interface: ReflectionId) {
        let reference = self.reference(interface);
        self.project
            .declaration_mut(class)
            .unwrap()
            .implemented_types
            .push(reference);
    }

    pub fn extends(&mut self, child: ReflectionId, parent: ReflectionId) {
        let reference = self.reference(parent);
        self.project
            .declaration_mut(child)
            .unwrap()
            .extended_types
            .push(reference);
    }

    pub fn reference(&self, target: ReflectionId) -> Type {
        let name = self.project.get(target).unwrap().name().to_string();
        Type::Reference(self.project.reference_to(name, target))
    }

    /// A reference to `target` instantiated with `type_arguments`.
    pub fn generic(&self, target: ReflectionId, type_arguments: Vec<Type>) -> Type {
        let name = self.project.get(target).unwrap().name().to_string();
        Type::Reference(
            self.project
                .reference_to(name, target)
                .with_type_arguments(type_arguments),
        )
    }

    pub fn set_comment(&mut self, id: ReflectionId, comment: Comment) {
        *self.project.get_mut(id).unwrap().comment_mut() = Some(comment);
    }

    /// Pretend an earlier pass marked `member` as overwriting something.
    pub fn mark_overwrites(&mut self, member: ReflectionId) {
        let marker = ReferenceType::unresolved("marker", self.project.id());
        self.project
            .declaration_mut(member)
            .unwrap()
            .relations
            .overwrites = Some(marker);
    }

    pub fn relation(&self, id: ReflectionId, relation: Relation) -> Option<&ReferenceType> {
        self.project.get(id)?.relations()?.get(relation)
    }

    pub fn target(&self, id: ReflectionId, relation: Relation) -> Option<ReflectionId> {
        self.relation(id, relation).and_then(|r| r.target)
    }

    pub fn short_text(&self, id: ReflectionId) -> Option<String> {
        self.project
            .get(id)?
            .comment()
            .map(|c| c.short_text.clone())
    }
}
