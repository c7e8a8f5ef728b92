//! The documentation model - the symbol graph resolution reads and annotates.
//!
//! ## Key Types
//!
//! - [`ProjectReflection`] - arena owning every reflection
//! - [`Reflection`] - closed set of node variants (declaration, signature, parameter)
//! - [`Type`] / [`ReferenceType`] - type expressions and references into the graph
//! - [`Comment`] - parsed documentation
//! - [`Relations`] - `implementationOf` / `inheritedFrom` / `overwrites` fields

mod comment;
mod kind;
mod project;
mod reflections;
mod types;

pub use comment::{Comment, CommentTag};
pub use kind::{ReflectionFlags, ReflectionKind};
pub use project::{Link, LinkError, ProjectReflection};
pub use reflections::{
    DeclarationReflection, ParameterReflection, Reflection, Relation, Relations,
    SignatureReflection,
};
pub use types::{ReferenceType, Type, is_type_list_equal};
