//! # tydoc-base
//!
//! Core library for documentation symbol graphs: links class members to the
//! interface members they implement and to the supertype members they
//! inherit or overwrite, and carries `@inheritdoc` documentation along
//! those links.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! converter → Resolve-phase driver (listeners, priorities)
//!   ↓
//! resolve   → Implements/inheritance matching, doc propagation
//!   ↓
//! models    → Reflections, types, comments, project arena
//!   ↓
//! base      → Primitives (ReflectionId, ProjectId)
//! ```

/// Foundation types: ReflectionId, ProjectId
pub mod base;

/// The symbol graph consumed and annotated by resolution
pub mod models;

/// Implementation and inheritance resolution
pub mod resolve;

/// Resolve-phase driver
pub mod converter;

pub use base::{ProjectId, ReflectionId};
pub use converter::{Context, Converter, ResolveListener, resolve_project};
pub use models::{ProjectReflection, Relation};
pub use resolve::{ImplementsPlugin, ResolutionReport, ResolveOptions};
