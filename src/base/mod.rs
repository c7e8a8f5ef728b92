//! Foundation types for the tydoc toolchain.
//!
//! - [`ReflectionId`] - Handle of a node in the symbol graph
//! - [`ProjectId`] - Handle of the project owning the graph
//!
//! This module has NO dependencies on other tydoc modules.

mod ids;

pub use ids::{ProjectId, ReflectionId};
