//! Resolution report - links made and diagnostics raised during a pass.
//!
//! Resolution never fails. Anything unusual it meets is recorded here as a
//! [`Diagnostic`] so hosts can surface it, and every edge written into the
//! graph is kept as a [`Link`] for auditing.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::base::ReflectionId;
use crate::models::{Link, Relation};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Info,
}

/// A diagnostic message attached to a reflection.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// The reflection being resolved when the diagnostic was raised.
    pub reflection: ReflectionId,
    pub severity: Severity,
    /// Diagnostic code (e.g., "R0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
    /// Other reflections involved.
    pub related: Vec<ReflectionId>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(reflection: ReflectionId, message: impl Into<Arc<str>>) -> Self {
        Self {
            reflection,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Create a new informational diagnostic.
    pub fn info(reflection: ReflectionId, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Info,
            ..Self::warning(reflection, message)
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add a related reflection.
    pub fn with_related(mut self, related: ReflectionId) -> Self {
        self.related.push(related);
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable codes for resolution diagnostics.
pub mod codes {
    /// An edge was rejected by the graph.
    pub const LINK_REJECTED: &str = "R0001";
    /// A declaration lists itself as a supertype.
    pub const SELF_EXTENSION: &str = "R0002";
    /// The extends chain loops back to the declaration.
    pub const EXTENDS_CYCLE: &str = "R0003";
    /// Two interface overloads share a parameter type list.
    pub const AMBIGUOUS_OVERLOAD: &str = "R0004";
    /// A member already received this relation earlier in the pass.
    pub const ALREADY_LINKED: &str = "R0005";
}

// ============================================================================
// REPORT
// ============================================================================

/// Everything a resolution pass produced besides the graph mutations.
#[derive(Clone, Debug, Default)]
pub struct ResolutionReport {
    links: Vec<Link>,
    linked: FxHashSet<(ReflectionId, Relation)>,
    diagnostics: Vec<Diagnostic>,
}

impl ResolutionReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edge written into the graph.
    pub fn record_link(&mut self, link: Link) {
        self.linked.insert((link.source, link.relation));
        self.links.push(link);
    }

    /// Whether `reflection` already received `relation` during this pass.
    pub fn is_linked(&self, reflection: ReflectionId, relation: Relation) -> bool {
        self.linked.contains(&(reflection, relation))
    }

    /// All links, in the order they were made.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Links whose source is `reflection`.
    pub fn links_from(&self, reflection: ReflectionId) -> Vec<&Link> {
        self.links.iter().filter(|l| l.source == reflection).collect()
    }

    /// The most recent link of `relation` made for `reflection`.
    pub fn link_for(&self, reflection: ReflectionId, relation: Relation) -> Option<&Link> {
        self.links
            .iter()
            .rev()
            .find(|l| l.source == reflection && l.relation == relation)
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics carrying the given code.
    pub fn diagnostics_with_code(&self, code: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.code.as_deref() == Some(code))
            .collect()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Warning)
    }

    /// Take all diagnostics, leaving the links in place.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Serialize the links for a downstream renderer.
    #[cfg(feature = "serde")]
    pub fn links_to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.links)
    }
}
