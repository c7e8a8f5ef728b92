//! Implementation and inheritance resolution.
//!
//! Runs once per declaration after the symbol graph is fully built, and
//! annotates class and interface members with the member they implement
//! (`implementationOf`), inherit (`inheritedFrom`) or overwrite
//! (`overwrites`).
//!
//! ## Architecture
//!
//! 1. **Trigger** - [`ImplementsPlugin`] inspects the visited declaration's
//!    `implements` and `extends` clauses
//! 2. **Matching** - [`analyze_class`] and [`analyze_inheritance`] pair members
//!    by name and staticness, then signatures by type or position
//! 3. **Annotation** - every edge goes through
//!    [`ProjectReflection::annotate`](crate::models::ProjectReflection::annotate)
//!    and is recorded in the [`ResolutionReport`]
//! 4. **Documentation** - [`copy_comment`] follows new edges when the member
//!    asks for it with `@inheritdoc`

mod comments;
mod implements;
mod inheritance;
mod options;
mod report;

pub use comments::copy_comment;
pub use implements::analyze_class;
pub use inheritance::{
    analyze_inheritance, cyclic_declarations, extended_declarations, has_extends_cycle,
};
pub use options::{DEFAULT_INHERIT_DOC_TAG, DEFAULT_PRIORITY, OverloadTieBreak, ResolveOptions};
pub use report::{Diagnostic, ResolutionReport, Severity, codes};

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::base::ReflectionId;
use crate::converter::{Context, ResolveListener};
use crate::models::{ProjectReflection, ReflectionKind, Relation, Type};

/// Detects interface implementations and inherited members of classes and
/// interfaces and links them.
#[derive(Clone, Debug, Default)]
pub struct ImplementsPlugin {
    options: ResolveOptions,
    /// Declarations on an extends cycle, computed once per converter run.
    cyclic: Option<FxHashSet<ReflectionId>>,
}

impl ImplementsPlugin {
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            options,
            cyclic: None,
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve one declaration.
    pub fn resolve(&self, ctx: &mut Context<'_>, reflection: ReflectionId) {
        let Some(decl) = ctx.project.declaration(reflection) else {
            return;
        };
        let kind = decl.kind;
        let has_extends = !decl.extended_types.is_empty();
        let interfaces: Vec<ReflectionId> = if kind == ReflectionKind::Class {
            let mut seen = FxHashSet::default();
            decl.implemented_types
                .iter()
                .filter_map(Type::as_reference)
                .filter_map(|reference| reference.target)
                .filter(|&target| {
                    ctx.project
                        .declaration(target)
                        .is_some_and(|d| d.kind == ReflectionKind::Interface)
                })
                .filter(|&target| seen.insert(target))
                .collect()
        } else {
            Vec::new()
        };

        for interface in interfaces {
            analyze_class(ctx, &self.options, reflection, interface);
        }

        if kind.is_class_or_interface() && has_extends {
            let in_cycle = match &self.cyclic {
                Some(cyclic) => cyclic.contains(&reflection),
                None => has_extends_cycle(ctx.project, reflection),
            };
            analyze_inheritance(ctx, &self.options, reflection, in_cycle);
        }
    }
}

impl ResolveListener for ImplementsPlugin {
    fn name(&self) -> &str {
        "implements"
    }

    fn priority(&self) -> i32 {
        self.options.priority
    }

    fn on_begin(&mut self, ctx: &mut Context<'_>) {
        self.cyclic = Some(cyclic_declarations(ctx.project));
    }

    fn on_resolve(&mut self, ctx: &mut Context<'_>, reflection: ReflectionId) {
        self.resolve(ctx, reflection);
    }

    fn on_end(&mut self, _ctx: &mut Context<'_>) {
        self.cyclic = None;
    }
}

/// Find the first direct child of `owner` named `name` with the given
/// staticness.
pub(crate) fn find_member(
    project: &ProjectReflection,
    owner: ReflectionId,
    name: &str,
    is_static: bool,
) -> Option<ReflectionId> {
    project
        .declaration(owner)?
        .children
        .iter()
        .copied()
        .find(|&child| {
            project
                .declaration(child)
                .is_some_and(|c| c.name == name && c.is_static() == is_static)
        })
}

/// Write an edge unless `source` already got `relation` earlier in this pass.
pub(crate) fn link(
    ctx: &mut Context<'_>,
    source: ReflectionId,
    relation: Relation,
    name: &str,
    target: ReflectionId,
) -> bool {
    if ctx.report.is_linked(source, relation) {
        trace!(%source, %relation, reference = name, "already linked");
        ctx.report.add(
            Diagnostic::info(source, format!("already linked, skipping {name}"))
                .with_code(codes::ALREADY_LINKED)
                .with_related(target),
        );
        return false;
    }
    write_link(ctx, source, relation, name, target)
}

/// Write an edge, replacing whatever the relation held.
pub(crate) fn write_link(
    ctx: &mut Context<'_>,
    source: ReflectionId,
    relation: Relation,
    name: &str,
    target: ReflectionId,
) -> bool {
    match ctx.project.annotate(source, relation, name, target) {
        Ok(link) => {
            debug!(%source, %relation, %target, reference = name, "linked");
            ctx.report.record_link(link);
            true
        }
        Err(err) => {
            warn!(%source, %relation, %target, "link rejected: {err}");
            ctx.report.add(
                Diagnostic::warning(source, err.to_string())
                    .with_code(codes::LINK_REJECTED)
                    .with_related(target),
            );
            false
        }
    }
}
