//! Linking redeclared members to the supertype members they inherit or
//! overwrite.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::warn;

use crate::base::ReflectionId;
use crate::converter::Context;
use crate::models::{ProjectReflection, Relation, Type};
use super::comments::copy_comment;
use super::options::ResolveOptions;
use super::report::{Diagnostic, codes};
use super::{find_member, link};

/// Supertypes of `reflection` that resolve to declarations, as
/// `(reference name, target)` pairs in declaration order.
pub fn extended_declarations(
    project: &ProjectReflection,
    reflection: ReflectionId,
) -> Vec<(SmolStr, ReflectionId)> {
    let Some(decl) = project.declaration(reflection) else {
        return Vec::new();
    };
    decl.extended_types
        .iter()
        .filter_map(Type::as_reference)
        .filter_map(|reference| {
            let target = reference.target?;
            project.declaration(target)?;
            Some((reference.name.clone(), target))
        })
        .collect()
}

/// Supertype declarations of `reflection`, without `reflection` itself.
fn supertypes_of(project: &ProjectReflection, reflection: ReflectionId) -> Vec<ReflectionId> {
    extended_declarations(project, reflection)
        .into_iter()
        .map(|(_, target)| target)
        .filter(|&target| target != reflection)
        .collect()
}

/// Whether following extends clauses from `reflection` leads back to it
/// through at least one other declaration.
///
/// Every declaration is expanded at most once, so this terminates on any graph.
pub fn has_extends_cycle(project: &ProjectReflection, reflection: ReflectionId) -> bool {
    let mut visited = FxHashSet::default();
    let mut queue: VecDeque<ReflectionId> = supertypes_of(project, reflection).into();

    while let Some(current) = queue.pop_front() {
        if current == reflection {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        queue.extend(supertypes_of(project, current));
    }
    false
}

/// Every declaration of `project` that lies on an extends cycle through at
/// least one other declaration.
///
/// One iterative Tarjan walk over the extends graph; members of strongly
/// connected components with two or more declarations are cyclic.
pub fn cyclic_declarations(project: &ProjectReflection) -> FxHashSet<ReflectionId> {
    struct Frame {
        node: ReflectionId,
        successors: Vec<ReflectionId>,
        next: usize,
    }

    let mut next_index = 0usize;
    let mut index: FxHashMap<ReflectionId, usize> = FxHashMap::default();
    let mut lowlink: FxHashMap<ReflectionId, usize> = FxHashMap::default();
    let mut on_stack = FxHashSet::default();
    let mut stack = Vec::new();
    let mut cyclic = FxHashSet::default();

    for root in project.declarations() {
        if index.contains_key(&root) {
            continue;
        }
        let mut work: Vec<Frame> = Vec::new();
        let mut pending = Some(root);

        loop {
            if let Some(node) = pending.take() {
                index.insert(node, next_index);
                lowlink.insert(node, next_index);
                next_index += 1;
                stack.push(node);
                on_stack.insert(node);
                work.push(Frame {
                    node,
                    successors: supertypes_of(project, node),
                    next: 0,
                });
            }

            let Some(frame) = work.last_mut() else {
                break;
            };
            if let Some(&successor) = frame.successors.get(frame.next) {
                frame.next += 1;
                let node = frame.node;
                match index.get(&successor) {
                    None => pending = Some(successor),
                    Some(&successor_index) if on_stack.contains(&successor) => {
                        let low = lowlink.entry(node).or_default();
                        *low = (*low).min(successor_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            let node = frame.node;
            work.pop();
            let node_low = lowlink.get(&node).copied().unwrap_or_default();
            if let Some(parent) = work.last() {
                let low = lowlink.entry(parent.node).or_default();
                *low = (*low).min(node_low);
            }
            if index.get(&node) == Some(&node_low) {
                let mut component = Vec::new();
                while let Some(member) = stack.pop() {
                    on_stack.remove(&member);
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                if component.len() > 1 {
                    cyclic.extend(component);
                }
            }
        }
    }
    cyclic
}

/// Link each member `reflection` redeclares to the matching member of each
/// supertype.
///
/// A child already carrying an `overwrites` marker is linked through
/// `overwrites`, any other through `inheritedFrom`. Signatures pair up by
/// position; extra overloads on either side stay unlinked. `in_cycle` says
/// whether `reflection` lies on an extends cycle, which is reported but does
/// not stop its direct members from being linked.
pub fn analyze_inheritance(
    ctx: &mut Context<'_>,
    options: &ResolveOptions,
    reflection: ReflectionId,
    in_cycle: bool,
) {
    let supertypes = extended_declarations(ctx.project, reflection);
    if supertypes.is_empty() {
        return;
    }

    if in_cycle {
        warn!(%reflection, "extends chain is cyclic");
        ctx.report.add(
            Diagnostic::warning(reflection, "extends chain loops back to this declaration")
                .with_code(codes::EXTENDS_CYCLE),
        );
    }

    let mut seen = FxHashSet::default();
    for (parent_name, parent) in supertypes {
        if parent == reflection {
            ctx.report.add(
                Diagnostic::warning(reflection, format!("{parent_name} extends itself"))
                    .with_code(codes::SELF_EXTENSION),
            );
            continue;
        }
        if !seen.insert(parent) {
            continue;
        }
        analyze_supertype(ctx, options, reflection, &parent_name, parent);
    }
}

fn analyze_supertype(
    ctx: &mut Context<'_>,
    options: &ResolveOptions,
    reflection: ReflectionId,
    parent_name: &str,
    parent: ReflectionId,
) {
    let parent_members = ctx
        .project
        .declaration(parent)
        .map(|d| d.children.clone())
        .unwrap_or_default();

    for parent_member in parent_members {
        let Some(member) = ctx.project.declaration(parent_member) else {
            continue;
        };
        let member_name = member.name.clone();
        let parent_signatures = member.signatures.clone();

        let Some(child) = find_member(ctx.project, reflection, &member_name, member.is_static()) else {
            continue;
        };
        let Some(child_decl) = ctx.project.declaration(child) else {
            continue;
        };
        let relation = if child_decl.get_overwrites().is_some() {
            Relation::Overwrites
        } else {
            Relation::InheritedFrom
        };
        let child_signatures = child_decl.signatures.clone();

        let reference_name = format!("{parent_name}.{member_name}");
        if ctx.report.is_linked(child, relation) {
            ctx.report.add(
                Diagnostic::info(child, format!("already linked, skipping {reference_name}"))
                    .with_code(codes::ALREADY_LINKED)
                    .with_related(parent_member),
            );
            continue;
        }

        for (&child_sig, &parent_sig) in child_signatures.iter().zip(&parent_signatures) {
            link(ctx, child_sig, relation, &reference_name, parent_sig);
        }
        if link(ctx, child, relation, &reference_name, parent_member) {
            copy_comment(ctx.project, child, parent_member, &options.inherit_doc_tag);
        }
    }
}
