//! Linking class members to the interface members they implement.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::base::ReflectionId;
use crate::converter::Context;
use crate::models::{Relation, is_type_list_equal};
use super::comments::copy_comment;
use super::options::{OverloadTieBreak, ResolveOptions};
use super::report::{Diagnostic, codes};
use super::{find_member, link, write_link};

/// Mark every member of `class` that matches a member of `interface` as its
/// implementation.
///
/// Members match by exact name and staticness, first class member wins.
/// Function and method signatures then match by parameter types, which can
/// pair several class overloads with one interface overload.
pub fn analyze_class(
    ctx: &mut Context<'_>,
    options: &ResolveOptions,
    class: ReflectionId,
    interface: ReflectionId,
) {
    let Some(interface_decl) = ctx.project.declaration(interface) else {
        return;
    };
    let interface_name = interface_decl.name.clone();
    let interface_members = interface_decl.children.clone();

    for interface_member in interface_members {
        let Some(member) = ctx.project.declaration(interface_member) else {
            continue;
        };
        let member_name = member.name.clone();
        let is_static = member.is_static();
        let callable = member.kind.is_function_or_method();
        let interface_signatures = member.signatures.clone();

        let Some(class_member) = find_member(ctx.project, class, &member_name, is_static) else {
            trace!(%class, member = %member_name, "no implementation found");
            continue;
        };

        let reference_name = format!("{interface_name}.{member_name}");
        if !link(ctx, class_member, Relation::ImplementationOf, &reference_name, interface_member) {
            continue;
        }
        copy_comment(ctx.project, class_member, interface_member, &options.inherit_doc_tag);

        if callable && !interface_signatures.is_empty() {
            let class_signatures = ctx
                .project
                .declaration(class_member)
                .map(|d| d.signatures.clone())
                .unwrap_or_default();
            link_signatures(ctx, options, &reference_name, &interface_signatures, &class_signatures);
        }
    }
}

/// Pair class signatures with interface signatures by parameter types.
fn link_signatures(
    ctx: &mut Context<'_>,
    options: &ResolveOptions,
    reference_name: &str,
    interface_signatures: &[ReflectionId],
    class_signatures: &[ReflectionId],
) {
    if class_signatures.is_empty() {
        return;
    }

    let mut matches = Vec::new();
    for &interface_sig in interface_signatures {
        let interface_params = ctx.project.parameter_types(interface_sig);
        for &class_sig in class_signatures {
            if is_type_list_equal(&interface_params, &ctx.project.parameter_types(class_sig)) {
                matches.push((interface_sig, class_sig));
            }
        }
    }

    let mut linked: FxHashMap<ReflectionId, ReflectionId> = FxHashMap::default();
    for (interface_sig, class_sig) in matches {
        if let Some(&previous) = linked.get(&class_sig) {
            ctx.report.add(
                Diagnostic::warning(
                    class_sig,
                    format!("{reference_name} has several overloads with the same parameter types"),
                )
                .with_code(codes::AMBIGUOUS_OVERLOAD)
                .with_related(previous)
                .with_related(interface_sig),
            );
            if options.overload_tie_break == OverloadTieBreak::First {
                continue;
            }
        }

        if write_link(ctx, class_sig, Relation::ImplementationOf, reference_name, interface_sig) {
            linked.insert(class_sig, interface_sig);
            copy_comment(ctx.project, class_sig, interface_sig, &options.inherit_doc_tag);
        }
    }
}
