//! Documentation propagation along implementation and inheritance links.

use tracing::trace;

use crate::base::ReflectionId;
use crate::models::{Comment, ProjectReflection};

/// Copy the comment of `source` into `target` if `target` asks for it.
///
/// Nothing happens unless both have a comment and the target's comment
/// carries `inherit_doc_tag`. Between two signatures, parameters are then
/// paired by position and undocumented target parameters receive a copy of
/// the source parameter's comment. Documented target parameters are kept.
///
/// Returns true if the target comment was replaced.
pub fn copy_comment(
    project: &mut ProjectReflection,
    target: ReflectionId,
    source: ReflectionId,
    inherit_doc_tag: &str,
) -> bool {
    let Some(source_comment) = project.get(source).and_then(|r| r.comment()).cloned() else {
        return false;
    };
    let Some(target_comment) = project.get_mut(target).and_then(|r| r.comment_mut().as_mut()) else {
        return false;
    };
    if !target_comment.has_tag(inherit_doc_tag) {
        return false;
    }

    target_comment.copy_from(&source_comment);
    trace!(%target, %source, "inherited documentation");

    copy_parameter_comments(project, target, source);
    true
}

fn copy_parameter_comments(project: &mut ProjectReflection, target: ReflectionId, source: ReflectionId) {
    let (Some(target_sig), Some(source_sig)) = (project.signature(target), project.signature(source))
    else {
        return;
    };

    let pairs: Vec<(ReflectionId, Comment)> = target_sig
        .parameters
        .iter()
        .zip(&source_sig.parameters)
        .filter_map(|(&target_param, &source_param)| {
            let comment = project.parameter(source_param)?.comment.clone()?;
            Some((target_param, comment))
        })
        .collect();

    for (target_param, source_comment) in pairs {
        let Some(param) = project.parameter_mut(target_param) else {
            continue;
        };
        if param.comment.is_none() {
            let mut comment = Comment::new();
            comment.copy_from(&source_comment);
            param.comment = Some(comment);
        }
    }
}
