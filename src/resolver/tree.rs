//! Walking the group tree: path propagation and flattening.

use crate::core::{Member, Resource};

/// Assign every node its resolved path.
///
/// A non-empty `inherited` path overrides the node's own path; groups pass their resolved
/// path down to their members, so the nearest enclosing non-empty path wins.
pub(crate) fn propagate_paths(members: &mut [Member], inherited: &str) {
    for member in members {
        member.node_mut().inherit_path(inherited);
        if let Member::Group(group) = member {
            let path = group.resolved_path().to_string();
            propagate_paths(group.members_mut(), &path);
        }
    }
}

/// Collect included resources depth-first in declaration order.
///
/// Excluded groups are skipped together with their whole subtree.
pub(crate) fn flatten<'a>(members: &'a [Member], resources: &mut Vec<&'a Resource>) {
    for member in members {
        if !member.is_included() {
            tracing::debug!("Skipping excluded member {}", member);
            continue;
        }
        match member {
            Member::Resource(resource) => resources.push(resource),
            Member::Group(group) => flatten(group.members(), resources),
        }
    }
}
