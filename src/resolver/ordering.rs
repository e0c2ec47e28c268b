//! Dependency ordering of flattened resources.
//!
//! Ordering inserts every dependent resource directly after the resource it depends on
//! instead of running a classic topological sort. Independent resources keep their
//! declaration order, and a plugin lands next to the library it extends.

use std::collections::{HashMap, HashSet};

use crate::core::{Resource, ResourceError};

/// Count resource names in first-seen order.
fn name_counts(resources: &[&Resource]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for resource in resources {
        let i = *index.entry(resource.name()).or_insert(counts.len());
        if i == counts.len() {
            counts.push((resource.name().to_string(), 0));
        }
        counts[i].1 += 1;
    }
    counts
}

/// Order `candidates` so that every resource follows its dependency.
///
/// # Errors
///
/// - [`ResourceError::Conflict`] if a name occurs more than once
/// - [`ResourceError::MissingDependency`] if a dependency is not among the candidates
/// - [`ResourceError::CircularDependency`] if resources remain unplaced after all passes
pub(crate) fn order_by_dependency<'a>(
    candidates: Vec<&'a Resource>,
) -> Result<Vec<&'a Resource>, ResourceError> {
    let counts = name_counts(&candidates);
    if counts.len() != candidates.len() {
        return Err(ResourceError::Conflict {
            counts,
        });
    }

    let names: HashSet<&str> = candidates.iter().map(|r| r.name()).collect();
    let mut ordered: Vec<&Resource> = Vec::with_capacity(candidates.len());
    let mut placed: HashSet<&str> = HashSet::new();
    let mut pending: Vec<&Resource> = Vec::new();

    for resource in candidates {
        if resource.depends().is_empty() {
            ordered.push(resource);
            placed.insert(resource.name());
        } else if !names.contains(resource.depends()) {
            return Err(ResourceError::MissingDependency {
                resource: resource.to_ref(),
            });
        } else {
            pending.push(resource);
        }
    }

    // Each pass places at most one resource, and an acyclic remainder always has one
    // placeable resource, so `pending.len()` passes are enough.
    let passes = pending.len();
    for _ in 0..passes {
        let Some(pos) = pending.iter().position(|r| placed.contains(r.depends())) else {
            break;
        };
        let resource = pending.remove(pos);
        let insert_at = ordered
            .iter()
            .position(|r| r.name() == resource.depends())
            .map_or(ordered.len(), |i| i + 1);
        tracing::debug!(
            "Placing '{}' after '{}' at position {}",
            resource.name(),
            resource.depends(),
            insert_at
        );
        ordered.insert(insert_at, resource);
        placed.insert(resource.name());
    }

    if !pending.is_empty() {
        return Err(ResourceError::CircularDependency {
            resources: pending.iter().map(|r| r.to_ref()).collect(),
        });
    }

    Ok(ordered)
}
