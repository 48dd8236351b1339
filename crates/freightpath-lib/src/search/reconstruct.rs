use crate::model::{PathSegment, SearchVertex};

use super::explore::{EdgeKind, Exploration};

/// Vertex chain and transit segments from `end` back to the exploration's start.
///
/// Both lists run from `end` toward the start; forward callers reverse them.
/// Entry and exit edges add vertices but never segments.
pub(crate) fn unroll(
    exploration: &Exploration<'_>,
    end: &SearchVertex,
) -> (Vec<SearchVertex>, Vec<PathSegment>) {
    let mut nodes = Vec::new();
    let mut segments = Vec::new();
    let mut current = Some(end.clone());

    // A parent chain can never be longer than the number of reached vertices.
    let mut remaining = exploration.reached.len() + 1;

    while let Some(vertex) = current {
        if remaining == 0 {
            break;
        }
        remaining -= 1;

        let Some(reached) = exploration.reached.get(&vertex) else {
            nodes.push(vertex);
            break;
        };

        if let Some(edge) = &reached.edge {
            if let (EdgeKind::Transit, Some(route)) = (edge.kind, edge.route) {
                segments.push(PathSegment {
                    provider_id: route.provider_id.clone(),
                    from_zone: route.from_zone.clone(),
                    to_zone: route.to_zone.clone(),
                    service_type: route.service_type.clone(),
                    cost: edge.cost,
                    etd_hours: edge.etd_hours,
                });
            }
        }

        current = reached.parent.clone();
        nodes.push(vertex);
    }

    (nodes, segments)
}

/// Forward chain from the exploration's start to `end`.
pub(crate) fn unroll_forward(
    exploration: &Exploration<'_>,
    end: &SearchVertex,
) -> (Vec<SearchVertex>, Vec<PathSegment>) {
    let (mut nodes, mut segments) = unroll(exploration, end);
    nodes.reverse();
    segments.reverse();
    (nodes, segments)
}
