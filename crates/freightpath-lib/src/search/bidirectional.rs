use tracing::{debug, warn};

use crate::error::Result;
use crate::heuristic::HeuristicConfig;
use crate::index::GraphIndex;
use crate::model::{MultiHopPath, Shipment, VertexKind};

use super::explore::{Direction, Exploration, Explorer, StopRule};
use super::reconstruct::{unroll, unroll_forward};
use super::{validate_endpoints, SearchAlgorithm, SearchStrategy, SearchThresholds};

/// Bidirectional A* strategy.
///
/// Explores forward from the origin and backward from the destination, each
/// to exhaustion within the thresholds, then joins the two search trees at
/// every postcode both of them reached. One candidate is produced per meeting
/// postcode and the cheapest `top_k` are returned.
///
/// Candidates are not deduplicated: meeting postcodes on the same route each
/// yield a copy of that route, so expect repeated entries in the result.
#[derive(Debug, Clone, Default)]
pub struct BidirectionalSearch {
    heuristic: HeuristicConfig,
}

impl BidirectionalSearch {
    pub fn new(heuristic: HeuristicConfig) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for BidirectionalSearch {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Bidirectional
    }

    fn find_paths(
        &self,
        index: &GraphIndex,
        shipment: &Shipment,
        thresholds: &SearchThresholds,
    ) -> Result<Vec<MultiHopPath>> {
        validate_endpoints(index, shipment)?;

        let explorer = Explorer {
            index,
            heuristic: &self.heuristic,
            weight_kg: shipment.weight_kg,
            thresholds,
        };
        let forward = explorer.explore(
            &shipment.origin,
            &shipment.destination,
            Direction::Forward,
            StopRule::Exhaust,
        );
        let backward = explorer.explore(
            &shipment.destination,
            &shipment.origin,
            Direction::Backward,
            StopRule::Exhaust,
        );

        if forward.budget_exhausted || backward.budget_exhausted {
            warn!(
                origin = %shipment.origin,
                destination = %shipment.destination,
                "expansion budget exhausted during bidirectional search"
            );
            return Ok(vec![MultiHopPath::fallback(shipment)]);
        }

        let mut paths = merge(shipment, &forward, &backward);
        debug!(
            forward_expansions = forward.expansions,
            backward_expansions = backward.expansions,
            meeting_points = paths.len(),
            "bidirectional search finished"
        );

        if paths.is_empty() {
            return Ok(vec![MultiHopPath::fallback(shipment)]);
        }

        paths.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
        paths.truncate(thresholds.top_k.max(1));
        Ok(paths)
    }
}

/// Join both search trees at each postcode they share.
///
/// Meeting points are visited in forward discovery order so the candidate
/// list is identical across runs.
fn merge(
    shipment: &Shipment,
    forward: &Exploration<'_>,
    backward: &Exploration<'_>,
) -> Vec<MultiHopPath> {
    forward
        .order
        .iter()
        .filter(|vertex| vertex.kind() == VertexKind::Postcode)
        .filter(|vertex| backward.reached.contains_key(*vertex))
        .map(|meeting| {
            let (mut nodes, mut segments) = unroll_forward(forward, meeting);
            let (tail_nodes, tail_segments) = unroll(backward, meeting);
            nodes.extend(tail_nodes.into_iter().skip(1));
            segments.extend(tail_segments);
            MultiHopPath::from_parts(shipment, nodes, segments)
        })
        .collect()
}
