use tracing::{debug, warn};

use crate::error::Result;
use crate::heuristic::HeuristicConfig;
use crate::index::GraphIndex;
use crate::model::{MultiHopPath, SearchVertex, Shipment};

use super::explore::{Direction, Explorer, StopRule};
use super::reconstruct::unroll_forward;
use super::{validate_endpoints, SearchAlgorithm, SearchStrategy, SearchThresholds};

/// Unidirectional A* strategy.
///
/// Searches forward from the origin and returns the single path found when
/// the destination postcode is first popped from the frontier.
#[derive(Debug, Clone, Default)]
pub struct AStarSearch {
    heuristic: HeuristicConfig,
}

impl AStarSearch {
    pub fn new(heuristic: HeuristicConfig) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for AStarSearch {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AStar
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
        let exploration = explorer.explore(
            &shipment.origin,
            &shipment.destination,
            Direction::Forward,
            StopRule::FirstGoalPop,
        );
        debug!(
            expansions = exploration.expansions,
            reached = exploration.reached.len(),
            goal_reached = exploration.goal_reached,
            "a-star search finished"
        );

        if exploration.budget_exhausted {
            warn!(
                origin = %shipment.origin,
                destination = %shipment.destination,
                "expansion budget exhausted before reaching destination"
            );
            return Ok(vec![MultiHopPath::fallback(shipment)]);
        }

        if !exploration.goal_reached {
            return Ok(vec![MultiHopPath::fallback(shipment)]);
        }

        let goal = SearchVertex::postcode(shipment.destination.clone());
        let (nodes, segments) = unroll_forward(&exploration, &goal);
        Ok(vec![MultiHopPath::from_parts(shipment, nodes, segments)])
    }
}
