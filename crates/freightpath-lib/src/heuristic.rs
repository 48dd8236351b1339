//! Geography-to-cost estimate used to order the A* frontier.
//!
//! Every state is approximated by one representative (longitude, latitude)
//! pair and the estimate is the scaled Euclidean distance between the states
//! of two postcodes. The estimate is NOT a proven lower bound on the remaining
//! monetary cost, so it is non-admissible: searches still converge, but the
//! first goal pop carries no formal optimality guarantee.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::index::GraphIndex;
use crate::model::SearchVertex;

/// Default dollars-per-degree scale applied to the state distance.
pub const DEFAULT_HEURISTIC_SCALE: f64 = 0.01;

static DEFAULT_STATE_COORDINATES: Lazy<HashMap<String, (f64, f64)>> = Lazy::new(|| {
    [
        ("NSW", (150.9, -33.9)),
        ("VIC", (145.1, -37.8)),
        ("QLD", (153.0, -27.5)),
        ("WA", (115.9, -31.9)),
        ("SA", (139.2, -34.4)),
        ("TAS", (147.1, -42.9)),
        ("ACT", (149.2, -35.3)),
        ("NT", (130.8, -12.5)),
    ]
    .into_iter()
    .map(|(state, coordinates)| (state.to_string(), coordinates))
    .collect()
});

/// Representative state coordinates and the scale turning distance into cost.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicConfig {
    pub state_coordinates: HashMap<String, (f64, f64)>,
    pub scale: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            state_coordinates: DEFAULT_STATE_COORDINATES.clone(),
            scale: DEFAULT_HEURISTIC_SCALE,
        }
    }
}

impl HeuristicConfig {
    /// Estimate between two postcodes. Unknown postcodes or states yield 0.
    pub fn postcode_estimate(&self, index: &GraphIndex, from: &str, to: &str) -> f64 {
        let (Some(from), Some(to)) = (index.postcode(from), index.postcode(to)) else {
            return 0.0;
        };
        let (Some(a), Some(b)) = (
            self.state_coordinates.get(&from.state),
            self.state_coordinates.get(&to.state),
        ) else {
            return 0.0;
        };

        let dx = a.0 - b.0;
        let dy = a.1 - b.1;
        (dx * dx + dy * dy).sqrt() * self.scale
    }

    /// Estimate from any vertex to the `goal` postcode.
    ///
    /// A zone is represented by the first postcode it lists.
    pub fn vertex_estimate(&self, index: &GraphIndex, vertex: &SearchVertex, goal: &str) -> f64 {
        match vertex {
            SearchVertex::Postcode { code } => self.postcode_estimate(index, code, goal),
            SearchVertex::Zone { provider, zone } => index
                .postcodes_for_zone(provider, zone)
                .first()
                .map(|code| self.postcode_estimate(index, code, goal))
                .unwrap_or(0.0),
        }
    }
}
