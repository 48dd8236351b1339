use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::MultiHopPath;

/// Cost at which the cost component drops to one half.
pub const COST_PIVOT: f64 = 1000.0;

/// Delivery time, in hours, at which the time component drops to one half.
pub const TIME_PIVOT_HOURS: f64 = 24.0;

/// Configurable weights for the multi-criteria score.
///
/// The score is computed as:
///   `score = cost * 1/(1 + total_cost/1000) + time * 1/(1 + total_etd/24) + reliability * reliability_score`
///
/// All weights must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub cost: f64,
    pub time: f64,
    pub reliability: f64,
}

impl ScoringWeights {
    /// Create new scoring weights, validating that they sum to 1.0
    /// (within floating-point tolerance).
    pub fn new(cost: f64, time: f64, reliability: f64) -> Result<Self> {
        let weights = Self {
            cost,
            time,
            reliability,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        let sum = self.cost + self.time + self.reliability;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(Error::InvalidScoringWeights { sum });
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost: 0.4,
            time: 0.35,
            reliability: 0.25,
        }
    }
}

/// Score of one path, with its components kept for transparency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathScore {
    pub value: f64,
    pub cost_component: f64,
    pub time_component: f64,
    pub reliability_component: f64,
}

impl PathScore {
    /// Score a path; higher is better.
    ///
    /// Cost and time are inverted into (0, 1]; an infinite total scores 0.
    pub fn compute(path: &MultiHopPath, weights: &ScoringWeights) -> Self {
        let cost_component = 1.0 / (1.0 + path.total_cost / COST_PIVOT);
        let time_component = 1.0 / (1.0 + path.total_etd / TIME_PIVOT_HOURS);
        let reliability_component = path.reliability_score;

        let value = weights.cost * cost_component
            + weights.time * time_component
            + weights.reliability * reliability_component;

        Self {
            value,
            cost_component,
            time_component,
            reliability_component,
        }
    }
}

/// Score every path, sort best first and assign dense 1-based ranks.
///
/// Sorting is stable, so equal scores keep their incoming order.
pub fn rank_paths(paths: &mut [MultiHopPath], weights: &ScoringWeights) {
    for path in paths.iter_mut() {
        path.score = PathScore::compute(path, weights).value;
    }
    paths.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (position, path) in paths.iter_mut().enumerate() {
        path.rank = position + 1;
    }
}
