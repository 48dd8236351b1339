//! Pathfinding over the two-layer postcode / provider-zone graph.
//!
//! This module provides:
//! - [`SearchAlgorithm`] - Supported strategies (unidirectional A*, bidirectional A*)
//! - [`SearchThresholds`] - Pruning limits and result size for one search call
//! - [`SearchStrategy`] - The contract both strategies implement
//! - [`select_strategy`] - Construct a strategy for an algorithm
//!
//! # Search graph
//!
//! Postcode vertices connect to every zone containing them through free
//! entry edges, zones connect to their member postcodes through free exit
//! edges, and zones of one provider connect to each other through priced,
//! timed transit edges. Providers therefore only hand off at postcodes they
//! share.
//!
//! # Strategy Pattern
//!
//! Both algorithms run the same exploration routine and differ only in how
//! many explorations they run and how they turn them into paths, so new
//! variants can be added without touching the optimizer.

mod astar;
mod bidirectional;
mod explore;
mod reconstruct;

pub use astar::AStarSearch;
pub use bidirectional::BidirectionalSearch;
pub use explore::{Direction, EdgeKind};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{LocationRole, Result};
use crate::heuristic::HeuristicConfig;
use crate::index::GraphIndex;
use crate::model::{MultiHopPath, Shipment};

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Forward A* that stops at the first goal pop.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Forward and backward explorations joined at shared postcodes.
    Bidirectional,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::AStar => "a-star",
            SearchAlgorithm::Bidirectional => "bidirectional",
        };
        f.write_str(value)
    }
}

impl FromStr for SearchAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "a-star" | "astar" | "a_star" => Ok(SearchAlgorithm::AStar),
            "bidirectional" => Ok(SearchAlgorithm::Bidirectional),
            other => Err(format!("unknown search algorithm: {other}")),
        }
    }
}

/// Limits applied while searching.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchThresholds {
    /// Upper bound on the cumulative cost of any partial path.
    pub max_cost: f64,
    /// Upper bound on the delivery time of each individual edge.
    ///
    /// This is compared per edge, not against the running total.
    pub max_etd: f64,
    /// Accepted for compatibility but not enforced during expansion.
    pub max_hops: usize,
    /// Number of candidates kept after ranking by cost.
    pub top_k: usize,
    /// Cap on vertices expanded per exploration. Exhausting it yields the
    /// fallback path.
    pub max_expansions: Option<usize>,
}

impl Default for SearchThresholds {
    fn default() -> Self {
        Self {
            max_cost: f64::INFINITY,
            max_etd: f64::INFINITY,
            max_hops: 5,
            top_k: 10,
            max_expansions: None,
        }
    }
}

impl SearchThresholds {
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = max_cost;
        self
    }

    pub fn with_max_etd(mut self, max_etd: f64) -> Self {
        self.max_etd = max_etd;
        self
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Keep at least one candidate so callers always receive a path.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}

/// Trait for search strategies.
///
/// Implementations hold only configuration; every call allocates its own
/// frontier and bookkeeping, so one strategy can serve concurrent queries
/// against the same index.
pub trait SearchStrategy: Send + Sync {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Find candidate paths for `shipment`, cheapest first.
    ///
    /// Fails with [`crate::Error::UnknownLocation`] before searching when
    /// either endpoint is missing from the index. When nothing connects the
    /// endpoints within `thresholds` the result is a single fallback path.
    fn find_paths(
        &self,
        index: &GraphIndex,
        shipment: &Shipment,
        thresholds: &SearchThresholds,
    ) -> Result<Vec<MultiHopPath>>;
}

/// Construct the strategy for `algorithm`.
pub fn select_strategy(
    algorithm: SearchAlgorithm,
    heuristic: HeuristicConfig,
) -> Box<dyn SearchStrategy> {
    match algorithm {
        SearchAlgorithm::AStar => Box::new(AStarSearch::new(heuristic)),
        SearchAlgorithm::Bidirectional => Box::new(BidirectionalSearch::new(heuristic)),
    }
}

/// Both endpoints must be known postcodes.
pub(crate) fn validate_endpoints(index: &GraphIndex, shipment: &Shipment) -> Result<()> {
    index.resolve_postcode(&shipment.origin, LocationRole::Origin)?;
    index.resolve_postcode(&shipment.destination, LocationRole::Destination)?;
    Ok(())
}
