//! Policy facade over a single search strategy.
//!
//! [`RouteOptimizer`] owns one strategy and one shared [`GraphIndex`] and
//! exposes the four ranking policies callers choose between:
//!
//! - [`RouteOptimizer::unoptimized`] - the fallback placeholder, no search
//! - [`RouteOptimizer::optimized_for_cost`] - cheapest first, bounded by edge time
//! - [`RouteOptimizer::optimized_for_time`] - fastest first, bounded by cost
//! - [`RouteOptimizer::optimize_multi_criteria`] - weighted composite score

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::heuristic::HeuristicConfig;
use crate::index::GraphIndex;
use crate::model::{MultiHopPath, Shipment};
use crate::scoring::{rank_paths, ScoringWeights};
use crate::search::{
    select_strategy, validate_endpoints, SearchAlgorithm, SearchStrategy, SearchThresholds,
};

/// Candidates kept by the cost and time policies.
pub const DEFAULT_TOP_K: usize = 10;

/// Candidate pool scored by the multi-criteria policy.
pub const DEFAULT_CANDIDATE_POOL: usize = 15;

/// Ranking policy requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationPolicy {
    Unoptimized,
    #[default]
    Cost,
    Time,
    MultiCriteria,
}

impl fmt::Display for OptimizationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OptimizationPolicy::Unoptimized => "unoptimized",
            OptimizationPolicy::Cost => "cost",
            OptimizationPolicy::Time => "time",
            OptimizationPolicy::MultiCriteria => "multi",
        };
        f.write_str(value)
    }
}

impl FromStr for OptimizationPolicy {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "unoptimized" | "none" => Ok(OptimizationPolicy::Unoptimized),
            "cost" => Ok(OptimizationPolicy::Cost),
            "time" => Ok(OptimizationPolicy::Time),
            "multi" | "multi-criteria" => Ok(OptimizationPolicy::MultiCriteria),
            other => Err(format!("unknown optimization policy: {other}")),
        }
    }
}

/// Tunables for the optimizer policies.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    pub top_k: usize,
    pub candidate_pool: usize,
    pub weights: ScoringWeights,
    /// Applied to every search the optimizer runs.
    pub max_expansions: Option<usize>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            candidate_pool: DEFAULT_CANDIDATE_POOL,
            weights: ScoringWeights::default(),
            max_expansions: None,
        }
    }
}

/// Facade selecting search thresholds and post-search ranking.
pub struct RouteOptimizer {
    index: Arc<GraphIndex>,
    strategy: Box<dyn SearchStrategy>,
    config: OptimizerConfig,
}

impl RouteOptimizer {
    pub fn new(index: Arc<GraphIndex>, strategy: Box<dyn SearchStrategy>) -> Self {
        Self {
            index,
            strategy,
            config: OptimizerConfig::default(),
        }
    }

    /// Optimizer over the default heuristic for `algorithm`.
    pub fn with_algorithm(index: Arc<GraphIndex>, algorithm: SearchAlgorithm) -> Self {
        Self::new(index, select_strategy(algorithm, HeuristicConfig::default()))
    }

    pub fn with_config(mut self, config: OptimizerConfig) -> Result<Self> {
        config.weights.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.strategy.algorithm()
    }

    pub fn index(&self) -> &Arc<GraphIndex> {
        &self.index
    }

    /// Trivial placeholder path; endpoints are validated but no search is run.
    pub fn unoptimized(&self, shipment: &Shipment) -> Result<MultiHopPath> {
        validate_endpoints(&self.index, shipment)?;
        Ok(MultiHopPath::fallback(shipment))
    }

    /// Cheapest candidates first, ignoring edges slower than `max_etd`.
    pub fn optimized_for_cost(
        &self,
        shipment: &Shipment,
        max_etd: f64,
    ) -> Result<Vec<MultiHopPath>> {
        let thresholds = self.thresholds(self.config.top_k).with_max_etd(max_etd);
        let mut paths = self.strategy.find_paths(&self.index, shipment, &thresholds)?;
        paths.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
        Ok(paths)
    }

    /// Fastest candidates first, pruning partial paths above `max_cost`.
    pub fn optimized_for_time(
        &self,
        shipment: &Shipment,
        max_cost: f64,
    ) -> Result<Vec<MultiHopPath>> {
        let thresholds = self.thresholds(self.config.top_k).with_max_cost(max_cost);
        let mut paths = self.strategy.find_paths(&self.index, shipment, &thresholds)?;
        paths.sort_by(|a, b| a.total_etd.total_cmp(&b.total_etd));
        Ok(paths)
    }

    /// Candidates ranked by the weighted cost/time/reliability score.
    pub fn optimize_multi_criteria(&self, shipment: &Shipment) -> Result<Vec<MultiHopPath>> {
        let thresholds = self.thresholds(self.config.candidate_pool);
        let mut paths = self.strategy.find_paths(&self.index, shipment, &thresholds)?;
        rank_paths(&mut paths, &self.config.weights);
        debug!(candidates = paths.len(), "ranked multi-criteria candidates");
        Ok(paths)
    }

    /// Dispatch on a policy value. `max_cost` and `max_etd` feed the time and
    /// cost policies respectively.
    pub fn optimize(
        &self,
        policy: OptimizationPolicy,
        shipment: &Shipment,
        max_cost: f64,
        max_etd: f64,
    ) -> Result<Vec<MultiHopPath>> {
        match policy {
            OptimizationPolicy::Unoptimized => Ok(vec![self.unoptimized(shipment)?]),
            OptimizationPolicy::Cost => self.optimized_for_cost(shipment, max_etd),
            OptimizationPolicy::Time => self.optimized_for_time(shipment, max_cost),
            OptimizationPolicy::MultiCriteria => self.optimize_multi_criteria(shipment),
        }
    }

    fn thresholds(&self, top_k: usize) -> SearchThresholds {
        let thresholds = SearchThresholds::default().with_top_k(top_k);
        match self.config.max_expansions {
            Some(limit) => thresholds.with_max_expansions(limit),
            None => thresholds,
        }
    }
}

impl fmt::Debug for RouteOptimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteOptimizer")
            .field("algorithm", &self.strategy.algorithm())
            .field("config", &self.config)
            .finish()
    }
}
