//! Freightpath library entry points.
//!
//! This crate indexes a multi-provider freight network (postcodes, provider
//! zones and zone-to-zone routes), searches it with unidirectional or
//! bidirectional A*, and ranks candidate paths under a cost, time or weighted
//! multi-criteria policy. Higher-level consumers (the CLI) should only depend
//! on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod heuristic;
pub mod index;
pub mod model;
pub mod network;
pub mod optimizer;
pub mod output;
pub mod scoring;
pub mod search;

pub use error::{Error, LocationRole, Result};
pub use heuristic::HeuristicConfig;
pub use index::{GraphIndex, IndexStats, ProviderSummary, SharedIndex, ZoneRef};
pub use model::{
    MultiHopPath, PathSegment, Postcode, ProviderZone, ProviderZoneRoute, SearchVertex, Shipment,
    VertexKind,
};
pub use network::{load_network, ZoneNetwork};
pub use optimizer::{OptimizationPolicy, OptimizerConfig, RouteOptimizer};
pub use output::{PathReport, RouteReport, SegmentSummary};
pub use scoring::{rank_paths, PathScore, ScoringWeights};
pub use search::{
    select_strategy, AStarSearch, BidirectionalSearch, SearchAlgorithm, SearchStrategy,
    SearchThresholds,
};
