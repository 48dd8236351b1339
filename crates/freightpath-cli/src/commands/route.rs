//! Route command handler for ranking freight paths between two postcodes.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use freightpath_lib::{
    OptimizationPolicy, OptimizerConfig, RouteOptimizer, RouteReport, SearchAlgorithm, Shipment,
};

use crate::commands::network::load_index;
use crate::output::{print_report, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin postcode.
    pub from: String,
    /// Destination postcode.
    pub to: String,
    pub weight_kg: f64,
    pub volume_cbm: f64,
    pub pallets: u32,
    pub policy: OptimizationPolicy,
    pub algorithm: SearchAlgorithm,
    /// Cost ceiling; only the time policy uses it.
    pub max_cost: Option<f64>,
    /// Per-leg time ceiling in hours; only the cost policy uses it.
    pub max_etd: Option<f64>,
    pub top_k: usize,
    pub max_expansions: Option<usize>,
}

impl RouteCommandArgs {
    pub fn to_shipment(&self) -> Shipment {
        Shipment::new(self.from.clone(), self.to.clone(), self.weight_kg)
            .with_volume(self.volume_cbm)
            .with_pallets(self.pallets)
    }

    pub fn to_config(&self) -> OptimizerConfig {
        OptimizerConfig {
            top_k: self.top_k,
            max_expansions: self.max_expansions,
            ..OptimizerConfig::default()
        }
    }

    /// Flags that the selected policy will not look at.
    fn ignored_flags(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.max_cost.is_some() && self.policy != OptimizationPolicy::Time {
            ignored.push("--max-cost");
        }
        if self.max_etd.is_some() && self.policy != OptimizationPolicy::Cost {
            ignored.push("--max-etd");
        }
        ignored
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    network_path: &Path,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let index = load_index(network_path)?;

    for flag in args.ignored_flags() {
        warn!(policy = %args.policy, "{flag} has no effect with this policy");
    }

    let optimizer = RouteOptimizer::with_algorithm(index, args.algorithm)
        .with_config(args.to_config())
        .context("invalid optimizer configuration")?;
    let shipment = args.to_shipment();

    let paths = optimizer
        .optimize(
            args.policy,
            &shipment,
            args.max_cost.unwrap_or(f64::INFINITY),
            args.max_etd.unwrap_or(f64::INFINITY),
        )
        .with_context(|| format!("failed to route {} -> {}", args.from, args.to))?;
    debug!(shipment = %shipment.id, candidates = paths.len(), "route query complete");

    let report = RouteReport::new(&shipment, args.policy, args.algorithm, &paths);
    print_report(&report, format).context("failed to write route report")
}
