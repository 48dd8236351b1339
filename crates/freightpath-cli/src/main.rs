use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use freightpath_cli::commands::network::{handle_providers_command, handle_stats_command};
use freightpath_cli::commands::route::{handle_route_command, RouteCommandArgs};
use freightpath_cli::output::OutputFormat;
use freightpath_lib::{OptimizationPolicy, SearchAlgorithm};

#[derive(Parser, Debug)]
#[command(author, version, about = "Multi-provider freight path search")]
struct Cli {
    /// JSON network snapshot to load.
    #[arg(long, env = "FREIGHTPATH_NETWORK")]
    network: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank candidate paths for one shipment.
    Route(RouteArgs),
    /// Print entity counts for the loaded network.
    Stats,
    /// Compare providers by zones, routes and pricing.
    Providers,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Origin postcode.
    #[arg(long = "from")]
    from: String,
    /// Destination postcode.
    #[arg(long = "to")]
    to: String,
    /// Shipment weight in kilograms.
    #[arg(long, default_value_t = 0.0)]
    weight: f64,
    /// Shipment volume in cubic metres.
    #[arg(long, default_value_t = 0.0)]
    volume: f64,
    /// Number of pallets.
    #[arg(long, default_value_t = 0)]
    pallets: u32,
    /// Ranking policy: cost, time, multi or unoptimized.
    #[arg(long, default_value_t = OptimizationPolicy::Cost)]
    policy: OptimizationPolicy,
    /// Search algorithm: a-star or bidirectional.
    #[arg(long, default_value_t = SearchAlgorithm::AStar)]
    algorithm: SearchAlgorithm,
    /// Cost ceiling for the time policy.
    #[arg(long)]
    max_cost: Option<f64>,
    /// Per-leg delivery time ceiling (hours) for the cost policy.
    #[arg(long)]
    max_etd: Option<f64>,
    /// Number of candidates to keep.
    #[arg(long, default_value_t = 10)]
    top_k: usize,
    /// Abort a search after expanding this many vertices.
    #[arg(long)]
    max_expansions: Option<usize>,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            weight_kg: args.weight,
            volume_cbm: args.volume,
            pallets: args.pallets,
            policy: args.policy,
            algorithm: args.algorithm,
            max_cost: args.max_cost,
            max_etd: args.max_etd,
            top_k: args.top_k,
            max_expansions: args.max_expansions,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route(args) => handle_route_command(&cli.network, cli.format, &args.into()),
        Command::Stats => handle_stats_command(&cli.network, cli.format),
        Command::Providers => handle_providers_command(&cli.network, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
