//! Network loading plus the `stats` and `providers` subcommands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use freightpath_lib::{load_network, GraphIndex};

use crate::output::{print_providers, print_stats, OutputFormat};

/// Load a snapshot from disk and index it.
pub fn load_index(path: &Path) -> Result<Arc<GraphIndex>> {
    let network = load_network(path)
        .with_context(|| format!("failed to load network from {}", path.display()))?;
    let index = GraphIndex::build(&network);
    debug!(path = %path.display(), "network indexed");
    Ok(Arc::new(index))
}

/// Handle the stats subcommand.
pub fn handle_stats_command(network_path: &Path, format: OutputFormat) -> Result<()> {
    let index = load_index(network_path)?;
    print_stats(&index.stats(), format).context("failed to write stats")
}

/// Handle the providers subcommand.
pub fn handle_providers_command(network_path: &Path, format: OutputFormat) -> Result<()> {
    let index = load_index(network_path)?;
    print_providers(&index.provider_summaries(), format)
        .context("failed to write provider summaries")
}
