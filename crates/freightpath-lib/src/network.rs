use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Postcode, ProviderZone, ProviderZoneRoute};

/// Materialised entity collections handed over by the data collaborator.
///
/// Zones and routes are grouped by provider identifier. The collections are
/// taken as-is: duplicate keys are resolved later by [`crate::GraphIndex`]
/// with last-write-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneNetwork {
    pub postcodes: Vec<Postcode>,
    #[serde(default)]
    pub zones: BTreeMap<String, Vec<ProviderZone>>,
    #[serde(default)]
    pub routes: BTreeMap<String, Vec<ProviderZoneRoute>>,
}

impl ZoneNetwork {
    /// Parse a network snapshot from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Add a zone under its own provider identifier.
    pub fn push_zone(&mut self, zone: ProviderZone) {
        self.zones
            .entry(zone.provider_id.clone())
            .or_default()
            .push(zone);
    }

    /// Add a route under its own provider identifier.
    pub fn push_route(&mut self, route: ProviderZoneRoute) {
        self.routes
            .entry(route.provider_id.clone())
            .or_default()
            .push(route);
    }
}

/// Load a JSON network snapshot from disk.
pub fn load_network(path: &Path) -> Result<ZoneNetwork> {
    if !path.exists() {
        return Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let network = ZoneNetwork::from_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        postcodes = network.postcodes.len(),
        providers = network.zones.len(),
        "loaded network snapshot"
    );
    Ok(network)
}
