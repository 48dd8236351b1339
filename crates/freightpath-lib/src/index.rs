//! Read-only lookup structures over the zone network.
//!
//! [`GraphIndex`] is built once from the entity collections and never mutated
//! afterwards. It precomputes four maps so every neighbour query made by the
//! search engines is a constant-time hash lookup:
//!
//! - outgoing routes per `(provider, zone)`
//! - incoming routes per `(provider, zone)`
//! - `(provider, zone)` memberships per postcode
//! - member postcodes per `(provider, zone)`
//!
//! Refreshing the data means building a new index; [`SharedIndex`] swaps the
//! instance seen by readers without touching the one in use.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, LocationRole, Result};
use crate::model::{Postcode, ProviderZone, ProviderZoneRoute};
use crate::network::ZoneNetwork;

/// Minimum Jaro-Winkler similarity for a postcode to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

type ProviderMap<T> = HashMap<String, HashMap<String, T>>;

/// Membership of a postcode in one provider's zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ZoneRef {
    pub provider_id: String,
    pub zone_code: String,
}

/// Entity counts for a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub postcodes: usize,
    pub providers: usize,
    pub zones: usize,
    pub routes: usize,
}

/// Per-provider figures for comparing carriers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSummary {
    pub provider_id: String,
    pub zones: usize,
    pub routes: usize,
    pub avg_reliability: f64,
    pub min_charge: f64,
    pub avg_base_charge: f64,
}

/// Immutable adjacency index over postcodes, provider zones and zone routes.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    postcodes: HashMap<String, Postcode>,
    providers: Vec<String>,
    zones: Vec<ProviderZone>,
    outgoing: ProviderMap<Vec<ProviderZoneRoute>>,
    incoming: ProviderMap<Vec<ProviderZoneRoute>>,
    postcode_zones: HashMap<String, Vec<ZoneRef>>,
    zone_postcodes: ProviderMap<Vec<String>>,
    route_count: usize,
}

impl GraphIndex {
    /// Build the index from a network snapshot.
    ///
    /// Duplicate postcodes, zones (`provider`, `zone`) and routes
    /// (`provider`, `from`, `to`) are not rejected: the last occurrence wins
    /// and keeps the position of the first.
    pub fn build(network: &ZoneNetwork) -> Self {
        let postcodes: HashMap<String, Postcode> = network
            .postcodes
            .iter()
            .map(|postcode| (postcode.code.clone(), postcode.clone()))
            .collect();

        let providers: Vec<String> = network.zones.keys().cloned().collect();
        let zones = dedup_zones(network);
        let routes = dedup_routes(network);

        let mut outgoing: ProviderMap<Vec<ProviderZoneRoute>> = HashMap::new();
        let mut incoming: ProviderMap<Vec<ProviderZoneRoute>> = HashMap::new();
        for route in &routes {
            outgoing
                .entry(route.provider_id.clone())
                .or_default()
                .entry(route.from_zone.clone())
                .or_default()
                .push(route.clone());
            incoming
                .entry(route.provider_id.clone())
                .or_default()
                .entry(route.to_zone.clone())
                .or_default()
                .push(route.clone());
        }

        let mut postcode_zones: HashMap<String, Vec<ZoneRef>> = HashMap::new();
        let mut zone_postcodes: ProviderMap<Vec<String>> = HashMap::new();
        for zone in &zones {
            for code in &zone.postcodes {
                postcode_zones.entry(code.clone()).or_default().push(ZoneRef {
                    provider_id: zone.provider_id.clone(),
                    zone_code: zone.zone_code.clone(),
                });
            }
            zone_postcodes
                .entry(zone.provider_id.clone())
                .or_default()
                .insert(zone.zone_code.clone(), zone.postcodes.clone());
        }

        let index = Self {
            postcodes,
            providers,
            zones,
            outgoing,
            incoming,
            postcode_zones,
            zone_postcodes,
            route_count: routes.len(),
        };

        let stats = index.stats();
        debug!(
            postcodes = stats.postcodes,
            providers = stats.providers,
            zones = stats.zones,
            routes = stats.routes,
            "built graph index"
        );

        index
    }

    /// Routes leaving `zone_code` within `provider_id`'s network.
    pub fn outgoing_routes(&self, provider_id: &str, zone_code: &str) -> &[ProviderZoneRoute] {
        lookup(&self.outgoing, provider_id, zone_code)
    }

    /// Routes arriving at `zone_code` within `provider_id`'s network.
    pub fn incoming_routes(&self, provider_id: &str, zone_code: &str) -> &[ProviderZoneRoute] {
        lookup(&self.incoming, provider_id, zone_code)
    }

    /// Every provider zone that contains `postcode`.
    pub fn zones_for_postcode(&self, postcode: &str) -> &[ZoneRef] {
        self.postcode_zones
            .get(postcode)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Member postcodes of a zone, in the order the zone lists them.
    pub fn postcodes_for_zone(&self, provider_id: &str, zone_code: &str) -> &[String] {
        lookup(&self.zone_postcodes, provider_id, zone_code)
    }

    /// Provider identifiers that own at least one zone group.
    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    /// All zones across all providers.
    pub fn all_zones(&self) -> &[ProviderZone] {
        &self.zones
    }

    pub fn postcode(&self, code: &str) -> Option<&Postcode> {
        self.postcodes.get(code)
    }

    pub fn contains_postcode(&self, code: &str) -> bool {
        self.postcodes.contains_key(code)
    }

    /// Resolve a shipment endpoint, failing with suggestions when unknown.
    pub fn resolve_postcode(&self, code: &str, role: LocationRole) -> Result<&Postcode> {
        self.postcode(code).ok_or_else(|| Error::UnknownLocation {
            role,
            code: code.to_string(),
            suggestions: self.similar_postcodes(code, 3),
        })
    }

    /// Known postcodes resembling `code`, best match first.
    pub fn similar_postcodes(&self, code: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &String)> = self
            .postcodes
            .keys()
            .map(|candidate| (strsim::jaro_winkler(code, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    /// One summary per provider, in provider order.
    ///
    /// Charge and reliability figures are 0 for a provider without routes.
    pub fn provider_summaries(&self) -> Vec<ProviderSummary> {
        self.providers
            .iter()
            .map(|provider_id| {
                let zones = self
                    .zones
                    .iter()
                    .filter(|zone| &zone.provider_id == provider_id)
                    .count();
                let routes: Vec<&ProviderZoneRoute> = self
                    .outgoing
                    .get(provider_id)
                    .into_iter()
                    .flat_map(|by_zone| by_zone.values().flatten())
                    .collect();

                let count = routes.len();
                let mean = |value: fn(&ProviderZoneRoute) -> f64| {
                    if count == 0 {
                        0.0
                    } else {
                        routes.iter().map(|route| value(*route)).sum::<f64>() / count as f64
                    }
                };
                let min_charge = routes
                    .iter()
                    .map(|route| route.min_charge)
                    .min_by(f64::total_cmp)
                    .unwrap_or(0.0);

                ProviderSummary {
                    provider_id: provider_id.clone(),
                    zones,
                    routes: count,
                    avg_reliability: mean(|route| route.reliability_score),
                    min_charge,
                    avg_base_charge: mean(|route| route.base_charge),
                }
            })
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            postcodes: self.postcodes.len(),
            providers: self.providers.len(),
            zones: self.zones.len(),
            routes: self.route_count,
        }
    }
}

impl From<&ZoneNetwork> for GraphIndex {
    fn from(network: &ZoneNetwork) -> Self {
        GraphIndex::build(network)
    }
}

fn lookup<'a, T>(map: &'a ProviderMap<Vec<T>>, provider_id: &str, zone_code: &str) -> &'a [T] {
    map.get(provider_id)
        .and_then(|zones| zones.get(zone_code))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Zones keyed by their group's provider, last write wins.
fn dedup_zones(network: &ZoneNetwork) -> Vec<ProviderZone> {
    let mut zones: Vec<ProviderZone> = Vec::new();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();

    for (provider_id, group) in &network.zones {
        for zone in group {
            let mut zone = zone.clone();
            zone.provider_id = provider_id.clone();
            let key = (zone.provider_id.clone(), zone.zone_code.clone());
            match positions.get(&key) {
                Some(&position) => zones[position] = zone,
                None => {
                    positions.insert(key, zones.len());
                    zones.push(zone);
                }
            }
        }
    }

    zones
}

/// Routes keyed by `(provider, from, to)`, last write wins.
fn dedup_routes(network: &ZoneNetwork) -> Vec<ProviderZoneRoute> {
    let mut routes: Vec<ProviderZoneRoute> = Vec::new();
    let mut positions: HashMap<(String, String, String), usize> = HashMap::new();

    for route in network.routes.values().flatten() {
        let key = (
            route.provider_id.clone(),
            route.from_zone.clone(),
            route.to_zone.clone(),
        );
        match positions.get(&key) {
            Some(&position) => routes[position] = route.clone(),
            None => {
                positions.insert(key, routes.len());
                routes.push(route.clone());
            }
        }
    }

    routes
}

/// Cloneable handle to the current [`GraphIndex`].
///
/// Readers take an `Arc` snapshot and keep it for the whole query; a refresh
/// builds a new index and swaps the reference, so in-flight searches keep
/// reading the instance they started with.
#[derive(Debug, Clone)]
pub struct SharedIndex {
    inner: Arc<RwLock<Arc<GraphIndex>>>,
}

impl SharedIndex {
    pub fn new(index: GraphIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Current index instance.
    pub fn snapshot(&self) -> Arc<GraphIndex> {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&*guard)
    }

    /// Install a freshly built index, returning the one it replaced.
    pub fn replace(&self, index: GraphIndex) -> Arc<GraphIndex> {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, Arc::new(index))
    }
}
