//! Entity records consumed and produced by the pathfinding core.
//!
//! These are plain values: the only behaviour is the route cost formula and a
//! handful of derived properties on [`MultiHopPath`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Global postcode shared by every provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Postcode {
    pub code: String,
    pub suburb: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Postcode {
    pub fn new(
        code: impl Into<String>,
        suburb: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            suburb: suburb.into(),
            state: state.into(),
            region: None,
        }
    }
}

/// Provider-specific grouping of postcodes. Zones are identified by
/// `(provider_id, zone_code)` and are never merged across providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderZone {
    pub provider_id: String,
    pub zone_code: String,
    pub postcodes: Vec<String>,
    pub state: String,
    #[serde(default)]
    pub category: String,
}

/// Directed zone-to-zone edge priced by a single provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderZoneRoute {
    pub provider_id: String,
    pub from_zone: String,
    pub to_zone: String,
    #[serde(default)]
    pub service_type: String,
    pub base_charge: f64,
    #[serde(rename = "perKGRate")]
    pub per_kg_rate: f64,
    pub min_charge: f64,
    pub delivery_hrs: f64,
    pub max_mass: f64,
    #[serde(default, rename = "maxCBM")]
    pub max_cbm: f64,
    #[serde(default)]
    pub max_pallets: u32,
    #[serde(default = "default_reliability")]
    pub reliability_score: f64,
    #[serde(default)]
    pub fuel_levy_pct: f64,
}

fn default_reliability() -> f64 {
    1.0
}

impl ProviderZoneRoute {
    /// Charge for carrying `weight_kg` along this route, fuel levy included.
    ///
    /// A non-positive weight is billed at the minimum charge.
    pub fn cost(&self, weight_kg: f64) -> f64 {
        let charge = if weight_kg > 0.0 {
            (self.base_charge + weight_kg * self.per_kg_rate).max(self.min_charge)
        } else {
            self.min_charge
        };
        charge + charge * (self.fuel_levy_pct / 100.0)
    }
}

/// Query input: a single consignment between two postcodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: Uuid,
    #[serde(rename = "originPC")]
    pub origin: String,
    #[serde(rename = "destPC")]
    pub destination: String,
    #[serde(rename = "weightKG")]
    pub weight_kg: f64,
    #[serde(rename = "volumeCBM")]
    pub volume_cbm: f64,
    pub pallets: u32,
    pub service_type: String,
}

impl Shipment {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin: origin.into(),
            destination: destination.into(),
            weight_kg,
            volume_cbm: 0.0,
            pallets: 0,
            service_type: "Standard".to_string(),
        }
    }

    pub fn with_volume(mut self, volume_cbm: f64) -> Self {
        self.volume_cbm = volume_cbm;
        self
    }

    pub fn with_pallets(mut self, pallets: u32) -> Self {
        self.pallets = pallets;
        self
    }

    pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = service_type.into();
        self
    }
}

/// Vertex of the two-layer search graph.
///
/// Zone vertices carry their provider, so equally named zones of different
/// providers never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchVertex {
    Postcode { code: String },
    Zone { provider: String, zone: String },
}

/// Discriminant of a [`SearchVertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Postcode,
    Zone,
}

impl SearchVertex {
    pub fn postcode(code: impl Into<String>) -> Self {
        SearchVertex::Postcode { code: code.into() }
    }

    pub fn zone(provider: impl Into<String>, zone: impl Into<String>) -> Self {
        SearchVertex::Zone {
            provider: provider.into(),
            zone: zone.into(),
        }
    }

    pub fn kind(&self) -> VertexKind {
        match self {
            SearchVertex::Postcode { .. } => VertexKind::Postcode,
            SearchVertex::Zone { .. } => VertexKind::Zone,
        }
    }

    /// Postcode or zone code, without the provider.
    pub fn id(&self) -> &str {
        match self {
            SearchVertex::Postcode { code } => code,
            SearchVertex::Zone { zone, .. } => zone,
        }
    }

    /// Owning provider; `None` for postcode vertices.
    pub fn provider(&self) -> Option<&str> {
        match self {
            SearchVertex::Postcode { .. } => None,
            SearchVertex::Zone { provider, .. } => Some(provider),
        }
    }

    pub fn is_postcode(&self, code: &str) -> bool {
        matches!(self, SearchVertex::Postcode { code: c } if c == code)
    }
}

impl fmt::Display for SearchVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchVertex::Postcode { code } => write!(f, "pc:{code}"),
            SearchVertex::Zone { provider, zone } => write!(f, "pz:{provider}/{zone}"),
        }
    }
}

/// One priced transit leg of a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSegment {
    pub provider_id: String,
    pub from_zone: String,
    pub to_zone: String,
    pub service_type: String,
    pub cost: f64,
    #[serde(rename = "etd")]
    pub etd_hours: f64,
}

/// Complete candidate path returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiHopPath {
    pub id: Uuid,
    pub shipment_id: Uuid,
    pub nodes: Vec<SearchVertex>,
    pub segments: Vec<PathSegment>,
    pub total_cost: f64,
    #[serde(rename = "totalETD")]
    pub total_etd: f64,
    pub providers_involved: Vec<String>,
    pub num_hops: usize,
    /// Not aggregated from the underlying routes; stays at 1.0.
    pub reliability_score: f64,
    pub score: f64,
    pub rank: usize,
}

impl MultiHopPath {
    /// Assemble a path from its vertex sequence and transit segments.
    ///
    /// Totals are summed from the segments (entry and exit edges are free) and
    /// providers are collected in first-touch order without duplicates.
    pub fn from_parts(
        shipment: &Shipment,
        nodes: Vec<SearchVertex>,
        segments: Vec<PathSegment>,
    ) -> Self {
        // Float `sum` starts from -0.0; fold from +0.0 so empty paths total 0.
        let total_cost = segments.iter().fold(0.0, |total, segment| total + segment.cost);
        let total_etd = segments
            .iter()
            .fold(0.0, |total, segment| total + segment.etd_hours);
        let mut providers_involved: Vec<String> = Vec::new();
        for segment in &segments {
            if !providers_involved.contains(&segment.provider_id) {
                providers_involved.push(segment.provider_id.clone());
            }
        }

        Self {
            id: Uuid::new_v4(),
            shipment_id: shipment.id,
            nodes,
            segments,
            total_cost,
            total_etd,
            num_hops: providers_involved.len(),
            providers_involved,
            reliability_score: 1.0,
            score: 0.0,
            rank: 0,
        }
    }

    /// Placeholder returned when no connecting path exists within thresholds.
    pub fn fallback(shipment: &Shipment) -> Self {
        Self {
            id: Uuid::new_v4(),
            shipment_id: shipment.id,
            nodes: vec![
                SearchVertex::postcode(shipment.origin.clone()),
                SearchVertex::postcode(shipment.destination.clone()),
            ],
            segments: Vec::new(),
            total_cost: f64::INFINITY,
            total_etd: f64::INFINITY,
            providers_involved: Vec::new(),
            num_hops: 0,
            reliability_score: 1.0,
            score: 0.0,
            rank: 0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.segments.is_empty() && self.total_cost.is_infinite()
    }
}
