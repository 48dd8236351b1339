//! Shared fixtures for integration tests.
//!
//! The sample network has four metro carriers (FP_1..FP_4) confined to one
//! city each and an interstate express carrier (FP_5) whose zones overlap the
//! metro ones at the CBD and regional postcodes.

use std::path::PathBuf;
use std::sync::Arc;

use freightpath_lib::{GraphIndex, Postcode, ProviderZone, ProviderZoneRoute, ZoneNetwork};

/// Path to the JSON copy of [`sample_network`].
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

const POSTCODES: &[(&str, &str, &str)] = &[
    ("2000", "Sydney CBD", "NSW"),
    ("2010", "Pyrmont", "NSW"),
    ("2050", "Neutral Bay", "NSW"),
    ("2100", "Chatswood", "NSW"),
    ("3000", "Melbourne CBD", "VIC"),
    ("3010", "Docklands", "VIC"),
    ("3031", "Footscray", "VIC"),
    ("3100", "Hawthorn", "VIC"),
    ("4000", "Brisbane CBD", "QLD"),
    ("6000", "Perth CBD", "WA"),
];

type ZoneRow = (&'static str, &'static str, [&'static str; 2], &'static str, &'static str);

const ZONES: &[ZoneRow] = &[
    ("FP_1", "SYD_CBD", ["2000", "2001"], "NSW", "metro"),
    ("FP_1", "SYD_INNER", ["2010", "2015"], "NSW", "inner"),
    ("FP_1", "SYD_NORTH", ["2050", "2060"], "NSW", "north"),
    ("FP_1", "SYD_REGION", ["2100", "2150"], "NSW", "regional"),
    ("FP_2", "MEL_CBD", ["3000", "3001"], "VIC", "metro"),
    ("FP_2", "MEL_INNER", ["3010", "3020"], "VIC", "inner"),
    ("FP_2", "MEL_SOUTH", ["3031", "3035"], "VIC", "south"),
    ("FP_2", "MEL_REGION", ["3100", "3150"], "VIC", "regional"),
    ("FP_3", "BNE_CBD", ["4000", "4001"], "QLD", "metro"),
    ("FP_3", "BNE_SOUTH", ["4010", "4020"], "QLD", "south"),
    ("FP_3", "BNE_NORTH", ["4050", "4060"], "QLD", "north"),
    ("FP_3", "BNE_REGION", ["4100", "4200"], "QLD", "regional"),
    ("FP_4", "PER_CBD", ["6000", "6001"], "WA", "metro"),
    ("FP_4", "PER_INNER", ["6010", "6020"], "WA", "inner"),
    ("FP_4", "PER_SOUTH", ["6050", "6060"], "WA", "south"),
    ("FP_4", "PER_REGION", ["6100", "6200"], "WA", "regional"),
    ("FP_5", "NSW_EXP", ["2000", "2100"], "NSW", "express"),
    ("FP_5", "VIC_EXP", ["3000", "3100"], "VIC", "express"),
    ("FP_5", "QLD_EXP", ["4000", "4100"], "QLD", "express"),
    ("FP_5", "WA_EXP", ["6000", "6100"], "WA", "express"),
];

/// provider, from, to, base charge (also the minimum), per-kg rate, hours, max mass
type RouteRow = (&'static str, &'static str, &'static str, f64, f64, f64, f64);

const ROUTES: &[RouteRow] = &[
    ("FP_1", "SYD_CBD", "SYD_INNER", 15.0, 0.5, 2.0, 1000.0),
    ("FP_1", "SYD_CBD", "SYD_NORTH", 20.0, 0.6, 3.5, 1000.0),
    ("FP_1", "SYD_INNER", "SYD_NORTH", 12.0, 0.4, 2.5, 1000.0),
    ("FP_1", "SYD_NORTH", "SYD_REGION", 25.0, 0.7, 4.0, 800.0),
    ("FP_2", "MEL_CBD", "MEL_INNER", 12.0, 0.5, 2.0, 1000.0),
    ("FP_2", "MEL_CBD", "MEL_SOUTH", 18.0, 0.6, 3.0, 1000.0),
    ("FP_2", "MEL_INNER", "MEL_SOUTH", 10.0, 0.4, 2.5, 1000.0),
    ("FP_2", "MEL_SOUTH", "MEL_REGION", 22.0, 0.7, 4.5, 800.0),
    ("FP_3", "BNE_CBD", "BNE_SOUTH", 14.0, 0.5, 2.0, 1000.0),
    ("FP_3", "BNE_CBD", "BNE_NORTH", 16.0, 0.6, 2.5, 1000.0),
    ("FP_3", "BNE_SOUTH", "BNE_NORTH", 20.0, 0.7, 3.5, 1000.0),
    ("FP_3", "BNE_NORTH", "BNE_REGION", 24.0, 0.8, 4.5, 800.0),
    ("FP_4", "PER_CBD", "PER_INNER", 13.0, 0.5, 1.5, 1000.0),
    ("FP_4", "PER_CBD", "PER_SOUTH", 17.0, 0.6, 2.5, 1000.0),
    ("FP_4", "PER_INNER", "PER_SOUTH", 11.0, 0.4, 2.0, 1000.0),
    ("FP_4", "PER_SOUTH", "PER_REGION", 20.0, 0.7, 4.0, 800.0),
    ("FP_5", "NSW_EXP", "VIC_EXP", 50.0, 1.0, 12.0, 500.0),
    ("FP_5", "VIC_EXP", "QLD_EXP", 55.0, 1.1, 14.0, 500.0),
    ("FP_5", "QLD_EXP", "WA_EXP", 80.0, 1.5, 24.0, 400.0),
    ("FP_5", "NSW_EXP", "QLD_EXP", 60.0, 1.2, 18.0, 500.0),
];

#[allow(dead_code)]
pub fn route(
    provider: &str,
    from: &str,
    to: &str,
    base: f64,
    per_kg: f64,
    hours: f64,
) -> ProviderZoneRoute {
    ProviderZoneRoute {
        provider_id: provider.to_string(),
        from_zone: from.to_string(),
        to_zone: to.to_string(),
        service_type: String::new(),
        base_charge: base,
        per_kg_rate: per_kg,
        min_charge: base,
        delivery_hrs: hours,
        max_mass: 1000.0,
        max_cbm: 0.0,
        max_pallets: 0,
        reliability_score: 1.0,
        fuel_levy_pct: 0.0,
    }
}

/// Five-provider sample network.
#[allow(dead_code)]
pub fn sample_network() -> ZoneNetwork {
    let mut network = ZoneNetwork {
        postcodes: POSTCODES
            .iter()
            .map(|(code, suburb, state)| Postcode::new(*code, *suburb, *state))
            .collect(),
        ..ZoneNetwork::default()
    };

    for (provider, zone, members, state, category) in ZONES {
        network.push_zone(ProviderZone {
            provider_id: provider.to_string(),
            zone_code: zone.to_string(),
            postcodes: members.iter().map(|code| code.to_string()).collect(),
            state: state.to_string(),
            category: category.to_string(),
        });
    }

    for (provider, from, to, base, per_kg, hours, max_mass) in ROUTES {
        let mut row = route(provider, from, to, *base, *per_kg, *hours);
        row.max_mass = *max_mass;
        network.push_route(row);
    }

    network
}

#[allow(dead_code)]
pub fn sample_index() -> Arc<GraphIndex> {
    Arc::new(GraphIndex::build(&sample_network()))
}
