use std::fmt::Write;

use serde::Serialize;

use crate::model::{MultiHopPath, PathSegment, Shipment};
use crate::optimizer::OptimizationPolicy;
use crate::search::SearchAlgorithm;

/// Transit leg as presented to callers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SegmentSummary {
    pub provider_id: String,
    pub from_zone: String,
    pub to_zone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_type: String,
    pub cost: f64,
    pub etd_hours: f64,
}

impl From<&PathSegment> for SegmentSummary {
    fn from(segment: &PathSegment) -> Self {
        Self {
            provider_id: segment.provider_id.clone(),
            from_zone: segment.from_zone.clone(),
            to_zone: segment.to_zone.clone(),
            service_type: segment.service_type.clone(),
            cost: round_to(segment.cost, 2),
            etd_hours: round_to(segment.etd_hours, 1),
        }
    }
}

/// One candidate path with rounded totals.
///
/// Totals are `None` for the fallback path, which has no finite cost or time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathReport {
    pub rank: usize,
    pub viable: bool,
    pub total_cost: Option<f64>,
    pub total_etd_hours: Option<f64>,
    pub reliability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub num_hops: usize,
    pub providers: Vec<String>,
    pub nodes: Vec<String>,
    pub segments: Vec<SegmentSummary>,
}

impl PathReport {
    /// Summarise `path`, using `position` (0-based) when the path carries no rank.
    pub fn from_path(position: usize, path: &MultiHopPath) -> Self {
        let viable = !path.is_fallback();
        let finite = |value: f64, places: u32| {
            if value.is_finite() {
                Some(round_to(value, places))
            } else {
                None
            }
        };

        Self {
            rank: if path.rank > 0 { path.rank } else { position + 1 },
            viable,
            total_cost: finite(path.total_cost, 2),
            total_etd_hours: finite(path.total_etd, 1),
            reliability: round_to(path.reliability_score, 2),
            score: (path.rank > 0).then(|| round_to(path.score, 4)),
            num_hops: path.num_hops,
            providers: path.providers_involved.clone(),
            nodes: path.nodes.iter().map(|node| node.to_string()).collect(),
            segments: path.segments.iter().map(SegmentSummary::from).collect(),
        }
    }
}

/// Serialisable result of one optimisation query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteReport {
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub policy: OptimizationPolicy,
    pub algorithm: SearchAlgorithm,
    pub paths: Vec<PathReport>,
}

impl RouteReport {
    pub fn new(
        shipment: &Shipment,
        policy: OptimizationPolicy,
        algorithm: SearchAlgorithm,
        paths: &[MultiHopPath],
    ) -> Self {
        Self {
            origin: shipment.origin.clone(),
            destination: shipment.destination.clone(),
            weight_kg: shipment.weight_kg,
            policy,
            algorithm,
            paths: paths
                .iter()
                .enumerate()
                .map(|(position, path)| PathReport::from_path(position, path))
                .collect(),
        }
    }

    /// Whether at least one candidate connects the endpoints.
    pub fn has_viable_path(&self) -> bool {
        self.paths.iter().any(|path| path.viable)
    }

    /// Plain text rendering, one block per candidate.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route {} -> {} ({} kg, policy: {}, algorithm: {})",
            self.origin, self.destination, self.weight_kg, self.policy, self.algorithm
        );

        for path in &self.paths {
            match (path.total_cost, path.total_etd_hours) {
                (Some(cost), Some(etd)) if path.viable => {
                    let hops = if path.num_hops == 1 { "hop" } else { "hops" };
                    let _ = write!(
                        buffer,
                        "#{:<3} cost {:>9.2}  etd {:>6.1} h  {} {}  [{}]",
                        path.rank,
                        cost,
                        etd,
                        path.num_hops,
                        hops,
                        path.providers.join(", ")
                    );
                    if let Some(score) = path.score {
                        let _ = write!(buffer, "  score {score:.4}");
                    }
                    buffer.push('\n');
                    for segment in &path.segments {
                        let _ = writeln!(
                            buffer,
                            "      {:<6} {} -> {}  {:.2}  {:.1} h",
                            segment.provider_id,
                            segment.from_zone,
                            segment.to_zone,
                            segment.cost,
                            segment.etd_hours
                        );
                    }
                }
                _ => {
                    let _ = writeln!(buffer, "#{:<3} no viable route", path.rank);
                }
            }
        }

        buffer
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchVertex;

    fn segment(provider: &str, cost: f64, etd: f64) -> PathSegment {
        PathSegment {
            provider_id: provider.to_string(),
            from_zone: "NSW_EXP".to_string(),
            to_zone: "VIC_EXP".to_string(),
            service_type: String::new(),
            cost,
            etd_hours: etd,
        }
    }

    #[test]
    fn totals_are_rounded() {
        let shipment = Shipment::new("2000", "3000", 100.0);
        let path = MultiHopPath::from_parts(
            &shipment,
            vec![SearchVertex::postcode("2000"), SearchVertex::postcode("3000")],
            vec![segment("FP_5", 150.004, 12.04)],
        );
        let report = PathReport::from_path(0, &path);

        assert!(report.viable);
        assert_eq!(report.rank, 1);
        assert_eq!(report.total_cost, Some(150.0));
        assert_eq!(report.total_etd_hours, Some(12.0));
        assert_eq!(report.score, None);
        assert_eq!(report.nodes, vec!["pc:2000", "pc:3000"]);
        assert_eq!(report.segments[0].cost, 150.0);
    }

    #[test]
    fn fallback_renders_as_no_viable_route() {
        let shipment = Shipment::new("2000", "6000", 10.0);
        let report = RouteReport::new(
            &shipment,
            OptimizationPolicy::Cost,
            SearchAlgorithm::AStar,
            &[MultiHopPath::fallback(&shipment)],
        );

        assert!(!report.has_viable_path());
        assert_eq!(report.paths[0].total_cost, None);
        let text = report.render_text();
        assert!(text.starts_with("Route 2000 -> 6000"));
        assert!(text.contains("no viable route"));

        let json = serde_json::to_value(&report).expect("serialises");
        assert_eq!(json["paths"][0]["total_cost"], serde_json::Value::Null);
        assert_eq!(json["policy"], "cost");
        assert_eq!(json["algorithm"], "a-star");
    }

    #[test]
    fn ranked_paths_show_scores() {
        let shipment = Shipment::new("2000", "3000", 100.0);
        let mut path = MultiHopPath::from_parts(
            &shipment,
            Vec::new(),
            vec![segment("FP_5", 150.0, 12.0)],
        );
        path.rank = 1;
        path.score = 0.712_345;

        let report = RouteReport::new(
            &shipment,
            OptimizationPolicy::MultiCriteria,
            SearchAlgorithm::Bidirectional,
            &[path],
        );
        let text = report.render_text();
        assert!(text.contains("score 0.7123"));
        assert!(text.contains("1 hop"));
        assert!(text.contains("FP_5   NSW_EXP -> VIC_EXP  150.00  12.0 h"));
    }

    #[test]
    fn colocated_path_renders_unsigned_zero() {
        let shipment = Shipment::new("2000", "2001", 10.0);
        let path = MultiHopPath::from_parts(
            &shipment,
            vec![
                SearchVertex::postcode("2000"),
                SearchVertex::zone("FP_1", "SYD_CBD"),
                SearchVertex::postcode("2001"),
            ],
            Vec::new(),
        );
        let report = RouteReport::new(
            &shipment,
            OptimizationPolicy::Cost,
            SearchAlgorithm::AStar,
            &[path],
        );

        let text = report.render_text();
        assert!(text.contains("cost      0.00"), "{text}");
        assert!(text.contains("etd    0.0 h"), "{text}");
        assert!(!text.contains("-0"), "{text}");

        let json = serde_json::to_string(&report).expect("serialises");
        assert!(json.contains("\"total_cost\":0.0"), "{json}");
        assert!(!json.contains("-0.0"), "{json}");
    }
}
