use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::heuristic::HeuristicConfig;
use crate::index::GraphIndex;
use crate::model::{ProviderZoneRoute, SearchVertex};

use super::SearchThresholds;

/// Which way edges are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Outgoing routes, starting from the origin.
    Forward,
    /// Incoming routes, starting from the destination.
    Backward,
}

/// Classification of an edge in the search graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Postcode into a zone containing it.
    Entry,
    /// Zone to zone along a provider route.
    Transit,
    /// Zone out to one of its postcodes.
    Exit,
}

/// Edge leaving a vertex in the chosen direction.
#[derive(Debug, Clone)]
pub(crate) struct Edge<'a> {
    pub target: SearchVertex,
    pub kind: EdgeKind,
    pub cost: f64,
    pub etd_hours: f64,
    pub route: Option<&'a ProviderZoneRoute>,
}

/// Bookkeeping for a reached vertex: best known cost and how it was reached.
#[derive(Debug, Clone)]
pub(crate) struct Reached<'a> {
    pub parent: Option<SearchVertex>,
    pub cost: f64,
    pub edge: Option<Edge<'a>>,
}

/// When an exploration stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopRule {
    FirstGoalPop,
    Exhaust,
}

/// Everything one exploration learned about the graph.
#[derive(Debug, Default)]
pub(crate) struct Exploration<'a> {
    pub reached: HashMap<SearchVertex, Reached<'a>>,
    /// Vertices in the order they were first reached, start included.
    pub order: Vec<SearchVertex>,
    pub goal_reached: bool,
    pub expansions: usize,
    pub budget_exhausted: bool,
}

/// Inputs shared by every exploration of one query.
pub(crate) struct Explorer<'a> {
    pub index: &'a GraphIndex,
    pub heuristic: &'a HeuristicConfig,
    pub weight_kg: f64,
    pub thresholds: &'a SearchThresholds,
}

impl<'a> Explorer<'a> {
    /// A* from the `start` postcode toward the `goal` postcode.
    ///
    /// Relaxation only accepts strict cost improvements and skips an edge when
    /// the cumulative cost would exceed `max_cost` or the edge alone takes
    /// longer than `max_etd`.
    pub fn explore(
        &self,
        start: &str,
        goal: &str,
        direction: Direction,
        stop: StopRule,
    ) -> Exploration<'a> {
        let mut exploration = Exploration::default();
        let mut queue = BinaryHeap::new();
        let mut sequence: u64 = 0;

        let start_vertex = SearchVertex::postcode(start);
        let start_estimate = self
            .heuristic
            .vertex_estimate(self.index, &start_vertex, goal);
        exploration.reached.insert(
            start_vertex.clone(),
            Reached {
                parent: None,
                cost: 0.0,
                edge: None,
            },
        );
        exploration.order.push(start_vertex.clone());
        queue.push(QueueEntry::new(start_vertex, 0.0, start_estimate, sequence));

        while let Some(entry) = queue.pop() {
            let current_cost = match exploration.reached.get(&entry.vertex) {
                Some(reached) if reached.cost < entry.cost.0 => continue,
                Some(reached) => reached.cost,
                None => continue,
            };

            if stop == StopRule::FirstGoalPop && entry.vertex.is_postcode(goal) {
                exploration.goal_reached = true;
                break;
            }

            if let Some(limit) = self.thresholds.max_expansions {
                if exploration.expansions >= limit {
                    exploration.budget_exhausted = true;
                    break;
                }
            }
            exploration.expansions += 1;

            for edge in self.neighbours(&entry.vertex, direction) {
                let tentative = current_cost + edge.cost;
                if tentative > self.thresholds.max_cost || edge.etd_hours > self.thresholds.max_etd
                {
                    continue;
                }

                let known = exploration
                    .reached
                    .get(&edge.target)
                    .map(|reached| reached.cost)
                    .unwrap_or(f64::INFINITY);
                if tentative >= known {
                    continue;
                }

                if known.is_infinite() {
                    exploration.order.push(edge.target.clone());
                }
                let target = edge.target.clone();
                let estimate = self.heuristic.vertex_estimate(self.index, &target, goal);
                exploration.reached.insert(
                    target.clone(),
                    Reached {
                        parent: Some(entry.vertex.clone()),
                        cost: tentative,
                        edge: Some(edge),
                    },
                );
                sequence += 1;
                queue.push(QueueEntry::new(target, tentative, estimate, sequence));
            }
        }

        exploration
    }

    /// Edges leaving `vertex` when travelling in `direction`.
    ///
    /// Backward exploration walks incoming routes and swaps the entry/exit
    /// roles of postcode edges.
    pub fn neighbours(&self, vertex: &SearchVertex, direction: Direction) -> Vec<Edge<'a>> {
        let (into_zone, out_of_zone) = match direction {
            Direction::Forward => (EdgeKind::Entry, EdgeKind::Exit),
            Direction::Backward => (EdgeKind::Exit, EdgeKind::Entry),
        };

        match vertex {
            SearchVertex::Postcode { code } => self
                .index
                .zones_for_postcode(code)
                .iter()
                .map(|zone| Edge {
                    target: SearchVertex::zone(zone.provider_id.clone(), zone.zone_code.clone()),
                    kind: into_zone,
                    cost: 0.0,
                    etd_hours: 0.0,
                    route: None,
                })
                .collect(),
            SearchVertex::Zone { provider, zone } => {
                let routes = match direction {
                    Direction::Forward => self.index.outgoing_routes(provider, zone),
                    Direction::Backward => self.index.incoming_routes(provider, zone),
                };
                let transit = routes.iter().map(|route| {
                    let next = match direction {
                        Direction::Forward => &route.to_zone,
                        Direction::Backward => &route.from_zone,
                    };
                    Edge {
                        target: SearchVertex::zone(provider.clone(), next.clone()),
                        kind: EdgeKind::Transit,
                        cost: route.cost(self.weight_kg),
                        etd_hours: route.delivery_hrs,
                        route: Some(route),
                    }
                });
                let handoff = self
                    .index
                    .postcodes_for_zone(provider, zone)
                    .iter()
                    .map(|code| Edge {
                        target: SearchVertex::postcode(code.clone()),
                        kind: out_of_zone,
                        cost: 0.0,
                        etd_hours: 0.0,
                        route: None,
                    });
                transit.chain(handoff).collect()
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Frontier entry ordered by `(g + h, insertion sequence)`.
#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    vertex: SearchVertex,
    cost: FloatOrd,
    estimate: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(vertex: SearchVertex, cost: f64, heuristic: f64, sequence: u64) -> Self {
        Self {
            vertex,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap pops the lowest estimate, oldest first.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
