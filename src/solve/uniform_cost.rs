// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Uniform-cost search - best-first expansion of whole paths
//!
//! Unlike the Dijkstra module this keeps a frontier of partial paths rather
//! than relaxing per-node labels, and reconstructs nothing: the popped path
//! to the target is the answer. On non-negative weights the two agree on
//! total cost.

use super::{endpoints, Solver};
use crate::errors::RouteError;
use crate::graph::ParkGraph;
use crate::types::RoutePath;
use petgraph::graph::NodeIndex;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Uniform-cost search over the park graph
pub struct UniformCost;

/// A partial path on the frontier, cheapest cost popped first
#[derive(Clone, Debug, PartialEq)]
struct Frontier {
    cost: f64,
    path: Vec<NodeIndex>,
}

impl Frontier {
    fn tip(&self) -> NodeIndex {
        // Frontier entries always hold at least the source node
        self.path[self.path.len() - 1]
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the cheapest path; equal costs prefer
        // the shorter path, then the lower tip index
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.path.len().cmp(&self.path.len()))
            .then_with(|| other.tip().index().cmp(&self.tip().index()))
    }
}

impl Solver for UniformCost {
    fn name(&self) -> &'static str {
        "Uniform Cost Search"
    }

    fn solve(
        &self,
        graph: &ParkGraph,
        source: &str,
        target: &str,
    ) -> Result<RoutePath, RouteError> {
        if source == target {
            return Ok(RoutePath::single(source));
        }

        let (src, dst) = endpoints(graph, source, target)?;

        let mut best: HashMap<NodeIndex, f64> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        best.insert(src, 0.0);
        frontier.push(Frontier {
            cost: 0.0,
            path: vec![src],
        });

        while let Some(entry) = frontier.pop() {
            let tip = entry.tip();

            if tip == dst {
                tracing::debug!(miles = entry.cost, "uniform-cost search reached target");
                return Ok(RoutePath {
                    parks: entry
                        .path
                        .iter()
                        .map(|&i| graph.label(i).to_string())
                        .collect(),
                    total_miles: entry.cost,
                });
            }

            // A cheaper path to this tip was already expanded
            if best.get(&tip).is_some_and(|&b| entry.cost > b) {
                continue;
            }

            for (next, weight) in graph.neighbors(tip) {
                let cost = entry.cost + weight;
                if best.get(&next).map_or(true, |&b| cost < b) {
                    best.insert(next, cost);
                    let mut path = entry.path.clone();
                    path.push(next);
                    frontier.push(Frontier { cost, path });
                }
            }
        }

        Err(RouteError::NoPath {
            from: source.to_string(),
            to: target.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::Dijkstra;

    #[test]
    fn test_agrees_with_dijkstra_on_builtin() {
        let graph = ParkGraph::builtin().unwrap();
        let ucs = UniformCost
            .solve(&graph, "Legoland, CA", "Dollywood, TN")
            .unwrap();
        let dijkstra = Dijkstra
            .solve(&graph, "Legoland, CA", "Dollywood, TN")
            .unwrap();

        assert!((ucs.total_miles - dijkstra.total_miles).abs() < 1e-9);
    }

    #[test]
    fn test_frontier_pops_cheapest() {
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { cost: 9.0, path: vec![NodeIndex::new(0)] });
        heap.push(Frontier { cost: 2.0, path: vec![NodeIndex::new(1)] });
        heap.push(Frontier { cost: 4.0, path: vec![NodeIndex::new(2)] });

        assert_eq!(heap.pop().unwrap().cost, 2.0);
        assert_eq!(heap.pop().unwrap().cost, 4.0);
        assert_eq!(heap.pop().unwrap().cost, 9.0);
    }
}
