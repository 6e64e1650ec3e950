// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dijkstra's algorithm - priority-ordered expansion by tentative distance
//!
//! Correct for non-negative edge weights, which the built-in dataset
//! satisfies. Ties break by node insertion order so repeated runs return the
//! same path.

use super::{endpoints, trace_path, Solver};
use crate::errors::RouteError;
use crate::graph::ParkGraph;
use crate::types::RoutePath;
use petgraph::graph::NodeIndex;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Binary-heap Dijkstra over the park graph
pub struct Dijkstra;

/// Heap entry ordered so that `BinaryHeap` pops the smallest score first,
/// with equal scores resolved by ascending node index
#[derive(Copy, Clone, Debug, PartialEq)]
struct MinScored(f64, NodeIndex);

impl Eq for MinScored {}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: a smaller score must compare greater to surface first.
        // Weights are finite, so partial_cmp never sees NaN here.
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.1.index().cmp(&self.1.index()))
    }
}

impl Solver for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
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
        let n = graph.node_count();

        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        dist[src.index()] = 0.0;
        heap.push(MinScored(0.0, src));

        while let Some(MinScored(score, node)) = heap.pop() {
            if settled[node.index()] {
                continue;
            }
            settled[node.index()] = true;

            if node == dst {
                tracing::debug!(miles = score, "dijkstra reached target");
                return Ok(trace_path(graph, &prev, src, dst, score));
            }

            for (next, weight) in graph.neighbors(node) {
                if settled[next.index()] {
                    continue;
                }
                let candidate = score + weight;
                if candidate < dist[next.index()] {
                    dist[next.index()] = candidate;
                    prev[next.index()] = Some(node);
                    heap.push(MinScored(candidate, next));
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

    #[test]
    fn test_adjacent_parks() {
        let graph = ParkGraph::builtin().unwrap();
        let path = Dijkstra
            .solve(&graph, "Disney's Animal Kingdom, FL", "SeaWorld Orlando, FL")
            .unwrap();

        assert_eq!(path.total_miles, 16.0);
        assert_eq!(path.parks.len(), 2);
    }

    #[test]
    fn test_picks_cheaper_cycle_direction() {
        let graph = ParkGraph::builtin().unwrap();
        // Backwards around the cycle: 100 + 1000 = 1100 beats the long way
        let path = Dijkstra
            .solve(&graph, "Magic Kingdom, FL", "Hersheypark, PA")
            .unwrap();

        assert_eq!(path.total_miles, 1100.0);
        assert_eq!(
            path.parks,
            vec![
                "Magic Kingdom, FL",
                "Busch Gardens Tampa Bay, FL",
                "Hersheypark, PA",
            ]
        );
    }

    #[test]
    fn test_min_scored_orders_small_first() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(5.0, NodeIndex::new(0)));
        heap.push(MinScored(1.0, NodeIndex::new(1)));
        heap.push(MinScored(3.0, NodeIndex::new(2)));

        assert_eq!(heap.pop().unwrap().1.index(), 1);
        assert_eq!(heap.pop().unwrap().1.index(), 2);
        assert_eq!(heap.pop().unwrap().1.index(), 0);
    }

    #[test]
    fn test_min_scored_ties_break_by_index() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(2.0, NodeIndex::new(7)));
        heap.push(MinScored(2.0, NodeIndex::new(3)));

        assert_eq!(heap.pop().unwrap().1.index(), 3);
    }
}
