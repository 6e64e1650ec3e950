// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Shortest-path solvers
//!
//! Three genuinely independent algorithms share the [`Solver`] contract. On
//! the fixed non-negative dataset all three must agree on total path weight;
//! keeping them separate lets the tests verify one against the others.

pub mod bellman_ford;
pub mod dijkstra;
pub mod uniform_cost;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use uniform_cost::UniformCost;

use crate::errors::RouteError;
use crate::graph::ParkGraph;
use crate::types::RoutePath;
use petgraph::graph::NodeIndex;

/// Common contract for shortest-path algorithms
pub trait Solver {
    /// Human-readable algorithm name, used in render titles
    fn name(&self) -> &'static str;

    /// Compute a minimum-total-weight path from `source` to `target`
    ///
    /// `source == target` yields the single-node path with weight zero.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoPath`] when the target is unreachable, and
    /// [`RouteError::NegativeCycle`] where the algorithm detects one.
    fn solve(&self, graph: &ParkGraph, source: &str, target: &str)
        -> Result<RoutePath, RouteError>;
}

/// All solvers, in the order the orchestrator runs them
#[must_use]
pub fn all_solvers() -> Vec<Box<dyn Solver>> {
    vec![
        Box::new(Dijkstra),
        Box::new(BellmanFord),
        Box::new(UniformCost),
    ]
}

/// Resolve endpoint labels to node indices
///
/// Endpoints are contractually valid park labels; an unknown label is
/// reported as unreachable rather than panicking.
pub(crate) fn endpoints(
    graph: &ParkGraph,
    source: &str,
    target: &str,
) -> Result<(NodeIndex, NodeIndex), RouteError> {
    let no_path = || RouteError::NoPath {
        from: source.to_string(),
        to: target.to_string(),
    };
    let src = graph.index_of(source).ok_or_else(no_path)?;
    let dst = graph.index_of(target).ok_or_else(no_path)?;
    Ok((src, dst))
}

/// Walk a predecessor map back from `target` and build the labeled path
pub(crate) fn trace_path(
    graph: &ParkGraph,
    prev: &[Option<NodeIndex>],
    source: NodeIndex,
    target: NodeIndex,
    total_miles: f64,
) -> RoutePath {
    let mut indices = vec![target];
    let mut current = target;
    while current != source {
        // Only called for reached targets, so the chain is complete
        match prev[current.index()] {
            Some(p) => {
                indices.push(p);
                current = p;
            }
            None => break,
        }
    }
    indices.reverse();

    RoutePath {
        parks: indices.iter().map(|&i| graph.label(i).to_string()).collect(),
        total_miles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_solvers_order() {
        let names: Vec<_> = all_solvers().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Dijkstra", "Bellman-Ford", "Uniform Cost Search"]);
    }

    #[test]
    fn test_identity_path_for_every_park() {
        let graph = ParkGraph::builtin().unwrap();
        for solver in all_solvers() {
            for park in graph.parks() {
                let path = solver.solve(&graph, park, park).unwrap();
                assert_eq!(path.parks, vec![park.to_string()], "{}", solver.name());
                assert_eq!(path.total_miles, 0.0);
            }
        }
    }
}
