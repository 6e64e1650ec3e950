// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Bellman-Ford - edge relaxation with negative-cycle detection
//!
//! Each undirected route is relaxed in both directions for up to |V|-1
//! rounds, then one extra pass checks for a negative-weight cycle. The
//! built-in dataset is all-positive, but the check stays because the
//! algorithm is general.

use super::{endpoints, trace_path, Solver};
use crate::errors::RouteError;
use crate::graph::ParkGraph;
use crate::types::RoutePath;
use petgraph::graph::NodeIndex;

/// Bellman-Ford over the park graph
pub struct BellmanFord;

impl Solver for BellmanFord {
    fn name(&self) -> &'static str {
        "Bellman-Ford"
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

        // Undirected edges doubled into both traversal directions
        let mut arcs: Vec<(NodeIndex, NodeIndex, f64)> = Vec::new();
        for (from, to, miles) in graph.edge_list() {
            if let (Some(u), Some(v)) = (graph.index_of(from), graph.index_of(to)) {
                arcs.push((u, v, miles));
                arcs.push((v, u, miles));
            }
        }

        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
        dist[src.index()] = 0.0;

        for round in 0..n.saturating_sub(1) {
            let mut relaxed = false;
            for &(u, v, w) in &arcs {
                if dist[u.index()].is_finite() && dist[u.index()] + w < dist[v.index()] {
                    dist[v.index()] = dist[u.index()] + w;
                    prev[v.index()] = Some(u);
                    relaxed = true;
                }
            }
            if !relaxed {
                tracing::trace!(round, "bellman-ford converged early");
                break;
            }
        }

        // Detection pass: any further improvement means a negative cycle
        for &(u, v, w) in &arcs {
            if dist[u.index()].is_finite() && dist[u.index()] + w < dist[v.index()] {
                return Err(RouteError::NegativeCycle);
            }
        }

        let total = dist[dst.index()];
        if total.is_finite() {
            Ok(trace_path(graph, &prev, src, dst, total))
        } else {
            Err(RouteError::NoPath {
                from: source.to_string(),
                to: target.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{Park, Route};

    #[test]
    fn test_matches_known_distance() {
        let graph = ParkGraph::builtin().unwrap();
        let path = BellmanFord
            .solve(&graph, "Cedar Point, OH", "Hersheypark, PA")
            .unwrap();

        assert_eq!(path.total_miles, 350.0);
        assert_eq!(
            path.parks,
            vec!["Cedar Point, OH", "Kennywood, PA", "Hersheypark, PA"]
        );
    }

    #[test]
    fn test_negative_cycle_detected() {
        // An undirected negative edge is traversable back and forth, which
        // is itself a negative cycle
        let catalog = Catalog {
            parks: vec![Park::new("A"), Park::new("B"), Park::new("C")],
            routes: vec![
                Route::new("A", "B", 4.0),
                Route::new("B", "C", -3.0),
            ],
        };
        let graph = ParkGraph::from_catalog(catalog).unwrap();

        let err = BellmanFord.solve(&graph, "A", "C").unwrap_err();
        assert!(matches!(err, RouteError::NegativeCycle));
    }
}
