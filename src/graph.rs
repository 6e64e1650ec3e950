// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph data structures for the theme-park route graph

use crate::catalog::Catalog;
use crate::errors::RouteError;
use anyhow::{Context, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// The route graph with petgraph backing for algorithms
///
/// Built once from a [`Catalog`] and read-only thereafter. Node order equals
/// catalog insertion order, which is what 1-based user selections index into.
#[derive(Debug)]
pub struct ParkGraph {
    /// The underlying undirected graph; node weight is the park label,
    /// edge weight the distance in miles
    graph: UnGraph<String, f64>,
    /// Map from park label to node index
    node_indices: HashMap<String, NodeIndex>,
    /// The catalog this graph was built from
    pub catalog: Catalog,
}

impl ParkGraph {
    /// Build the graph from a catalog, validating every route
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidEdge`] when a route references an
    /// undeclared park, joins a park to itself, or duplicates another route.
    pub fn from_catalog(catalog: Catalog) -> Result<Self, RouteError> {
        let mut graph = UnGraph::default();
        let mut node_indices = HashMap::new();

        for park in &catalog.parks {
            let idx = graph.add_node(park.name.clone());
            node_indices.insert(park.name.clone(), idx);
        }

        for route in &catalog.routes {
            let invalid = |reason: &str| RouteError::InvalidEdge {
                from: route.from.clone(),
                to: route.to.clone(),
                reason: reason.to_string(),
            };

            let from_idx = *node_indices
                .get(&route.from)
                .ok_or_else(|| invalid("source park is not declared"))?;
            let to_idx = *node_indices
                .get(&route.to)
                .ok_or_else(|| invalid("target park is not declared"))?;

            if from_idx == to_idx {
                return Err(invalid("route joins a park to itself"));
            }
            if graph.find_edge(from_idx, to_idx).is_some() {
                return Err(invalid("route duplicates an existing one"));
            }

            graph.add_edge(from_idx, to_idx, route.miles);
        }

        tracing::debug!(
            parks = catalog.parks.len(),
            routes = catalog.routes.len(),
            "route graph built"
        );

        Ok(Self {
            graph,
            node_indices,
            catalog,
        })
    }

    /// Build from the compiled-in catalog
    ///
    /// # Errors
    ///
    /// Propagates [`RouteError::InvalidEdge`]; the built-in data never
    /// triggers it.
    pub fn builtin() -> Result<Self, RouteError> {
        Self::from_catalog(Catalog::builtin())
    }

    /// Park labels in insertion order
    #[must_use]
    pub fn parks(&self) -> Vec<&str> {
        self.catalog.park_names().collect()
    }

    /// Resolve a 1-based menu selection to a park label
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidSelection`] when `index` is outside
    /// `[1, park_count]`.
    pub fn park_by_selection(&self, index: usize) -> Result<&str, RouteError> {
        let max = self.catalog.park_count();
        if index == 0 || index > max {
            return Err(RouteError::InvalidSelection { index, max });
        }
        Ok(self.catalog.parks[index - 1].name.as_str())
    }

    /// Look up the node index for a park label
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(name).copied()
    }

    /// The park label at a node index
    #[must_use]
    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Adjacent nodes and the weight of the connecting edge
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph
            .edges(idx)
            .map(move |edge| (if edge.source() == idx { edge.target() } else { edge.source() }, *edge.weight()))
    }

    /// Weight of the edge between two parks, if one exists
    #[must_use]
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let a_idx = self.index_of(a)?;
        let b_idx = self.index_of(b)?;
        self.graph
            .find_edge(a_idx, b_idx)
            .map(|e| *self.graph.edge_weight(e).unwrap_or(&0.0))
    }

    /// Whether two parks are joined by an edge
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// All edges as (from, to, miles) with labels in catalog order
    #[must_use]
    pub fn edge_list(&self) -> Vec<(&str, &str, f64)> {
        self.catalog
            .routes
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str(), r.miles))
            .collect()
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph parkroute {\n");
        dot.push_str("  node [shape=ellipse, style=filled, fillcolor=lightblue];\n\n");

        for park in self.parks() {
            dot.push_str(&format!("  \"{park}\";\n"));
        }

        dot.push('\n');

        for (from, to, miles) in self.edge_list() {
            dot.push_str(&format!("  \"{from}\" -- \"{to}\" [label=\"{miles}\"];\n"));
        }

        dot.push_str("}\n");
        dot
    }

    /// Export the catalog to JSON
    ///
    /// # Errors
    ///
    /// Fails when serialization fails, which the fixed dataset never does.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.catalog).context("Failed to serialize catalog to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Park, Route};

    fn two_park_catalog() -> Catalog {
        Catalog {
            parks: vec![Park::new("A"), Park::new("B")],
            routes: vec![Route::new("A", "B", 5.0)],
        }
    }

    #[test]
    fn test_builtin_builds() {
        let graph = ParkGraph::builtin().unwrap();
        assert_eq!(graph.node_count(), 20);
        assert_eq!(graph.edge_count(), 20);
    }

    #[test]
    fn test_parks_are_in_menu_order() {
        let graph = ParkGraph::builtin().unwrap();
        let parks = graph.parks();
        assert_eq!(parks[0], "Magic Kingdom, FL");
        assert_eq!(parks[8], "Disney's Animal Kingdom, FL");
        assert_eq!(parks[19], "Busch Gardens Tampa Bay, FL");
    }

    #[test]
    fn test_neighbors_of_magic_kingdom() {
        let graph = ParkGraph::builtin().unwrap();
        let idx = graph.index_of("Magic Kingdom, FL").unwrap();
        let mut neighbors: Vec<(String, f64)> = graph
            .neighbors(idx)
            .map(|(n, w)| (graph.label(n).to_string(), w))
            .collect();
        neighbors.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(
            neighbors,
            vec![
                ("Busch Gardens Tampa Bay, FL".to_string(), 100.0),
                ("Disneyland, CA".to_string(), 2500.0),
            ]
        );
    }

    #[test]
    fn test_undirected_weight_lookup() {
        let graph = ParkGraph::builtin().unwrap();
        assert_eq!(graph.edge_weight("Magic Kingdom, FL", "Disneyland, CA"), Some(2500.0));
        assert_eq!(graph.edge_weight("Disneyland, CA", "Magic Kingdom, FL"), Some(2500.0));
        assert_eq!(graph.edge_weight("Magic Kingdom, FL", "Legoland, CA"), None);
    }

    #[test]
    fn test_undeclared_park_rejected() {
        let mut catalog = two_park_catalog();
        catalog.routes.push(Route::new("A", "Nowhere", 1.0));

        let err = ParkGraph::from_catalog(catalog).unwrap_err();
        assert!(matches!(err, RouteError::InvalidEdge { .. }));
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut catalog = two_park_catalog();
        catalog.routes.push(Route::new("B", "B", 1.0));

        let err = ParkGraph::from_catalog(catalog).unwrap_err();
        assert!(matches!(err, RouteError::InvalidEdge { .. }));
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let mut catalog = two_park_catalog();
        // Same pair in reverse orientation still duplicates
        catalog.routes.push(Route::new("B", "A", 7.0));

        let err = ParkGraph::from_catalog(catalog).unwrap_err();
        assert!(matches!(err, RouteError::InvalidEdge { .. }));
    }

    #[test]
    fn test_selection_bounds() {
        let graph = ParkGraph::builtin().unwrap();
        assert_eq!(graph.park_by_selection(1).unwrap(), "Magic Kingdom, FL");
        assert_eq!(graph.park_by_selection(20).unwrap(), "Busch Gardens Tampa Bay, FL");
        assert!(matches!(
            graph.park_by_selection(0),
            Err(RouteError::InvalidSelection { index: 0, max: 20 })
        ));
        assert!(matches!(
            graph.park_by_selection(21),
            Err(RouteError::InvalidSelection { index: 21, max: 20 })
        ));
    }

    #[test]
    fn test_to_dot() {
        let graph = ParkGraph::builtin().unwrap();
        let dot = graph.to_dot();

        assert!(dot.contains("graph parkroute"));
        assert!(dot.contains("\"Magic Kingdom, FL\" -- \"Disneyland, CA\""));
    }
}
