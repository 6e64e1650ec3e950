// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Parkroute library - shortest routes between theme parks
//!
//! This crate provides the core functionality for computing shortest paths
//! between theme parks in a fixed weighted route graph and visualizing each
//! result over a force-directed layout.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod commands;
pub mod config;
pub mod graph;
pub mod layout;
pub mod render;
pub mod solve;
pub mod tui;

/// Core data types for the route graph
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    // =========================================================================
    // Catalog Records
    // =========================================================================

    /// A theme park node in the route graph
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Park {
        /// Unique display label, e.g. "Magic Kingdom, FL"
        pub name: String,
    }

    impl Park {
        /// Build a park record from its label
        #[must_use]
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }
    }

    /// An undirected weighted route between two parks
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Route {
        /// One endpoint park label
        pub from: String,
        /// Other endpoint park label
        pub to: String,
        /// Driving distance in miles
        pub miles: f64,
    }

    impl Route {
        /// Build a route record between two park labels
        #[must_use]
        pub fn new(from: impl Into<String>, to: impl Into<String>, miles: f64) -> Self {
            Self {
                from: from.into(),
                to: to.into(),
                miles,
            }
        }
    }

    // =========================================================================
    // Paths
    // =========================================================================

    /// An ordered walk through the graph with its accumulated weight
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct RoutePath {
        /// Park labels in visit order
        pub parks: Vec<String>,
        /// Sum of edge weights along consecutive pairs
        pub total_miles: f64,
    }

    impl RoutePath {
        /// The degenerate single-node path (source == target), weight zero
        #[must_use]
        pub fn single(park: impl Into<String>) -> Self {
            Self {
                parks: vec![park.into()],
                total_miles: 0.0,
            }
        }

        /// Consecutive pairs of the path, i.e. the edges it traverses
        #[must_use]
        pub fn edge_pairs(&self) -> Vec<(String, String)> {
            self.parks
                .windows(2)
                .map(|w| (w[0].clone(), w[1].clone()))
                .collect()
        }

        /// Number of parks on the path
        #[must_use]
        pub fn len(&self) -> usize {
            self.parks.len()
        }

        /// True when the path holds no parks at all
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.parks.is_empty()
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Position in 2D space
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Position {
        /// X coordinate
        pub x: f64,
        /// Y coordinate
        pub y: f64,
    }

    /// Layout metadata for visualization
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct Layout {
        /// Node positions keyed by park label
        #[serde(default)]
        pub positions: HashMap<String, Position>,
    }
}

/// Error taxonomy for the route graph core
pub mod errors {
    use thiserror::Error;

    /// All failures the core can surface to callers
    #[derive(Debug, Error)]
    pub enum RouteError {
        /// Catalog integrity failure at graph-build time
        #[error("invalid route {from} -> {to}: {reason}")]
        InvalidEdge {
            /// Declared source endpoint
            from: String,
            /// Declared target endpoint
            to: String,
            /// What made the route inadmissible
            reason: String,
        },

        /// User-supplied park index outside `[1, max]`
        #[error("selection {index} is out of range 1..={max}")]
        InvalidSelection {
            /// The 1-based index the user gave
            index: usize,
            /// Number of parks available
            max: usize,
        },

        /// Requested endpoints are disconnected
        #[error("no route exists from {from} to {to}")]
        NoPath {
            /// Source park label
            from: String,
            /// Target park label
            to: String,
        },

        /// Bellman-Ford found a negative-weight cycle reachable from source
        #[error("negative-weight cycle detected while relaxing edges")]
        NegativeCycle,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::errors::RouteError;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
