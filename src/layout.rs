// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Force-directed node placement (Fruchterman-Reingold)
//!
//! Nodes are seeded on a circle in insertion order, then iterated with
//! repulsive forces between all pairs and attractive forces along edges
//! under a linearly cooling temperature. Seeding is fixed, so the same graph
//! and settings always produce the same placement, though nothing downstream
//! depends on exact coordinates.

use crate::config::LayoutSettings;
use crate::graph::ParkGraph;
use crate::types::{Layout, Position};
use std::f64::consts::TAU;

/// Minimum separation used when two nodes coincide
const EPSILON: f64 = 0.01;

/// Computes 2D positions for every node of a graph
pub struct LayoutEngine {
    settings: LayoutSettings,
}

impl LayoutEngine {
    /// Create an engine with the given settings
    #[must_use]
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    /// Compute a layout for the graph
    ///
    /// Recomputed per visualization call; nothing is cached or persisted.
    #[must_use]
    pub fn compute(&self, graph: &ParkGraph) -> Layout {
        let n = graph.node_count();
        let width = self.settings.width;
        let height = self.settings.height;

        let mut layout = Layout::default();
        if n == 0 {
            return layout;
        }
        if n == 1 {
            layout
                .positions
                .insert(graph.parks()[0].to_string(), Position {
                    x: width / 2.0,
                    y: height / 2.0,
                });
            return layout;
        }

        // Circular seed by insertion order keeps the placement deterministic
        #[allow(clippy::cast_precision_loss)]
        let count = n as f64;
        let radius = width.min(height) / 2.5;
        let mut pos: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let angle = TAU * i as f64 / count;
                (
                    width / 2.0 + radius * angle.cos(),
                    height / 2.0 + radius * angle.sin(),
                )
            })
            .collect();

        let k = (width * height / count).sqrt();
        let mut temperature = width / 10.0;
        #[allow(clippy::cast_precision_loss)]
        let cooling = temperature / self.settings.iterations.max(1) as f64;

        let edges: Vec<(usize, usize)> = graph
            .edge_list()
            .iter()
            .filter_map(|(from, to, _)| {
                Some((graph.index_of(from)?.index(), graph.index_of(to)?.index()))
            })
            .collect();

        for _ in 0..self.settings.iterations {
            let mut disp = vec![(0.0_f64, 0.0_f64); n];

            // Repulsion between every pair
            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i].0 - pos[j].0;
                    let dy = pos[i].1 - pos[j].1;
                    let dist = (dx * dx + dy * dy).sqrt().max(EPSILON);
                    let force = k * k / dist;
                    let (fx, fy) = (dx / dist * force, dy / dist * force);
                    disp[i].0 += fx;
                    disp[i].1 += fy;
                    disp[j].0 -= fx;
                    disp[j].1 -= fy;
                }
            }

            // Attraction along edges
            for &(i, j) in &edges {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(EPSILON);
                let force = dist * dist / k;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i].0 -= fx;
                disp[i].1 -= fy;
                disp[j].0 += fx;
                disp[j].1 += fy;
            }

            // Apply displacement, capped by the current temperature
            for i in 0..n {
                let (dx, dy) = disp[i];
                let len = (dx * dx + dy * dy).sqrt().max(EPSILON);
                let step = len.min(temperature);
                pos[i].0 = (pos[i].0 + dx / len * step).clamp(0.0, width);
                pos[i].1 = (pos[i].1 + dy / len * step).clamp(0.0, height);
            }

            temperature = (temperature - cooling).max(EPSILON);
        }

        for (i, park) in graph.parks().iter().enumerate() {
            layout
                .positions
                .insert((*park).to_string(), Position {
                    x: pos[i].0,
                    y: pos[i].1,
                });
        }

        tracing::debug!(
            nodes = n,
            iterations = self.settings.iterations,
            "layout computed"
        );
        layout
    }
}
