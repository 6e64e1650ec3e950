// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path rendering - turning (graph, layout, path) into draw requests
//!
//! The core never touches pixels. It plans a [`DrawRequest`] holding the
//! whole graph, node positions, the highlighted path-edge subset, and a
//! title; a [`RenderSink`] decides what to do with it (terminal canvas,
//! DOT text, JSON).

use crate::graph::ParkGraph;
use crate::types::{Layout, Position, RoutePath};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// A node placed at a layout position
#[derive(Debug, Clone, Serialize)]
pub struct PlacedNode {
    /// Park label
    pub name: String,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

/// An edge of the base graph
#[derive(Debug, Clone, Serialize)]
pub struct DrawEdge {
    /// One endpoint label
    pub from: String,
    /// Other endpoint label
    pub to: String,
    /// Distance in miles
    pub miles: f64,
}

/// Everything a sink needs to draw one visualization
#[derive(Debug, Clone, Serialize)]
pub struct DrawRequest {
    /// Caption for the view
    pub title: String,
    /// Every graph node with its position and label
    pub nodes: Vec<PlacedNode>,
    /// Every graph edge, neutral style
    pub edges: Vec<DrawEdge>,
    /// Subset of edges to draw highlighted, as (from, to) pairs
    pub highlighted: Vec<(String, String)>,
}

impl DrawRequest {
    /// Whether an edge should be drawn highlighted, in either orientation
    #[must_use]
    pub fn is_highlighted(&self, from: &str, to: &str) -> bool {
        self.highlighted
            .iter()
            .any(|(a, b)| (a == from && b == to) || (a == to && b == from))
    }
}

/// Plan a draw request for a path over the graph
///
/// Paths with fewer than two nodes highlight nothing; the base graph is
/// still drawn.
#[must_use]
pub fn plan(graph: &ParkGraph, layout: &Layout, path: &RoutePath, title: &str) -> DrawRequest {
    let nodes = graph
        .parks()
        .iter()
        .map(|park| {
            let pos = layout
                .positions
                .get(*park)
                .copied()
                .unwrap_or(Position { x: 0.0, y: 0.0 });
            PlacedNode {
                name: (*park).to_string(),
                x: pos.x,
                y: pos.y,
            }
        })
        .collect();

    let edges = graph
        .edge_list()
        .into_iter()
        .map(|(from, to, miles)| DrawEdge {
            from: from.to_string(),
            to: to.to_string(),
            miles,
        })
        .collect();

    DrawRequest {
        title: title.to_string(),
        nodes,
        edges,
        highlighted: path.edge_pairs(),
    }
}

/// A rendering backend for draw requests
pub trait RenderSink {
    /// Draw one request; blocks until the sink is done presenting it
    ///
    /// # Errors
    ///
    /// Propagates backend failures (terminal setup, stream writes).
    fn present(&mut self, request: &DrawRequest) -> Result<()>;
}

/// Writes requests as Graphviz DOT with the path edges styled red
pub struct DotSink<W: Write> {
    out: W,
}

impl<W: Write> DotSink<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderSink for DotSink<W> {
    fn present(&mut self, request: &DrawRequest) -> Result<()> {
        writeln!(self.out, "graph parkroute {{")?;
        writeln!(self.out, "  label=\"{}\";", request.title)?;
        writeln!(
            self.out,
            "  node [shape=ellipse, style=filled, fillcolor=lightblue];"
        )?;
        writeln!(self.out)?;

        for node in &request.nodes {
            writeln!(
                self.out,
                "  \"{}\" [pos=\"{:.2},{:.2}!\"];",
                node.name, node.x, node.y
            )?;
        }

        writeln!(self.out)?;

        for edge in &request.edges {
            if request.is_highlighted(&edge.from, &edge.to) {
                writeln!(
                    self.out,
                    "  \"{}\" -- \"{}\" [label=\"{}\", color=red, penwidth=2];",
                    edge.from, edge.to, edge.miles
                )?;
            } else {
                writeln!(
                    self.out,
                    "  \"{}\" -- \"{}\" [label=\"{}\"];",
                    edge.from, edge.to, edge.miles
                )?;
            }
        }

        writeln!(self.out, "}}")?;
        Ok(())
    }
}

/// Writes requests as pretty JSON, one document per request
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderSink for JsonSink<W> {
    fn present(&mut self, request: &DrawRequest) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, request)?;
        writeln!(self.out)?;
        Ok(())
    }
}
