// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! View command - render the base graph with no highlighted path

use crate::config::Config;
use crate::graph::ParkGraph;
use crate::layout::LayoutEngine;
use crate::render;
use crate::types::RoutePath;
use anyhow::Result;

/// Run the view command
pub fn run(config: &Config, renderer: Option<String>) -> Result<()> {
    let graph = ParkGraph::builtin()?;
    let layout = LayoutEngine::new(config.layout.clone()).compute(&graph);

    // An empty path highlights nothing, leaving just the base graph
    let empty = RoutePath {
        parks: vec![],
        total_miles: 0.0,
    };
    let request = render::plan(&graph, &layout, &empty, "Theme park routes");

    let renderer = renderer.unwrap_or_else(|| config.renderer.clone());
    super::make_sink(&renderer)?.present(&request)
}
