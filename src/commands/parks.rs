// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Parks command - numbered listing of the built-in catalog

use crate::graph::ParkGraph;
use anyhow::Result;
use owo_colors::OwoColorize;

/// Run the parks command
pub fn run() -> Result<()> {
    let graph = ParkGraph::builtin()?;

    println!("{}", "Available Theme Parks:".bold());
    for (i, park) in graph.parks().iter().enumerate() {
        println!("  {:>2}. {}", (i + 1).green(), park);
    }
    println!(
        "\n{} parks, {} routes",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(())
}
