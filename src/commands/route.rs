// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Route command - run the solvers and visualize each result
//!
//! This is the orchestrator: every selected solver runs in sequence against
//! the same (start, end) pair and each result is rendered before the next
//! solver starts. Solver failures propagate; no fallback path is invented.

use crate::config::Config;
use crate::graph::ParkGraph;
use crate::layout::LayoutEngine;
use crate::render;
use crate::solve::{self, BellmanFord, Dijkstra, Solver, UniformCost};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

/// Run the route command
pub fn run(
    config: &Config,
    start: Option<usize>,
    end: Option<usize>,
    algorithm: &str,
    renderer: Option<String>,
) -> Result<()> {
    let graph = ParkGraph::builtin()?;

    let solvers: Vec<Box<dyn Solver>> = match algorithm {
        "all" => solve::all_solvers(),
        "dijkstra" => vec![Box::new(Dijkstra)],
        "bellman-ford" | "bellman" => vec![Box::new(BellmanFord)],
        "ucs" | "uniform-cost" => vec![Box::new(UniformCost)],
        other => anyhow::bail!(
            "Unknown algorithm: {}. Valid: dijkstra, bellman-ford, ucs, all",
            other
        ),
    };

    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => prompt_selections(&graph)?,
    };

    let start_park = graph.park_by_selection(start)?.to_string();
    let end_park = graph.park_by_selection(end)?.to_string();
    tracing::info!(start = %start_park, end = %end_park, "routing");

    let renderer = renderer.unwrap_or_else(|| config.renderer.clone());
    let mut sink = super::make_sink(&renderer)?;
    let engine = LayoutEngine::new(config.layout.clone());

    for solver in solvers {
        let path = solver
            .solve(&graph, &start_park, &end_park)
            .with_context(|| format!("{} failed", solver.name()))?;

        println!(
            "{}: {} miles over {} parks",
            solver.name().bold(),
            path.total_miles.green(),
            path.len()
        );
        println!("  {}", path.parks.join(" -> "));

        // Recomputed per visualization, as the layout is not cached
        let layout = engine.compute(&graph);
        let title = format!(
            "{} path from {} to {}",
            solver.name(),
            start_park,
            end_park
        );
        let request = render::plan(&graph, &layout, &path, &title);
        sink.present(&request)?;
    }

    Ok(())
}

/// Interactive menu: list the parks, then read both selections from stdin
fn prompt_selections(graph: &ParkGraph) -> Result<(usize, usize)> {
    println!("{}", "Available Theme Parks:".bold());
    for (i, park) in graph.parks().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, park);
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let start = read_selection(&mut lines, "Select start park (number): ")?;
    let end = read_selection(&mut lines, "Select end park (number): ")?;
    Ok((start, end))
}

fn read_selection(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    prompt: &str,
) -> Result<usize> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let line = lines
        .next()
        .transpose()?
        .context("No selection given")?;
    line.trim()
        .parse::<usize>()
        .with_context(|| format!("Not a number: {}", line.trim()))
}
