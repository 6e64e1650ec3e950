// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod export;
pub mod parks;
pub mod route;
pub mod view;

use crate::render::{DotSink, JsonSink, RenderSink};
use crate::tui::TuiSink;
use anyhow::Result;

/// Build the render sink named by config or flag
pub(crate) fn make_sink(renderer: &str) -> Result<Box<dyn RenderSink>> {
    match renderer {
        "tui" => Ok(Box::new(TuiSink)),
        "dot" => Ok(Box::new(DotSink::new(std::io::stdout()))),
        "json" => Ok(Box::new(JsonSink::new(std::io::stdout()))),
        other => anyhow::bail!("Unknown renderer: {}. Valid: tui, dot, json", other),
    }
}
