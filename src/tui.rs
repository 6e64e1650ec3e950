// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Terminal canvas renderer
//!
//! Presents one draw request at a time on a ratatui canvas and blocks until
//! the viewer dismisses it (q, Esc, Enter, or Space). The orchestrator only
//! moves on to the next solver once control returns, matching the strictly
//! sequential model.

use crate::render::{DrawRequest, RenderSink};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::style::{Color, Style};
use ratatui::widgets::canvas::{Canvas, Line};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Renders draw requests on an interactive terminal canvas
pub struct TuiSink;

impl RenderSink for TuiSink {
    fn present(&mut self, request: &DrawRequest) -> Result<()> {
        tracing::info!(title = %request.title, "opening terminal view");

        let mut terminal = ratatui::init();
        let result = (|| -> Result<()> {
            loop {
                terminal.draw(|frame| draw(frame, request))?;
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && matches!(
                            key.code,
                            KeyCode::Char('q')
                                | KeyCode::Esc
                                | KeyCode::Enter
                                | KeyCode::Char(' ')
                        )
                    {
                        return Ok(());
                    }
                }
            }
        })();
        ratatui::restore();
        result
    }
}

/// Paint the whole graph, then the highlighted path edges on top
fn draw(frame: &mut Frame, request: &DrawRequest) {
    let (x_bounds, y_bounds) = bounds(request);

    let canvas = Canvas::default()
        .block(
            Block::bordered()
                .title(request.title.clone())
                .title_bottom("q/Esc/Enter to continue"),
        )
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for edge in &request.edges {
                let (Some(a), Some(b)) = (node(request, &edge.from), node(request, &edge.to))
                else {
                    continue;
                };
                let color = if request.is_highlighted(&edge.from, &edge.to) {
                    Color::Red
                } else {
                    Color::DarkGray
                };
                ctx.draw(&Line {
                    x1: a.0,
                    y1: a.1,
                    x2: b.0,
                    y2: b.1,
                    color,
                });
            }

            ctx.layer();

            for placed in &request.nodes {
                ctx.print(
                    placed.x,
                    placed.y,
                    ratatui::text::Line::styled(
                        placed.name.clone(),
                        Style::default().fg(Color::Cyan),
                    ),
                );
            }
        });

    frame.render_widget(canvas, frame.area());
}

fn node(request: &DrawRequest, name: &str) -> Option<(f64, f64)> {
    request
        .nodes
        .iter()
        .find(|n| n.name == name)
        .map(|n| (n.x, n.y))
}

/// Canvas bounds with a margin so labels near the edge stay visible
fn bounds(request: &DrawRequest) -> ([f64; 2], [f64; 2]) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for n in &request.nodes {
        min_x = min_x.min(n.x);
        max_x = max_x.max(n.x);
        min_y = min_y.min(n.y);
        max_y = max_y.max(n.y);
    }

    if request.nodes.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }

    let margin = 8.0;
    (
        [min_x - margin, max_x + margin],
        [min_y - margin, max_y + margin],
    )
}
