// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Parkroute CLI - shortest routes between theme parks

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use parkroute::{commands, config};

#[derive(Parser)]
#[command(name = "parkroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "PARKROUTE_CONFIG")]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the theme parks with their menu numbers
    Parks,

    /// Compute and visualize shortest routes between two parks
    Route {
        /// Start park (1-based menu number); prompts when omitted
        start: Option<usize>,

        /// End park (1-based menu number); prompts when omitted
        end: Option<usize>,

        /// Algorithm to run (dijkstra, bellman-ford, ucs, all)
        #[arg(short, long, default_value = "all")]
        algorithm: String,

        /// Renderer (tui, dot, json); defaults to the configured one
        #[arg(short, long)]
        renderer: Option<String>,
    },

    /// Render the base graph without a highlighted path
    View {
        /// Renderer (tui, dot, json); defaults to the configured one
        #[arg(short, long)]
        renderer: Option<String>,
    },

    /// Export graph to various formats
    Export {
        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = config::load(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Parks => commands::parks::run(),
        Commands::Route {
            start,
            end,
            algorithm,
            renderer,
        } => commands::route::run(&config, start, end, &algorithm, renderer),
        Commands::View { renderer } => commands::view::run(&config, renderer),
        Commands::Export { format, output } => commands::export::run(&format, output),
        Commands::Completions { shell } => commands::completions::run(shell, Cli::command()),
    }
}
