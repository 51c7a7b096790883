// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::term::Target;

/// Conditional debug printing and terminal spinners, demonstrated
#[derive(Parser)]
#[command(name = "verbose")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific settings file
    #[arg(short = 'C', long = "config", global = true, env = "VERBOSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Walk through every print style
    Demo(DemoArgs),
    /// Route verbose output to stdout, stderr or a file
    Route(RouteArgs),
    /// Print a structured payload as indented JSON
    Json(JsonArgs),
    /// Show a spinner for a while
    Spin(SpinArgs),
    /// Report errors with call-site information
    Errors(ErrorsArgs),
    /// List the spinner glyph catalog
    Catalog,
}

#[derive(clap::Args, Default)]
pub struct DemoArgs {
    /// Text to include in every line
    #[arg(short, long, default_value = "")]
    pub string: String,

    /// Date pattern in date(1) syntax, or "default"
    #[arg(short, long, value_name = "PATTERN")]
    pub date: Option<String>,

    /// Tag lines with file:line
    #[arg(long)]
    pub line: bool,

    /// Separator between date, line tag and text
    #[arg(long, value_name = "SEP")]
    pub delimiter: Option<String>,

    /// Where verbose lines go: stdout, stderr or a file path
    #[arg(short, long, value_name = "DEST")]
    pub output: Option<String>,
}

#[derive(clap::Args)]
pub struct RouteArgs {
    /// Value of x
    #[arg(short, default_value_t = 2)]
    pub x: i64,

    /// Value of y
    #[arg(short, default_value_t = 2)]
    pub y: i64,

    /// Where verbose lines go: stdout, stderr or a file path
    #[arg(short, long, default_value = "stdout", value_name = "DEST")]
    pub output: String,
}

#[derive(clap::Args, Default)]
pub struct JsonArgs {
    /// Stamp the payload with a date in date(1) syntax
    #[arg(short, long, value_name = "PATTERN")]
    pub date: Option<String>,
}

#[derive(clap::Args, Default)]
pub struct SpinArgs {
    /// Glyph set index (see `verbose catalog`)
    #[arg(short, long)]
    pub kind: Option<usize>,

    /// How long to spin
    #[arg(long, default_value_t = 2.0)]
    pub seconds: f64,

    /// Redraws per second
    #[arg(long)]
    pub speed: Option<u32>,

    /// Text shown before the glyph
    #[arg(long)]
    pub label: Option<String>,

    /// Stream to draw on
    #[arg(long, value_enum)]
    pub target: Option<Target>,

    /// Cycle through every glyph set
    #[arg(long)]
    pub all: bool,
}

#[derive(clap::Args, Default)]
pub struct ErrorsArgs {
    /// Terminate after the final report
    #[arg(long)]
    pub exit: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
