// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use verbose::cli::{Cli, Command};
use verbose::error::ExitCode;
use verbose::settings::Settings;

mod cmd_catalog;
mod cmd_demo;
mod cmd_errors;
mod cmd_json;
mod cmd_route;
mod cmd_spin;

fn init_logging() {
    let filter = EnvFilter::try_from_env("VERBOSE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("verbose: {}", e);
            match e.downcast_ref::<verbose::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        // Show help for bare invocation
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match command {
        Command::Demo(args) => cmd_demo::run(&cli, &settings, args),
        Command::Route(args) => cmd_route::run(&cli, &settings, args),
        Command::Json(args) => cmd_json::run(args),
        Command::Spin(args) => cmd_spin::run(&cli, &settings, args),
        Command::Errors(args) => cmd_errors::run(&settings, args),
        Command::Catalog => cmd_catalog::run(),
    }
}
