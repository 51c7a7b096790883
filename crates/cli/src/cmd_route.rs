// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Route command: send verbose lines to a chosen destination.
//!
//! ```text
//! verbose route -x5 -y5                 # x+y= 10
//! verbose route -x5 -y5 -v -o stderr    # verbose lines on stderr
//! verbose route -v -o /tmp/route.log    # verbose lines appended to a file
//! ```
//!
//! The sum always goes to stdout, whatever the destination.

use std::io::Write;

use verbose::cli::{Cli, RouteArgs};
use verbose::error::ExitCode;
use verbose::settings::{Destination, Settings};
use verbose::{vfprint, vfprintf, vfprintln, vprint, vprintf, vprintln};

/// Run the route command.
pub fn run(cli: &Cli, settings: &Settings, args: &RouteArgs) -> anyhow::Result<ExitCode> {
    let destination = Destination::parse(&args.output);
    let mut verb = settings.emitter.build_verb(destination.open()?)?;
    verb.enabled |= cli.verbose;

    vprintln!(verb, "Setting output to", destination.describe());
    vprintln!(verb, "Setting x to", args.x);
    vprintln!(verb, "Setting y to", args.y);
    verb.flush();

    println!("x+y= {}", args.x + args.y);

    let mut out = destination.open()?;
    vfprintf!(verb, &mut out, "This is fprintf {}", "\n");
    vfprintln!(verb, &mut out, "This is fprintln");
    vfprint!(verb, &mut out, "This is fprint", "\n");
    out.flush()?;
    vprintf!(verb, "This is printf {}", "\n");
    vprintln!(verb, "This is println");
    vprint!(verb, "This is print", "\n");
    verb.flush();

    Ok(ExitCode::Success)
}
