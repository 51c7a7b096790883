// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors command: error reports with call sites.

use std::io::{self, Write};

use termcolor::{StandardStream, WriteColor};

use verbose::cli::ErrorsArgs;
use verbose::error::ExitCode;
use verbose::settings::Settings;
use verbose::term::{resolve_color, scheme};

/// Run the errors command.
pub fn run(settings: &Settings, args: &ErrorsArgs) -> anyhow::Result<ExitCode> {
    let mut stdout = StandardStream::stdout(resolve_color());
    let mut verb = settings.emitter.build_verb(io::stdout())?;
    verb.enabled = false;

    let err = io::Error::other("This is an error");

    heading(&mut stdout, "Should print and not exit:")?;
    verb.err_out(Some(&err), "This should print and not exit", false);
    verb.flush();

    heading(&mut stdout, "Should not print and not exit:")?;
    let seen = verb.err(Some(&err), "Should not print", false);
    writeln!(stdout, "error present: {}", seen)?;

    heading(&mut stdout, "Nothing to report:")?;
    let seen = verb.err_out(None::<&io::Error>, "Never printed", false);
    writeln!(stdout, "error present: {}", seen)?;

    if args.exit {
        heading(&mut stdout, "Error and exit:")?;
        stdout.flush()?;
        let err = io::Error::other("Error and exit program");
        verb.enabled = true;
        verb.err(Some(&err), "error and exit!", true);
        writeln!(stdout, "If you see this, the exit did not happen.")?;
        return Ok(ExitCode::InternalError);
    }

    Ok(ExitCode::Success)
}

fn heading(stdout: &mut StandardStream, text: &str) -> io::Result<()> {
    stdout.set_color(&scheme::error())?;
    write!(stdout, "{}", text)?;
    stdout.reset()?;
    writeln!(stdout)?;
    stdout.flush()
}
