// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo command: every print style, with and without prefixes.

use std::io;

use verbose::cli::{Cli, DemoArgs};
use verbose::emitter::{DatePattern, Verb};
use verbose::error::ExitCode;
use verbose::settings::{Destination, Settings};
use verbose::{vfprint, vfprintf, vfprintln, vprint, vprintf, vprintln};

/// Long-form stamp used when no `--date` is given, in `date(1)` syntax.
const LONG_PATTERN: &str = "%A %B %Y, %I:%M:%S %P %Z";

/// Delimiter for the prefixed sections when no `--delimiter` is given.
const SECTION_DELIMITER: &str = "|";

/// Run the demo command.
pub fn run(cli: &Cli, settings: &Settings, args: &DemoArgs) -> anyhow::Result<ExitCode> {
    let enabled = cli.verbose || settings.emitter.enabled;
    let destination = args
        .output
        .as_deref()
        .or(settings.emitter.output.as_deref())
        .map(Destination::parse)
        .unwrap_or(Destination::Stdout);
    let text = args.string.as_str();
    let mut n = 0;

    tracing::debug!("demo output goes to {}", destination.describe());

    // Long date, tagged only on request.
    let pattern = args
        .date
        .clone()
        .or_else(|| settings.emitter.date.clone())
        .unwrap_or_else(|| LONG_PATTERN.to_string());
    let mut verb = Verb::new(destination.open()?, DatePattern::from_arg(Some(pattern.as_str())))?;
    verb.enabled = enabled;
    verb.print_line = args.line;
    n += 1;
    vprintf!(verb, "Date with no line number. {}, printf {}\n", n, text);
    n += 1;
    vprintln!(verb, "Date with no line number", n, "println", text);
    n += 1;
    vprint!(verb, "Date with no line number.", n, "print", text, "\n");

    // Standard date and line tags, plus the explicit-writer variants.
    let mut verb = Verb::new(destination.open()?, DatePattern::Default)?;
    verb.enabled = enabled;
    verb.print_line = true;
    n += 1;
    vprintf!(verb, "Default date with line number. {}, printf {}\n", n, text);
    n += 1;
    vprintln!(verb, "Default date with line number", n, "println", text);
    n += 1;
    vprint!(verb, "Default date with line number.", n, "print", text, "\n");
    let mut stderr = io::stderr();
    n += 1;
    vfprintf!(verb, &mut stderr, "Default date with line number. {}, fprintf {}\n", n, text);
    n += 1;
    vfprintln!(verb, &mut stderr, "Default date with line number", n, "fprintln", text);
    n += 1;
    vfprint!(verb, &mut stderr, "Default date with line number.", n, "fprint", text, "\n");

    // No date until switched on mid-run.
    let delimiter = args.delimiter.as_deref().unwrap_or(SECTION_DELIMITER);
    let mut verb = Verb::new(destination.open()?, DatePattern::None)?;
    verb.enabled = enabled;
    verb.print_line = true;
    verb.delimiter = delimiter.to_string();
    n += 1;
    vprintf!(verb, "No date, line number. {}, printf {}\n", n, text);
    n += 1;
    vprintln!(verb, "No date, line number", n, "println", text);
    n += 1;
    verb.print_date = true;
    vprint!(verb, "Date, line number.", n, "print", text, "\n");

    // Prefixes toggled line by line.
    verb.print_line = false;
    vprintln!(verb, "date only");
    verb.print_line = true;
    vprintln!(verb, "date and line");
    verb.print_date = false;
    verb.print_line = false;
    vprintln!(verb, "bare");
    verb.flush();

    let captured = capture(enabled);
    println!("This is what was written to the buffer:");
    println!("{}", captured);

    println!("Done. If this is the only line, try verbose demo -v -s \"Some Text\"");
    Ok(ExitCode::Success)
}

/// Emit one line into an in-memory buffer and hand back what landed there.
fn capture(enabled: bool) -> String {
    let mut buffer = Vec::new();
    {
        let mut verb = match Verb::new(&mut buffer, DatePattern::None) {
            Ok(verb) => verb,
            Err(e) => return e.to_string(),
        };
        verb.enabled = enabled;
        vprintln!(verb, "This is a test");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
