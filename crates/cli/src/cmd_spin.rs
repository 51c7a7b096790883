// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spin command: show spinners for a while.

use std::thread;
use std::time::Duration;

use verbose::cli::{Cli, SpinArgs};
use verbose::emitter::Verb;
use verbose::error::{Error, ExitCode};
use verbose::settings::Settings;
use verbose::spinner::{GLYPHS, Spinner, frames};

/// Run the spin command.
pub fn run(cli: &Cli, settings: &Settings, args: &SpinArgs) -> anyhow::Result<ExitCode> {
    let duration = Duration::try_from_secs_f64(args.seconds)
        .map_err(|_| Error::Argument(format!("invalid --seconds value: {}", args.seconds)))?;
    let spin = &settings.spinner;
    let label = args.label.as_deref().unwrap_or(&spin.label);
    let target = args.target.unwrap_or(spin.target);
    let speed = args.speed.unwrap_or(spin.speed);
    let kind = args.kind.unwrap_or(spin.kind);

    let kinds: Vec<usize> = if args.all {
        (0..GLYPHS.len()).collect()
    } else {
        vec![kind]
    };

    for kind in kinds {
        if args.all {
            let glyphs: Vec<String> = frames(kind).iter().map(char::to_string).collect();
            println!("{} - {}", kind, glyphs.join(" "));
        }
        tracing::debug!("spinning set {} on {:?} at {}/s", kind, target, speed);
        let handle = Spinner::for_target(label, target, kind)
            .with_speed(speed)
            .spawn();
        thread::sleep(duration);
        if handle.stop().is_err() {
            anyhow::bail!("spinner thread panicked");
        }
    }

    if cli.verbose {
        let mut verb = Verb::default();
        let stop = verb.stop_signal();
        thread::spawn(move || {
            thread::sleep(duration);
            stop.signal();
        });
        verb.spin(kind);
    }

    Ok(ExitCode::Success)
}
