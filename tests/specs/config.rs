//! Behavioral specs for the settings file.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > [emitter] enabled = true behaves like -v
#[test]
fn settings_enable_emitter() {
    let temp = Project::empty();
    temp.config("[emitter]\nenabled = true\n");

    run("route")
        .pwd(temp.path())
        .args(&["-C", "verbose.toml"])
        .passes()
        .stdout_has("Setting x to 2\n");
}

/// > VERBOSE_CONFIG names the settings file
#[test]
fn settings_from_environment() {
    let temp = Project::empty();
    temp.config("[emitter]\nenabled = true\nprint_line = true\ndelimiter = \"|\"\n");

    run("route")
        .pwd(temp.path())
        .env("VERBOSE_CONFIG", "verbose.toml")
        .passes()
        .stdout_has(predicates::str::is_match(r"(?m)^cmd_route\.rs:\d+\|Setting y to 2$").unwrap());
}

/// > [emitter] date stamps lines
#[test]
fn settings_date_pattern() {
    let temp = Project::empty();
    temp.config("[emitter]\nenabled = true\ndate = \"%Y\"\n");

    run("route")
        .pwd(temp.path())
        .args(&["-C", "verbose.toml"])
        .passes()
        .stdout_has(predicates::str::is_match(r"(?m)^\d{4} Setting x to 2$").unwrap());
}

/// > [spinner] values are accepted
#[test]
fn spinner_settings_are_accepted() {
    let temp = Project::empty();
    temp.config("[spinner]\nlabel = \"Loading:\"\nkind = 13\nspeed = 20\ntarget = \"stdout\"\n");

    run("spin")
        .pwd(temp.path())
        .args(&["-C", "verbose.toml", "--seconds", "0.05"])
        .passes()
        .stdout_eq("");
}

/// > Unknown keys are configuration errors
#[test]
fn unknown_key_is_rejected() {
    let temp = Project::empty();
    temp.config("[emitter]\nloud = true\n");

    run("route")
        .pwd(temp.path())
        .args(&["-C", "verbose.toml"])
        .exits(2)
        .stderr_has("verbose: config error:");
}

/// > A missing settings file is reported
#[test]
fn missing_settings_file_fails() {
    let temp = Project::empty();

    run("route")
        .pwd(temp.path())
        .args(&["-C", "absent.toml"])
        .exits(3)
        .stderr_has("absent.toml");
}
