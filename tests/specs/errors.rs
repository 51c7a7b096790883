//! Behavioral specs for error reports.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > err_out reports whatever the verbose flag says; err stays quiet
#[test]
fn error_report_ignores_disabled_flag() {
    let result = run("errors").passes();
    let stdout = result.stdout();

    assert!(stdout.starts_with(
        "Should print and not exit:\n\
         error: This should print and not exit -- This is an error\n\tfile: "
    ));
    assert!(stdout.contains("cmd_errors.rs line: "));
    assert_eq!(stdout.matches("\tfile: ").count(), 2);
    assert!(!stdout.contains("\tfile: ??? line: 0"));
    assert!(stdout.contains("main.rs line: "));
    assert!(stdout.contains("Should not print and not exit:\nerror present: true\n"));
    assert!(!stdout.contains("error: Should not print"));
    assert!(stdout.ends_with("Nothing to report:\nerror present: false\n"));
}

/// > --exit reports and terminates with status 1
#[test]
fn error_and_exit_terminates() {
    run("errors")
        .args(&["--exit"])
        .exits(1)
        .stdout_has("Error and exit:\nerror: error and exit! -- Error and exit program\n")
        .stdout_lacks("If you see this");
}

/// > Settings prefixes apply to reports
#[test]
fn reports_carry_configured_prefixes() {
    let temp = Project::empty();
    temp.config("[emitter]\nprint_line = true\ndelimiter = \"|\"\n");

    run("errors")
        .pwd(temp.path())
        .args(&["-C", "verbose.toml"])
        .passes()
        .stdout_has(predicates::str::is_match(r"(?m)^cmd_errors\.rs:\d+\|error: This should print").unwrap());
}
