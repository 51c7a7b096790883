//! Behavioral specs for the glyph catalog.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > The catalog lists all twenty glyph sets under a header
#[test]
fn catalog_lists_every_set() {
    let result = run("catalog").passes();
    let stdout = result.stdout();

    assert!(stdout.starts_with("Spinner glyph sets\n"));
    assert_eq!(stdout.lines().count(), 21);
    assert!(stdout.contains("\n 0 - | / - | \\ -\n"));
    assert!(stdout.contains("\n 9 - . o O @ *\n"));
    assert!(stdout.contains("\n14 - a b c d e f g h i j k l m n o p q r s t u v w x y z\n"));
}

/// > NO_COLOR disables escape sequences
#[test]
fn no_color_disables_escapes() {
    run("catalog").passes().stdout_lacks("\x1b[");
}

/// > COLOR forces escape sequences on a pipe
#[test]
fn color_env_forces_escapes() {
    verbose_cmd()
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}
