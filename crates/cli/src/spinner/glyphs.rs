// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner glyph catalog.
//!
//! Each entry is one animation cycle; every character is one frame.
//! Entries 0, 9 and 14 are plain ASCII, for terminals without Unicode fonts.

/// Animation cycles, selected by index.
pub const GLYPHS: &[&str] = &[
    r"|/-|\-",
    "←↖↑↗→↘↓↙",
    "▁▃▄▅▆▇█▇▆▅▄▃▁",
    "▖▘▝▗",
    "┤┘┴└├┌┬┐",
    "◢◣◤◥",
    "◰◳◲◱",
    "◴◷◶◵",
    "◐◓◑◒",
    ".oO@*",
    "◡◡⊙⊙◠◠",
    "⣾⣽⣻⢿⡿⣟⣯⣷",
    "⠁⠂⠄⡀⢀⠠⠐⠈",
    "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏",
    "abcdefghijklmnopqrstuvwxyz",
    "▉▊▋▌▍▎▏▎▍▌▋▊▉",
    "←↑→↓",
    "▁▂▃▄▅▆▇█▉▊▋▌▍▎▏▏▎▍▌▋▊▉█▇▆▅▄▃▂▁",
    ".oO°Oo.",
    "⬒⬔⬓⬕",
];

/// The cycle for `kind`, falling back to the first when out of range.
pub fn sequence(kind: usize) -> &'static str {
    GLYPHS.get(kind).copied().unwrap_or(GLYPHS[0])
}

/// Frames of the cycle for `kind`, in display order.
pub fn frames(kind: usize) -> Vec<char> {
    sequence(kind).chars().collect()
}

#[cfg(test)]
#[path = "glyphs_tests.rs"]
mod tests;
