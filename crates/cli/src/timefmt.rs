// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date pattern translation.
//!
//! Callers write the familiar `date(1)` directives (`%Y-%m-%d %H:%M`) and
//! get back a template for chrono's formatter. The directive table below
//! is the contract; the native syntax it maps onto is an implementation
//! detail.
//!
//! `%Z` prints a zone abbreviation such as `EST`. chrono's own `Local`
//! only knows the numeric offset, so stamps are rendered in the IANA zone
//! named by `TZ` or by the system configuration. When neither resolves,
//! `%Z` falls back to the offset (`-05:00`).

use std::fmt::{self, Write as _};
use std::sync::OnceLock;

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Native template used when the "default" date is requested.
pub const DEFAULT_TEMPLATE: &str = "%Y-%m-%d %H:%M:%S";

/// Directive letter to native template fragment.
const DIRECTIVES: &[(char, &str)] = &[
    ('Y', "%Y"),
    ('m', "%m"),
    ('D', "%m/%d/%y"),
    ('B', "%B"),
    ('b', "%b"),
    ('d', "%d"),
    ('j', "%j"),
    ('A', "%A"),
    ('a', "%a"),
    ('H', "%H"),
    ('I', "%I"),
    ('M', "%M"),
    ('S', "%S"),
    ('N', "%.3f"),
    ('F', "%Y-%m-%d"),
    ('T', "%H:%M:%S"),
    ('Z', "%Z"),
    ('P', "%p"),
];

/// Look up the native fragment for a directive letter.
pub fn directive(letter: char) -> Option<&'static str> {
    DIRECTIVES
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, fragment)| *fragment)
}

/// All supported directive letters, in table order.
pub fn directives() -> impl Iterator<Item = (char, &'static str)> {
    DIRECTIVES.iter().copied()
}

/// Translate a `date(1)` style pattern into a native template.
///
/// Unknown directives are dropped along with their `%`. A pattern ending
/// in a lone `%` is rejected. The result is trimmed.
pub fn translate(pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some((_, letter)) => {
                if let Some(fragment) = directive(letter) {
                    out.push_str(fragment);
                }
            }
            None => {
                return Err(Error::DatePattern {
                    pattern: pattern.to_string(),
                    offset,
                    message: "trailing '%' with no directive".to_string(),
                });
            }
        }
    }

    Ok(out.trim().to_string())
}

/// A native date template ready to render timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTemplate(String);

impl DateTemplate {
    /// Translate a `date(1)` pattern.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        translate(pattern).map(Self)
    }

    /// Wrap a template already in native syntax.
    pub fn native(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The standard `YYYY-MM-DD HH:MM:SS` template.
    pub fn standard() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render a timestamp.
    ///
    /// A template chrono cannot format is written back verbatim.
    pub fn render<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut rendered = String::new();
        if write!(rendered, "{}", at.format(&self.0)).is_err() {
            tracing::warn!("unformattable date template {:?}", self.0);
            return self.0.clone();
        }
        rendered
    }

    /// Render the current time in the local zone.
    pub fn render_now(&self) -> String {
        match local_zone() {
            Some(zone) => self.render(&Utc::now().with_timezone(&zone)),
            None => self.render(&Local::now()),
        }
    }
}

/// Parse an IANA zone name such as `America/New_York`.
///
/// A leading `:` is ignored, as POSIX allows in `TZ`.
pub fn zone_named(name: &str) -> Option<Tz> {
    name.trim().trim_start_matches(':').parse().ok()
}

/// The local IANA zone, resolved once per process.
pub fn local_zone() -> Option<Tz> {
    static ZONE: OnceLock<Option<Tz>> = OnceLock::new();
    *ZONE.get_or_init(|| {
        let from_env = std::env::var("TZ").ok().and_then(|name| zone_named(&name));
        let zone = from_env.or_else(|| {
            iana_time_zone::get_timezone()
                .ok()
                .and_then(|name| zone_named(&name))
        });
        if zone.is_none() {
            tracing::debug!("local time zone unknown; %Z renders the offset");
        }
        zone
    })
}

impl fmt::Display for DateTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "timefmt_tests.rs"]
mod tests;
