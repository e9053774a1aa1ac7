//! The `wick.*` settings-key grammar and properties-text parsing.
//!
//! All recognized keys share the reserved [`PREFIX`]:
//!
//! | Key | Meaning |
//! |---|---|
//! | `wick.level` | global severity level |
//! | `wick.level:<scope>` | per-scope severity override |
//! | `wick.format` | message format template |
//! | `wick.locale` | locale as `language[_country[_variant]]` |
//! | `wick.stacktrace` | max stack-trace frames; negative = unbounded |
//! | `wick.writer` | writer name; `null` or absent = no output |
//! | `wick.writer.<param>` | construction parameter for the writer |
//!
//! The mapping itself stays string-keyed only at this ingestion edge;
//! everything behind the resolver works on typed values.

use std::collections::HashMap;
use std::env;

use tracing::debug;

/// Reserved prefix for all recognized settings keys.
pub const PREFIX: &str = "wick";

pub(crate) const KEY_LEVEL: &str = "wick.level";
pub(crate) const KEY_SCOPE_LEVEL: &str = "wick.level:";
pub(crate) const KEY_FORMAT: &str = "wick.format";
pub(crate) const KEY_LOCALE: &str = "wick.locale";
pub(crate) const KEY_STACKTRACE: &str = "wick.stacktrace";
pub(crate) const KEY_WRITER: &str = "wick.writer";
pub(crate) const KEY_WRITER_PARAM: &str = "wick.writer.";

/// Parses a line-oriented `key = value` settings text into a flat map.
///
/// Blank lines and lines starting with `#` or `!` are skipped; other lines
/// split at the first `=`, with both sides trimmed. `:` is never a
/// separator, since it appears inside scope-override keys such as
/// `wick.level:a.b`.
pub fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            debug!(line, "skipping settings line without a separator");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), value.trim().to_string());
    }
    map
}

/// Collects the `wick.`-prefixed process environment variables.
///
/// Variable names use the dotted key grammar verbatim (`wick.level`,
/// `wick.level:a.b`, …); such names are set programmatically rather than
/// from a shell.
pub(crate) fn ambient() -> HashMap<String, String> {
    env::vars()
        .filter(|(key, _)| key.starts_with("wick."))
        .collect()
}
