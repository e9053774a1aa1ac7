//! Per-scope severity thresholds with hierarchical resolution.

use std::collections::HashMap;

use crate::level::Level;

/// Severity thresholds keyed by dotted scope path.
///
/// Scope paths form a prefix tree: `a.b` is an ancestor of `a.b.c`. Lookup
/// returns the threshold of the longest registered prefix of the requested
/// path (the path itself included); paths with no registered ancestor
/// inherit the default level.
///
/// The table is rebuilt from scratch on every configuration reload, never
/// patched incrementally, so overrides from a previous reload cannot
/// leak into the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeLevels {
    default: Level,
    overrides: HashMap<String, Level>,
}

impl ScopeLevels {
    /// Creates an empty table that resolves everything to `default`.
    pub fn new(default: Level) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// The level returned when no registered scope matches.
    pub fn default_level(&self) -> Level {
        self.default
    }

    /// Registers an override for `scope` and all its descendants.
    ///
    /// Scope paths are unique keys; setting the same path twice keeps the
    /// later value.
    pub fn set(&mut self, scope: impl Into<String>, level: Level) {
        self.overrides.insert(scope.into(), level);
    }

    /// Returns `true` if at least one override is registered.
    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }

    /// Resolves the effective threshold for `scope`.
    ///
    /// Candidates are tried from most specific to least specific: the exact
    /// path, then each ancestor produced by truncating at a `.` boundary,
    /// then the empty prefix. The first registered candidate wins, so an
    /// exact match always beats an ancestor and a longer ancestor always
    /// beats a shorter one.
    pub fn resolve(&self, scope: &str) -> Level {
        if let Some(&level) = self.overrides.get(scope) {
            return level;
        }
        let mut prefix = scope;
        while let Some(cut) = prefix.rfind('.') {
            prefix = &prefix[..cut];
            if let Some(&level) = self.overrides.get(prefix) {
                return level;
            }
        }
        if !scope.is_empty() {
            if let Some(&level) = self.overrides.get("") {
                return level;
            }
        }
        self.default
    }
}
