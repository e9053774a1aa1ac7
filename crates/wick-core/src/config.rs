//! Immutable logging configuration snapshots.

use std::fmt;

use crate::level::Level;
use crate::locale::Locale;
use crate::scope::ScopeLevels;
use crate::writer::SharedWriter;

/// Stack-trace frame limit used until a reload says otherwise.
pub const DEFAULT_STACK_LIMIT: usize = 40;

/// Complete logging configuration.
///
/// A snapshot is built once per reload and replaced wholesale on the next
/// one; none of its fields change after construction, so a shared handle
/// can be read without further locking. Clones share the writer.
#[derive(Clone)]
pub struct Configuration {
    scope_levels: ScopeLevels,
    format: Option<String>,
    locale: Locale,
    stack_limit: usize,
    writer: Option<SharedWriter>,
}

impl Configuration {
    /// Starts building a snapshot from the startup defaults.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// The global severity threshold.
    pub fn level(&self) -> Level {
        self.scope_levels.default_level()
    }

    /// The effective threshold for a dotted scope path.
    pub fn level_for(&self, scope: &str) -> Level {
        self.scope_levels.resolve(scope)
    }

    /// The full scope threshold table.
    pub fn scope_levels(&self) -> &ScopeLevels {
        &self.scope_levels
    }

    /// The message format template, if one was configured.
    ///
    /// `None` means the rendering layer applies its built-in default.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// The locale used for argument rendering.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Maximum number of stack-trace frames recorded per entry.
    ///
    /// `usize::MAX` means unbounded.
    pub fn stack_limit(&self) -> usize {
        self.stack_limit
    }

    /// The active writer, or `None` when output is discarded.
    pub fn writer(&self) -> Option<&SharedWriter> {
        self.writer.as_ref()
    }

    /// Returns `true` if an entry at `level` inside `scope` passes the
    /// configured thresholds.
    pub fn enabled(&self, scope: &str, level: Level) -> bool {
        level != Level::Off && level >= self.scope_levels.resolve(scope)
    }
}

impl Default for Configuration {
    /// The startup configuration: `Info` threshold, no overrides, built-in
    /// format, system locale, [`DEFAULT_STACK_LIMIT`] frames, no writer.
    fn default() -> Self {
        ConfigurationBuilder::new().build()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("scope_levels", &self.scope_levels)
            .field("format", &self.format)
            .field("locale", &self.locale)
            .field("stack_limit", &self.stack_limit)
            .field("writer", &self.writer.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Builder for [`Configuration`] snapshots.
pub struct ConfigurationBuilder {
    level: Level,
    overrides: Vec<(String, Level)>,
    scope_levels: Option<ScopeLevels>,
    format: Option<String>,
    locale: Option<Locale>,
    stack_limit: usize,
    writer: Option<SharedWriter>,
}

impl ConfigurationBuilder {
    fn new() -> Self {
        Self {
            level: Level::Info,
            overrides: Vec::new(),
            scope_levels: None,
            format: None,
            locale: None,
            stack_limit: DEFAULT_STACK_LIMIT,
            writer: None,
        }
    }

    /// Sets the global severity threshold.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Registers a per-scope threshold override.
    pub fn scope_level(mut self, scope: impl Into<String>, level: Level) -> Self {
        self.overrides.push((scope.into(), level));
        self
    }

    /// Replaces the whole scope table, including its default level.
    ///
    /// Takes precedence over [`level`](Self::level) and
    /// [`scope_level`](Self::scope_level).
    pub fn scope_levels(mut self, levels: ScopeLevels) -> Self {
        self.scope_levels = Some(levels);
        self
    }

    /// Sets the message format template.
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    /// Sets the locale used for argument rendering.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the maximum stack-trace frame count (`usize::MAX` = unbounded).
    pub fn stack_limit(mut self, limit: usize) -> Self {
        self.stack_limit = limit;
        self
    }

    /// Installs a writer into the snapshot.
    pub fn writer(mut self, writer: SharedWriter) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Finalizes the snapshot.
    ///
    /// The locale defaults to [`Locale::system`] when none was set; the
    /// lookup is deferred to here so builders that do set one never touch
    /// the environment.
    pub fn build(self) -> Configuration {
        let scope_levels = self.scope_levels.unwrap_or_else(|| {
            let mut table = ScopeLevels::new(self.level);
            for (scope, level) in self.overrides {
                table.set(scope, level);
            }
            table
        });
        Configuration {
            scope_levels,
            format: self.format,
            locale: self.locale.unwrap_or_else(Locale::system),
            stack_limit: self.stack_limit,
            writer: self.writer,
        }
    }
}
