//! The per-reload configuration resolution algorithm.

use std::collections::HashMap;

use tracing::{debug, warn};

use wick_core::{Configuration, Level, Locale, ScopeLevels, parse};
use wick_writers::{WriterRegistry, WriterSpec};

use crate::settings;

/// Resolves a flat settings mapping into a complete configuration.
///
/// Every recognized key degrades independently on bad input, so a reload
/// never aborts and always produces a full snapshot:
///
/// - an invalid global level becomes exactly `Error`, never the previous
///   level; an absent key keeps the previous global level;
/// - an invalid scope override is dropped and that scope inherits instead;
///   the override table is rebuilt from scratch, never merged;
/// - the format template is taken verbatim, absent means "built-in";
/// - an absent locale falls back to the process default;
/// - an invalid or absent stack-trace limit keeps the previous limit;
/// - a writer that cannot be built is reported and left absent, so output
///   is discarded rather than half-configured.
pub(crate) fn resolve(
    settings: &HashMap<String, String>,
    previous: &Configuration,
    registry: &WriterRegistry,
) -> Configuration {
    let level = match settings.get(settings::KEY_LEVEL) {
        None => previous.level(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(value = %raw, "invalid global severity level, falling back to ERROR");
            Level::Error
        }),
    };

    let mut scope_levels = ScopeLevels::new(level);
    for (key, raw) in settings {
        let Some(scope) = key.strip_prefix(settings::KEY_SCOPE_LEVEL) else {
            continue;
        };
        match raw.parse::<Level>() {
            Ok(value) => scope_levels.set(scope, value),
            Err(_) => {
                warn!(scope, value = %raw, "invalid scope severity level, override dropped");
            }
        }
    }

    let format = settings.get(settings::KEY_FORMAT).cloned();

    let locale = match settings.get(settings::KEY_LOCALE) {
        Some(raw) => Locale::parse(raw),
        None => Locale::system(),
    };

    let stack_limit = match settings.get(settings::KEY_STACKTRACE) {
        None => previous.stack_limit(),
        Some(raw) => parse::stack_limit(raw).unwrap_or_else(|| {
            warn!(value = %raw, "invalid stack-trace limit, keeping the previous value");
            previous.stack_limit()
        }),
    };

    let writer = match settings.get(settings::KEY_WRITER) {
        None => None,
        Some(name) => {
            let spec = writer_spec(name, settings);
            match registry.build(&spec) {
                Ok(writer) => writer,
                Err(err) => {
                    warn!(writer = %spec.name, error = %err, "failed to build writer, output disabled");
                    None
                }
            }
        }
    };

    let mut builder = Configuration::builder()
        .scope_levels(scope_levels)
        .locale(locale)
        .stack_limit(stack_limit);
    if let Some(template) = format {
        builder = builder.format(template);
    }
    if let Some(writer) = writer {
        builder = builder.writer(writer);
    }

    debug!(level = %level, "configuration resolved");
    builder.build()
}

/// Collects the writer name and its `wick.writer.*` parameters into a
/// construction spec.
fn writer_spec(name: &str, settings: &HashMap<String, String>) -> WriterSpec {
    let mut spec = WriterSpec::named(name.trim());
    for (key, value) in settings {
        if let Some(param) = key.strip_prefix(settings::KEY_WRITER_PARAM) {
            if !param.is_empty() {
                spec = spec.with_param(param, value.clone());
            }
        }
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use wick_core::DEFAULT_STACK_LIMIT;

    fn settings_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn resolve_fresh(pairs: &[(&str, &str)]) -> Configuration {
        let registry = WriterRegistry::with_builtins();
        resolve(&settings_map(pairs), &Configuration::default(), &registry)
    }

    #[test]
    fn global_level_is_parsed_case_insensitively() {
        assert_eq!(resolve_fresh(&[("wick.level", "TRACE")]).level(), Level::Trace);
        assert_eq!(resolve_fresh(&[("wick.level", "error")]).level(), Level::Error);
    }

    #[test]
    fn invalid_global_level_falls_back_to_error() {
        // Exactly ERROR, not the previous configuration's level.
        let registry = WriterRegistry::with_builtins();
        let previous = Configuration::builder().level(Level::Trace).build();
        let config = resolve(
            &settings_map(&[("wick.level", "invalid")]),
            &previous,
            &registry,
        );
        assert_eq!(config.level(), Level::Error);
    }

    #[test]
    fn absent_global_level_keeps_the_previous_one() {
        let registry = WriterRegistry::with_builtins();
        let previous = Configuration::builder().level(Level::Warning).build();
        let config = resolve(&HashMap::new(), &previous, &registry);
        assert_eq!(config.level(), Level::Warning);
    }

    #[test]
    fn scope_overrides_resolve_hierarchically() {
        let config = resolve_fresh(&[
            ("wick.level", "error"),
            ("wick.level:a.b", "WARNING"),
            ("wick.level:a.b.c", "TRACE"),
        ]);

        assert_eq!(config.level_for("a.b"), Level::Warning);
        assert_eq!(config.level_for("a.b.c"), Level::Trace);
        assert_eq!(config.level_for("a.b.c.d"), Level::Trace);
        assert_eq!(config.level_for("x.y"), Level::Error);
    }

    #[test]
    fn invalid_scope_override_is_dropped_not_installed() {
        let config = resolve_fresh(&[
            ("wick.level", "info"),
            ("wick.level:a", "WARNING"),
            ("wick.level:a.b", "invalid"),
        ]);

        // a.b inherits from its nearest valid ancestor.
        assert_eq!(config.level_for("a.b"), Level::Warning);
        assert_eq!(config.level_for("other"), Level::Info);
    }

    #[test]
    fn overrides_do_not_survive_a_reload_that_invalidates_them() {
        let registry = WriterRegistry::with_builtins();

        let first = resolve(
            &settings_map(&[("wick.level", "info"), ("wick.level:a.b", "TRACE")]),
            &Configuration::default(),
            &registry,
        );
        assert_eq!(first.level_for("a.b"), Level::Trace);

        // The table is rebuilt from scratch: the stale TRACE override must
        // not leak into the next configuration.
        let second = resolve(
            &settings_map(&[("wick.level", "info"), ("wick.level:a.b", "invalid")]),
            &first,
            &registry,
        );
        assert_eq!(second.level_for("a.b"), Level::Info);
    }

    #[test]
    fn format_template_is_taken_verbatim() {
        let config = resolve_fresh(&[("wick.format", "entry: {message")]);
        assert_eq!(config.format(), Some("entry: {message"));

        let absent = resolve_fresh(&[]);
        assert_eq!(absent.format(), None);
    }

    #[test]
    fn locale_is_parsed_structurally() {
        let config = resolve_fresh(&[("wick.locale", "de_DE")]);
        assert_eq!(config.locale().language(), "de");
        assert_eq!(config.locale().country(), Some("DE"));

        let full = resolve_fresh(&[("wick.locale", "en_US_WIN")]);
        assert_eq!(full.locale().to_string(), "en_US_WIN");
    }

    #[test]
    fn stack_limit_parses_and_degrades() {
        assert_eq!(resolve_fresh(&[("wick.stacktrace", "0")]).stack_limit(), 0);
        assert_eq!(resolve_fresh(&[("wick.stacktrace", "5")]).stack_limit(), 5);
        assert_eq!(
            resolve_fresh(&[("wick.stacktrace", "-1")]).stack_limit(),
            usize::MAX
        );

        // Invalid keeps the previously configured value, not a default.
        let registry = WriterRegistry::with_builtins();
        let previous = Configuration::builder().stack_limit(7).build();
        let config = resolve(
            &settings_map(&[("wick.stacktrace", "invalid")]),
            &previous,
            &registry,
        );
        assert_eq!(config.stack_limit(), 7);

        // Absent behaves the same way.
        let untouched = resolve(&HashMap::new(), &previous, &registry);
        assert_eq!(untouched.stack_limit(), 7);

        assert_eq!(resolve_fresh(&[]).stack_limit(), DEFAULT_STACK_LIMIT);
    }

    #[test]
    fn console_writer_is_installed() {
        let config = resolve_fresh(&[("wick.writer", "console")]);
        assert!(config.writer().is_some());
    }

    #[test]
    fn null_or_absent_writer_discards_output() {
        assert!(resolve_fresh(&[("wick.writer", "null")]).writer().is_none());
        assert!(resolve_fresh(&[]).writer().is_none());
    }

    #[test]
    fn file_writer_without_filename_degrades_to_none() {
        let config = resolve_fresh(&[("wick.writer", "file")]);
        assert!(config.writer().is_none());
    }

    #[test]
    fn file_writer_with_filename_is_installed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log").to_string_lossy().into_owned();
        let config = resolve_fresh(&[("wick.writer", "file"), ("wick.writer.filename", &path)]);
        assert!(config.writer().is_some());
    }

    #[test]
    fn rolling_writer_limit_asymmetry_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log").to_string_lossy().into_owned();

        // An unparseable maxBackups fails the whole construction...
        let failed = resolve_fresh(&[
            ("wick.writer", "rollingfile"),
            ("wick.writer.filename", &path),
            ("wick.writer.maxBackups", "invalid"),
        ]);
        assert!(failed.writer().is_none());

        // ...while an unparseable maxFiles falls back to its default.
        let built = resolve_fresh(&[
            ("wick.writer", "rollingfile"),
            ("wick.writer.filename", &path),
            ("wick.writer.maxBackups", "0"),
            ("wick.writer.maxFiles", "invalid"),
        ]);
        assert!(built.writer().is_some());
    }

    #[test]
    fn unknown_writer_degrades_to_none() {
        let config = resolve_fresh(&[("wick.writer", "com.example.Missing")]);
        assert!(config.writer().is_none());
    }

    #[test]
    fn malformed_keys_never_abort_the_reload() {
        let config = resolve_fresh(&[
            ("wick.level", "nonsense"),
            ("wick.level:a.b", "nonsense"),
            ("wick.stacktrace", "nonsense"),
            ("wick.writer", "nonsense"),
        ]);

        // Everything degraded, nothing panicked, and a complete snapshot
        // still came out.
        assert_eq!(config.level(), Level::Error);
        assert_eq!(config.level_for("a.b"), Level::Error);
        assert_eq!(config.stack_limit(), DEFAULT_STACK_LIMIT);
        assert!(config.writer().is_none());
    }

    #[test]
    fn identical_mappings_resolve_identically() {
        let pairs = [
            ("wick.level", "debug"),
            ("wick.level:a.b", "TRACE"),
            ("wick.format", "{message}"),
            ("wick.locale", "en_US"),
            ("wick.stacktrace", "12"),
        ];

        let first = resolve_fresh(&pairs);
        let second = resolve_fresh(&pairs);

        assert_eq!(first.level(), second.level());
        assert_eq!(first.level_for("a.b"), second.level_for("a.b"));
        assert_eq!(first.format(), second.format());
        assert_eq!(first.locale(), second.locale());
        assert_eq!(first.stack_limit(), second.stack_limit());
    }
}
