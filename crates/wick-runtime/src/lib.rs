//! Configuration resolution and reload entry points for the wick logging
//! facility.
//!
//! A reload turns a flat `wick.*` key/value mapping into an immutable
//! [`Configuration`](wick_core::Configuration) and installs it atomically
//! into the process-wide handle consumed by log call sites. Three entry
//! points feed the same resolution algorithm:
//!
//! - [`reload_from`] takes an already-available key/value mapping;
//! - [`reload`] reads the `wick.*` process environment variables;
//! - [`reload_from_file`] reads a line-oriented `key = value` settings file.
//!
//! Reloads never fail: each malformed setting degrades independently to
//! its documented fallback and a complete configuration is always
//! installed. Custom writers participate through [`register_writer`].

pub mod error;
mod resolver;
pub mod settings;
pub mod state;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use parking_lot::RwLock;
use tracing::warn;

use wick_core::SharedWriter;
use wick_writers::{WriterError, WriterRegistry, WriterSpec};

pub use error::LoadError;
pub use settings::{PREFIX, parse_properties};
pub use state::{current, install};

/// Writer registry consulted by every reload. Built-ins are registered on
/// first use; [`register_writer`] extends it at runtime.
static REGISTRY: LazyLock<RwLock<WriterRegistry>> =
    LazyLock::new(|| RwLock::new(WriterRegistry::with_builtins()));

/// Registers a custom writer constructor used by subsequent reloads.
///
/// `name` may be any identifier not taken by a built-in alias, such as a
/// fully qualified type path. Registering an existing name replaces it.
pub fn register_writer<F>(name: impl Into<String>, constructor: F)
where
    F: Fn(&WriterSpec) -> Result<SharedWriter, WriterError> + Send + Sync + 'static,
{
    REGISTRY.write().register(name, constructor);
}

/// Re-derives the configuration from `settings` and installs it.
pub fn reload_from(settings: &HashMap<String, String>) {
    let registry = REGISTRY.read();
    let next = resolver::resolve(settings, &state::current(), &registry);
    state::install(next);
}

/// Re-derives the configuration from the `wick.*` process environment
/// variables and installs it.
pub fn reload() {
    reload_from(&settings::ambient());
}

/// Re-derives the configuration from a settings file and installs it.
///
/// An unreadable file counts as "no settings supplied": the reload still
/// completes with an empty mapping, and the returned error only tells the
/// caller that the source was unavailable.
pub fn reload_from_file(path: impl AsRef<Path>) -> Result<(), LoadError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            reload_from(&settings::parse_properties(&text));
            Ok(())
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "settings file unavailable, reloading with defaults");
            reload_from(&HashMap::new());
            if err.kind() == io::ErrorKind::NotFound {
                Err(LoadError::NotFound(path.to_path_buf()))
            } else {
                Err(LoadError::Read {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }
}
