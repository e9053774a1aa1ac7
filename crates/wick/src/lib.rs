//! # wick
//!
//! A lightweight, reload-driven logging configuration facility.
//!
//! ## Overview
//!
//! wick turns a flat set of `wick.*` key/value settings into a live
//! logging configuration: a per-scope severity threshold hierarchy, a
//! message format template, a locale for argument rendering, a
//! stack-trace frame limit, and an active output writer. The whole
//! configuration is re-derived and swapped atomically on every reload, so
//! concurrent readers always observe a complete snapshot.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌─────────────────────────┐
//! │ settings map │────▶│   resolver    │────▶│ Configuration snapshot  │
//! │ (map/env/file)│    │ (wick-runtime)│     │ (wick-core, immutable)  │
//! └──────────────┘     └──────┬────────┘     └───────────┬─────────────┘
//!                             │ writer name + params     │ atomic swap
//!                      ┌──────▼────────┐      ┌──────────▼─────────────┐
//!                      │ WriterRegistry│      │ process-wide handle     │
//!                      │ (wick-writers)│      │ (read by call sites)    │
//!                      └───────────────┘      └────────────────────────┘
//! ```
//!
//! - **wick-core**: severity levels, scope threshold table, locale,
//!   configuration snapshots, the `LogWriter` trait
//! - **wick-writers**: console / file / rolling-file writers and the
//!   registry of named writer constructors
//! - **wick-runtime**: the settings grammar, the resolution algorithm,
//!   and the process-wide active configuration
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use wick::prelude::*;
//!
//! // From an explicit mapping…
//! let mut settings = std::collections::HashMap::new();
//! settings.insert("wick.level".into(), "debug".into());
//! settings.insert("wick.level:net.http".into(), "warning".into());
//! settings.insert("wick.writer".into(), "file".into());
//! settings.insert("wick.writer.filename".into(), "app.log".into());
//! wick::runtime::reload_from(&settings);
//!
//! // …or from a settings file.
//! wick::runtime::reload_from_file("wick.settings")?;
//!
//! let config = wick::runtime::current();
//! assert!(config.enabled("net.http", Level::Error));
//! ```

pub use wick_core as core;
pub use wick_runtime as runtime;
pub use wick_writers as writers;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use wick::prelude::*;
/// ```
pub mod prelude {
    // Reload entry points and the active configuration handle
    pub use wick_runtime::{
        current, install, register_writer, reload, reload_from, reload_from_file,
    };

    // Core configuration types
    pub use wick_core::{Configuration, Level, Locale, ScopeLevels};

    // Writer trait and registry types for custom implementations
    pub use wick_core::{LogWriter, SharedWriter};
    pub use wick_writers::{WriterError, WriterRegistry, WriterSpec};
}
