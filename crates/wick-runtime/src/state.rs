//! Process-wide active configuration handle.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use wick_core::Configuration;

static ACTIVE: LazyLock<RwLock<Arc<Configuration>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Configuration::default())));

/// Returns the currently installed configuration.
///
/// The handle stays valid even if another thread installs a new snapshot
/// concurrently; the caller simply keeps observing the one it got.
pub fn current() -> Arc<Configuration> {
    ACTIVE.read().clone()
}

/// Installs `config` as the active configuration.
///
/// A single reference swap: readers observe either the fully previous or
/// the fully new snapshot, never a mix of both. When reloads race, the
/// last completed installation wins.
pub fn install(config: Configuration) {
    *ACTIVE.write() = Arc::new(config);
}
