//! Writer construction from symbolic names.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use wick_core::{SharedWriter, parse};

use crate::console::ConsoleWriter;
use crate::error::WriterError;
use crate::file::FileWriter;
use crate::rolling::RollingFileWriter;

/// Writer name reserved for discarding all output.
pub const NULL_WRITER: &str = "null";

/// Transient description of a writer to build: a symbolic name plus the
/// raw construction parameters collected from the settings mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriterSpec {
    /// Built-in alias or registered implementation name.
    pub name: String,
    /// Raw parameter values keyed by parameter name.
    pub params: HashMap<String, String>,
}

impl WriterSpec {
    /// Creates a spec with no parameters.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a construction parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Looks up a parameter value.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Looks up a parameter the writer cannot be built without.
    pub fn require(&self, name: &str) -> Result<&str, WriterError> {
        self.param(name).ok_or_else(|| WriterError::MissingParameter {
            writer: self.name.clone(),
            name: name.to_string(),
        })
    }
}

/// Constructor callback registered for a writer name.
pub type WriterConstructor =
    Box<dyn Fn(&WriterSpec) -> Result<SharedWriter, WriterError> + Send + Sync>;

/// Registry mapping writer names to constructors.
///
/// Names match case-insensitively. The built-in set covers `console`,
/// `file`, and `rollingfile`; [`register`](Self::register) is the open
/// extension point for user-supplied implementations keyed by arbitrary
/// names, fully qualified type paths included. Lookup plus an explicit
/// registration step replaces any form of runtime type discovery.
pub struct WriterRegistry {
    constructors: HashMap<String, WriterConstructor>,
}

impl WriterRegistry {
    /// Creates a registry with no names registered, not even the built-ins.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in writers registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();

        registry.register("console", |_spec| -> Result<SharedWriter, WriterError> {
            Ok(Arc::new(ConsoleWriter::new()))
        });

        registry.register("file", |spec| -> Result<SharedWriter, WriterError> {
            let filename = spec.require("filename")?;
            Ok(Arc::new(FileWriter::create(filename)?))
        });

        registry.register("rollingfile", |spec| -> Result<SharedWriter, WriterError> {
            let filename = spec.require("filename")?;
            // maxBackups must parse when present; maxFiles falls back to
            // its default instead of failing the construction.
            let max_backups = match spec.param("maxBackups") {
                None => 0,
                Some(raw) => raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| WriterError::InvalidParameter {
                        name: "maxBackups".to_string(),
                        value: raw.to_string(),
                    })?
                    .max(0) as usize,
            };
            let max_files = spec
                .param("maxFiles")
                .map_or(0, |raw| parse::int(raw, 0).max(0) as usize);
            Ok(Arc::new(RollingFileWriter::create(
                filename,
                max_backups,
                max_files,
            )?))
        });

        registry
    }

    /// Registers a constructor under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(&WriterSpec) -> Result<SharedWriter, WriterError> + Send + Sync + 'static,
    {
        let key = name.into().to_ascii_lowercase();
        if self
            .constructors
            .insert(key.clone(), Box::new(constructor))
            .is_some()
        {
            warn!(writer = %key, "duplicate writer registration, last one wins");
        }
    }

    /// Returns `true` if `name` resolves to a registered constructor.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors
            .contains_key(&name.trim().to_ascii_lowercase())
    }

    /// Builds the writer described by `spec`.
    ///
    /// `Ok(None)` means output is deliberately discarded (the `"null"`
    /// writer). Every failure resolves to an error value rather than a
    /// panic, so callers can degrade to an absent writer.
    pub fn build(&self, spec: &WriterSpec) -> Result<Option<SharedWriter>, WriterError> {
        let key = spec.name.trim().to_ascii_lowercase();
        if key == NULL_WRITER {
            return Ok(None);
        }
        match self.constructors.get(&key) {
            Some(constructor) => constructor(spec).map(Some),
            None => Err(WriterError::Unknown(spec.name.clone())),
        }
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
