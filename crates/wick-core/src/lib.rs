//! Core types for the wick logging facility.
//!
//! This crate holds the leaf building blocks shared by the writer and
//! runtime layers: the severity [`Level`] enumeration, the hierarchical
//! [`ScopeLevels`] threshold table, the [`Locale`] identifier used for
//! argument rendering, the immutable [`Configuration`] snapshot, and the
//! [`LogWriter`] trait implemented by output destinations.
//!
//! Nothing in this crate performs I/O except through a [`LogWriter`]
//! implementation supplied by a higher layer.

pub mod config;
pub mod level;
pub mod locale;
pub mod parse;
pub mod scope;
pub mod writer;

pub use config::{Configuration, ConfigurationBuilder, DEFAULT_STACK_LIMIT};
pub use level::{Level, ParseLevelError};
pub use locale::Locale;
pub use scope::ScopeLevels;
pub use writer::{LogWriter, SharedWriter};
