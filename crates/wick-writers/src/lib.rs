//! Built-in log writers and the writer registry for the wick logging
//! facility.
//!
//! The [`WriterRegistry`] maps symbolic writer names to constructors. The
//! built-in set covers `console`, `file`, and `rollingfile`; anything else
//! goes through [`WriterRegistry::register`], the extension point used for
//! custom implementations located by name. Construction failures never
//! escape the registry as panics; they surface as [`WriterError`] values
//! that the configuration resolver degrades to "no writer".

pub mod console;
pub mod error;
pub mod file;
pub mod registry;
pub mod rolling;

pub use console::ConsoleWriter;
pub use error::WriterError;
pub use file::FileWriter;
pub use registry::{NULL_WRITER, WriterConstructor, WriterRegistry, WriterSpec};
pub use rolling::RollingFileWriter;
