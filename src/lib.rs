//! Frameseq - bulk filesystem operations on numbered file sequences
//!
//! A run of files sharing one naming template (`shot.0001.exr` …
//! `shot.0100.exr`) is handled as a single [`FileSequence`]. Sequences and
//! plain [`File`]s share one operation contract ([`ops::FileOps`]): move, copy,
//! rename, delete and chmod, each available as a lazy iterator that performs one
//! filesystem mutation per step and as an eager call that drains it.
//!
//! ```no_run
//! use frameseq::{FileSequence, ops::{FileOps, Progress}};
//!
//! let seq = FileSequence::new("/renders/shot.####.exr", 1, 100)?;
//! for step in seq.copy_iter("/backup")? {
//!     match step? {
//!         Progress::Step(path) => println!("copied {}", path.display()),
//!         Progress::Done(copy) => println!("done: {copy}"),
//!     }
//! }
//! # Ok::<(), frameseq::FrameseqError>(())
//! ```

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod file;
pub mod name;
pub mod ops;
pub mod sequence;

#[cfg(test)]
pub mod testing;

pub use file::File;
pub use name::{Bracket, FileName, Frame, NameError, NameTemplate, SeqName};
pub use sequence::FileSequence;

/// Error enum, contains all failure states of the library and the CLI
#[derive(Debug, Error)]
pub enum FrameseqError {
    /// Filename grammar or name template error
    #[error("Name error: {0}")]
    Name(#[from] NameError),
    /// Position or frame number outside the sequence
    #[error("Index {index} out of range [{lower}, {upper}]")]
    IndexOutOfRange { index: i64, lower: i64, upper: i64 },
    /// Sequence constructed with `end < start`
    #[error("Invalid frame range: start {start} is after end {end}")]
    InvalidRange { start: i64, end: i64 },
    /// A slice resolved to no members
    #[error("Slice resolves to an empty frame range")]
    EmptyRange,
    /// A template without concrete start/end numbers where a range is required
    #[error("Cannot determine frame range from '{0}'")]
    UnresolvedRange(String),
    /// A bulk operation already stopped on an earlier error
    #[error("Operation halted after {completed} member(s)")]
    OperationHalted { completed: usize },
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error from a filesystem primitive
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
