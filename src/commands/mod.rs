//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and drives the matching library operation, printing progress as members
//! complete.

pub mod config;
pub mod inspect;
pub mod modify;
pub mod remove;
pub mod transfer;

use colored::Colorize;
use std::fmt;
use std::path::Path;

use crate::cli::RangeArgs;
use crate::ops::iter::FromPair;
use crate::ops::{MemberIter, PairwiseIter, Progress};
use crate::{File, FileSequence, FrameseqError};

pub use config::execute as config;
pub use inspect::{ls, parse};
pub use modify::{chmod, rename};
pub use remove::execute as rm;
pub use transfer::{cp, mv};

type Result<T> = std::result::Result<T, FrameseqError>;

/// What a command operates on, resolved from a template path and range flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(File),
    Sequence(FileSequence),
}

impl Target {
    /// Resolve `template` with the range flags.
    ///
    /// Missing `--start`/`--end` values are taken from the numbers embedded in
    /// the template.
    ///
    /// # Errors
    /// Returns `UnresolvedRange` when neither the flags nor the template give a
    /// concrete range, or a name error for a template that is not
    /// sequence-shaped.
    pub fn resolve(template: &Path, range: &RangeArgs) -> Result<Self> {
        if range.single {
            return Ok(Self::File(File::new(template)));
        }
        let seq = match (range.start, range.end) {
            (Some(start), Some(end)) => FileSequence::new(template, start, end)?,
            (None, None) => FileSequence::from_path(template)?,
            (start, end) => {
                let embedded = FileSequence::from_path(template)?;
                FileSequence::new(
                    template,
                    start.unwrap_or_else(|| embedded.start()),
                    end.unwrap_or_else(|| embedded.end()),
                )?
            }
        };
        Ok(Self::Sequence(seq))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(file) => fmt::Display::fmt(file, f),
            Self::Sequence(seq) => fmt::Display::fmt(seq, f),
        }
    }
}

/// Summary of a bulk operation
#[derive(Debug, Default)]
pub struct OpSummary {
    pub total: usize,
    pub success: usize,
    pub error: Option<String>,
}

impl OpSummary {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub const fn add_success(&mut self) {
        self.success += 1;
    }

    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Members never attempted because the operation halted
    #[must_use]
    pub fn not_attempted(&self) -> usize {
        self.total.saturating_sub(self.success + usize::from(self.error.is_some()))
    }

    pub fn print(&self, operation: &str) {
        println!("\n{}", format!("=== {operation} Summary ===").bold());
        println!("  {} {}/{}", "✓ Success:".green(), self.success, self.total);
        if let Some(msg) = &self.error {
            println!("  {} {msg}", "✗ Halted:".red());
            println!("  {} {}", "⊘ Not attempted:".yellow(), self.not_attempted());
        }
    }
}

/// Drive a move/copy/rename iterator to completion, printing each step.
///
/// # Errors
/// Returns the error that halted the operation.
pub(crate) fn drive_pairs<H, T>(
    iter: PairwiseIter<H, T>,
    operation: &str,
    describe: impl Fn(&T) -> String,
    quiet: bool,
) -> Result<H>
where
    H: Clone,
    T: FromPair,
{
    let total = iter.size_hint().1.unwrap_or(0).saturating_sub(1);
    let mut summary = OpSummary::new(total);

    for item in iter {
        match item {
            Ok(Progress::Step(step)) => {
                summary.add_success();
                if !quiet {
                    println!("{} {}", "✓".green(), describe(&step));
                }
            }
            Ok(Progress::Done(handle)) => {
                if !quiet {
                    summary.print(operation);
                }
                return Ok(handle);
            }
            Err(e) => {
                summary.set_error(e.to_string());
                if !quiet {
                    summary.print(operation);
                }
                return Err(e);
            }
        }
    }
    Err(FrameseqError::OperationHalted { completed: summary.success })
}

/// Drive a delete/chmod iterator to completion, printing each member.
///
/// # Errors
/// Returns the error that halted the operation.
pub(crate) fn drive_members(
    iter: MemberIter,
    operation: &str,
    verb: &str,
    quiet: bool,
) -> Result<usize> {
    let total = iter.size_hint().1.unwrap_or(0);
    let mut summary = OpSummary::new(total);

    for item in iter {
        match item {
            Ok(path) => {
                summary.add_success();
                if !quiet {
                    println!("{} {verb}: {}", "✓".green(), path.display());
                }
            }
            Err(e) => {
                summary.set_error(e.to_string());
                if !quiet {
                    summary.print(operation);
                }
                return Err(e);
            }
        }
    }
    if !quiet {
        summary.print(operation);
    }
    Ok(summary.success)
}
