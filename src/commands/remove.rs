use colored::Colorize;
use dialoguer::Confirm;
use std::path::Path;

use super::{Target, drive_members};
use crate::FrameseqError;
use crate::cli::RangeArgs;
use crate::config::FrameseqConfig;
use crate::ops::{FileHandle, FileOps};

type Result<T> = std::result::Result<T, FrameseqError>;

/// Delete every member of the target.
///
/// Asks for confirmation unless `yes` is set or `confirm_delete` is off.
///
/// # Errors
/// Returns an error if the target does not resolve, the prompt fails, or a
/// member cannot be deleted.
pub fn execute(
    template: &Path,
    range: &RangeArgs,
    yes: bool,
    config: &FrameseqConfig,
    quiet: bool,
) -> Result<()> {
    let target = Target::resolve(template, range)?;
    let count = match &target {
        Target::File(file) => FileHandle::len(file),
        Target::Sequence(seq) => seq.len(),
    };

    if !yes && config.confirm_delete {
        let prompt = format!("Delete {count} file(s) of {target}?");
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| FrameseqError::InvalidInput(format!("Failed to get confirmation: {e}")))?;
        if !confirmed {
            println!("{}", "Operation cancelled.".yellow());
            return Ok(());
        }
    }

    let iter = match &target {
        Target::File(file) => file.delete_iter(),
        Target::Sequence(seq) => seq.delete_iter(),
    };
    let removed = drive_members(iter, "Delete", "deleted", quiet)?;
    if quiet {
        println!("{removed}");
    }
    Ok(())
}
