//! In-place changes: `rename` and `chmod`

use std::path::{Path, PathBuf};

use super::{Target, drive_members, drive_pairs};
use crate::FrameseqError;
use crate::cli::RangeArgs;
use crate::ops::FileOps;

type Result<T> = std::result::Result<T, FrameseqError>;

/// Rename every member of the target to follow `new_name`.
///
/// # Errors
/// Returns an error if the target does not resolve, `new_name` is not a plain
/// filename, or a member fails to rename.
pub fn rename(template: &Path, new_name: &str, range: &RangeArgs, quiet: bool) -> Result<()> {
    let target = Target::resolve(template, range)?;
    let result = match &target {
        Target::File(file) => rename_handle(file, new_name, quiet)?.to_string(),
        Target::Sequence(seq) => rename_handle(seq, new_name, quiet)?.to_string(),
    };
    println!("{result}");
    Ok(())
}

fn rename_handle<H: FileOps>(handle: &H, new_name: &str, quiet: bool) -> Result<H> {
    let iter = handle.rename_iter(new_name)?;
    drive_pairs(iter, "Rename", describe_rename, quiet)
}

fn describe_rename((old, new): &(PathBuf, PathBuf)) -> String {
    let name = |p: &Path| {
        p.file_name()
            .map_or_else(|| p.display().to_string(), |n| n.to_string_lossy().into_owned())
    };
    format!("{} -> {}", name(old), name(new))
}

/// Apply `mode` to every member of the target.
///
/// # Errors
/// Returns an error if the target does not resolve or a member cannot be changed.
pub fn chmod(template: &Path, mode: u32, range: &RangeArgs, quiet: bool) -> Result<()> {
    let target = Target::resolve(template, range)?;
    let iter = match &target {
        Target::File(file) => file.chmod_iter(mode),
        Target::Sequence(seq) => seq.chmod_iter(mode),
    };
    let changed = drive_members(iter, "Chmod", &format!("{mode:o}"), quiet)?;
    if quiet {
        println!("{changed}");
    }
    Ok(())
}
