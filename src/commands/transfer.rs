//! `mv` and `cp`: relocate every member into a destination directory

use colored::Colorize;
use std::path::{Path, PathBuf};

use super::{Target, drive_pairs};
use crate::FrameseqError;
use crate::cli::RangeArgs;
use crate::config::FrameseqConfig;
use crate::ops::{FileOps, TransferIter, primitives};

type Result<T> = std::result::Result<T, FrameseqError>;

/// Move the target into `dest`.
///
/// # Errors
/// Returns an error if the target does not resolve, `dest` is missing and may
/// not be created, or a member fails to move.
pub fn mv(
    template: &Path,
    dest: &Path,
    range: &RangeArgs,
    config: &FrameseqConfig,
    quiet: bool,
) -> Result<()> {
    execute(template, dest, range, config, quiet, Mode::Move)
}

/// Copy the target into `dest`.
///
/// # Errors
/// Returns an error if the target does not resolve, `dest` is missing and may
/// not be created, or a member fails to copy.
pub fn cp(
    template: &Path,
    dest: &Path,
    range: &RangeArgs,
    config: &FrameseqConfig,
    quiet: bool,
) -> Result<()> {
    execute(template, dest, range, config, quiet, Mode::Copy)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Move,
    Copy,
}

impl Mode {
    const fn title(self) -> &'static str {
        match self {
            Self::Move => "Move",
            Self::Copy => "Copy",
        }
    }

    fn start<H: FileOps>(self, handle: &H, dest: &Path) -> Result<TransferIter<H>> {
        match self {
            Self::Move => handle.move_iter(dest),
            Self::Copy => handle.copy_iter(dest),
        }
    }
}

fn execute(
    template: &Path,
    dest: &Path,
    range: &RangeArgs,
    config: &FrameseqConfig,
    quiet: bool,
    mode: Mode,
) -> Result<()> {
    let target = Target::resolve(template, range)?;
    prepare_dest(dest, config)?;

    let result = match &target {
        Target::File(file) => transfer(file, dest, mode, quiet)?.to_string(),
        Target::Sequence(seq) => transfer(seq, dest, mode, quiet)?.to_string(),
    };
    println!("{result}");
    Ok(())
}

fn transfer<H: FileOps>(handle: &H, dest: &Path, mode: Mode, quiet: bool) -> Result<H> {
    let iter = mode.start(handle, dest)?;
    drive_pairs(iter, mode.title(), |p: &PathBuf| p.display().to_string(), quiet)
}

/// The library never creates directories; that is a CLI setting.
fn prepare_dest(dest: &Path, config: &FrameseqConfig) -> Result<()> {
    if dest.is_dir() {
        return Ok(());
    }
    if config.create_missing_dirs {
        tracing::info!(dir = %dest.display(), "creating destination directory");
        primitives::ensure_dir(dest)?;
        return Ok(());
    }
    Err(FrameseqError::InvalidInput(format!(
        "Destination directory '{}' does not exist (set {} to create it)",
        dest.display(),
        "create_missing_dirs=true".bold()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sequence_fixture, single_file_fixture};

    fn seq_range(start: i64, end: i64) -> RangeArgs {
        RangeArgs {
            start: Some(start),
            end: Some(end),
            single: false,
        }
    }

    #[test]
    fn test_cp_sequence() {
        let (_fixture, seq, dst) = sequence_fixture();
        cp(seq.path(), &dst, &seq_range(100, 200), &FrameseqConfig::default(), true).unwrap();
        assert!(seq.iter().all(|p| p.exists()));
        assert!(dst.join("file.150.txt").exists());
    }

    #[test]
    fn test_mv_partial_range() {
        let (_fixture, seq, dst) = sequence_fixture();
        mv(seq.path(), &dst, &seq_range(150, 159), &FrameseqConfig::default(), true).unwrap();
        assert_eq!(std::fs::read_dir(&dst).unwrap().count(), 10);
        assert!(seq.at_frame(149).unwrap().exists());
        assert!(!seq.at_frame(150).unwrap().exists());
    }

    #[test]
    fn test_mv_single_file() {
        let (_fixture, file, dst) = single_file_fixture();
        let range = RangeArgs {
            single: true,
            ..RangeArgs::default()
        };
        mv(file.path(), &dst, &range, &FrameseqConfig::default(), true).unwrap();
        assert!(!file.exists());
        assert!(dst.join("file.txt").exists());
    }

    #[test]
    fn test_missing_dest_rejected_by_default() {
        let (_fixture, seq, dst) = sequence_fixture();
        let missing = dst.join("nested").join("dir");
        let config = FrameseqConfig::default();
        let err = cp(seq.path(), &missing, &seq_range(100, 101), &config, true).unwrap_err();
        assert!(matches!(err, FrameseqError::InvalidInput(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn test_missing_dest_created_when_configured() {
        let (_fixture, seq, dst) = sequence_fixture();
        let missing = dst.join("nested").join("dir");
        let config = FrameseqConfig {
            create_missing_dirs: true,
            ..FrameseqConfig::default()
        };
        cp(seq.path(), &missing, &seq_range(100, 101), &config, true).unwrap();
        assert!(missing.join("file.100.txt").exists());
        assert!(missing.join("file.101.txt").exists());
    }
}
