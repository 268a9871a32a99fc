//! Testing utilities for frameseq
//!
//! Fixtures lay out a `src/` and an empty `dst/` directory inside a
//! [`TempDir`]. Keep the returned `TempDir` alive for the whole test; the tree
//! is removed when it is dropped.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{File, FileSequence};

/// First and last frame written by [`sequence_fixture`]
pub const FIXTURE_FRAMES: (i64, i64) = (100, 200);

/// Create `src/` and `dst/` under a fresh temporary directory.
///
/// # Panics
/// Panics if the directories cannot be created.
#[must_use]
pub fn fixture_dirs() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let src = tmp.path().join("src");
    let dst = tmp.path().join("dst");
    fs::create_dir_all(&src).expect("Failed to create src dir");
    fs::create_dir_all(&dst).expect("Failed to create dst dir");
    (tmp, src, dst)
}

/// Write `content` to `path`.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn create_test_file(path: impl AsRef<Path>, content: &str) {
    fs::write(path.as_ref(), content).expect("Failed to write test file");
}

/// An empty `src/file.txt` plus the destination directory.
#[must_use]
pub fn single_file_fixture() -> (TempDir, File, PathBuf) {
    let (tmp, src, dst) = fixture_dirs();
    let path = src.join("file.txt");
    create_test_file(&path, "");
    (tmp, File::new(path), dst)
}

/// `src/file.100.txt` to `src/file.200.txt`, each holding its own frame
/// number, addressed through the template `src/file.###.txt`.
///
/// # Panics
/// Panics if the files cannot be written.
#[must_use]
pub fn sequence_fixture() -> (TempDir, FileSequence, PathBuf) {
    let (tmp, src, dst) = fixture_dirs();
    let (start, end) = FIXTURE_FRAMES;
    for frame in start..=end {
        create_test_file(src.join(format!("file.{frame}.txt")), &frame.to_string());
    }
    let seq = FileSequence::new(src.join("file.###.txt"), start, end)
        .expect("Failed to build fixture sequence");
    (tmp, seq, dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_fixture_layout() {
        let (tmp, seq, dst) = sequence_fixture();
        assert_eq!(fs::read_dir(tmp.path().join("src")).unwrap().count(), 101);
        assert_eq!(fs::read_dir(&dst).unwrap().count(), 0);
        assert_eq!(fs::read_to_string(seq.at(0).unwrap()).unwrap(), "100");
    }

    #[test]
    fn test_fixture_cleanup() {
        let (tmp, file, _dst) = single_file_fixture();
        assert!(file.exists());
        let root = tmp.path().to_path_buf();
        drop(tmp);
        assert!(!root.exists());
    }
}
