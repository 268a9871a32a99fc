//! Thin wrappers over the filesystem calls the operation engine relies on.
//!
//! Every call maps to exactly one `std::fs` primitive; errors are returned
//! unchanged so callers see the original `io::Error`.

use std::fs;
use std::io;
use std::path::Path;

/// Same-volume atomic rename.
pub fn relocate(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)
}

pub fn duplicate(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst).map(|_| ())
}

pub fn unlink(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// Apply a Unix permission mode.
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

/// Only the owner-write bit maps onto a platform without Unix modes.
#[cfg(not(unix))]
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(mode & 0o200 == 0);
    fs::set_permissions(path, perms)
}

/// Whether `a` and `b` name the same existing directory.
///
/// A directory that cannot be resolved never matches.
pub fn same_dir(a: &Path, b: &Path) -> bool {
    let resolve = |p: &Path| {
        let p = if p.as_os_str().is_empty() { Path::new(".") } else { p };
        fs::canonicalize(p)
    };
    match (resolve(a), resolve(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_relocate_and_duplicate() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        let c = tmp.path().join("c.txt");
        fs::write(&a, "content").unwrap();

        duplicate(&a, &b).unwrap();
        assert!(a.exists());
        assert_eq!(fs::read_to_string(&b).unwrap(), "content");

        relocate(&b, &c).unwrap();
        assert!(!b.exists());
        assert_eq!(fs::read_to_string(&c).unwrap(), "content");
    }

    #[test]
    fn test_unlink_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let err = unlink(&tmp.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_duplicate_into_missing_dir_errors() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        fs::write(&a, "").unwrap();
        assert!(duplicate(&a, &tmp.path().join("nope").join("a.txt")).is_err());
    }

    #[test]
    fn test_ensure_dir_nested() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("x").join("y");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_same_dir() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();

        assert!(same_dir(tmp.path(), &sub.join("..")));
        assert!(same_dir(&sub, &sub));
        assert!(!same_dir(tmp.path(), &sub));
        assert!(!same_dir(&sub, &tmp.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_set_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        fs::write(&a, "").unwrap();
        set_mode(&a, 0o640).unwrap();
        assert_eq!(fs::metadata(&a).unwrap().permissions().mode() & 0o777, 0o640);
    }
}
