use std::io;
use std::path::Path;

/// Create a directory and all of its parents
pub fn mkpath(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Copy a single file, creating the destination's parent directory
pub fn cp(src: &Path, dest: &Path) -> io::Result<u64> {
    log::debug!("util::cp - src: {}, dest: {}", src.display(), dest.display());

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(src, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cp_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.bin");
        std::fs::write(&src, b"abc").unwrap();

        let dest = dir.path().join("x/y/b.bin");
        assert_eq!(cp(&src, &dest).unwrap(), 3);
        assert_eq!(std::fs::read(&dest).unwrap(), b"abc");
    }

    #[test]
    fn test_mkpath_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("one/two");
        mkpath(&nested).unwrap();
        mkpath(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
