//! Deterministic filesystem locations for screenshot and diff artifacts
//!
//! Layout produced under the image root: `<root><logical_path>/{base,test,diff}.png`.
//! Logical paths are URL paths and start with `/`, so concatenation happens at
//! the string level rather than through `Path::join` (which would discard the
//! root on an absolute component).

use niffy_core::{ImageKind, Result};
use std::path::{Path, PathBuf};

/// Resolve the artifact path for `kind` under `root` for a logical page path,
/// creating the containing directory if needed.
///
/// Resolution is a pure function of its inputs: calling it again with the
/// same arguments yields the same path, and pre-existing directories are not
/// an error. Later captures overwrite earlier artifacts at the same location.
pub fn image_file_path(kind: ImageKind, logical_path: &str, root: &Path) -> Result<PathBuf> {
    let mut dir = format!("{}{}", root.display(), logical_path);
    if !dir.ends_with('/') {
        dir.push('/');
    }
    let dir = PathBuf::from(dir);
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join(kind.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_deterministic_and_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let first = image_file_path(ImageKind::Base, "/news", root.path()).unwrap();
        let second = image_file_path(ImageKind::Base, "/news", root.path()).unwrap();
        assert_eq!(first, second);
        assert!(first.parent().unwrap().is_dir());
    }

    #[test]
    fn test_trailing_separator_is_normalized() {
        let root = tempfile::tempdir().unwrap();
        let without = image_file_path(ImageKind::Diff, "/a/b", root.path()).unwrap();
        let with = image_file_path(ImageKind::Diff, "/a/b/", root.path()).unwrap();
        assert_eq!(without, with);
        assert!(without.ends_with("a/b/diff.png"));
    }

    #[test]
    fn test_kinds_share_a_directory() {
        let root = tempfile::tempdir().unwrap();
        let base = image_file_path(ImageKind::Base, "/page", root.path()).unwrap();
        let test = image_file_path(ImageKind::Test, "/page", root.path()).unwrap();
        let diff = image_file_path(ImageKind::Diff, "/page", root.path()).unwrap();
        assert_eq!(base.parent(), test.parent());
        assert_eq!(test.parent(), diff.parent());
        assert_eq!(base.file_name().unwrap(), "base.png");
        assert_eq!(diff.file_name().unwrap(), "diff.png");
    }

    #[test]
    fn test_intermediate_directories_are_created() {
        let root = tempfile::tempdir().unwrap();
        let path = image_file_path(ImageKind::Test, "/deep/nested/route", root.path()).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }
}
