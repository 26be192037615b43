//! Path utility functions for normalization and comparison.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by processing `.` and `..` components lexically.
/// This does not access the filesystem and does not follow symlinks.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            }
            _ => result.push(component),
        }
    }
    result
}

/// Check if a path is under a given directory by comparing normalized path components.
/// `/srv/packages/../etc` is NOT under `/srv/packages`.
pub fn is_path_under(path: &Path, dir: &Path) -> bool {
    let path = normalize_path(path);
    let dir = normalize_path(dir);
    path.starts_with(&dir)
}

/// Join a package identifier onto a root directory.
///
/// Returns `None` when the identifier is empty, absolute, or would escape
/// the root (e.g. `../secrets`), so callers never look outside the root.
pub fn child_dir(root: &Path, name: &str) -> Option<PathBuf> {
    let name = name.trim();
    if name.is_empty() || Path::new(name).is_absolute() {
        return None;
    }
    let joined = normalize_path(&root.join(name));
    if joined == normalize_path(root) || !is_path_under(&joined, root) {
        return None;
    }
    Some(joined)
}
