//! Cross-platform path utilities
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::path::{Component, Path, PathBuf};

/// Convert a path to a string with forward slashes.
///
/// Glob patterns are always written with `/`, so candidate paths are
/// converted before matching.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `.` and `..` components without touching the file system.
///
/// `..` at the root is dropped, matching how the root directory is its own parent.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if at_root {
                    if normalized.as_os_str().is_empty() {
                        normalized.push("..");
                    }
                } else if normalized.ends_with("..") {
                    normalized.push("..");
                } else {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Express `path` relative to `root` when it lives under it.
///
/// Paths outside of `root` are returned unchanged.
pub fn strip_root(path: &Path, root: &Path) -> String {
    let root = normalize_lexically(root);
    let normalized = normalize_lexically(path);
    match normalized.strip_prefix(&root) {
        Ok(relative) if !relative.as_os_str().is_empty() => {
            relative.to_string_lossy().into_owned()
        }
        _ => path.to_string_lossy().into_owned(),
    }
}
