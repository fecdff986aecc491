//! Script discovery by glob pattern
//!
//! A target files input may hold several patterns, one per line. Lines
//! starting with `#` are comments and lines starting with `!` remove earlier
//! matches. Each pattern is split into a literal directory to walk and a glob
//! that is matched against paths relative to that directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::FileMatcher;
use crate::error::{Result, input};
use crate::path_utils;

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// File matcher that walks the file system
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobMatcher;

/// A pattern split at its first component containing glob syntax
#[derive(Debug, PartialEq, Eq)]
struct SplitPattern {
    root: PathBuf,
    glob: Option<String>,
}

fn split_pattern(base: &Path, pattern: &str) -> SplitPattern {
    let rooted = if Path::new(pattern).is_absolute() {
        PathBuf::from(pattern)
    } else {
        base.join(pattern)
    };
    let rooted = path_utils::to_forward_slashes(&rooted);

    let components: Vec<&str> = rooted.split('/').collect();
    match components
        .iter()
        .position(|c| c.contains(GLOB_META.as_slice()))
    {
        Some(index) => {
            let literal = components[..index].join("/");
            let literal = if literal.is_empty() { "/".to_string() } else { literal };
            SplitPattern {
                root: path_utils::normalize_lexically(Path::new(&literal)),
                glob: Some(components[index..].join("/")),
            }
        }
        None => SplitPattern {
            root: path_utils::normalize_lexically(Path::new(&rooted)),
            glob: None,
        },
    }
}

fn is_match(glob: &Glob<'_>, root: &Path, path: &Path) -> bool {
    match path.strip_prefix(root) {
        Ok(relative) => {
            let relative = path_utils::to_forward_slashes(relative);
            glob.is_match(CandidatePath::from(relative.as_str()))
        }
        Err(_) => false,
    }
}

fn collect_matches(split: &SplitPattern, pattern: &str) -> Result<Vec<PathBuf>> {
    let Some(glob_text) = &split.glob else {
        return Ok(if split.root.is_file() {
            vec![split.root.clone()]
        } else {
            Vec::new()
        });
    };
    let glob = Glob::new(glob_text).map_err(|e| input::invalid_pattern(pattern, e.to_string()))?;

    if !split.root.is_dir() {
        tracing::debug!("Pattern root {} does not exist", split.root.display());
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    for entry in WalkDir::new(&split.root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_match(&glob, &split.root, entry.path()) {
            matches.push(entry.into_path());
        }
    }
    Ok(matches)
}

fn exclude(found: &mut BTreeSet<PathBuf>, split: &SplitPattern, pattern: &str) -> Result<()> {
    match &split.glob {
        Some(glob_text) => {
            let glob = Glob::new(glob_text)
                .map_err(|e| input::invalid_pattern(pattern, e.to_string()))?;
            found.retain(|path| !is_match(&glob, &split.root, path));
        }
        None => {
            found.remove(&split.root);
        }
    }
    Ok(())
}

impl FileMatcher for GlobMatcher {
    fn find_match(&self, base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let mut found = BTreeSet::new();

        for line in pattern.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(negated) = line.strip_prefix('!') {
                let split = split_pattern(base, negated.trim());
                exclude(&mut found, &split, line)?;
            } else {
                let split = split_pattern(base, line);
                found.extend(collect_matches(&split, line)?);
            }
        }

        tracing::debug!("Pattern '{}' matched {} file(s)", pattern, found.len());
        Ok(found.into_iter().collect())
    }
}
