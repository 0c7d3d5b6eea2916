//! Glob expansion: pattern string to a sorted list of candidate paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::GlobBuilder;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Expand `pattern` to every filesystem entry it matches.
///
/// A malformed pattern is an error. A pattern that matches nothing,
/// including one rooted in a directory that does not exist, yields an empty
/// list. Matched directories are not filtered out; they fail later at the
/// open/read stage like any other unreadable candidate.
///
/// `*` and `?` do not cross path separators; `**` does. The returned list is
/// sorted so repeated runs visit files in a stable order.
pub fn discover_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .with_context(|| format!("invalid glob pattern '{pattern}'"))?
        .compile_matcher();

    let root = walk_root(pattern);
    let synthetic_root = root.as_os_str().is_empty();
    let walk_from = if synthetic_root {
        PathBuf::from(".")
    } else {
        root
    };

    let mut walker = WalkDir::new(&walk_from);
    if !pattern.contains("**") {
        // The pattern fixes how many components can follow the walk root, so
        // deeper entries can never match.
        let pattern_components = Path::new(pattern).components().count();
        let root_components = if synthetic_root {
            0
        } else {
            walk_from.components().count()
        };
        walker = walker.max_depth(pattern_components - root_components);
    }

    let mut matches = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(err = %err, "skipping unreadable entry");
                continue;
            }
        };
        // Entries under a synthetic "." root carry a "./" prefix the
        // pattern does not have.
        let path = if synthetic_root {
            match entry.path().strip_prefix(".") {
                Ok(stripped) => stripped.to_path_buf(),
                Err(_) => entry.into_path(),
            }
        } else {
            entry.into_path()
        };
        if matcher.is_match(&path) {
            matches.push(path);
        }
    }
    matches.sort();
    debug!(pattern, matched = matches.len(), "glob expanded");
    Ok(matches)
}

/// Longest prefix of `pattern` with no glob metacharacters; empty if the
/// very first component has one.
fn walk_root(pattern: &str) -> PathBuf {
    let mut root = PathBuf::new();
    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if text.contains(['*', '?', '[', '{']) {
            break;
        }
        root.push(component);
    }
    root
}
