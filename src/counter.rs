use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::{HarnessError, Result};
use crate::models::{normalize_extension, FileTokens};
use crate::tokenizers::Tokenizer;

/// True when `path` has an extension listed in `extensions` (compared
/// without leading dots). Extensionless files never match.
pub fn has_accepted_extension(path: &Path, extensions: &BTreeSet<String>) -> bool {
    let extension = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext,
        None => return false,
    };

    extensions
        .iter()
        .any(|accepted| normalize_extension(accepted) == extension)
}

/// True when any component of `relative` is an excluded directory name.
pub fn is_excluded(relative: &Path, excluded_dirs: &BTreeSet<String>) -> bool {
    if excluded_dirs.is_empty() {
        return false;
    }

    relative.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|name| excluded_dirs.contains(name))
    })
}

/// Counts tokens in every file under `root` whose extension is accepted,
/// skipping anything beneath an excluded directory name.
///
/// Files are visited depth first with siblings sorted by name, so the
/// returned order is stable across runs. A missing root, or an empty
/// extension set, produces an empty result rather than an error.
pub fn count_tokens(
    root: &Path,
    extensions: &BTreeSet<String>,
    excluded_dirs: &BTreeSet<String>,
    tokenizer: &Tokenizer,
) -> Result<FileTokens> {
    let mut report = FileTokens::new();

    if !root.is_dir() {
        debug!(root = %root.display(), "root does not exist, nothing to count");
        return Ok(report);
    }
    if extensions.is_empty() {
        return Ok(report);
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !entry_is_excluded(root, entry, excluded_dirs));

    for result in walker {
        let entry = result.map_err(|source| HarnessError::Walk {
            path: root.to_path_buf(),
            source,
        })?;

        let path = entry.path();

        // Symlinked files count, symlinked directories are not descended
        if !path.is_file() {
            continue;
        }
        if !has_accepted_extension(path, extensions) {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let tokens = tokenizer.count(&content);

        let relative = path.strip_prefix(root).unwrap_or(path);
        trace!(file = %relative.display(), tokens, "counted");
        report.add_file(relative.to_path_buf(), tokens);
    }

    debug!(
        root = %root.display(),
        files = report.len(),
        tokens = report.total_tokens,
        "counted directory"
    );
    Ok(report)
}

fn entry_is_excluded(root: &Path, entry: &DirEntry, excluded_dirs: &BTreeSet<String>) -> bool {
    match entry.path().strip_prefix(root) {
        Ok(relative) => is_excluded(relative, excluded_dirs),
        Err(_) => false,
    }
}
