use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Strips leading dots so `".py"` and `"py"` name the same extension.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_string()
}

/// One language under measurement: its name, the directory holding its
/// implementations, and the file extensions that count toward its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub dir: PathBuf,
    pub extensions: BTreeSet<String>,
}

impl Language {
    pub fn new<I, S>(name: &str, dir: impl Into<PathBuf>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            dir: dir.into(),
            extensions: extensions
                .into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
        }
    }

    pub fn normalized(mut self) -> Self {
        self.extensions = self
            .extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
        self
    }

    /// Directory holding this language's implementation of `benchmark`.
    pub fn benchmark_dir(&self, root: &Path, benchmark: &str) -> PathBuf {
        root.join(&self.dir).join(benchmark)
    }
}
