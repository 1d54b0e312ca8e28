use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub tokens: usize,
}

/// Token counts of every counted file under one root, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileTokens {
    pub files: Vec<FileCount>,
    pub total_tokens: usize,
}

impl FileTokens {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            total_tokens: 0,
        }
    }

    pub fn add_file(&mut self, path: PathBuf, token_count: usize) {
        self.files.push(FileCount {
            path,
            tokens: token_count,
        });
        self.total_tokens += token_count;
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<usize> {
        self.files
            .iter()
            .find(|f| f.path.to_string_lossy() == path)
            .map(|f| f.tokens)
    }
}
