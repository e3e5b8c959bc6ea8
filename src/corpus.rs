//! Corpus traversal.
//!
//! [`CorpusWalker`] walks a directory tree recursively, visiting entries in
//! file-name order, and selects files whose path matches a regular
//! expression. A missing or unreadable root is an error; a subdirectory
//! that cannot be listed is logged and skipped.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;
use regex::Regex;

use crate::error::{LexiDeckError, Result};

/// Recursive, ordered file selector rooted at one directory.
#[derive(Debug, Clone)]
pub struct CorpusWalker {
    root: PathBuf,
    pattern: Regex,
}

impl CorpusWalker {
    /// Create a walker, compiling `pattern`.
    pub fn new<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Self> {
        Ok(Self::with_regex(root, compile_pattern(pattern)?))
    }

    /// Create a walker from a compiled pattern.
    pub fn with_regex<P: AsRef<Path>>(root: P, pattern: Regex) -> Self {
        CorpusWalker {
            root: root.as_ref().to_path_buf(),
            pattern,
        }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check whether `path` passes the file filter.
    pub fn matches(&self, path: &Path) -> bool {
        self.pattern.is_match(&path.to_string_lossy())
    }

    /// List matching files in traversal order.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(LexiDeckError::corpus(format!(
                "Corpus root is not a readable directory: {}",
                self.root.display()
            )));
        }

        let entries = sorted_entries(&self.root).map_err(|e| {
            LexiDeckError::corpus(format!(
                "Failed to read corpus root '{}': {}",
                self.root.display(),
                e
            ))
        })?;

        let mut files = Vec::new();
        self.collect(entries, &mut files);
        Ok(files)
    }

    fn collect(&self, entries: Vec<(PathBuf, bool)>, files: &mut Vec<PathBuf>) {
        for (path, is_dir) in entries {
            if is_dir {
                match sorted_entries(&path) {
                    Ok(children) => self.collect(children, files),
                    Err(e) => warn!("Skipping directory {}: {}", path.display(), e),
                }
            } else if self.matches(&path) {
                files.push(path);
            }
        }
    }
}

/// Compile a file filter pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| LexiDeckError::config(format!("Invalid file pattern '{pattern}': {e}")))
}

/// Entries of `dir` as (path, is_dir), sorted by file name.
fn sorted_entries(dir: &Path) -> io::Result<Vec<(PathBuf, bool)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let is_dir = entry.file_type()?.is_dir();
        entries.push((entry.path(), is_dir));
    }
    entries.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(entries)
}

/// Read the lines of a corpus file.
///
/// Invalid UTF-8 is replaced with U+FFFD and a trailing `\r` is dropped.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();

    for raw in reader.split(b'\n') {
        let raw = raw?;
        let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
        lines.push(String::from_utf8_lossy(raw).into_owned());
    }

    Ok(lines)
}
