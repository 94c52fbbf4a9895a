//! Generation results.
//!
//! # Examples
//!
//! ```
//! use uigen_codegen::{FileKind, GeneratedFile, GenerationReport};
//!
//! let mut report = GenerationReport::new("out");
//! report.add_file(GeneratedFile::new("index.html", FileKind::Rendered, 312));
//! report.add_file(GeneratedFile::new("vite.config.ts", FileKind::Copied, 96));
//!
//! assert_eq!(report.file_count(), 2);
//! assert_eq!(report.count(FileKind::Copied), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// How a generated file was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Copied verbatim from the skeleton
    Copied,
    /// Rendered from a template
    Rendered,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied => f.write_str("copied"),
            Self::Rendered => f.write_str("rendered"),
        }
    }
}

/// A single file written during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the destination root
    pub path: PathBuf,
    /// How the file was produced
    pub kind: FileKind,
    /// Size in bytes
    pub bytes: usize,
}

impl GeneratedFile {
    /// Creates a file record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: FileKind, bytes: usize) -> Self {
        Self {
            path: path.into(),
            kind,
            bytes,
        }
    }

    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Destination root
    pub root: PathBuf,
    /// Whether the destination was cleared first
    pub cleared: bool,
    /// Files in the order they were written
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    /// Creates an empty report for `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cleared: false,
            files: Vec::new(),
        }
    }

    /// Records a written file.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of written files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns the number of files of one kind.
    #[must_use]
    pub fn count(&self, kind: FileKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }

    /// Returns the total number of bytes written.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }

    /// Looks up a file by relative path.
    #[must_use]
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }

    /// Returns an iterator over the written files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }
}
