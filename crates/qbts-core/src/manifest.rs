use std::collections::{HashMap, HashSet};
use std::path::{Component, Path};

use tracing::debug;

use crate::error::WriteError;

/// One generated file: a path relative to the output root and its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A named group of files reported together, e.g. "Configuration Files".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub name: String,
    pub files: Vec<FileEntry>,
}

impl Batch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push(FileEntry::new(path, content));
        self
    }
}

/// Everything the writer materializes: skeleton directories first, then
/// batches of files in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub directories: Vec<String>,
    pub batches: Vec<Batch>,
}

impl Manifest {
    pub fn new(directories: Vec<String>, batches: Vec<Batch>) -> Self {
        Self {
            directories,
            batches,
        }
    }

    pub fn file_count(&self) -> usize {
        self.batches.iter().map(|b| b.files.len()).sum()
    }

    /// Iterates `(batch name, file)` pairs in write order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &FileEntry)> {
        self.batches
            .iter()
            .flat_map(|b| b.files.iter().map(move |f| (b.name.as_str(), f)))
    }

    /// Files as they end up on disk: one entry per path, at its first
    /// position, carrying the content of its last occurrence.
    pub fn effective_files(&self) -> Vec<&FileEntry> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut effective: Vec<&FileEntry> = Vec::new();
        for (_, file) in self.files() {
            match index.get(file.path.as_str()) {
                Some(&slot) => effective[slot] = file,
                None => {
                    index.insert(&file.path, effective.len());
                    effective.push(file);
                }
            }
        }
        effective
    }

    /// Rejects absolute paths and parent traversal before anything touches disk.
    pub fn validate(&self) -> Result<(), WriteError> {
        for dir in &self.directories {
            check_relative(dir)?;
        }

        let mut seen = HashSet::new();
        for (batch, file) in self.files() {
            check_relative(&file.path)?;
            if !seen.insert(file.path.as_str()) {
                debug!("duplicate path '{}' in batch '{}', last write wins", file.path, batch);
            }
        }
        Ok(())
    }
}

fn check_relative(path: &str) -> Result<(), WriteError> {
    let unsafe_path = |reason| WriteError::UnsafePath {
        path: path.to_string(),
        reason,
    };

    if path.trim().is_empty() {
        return Err(unsafe_path("path is empty"));
    }

    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(unsafe_path("path escapes the output root")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(unsafe_path("path must be relative"))
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Manifest {
        Manifest::new(
            vec!["config".to_string(), "logs".to_string()],
            vec![
                Batch::new("Configuration Files")
                    .with_file(".gitignore", "/vendor/\n")
                    .with_file("config/database.php", "<?php\n"),
                Batch::new("Documentation").with_file("README.md", "# QBTS\n"),
            ],
        )
    }

    #[test]
    fn counts_files_across_batches() {
        assert_eq!(fixture().file_count(), 3);
    }

    #[test]
    fn iterates_in_write_order() {
        let manifest = fixture();
        let order = manifest.files().map(|(_, f)| f.path.as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec![".gitignore", "config/database.php", "README.md"]);
    }

    #[test]
    fn rejects_parent_traversal() {
        let manifest = Manifest::new(
            Vec::new(),
            vec![Batch::new("Bad").with_file("../outside.txt", "x")],
        );
        let err = manifest.validate().expect_err("must fail");
        assert!(matches!(err, WriteError::UnsafePath { .. }));
    }

    #[test]
    fn rejects_absolute_directory() {
        let manifest = Manifest::new(vec!["/etc".to_string()], Vec::new());
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn rejects_empty_path() {
        let manifest = Manifest::new(Vec::new(), vec![Batch::new("Bad").with_file(" ", "x")]);
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn duplicates_are_allowed() {
        let manifest = Manifest::new(
            Vec::new(),
            vec![Batch::new("Twice")
                .with_file("a.txt", "one")
                .with_file("a.txt", "two")],
        );
        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.file_count(), 2);
    }

    #[test]
    fn effective_files_keep_first_position_and_last_content() {
        let manifest = Manifest::new(
            Vec::new(),
            vec![
                Batch::new("First").with_file("a.txt", "one").with_file("b.txt", "b"),
                Batch::new("Second").with_file("a.txt", "two"),
            ],
        );
        let effective = manifest
            .effective_files()
            .into_iter()
            .map(|f| (f.path.as_str(), f.content.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(effective, vec![("a.txt", "two"), ("b.txt", "b")]);
    }
}
