use std::fmt::{Display, Formatter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::instrument;

use crate::manifest::Manifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftKind {
    Missing,
    Modified,
    NotAFile,
    NotADirectory,
}

impl DriftKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Modified => "modified",
            Self::NotAFile => "not a file",
            Self::NotADirectory => "not a directory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drift {
    pub path: String,
    pub kind: DriftKind,
}

impl Display for Drift {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.path, self.kind.as_str())
    }
}

/// Compares the tree under `base` with what `manifest` would write.
///
/// Read-only. Extra files under `base` are not reported. When a path appears
/// more than once only its final content is expected.
#[instrument(skip(manifest), fields(base = %base.display()))]
pub fn verify_tree(base: &Path, manifest: &Manifest) -> Result<Vec<Drift>> {
    let mut drift = Vec::new();

    for dir in &manifest.directories {
        let path = base.join(dir);
        if !path.exists() {
            drift.push(Drift {
                path: dir.clone(),
                kind: DriftKind::Missing,
            });
        } else if !path.is_dir() {
            drift.push(Drift {
                path: dir.clone(),
                kind: DriftKind::NotADirectory,
            });
        }
    }

    for file in manifest.effective_files() {
        let path = base.join(&file.path);
        let kind = if !path.exists() {
            Some(DriftKind::Missing)
        } else if !path.is_file() {
            Some(DriftKind::NotAFile)
        } else {
            let actual = std::fs::read(&path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            (actual != file.content.as_bytes()).then_some(DriftKind::Modified)
        };

        if let Some(kind) = kind {
            drift.push(Drift {
                path: file.path.clone(),
                kind,
            });
        }
    }

    Ok(drift)
}
