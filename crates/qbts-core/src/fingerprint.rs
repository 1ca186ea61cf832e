use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::manifest::Manifest;

/// Computes a deterministic SHA256 fingerprint over the tree a manifest
/// produces: its directories and [`Manifest::effective_files`].
///
/// Two manifests with the same fingerprint produce the same output tree.
pub fn manifest_fingerprint(manifest: &Manifest) -> String {
    let mut hasher = Sha256::new();

    for dir in &manifest.directories {
        hasher.update(b"d\0");
        hasher.update(dir.as_bytes());
        hasher.update(b"\0");
    }

    for file in manifest.effective_files() {
        hasher.update(b"f\0");
        hasher.update(file.path.as_bytes());
        hasher.update(b"\0");
        hasher.update((file.content.len() as u64).to_le_bytes());
        hasher.update(file.content.as_bytes());
    }

    hex::encode(hasher.finalize())
}

/// Fingerprints the files a manifest names, as they currently exist under `base`.
///
/// Matches [`manifest_fingerprint`] exactly when the tree is in sync.
pub fn tree_fingerprint(base: &Path, manifest: &Manifest) -> Result<String> {
    let mut hasher = Sha256::new();

    for dir in &manifest.directories {
        hasher.update(b"d\0");
        hasher.update(dir.as_bytes());
        hasher.update(b"\0");
        if !base.join(dir).is_dir() {
            // Include an explicit marker so a missing directory changes the hash.
            hasher.update(b"missing\0");
        }
    }

    for file in manifest.effective_files() {
        let path = base.join(&file.path);
        hasher.update(b"f\0");
        hasher.update(file.path.as_bytes());
        hasher.update(b"\0");

        if path.is_file() {
            let content = std::fs::read(&path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            hasher.update((content.len() as u64).to_le_bytes());
            hasher.update(&content);
            debug!("fingerprint: mixed {} ({} bytes)", file.path, content.len());
        } else {
            hasher.update(b"missing\0");
            debug!("fingerprint: {} is absent", file.path);
        }
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Batch;
    use crate::progress::NullProgress;
    use crate::writer::ScaffoldWriter;

    fn fixture() -> Manifest {
        Manifest::new(
            vec!["logs".to_string()],
            vec![Batch::new("Docs")
                .with_file("README.md", "# QBTS\n")
                .with_file("docs/architecture.md", "layers\n")],
        )
    }

    #[test]
    fn manifest_hash_is_deterministic() {
        assert_eq!(manifest_fingerprint(&fixture()), manifest_fingerprint(&fixture()));
    }

    #[test]
    fn content_change_alters_hash() {
        let mut changed = fixture();
        changed.batches[0].files[0].content.push('!');
        assert_ne!(manifest_fingerprint(&fixture()), manifest_fingerprint(&changed));
    }

    #[test]
    fn tree_matches_manifest_after_write() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = fixture();
        ScaffoldWriter::new(dir.path())
            .write(&manifest, &mut NullProgress)
            .unwrap();

        let tree = tree_fingerprint(dir.path(), &manifest).unwrap();
        assert_eq!(tree, manifest_fingerprint(&manifest));

        std::fs::write(dir.path().join("README.md"), b"edited").unwrap();
        let mutated = tree_fingerprint(dir.path(), &manifest).unwrap();
        assert_ne!(mutated, manifest_fingerprint(&manifest));
    }

    #[test]
    fn tree_matches_manifest_with_duplicate_paths() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::new(
            Vec::new(),
            vec![Batch::new("Twice")
                .with_file("VERSION", "0.9.0\n")
                .with_file("VERSION", "1.0.0\n")],
        );
        ScaffoldWriter::new(dir.path())
            .write(&manifest, &mut NullProgress)
            .unwrap();

        assert_eq!(
            tree_fingerprint(dir.path(), &manifest).unwrap(),
            manifest_fingerprint(&manifest)
        );
    }
}
