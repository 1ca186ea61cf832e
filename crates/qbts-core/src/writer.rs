use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::WriteError;
use crate::manifest::Manifest;
use crate::progress::Progress;

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    pub files_written: usize,
    pub bytes_written: u64,
    /// Directories created by this run, outermost first, relative to the
    /// output root. Missing ancestors of the root keep their full path.
    pub directories_created: Vec<String>,
    pub batches: Vec<BatchSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub name: String,
    pub files: usize,
}

/// Materializes a [`Manifest`] under a base directory.
///
/// Files are overwritten unconditionally. Nothing is rolled back on failure.
#[derive(Debug, Clone)]
pub struct ScaffoldWriter {
    base: PathBuf,
}

impl ScaffoldWriter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    #[instrument(skip(self, manifest, progress), fields(base = %self.base.display()))]
    pub fn write(
        &self,
        manifest: &Manifest,
        progress: &mut dyn Progress,
    ) -> Result<WriteReport, WriteError> {
        manifest.validate()?;
        progress.run_started(manifest);

        let mut report = WriteReport::default();
        self.ensure_dir(&self.base, &mut report, progress)?;

        for dir in &manifest.directories {
            self.ensure_dir(&self.base.join(dir), &mut report, progress)?;
        }

        for batch in &manifest.batches {
            debug!("writing batch '{}' ({} files)", batch.name, batch.files.len());
            progress.batch_started(&batch.name, batch.files.len());

            for file in &batch.files {
                let target = self.base.join(&file.path);
                if let Some(parent) = target.parent() {
                    self.ensure_dir(parent, &mut report, progress)?;
                }
                if target.is_dir() {
                    return Err(WriteError::TargetIsDirectory { path: target });
                }

                fs::write(&target, file.content.as_bytes()).map_err(|source| {
                    WriteError::WriteFile {
                        path: target.clone(),
                        source,
                    }
                })?;

                report.files_written += 1;
                report.bytes_written += file.content.len() as u64;
                progress.file_written(&file.path, file.content.len());
            }

            report.batches.push(BatchSummary {
                name: batch.name.clone(),
                files: batch.files.len(),
            });
        }

        info!(
            "wrote {} files ({} bytes), created {} directories",
            report.files_written,
            report.bytes_written,
            report.directories_created.len()
        );
        progress.run_finished(&report);
        Ok(report)
    }

    fn ensure_dir(
        &self,
        path: &Path,
        report: &mut WriteReport,
        progress: &mut dyn Progress,
    ) -> Result<(), WriteError> {
        let missing = missing_dirs(path)?;
        if missing.is_empty() {
            return Ok(());
        }

        create_dir_tree(path).map_err(|source| WriteError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;

        for created in missing {
            let relative = match created.strip_prefix(&self.base) {
                Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
                Ok(rel) => rel.to_string_lossy().into_owned(),
                Err(_) => created.to_string_lossy().into_owned(),
            };
            debug!("created directory '{}'", relative);
            progress.directory_created(&relative);
            report.directories_created.push(relative);
        }
        Ok(())
    }
}

/// Lists the components of `path` that do not exist yet, outermost first.
/// Empty when `path` already is a directory. Fails if `path` or any ancestor
/// exists as something other than a directory.
fn missing_dirs(path: &Path) -> Result<Vec<PathBuf>, WriteError> {
    let mut missing = Vec::new();
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        match fs::metadata(ancestor) {
            Ok(meta) if meta.is_dir() => break,
            Ok(_) => {
                return Err(WriteError::ParentNotDirectory {
                    path: ancestor.to_path_buf(),
                })
            }
            Err(err) if is_missing(&err) => missing.push(ancestor.to_path_buf()),
            Err(source) => {
                return Err(WriteError::Inspect {
                    path: ancestor.to_path_buf(),
                    source,
                })
            }
        }
    }
    missing.reverse();
    Ok(missing)
}

// NotADirectory surfaces when a path walks through a regular file; the
// ancestor walk reports that file itself one level up.
fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

fn create_dir_tree(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::constants::DIR_MODE);
    }
    builder.create(path)
}
