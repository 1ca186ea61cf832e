use std::io::{self, Write};

use qbts_core::constants::RULE;
use qbts_core::{Manifest, Progress, WriteReport};

use crate::styles::{self as s, paint};

/// Console rendering of writer progress.
///
/// Progress callbacks cannot fail, so the first I/O error is kept and
/// surfaced by [`ConsoleProgress::finish`].
#[derive(Debug)]
pub struct ConsoleProgress<W: Write> {
    out: W,
    quiet: bool,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W, quiet: bool, color: bool) -> Self {
        Self {
            out,
            quiet,
            color,
            error: None,
        }
    }

    /// Prints the opening banner.
    pub fn banner(&mut self, project: &str, variant: &str, target: &str) {
        let title = format!("Starting {project} generation (variant={variant}) -> {target}");
        let line = paint(s::BANNER, &title, self.color);
        self.line(&line);
        self.line(RULE);
    }

    /// Prints the closing summary and the next-steps list.
    pub fn summary(&mut self, report: &WriteReport, next_steps: &[String]) {
        self.line(RULE);
        let done = format!(
            "Project generation completed! {} files created.",
            report.files_written
        );
        let done = paint(s::SUCCESS, &done, self.color);
        self.line(&done);

        if next_steps.is_empty() {
            return;
        }
        self.line("Next steps:");
        for (i, step) in next_steps.iter().enumerate() {
            let step = paint(s::DESC, step, self.color);
            self.line(&format!("   {}. {}", i + 1, step));
        }
    }

    /// Flushes output and returns the writer, or the first I/O error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write + std::fmt::Debug> Progress for ConsoleProgress<W> {
    fn run_started(&mut self, manifest: &Manifest) {
        tracing::debug!(
            "{} directories, {} batches, {} files",
            manifest.directories.len(),
            manifest.batches.len(),
            manifest.file_count()
        );
    }

    fn directory_created(&mut self, path: &str) {
        if self.quiet {
            return;
        }
        self.line(&format!("Created directory: {path}"));
    }

    fn batch_started(&mut self, name: &str, _file_count: usize) {
        if self.quiet {
            return;
        }
        let heading = paint(s::BATCH, &format!("Generating {name}..."), self.color);
        self.line("");
        self.line(&heading);
    }

    fn file_written(&mut self, path: &str, _bytes: usize) {
        if self.quiet {
            return;
        }
        self.line(&format!("   Created: {path}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbts_core::{Batch, BatchSummary};

    fn report() -> WriteReport {
        WriteReport {
            files_written: 2,
            bytes_written: 10,
            directories_created: vec!["config".to_string()],
            batches: vec![BatchSummary {
                name: "Configuration Files".to_string(),
                files: 2,
            }],
        }
    }

    #[test]
    fn renders_batches_files_and_summary() {
        let mut progress = ConsoleProgress::new(Vec::new(), false, false);
        progress.banner("QBTS", "simple", "out");
        progress.directory_created("config");
        progress.batch_started("Configuration Files", 2);
        progress.file_written(".gitignore", 5);
        progress.file_written("config/database.php", 5);
        progress.summary(&report(), &["Run: composer install".to_string()]);

        let text = String::from_utf8(progress.finish().unwrap()).unwrap();
        assert!(text.starts_with("Starting QBTS generation (variant=simple) -> out\n"));
        assert!(text.contains("Created directory: config\n"));
        assert!(text.contains("\nGenerating Configuration Files...\n"));
        assert!(text.contains("   Created: config/database.php\n"));
        assert!(text.contains("Project generation completed! 2 files created.\n"));
        assert!(text.ends_with("   1. Run: composer install\n"));
    }

    #[test]
    fn quiet_mode_keeps_only_banner_and_summary() {
        let mut progress = ConsoleProgress::new(Vec::new(), true, false);
        progress.banner("QBTS", "full", "out");
        progress.batch_started("Documentation", 1);
        progress.file_written("README.md", 5);
        progress.summary(&report(), &[]);

        let text = String::from_utf8(progress.finish().unwrap()).unwrap();
        assert!(!text.contains("Created:"));
        assert!(!text.contains("Generating"));
        assert!(text.contains("2 files created."));
    }

    #[test]
    fn run_started_writes_nothing() {
        let manifest = Manifest::new(Vec::new(), vec![Batch::new("Docs").with_file("a", "b")]);
        let mut progress = ConsoleProgress::new(Vec::new(), false, false);
        progress.run_started(&manifest);
        assert!(progress.finish().unwrap().is_empty());
    }

    #[derive(Debug)]
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_surfaced() {
        let mut progress = ConsoleProgress::new(BrokenPipe, false, false);
        progress.file_written("README.md", 1);
        progress.file_written("VERSION", 1);
        let err = progress.finish().expect_err("must fail");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
