use crate::manifest::Manifest;
use crate::writer::WriteReport;

/// Observer for writer progress.
///
/// All methods default to no-ops so implementations only override the events
/// they render.
pub trait Progress: std::fmt::Debug {
    /// Called once, after validation and before the output root is touched.
    fn run_started(&mut self, _manifest: &Manifest) {}

    /// A directory that did not exist was created. `path` is relative to the output root.
    fn directory_created(&mut self, _path: &str) {}

    /// A batch is about to be written.
    fn batch_started(&mut self, _name: &str, _file_count: usize) {}

    /// A file was written in full.
    fn file_written(&mut self, _path: &str, _bytes: usize) {}

    /// Called once after the last file, only when the run succeeded.
    fn run_finished(&mut self, _report: &WriteReport) {}
}

/// Swallows every event.
#[derive(Debug, Default)]
pub struct NullProgress;

impl Progress for NullProgress {}
