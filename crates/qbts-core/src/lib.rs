//! Core logic and abstractions for the QBTS scaffold generator.
//!
//! This crate defines the scaffold configuration, command structures, the
//! file manifest and the writer that materializes it on disk.

pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod fingerprint;
pub mod manifest;
pub mod progress;
pub mod variant;
pub mod verify;
pub mod writer;

pub use command::{CommandParseError, CommandRef, PrimaryCommand};
pub use config::ScaffoldConfig;
pub use error::WriteError;
pub use manifest::{Batch, FileEntry, Manifest};
pub use progress::{NullProgress, Progress};
pub use variant::Variant;
pub use verify::{verify_tree, Drift, DriftKind};
pub use writer::{BatchSummary, ScaffoldWriter, WriteReport};
