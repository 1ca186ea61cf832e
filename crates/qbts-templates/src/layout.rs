//! Directory skeleton created before any file is written.

/// Created in order, for every variant. Several stay empty (`public/assets`,
/// `tests` in the simple variant, `logs`) and exist only so the generated
/// application finds them at runtime.
pub const SKELETON_DIRS: &[&str] = &[
    "public",
    "public/css",
    "public/js",
    "public/api",
    "public/assets",
    "src",
    "src/controllers",
    "src/models",
    "src/services",
    "src/utils",
    "config",
    "database",
    "database/migrations",
    "database/seeds",
    "docs",
    "tests",
    "logs",
];
