//! Constants used across the QBTS scaffold workspace.

/// The filename for the scaffold's primary configuration.
pub const CONFIG_FILE: &str = "qbts.toml";

/// Output directory used when neither the config nor the CLI names one.
pub const DEFAULT_OUTPUT_DIR: &str = "quantum-blockchain-php";

/// Mode applied to every directory the writer creates on Unix.
pub const DIR_MODE: u32 = 0o755;

/// Product name stamped into the generated application.
pub const PRODUCT_NAME: &str = "Quantum Blockchain Trading System";

/// Horizontal rule printed around the generation banner.
pub const RULE: &str = "==================================================";
