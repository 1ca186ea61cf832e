use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};

use crate::Cli;
use tracing::{info, instrument};

/// Runs the `init` command to write a starter `qbts.toml`.
#[instrument(skip(cli))]
pub fn run(cli: &Cli) -> Result<()> {
    write_if_absent(&cli.config, &render_config(), cli.force)
        .with_context(|| format!("failed to write '{}'", cli.config))?;

    // Round-trip so a broken starter config fails here rather than at generate time.
    let cfg = qbts_core::ScaffoldConfig::load_from_file(&cli.config)?;

    info!(
        "init complete: config={}, output={}, variant={}",
        cli.config,
        cfg.output.dir.display(),
        cfg.output.variant
    );
    println!("wrote {}", cli.config);
    println!("next: run 'qbts generate' or 'qbts plan'");

    Ok(())
}

fn render_config() -> String {
    r#"[project]
name = "Quantum Blockchain Trading System"
package = "quantum/blockchain-php"
version = "1.0.0"
namespace = "QuantumBlockchain"
homepage = "https://github.com/quantum/blockchain-php"
author = "Quantum Blockchain Team"
email = "team@quantum-blockchain.com"

[output]
dir = "quantum-blockchain-php"
# "full" writes every service, model, controller and doc; "simple" the minimal skeleton.
variant = "full"

[app]
url = "http://localhost:8000"
env = "production"

[database]
host = "localhost"
port = 3306
name = "quantum_blockchain"
user = "root"
"#
    .to_string()
}

fn write_if_absent(path: &str, content: &str, force: bool) -> Result<()> {
    let output = Path::new(path);

    if output.exists() && !force {
        return Err(anyhow!(
            "'{}' already exists. Re-run with --force to overwrite",
            path
        ));
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }

    fs::write(output, content)
        .with_context(|| format!("failed to write file '{}'", output.display()))
}
