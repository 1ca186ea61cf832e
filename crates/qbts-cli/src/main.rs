use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use qbts_core::fingerprint::{manifest_fingerprint, tree_fingerprint};
use qbts_core::{verify_tree, CommandRef, PrimaryCommand, ScaffoldConfig, ScaffoldWriter, Variant};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod init;
mod plan;
mod reporter;
mod styles;

use styles as s;

/// The command-line interface for the QBTS scaffold generator.
#[derive(Debug, Parser)]
#[command(name = "qbts")]
#[command(version)]
#[command(styles = s::get_clap_styles())]
#[command(
    help_template = "{bin} {version}\n\n{about-with-newline}{usage-heading} {usage}\n\n{all-args}{after-help}"
)]
#[command(about = "Quantum Blockchain Trading System project generator")]
#[command(
    long_about = "Writes the Quantum Blockchain Trading System skeleton: PHP sources, SQL schema,
dashboard assets and docs. Every run overwrites generated files in place and
never deletes anything, so running it twice leaves the same tree.

Common Commands:
  init              Write a starter qbts.toml in the current directory
  generate          Generate the project (generate:full, generate:simple)
  plan              List batches and files without touching disk
  check             Compare an existing tree against the templates
"
)]
#[command(
    after_help = "\x1b[1;32mExamples:\x1b[0m\n  \x1b[36mqbts init\x1b[0m                     \x1b[2m# Write qbts.toml\x1b[0m\n  \x1b[36mqbts generate\x1b[0m                 \x1b[2m# Generate the configured variant\x1b[0m\n  \x1b[36mqbts generate simple\x1b[0m          \x1b[2m# Shorthand for generate:simple\x1b[0m\n  \x1b[36mqbts plan --json\x1b[0m              \x1b[2m# Machine-readable file list\x1b[0m\n  \x1b[36mqbts check --output ./app\x1b[0m     \x1b[2m# Detect drift in ./app\x1b[0m"
)]
pub(crate) struct Cli {
    /// Command in canonical form, for example: `generate`, `generate:simple`, `plan:full`
    command: Option<String>,
    /// Optional variant selector (supports `qbts generate simple` style)
    selector: Option<String>,
    /// Path to the scaffold config file. Built-in defaults apply when it is missing.
    #[arg(long, default_value = qbts_core::constants::CONFIG_FILE)]
    config: String,
    /// Output directory; overrides `output.dir` from the config.
    #[arg(long, short)]
    output: Option<String>,
    /// Overwrite qbts.toml on `init` if it already exists.
    #[arg(long, default_value_t = false)]
    force: bool,
    /// Emit machine-readable JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Only print the banner and summary while generating.
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .init();

    let cli = Cli::parse();
    debug!("parsed cli arguments: {:?}", cli);

    let command_name = match &cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let command_text = match &cli.selector {
        Some(selector) => format!("{}:{}", command_name, selector),
        None => command_name.clone(),
    };

    let command = CommandRef::from_str(&command_text)
        .map_err(|e| anyhow!("failed to parse command '{}': {e}", command_text))?;

    if command.primary == PrimaryCommand::Init {
        return init::run(&cli);
    }

    let cfg = ScaffoldConfig::load_or_default(&cli.config)
        .with_context(|| format!("unable to load config '{}'", cli.config))?;

    execute(&cli, &cfg, &command)
}

/// `RUST_LOG`-style directives; `info` applies only when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Executes a validated command against the loaded config.
fn execute(cli: &Cli, cfg: &ScaffoldConfig, command: &CommandRef) -> Result<()> {
    let variant = command.variant_or(cfg.output.variant)?;
    let output = output_dir(cli, cfg);
    let manifest = qbts_templates::build_manifest(variant, cfg)?;

    match command.primary {
        PrimaryCommand::Generate => generate(cli, cfg, variant, output, &manifest),
        PrimaryCommand::Plan => {
            let view = plan::Plan::new(variant, output.display().to_string(), &manifest);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", view.render_text());
            }
            Ok(())
        }
        PrimaryCommand::Check => check(cli, variant, &output, &manifest),
        PrimaryCommand::Init => Err(anyhow!("init is handled before config loading")),
    }
}

fn generate(
    cli: &Cli,
    cfg: &ScaffoldConfig,
    variant: Variant,
    output: PathBuf,
    manifest: &qbts_core::Manifest,
) -> Result<()> {
    let writer = ScaffoldWriter::new(output);
    let target = writer.base().display().to_string();

    if cli.json {
        let report = writer
            .write(manifest, &mut qbts_core::NullProgress)
            .with_context(|| format!("generation into '{}' failed", target))?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut progress = reporter::ConsoleProgress::new(stdout.lock(), cli.quiet, s::color_enabled());
    progress.banner(&cfg.project.name, variant.as_str(), &target);

    let report = writer
        .write(manifest, &mut progress)
        .with_context(|| format!("generation into '{}' failed", target))?;

    progress.summary(&report, &qbts_templates::next_steps(cfg));
    drop(progress.finish().context("failed to write progress to stdout")?);

    debug!("manifest fingerprint={}", manifest_fingerprint(manifest));
    Ok(())
}

fn check(
    cli: &Cli,
    variant: Variant,
    output: &std::path::Path,
    manifest: &qbts_core::Manifest,
) -> Result<()> {
    let drift = verify_tree(output, manifest)?;
    debug!("manifest fingerprint={}", manifest_fingerprint(manifest));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&drift)?);
    } else {
        let color = s::color_enabled();
        let mut stdout = std::io::stdout().lock();
        for entry in &drift {
            writeln!(stdout, " - {}", s::paint(s::ERROR, &entry.to_string(), color))?;
        }
    }

    if !drift.is_empty() {
        return Err(anyhow!(
            "{} drifted entries in '{}': run 'qbts generate:{}' to resync",
            drift.len(),
            output.display(),
            variant
        ));
    }

    if !cli.json {
        println!(
            "check:{} passed ({} files, fingerprint={})",
            variant,
            manifest.file_count(),
            tree_fingerprint(output, manifest)?
        );
    }
    Ok(())
}

fn output_dir(cli: &Cli, cfg: &ScaffoldConfig) -> PathBuf {
    match &cli.output {
        Some(dir) => PathBuf::from(dir),
        None => cfg.output.dir.clone(),
    }
}
