//! Template catalog and manifest builder for the QBTS scaffold.
//!
//! Turns a [`Variant`] plus [`ScaffoldConfig`] into the [`Manifest`] the
//! writer materializes.

pub mod catalog;
pub mod layout;
pub mod render;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use qbts_core::{Batch, Manifest, ScaffoldConfig, Variant};

pub use render::RenderError;

/// Renders every template of `variant` with values from `cfg`.
#[instrument(skip(cfg))]
pub fn build_manifest(variant: Variant, cfg: &ScaffoldConfig) -> Result<Manifest> {
    debug!("building manifest for project: {}", cfg.project.name);
    let vars = cfg.template_vars(variant);

    let batches = catalog::batches(variant)
        .iter()
        .map(|spec| {
            spec.templates.iter().try_fold(Batch::new(spec.name), |batch, template| {
                let content = render::render(template.path, template.source, &vars)
                    .with_context(|| format!("failed to render '{}'", template.path))?;
                Ok::<_, anyhow::Error>(batch.with_file(template.path, content))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let directories = layout::SKELETON_DIRS
        .iter()
        .map(|d| (*d).to_string())
        .collect();

    Ok(Manifest::new(directories, batches))
}

/// The next-steps hint printed after a successful run.
pub fn next_steps(cfg: &ScaffoldConfig) -> Vec<String> {
    vec![
        "Run: composer install".to_string(),
        "Import database/schema.sql to MySQL".to_string(),
        "Configure config/database.php".to_string(),
        format!("Access: {}/public/", cfg.app.url.trim_end_matches('/')),
    ]
}
