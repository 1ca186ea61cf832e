use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::constants::{DEFAULT_OUTPUT_DIR, PRODUCT_NAME};
use crate::variant::Variant;

#[derive(Debug, Default, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl ScaffoldConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {path}"))?;
        let cfg = toml::from_str::<Self>(&text)
            .with_context(|| format!("failed to parse TOML config: {path}"))?;
        Ok(cfg)
    }

    /// Loads `path` if it exists, otherwise returns the built-in defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            return Self::load_from_file(path);
        }
        debug!("config '{}' not found, using built-in defaults", path);
        Ok(Self::default())
    }

    /// Placeholder values substituted into every template.
    pub fn template_vars(&self, variant: Variant) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("PROJECT_NAME", self.project.name.clone()),
            ("PACKAGE_NAME", self.project.package.clone()),
            ("VERSION", self.project.version.clone()),
            ("NAMESPACE", self.project.namespace.clone()),
            ("HOMEPAGE", self.project.homepage.clone()),
            ("AUTHOR", self.project.author.clone()),
            ("EMAIL", self.project.email.clone()),
            ("APP_URL", self.app.url.trim_end_matches('/').to_string()),
            ("APP_ENV", self.app.env.clone()),
            ("DB_HOST", self.database.host.clone()),
            ("DB_PORT", self.database.port.to_string()),
            ("DB_NAME", self.database.name.clone()),
            ("DB_USER", self.database.user.clone()),
            ("VARIANT", variant.as_str().to_string()),
        ])
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub package: String,
    pub version: String,
    pub namespace: String,
    pub homepage: String,
    pub author: String,
    pub email: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: PRODUCT_NAME.to_string(),
            package: "quantum/blockchain-php".to_string(),
            version: "1.0.0".to_string(),
            namespace: "QuantumBlockchain".to_string(),
            homepage: "https://github.com/quantum/blockchain-php".to_string(),
            author: "Quantum Blockchain Team".to_string(),
            email: "team@quantum-blockchain.com".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub variant: Variant,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            variant: Variant::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub url: String,
    pub env: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
            env: "production".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            name: "quantum_blockchain".to_string(),
            user: "root".to_string(),
        }
    }
}
