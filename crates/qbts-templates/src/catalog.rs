//! Embedded template catalog.
//!
//! `resources/common` holds files shared by both variants, `resources/full`
//! and `resources/simple` the variant-specific ones. Each resource path mirrors
//! the output path.

use qbts_core::Variant;

#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    /// Output path relative to the project root.
    pub path: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BatchSpec {
    pub name: &'static str,
    pub templates: &'static [TemplateSpec],
}

macro_rules! template {
    ($set:literal, $path:literal) => {
        TemplateSpec {
            path: $path,
            source: include_str!(concat!("../resources/", $set, "/", $path)),
        }
    };
}

const FULL: &[BatchSpec] = &[
    BatchSpec {
        name: "Configuration Files",
        templates: &[
            template!("common", ".gitignore"),
            template!("common", "composer.json"),
            template!("common", ".env.example"),
            template!("common", "config/database.php"),
            template!("full", "config/quantum.php"),
            template!("full", "config/trading.php"),
            template!("full", "config/blockchain.php"),
            template!("full", "public/.htaccess"),
            template!("full", "tests/bootstrap.php"),
            template!("full", "logs/.gitkeep"),
        ],
    },
    BatchSpec {
        name: "Core Utilities",
        templates: &[
            template!("common", "src/utils/Database.php"),
            template!("full", "src/utils/Auth.php"),
            template!("full", "src/utils/Config.php"),
            template!("full", "src/utils/Helpers.php"),
            template!("full", "src/utils/Logger.php"),
        ],
    },
    BatchSpec {
        name: "Business Services",
        templates: &[
            template!("full", "src/services/QuantumService.php"),
            template!("full", "src/services/BlockchainService.php"),
            template!("full", "src/services/TradingService.php"),
            template!("full", "src/services/SecurityService.php"),
            template!("full", "src/services/MarketDataService.php"),
        ],
    },
    BatchSpec {
        name: "Data Models",
        templates: &[
            template!("full", "src/models/QuantumModel.php"),
            template!("full", "src/models/TradingModel.php"),
            template!("full", "src/models/UserModel.php"),
            template!("full", "src/models/BlockchainModel.php"),
            template!("full", "src/models/PortfolioModel.php"),
        ],
    },
    BatchSpec {
        name: "Controllers",
        templates: &[
            template!("full", "src/controllers/DashboardController.php"),
            template!("full", "src/controllers/ApiController.php"),
            template!("full", "src/controllers/QuantumController.php"),
            template!("full", "src/controllers/TradingController.php"),
        ],
    },
    BatchSpec {
        name: "Frontend Files",
        templates: &[
            template!("common", "public/index.php"),
            template!("common", "public/css/main.css"),
            template!("full", "public/css/quantum-theme.css"),
            template!("full", "public/js/dashboard.js"),
            template!("full", "public/js/trading-engine.js"),
            template!("full", "public/js/quantum-animations.js"),
        ],
    },
    BatchSpec {
        name: "API Endpoints",
        templates: &[
            template!("full", "public/api/quantum-api.php"),
            template!("full", "public/api/trading-api.php"),
            template!("full", "public/api/blockchain-api.php"),
            template!("full", "public/api/auth-api.php"),
        ],
    },
    BatchSpec {
        name: "Database Files",
        templates: &[
            template!("common", "database/schema.sql"),
            template!("full", "database/migrations/001_initial_schema.sql"),
            template!("full", "database/seeds/initial_data.sql"),
        ],
    },
    BatchSpec {
        name: "Documentation",
        templates: &[
            template!("common", "README.md"),
            template!("full", "docs/installation.md"),
            template!("full", "docs/api-reference.md"),
            template!("full", "docs/architecture.md"),
            template!("full", "deployment-guide.md"),
            template!("common", "VERSION"),
        ],
    },
];

const SIMPLE: &[BatchSpec] = &[
    BatchSpec {
        name: "Configuration Files",
        templates: &[
            template!("common", ".gitignore"),
            template!("common", "composer.json"),
            template!("common", ".env.example"),
            template!("common", "config/database.php"),
        ],
    },
    BatchSpec {
        name: "Core Files",
        templates: &[
            template!("common", "src/utils/Database.php"),
            template!("simple", "src/services/QuantumService.php"),
            template!("simple", "src/controllers/DashboardController.php"),
        ],
    },
    BatchSpec {
        name: "Frontend Files",
        templates: &[
            template!("common", "public/index.php"),
            template!("common", "public/css/main.css"),
            template!("simple", "public/js/dashboard.js"),
        ],
    },
    BatchSpec {
        name: "Database Files",
        templates: &[template!("common", "database/schema.sql")],
    },
    BatchSpec {
        name: "Documentation",
        templates: &[template!("common", "README.md"), template!("common", "VERSION")],
    },
];

/// Batches for `variant`, in write order.
pub fn batches(variant: Variant) -> &'static [BatchSpec] {
    match variant {
        Variant::Full => FULL,
        Variant::Simple => SIMPLE,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn paths(variant: Variant) -> Vec<&'static str> {
        batches(variant)
            .iter()
            .flat_map(|b| b.templates.iter().map(|t| t.path))
            .collect()
    }

    #[test]
    fn full_variant_lists_every_file_once() {
        let all = paths(Variant::Full);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), 48);
        assert_eq!(unique.len(), all.len());
        assert_eq!(batches(Variant::Full).len(), 9);
    }

    #[test]
    fn simple_variant_is_a_subset_by_path() {
        let full: HashSet<_> = paths(Variant::Full).into_iter().collect();
        let simple = paths(Variant::Simple);
        assert_eq!(simple.len(), 13);
        assert!(simple.iter().all(|p| full.contains(p)));
    }

    #[test]
    fn batch_names_follow_generation_order() {
        let names = batches(Variant::Full).iter().map(|b| b.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Configuration Files",
                "Core Utilities",
                "Business Services",
                "Data Models",
                "Controllers",
                "Frontend Files",
                "API Endpoints",
                "Database Files",
                "Documentation",
            ]
        );
    }

    #[test]
    fn only_the_keep_file_is_empty() {
        for variant in Variant::all() {
            for batch in batches(*variant) {
                for template in batch.templates {
                    if template.path == "logs/.gitkeep" {
                        assert!(template.source.is_empty());
                    } else {
                        assert!(!template.source.trim().is_empty(), "{} is empty", template.path);
                    }
                }
            }
        }
    }
}
