use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog flavor to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Every configuration, service, model, controller, API and doc file.
    Full,
    /// The lightweight skeleton: config, one service, one controller, dashboard.
    Simple,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Simple => "simple",
        }
    }

    pub fn all() -> &'static [Variant] {
        &[Self::Full, Self::Simple]
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::Full
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum VariantParseError {
    #[error("unknown variant '{0}' (supported: full,simple)")]
    Unknown(String),
}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "full" => Ok(Self::Full),
            "simple" | "lite" => Ok(Self::Simple),
            other => Err(VariantParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_variants() {
        assert_eq!(Variant::from_str("full").unwrap(), Variant::Full);
        assert_eq!(Variant::from_str("simple").unwrap(), Variant::Simple);
        assert_eq!(Variant::from_str("lite").unwrap(), Variant::Simple);
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = Variant::from_str("quantum").expect_err("must fail");
        assert!(err.to_string().contains("quantum"));
    }

    #[test]
    fn default_is_full() {
        assert_eq!(Variant::default(), Variant::Full);
    }
}
