use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::variant::{Variant, VariantParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryCommand {
    Init,
    Generate,
    Plan,
    Check,
}

impl PrimaryCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Generate => "generate",
            Self::Plan => "plan",
            Self::Check => "check",
        }
    }

    /// Whether the command accepts a variant selector.
    pub fn takes_variant(self) -> bool {
        !matches!(self, Self::Init)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandRef {
    pub primary: PrimaryCommand,
    pub selector: Option<String>,
}

impl CommandRef {
    pub fn canonical(&self) -> String {
        match &self.selector {
            Some(selector) => format!("{}:{}", self.primary.as_str(), selector),
            None => self.primary.as_str().to_string(),
        }
    }

    /// Resolves the selector into a variant, falling back to `default`.
    pub fn variant_or(&self, default: Variant) -> Result<Variant, CommandParseError> {
        match self.selector.as_deref() {
            Some(selector) => Ok(Variant::from_str(selector)?),
            None => Ok(default),
        }
    }
}

impl Display for CommandRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[derive(Debug, Error)]
pub enum CommandParseError {
    #[error("unknown primary command '{0}'")]
    UnknownPrimary(String),
    #[error("command '{0}' does not take a selector")]
    UnexpectedSelector(String),
    #[error(transparent)]
    Variant(#[from] VariantParseError),
}

impl FromStr for CommandRef {
    type Err = CommandParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.splitn(2, ':');
        let primary_text = parts.next().unwrap_or_default();
        let selector = parts
            .next()
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned);

        let primary = match primary_text {
            "init" => PrimaryCommand::Init,
            "generate" | "gen" => PrimaryCommand::Generate,
            "plan" => PrimaryCommand::Plan,
            "check" => PrimaryCommand::Check,
            _ => return Err(CommandParseError::UnknownPrimary(primary_text.to_string())),
        };

        if selector.is_some() && !primary.takes_variant() {
            return Err(CommandParseError::UnexpectedSelector(value.to_string()));
        }

        if let Some(selector) = selector.as_deref() {
            Variant::from_str(selector)?;
        }

        Ok(Self { primary, selector })
    }
}
