use serde::Deserialize;

use crate::error::ReconError;
use crate::model::Source;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ReconConfig {
    pub name: String,
    pub sources: SourcesConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Exactly two ledgers, fixed roles. Column names are caller-supplied,
/// never hardcoded.
#[derive(Debug, Deserialize)]
pub struct SourcesConfig {
    pub fba: SourceConfig,
    pub storefront: SourceConfig,
}

impl SourcesConfig {
    pub fn get(&self, source: Source) -> &SourceConfig {
        match source {
            Source::Fba => &self.fba,
            Source::Storefront => &self.storefront,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub file: String,
    pub columns: ColumnMapping,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnMapping {
    pub sku: String,
    pub quantity: String,
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    #[serde(default)]
    pub display: DisplaySpelling,
}

/// How a SKU recurring within one source is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the run. Surfaces upstream feed bugs instead of hiding them.
    Reject,
    /// Later record replaces the earlier.
    LastWins,
    /// Quantities are added (one row per warehouse feeds).
    Sum,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        Self::Reject
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::LastWins => write!(f, "last_wins"),
            Self::Sum => write!(f, "sum"),
        }
    }
}

/// Which raw spelling the report shows when sources disagree on casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySpelling {
    /// The customer-facing spelling.
    Storefront,
    Fba,
    Normalized,
}

impl Default for DisplaySpelling {
    fn default() -> Self {
        Self::Storefront
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Default report path, resolved relative to the config file.
    /// A CLI `--output` flag takes precedence.
    #[serde(default)]
    pub report: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ReconConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: ReconConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        for source in [Source::Fba, Source::Storefront] {
            let cfg = self.sources.get(source);
            if cfg.file.is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "{source} ledger: file must not be empty"
                )));
            }
            if cfg.columns.sku.is_empty() || cfg.columns.quantity.is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "{source} ledger: column names must not be empty"
                )));
            }
            if cfg.columns.sku == cfg.columns.quantity {
                return Err(ReconError::ConfigValidation(format!(
                    "{source} ledger: sku and quantity map to the same column '{}'",
                    cfg.columns.sku
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
