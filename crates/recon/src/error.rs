use std::fmt;

use crate::model::Source;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty or colliding column names, etc.).
    ConfigValidation(String),
    /// Missing required column in input data.
    MissingColumn { source: Source, column: String },
    /// Quantity cell failed integer parsing. `row` is the 1-based data row.
    QuantityParse { source: Source, row: usize, value: String },
    /// Quantity cell parsed but is negative.
    NegativeQuantity { source: Source, row: usize, value: i64 },
    /// Identifier cell is empty.
    EmptySku { source: Source, row: usize },
    /// A normalized SKU recurs within one source under the `reject` policy.
    DuplicateSku { source: Source, sku: String, count: usize },
    /// A row reached the emitter without a status. Classifier defect.
    StatusUnset { sku: String },
    /// IO error (file read, writer flush, etc.).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { source, column } => {
                write!(f, "{source} ledger: missing column '{column}'")
            }
            Self::QuantityParse { source, row, value } => {
                write!(f, "{source} ledger, row {row}: cannot parse quantity '{value}'")
            }
            Self::NegativeQuantity { source, row, value } => {
                write!(f, "{source} ledger, row {row}: negative quantity {value}")
            }
            Self::EmptySku { source, row } => {
                write!(f, "{source} ledger, row {row}: empty SKU")
            }
            Self::DuplicateSku { source, sku, count } => {
                write!(f, "{source} ledger: SKU '{sku}' appears {count} times")
            }
            Self::StatusUnset { sku } => {
                write!(f, "internal error: row '{sku}' has no status")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
