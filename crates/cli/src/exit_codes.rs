//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Code | Description                                        |
//! |------|----------------------------------------------------|
//! | 0    | Success, all SKUs matched                          |
//! | 1    | Discrepancies found (mismatched or missing SKUs)   |
//! | 2    | CLI usage error (reserved by clap)                 |
//! | 3    | Duplicate SKUs in one ledger (`reject` policy)     |
//! | 4    | Invalid config (TOML parse or validation)          |
//! | 5    | Malformed ledger data (missing column, bad cell)   |
//! | 6    | IO or runtime failure                              |

use stocklens_recon::ReconError;

/// Success - all SKUs agreed across both ledgers.
pub const EXIT_SUCCESS: u8 = 0;

/// Discrepancies found. Like `diff(1)`, exit 1 means "the ledgers differ."
pub const EXIT_DISCREPANCIES: u8 = 1;

/// Duplicate SKUs found in one ledger under the `reject` policy.
pub const EXIT_DUPLICATE: u8 = 3;

/// Config file failed to parse or validate.
pub const EXIT_INVALID_CONFIG: u8 = 4;

/// Ledger data is malformed (missing column, non-integer or negative
/// quantity, empty SKU).
pub const EXIT_MALFORMED_INPUT: u8 = 5;

/// IO error or internal failure.
pub const EXIT_RUNTIME: u8 = 6;

/// Map an engine error to its exit code.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        ReconError::DuplicateSku { .. } => EXIT_DUPLICATE,
        ReconError::MissingColumn { .. }
        | ReconError::QuantityParse { .. }
        | ReconError::NegativeQuantity { .. }
        | ReconError::EmptySku { .. } => EXIT_MALFORMED_INPUT,
        ReconError::StatusUnset { .. } | ReconError::Io(_) => EXIT_RUNTIME,
    }
}
