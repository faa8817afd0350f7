use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Which ledger a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Fba,
    Storefront,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fba => write!(f, "fba"),
            Self::Storefront => write!(f, "storefront"),
        }
    }
}

/// A single inventory line from one ledger, SKU in its raw spelling.
///
/// `quantity` is always ≥ 0; the loader rejects negative values. A SKU
/// with unknown quantity is simply absent from its source set.
#[derive(Debug, Clone)]
pub struct InventoryRecord {
    pub sku: String,
    pub quantity: i64,
    pub source: Source,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Agreement status of one reconciled SKU. Exactly one per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Match,
    Mismatch,
    MissingInFba,
    MissingInStorefront,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Mismatch => write!(f, "mismatch"),
            Self::MissingInFba => write!(f, "missing_in_fba"),
            Self::MissingInStorefront => write!(f, "missing_in_storefront"),
        }
    }
}

/// One row of the audit report: the outer-joined quantities for a single
/// normalized SKU.
///
/// `status` is `None` only between the merge and classify passes; the
/// emitter treats an unset status as an internal invariant violation.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciledRow {
    /// Normalized key, used for matching and ordering.
    pub sku: String,
    /// Raw spelling chosen by the display policy.
    pub display_sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fba_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

// ---------------------------------------------------------------------------
// Summary + Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub total_rows: usize,
    pub matched: usize,
    pub mismatched: usize,
    pub missing_in_fba: usize,
    pub missing_in_storefront: usize,
}

impl ReconSummary {
    /// True when every row agreed across both ledgers.
    pub fn is_clean(&self) -> bool {
        self.mismatched == 0 && self.missing_in_fba == 0 && self.missing_in_storefront == 0
    }
}

/// No timestamp here: identical inputs must serialize byte-identically.
#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub config_name: String,
    pub engine_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconReport {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub rows: Vec<ReconciledRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_is_snake_case() {
        assert_eq!(Status::Match.to_string(), "match");
        assert_eq!(Status::Mismatch.to_string(), "mismatch");
        assert_eq!(Status::MissingInFba.to_string(), "missing_in_fba");
        assert_eq!(Status::MissingInStorefront.to_string(), "missing_in_storefront");
    }

    #[test]
    fn summary_clean_only_when_all_matched() {
        let clean = ReconSummary {
            total_rows: 3,
            matched: 3,
            mismatched: 0,
            missing_in_fba: 0,
            missing_in_storefront: 0,
        };
        assert!(clean.is_clean());

        let dirty = ReconSummary {
            total_rows: 3,
            matched: 2,
            mismatched: 0,
            missing_in_fba: 1,
            missing_in_storefront: 0,
        };
        assert!(!dirty.is_clean());
    }
}
