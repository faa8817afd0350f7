use crate::model::{ReconSummary, ReconciledRow, Status};

/// Count rows per status.
pub fn compute_summary(rows: &[ReconciledRow]) -> ReconSummary {
    let mut matched = 0;
    let mut mismatched = 0;
    let mut missing_in_fba = 0;
    let mut missing_in_storefront = 0;

    for row in rows {
        match row.status {
            Some(Status::Match) => matched += 1,
            Some(Status::Mismatch) => mismatched += 1,
            Some(Status::MissingInFba) => missing_in_fba += 1,
            Some(Status::MissingInStorefront) => missing_in_storefront += 1,
            None => {}
        }
    }

    ReconSummary {
        total_rows: rows.len(),
        matched,
        mismatched,
        missing_in_fba,
        missing_in_storefront,
    }
}
