use crate::model::{ReconciledRow, Status};

/// Status for one merged row. Missing takes precedence over mismatch: a
/// row with one side absent is never `Mismatch`.
pub fn status_for(row: &ReconciledRow) -> Status {
    match (row.fba_quantity, row.storefront_quantity) {
        (_, None) => Status::MissingInStorefront,
        (None, _) => Status::MissingInFba,
        (Some(fba), Some(storefront)) if fba == storefront => Status::Match,
        _ => Status::Mismatch,
    }
}

/// Assign each row's status, exactly once.
pub fn classify_rows(rows: &mut [ReconciledRow]) {
    for row in rows {
        row.status = Some(status_for(row));
    }
}
