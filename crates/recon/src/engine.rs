use crate::classify::classify_rows;
use crate::config::ReconConfig;
use crate::error::ReconError;
use crate::merge::merge_sources;
use crate::model::{InventoryRecord, ReconMeta, ReconReport};
use crate::report;
use crate::summary::compute_summary;

/// Run reconciliation over pre-loaded records. Returns the classified
/// report: merge → classify → summarize.
///
/// Pure function of its inputs; safe to invoke concurrently over
/// independent input pairs.
pub fn run(
    config: &ReconConfig,
    fba: &[InventoryRecord],
    storefront: &[InventoryRecord],
) -> Result<ReconReport, ReconError> {
    let mut rows = merge_sources(fba, storefront, &config.policy)?;
    classify_rows(&mut rows);
    let summary = compute_summary(&rows);

    Ok(ReconReport {
        meta: ReconMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        summary,
        rows,
    })
}

/// `run` plus CSV emission: the whole pipeline from records to report
/// bytes.
pub fn reconcile(
    config: &ReconConfig,
    fba: &[InventoryRecord],
    storefront: &[InventoryRecord],
) -> Result<Vec<u8>, ReconError> {
    let result = run(config, fba, storefront)?;
    report::to_csv(&result)
}
