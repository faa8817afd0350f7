use std::collections::BTreeMap;

use crate::config::{DisplaySpelling, DuplicatePolicy, PolicyConfig};
use crate::error::ReconError;
use crate::model::{InventoryRecord, ReconciledRow, Source};
use crate::normalize::normalize_sku;

/// Per-key quantity slots plus the raw spelling seen on each side.
#[derive(Debug, Default)]
struct KeySlots {
    fba: Option<i64>,
    storefront: Option<i64>,
    fba_raw: Option<String>,
    storefront_raw: Option<String>,
}

/// Full outer join of the two ledgers on normalized SKU.
///
/// One row per distinct normalized key across both inputs, in ascending
/// key order regardless of input ordering. Rows leave here without a
/// status; the classify pass assigns it.
pub fn merge_sources(
    fba: &[InventoryRecord],
    storefront: &[InventoryRecord],
    policy: &PolicyConfig,
) -> Result<Vec<ReconciledRow>, ReconError> {
    let mut slots: BTreeMap<String, KeySlots> = BTreeMap::new();

    fold_source(&mut slots, Source::Fba, fba, policy.duplicates)?;
    fold_source(&mut slots, Source::Storefront, storefront, policy.duplicates)?;

    Ok(slots
        .into_iter()
        .map(|(key, s)| {
            let display_sku = display_spelling(&key, &s, policy.display);
            ReconciledRow {
                sku: key,
                display_sku,
                fba_quantity: s.fba,
                storefront_quantity: s.storefront,
                status: None,
            }
        })
        .collect())
}

fn fold_source(
    slots: &mut BTreeMap<String, KeySlots>,
    source: Source,
    records: &[InventoryRecord],
    policy: DuplicatePolicy,
) -> Result<(), ReconError> {
    if policy == DuplicatePolicy::Reject {
        // Report the first duplicate in key order, with its full count.
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(normalize_sku(&record.sku)).or_insert(0) += 1;
        }
        if let Some((sku, count)) = counts.into_iter().find(|(_, c)| *c > 1) {
            return Err(ReconError::DuplicateSku { source, sku, count });
        }
    }

    for record in records {
        let key = normalize_sku(&record.sku);
        let slot = slots.entry(key).or_default();
        let (quantity, raw) = match source {
            Source::Fba => (&mut slot.fba, &mut slot.fba_raw),
            Source::Storefront => (&mut slot.storefront, &mut slot.storefront_raw),
        };

        *quantity = match (policy, *quantity) {
            (DuplicatePolicy::Sum, Some(prev)) => Some(prev + record.quantity),
            // Reject has no recurrences left; LastWins replaces.
            _ => Some(record.quantity),
        };
        *raw = Some(record.sku.trim().to_string());
    }

    Ok(())
}

fn display_spelling(key: &str, slots: &KeySlots, preference: DisplaySpelling) -> String {
    let pick = |first: &Option<String>, second: &Option<String>| {
        first
            .clone()
            .or_else(|| second.clone())
            .unwrap_or_else(|| key.to_string())
    };
    match preference {
        DisplaySpelling::Normalized => key.to_string(),
        DisplaySpelling::Storefront => pick(&slots.storefront_raw, &slots.fba_raw),
        DisplaySpelling::Fba => pick(&slots.fba_raw, &slots.storefront_raw),
    }
}
