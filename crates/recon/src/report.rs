use crate::error::ReconError;
use crate::model::ReconReport;

/// Serialize the classified rows to CSV with fixed column order:
/// `sku, fba_quantity, storefront_quantity, status`. Absent quantities
/// are blank fields.
///
/// Fully buffered: either the whole report is returned or an error is,
/// never a partial artifact. A row without a status fails with
/// `StatusUnset`; the classify pass makes that unreachable.
pub fn to_csv(report: &ReconReport) -> Result<Vec<u8>, ReconError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["sku", "fba_quantity", "storefront_quantity", "status"])
        .map_err(|e| ReconError::Io(e.to_string()))?;

    for row in &report.rows {
        let status = row.status.ok_or_else(|| ReconError::StatusUnset {
            sku: row.sku.clone(),
        })?;
        let fba = quantity_field(row.fba_quantity);
        let storefront = quantity_field(row.storefront_quantity);
        let status = status.to_string();
        writer
            .write_record([
                row.display_sku.as_str(),
                fba.as_str(),
                storefront.as_str(),
                status.as_str(),
            ])
            .map_err(|e| ReconError::Io(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ReconError::Io(e.to_string()))
}

fn quantity_field(quantity: Option<i64>) -> String {
    quantity.map(|q| q.to_string()).unwrap_or_default()
}
