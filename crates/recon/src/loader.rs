use crate::config::ColumnMapping;
use crate::error::ReconError;
use crate::model::{InventoryRecord, Source};

/// Load one ledger's CSV into records, preserving input order.
///
/// Duplicate SKUs are kept as separate records; the merge pass applies
/// the duplicate policy. Row indices in errors are 1-based data rows
/// (the header is row 0).
pub fn load_csv_records(
    source: Source,
    csv_data: &str,
    columns: &ColumnMapping,
) -> Result<Vec<InventoryRecord>, ReconError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReconError::Io(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let idx = |name: &str| -> Result<usize, ReconError> {
        headers.iter().position(|h| h == name).ok_or_else(|| {
            ReconError::MissingColumn {
                source,
                column: name.into(),
            }
        })
    };

    let sku_idx = idx(&columns.sku)?;
    let quantity_idx = idx(&columns.quantity)?;

    let mut records = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ReconError::Io(e.to_string()))?;
        let row = i + 1;

        let sku = record.get(sku_idx).unwrap_or("");
        if sku.trim().is_empty() {
            return Err(ReconError::EmptySku { source, row });
        }

        let quantity_str = record.get(quantity_idx).unwrap_or("");
        let quantity: i64 = quantity_str.parse().map_err(|_| ReconError::QuantityParse {
            source,
            row,
            value: quantity_str.into(),
        })?;
        if quantity < 0 {
            return Err(ReconError::NegativeQuantity {
                source,
                row,
                value: quantity,
            });
        }

        records.push(InventoryRecord {
            sku: sku.to_string(),
            quantity,
            source,
        });
    }

    Ok(records)
}
