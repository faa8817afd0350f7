use std::path::PathBuf;

use stocklens_recon::config::ReconConfig;
use stocklens_recon::engine::{reconcile, run};
use stocklens_recon::error::ReconError;
use stocklens_recon::loader::load_csv_records;
use stocklens_recon::model::{ReconReport, Source, Status};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Parse a config, load both ledger files relative to the fixtures dir,
/// run the engine.
fn load_and_run(config_toml: &str) -> ReconReport {
    let dir = fixtures_dir();
    let config = ReconConfig::from_toml(config_toml).unwrap();

    let fba_data = std::fs::read_to_string(dir.join(&config.sources.fba.file)).unwrap();
    let storefront_data =
        std::fs::read_to_string(dir.join(&config.sources.storefront.file)).unwrap();

    let fba = load_csv_records(Source::Fba, &fba_data, &config.sources.fba.columns).unwrap();
    let storefront = load_csv_records(
        Source::Storefront,
        &storefront_data,
        &config.sources.storefront.columns,
    )
    .unwrap();

    run(&config, &fba, &storefront).unwrap()
}

const INLINE_CONFIG: &str = r#"
name = "inline"

[sources.fba]
file = "fba.csv"
[sources.fba.columns]
sku      = "sku"
quantity = "qty"

[sources.storefront]
file = "storefront.csv"
[sources.storefront.columns]
sku      = "sku"
quantity = "qty"
"#;

fn run_inline(fba_csv: &str, storefront_csv: &str) -> ReconReport {
    let config = ReconConfig::from_toml(INLINE_CONFIG).unwrap();
    let fba = load_csv_records(Source::Fba, fba_csv, &config.sources.fba.columns).unwrap();
    let storefront = load_csv_records(
        Source::Storefront,
        storefront_csv,
        &config.sources.storefront.columns,
    )
    .unwrap();
    run(&config, &fba, &storefront).unwrap()
}

// -------------------------------------------------------------------------
// Fixture-driven end-to-end
// -------------------------------------------------------------------------

#[test]
fn daily_fixture_end_to_end() {
    let toml = std::fs::read_to_string(fixtures_dir().join("daily.recon.toml")).unwrap();
    let result = load_and_run(&toml);

    assert_eq!(result.meta.config_name, "fba-storefront-daily");
    assert_eq!(result.summary.total_rows, 5);
    assert_eq!(result.summary.matched, 2);
    assert_eq!(result.summary.mismatched, 1);
    assert_eq!(result.summary.missing_in_storefront, 1);
    assert_eq!(result.summary.missing_in_fba, 1);

    let by_key = |k: &str| result.rows.iter().find(|r| r.sku == k).unwrap();
    assert_eq!(by_key("WIDGET-BLUE").status, Some(Status::Match));
    let red = by_key("WIDGET-RED");
    assert_eq!(red.status, Some(Status::Mismatch));
    assert_eq!(red.fba_quantity, Some(17));
    assert_eq!(red.storefront_quantity, Some(20));
    assert_eq!(by_key("GADGET-9").status, Some(Status::Match));
    assert_eq!(by_key("CABLE-2M").status, Some(Status::MissingInStorefront));
    assert_eq!(by_key("HOLSTER-XL").status, Some(Status::MissingInFba));
}

#[test]
fn fixture_rows_are_key_ordered() {
    let toml = std::fs::read_to_string(fixtures_dir().join("daily.recon.toml")).unwrap();
    let result = load_and_run(&toml);
    let keys: Vec<&str> = result.rows.iter().map(|r| r.sku.as_str()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

// -------------------------------------------------------------------------
// Classification scenarios
// -------------------------------------------------------------------------

#[test]
fn casing_and_whitespace_match_as_one_row() {
    let result = run_inline("sku,qty\nabc-1,5\n", "sku,qty\nABC-1,5\n");
    assert_eq!(result.rows.len(), 1);
    let row = &result.rows[0];
    assert_eq!(row.sku, "ABC-1");
    assert_eq!(row.display_sku, "ABC-1");
    assert_eq!(row.status, Some(Status::Match));
}

#[test]
fn quantity_disagreement_reports_both_sides() {
    let result = run_inline("sku,qty\nX,3\n", "sku,qty\nX,7\n");
    let row = &result.rows[0];
    assert_eq!(row.status, Some(Status::Mismatch));
    assert_eq!(row.fba_quantity, Some(3));
    assert_eq!(row.storefront_quantity, Some(7));
}

#[test]
fn fba_only_sku_is_missing_in_storefront() {
    let result = run_inline("sku,qty\nY,2\n", "sku,qty\n");
    let row = &result.rows[0];
    assert_eq!(row.status, Some(Status::MissingInStorefront));
    assert_eq!(row.storefront_quantity, None);
}

#[test]
fn storefront_only_sku_is_missing_in_fba() {
    let result = run_inline("sku,qty\n", "sku,qty\nZ,1\n");
    let row = &result.rows[0];
    assert_eq!(row.status, Some(Status::MissingInFba));
    assert_eq!(row.fba_quantity, None);
}

#[test]
fn missing_quantity_column_aborts_without_output() {
    let config = ReconConfig::from_toml(INLINE_CONFIG).unwrap();
    let err =
        load_csv_records(Source::Fba, "sku,condition\nA,NEW\n", &config.sources.fba.columns)
            .unwrap_err();
    match err {
        ReconError::MissingColumn { column, .. } => assert_eq!(column, "qty"),
        other => panic!("expected MissingColumn, got {other}"),
    }
}

// -------------------------------------------------------------------------
// Determinism
// -------------------------------------------------------------------------

#[test]
fn identical_inputs_produce_identical_bytes() {
    let config = ReconConfig::from_toml(INLINE_CONFIG).unwrap();
    let fba_csv = "sku,qty\nB,2\nA,1\nC,3\n";
    let storefront_csv = "sku,qty\nC,3\nA,4\n";

    let fba = load_csv_records(Source::Fba, fba_csv, &config.sources.fba.columns).unwrap();
    let storefront = load_csv_records(
        Source::Storefront,
        storefront_csv,
        &config.sources.storefront.columns,
    )
    .unwrap();

    let first = reconcile(&config, &fba, &storefront).unwrap();
    let second = reconcile(&config, &fba, &storefront).unwrap();
    assert_eq!(first, second);
}

#[test]
fn input_ordering_does_not_change_output() {
    let config = ReconConfig::from_toml(INLINE_CONFIG).unwrap();
    let forward = load_csv_records(Source::Fba, "sku,qty\nA,1\nB,2\nC,3\n", &config.sources.fba.columns)
        .unwrap();
    let reversed = load_csv_records(Source::Fba, "sku,qty\nC,3\nB,2\nA,1\n", &config.sources.fba.columns)
        .unwrap();
    let storefront =
        load_csv_records(Source::Storefront, "sku,qty\nB,2\n", &config.sources.storefront.columns)
            .unwrap();

    let out_forward = reconcile(&config, &forward, &storefront).unwrap();
    let out_reversed = reconcile(&config, &reversed, &storefront).unwrap();
    assert_eq!(out_forward, out_reversed);
}

// -------------------------------------------------------------------------
// Duplicate policies through the engine
// -------------------------------------------------------------------------

#[test]
fn duplicate_sku_rejected_by_default() {
    let config = ReconConfig::from_toml(INLINE_CONFIG).unwrap();
    let fba =
        load_csv_records(Source::Fba, "sku,qty\nA,1\na,2\n", &config.sources.fba.columns).unwrap();
    let err = run(&config, &fba, &[]).unwrap_err();
    match err {
        ReconError::DuplicateSku { source, sku, count } => {
            assert_eq!(source, Source::Fba);
            assert_eq!(sku, "A");
            assert_eq!(count, 2);
        }
        other => panic!("expected DuplicateSku, got {other}"),
    }
}

#[test]
fn duplicate_sku_summed_when_configured() {
    let toml = format!(
        r#"{INLINE_CONFIG}
[policy]
duplicates = "sum"
"#
    );
    let config = ReconConfig::from_toml(&toml).unwrap();
    let fba =
        load_csv_records(Source::Fba, "sku,qty\nA,1\na,2\n", &config.sources.fba.columns).unwrap();
    let result = run(&config, &fba, &[]).unwrap();
    assert_eq!(result.rows[0].fba_quantity, Some(3));
}

// -------------------------------------------------------------------------
// JSON shape
// -------------------------------------------------------------------------

#[test]
fn report_serializes_to_json() {
    let result = run_inline("sku,qty\nA,1\n", "sku,qty\nA,2\n");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["meta"]["config_name"], "inline");
    assert_eq!(json["summary"]["mismatched"], 1);
    assert_eq!(json["rows"][0]["status"], "mismatch");
    assert_eq!(json["rows"][0]["fba_quantity"], 1);
}
