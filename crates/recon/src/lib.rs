//! `stocklens-recon` — FBA ↔ storefront inventory reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded records, returns a classified
//! audit report. No CLI or IO dependencies.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod report;
pub mod summary;

pub use config::ReconConfig;
pub use engine::{reconcile, run};
pub use error::ReconError;
pub use model::{InventoryRecord, ReconReport, ReconciledRow, Source, Status};
