//! company-ids-check - Bluetooth Company Identifier reconciliation
//!
//! Compares the Bluetooth SIG assigned-numbers registry (YAML) against the
//! Nordic bluetooth-numbers-database mirror (JSON), reporting entries whose
//! names disagree and printing registry entries the mirror does not carry yet.

/// Data model and file loaders for the two identifier sources
pub mod company_ids;

/// Mismatch detection and new-entry reporting
pub mod reconcile;

pub use company_ids::{load_json_database, load_yaml_registry, CompanyRecord};
pub use reconcile::{find_mismatches, fragment_line, name_by_code, new_entries, Mismatch};
