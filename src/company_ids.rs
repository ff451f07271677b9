//! Loaders for the two company identifier sources
//!
//! The Bluetooth SIG registry is a YAML document with the assignments under a
//! top-level `company_identifiers` key, newest first. The
//! bluetooth-numbers-database mirror is a bare JSON array, oldest first.
//! Both files are read in full; a missing file or malformed document aborts
//! the run.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Default registry filename in the working directory
pub const YAML_REGISTRY_FILE: &str = "company_identifiers.yaml";
/// Default mirror filename in the working directory
pub const JSON_DATABASE_FILE: &str = "company_ids.json";

/// One company identifier assignment: a 16-bit code and the company name.
///
/// Deserializes from the mirror's field names (`code`/`name`); the registry's
/// `value` key is handled by an alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyRecord {
    #[serde(alias = "value")]
    pub code: u16,
    pub name: String,
}

/// Registry document wrapper: `company_identifiers:` sequence
#[derive(Debug, Deserialize)]
struct RegistryDoc {
    company_identifiers: Vec<CompanyRecord>,
}

/// Load the SIG registry YAML. Returns the records in file order
/// (descending by code per upstream convention, not verified here).
pub fn load_yaml_registry(path: &Path) -> Result<Vec<CompanyRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry: {}", path.display()))?;

    let doc: RegistryDoc = serde_yaml::from_str(&text)
        .with_context(|| format!("Failed to parse registry YAML: {}", path.display()))?;

    Ok(doc.company_identifiers)
}

/// Load the mirror JSON array in file order (ascending by recency).
pub fn load_json_database(path: &Path) -> Result<Vec<CompanyRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read mirror database: {}", path.display()))?;

    let records: Vec<CompanyRecord> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse mirror JSON: {}", path.display()))?;

    Ok(records)
}
