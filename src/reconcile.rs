//! Reconciliation between the registry and the mirror
//!
//! Mismatch detection walks the mirror entry by entry against a code->name
//! map built from the registry. The new-entry count is a heuristic: codes are
//! assigned sequentially from 0, so `newest_code - mirror_len + 2`
//! approximates how many leading registry entries the mirror is missing.

use crate::company_ids::CompanyRecord;
use std::collections::HashMap;
use std::fmt;

/// Sentinel suffix appended to the mirror name when the registry has no
/// entry for a code, guaranteeing a reported mismatch.
const NOT_FOUND_SUFFIX: &str = " NOT FOUND";

/// A mirror entry whose name disagrees with the registry (or whose code the
/// registry does not have at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub code: u16,
    pub json_name: String,
    pub yaml_name: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:#x}): {} != {}",
            self.code, self.code, self.json_name, self.yaml_name
        )
    }
}

/// Build the registry's code->name map. Later entries win on duplicate
/// codes, matching file iteration order.
pub fn name_by_code(registry: &[CompanyRecord]) -> HashMap<u16, &str> {
    let mut map = HashMap::with_capacity(registry.len());
    for record in registry {
        map.insert(record.code, record.name.as_str());
    }
    map
}

/// Compare every mirror entry against the registry map.
///
/// Codes absent from the registry get the `NOT FOUND` sentinel as their
/// registry-side name, which can never equal the mirror name, so absence
/// always surfaces as exactly one mismatch.
pub fn find_mismatches(mirror: &[CompanyRecord], registry: &HashMap<u16, &str>) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for entry in mirror {
        let registry_name = match registry.get(&entry.code) {
            Some(name) => (*name).to_string(),
            None => format!("{}{}", entry.name, NOT_FOUND_SUFFIX),
        };
        if entry.name != registry_name {
            mismatches.push(Mismatch {
                code: entry.code,
                json_name: entry.name.clone(),
                yaml_name: registry_name,
            });
        }
    }
    mismatches
}

/// How many leading registry entries the mirror is expected to be missing.
/// Non-positive means the mirror is up to date (or ahead of the heuristic).
pub fn new_entry_count(newest_registry_code: u16, mirror_len: usize) -> i64 {
    newest_registry_code as i64 - mirror_len as i64 + 2
}

/// The registry entries not yet mirrored, oldest first (registry order is
/// newest first, so the leading slice is reversed). The count is clamped to
/// the entries that actually exist; an empty registry yields nothing.
pub fn new_entries(registry: &[CompanyRecord], mirror_len: usize) -> Vec<&CompanyRecord> {
    let newest = match registry.first() {
        Some(record) => record.code,
        None => return Vec::new(),
    };

    let count = new_entry_count(newest, mirror_len);
    if count <= 0 {
        return Vec::new();
    }

    let take = (count as usize).min(registry.len());
    registry[..take].iter().rev().collect()
}

/// Render one new entry as a mirror-database fragment, ready to paste into
/// `company_ids.json`.
pub fn fragment_line(record: &CompanyRecord) -> String {
    format!(
        "    {{ \"code\": {}, \"name\": \"{}\" }},",
        record.code, record.name
    )
}
