//! check_company_ids CLI tool
//!
//! Reconciles the Bluetooth SIG company identifier registry against the
//! bluetooth-numbers-database mirror. Both files are expected to be
//! pre-downloaded:
//!
//! - <https://bitbucket.org/bluetooth-SIG/public/src/main/assigned_numbers/company_identifiers/company_identifiers.yaml>
//! - <https://github.com/NordicSemiconductor/bluetooth-numbers-database/blob/master/v1/company_ids.json>
//!
//! Prints one line per name mismatch, then every registry entry the mirror
//! is missing as a JSON fragment ready to paste into company_ids.json.

use anyhow::Result;
use clap::Parser;
use company_ids_check::company_ids::{JSON_DATABASE_FILE, YAML_REGISTRY_FILE};
use company_ids_check::{
    find_mismatches, fragment_line, load_json_database, load_yaml_registry, name_by_code,
    new_entries,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "check_company_ids")]
#[command(about = "Reconcile the Bluetooth SIG registry with the bluetooth-numbers-database mirror")]
struct Cli {
    /// Path to the SIG registry YAML
    #[arg(long, default_value = YAML_REGISTRY_FILE)]
    yaml: PathBuf,
    /// Path to the mirror database JSON
    #[arg(long, default_value = JSON_DATABASE_FILE)]
    json: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let registry = load_yaml_registry(&cli.yaml)?;
    let mirror = load_json_database(&cli.json)?;

    let registry_names = name_by_code(&registry);
    for mismatch in find_mismatches(&mirror, &registry_names) {
        println!("{}", mismatch);
    }

    for record in new_entries(&registry, mirror.len()) {
        println!("{}", fragment_line(record));
    }

    Ok(())
}
