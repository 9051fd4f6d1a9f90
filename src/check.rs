use std::path::Path;

use anyhow::Result;

use crate::catalog::{CATALOG_PATH, load_catalog, validate_record};

/// Offline validation pass over the catalog; no network access.
pub fn check() -> Result<()> {
	let records = load_catalog(Path::new(CATALOG_PATH))?;

	if records.is_empty() {
		println!("No records in {}", CATALOG_PATH);
		return Ok(());
	}

	let mut submittable = 0;
	for (idx, raw) in records.iter().enumerate() {
		match validate_record(raw) {
			Ok(plant) => {
				submittable += 1;
				println!("ok {} {}", idx + 1, plant.scientific_name);
			}
			Err(e) => println!("INVALID {} ({e})", idx + 1),
		}
	}

	println!("{submittable} of {} records submittable", records.len());
	Ok(())
}
