use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::display;

pub const CATALOG_PATH: &str = "catalog/plants.json";

pub const REQUIRED_FIELDS: [&str; 7] = [
	"scientificName",
	"commonNames",
	"description",
	"habitat",
	"distribution",
	"medicinalUses",
	"chemicals",
];

pub const LIST_FIELDS: [&str; 4] = ["commonNames", "distribution", "medicinalUses", "chemicals"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
	pub scientific_name: String,
	pub common_names: Vec<String>,
	pub description: String,
	pub habitat: String,
	pub distribution: Vec<String>,
	pub medicinal_uses: Vec<String>,
	pub chemicals: Vec<ChemicalRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChemicalRecord {
	pub name: String,
	pub description: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	#[error("missing required field {0}")]
	Missing(&'static str),
	#[error("field {0} must be a list")]
	NotAList(&'static str),
	#[error("record is not an object")]
	NotAnObject,
	#[error("malformed record: {0}")]
	Malformed(String),
}

pub fn load_catalog(path: &Path) -> Result<Vec<Value>> {
	let raw = fs::read_to_string(path).with_context(|| format!("reading {}", display(path)))?;
	let records: Vec<Value> =
		serde_json::from_str(&raw).with_context(|| format!("parsing {}", display(path)))?;
	Ok(records)
}

/// Checks the required fields in declaration order; the first failure wins.
/// A field holding an empty value (null, "", [] or {}) counts as missing.
pub fn validate_record(raw: &Value) -> Result<PlantRecord, ValidationError> {
	let obj = raw.as_object().ok_or(ValidationError::NotAnObject)?;

	for field in REQUIRED_FIELDS {
		match obj.get(field) {
			None => return Err(ValidationError::Missing(field)),
			Some(value) if is_empty_value(value) => return Err(ValidationError::Missing(field)),
			Some(_) => {}
		}
	}

	for field in LIST_FIELDS {
		if let Some(value) = obj.get(field) {
			if !value.is_array() {
				return Err(ValidationError::NotAList(field));
			}
		}
	}

	serde_json::from_value(raw.clone()).map_err(|e| ValidationError::Malformed(e.to_string()))
}

fn is_empty_value(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.is_empty(),
		Value::Array(a) => a.is_empty(),
		Value::Object(m) => m.is_empty(),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn aloe() -> Value {
		json!({
			"scientificName": "Aloe vera",
			"commonNames": ["Aloe", "Burn Plant"],
			"description": "A succulent plant species of the genus Aloe.",
			"habitat": "Tropical climates worldwide.",
			"distribution": ["Africa", "Asia"],
			"medicinalUses": ["Skin treatment"],
			"chemicals": [
				{"name": "Aloin", "description": "A bitter compound."}
			]
		})
	}

	#[test]
	fn valid_record_converts_to_typed_plant() {
		let plant = validate_record(&aloe()).expect("record should validate");
		assert_eq!(plant.scientific_name, "Aloe vera");
		assert_eq!(plant.common_names.len(), 2);
		assert_eq!(plant.chemicals[0].name, "Aloin");
	}

	#[test]
	fn each_missing_field_is_named() {
		for field in REQUIRED_FIELDS {
			let mut record = aloe();
			record
				.as_object_mut()
				.expect("fixture is an object")
				.remove(field);
			assert_eq!(validate_record(&record), Err(ValidationError::Missing(field)));
		}
	}

	#[test]
	fn empty_string_counts_as_missing() {
		let mut record = aloe();
		record["habitat"] = json!("");
		assert_eq!(
			validate_record(&record),
			Err(ValidationError::Missing("habitat"))
		);
	}

	#[test]
	fn empty_list_counts_as_missing() {
		let mut record = aloe();
		record["chemicals"] = json!([]);
		assert_eq!(
			validate_record(&record),
			Err(ValidationError::Missing("chemicals"))
		);
	}

	#[test]
	fn scalar_list_field_is_rejected() {
		let mut record = aloe();
		record["commonNames"] = json!("Aloe");
		assert_eq!(
			validate_record(&record),
			Err(ValidationError::NotAList("commonNames"))
		);
	}

	#[test]
	fn malformed_chemical_is_rejected() {
		let mut record = aloe();
		record["chemicals"] = json!([{"name": "Aloin"}]);
		assert!(matches!(
			validate_record(&record),
			Err(ValidationError::Malformed(_))
		));
	}

	#[test]
	fn non_object_record_is_rejected() {
		assert_eq!(
			validate_record(&json!("Aloe vera")),
			Err(ValidationError::NotAnObject)
		);
	}
}
