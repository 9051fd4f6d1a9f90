use crate::catalog::PlantRecord;

/// Flattens a plant into the form pairs the catalog API expects: scalar
/// fields once, list fields as repeated keys, chemicals bracket-indexed
/// (`chemicals[0][name]`, `chemicals[0][description]`, ...).
pub fn encode_fields(plant: &PlantRecord) -> Vec<(String, String)> {
	let mut pairs = Vec::new();

	pairs.push(("scientificName".to_string(), plant.scientific_name.clone()));
	for name in &plant.common_names {
		pairs.push(("commonNames".to_string(), name.clone()));
	}
	pairs.push(("description".to_string(), plant.description.clone()));
	pairs.push(("habitat".to_string(), plant.habitat.clone()));
	for region in &plant.distribution {
		pairs.push(("distribution".to_string(), region.clone()));
	}
	for usage in &plant.medicinal_uses {
		pairs.push(("medicinalUses".to_string(), usage.clone()));
	}
	for (i, chemical) in plant.chemicals.iter().enumerate() {
		pairs.push((format!("chemicals[{i}][name]"), chemical.name.clone()));
		pairs.push((
			format!("chemicals[{i}][description]"),
			chemical.description.clone(),
		));
	}

	pairs
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::ChemicalRecord;

	#[test]
	fn minimal_record_encodes_exact_pairs() {
		let plant = PlantRecord {
			scientific_name: "Aloe vera".to_string(),
			common_names: vec!["Aloe".to_string()],
			description: "d".to_string(),
			habitat: "h".to_string(),
			distribution: vec!["Africa".to_string()],
			medicinal_uses: vec!["Skin treatment".to_string()],
			chemicals: vec![ChemicalRecord {
				name: "Aloin".to_string(),
				description: "x".to_string(),
			}],
		};

		let pairs = encode_fields(&plant);
		let expected: Vec<(String, String)> = [
			("scientificName", "Aloe vera"),
			("commonNames", "Aloe"),
			("description", "d"),
			("habitat", "h"),
			("distribution", "Africa"),
			("medicinalUses", "Skin treatment"),
			("chemicals[0][name]", "Aloin"),
			("chemicals[0][description]", "x"),
		]
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect();

		assert_eq!(pairs, expected);
	}

	#[test]
	fn list_entries_repeat_their_key() {
		let plant = PlantRecord {
			scientific_name: "Mentha spicata".to_string(),
			common_names: vec!["Spearmint".to_string(), "Garden Mint".to_string()],
			description: "d".to_string(),
			habitat: "h".to_string(),
			distribution: vec!["Europe".to_string(), "Asia".to_string()],
			medicinal_uses: vec!["Digestive aid".to_string()],
			chemicals: vec![
				ChemicalRecord {
					name: "Carvone".to_string(),
					description: "a".to_string(),
				},
				ChemicalRecord {
					name: "Limonene".to_string(),
					description: "b".to_string(),
				},
			],
		};

		let pairs = encode_fields(&plant);
		let common: Vec<&str> = pairs
			.iter()
			.filter(|(k, _)| k == "commonNames")
			.map(|(_, v)| v.as_str())
			.collect();
		assert_eq!(common, vec!["Spearmint", "Garden Mint"]);

		assert!(pairs.contains(&("chemicals[1][name]".to_string(), "Limonene".to_string())));
		assert!(pairs.contains(&("chemicals[1][description]".to_string(), "b".to_string())));
	}
}
