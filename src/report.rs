use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
	pub started_at: String,
	pub finished_at: String,
	pub duration_ms: u128,
	pub records_total: usize,
	pub records_created: usize,
	pub records_skipped: usize,
	pub records_failed: usize,
	pub records: Vec<RecordReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordReport {
	pub position: usize,
	pub scientific_name: Option<String>,
	pub outcome: Outcome,
	pub status: Option<u16>,
	pub images: usize,
	pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
	Created,
	Skipped,
	Failed,
}

pub fn print_human_report(report: &RunReport) {
	println!("Seed run summary:");
	println!(
		"  records: {} total, {} created, {} skipped, {} failed",
		report.records_total,
		report.records_created,
		report.records_skipped,
		report.records_failed
	);
	println!("  duration_ms: {}", report.duration_ms);

	for record in &report.records {
		let label = match record.outcome {
			Outcome::Created => continue,
			Outcome::Skipped => "SKIP",
			Outcome::Failed => "FAIL",
		};
		println!(
			"  {label} plant {} ({}) {}",
			record.position,
			record.scientific_name.as_deref().unwrap_or("unknown"),
			record.detail.as_deref().unwrap_or("unknown failure")
		);
	}
}

pub fn write_json_report(path: &Path, report: &RunReport) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("creating report directory {}", parent.display()))?;
	}
	let raw = serde_json::to_string_pretty(report).context("serializing report json")?;
	fs::write(path, format!("{raw}\n"))
		.with_context(|| format!("writing report file {}", path.display()))?;
	Ok(())
}
