use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use reqwest::Client;
use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::catalog::{CATALOG_PATH, load_catalog, validate_record};
use crate::config::ApiCfg;
use crate::core::create_api_client;
use crate::images::{IMAGES_PER_PLANT, collect_pool, pick_images};
use crate::report::{Outcome, RecordReport, RunReport, print_human_report, write_json_report};
use crate::submit::{SubmitError, submit_plant};

#[derive(Debug, Default, Clone)]
pub struct SeedOpts {
	pub dry_run: bool,
	pub fail_fast: bool,
	pub limit: Option<usize>,
	pub sample_seed: Option<u64>,
	pub report: Option<PathBuf>,
}

pub async fn run_seed(cfg: &ApiCfg, opts: SeedOpts) -> Result<RunReport> {
	let records = load_catalog(Path::new(CATALOG_PATH))?;
	let pool = collect_pool(Path::new(cfg.pictures_dir()))?;
	let client = create_api_client(cfg.timeout_ms())?;
	let token = if opts.dry_run {
		String::new()
	} else {
		cfg.require_token()?.to_string()
	};

	let mut rng: Box<dyn RngCore> = match opts.sample_seed {
		Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
		None => Box::new(rand::thread_rng()),
	};

	let started_at = OffsetDateTime::now_utc();
	let run_start = Instant::now();

	let entries = seed_records(
		&client,
		&cfg.plants_url(),
		&token,
		&records,
		&pool,
		&opts,
		rng.as_mut(),
	)
	.await;

	let report = RunReport {
		started_at: started_at.format(&Rfc3339)?,
		finished_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
		duration_ms: run_start.elapsed().as_millis(),
		records_total: entries.len(),
		records_created: count(&entries, Outcome::Created),
		records_skipped: count(&entries, Outcome::Skipped),
		records_failed: count(&entries, Outcome::Failed),
		records: entries,
	};

	print_human_report(&report);
	if let Some(path) = &opts.report {
		write_json_report(path, &report)?;
	}

	Ok(report)
}

/// One pass over the catalog in file order: validate, sample images, submit.
/// Failures are per-record; the loop only stops early on `fail_fast`.
async fn seed_records(
	client: &Client,
	url: &str,
	token: &str,
	records: &[Value],
	pool: &[PathBuf],
	opts: &SeedOpts,
	rng: &mut dyn RngCore,
) -> Vec<RecordReport> {
	let mut entries = Vec::new();

	for (idx, raw) in records.iter().enumerate() {
		let position = idx + 1;
		if let Some(limit) = opts.limit {
			if position > limit {
				break;
			}
		}

		let plant = match validate_record(raw) {
			Ok(plant) => plant,
			Err(e) => {
				eprintln!("skipped plant {position}: {e}");
				entries.push(RecordReport {
					position,
					scientific_name: raw
						.get("scientificName")
						.and_then(Value::as_str)
						.map(str::to_string),
					outcome: Outcome::Skipped,
					status: None,
					images: 0,
					detail: Some(e.to_string()),
				});
				continue;
			}
		};

		let images = pick_images(pool, IMAGES_PER_PLANT, rng);

		if opts.dry_run {
			println!(
				"DRY RUN: would submit plant {position} ({}) with {} images",
				plant.scientific_name,
				images.len()
			);
			entries.push(RecordReport {
				position,
				scientific_name: Some(plant.scientific_name),
				outcome: Outcome::Skipped,
				status: None,
				images: images.len(),
				detail: Some("dry run".to_string()),
			});
			continue;
		}

		match submit_plant(client, url, token, &plant, &images).await {
			Ok((status, body)) => {
				println!(
					"created plant {position} ({}): {} {}",
					plant.scientific_name,
					status.as_u16(),
					body
				);
				entries.push(RecordReport {
					position,
					scientific_name: Some(plant.scientific_name),
					outcome: Outcome::Created,
					status: Some(status.as_u16()),
					images: images.len(),
					detail: None,
				});
			}
			Err(e) => {
				eprintln!(
					"error submitting plant {position} ({}): {e}",
					plant.scientific_name
				);
				let status = match &e {
					SubmitError::Rejected { status, .. } => Some(status.as_u16()),
					_ => None,
				};
				entries.push(RecordReport {
					position,
					scientific_name: Some(plant.scientific_name),
					outcome: Outcome::Failed,
					status,
					images: images.len(),
					detail: Some(e.to_string()),
				});
				if opts.fail_fast {
					break;
				}
			}
		}
	}

	entries
}

fn count(entries: &[RecordReport], outcome: Outcome) -> usize {
	entries.iter().filter(|e| e.outcome == outcome).count()
}
