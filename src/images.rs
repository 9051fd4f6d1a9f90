use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const IMAGES_PER_PLANT: usize = 4;

/// Non-recursive listing of the pictures directory, filtered to image files
/// and sorted for a stable pool order. A missing directory is an empty pool.
pub fn collect_pool(dir: &Path) -> Result<Vec<PathBuf>> {
	if !dir.exists() {
		warn!(
			"pictures directory {} does not exist, seeding without images",
			dir.display()
		);
		return Ok(Vec::new());
	}

	let mut pool: Vec<PathBuf> = WalkDir::new(dir)
		.max_depth(1)
		.follow_links(true)
		.into_iter()
		.filter_map(|e| e.ok())
		.filter(|e| e.file_type().is_file())
		.map(|e| e.into_path())
		.filter(|p| is_image(p))
		.collect();

	pool.sort();
	debug!("collected {} images from {}", pool.len(), dir.display());
	Ok(pool)
}

fn is_image(path: &Path) -> bool {
	matches!(
		path.extension().and_then(|s| s.to_str()),
		Some("jpg") | Some("png")
	)
}

/// Uniform sample without replacement of min(count, |pool|) distinct paths.
pub fn pick_images<R: Rng + ?Sized>(pool: &[PathBuf], count: usize, rng: &mut R) -> Vec<PathBuf> {
	pool.choose_multiple(rng, count).cloned().collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::collections::HashSet;
	use std::fs;

	fn pool_of(n: usize) -> Vec<PathBuf> {
		(0..n).map(|i| PathBuf::from(format!("{i}.jpg"))).collect()
	}

	#[test]
	fn picks_requested_count_of_distinct_images() {
		let pool = pool_of(10);
		let mut rng = rand::thread_rng();
		let picked = pick_images(&pool, IMAGES_PER_PLANT, &mut rng);

		assert_eq!(picked.len(), 4);
		let distinct: HashSet<_> = picked.iter().collect();
		assert_eq!(distinct.len(), 4);
		assert!(picked.iter().all(|p| pool.contains(p)));
	}

	#[test]
	fn short_pool_returns_everything() {
		let pool = pool_of(2);
		let mut rng = rand::thread_rng();
		let picked = pick_images(&pool, IMAGES_PER_PLANT, &mut rng);
		assert_eq!(picked.len(), 2);
	}

	#[test]
	fn empty_pool_returns_nothing() {
		let mut rng = rand::thread_rng();
		assert!(pick_images(&[], IMAGES_PER_PLANT, &mut rng).is_empty());
	}

	#[test]
	fn seeded_sampling_is_reproducible() {
		let pool = pool_of(20);
		let first = pick_images(&pool, IMAGES_PER_PLANT, &mut StdRng::seed_from_u64(7));
		let second = pick_images(&pool, IMAGES_PER_PLANT, &mut StdRng::seed_from_u64(7));
		assert_eq!(first, second);
	}

	#[test]
	fn pool_is_filtered_to_images() {
		let dir = tempfile::tempdir().expect("creating temp dir");
		fs::write(dir.path().join("a.jpg"), b"x").expect("writing a.jpg");
		fs::write(dir.path().join("b.png"), b"x").expect("writing b.png");
		fs::write(dir.path().join("notes.txt"), b"x").expect("writing notes.txt");

		let pool = collect_pool(dir.path()).expect("collecting pool");
		let names: Vec<_> = pool
			.iter()
			.filter_map(|p| p.file_name().and_then(|n| n.to_str()))
			.collect();
		assert_eq!(names, vec!["a.jpg", "b.png"]);
	}

	#[test]
	fn missing_directory_is_an_empty_pool() {
		let pool = collect_pool(Path::new("no/such/directory")).expect("collecting pool");
		assert!(pool.is_empty());
	}
}
