use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

pub fn create_api_client(timeout_ms: u64) -> Result<Client> {
	Client::builder()
		.timeout(Duration::from_millis(timeout_ms))
		.build()
		.context("building API client")
}

pub fn display(p: &Path) -> String {
	p.to_string_lossy().into_owned()
}
