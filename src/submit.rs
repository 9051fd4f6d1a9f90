use std::path::{Path, PathBuf};
use std::{fs, io};

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::catalog::PlantRecord;
use crate::encode::encode_fields;

pub const IMAGE_FIELD: &str = "images";

// The receiving API stores whatever content-type the part declares; parts
// always declare jpeg, even for .png files.
pub const IMAGE_MIME: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum SubmitError {
	#[error("reading image {}", .path.display())]
	Image {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("rejected with status {status}: {body}")]
	Rejected { status: StatusCode, body: String },
}

/// Sends exactly one POST for the record; no retry. Image bytes are scoped
/// to this call and released before it returns, on every exit path.
pub async fn submit_plant(
	client: &Client,
	url: &str,
	token: &str,
	plant: &PlantRecord,
	images: &[PathBuf],
) -> Result<(StatusCode, Value), SubmitError> {
	let mut form = Form::new();
	for (key, value) in encode_fields(plant) {
		form = form.text(key, value);
	}
	for path in images {
		form = form.part(IMAGE_FIELD, image_part(path)?);
	}

	debug!("POST {} ({} images)", url, images.len());
	let resp = client
		.post(url)
		.bearer_auth(token)
		.multipart(form)
		.send()
		.await?;

	let status = resp.status();
	if !status.is_success() {
		let body = resp.text().await.unwrap_or_default();
		return Err(SubmitError::Rejected { status, body });
	}

	let body = resp.json::<Value>().await?;
	Ok((status, body))
}

fn image_part(path: &Path) -> Result<Part, SubmitError> {
	let bytes = fs::read(path).map_err(|source| SubmitError::Image {
		path: path.to_path_buf(),
		source,
	})?;
	let file_name = path
		.file_name()
		.map(|n| n.to_string_lossy().into_owned())
		.unwrap_or_else(|| "image".to_string());
	let part = Part::bytes(bytes).file_name(file_name).mime_str(IMAGE_MIME)?;
	Ok(part)
}
