use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ApiCfg;
use crate::core::create_api_client;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
	username: &'a str,
	password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
	access_token: String,
}

pub async fn login(cfg: &ApiCfg, username: Option<String>, password: Option<String>) -> Result<()> {
	let username = username.unwrap_or_else(|| cfg.username().to_string());
	let password = password.unwrap_or_else(|| cfg.password().to_string());
	if username.is_empty() || password.is_empty() {
		bail!("credentials missing: pass --username/--password or set API_USER and API_PASSWORD");
	}

	let client = create_api_client(cfg.timeout_ms())?;
	let token = fetch_token(&client, &cfg.login_url(), &username, &password).await?;

	println!("{token}");
	eprintln!("set API_AUTH_TOKEN to this value to use it with `florakit seed`");
	Ok(())
}

pub async fn fetch_token(
	client: &Client,
	url: &str,
	username: &str,
	password: &str,
) -> Result<String> {
	let resp = client
		.post(url)
		.json(&LoginRequest { username, password })
		.send()
		.await
		.with_context(|| format!("request to {url} failed"))?;

	let status = resp.status();
	if !status.is_success() {
		bail!("login failed with status {status}");
	}

	let body: LoginResponse = resp.json().await.context("parsing login response")?;
	Ok(body.access_token)
}
