use anyhow::{Context, Result, bail};
use rust_dotenv::dotenv::DotEnv;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct ApiCfg {
	base_url: String,
	token: String,
	username: String,
	password: String,
	pictures_dir: String,
	timeout_ms: u64,
}

impl ApiCfg {
	pub fn from_env(_env: &DotEnv) -> Result<Self> {
		let dotenv = DotEnv::new("");

		// DotEnv has already populated std::env; pull from there.
		let base_url = dotenv
			.get_var("PUBLIC_API_URL".to_string())
			.unwrap_or(String::from("http://localhost:3000/api"));

		let token = dotenv
			.get_var("API_AUTH_TOKEN".to_string())
			.unwrap_or_default();

		let username = dotenv.get_var("API_USER".to_string()).unwrap_or_default();

		let password = dotenv
			.get_var("API_PASSWORD".to_string())
			.unwrap_or_default();

		let pictures_dir = dotenv
			.get_var("PICTURES_DIR".to_string())
			.unwrap_or(String::from("catalog/pictures"));

		let timeout_ms = match dotenv.get_var("API_TIMEOUT_MS".to_string()) {
			Some(raw) => raw
				.parse()
				.with_context(|| format!("API_TIMEOUT_MS is not a number: {raw}"))?,
			None => DEFAULT_TIMEOUT_MS,
		};

		Ok(Self {
			base_url,
			token,
			username,
			password,
			pictures_dir,
			timeout_ms,
		})
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn password(&self) -> &str {
		&self.password
	}

	pub fn pictures_dir(&self) -> &str {
		&self.pictures_dir
	}

	pub fn timeout_ms(&self) -> u64 {
		self.timeout_ms
	}

	pub fn plants_url(&self) -> String {
		format!("{}/plants", self.base_url.trim_end_matches('/'))
	}

	pub fn login_url(&self) -> String {
		format!("{}/auth/login", self.base_url.trim_end_matches('/'))
	}

	pub fn require_token(&self) -> Result<&str> {
		if self.token.is_empty() {
			bail!("API_AUTH_TOKEN is not set; run `florakit login` to obtain one");
		}
		Ok(&self.token)
	}
}
