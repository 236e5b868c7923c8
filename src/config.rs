// src/config.rs

use crate::errors::{SeederError, SeederResult};
use reqwest::Url;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3004/api/listings";
pub const DEFAULT_CATEGORIES_PATH: &str = "public/categories.json";
pub const DEFAULT_LISTINGS_PATH: &str = "public/listings.json";

const ENV_API_URL: &str = "SEEDER_API_URL";
const ENV_CATEGORIES_PATH: &str = "SEEDER_CATEGORIES_PATH";
const ENV_LISTINGS_PATH: &str = "SEEDER_LISTINGS_PATH";
const ENV_DRY_RUN: &str = "SEEDER_DRY_RUN";
const ENV_TIMEOUT_SECS: &str = "SEEDER_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub categories_path: PathBuf,
    pub listings_path: PathBuf,
    pub dry_run: bool,
    /// `None` keeps the HTTP client's own default.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            categories_path: PathBuf::from(DEFAULT_CATEGORIES_PATH),
            listings_path: PathBuf::from(DEFAULT_LISTINGS_PATH),
            dry_run: false,
            request_timeout: None,
        }
    }
}

impl Config {
    /// Build the run configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first, if there is one.
    ///
    /// # Environment Variables
    ///
    /// * `SEEDER_API_URL` - listings endpoint (default: `http://localhost:3004/api/listings`)
    /// * `SEEDER_CATEGORIES_PATH` - taxonomy file (default: `public/categories.json`)
    /// * `SEEDER_LISTINGS_PATH` - existing listings file (default: `public/listings.json`)
    /// * `SEEDER_DRY_RUN` - set to "true" to print the plan without posting
    /// * `SEEDER_TIMEOUT_SECS` - per-request timeout in seconds
    pub fn from_env() -> SeederResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> SeederResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_API_URL) {
            config.api_url = parse_api_url(&raw)?;
        }

        if let Some(path) = lookup(ENV_CATEGORIES_PATH) {
            config.categories_path = PathBuf::from(path);
        }

        if let Some(path) = lookup(ENV_LISTINGS_PATH) {
            config.listings_path = PathBuf::from(path);
        }

        config.dry_run = lookup(ENV_DRY_RUN)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SeederError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse_api_url(raw: &str) -> SeederResult<String> {
    let raw = raw.trim();
    let url = Url::parse(raw)
        .map_err(|e| SeederError::Config(format!("{ENV_API_URL} is not a valid URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(SeederError::Config(format!(
            "{ENV_API_URL} must use http or https, got {other}"
        ))),
    }
}
