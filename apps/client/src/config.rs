use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_API_BASE_URL: &str = "http://192.168.1.13:8088/api/v1";
const SESSION_DIR: &str = ".resumate";
const SESSION_FILE_NAME: &str = "storage.json";

/// Client configuration loaded from environment variables.
/// Every field has a default; CLI flags may override after loading.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub export_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let session_file = match std::env::var("SESSION_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_session_file()?,
        };

        let export_dir = std::env::var("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir());

        let config = Config {
            api_base_url,
            session_file,
            export_dir,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the base URL (from `--base-url`) and re-validates.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Result<Self> {
        if let Some(url) = base_url {
            self.api_base_url = url;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            bail!("API_BASE_URL must not be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("API_BASE_URL must start with http:// or https:// (got '{url}')");
        }
        Ok(())
    }
}

fn default_session_file() -> Result<PathBuf> {
    let home = home::home_dir()
        .context("Home directory not found; set SESSION_FILE to choose a session location")?;
    Ok(home.join(SESSION_DIR).join(SESSION_FILE_NAME))
}
