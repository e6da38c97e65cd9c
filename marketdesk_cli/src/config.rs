use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime configuration, read from the environment (a `.env` file is
/// honored).
pub struct Config {
    /// Backend base URL, e.g. `https://api.example.com`.
    pub api_url: String,
    /// Base URL relative image paths are joined against. Empty leaves
    /// paths untouched.
    pub image_url: String,
    /// Where the staff session (token + profile) is persisted.
    pub session_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let api_url = std::env::var("MARKETDESK_API_URL")
            .context("MARKETDESK_API_URL must be set to the backend base URL")?;
        let image_url = std::env::var("MARKETDESK_IMAGE_URL").unwrap_or_default();
        let session_path = std::env::var("MARKETDESK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_path());
        Ok(Config {
            api_url,
            image_url,
            session_path,
        })
    }
}

fn default_session_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".marketdesk").join("session.json"),
        None => PathBuf::from(".marketdesk-session.json"),
    }
}
