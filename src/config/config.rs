use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{API_URL_ENV, CONFIG_FILE, DEFAULT_API_URL, TOKEN_ENV};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub token: Option<String>,
    pub user_id: Option<i64>,
    pub api_url: Option<String>,
}

fn config_path() -> PathBuf {
    let home_dir = dirs::home_dir().expect("Could not find home directory");
    home_dir.join(CONFIG_FILE)
}

pub fn load_config() -> Config {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Config {
    if path.exists() {
        let config_str = fs::read_to_string(path).expect("Failed to read config file");
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;

    Ok(())
}

pub fn get_token() -> Result<String, Box<dyn std::error::Error>> {
    // First check environment variable
    if let Ok(token) = env::var(TOKEN_ENV) {
        return Ok(token);
    }

    // Then check config file
    let config = load_config();
    if let Some(token) = config.token {
        return Ok(token);
    }

    Err("No session token found. Set TASKHUB_TOKEN or run 'taskhub auth login'.".into())
}

pub fn get_user_id() -> Option<i64> {
    load_config().user_id
}

pub fn get_api_url() -> String {
    if let Ok(url) = env::var(API_URL_ENV) {
        return url;
    }

    load_config()
        .api_url
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            token: Some("abc123".to_string()),
            user_id: Some(7),
            api_url: Some("http://localhost:8080/api".to_string()),
        };
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path);
        assert_eq!(loaded.token.as_deref(), Some("abc123"));
        assert_eq!(loaded.user_id, Some(7));
        assert_eq!(loaded.api_url.as_deref(), Some("http://localhost:8080/api"));
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let loaded = load_config_from(&path);
        assert!(loaded.token.is_none());
        assert!(loaded.user_id.is_none());
        assert!(loaded.api_url.is_none());
    }

    #[test]
    fn test_corrupt_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{not json").unwrap();

        let loaded = load_config_from(&path);
        assert!(loaded.token.is_none());
    }
}
