use crate::errors::{SidekickError, SidekickResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

/// Default endpoint of the chat backend. Overridable via the config file
/// or the SIDEKICK_CHAT_URL environment variable.
pub const DEFAULT_CHAT_URL: &str = "http://localhost:5001/chat";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub chat_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat_url: DEFAULT_CHAT_URL.to_string(),
            request_timeout_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> SidekickResult<()> {
    let config_path = get_config_path()?;

    let mut config = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| SidekickError::config_error(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&config_str)
            .map_err(|e| SidekickError::config_error(format!("Failed to parse config: {}", e)))?
    } else {
        // First run: write the defaults so the file is there to edit
        let config = Config::default();

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            SidekickError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| SidekickError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| SidekickError::config_error(format!("Failed to write config file: {}", e)))?;

        config
    };

    // Env override wins over the file
    if let Ok(url) = env::var("SIDEKICK_CHAT_URL") {
        config.chat_url = url;
    }

    validate_config(&config)?;

    *CONFIG.write().unwrap() = config;

    Ok(())
}

fn get_config_path() -> SidekickResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| SidekickError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("sidekick").join("config.json"))
}

fn validate_config(config: &Config) -> SidekickResult<()> {
    if config.chat_url.is_empty() {
        return Err(SidekickError::config_error("chat_url is required"));
    }

    if !config.chat_url.starts_with("http://") && !config.chat_url.starts_with("https://") {
        return Err(SidekickError::config_error(
            "chat_url must be an http(s) URL",
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(SidekickError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}
