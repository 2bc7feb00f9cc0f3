pub mod models;
pub mod store;

use anyhow::{Context, Result};
use log::info;
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

pub use models::{Config, ProxyConfig, SettingsForm};
pub use store::{load_config, save_config, FileStore, KeyValueStore, MemoryStore, CONFIG_KEY};

/// Reads the proxy settings. A missing file means defaults.
pub fn load_proxy_config(config_file: &Path) -> Result<ProxyConfig> {
    if !config_file.exists() {
        info!(
            "No proxy config at {}, using defaults",
            config_file.display()
        );
        return Ok(ProxyConfig::default());
    }

    let mut file = File::open(config_file)
        .with_context(|| format!("Failed to open config file: {}", config_file.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

    let config: ProxyConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", config_file.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", config_file.display()))?;

    Ok(config)
}
