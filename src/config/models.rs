use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use validator::Validate;

use crate::api::ZoneAccess;

pub const DEFAULT_PER_PAGE: u32 = 50;
pub const DEFAULT_UPSTREAM: &str = "https://api.cloudflare.com/client/v4";

/// Settings persisted by the browser side of the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub api_key: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Zone ID cannot be empty"))]
    pub zone_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Domain cannot be empty"))]
    pub domain: String,

    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, message = "Records per page must be greater than 0"))]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            zone_id: String::new(),
            domain: String::new(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Config {
    /// True when the three fields needed to reach the provider are set.
    pub fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.zone_id.is_empty() && !self.domain.is_empty()
    }

    pub fn access(&self) -> ZoneAccess {
        ZoneAccess {
            api_key: self.api_key.clone(),
            zone_id: self.zone_id.clone(),
        }
    }

    pub fn apply(&mut self, form: &SettingsForm) {
        self.domain = form.domain.trim().to_string();
        self.zone_id = form.zone_id.trim().to_string();
        self.api_key = form.api_key.trim().to_string();
        if self.per_page == 0 {
            self.per_page = DEFAULT_PER_PAGE;
        }
    }
}

/// Values edited in the settings dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub domain: String,
    pub zone_id: String,
    pub api_key: String,
}

impl From<&Config> for SettingsForm {
    fn from(config: &Config) -> Self {
        Self {
            domain: config.domain.clone(),
            zone_id: config.zone_id.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

/// Settings of the proxy binary, read from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProxyConfig {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    #[serde(default = "default_upstream")]
    #[validate(url(message = "Upstream must be a valid URL"))]
    pub upstream: String,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn default_upstream() -> String {
    DEFAULT_UPSTREAM.to_string()
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            upstream: default_upstream(),
        }
    }
}
