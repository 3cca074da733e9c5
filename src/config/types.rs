// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Store section: where the notification file lives
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Route section: navigation targets
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_campaign_prefix")]
    pub campaign_prefix: String,
    #[serde(default = "default_view_all")]
    pub view_all: String,
}

fn default_campaign_prefix() -> String {
    "/campaigns".to_string()
}

fn default_view_all() -> String {
    "/notifications".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        RoutesConfig {
            campaign_prefix: default_campaign_prefix(),
            view_all: default_view_all(),
        }
    }
}

/// Dropdown section: panel size limits
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DropdownConfig {
    #[serde(default = "default_width")]
    pub width: u16,
    #[serde(default = "default_max_height")]
    pub max_height: u16,
}

fn default_width() -> u16 {
    56
}

fn default_max_height() -> u16 {
    20
}

impl Default for DropdownConfig {
    fn default() -> Self {
        DropdownConfig {
            width: default_width(),
            max_height: default_max_height(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub dropdown: DropdownConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
