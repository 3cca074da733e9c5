//! Navigation capability and route building

use std::cell::RefCell;

use crate::config::RoutesConfig;
use crate::notification::CampaignId;

/// Side-effecting navigation, fire-and-forget from the dropdown's view
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Route table for navigation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    campaign_prefix: String,
    view_all: String,
}

impl Routes {
    pub fn new(campaign_prefix: impl Into<String>, view_all: impl Into<String>) -> Self {
        let campaign_prefix: String = campaign_prefix.into();
        Self {
            campaign_prefix: campaign_prefix.trim_end_matches('/').to_string(),
            view_all: view_all.into(),
        }
    }

    pub fn from_config(config: &RoutesConfig) -> Self {
        Self::new(config.campaign_prefix.as_str(), config.view_all.as_str())
    }

    pub fn campaign_path(&self, campaign_id: &CampaignId) -> String {
        format!("{}/{}", self.campaign_prefix, campaign_id)
    }

    pub fn view_all_path(&self) -> &str {
        &self.view_all
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::from_config(&RoutesConfig::default())
    }
}

/// Navigator for the terminal host: remembers the route it was last sent to
#[derive(Debug, Default)]
pub struct RouteNavigator {
    current: RefCell<Option<String>>,
}

impl RouteNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> Option<String> {
        self.current.borrow().clone()
    }
}

impl Navigator for RouteNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(debug_assertions)]
        log::debug!("Navigating to {}", path);

        *self.current.borrow_mut() = Some(path.to_string());
    }
}
