use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The `[default.portfolio]` table of Rocket.toml (or `ROCKET_PORTFOLIO`).
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub owner_name: String,
    pub tagline: String,
    pub contact_email: String,
    pub data_path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Portfolio".to_string(),
            owner_name: String::new(),
            tagline: String::new(),
            contact_email: String::new(),
            data_path: PathBuf::from("website/data/portfolio.json"),
        }
    }
}

impl SiteConfig {
    /// Pull the `portfolio` table out of a figment, falling back to defaults.
    pub fn from_figment(figment: &rocket::figment::Figment) -> Self {
        match figment.extract_inner::<SiteConfig>("portfolio") {
            Ok(cfg) => cfg,
            Err(e) => {
                if !e.missing() {
                    log::warn!("Invalid [portfolio] config, using defaults: {}", e);
                }
                SiteConfig::default()
            }
        }
    }
}
