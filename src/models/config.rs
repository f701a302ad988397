//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::search::DateStyle;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Outbound endpoint the search form sends travellers to.
    pub search_endpoint: String,
    /// Format of `checkin`/`checkout` in the outbound URL.
    #[serde(default)]
    pub date_style: DateStyle,
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}
