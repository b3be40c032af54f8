use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tenbis: TenbisConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Delivery location configuration
///
/// The 10bis search API scopes every query to a delivery address, so the
/// account id and address identifiers are required for the bot to run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    /// 10bis account identifier sent as the `id` query parameter
    pub user_id: String,
    pub city_id: String,
    pub street_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub house_number: String,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// 10bis search API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TenbisConfig {
    /// Search endpoint URL
    #[serde(default = "default_search_url")]
    pub url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for TenbisConfig {
    fn default() -> Self {
        Self {
            url: default_search_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_search_url() -> String {
    "https://www.10bis.co.il/Restaurants/SearchRestaurants/".to_string()
}

fn default_timeout() -> u32 {
    10
}

/// Search result cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Entry time-to-live in hours (default: 24)
    #[serde(default = "default_cache_ttl_hours")]
    pub ttl_hours: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            ttl_hours: default_cache_ttl_hours(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_ttl_hours() -> u64 {
    24
}

/// Sanitized config for API responses (account id redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub location: SanitizedLocationConfig,
    pub server: ServerConfig,
    pub tenbis: TenbisConfig,
    pub cache: CacheConfig,
}

/// Sanitized location config (account id hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedLocationConfig {
    pub user_id_configured: bool,
    pub city_id: String,
    pub street_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub house_number: String,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            location: SanitizedLocationConfig {
                user_id_configured: !config.location.user_id.is_empty(),
                city_id: config.location.city_id.clone(),
                street_id: config.location.street_id.clone(),
                latitude: config.location.latitude,
                longitude: config.location.longitude,
                house_number: config.location.house_number.clone(),
            },
            server: config.server.clone(),
            tenbis: config.tenbis.clone(),
            cache: config.cache.clone(),
        }
    }
}
