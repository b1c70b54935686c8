use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
}

/// Where images are fetched from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Base URL; `/<id>` is appended for every request
    #[serde(default = "default_source_url")]
    pub url: String,
    /// Per-job cap on GET attempts. `None` retries until a real image shows up.
    #[serde(default)]
    pub max_attempts: Option<u32>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            max_attempts: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_source_url() -> String {
    "https://www.wallpaperup.com/wallpaper/download".to_string()
}

fn default_user_agent() -> String {
    concat!("autowall/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Destination directory settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Destination directory, `~` is expanded to the home directory
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "~/wallpapers".to_string()
}

/// Job generation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobsConfig {
    /// Number of images to fetch
    #[serde(default = "default_images")]
    pub images: usize,
    /// Fixed RNG seed; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Exclusive upper bound for starting resource ids
    #[serde(default = "default_id_range")]
    pub id_range: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            seed: None,
            id_range: default_id_range(),
        }
    }
}

fn default_images() -> usize {
    30
}

fn default_id_range() -> u64 {
    130_000
}
