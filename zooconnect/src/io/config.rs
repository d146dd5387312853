//! Site configuration stored in `zooconnect.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::types::ViewMode;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "zooconnect.toml";

/// Site configuration (TOML).
///
/// Intended to be edited by humans. Missing fields default to the values the
/// site ships with.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Catalog JSON file. When unset the embedded catalog is used.
    pub catalog_path: Option<PathBuf>,

    pub auth: StubDelayConfig,

    pub application: StubDelayConfig,

    pub media: MediaConfig,

    pub listing: ListingConfig,
}

/// Artificial latency for a simulated round trip.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StubDelayConfig {
    pub delay_ms: u64,
}

impl Default for StubDelayConfig {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

impl StubDelayConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// Video embedded on the home page.
    pub video_id: String,

    /// Image shown until (or instead of) the video.
    pub fallback_image: String,

    /// Downlink speed at or above which the video loads immediately.
    pub min_downlink_mbps: f64,

    /// Wait before switching to the video when no speed signal is available.
    pub fallback_delay_ms: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            video_id: "6stlCkUDG_s".to_string(),
            fallback_image: "/assets/globe.jpg".to_string(),
            min_downlink_mbps: 1.5,
            fallback_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListingConfig {
    pub default_view: ViewMode,

    /// Maximum number of featured experiences on the home page.
    pub featured_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Grid,
            featured_limit: 3,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.media.video_id.trim().is_empty() {
            return Err(anyhow!("media.video_id must not be empty"));
        }
        if self.media.fallback_image.trim().is_empty() {
            return Err(anyhow!("media.fallback_image must not be empty"));
        }
        if !self.media.min_downlink_mbps.is_finite() || self.media.min_downlink_mbps < 0.0 {
            return Err(anyhow!("media.min_downlink_mbps must be a non-negative number"));
        }
        if self.listing.featured_limit == 0 {
            return Err(anyhow!("listing.featured_limit must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SiteConfig::default()`.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        let cfg = SiteConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SiteConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
