//! Gallery configuration.
//!
//! Handles loading, validating, and merging `config.toml`. The user's file is
//! sparse: it is merged key-by-key on top of the stock defaults, so it only
//! needs the values it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [cdn]
//! base_url = "https://your-cdn-url.com/photos/"
//! supported_formats = [".jpg", ".jpeg", ".png", ".webp", ".gif", ".bmp"]
//!
//! [gallery]
//! carousel_interval_ms = 5000        # 0 disables auto-rotation
//! auto_refresh_interval_ms = 300000  # 0 disables auto-refresh
//! lightbox = true
//! keyboard_navigation = true
//! touch_support = true
//! swipe_threshold = 50.0
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::swipe::{DEFAULT_THRESHOLD, SwipeClassifier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Where photos live and which files count as photos.
    pub cdn: CdnConfig,
    /// Carousel, lightbox and input behaviour.
    pub gallery: GallerySettings,
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cdn.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "cdn.base_url must not be empty".into(),
            ));
        }
        if self.cdn.supported_formats.is_empty() {
            return Err(ConfigError::Validation(
                "cdn.supported_formats must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .cdn
            .supported_formats
            .iter()
            .find(|f| !f.starts_with('.') || f.len() < 2)
        {
            return Err(ConfigError::Validation(format!(
                "cdn.supported_formats entry {bad:?} must look like \".jpg\""
            )));
        }
        let threshold = self.gallery.swipe_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Validation(
                "gallery.swipe_threshold must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

/// Photo location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CdnConfig {
    /// Prefix for every photo URL. Expected to end with `/`.
    pub base_url: String,
    /// File extensions, with leading dot, that the directory source accepts.
    pub supported_formats: Vec<String>,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            base_url: "https://your-cdn-url.com/photos/".to_string(),
            supported_formats: [".jpg", ".jpeg", ".png", ".webp", ".gif", ".bmp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Carousel, lightbox and input behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GallerySettings {
    /// Carousel auto-rotation period in milliseconds. `0` disables it.
    pub carousel_interval_ms: u64,
    /// Photo re-fetch period in milliseconds. `0` disables it.
    pub auto_refresh_interval_ms: u64,
    /// Whether grid clicks open the lightbox.
    pub lightbox: bool,
    /// Arrow keys and Escape drive the open lightbox.
    pub keyboard_navigation: bool,
    /// Swipe gestures drive the lightbox or carousel.
    pub touch_support: bool,
    /// Minimum horizontal travel, in pixels, for a swipe.
    pub swipe_threshold: f64,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            carousel_interval_ms: 5000,
            auto_refresh_interval_ms: 5 * 60 * 1000,
            lightbox: true,
            keyboard_navigation: true,
            touch_support: true,
            swipe_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl GallerySettings {
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn auto_refresh_interval(&self) -> Duration {
        Duration::from_millis(self.auto_refresh_interval_ms)
    }

    /// Classifier for the configured threshold. Settings built in code skip
    /// `validate()`, so a negative or NaN threshold is clamped to zero.
    pub fn swipe_classifier(&self) -> SwipeClassifier {
        SwipeClassifier::new(self.swipe_threshold.max(0.0))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(GalleryConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, falling back to
/// the stock defaults when the file is absent.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    let overlay = load_raw_config(dir)?;
    let config = resolve_config(overlay)?;
    tracing::debug!(dir = %dir.display(), "config loaded");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Photo Gallery Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Photo location
# ---------------------------------------------------------------------------
[cdn]
# Prefix for every photo URL. Photos resolve to <base_url><folder>/<file>.
base_url = "https://your-cdn-url.com/photos/"

# File extensions picked up when photos are read from a content directory.
supported_formats = [".jpg", ".jpeg", ".png", ".webp", ".gif", ".bmp"]

# ---------------------------------------------------------------------------
# Gallery behaviour
# ---------------------------------------------------------------------------
[gallery]
# Carousel auto-rotation period in milliseconds (0 = disabled).
carousel_interval_ms = 5000

# Photo re-fetch period in milliseconds (0 = disabled).
auto_refresh_interval_ms = 300000

# Open the lightbox when a grid photo is clicked.
lightbox = true

# Arrow keys move through the open lightbox, Escape closes it.
keyboard_navigation = true

# Swipe left/right to move through the lightbox or carousel.
touch_support = true

# Minimum horizontal travel, in pixels, before a touch counts as a swipe.
swipe_threshold = 50.0
"##
}
