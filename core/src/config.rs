use serde::Deserialize;
use thiserror::Error;

use crate::gallery::DEFAULT_GALLERY_STEP_PX;
use crate::startup::DEFAULT_SETTLE_DELAY_MS;
use crate::visibility::DEFAULT_VISIBILITY_THRESHOLD;

/// Page tunables, optionally supplied as inline JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub visibility_threshold: f64,
    pub settle_delay_ms: u32,
    pub gallery_step_px: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            gallery_step_px: DEFAULT_GALLERY_STEP_PX,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("visibility threshold {0} must be within (0, 1]")]
    Threshold(f64),
    #[error("gallery step {0} must be a positive number of pixels")]
    GalleryStep(f64),
}

impl CatalogConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.visibility_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Threshold(threshold));
        }
        let step = self.gallery_step_px;
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::GalleryStep(step));
        }
        Ok(())
    }
}
