#![forbid(unsafe_code)]

//! Tunable constants for the landing page.
//!
//! Every field defaults to the value the page was designed around, so an
//! empty JSON object (or no config at all) reproduces the stock behaviour.
//! Hosts may override individual fields:
//!
//! ```
//! use spiceberg_core::config::LandingConfig;
//!
//! let config = LandingConfig::from_json(r#"{ "card_width": 300.0 }"#).unwrap();
//! assert_eq!(config.card_width, 300.0);
//! assert_eq!(config.card_gap, 48.0);
//! ```

use core::time::Duration;

use serde::Deserialize;

use crate::error::{LandingError, Result};

/// Card width in CSS pixels.
pub const DEFAULT_CARD_WIDTH: f64 = 350.0;
/// Gap between cards in CSS pixels.
pub const DEFAULT_CARD_GAP: f64 = 48.0;
/// Number of ambient particles spawned at startup.
pub const DEFAULT_PARTICLE_COUNT: usize = 30;
/// Minimum touch displacement that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
/// Minimum amplified mouse displacement that counts as a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 50.0;
/// Amplification applied to raw mouse drag distance.
pub const DEFAULT_DRAG_MULTIPLIER: f64 = 2.0;
/// Divisor applied to pointer offset when tilting a hovered card.
pub const DEFAULT_TILT_DAMPING: f64 = 20.0;
/// CSS perspective used for the hover tilt.
pub const DEFAULT_TILT_PERSPECTIVE: f64 = 1000.0;
/// Duration of the full-page flash after a theme switch.
pub const DEFAULT_FLASH_MS: u64 = 500;
/// Parallax speed for elements without a `data-parallax-speed` attribute.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
/// Downward drift factor of the hero banner while scrolling.
pub const DEFAULT_HERO_SPEED: f64 = 0.5;
/// Fraction of an element that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
/// Bottom root margin (shrinks the viewport) for reveal detection.
pub const DEFAULT_REVEAL_BOTTOM_MARGIN: f64 = 100.0;
/// Initial downward offset of not-yet-revealed elements.
pub const DEFAULT_REVEAL_OFFSET: f64 = 30.0;
pub const DEFAULT_ACTIVE_SCALE: f64 = 1.05;
pub const DEFAULT_INACTIVE_SCALE: f64 = 0.95;
pub const DEFAULT_INACTIVE_OPACITY: f64 = 0.6;
/// Theme assumed to be active before the first slide is shown.
pub const DEFAULT_THEME: &str = "truffle";

const MAX_PARTICLE_COUNT: usize = 1_000;

/// Landing page configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    pub card_width: f64,
    pub card_gap: f64,
    pub particle_count: usize,
    pub swipe_threshold: f64,
    pub drag_threshold: f64,
    pub drag_multiplier: f64,
    pub tilt_damping: f64,
    pub tilt_perspective: f64,
    pub flash_ms: u64,
    pub default_parallax_speed: f64,
    pub hero_speed: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin: f64,
    pub reveal_offset: f64,
    pub active_scale: f64,
    pub inactive_scale: f64,
    pub inactive_opacity: f64,
    pub default_theme: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            card_width: DEFAULT_CARD_WIDTH,
            card_gap: DEFAULT_CARD_GAP,
            particle_count: DEFAULT_PARTICLE_COUNT,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            drag_multiplier: DEFAULT_DRAG_MULTIPLIER,
            tilt_damping: DEFAULT_TILT_DAMPING,
            tilt_perspective: DEFAULT_TILT_PERSPECTIVE,
            flash_ms: DEFAULT_FLASH_MS,
            default_parallax_speed: DEFAULT_PARALLAX_SPEED,
            hero_speed: DEFAULT_HERO_SPEED,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin: DEFAULT_REVEAL_BOTTOM_MARGIN,
            reveal_offset: DEFAULT_REVEAL_OFFSET,
            active_scale: DEFAULT_ACTIVE_SCALE,
            inactive_scale: DEFAULT_INACTIVE_SCALE,
            inactive_opacity: DEFAULT_INACTIVE_OPACITY,
            default_theme: DEFAULT_THEME.to_owned(),
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Horizontal distance between the left edges of adjacent cards.
    #[must_use]
    pub fn slide_stride(&self) -> f64 {
        self.card_width + self.card_gap
    }

    #[must_use]
    pub const fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    /// Reject values that would make the page misbehave.
    pub fn validate(&self) -> Result<()> {
        positive("card_width", self.card_width)?;
        non_negative("card_gap", self.card_gap)?;
        non_negative("swipe_threshold", self.swipe_threshold)?;
        non_negative("drag_threshold", self.drag_threshold)?;
        positive("drag_multiplier", self.drag_multiplier)?;
        positive("tilt_damping", self.tilt_damping)?;
        positive("tilt_perspective", self.tilt_perspective)?;
        finite("default_parallax_speed", self.default_parallax_speed)?;
        finite("hero_speed", self.hero_speed)?;
        unit_interval("reveal_threshold", self.reveal_threshold)?;
        non_negative("reveal_bottom_margin", self.reveal_bottom_margin)?;
        finite("reveal_offset", self.reveal_offset)?;
        positive("active_scale", self.active_scale)?;
        positive("inactive_scale", self.inactive_scale)?;
        unit_interval("inactive_opacity", self.inactive_opacity)?;
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(LandingError::invalid_config(
                "particle_count",
                format!("must be at most {MAX_PARTICLE_COUNT}"),
            ));
        }
        if self.default_theme.trim().is_empty() {
            return Err(LandingError::invalid_config(
                "default_theme",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LandingError::invalid_config(field, "must be finite"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(LandingError::invalid_config(field, "must not be negative"));
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(LandingError::invalid_config(field, "must be positive"));
    }
    Ok(())
}

fn unit_interval(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(LandingError::invalid_config(field, "must be within 0..=1"));
    }
    Ok(())
}
