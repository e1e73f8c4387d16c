//! Field tuning bundled into one value.
//!
//! The reference look is `FieldConfig::default()`. Custom configs go through
//! [`FieldConfig::validate`] before a field is seeded from them.

use crate::constants::*;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("orb count must be at least 1")]
    EmptyField,
    #[error("range `{name}` is inverted or not finite: {min}..{max}")]
    BadRange { name: &'static str, min: f64, max: f64 },
    #[error("`{name}` must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
}

/// Closed interval sampled uniformly. `min == max` is allowed and always yields `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric range `-half..half`.
    pub const fn symmetric(half: f64) -> Self {
        Self {
            min: -half,
            max: half,
        }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.lerp(rng.gen::<f64>())
    }

    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    fn check(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(ConfigError::BadRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub orb_count: usize,
    pub base_radius: Range,
    pub drift: Range,
    pub hue: Range,
    pub saturation: Range,
    pub lightness: Range,
    pub alpha: Range,
    pub pulse_amplitude: f64,
    pub pulse_speed: Range,
    pub interaction_radius: f64,
    pub attraction: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            orb_count: ORB_COUNT,
            base_radius: Range::new(BASE_RADIUS_MIN, BASE_RADIUS_MAX),
            drift: Range::symmetric(DRIFT_SPEED_MAX),
            hue: Range::new(HUE_MIN, HUE_MAX),
            saturation: Range::new(SATURATION_MIN, SATURATION_MAX),
            lightness: Range::new(LIGHTNESS_MIN, LIGHTNESS_MAX),
            alpha: Range::new(ALPHA_MIN, ALPHA_MAX),
            pulse_amplitude: PULSE_AMPLITUDE,
            pulse_speed: Range::new(PULSE_SPEED_MIN, PULSE_SPEED_MAX),
            interaction_radius: INTERACTION_RADIUS,
            attraction: ATTRACTION_COEFF,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.orb_count == 0 {
            return Err(ConfigError::EmptyField);
        }
        self.base_radius.check("base_radius")?;
        self.drift.check("drift")?;
        self.hue.check("hue")?;
        self.saturation.check("saturation")?;
        self.lightness.check("lightness")?;
        self.alpha.check("alpha")?;
        self.pulse_speed.check("pulse_speed")?;
        non_negative("pulse_amplitude", self.pulse_amplitude)?;
        non_negative("interaction_radius", self.interaction_radius)?;
        non_negative("attraction", self.attraction)?;
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
