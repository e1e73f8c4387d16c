//! A single glow particle.
//!
//! An [`Orb`] is a plain value: everything it reads during [`Orb::advance`]
//! (surface bounds, pointer, motion tuning) is passed in by the caller, and
//! [`Orb::paint`] draws onto whatever surface it is handed.

use crate::color::{glow_stops, Hsla};
use crate::config::FieldConfig;
use crate::constants::{ATTRACTION_COEFF, INTERACTION_RADIUS, PULSE_AMPLITUDE};
use crate::surface::{Bounds, DrawSurface};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Shared motion tuning applied to every orb in a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub pulse_amplitude: f64,
    pub interaction_radius: f64,
    pub attraction: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            pulse_amplitude: PULSE_AMPLITUDE,
            interaction_radius: INTERACTION_RADIUS,
            attraction: ATTRACTION_COEFF,
        }
    }
}

impl From<&FieldConfig> for Motion {
    fn from(cfg: &FieldConfig) -> Self {
        Self {
            pulse_amplitude: cfg.pulse_amplitude,
            interaction_radius: cfg.interaction_radius,
            attraction: cfg.attraction,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub position: DVec2,
    pub velocity: DVec2,
    pub base_radius: f64,
    pub radius: f64,
    pub color: Hsla,
    pub pulse_speed: f64,
    pub pulse_phase: f64,
}

impl Orb {
    /// Seed an orb somewhere on the surface with parameters drawn from `cfg`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, cfg: &FieldConfig, bounds: Bounds) -> Self {
        // Scale unit samples rather than `gen_range` so zero-sized surfaces are fine.
        let position = DVec2::new(
            rng.gen::<f64>() * bounds.width,
            rng.gen::<f64>() * bounds.height,
        );
        let base_radius = cfg.base_radius.sample(rng);
        let velocity = DVec2::new(cfg.drift.sample(rng), cfg.drift.sample(rng));
        let color = Hsla {
            hue: cfg.hue.sample(rng),
            saturation: cfg.saturation.sample(rng),
            lightness: cfg.lightness.sample(rng),
            alpha: cfg.alpha.sample(rng),
        };
        Self {
            position,
            velocity,
            base_radius,
            radius: base_radius,
            color,
            pulse_speed: cfg.pulse_speed.sample(rng),
            pulse_phase: rng.gen::<f64>() * TAU,
        }
    }

    /// Step one frame. `time` is the frame counter.
    ///
    /// Order: drift, wrap (against the radius from the previous frame),
    /// pulsate, then pull toward the pointer. Reach and pull are both measured
    /// from where the orb stood before this frame.
    pub fn advance(&mut self, time: u64, bounds: Bounds, pointer: DVec2, motion: &Motion) {
        let start = self.position;
        self.position += self.velocity;

        let r = self.radius;
        self.position.x = wrap_axis(self.position.x, bounds.width, r);
        self.position.y = wrap_axis(self.position.y, bounds.height, r);

        self.radius = self.base_radius
            + motion.pulse_amplitude * (time as f64 * self.pulse_speed + self.pulse_phase).sin();

        // No distance floor: near the pointer the drift can carry the orb past it.
        let delta = pointer - start;
        if delta.length() < motion.interaction_radius {
            self.position += delta * motion.attraction;
        }
    }

    pub fn paint<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_radial_glow(self.position, self.radius, &glow_stops(self.color));
    }
}

#[inline]
fn wrap_axis(v: f64, extent: f64, margin: f64) -> f64 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}
