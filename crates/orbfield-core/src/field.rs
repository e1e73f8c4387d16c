use crate::config::{ConfigError, FieldConfig};
use crate::orb::{Motion, Orb};
use crate::surface::{Bounds, DrawSurface};
use glam::DVec2;
use rand::Rng;

/// Fixed-size, ordered set of orbs. Seeded once; membership never changes.
#[derive(Clone, Debug)]
pub struct OrbField {
    orbs: Vec<Orb>,
    motion: Motion,
}

impl OrbField {
    pub fn new<R: Rng + ?Sized>(
        cfg: &FieldConfig,
        rng: &mut R,
        bounds: Bounds,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let orbs = (0..cfg.orb_count)
            .map(|_| Orb::random(rng, cfg, bounds))
            .collect::<Vec<_>>();
        Ok(Self {
            orbs,
            motion: Motion::from(cfg),
        })
    }

    /// Build a field from explicit orbs, e.g. a hand-placed scene.
    pub fn from_orbs(orbs: Vec<Orb>, motion: Motion) -> Self {
        Self { orbs, motion }
    }

    pub fn advance(&mut self, time: u64, bounds: Bounds, pointer: DVec2) {
        for orb in &mut self.orbs {
            orb.advance(time, bounds, pointer, &self.motion);
        }
    }

    /// Paint in collection order; later orbs land on top.
    pub fn paint<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for orb in &self.orbs {
            orb.paint(surface);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }
}
