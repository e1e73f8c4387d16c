use crate::constants::SEED_MIX;

/// Seed for a time-seeded mount, from `Date.now()` milliseconds.
#[inline]
pub fn seed_from_clock(millis: f64) -> u64 {
    millis.to_bits() ^ (millis as u64).wrapping_mul(SEED_MIX)
}

/// Seed passed in from JS. JS numbers are f64, so whole non-negative values map
/// straight across and anything else falls back to its bit pattern.
#[inline]
pub fn seed_from_js(value: f64) -> u64 {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        value as u64
    } else {
        value.to_bits()
    }
}
