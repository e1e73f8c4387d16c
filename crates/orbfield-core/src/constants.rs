// Reference tuning for the orb background. `FieldConfig::default()` is built from these.

// Field
pub const ORB_COUNT: usize = 8;

// Size (pixels)
pub const BASE_RADIUS_MIN: f64 = 80.0;
pub const BASE_RADIUS_MAX: f64 = 230.0;

// Drift per frame, per axis (pixels)
pub const DRIFT_SPEED_MAX: f64 = 0.15;

// Gold band, HSL
pub const HUE_MIN: f64 = 20.0;
pub const HUE_MAX: f64 = 60.0;
pub const SATURATION_MIN: f64 = 70.0; // percent
pub const SATURATION_MAX: f64 = 100.0;
pub const LIGHTNESS_MIN: f64 = 50.0; // percent
pub const LIGHTNESS_MAX: f64 = 70.0;

// Base opacity; the core of the glow paints at twice this
pub const ALPHA_MIN: f64 = 0.03;
pub const ALPHA_MAX: f64 = 0.07;

// Pulsation: radius = base + amplitude * sin(frame * speed + phase)
pub const PULSE_AMPLITUDE: f64 = 20.0;
pub const PULSE_SPEED_MIN: f64 = 0.01;
pub const PULSE_SPEED_MAX: f64 = 0.03;

// Pointer attraction
pub const INTERACTION_RADIUS: f64 = 300.0;
pub const ATTRACTION_COEFF: f64 = 0.001;

// Diagnostics: how often the render loop reports its frame rate
pub const FRAME_STATS_INTERVAL_SEC: f64 = 5.0;
