use std::fmt;

/// HSL color with opacity, formatted as a CSS `hsla()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64, // percent
    pub lightness: f64,  // percent
    pub alpha: f64,
}

impl Hsla {
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Hsla,
}

/// Stops for a soft glow: core at twice the base opacity, half-way at the base
/// opacity, transparent at the rim.
pub fn glow_stops(color: Hsla) -> [GradientStop; 3] {
    let a = color.alpha;
    [
        GradientStop {
            offset: 0.0,
            color: color.with_alpha(a * 2.0),
        },
        GradientStop {
            offset: 0.5,
            color: color.with_alpha(a),
        },
        GradientStop {
            offset: 1.0,
            color: color.with_alpha(0.0),
        },
    ]
}
