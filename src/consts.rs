use crate::color::Color;

// Floating point comparisons
pub const FEQ_EPSILON: f64 = 0.00001;

// Default render parameters
pub const DEFAULT_WIDTH: usize = 256;
pub const DEFAULT_HEIGHT: usize = 256;
pub const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_2;

/// The color written for pixels whose ray has a visible intersection.
pub const HIT_COLOR: Color = Color { r: 1.0, g: 0.0, b: 0.0 };
