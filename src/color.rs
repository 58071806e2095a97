use std::ops::{ Add, Sub, Mul, Div };

use crate::feq;
use crate::vector::Vector4D;

/// A color.
///
/// Represented with red-green-blue (RGB) channels, each conventionally in
/// `0.0..=1.0`. Values outside that range are kept as-is and only clamped
/// when a `Bitmap` is exported to bytes.
///
/// # Examples
///
/// ```
/// # use visibility_tracer::color::Color;
/// let c = Color::rgb(0.1, 0.2, 0.3) + Color::rgb(0.2, 0.3, 0.4);
/// assert_eq!(c, Color::rgb(0.3, 0.5, 0.7));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Channels are compared within `FEQ_EPSILON`, like `Vector4D`.
impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        feq(self.r, other.r) &&
            feq(self.g, other.g) &&
            feq(self.b, other.b)
    }
}

/// Reads `x`, `y` and `z` as red, green and blue; `w` is dropped.
impl From<Vector4D> for Color {
    fn from(v: Vector4D) -> Color {
        Color { r: v.x, g: v.y, b: v.z }
    }
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }
    }

    pub fn black() -> Color {
        Color::rgb(0.0, 0.0, 0.0)
    }

    pub fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }

    /// Scales each channel to `0..=255`, clamping out-of-range values.
    /// Fractions are truncated.
    pub fn to_bytes(&self) -> [u8; 3] {
        let scale = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
        [scale(self.r), scale(self.g), scale(self.b)]
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Color::rgb(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Color::rgb(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

/// The Hadamard (channel-wise) product.
impl Mul for Color {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Color::rgb(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Color::rgb(self.r * other, self.g * other, self.b * other)
    }
}

impl Div<f64> for Color {
    type Output = Self;

    fn div(self, other: f64) -> Self {
        Color::rgb(self.r / other, self.g / other, self.b / other)
    }
}

#[test]
fn compare_colors() {
    let c1 = Color::rgb(1.0, 2.0, 3.0);

    assert_eq!(c1, Color::rgb(1.0, 2.0, 3.0));
    assert_ne!(c1, Color::rgb(3.0, 4.0, 5.0));
}

#[test]
fn color_ops() {
    let c1 = Color::rgb(0.1, 0.2, 0.3);
    let c2 = Color::rgb(0.2, 0.3, 0.4);

    assert_eq!(c1 + c2, Color::rgb(0.3, 0.5, 0.7));
    assert_eq!(c1 - c2, Color::rgb(-0.1, -0.1, -0.1));
    assert_eq!(c1 * c2, Color::rgb(0.02, 0.06, 0.12));
}

#[test]
fn scalar_ops() {
    let c = Color::rgb(1.0, 2.0, 3.0);

    assert_eq!(c * 2.0, Color::rgb(2.0, 4.0, 6.0));
    assert_eq!(c * 0.5, Color::rgb(0.5, 1.0, 1.5));
    assert_eq!(c / 2.0, Color::rgb(0.5, 1.0, 1.5));
    assert_eq!(c / 0.5, Color::rgb(2.0, 4.0, 6.0));
}

#[test]
fn bytes_are_clamped() {
    assert_eq!(Color::rgb(1.0, 0.0, 0.5).to_bytes(), [255, 0, 127]);
    assert_eq!(Color::rgb(2.0, -1.0, 0.999).to_bytes(), [255, 0, 254]);
}

#[test]
fn from_vector() {
    let c: Color = Vector4D::point(0.25, 0.5, 0.75).into();

    assert_eq!(c, Color::rgb(0.25, 0.5, 0.75));
}
