use std::ops::{ Add, AddAssign, Sub, SubAssign, Neg, Mul, MulAssign, Div, DivAssign };

use crate::feq;

/// A homogeneous 4-component vector.
///
/// By convention a `w` of `1.0` marks a point and a `w` of `0.0` marks a free
/// vector, so a single 4x4 matrix can translate points while leaving
/// directions alone. Arithmetic does not enforce the convention; subtracting
/// two points yields a vector, adding two points yields nonsense.
///
/// Equality is component-wise within `FEQ_EPSILON`, not bit-exact.
///
/// # Examples
///
/// ```
/// # use visibility_tracer::vector::Vector4D;
/// let p = Vector4D::point(3.0, 2.0, 1.0);
/// let q = Vector4D::point(5.0, 6.0, 7.0);
/// assert_eq!(p - q, Vector4D::vector(-2.0, -4.0, -6.0));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialOrd)]
pub struct Vector4D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl PartialEq for Vector4D {
    fn eq(&self, other: &Vector4D) -> bool {
        feq(self.x, other.x) &&
            feq(self.y, other.y) &&
            feq(self.z, other.z) &&
            feq(self.w, other.w)
    }
}

impl Vector4D {
    pub fn tuple(x: f64, y: f64, z: f64, w: f64) -> Vector4D {
        Vector4D { x, y, z, w }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Vector4D {
        Vector4D { x, y, z, w: 1.0 }
    }

    /// A point with all three coordinates set to `a`.
    pub fn point_splat(a: f64) -> Vector4D {
        Vector4D::point(a, a, a)
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Vector4D {
        Vector4D { x, y, z, w: 0.0 }
    }

    /// A free vector with all three components set to `a`.
    pub fn vector_splat(a: f64) -> Vector4D {
        Vector4D::vector(a, a, a)
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// The Euclidean norm over all four components.
    ///
    /// `w` takes part, so a point and a vector with the same `x`, `y` and `z`
    /// have different magnitudes.
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(
            self.x.powi(2)
            + self.y.powi(2)
            + self.z.powi(2)
            + self.w.powi(2)
        )
    }

    /// Scales the vector to unit magnitude.
    ///
    /// There is no guard against a zero magnitude: normalizing the zero vector
    /// yields non-finite components.
    pub fn normalize(&self) -> Vector4D {
        *self / self.magnitude()
    }

    pub fn is_unit_vector(&self) -> bool {
        feq(self.magnitude(), 1.0)
    }

    /// The four-term dot product (includes `w`).
    pub fn dot(&self, other: &Vector4D) -> f64 {
        self.x * other.x
            + self.y * other.y
            + self.z * other.z
            + self.w * other.w
    }

    /// The 3D cross product. The result is always a vector (`w == 0.0`), so
    /// crossing two points is meaningless.
    pub fn cross(&self, other: &Vector4D) -> Vector4D {
        Vector4D::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for Vector4D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w
        }
    }
}

impl AddAssign for Vector4D {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector4D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w
        }
    }
}

impl SubAssign for Vector4D {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Vector4D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w
        }
    }
}

/// Multiplying two vectors is their dot product.
impl Mul<Vector4D> for Vector4D {
    type Output = f64;

    fn mul(self, other: Vector4D) -> f64 {
        self.dot(&other)
    }
}

/// Scalar right-multiplication.
///
/// ```
/// # use visibility_tracer::vector::Vector4D;
/// let t = Vector4D::tuple(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(t * 5.0, Vector4D::tuple(5.0, 10.0, 15.0, 20.0));
/// ```
impl Mul<f64> for Vector4D {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
            w: self.w * other
        }
    }
}

/// Scalar left-multiplication.
///
/// ```
/// # use visibility_tracer::vector::Vector4D;
/// let t = Vector4D::tuple(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(5.0 * t, Vector4D::tuple(5.0, 10.0, 15.0, 20.0));
/// ```
impl Mul<Vector4D> for f64 {
    type Output = Vector4D;

    fn mul(self, other: Vector4D) -> Vector4D {
        other * self
    }
}

impl MulAssign<f64> for Vector4D {
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl Div<f64> for Vector4D {
    type Output = Self;

    fn div(self, other: f64) -> Self {
        Self {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
            w: self.w / other
        }
    }
}

impl DivAssign<f64> for Vector4D {
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

/* Tests */

#[test]
fn constructors_set_w() {
    let v = Vector4D::vector(1.0, 2.0, 3.0);
    let p = Vector4D::point(-1.0, -2.0, -3.0);

    assert!(v.is_vector() && !v.is_point());
    assert!(p.is_point() && !p.is_vector());
    assert_eq!(Vector4D::point_splat(2.0), Vector4D::point(2.0, 2.0, 2.0));
    assert_eq!(Vector4D::vector_splat(1.0), Vector4D::vector(1.0, 1.0, 1.0));
}

#[test]
fn add_and_sub() {
    let a1 = Vector4D::tuple(3.0, -2.0, 5.0, 1.0);
    let a2 = Vector4D::tuple(-2.0, 3.0, 1.0, 0.0);
    assert_eq!(a1 + a2, Vector4D::tuple(1.0, 1.0, 6.0, 1.0));

    let p = Vector4D::point(3.0, 2.0, 1.0);
    let v = Vector4D::vector(5.0, 6.0, 7.0);
    assert_eq!(p - v, Vector4D::point(-2.0, -4.0, -6.0));

    let mut acc = Vector4D::vector(1.0, 2.0, 3.0);
    acc += Vector4D::vector(2.0, 3.0, 4.0);
    assert_eq!(acc, Vector4D::vector(3.0, 5.0, 7.0));
    acc -= Vector4D::vector(3.0, 5.0, 7.0);
    assert_eq!(acc, Vector4D::vector(0.0, 0.0, 0.0));
}

#[test]
fn neg_vector() {
    let a = Vector4D::vector(-1.0, 0.0, 3.0);

    assert_eq!(-a, Vector4D::vector(1.0, 0.0, -3.0));
}

#[test]
fn scalar_ops() {
    let v = Vector4D::vector(1.0, 2.0, 3.0);

    assert_eq!(v * 2.0, Vector4D::vector(2.0, 4.0, 6.0));
    assert_eq!(v * 0.5, Vector4D::vector(0.5, 1.0, 1.5));
    assert_eq!(v / 2.0, Vector4D::vector(0.5, 1.0, 1.5));
    assert_eq!(v / 0.5, Vector4D::vector(2.0, 4.0, 6.0));

    let mut m = v;
    m *= 3.0;
    m /= 1.5;
    assert_eq!(m, Vector4D::vector(2.0, 4.0, 6.0));
}

#[test]
fn magnitude_includes_w() {
    let v = Vector4D::vector(1.0, 2.0, 3.0);
    let p = Vector4D::point(1.0, 2.0, 3.0);

    assert_eq!(v.magnitude(), f64::sqrt(14.0));
    assert_eq!(Vector4D::vector(-1.0, -2.0, -3.0).magnitude(), f64::sqrt(14.0));
    assert_eq!(p.magnitude(), f64::sqrt(15.0));
}

#[test]
fn normalize_vectors() {
    assert_eq!(Vector4D::vector(5.0, 0.0, 0.0).normalize(),
        Vector4D::vector(1.0, 0.0, 0.0));
    assert_eq!(Vector4D::vector(0.0, -5.0, 0.0).normalize(),
        Vector4D::vector(0.0, -1.0, 0.0));

    let v = Vector4D::vector(1.0, 2.0, 3.0);
    let e = Vector4D::vector(
        1.0 / f64::sqrt(14.0),
        2.0 / f64::sqrt(14.0),
        3.0 / f64::sqrt(14.0)
    );
    assert_eq!(v.normalize(), e);
    assert!(v.normalize().is_unit_vector());
}

#[test]
fn normalize_zero_is_not_finite() {
    let n = Vector4D::vector(0.0, 0.0, 0.0).normalize();

    assert!(!n.x.is_finite());
}

#[test]
fn unit_vectors() {
    assert!(Vector4D::vector(0.0, 0.0, -1.0).is_unit_vector());
    assert!(!Vector4D::vector(2.0, 0.0, 0.0).is_unit_vector());

    let d = 1.0 / 2.0f64.sqrt();
    assert!(Vector4D::vector(d, d, 0.0).is_unit_vector());
}

#[test]
fn dot_vectors() {
    let a = Vector4D::vector(1.0, 2.0, 3.0);
    let b = Vector4D::vector(2.0, 3.0, 4.0);

    assert_eq!(a.dot(&b), 20.0);
    assert_eq!(a * b, 20.0);
}

#[test]
fn cross_vectors() {
    let a = Vector4D::vector(1.0, 2.0, 3.0);
    let b = Vector4D::vector(2.0, 3.0, 4.0);

    assert_eq!(a.cross(&b), Vector4D::vector(-1.0, 2.0, -1.0));
    assert_eq!(b.cross(&a), Vector4D::vector(1.0, -2.0, 1.0));
}

#[test]
fn cross_drops_w() {
    let a = Vector4D::point(1.0, 0.0, 0.0);
    let b = Vector4D::point(0.0, 1.0, 0.0);

    assert_eq!(a.cross(&b).w, 0.0);
}

#[test]
fn equality_is_approximate() {
    let v1 = Vector4D::vector(1.0, 2.0, 3.0);

    assert_eq!(v1, Vector4D::vector(1.000001, 2.0, 3.0));
    assert_ne!(v1, Vector4D::vector(3.0, 4.0, 5.0));
}
