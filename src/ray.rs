use std::ops::{ Mul, MulAssign, Neg };

use crate::vector::Vector4D;
use crate::matrix::Matrix4D;

/// A ray: an origin point and a direction vector.
///
/// The direction is not required to be normalized. Distances along the ray
/// (`t`) are measured in multiples of the direction's length.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray4D {
    pub origin: Vector4D,
    pub direction: Vector4D,
}

impl Ray4D {
    /// Creates a ray, forcing `origin` to be a point and `direction` to be a
    /// vector.
    pub fn new(mut origin: Vector4D, mut direction: Vector4D) -> Ray4D {
        if !origin.is_point() {
            origin.w = 1.0;
        }

        if !direction.is_vector() {
            direction.w = 0.0;
        }

        Ray4D { origin, direction }
    }

    /// The point at distance `t` along the ray. Negative `t` lies behind the
    /// origin.
    pub fn point_along(&self, t: f64) -> Vector4D {
        self.origin + self.direction * t
    }

    /// Applies `m` to the origin and direction separately.
    pub fn transform(&self, m: Matrix4D) -> Ray4D {
        Ray4D {
            origin: m * self.origin,
            direction: m * self.direction,
        }
    }

    /// Dot product of the directions; origins are ignored.
    pub fn dot(&self, other: &Vector4D) -> f64 {
        self.direction.dot(other)
    }

    /// Cross product of the direction with `other`.
    pub fn cross(&self, other: &Vector4D) -> Vector4D {
        self.direction.cross(other)
    }
}

/// Operator form of `Ray4D::transform`.
impl Mul<Matrix4D> for Ray4D {
    type Output = Ray4D;

    fn mul(self, m: Matrix4D) -> Ray4D {
        self.transform(m)
    }
}

impl MulAssign<Matrix4D> for Ray4D {
    fn mul_assign(&mut self, m: Matrix4D) {
        *self = self.transform(m);
    }
}

/// Dot product of the two directions.
impl Mul<Ray4D> for Ray4D {
    type Output = f64;

    fn mul(self, other: Ray4D) -> f64 {
        self.dot(&other.direction)
    }
}

impl Mul<Vector4D> for Ray4D {
    type Output = f64;

    fn mul(self, other: Vector4D) -> f64 {
        self.dot(&other)
    }
}

/// Reverses the direction, keeping the origin.
impl Neg for Ray4D {
    type Output = Ray4D;

    fn neg(self) -> Ray4D {
        Ray4D { origin: self.origin, direction: -self.direction }
    }
}

#[test]
fn ray_new_fixes_w() {
    let r = Ray4D::new(
        Vector4D::tuple(1.0, 2.0, 3.0, 0.0),
        Vector4D::tuple(0.0, 0.0, 1.0, 1.0),
    );

    assert!(r.origin.is_point());
    assert!(r.direction.is_vector());
}

#[test]
fn ray_point_along() {
    let r = Ray4D::new(
                Vector4D::point(2.0, 3.0, 4.0),
                Vector4D::vector(1.0, 0.0, 0.0)
            );

    assert_eq!(r.point_along(0.0), Vector4D::point(2.0, 3.0, 4.0));
    assert_eq!(r.point_along(1.0), Vector4D::point(3.0, 3.0, 4.0));
    assert_eq!(r.point_along(-1.0), Vector4D::point(1.0, 3.0, 4.0));
    assert_eq!(r.point_along(2.5), Vector4D::point(4.5, 3.0, 4.0));
}

#[test]
fn ray_dot_and_cross() {
    let r1 = Ray4D::new(Vector4D::point_splat(0.0), Vector4D::vector(1.0, 2.0, 3.0));
    let v = Vector4D::vector(2.0, 3.0, 4.0);
    let r2 = Ray4D::new(Vector4D::point(9.0, 9.0, 9.0), v);

    assert_eq!(r1.dot(&v), 20.0);
    assert_eq!(r1 * r2, 20.0);
    assert_eq!(r1 * v, 20.0);
    assert_eq!(r1.cross(&v), Vector4D::vector(-1.0, 2.0, -1.0));
}

#[test]
fn ray_translation() {
    let r = Ray4D::new(
                Vector4D::point(1.0, 2.0, 3.0),
                Vector4D::vector(0.0, 1.0, 0.0)
            );
    let m = Matrix4D::translation(3.0, 4.0, 5.0);
    let t = r.transform(m);

    assert_eq!(t, r * m);
    assert_eq!(t.origin, Vector4D::point(4.0, 6.0, 8.0));
    assert_eq!(t.direction, Vector4D::vector(0.0, 1.0, 0.0));
}

#[test]
fn ray_scaling() {
    let mut r = Ray4D::new(
                Vector4D::point(1.0, 2.0, 3.0),
                Vector4D::vector(0.0, 1.0, 0.0)
            );
    r *= Matrix4D::scaling(2.0, 3.0, 4.0);

    assert_eq!(r.origin, Vector4D::point(2.0, 6.0, 12.0));
    assert_eq!(r.direction, Vector4D::vector(0.0, 3.0, 0.0));
}

#[test]
fn ray_negation() {
    let r = Ray4D::new(Vector4D::point(1.0, 2.0, 3.0), Vector4D::vector(0.0, 1.0, 0.0));
    let n = -r;

    assert_eq!(n.origin, r.origin);
    assert_eq!(n.direction, Vector4D::vector(0.0, -1.0, 0.0));
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn operator_matches_transform(
            (ox, oy, oz) in (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0),
            (dx, dy, dz) in (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0),
            (tx, ty, tz) in (-5.0f64..5.0, -5.0f64..5.0, -5.0f64..5.0),
            s in 0.1f64..4.0,
        ) {
            let r = Ray4D::new(Vector4D::point(ox, oy, oz), Vector4D::vector(dx, dy, dz));
            let m = Matrix4D::translation(tx, ty, tz) * Matrix4D::scaling_splat(s);

            prop_assert_eq!(r.transform(m), r * m);
            prop_assert_eq!(r.transform(m).origin, m * r.origin);
            prop_assert_eq!(r.transform(m).direction, m * r.direction);
        }
    }
}
