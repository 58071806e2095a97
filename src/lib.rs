pub mod consts;
pub mod error;

pub mod vector;
pub mod matrix;
pub mod ray;
pub mod transform;

pub mod intersect;
pub mod shape;
pub mod world;
pub mod camera;

pub mod color;
pub mod bitmap;

pub mod scene;

use consts::FEQ_EPSILON;

/// Approximate float equality, used by every `PartialEq` in the crate.
pub fn feq(left: f64, right: f64) -> bool {
    (left - right).abs() < FEQ_EPSILON
}

#[test]
fn feq_tolerance() {
    assert!(feq(1.0, 1.0));
    assert!(feq(1.0, 1.000001));
    assert!(!feq(1.0, 1.0001));
    assert!(feq(-5.0, -5.000009));
}
