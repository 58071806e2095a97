use crate::vector::Vector4D;
use crate::matrix::Matrix4D;

/// A model transform composed of a translation and a scale.
///
/// The composed matrix, `translation * scale`, is cached and recomputed
/// synchronously by every mutator, so `matrix` never returns a stale value.
/// Rotation and shear are not supported here; build those with the
/// `Matrix4D` factories directly.
///
/// # Examples
///
/// ```
/// # use visibility_tracer::vector::Vector4D;
/// # use visibility_tracer::matrix::Matrix4D;
/// # use visibility_tracer::transform::Transform;
/// let mut t = Transform::new();
/// t.set_translation(Vector4D::point(0.0, 0.0, 5.0));
/// t.set_uniform_scale(2.0);
/// assert_eq!(*t.matrix(),
///     Matrix4D::translation(0.0, 0.0, 5.0) * Matrix4D::scaling(2.0, 2.0, 2.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    translation: Vector4D,
    scale: Vector4D,
    matrix: Matrix4D,
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::new()
    }
}

impl Transform {
    /// The neutral transform: no offset, unit scale.
    pub fn new() -> Transform {
        Transform::with(Vector4D::point_splat(0.0), Vector4D::vector_splat(1.0))
    }

    pub fn with(translation: Vector4D, scale: Vector4D) -> Transform {
        let mut t = Transform {
            translation,
            scale,
            matrix: Matrix4D::identity(),
        };
        t.recalculate();

        t
    }

    pub fn matrix(&self) -> &Matrix4D {
        &self.matrix
    }

    pub fn translation(&self) -> Vector4D {
        self.translation
    }

    pub fn scale(&self) -> Vector4D {
        self.scale
    }

    /// Offsets the current translation by `offset`.
    pub fn translate(&mut self, offset: Vector4D) {
        self.translation += offset;
        self.recalculate();
    }

    pub fn set_translation(&mut self, translation: Vector4D) {
        self.translation = translation;
        self.recalculate();
    }

    /// Adds `delta` to the current per-axis scale.
    pub fn add_scale(&mut self, delta: Vector4D) {
        self.scale += delta;
        self.recalculate();
    }

    pub fn set_scale(&mut self, scale: Vector4D) {
        self.scale = scale;
        self.recalculate();
    }

    pub fn set_uniform_scale(&mut self, scale: f64) {
        self.set_scale(Vector4D::vector_splat(scale));
    }

    fn recalculate(&mut self) {
        self.matrix = Matrix4D::translation_of(self.translation)
            * Matrix4D::scaling_of(self.scale);
    }
}

#[test]
fn neutral_transform_is_identity() {
    assert_eq!(*Transform::new().matrix(), Matrix4D::identity());
    assert_eq!(Transform::default(), Transform::new());
}

#[test]
fn constructed_transforms() {
    let t = Transform::with(Vector4D::point_splat(2.0), Vector4D::vector_splat(1.0));
    assert_eq!(*t.matrix(), Matrix4D::translation_splat(2.0));

    let t = Transform::with(Vector4D::point_splat(0.0), Vector4D::vector_splat(2.0));
    assert_eq!(*t.matrix(), Matrix4D::scaling_splat(2.0));

    let t = Transform::with(Vector4D::point_splat(2.0), Vector4D::vector_splat(2.0));
    assert_eq!(*t.matrix(),
        Matrix4D::translation_splat(2.0) * Matrix4D::scaling_splat(2.0));
}

#[test]
fn mutators_recompute_matrix() {
    let mut t = Transform::new();

    t.translate(Vector4D::vector(1.0, 0.0, 0.0));
    t.translate(Vector4D::vector(0.0, 2.0, 0.0));
    assert_eq!(t.translation(), Vector4D::point(1.0, 2.0, 0.0));
    assert_eq!(*t.matrix(), Matrix4D::translation(1.0, 2.0, 0.0));

    t.add_scale(Vector4D::vector(1.0, 0.0, 2.0));
    assert_eq!(t.scale(), Vector4D::vector(2.0, 1.0, 3.0));
    assert_eq!(*t.matrix(),
        Matrix4D::translation(1.0, 2.0, 0.0) * Matrix4D::scaling(2.0, 1.0, 3.0));

    t.set_translation(Vector4D::point_splat(0.0));
    t.set_scale(Vector4D::vector(1.0, 1.0, 1.0));
    assert_eq!(*t.matrix(), Matrix4D::identity());
}

#[test]
fn scale_applies_before_translation() {
    let t = Transform::with(Vector4D::point(5.0, 0.0, 0.0), Vector4D::vector_splat(2.0));

    assert_eq!(*t.matrix() * Vector4D::point(1.0, 0.0, 0.0), Vector4D::point(7.0, 0.0, 0.0));
}
