use serde::{ Serialize, Deserialize };

use crate::vector::Vector4D;
use crate::ray::Ray4D;
use crate::transform::Transform;
use crate::intersect::Intersection;

/// The closed set of primitive kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    /// A unit sphere with its center at the object-space origin.
    Sphere,
}

/// The intersection capability every shape exposes.
///
/// Both methods take the ray in world space; implementors move it into their
/// own object space. `intersects` must agree with `intersections` being
/// non-empty.
pub trait Intersectable {
    fn intersects(&self, ray: Ray4D) -> bool;
    fn intersections(&self, ray: Ray4D) -> Vec<Intersection>;
}

/// A shape placed in a world.
///
/// `ty` and `id` are fixed at construction; `model` maps the canonical
/// object-space geometry into world space and may be changed freely.
#[derive(Copy, Clone, Debug)]
pub struct Shape {
    ty: ShapeType,
    id: usize,
    pub model: Transform,
}

/// Shapes are identified by id alone.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Shape {
    pub fn new(ty: ShapeType, id: usize) -> Shape {
        Shape { ty, id, model: Transform::new() }
    }

    /// Creates a unit sphere with a neutral model transform.
    pub fn sphere(id: usize) -> Shape {
        Shape::new(ShapeType::Sphere, id)
    }

    pub fn ty(&self) -> ShapeType {
        self.ty
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Moves a world-space ray into object space.
    pub fn to_object_space(&self, ray: Ray4D) -> Ray4D {
        ray.transform(self.model.matrix().inverse())
    }

    /// Solves the unit-sphere quadratic for an object-space ray.
    ///
    /// Returns the discriminant and the `a`, `b` terms so callers can derive
    /// the roots without repeating the setup.
    fn sphere_quadratic(ray: &Ray4D) -> (f64, f64, f64) {
        let sphere_to_ray = ray.origin - Vector4D::point(0.0, 0.0, 0.0);

        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * ray.direction.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

        (b.powi(2) - (4.0 * a * c), a, b)
    }

    fn intersect_sphere(&self, ray: Ray4D) -> Vec<Intersection> {
        let (discriminant, a, b) = Self::sphere_quadratic(&ray);
        if discriminant < 0.0 {
            return Vec::new();
        }

        let t1 = (-b - discriminant.sqrt()) / (2.0 * a);
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);

        vec![
            Intersection::new(ray, t1, self.id),
            Intersection::new(ray, t2, self.id),
        ]
    }
}

impl Intersectable for Shape {
    fn intersects(&self, ray: Ray4D) -> bool {
        let local = self.to_object_space(ray);
        match self.ty {
            ShapeType::Sphere => Self::sphere_quadratic(&local).0 >= 0.0,
        }
    }

    fn intersections(&self, ray: Ray4D) -> Vec<Intersection> {
        let local = self.to_object_space(ray);
        match self.ty {
            ShapeType::Sphere => self.intersect_sphere(local),
        }
    }
}

#[cfg(test)]
fn distances(s: &Shape, r: Ray4D) -> Vec<f64> {
    s.intersections(r).iter().map(|i| i.distance).collect()
}

#[test]
fn ray_pierces_sphere() {
    let r = Ray4D::new(Vector4D::point(0.0, 0.0, -5.0), Vector4D::vector(0.0, 0.0, 1.0));
    let s = Shape::sphere(1);

    assert!(s.intersects(r));
    assert_eq!(distances(&s, r), vec![4.0, 6.0]);
}

#[test]
fn ray_is_tangent_to_sphere() {
    let r = Ray4D::new(Vector4D::point(0.0, 1.0, -5.0), Vector4D::vector(0.0, 0.0, 1.0));
    let s = Shape::sphere(1);

    assert!(s.intersects(r));
    assert_eq!(distances(&s, r), vec![5.0, 5.0]);
}

#[test]
fn ray_misses_sphere() {
    let r = Ray4D::new(Vector4D::point(0.0, 2.0, -5.0), Vector4D::vector(0.0, 0.0, 1.0));
    let s = Shape::sphere(1);

    assert!(!s.intersects(r));
    assert!(s.intersections(r).is_empty());
}

#[test]
fn ray_originates_inside_sphere() {
    let r = Ray4D::new(Vector4D::point(0.0, 0.0, 0.0), Vector4D::vector(0.0, 0.0, 1.0));
    let s = Shape::sphere(1);

    assert!(s.intersects(r));
    assert_eq!(distances(&s, r), vec![-1.0, 1.0]);
}

#[test]
fn sphere_behind_ray() {
    let r = Ray4D::new(Vector4D::point(0.0, 0.0, 5.0), Vector4D::vector(0.0, 0.0, 1.0));
    let s = Shape::sphere(1);

    assert!(s.intersects(r));
    assert_eq!(distances(&s, r), vec![-6.0, -4.0]);
}

#[test]
fn intersections_carry_object_id_and_local_ray() {
    let r = Ray4D::new(Vector4D::point(0.0, 0.0, -5.0), Vector4D::vector(0.0, 0.0, 1.0));
    let mut s = Shape::sphere(7);
    s.model.set_translation(Vector4D::point(0.0, 0.0, 1.0));

    let xs = s.intersections(r);
    assert_eq!(xs.len(), 2);
    assert!(xs.iter().all(|i| i.object_id == 7));
    assert_eq!(xs[0].ray.origin, Vector4D::point(0.0, 0.0, -6.0));
}

#[test]
fn translated_sphere_is_missed() {
    let r = Ray4D::new(Vector4D::point(0.0, 0.0, -5.0), Vector4D::vector(0.0, 0.0, 1.0));
    let mut s = Shape::sphere(1);
    s.model.set_translation(Vector4D::point(5.0, 0.0, 0.0));

    assert!(!s.intersects(r));
    assert!(s.intersections(r).is_empty());
}

#[test]
fn scaled_sphere() {
    let r = Ray4D::new(Vector4D::point(0.0, 0.0, -5.0), Vector4D::vector(0.0, 0.0, 1.0));
    let mut s = Shape::sphere(1);
    s.model.set_uniform_scale(2.0);

    assert!(s.intersects(r));
    assert_eq!(distances(&s, r), vec![3.0, 7.0]);
}

#[test]
fn shapes_compare_by_id() {
    let mut a = Shape::sphere(3);
    a.model.set_uniform_scale(4.0);

    assert_eq!(a, Shape::sphere(3));
    assert_ne!(a, Shape::sphere(4));
    assert_eq!(a.ty(), ShapeType::Sphere);
}
