use rayon::prelude::*;

use crate::ray::Ray4D;
use crate::vector::Vector4D;
use crate::camera::Camera;
use crate::bitmap::Bitmap;
use crate::consts::HIT_COLOR;
use crate::error::{ Result, TracerError };
use crate::intersect::Intersection;
use crate::shape::{ Shape, ShapeType, Intersectable };

/// A world of shapes.
///
/// The world owns its shapes by value, in insertion order. A shape's id is
/// its index, so ids are unique within one world and stable for its
/// lifetime. Every query checks every shape; there is no acceleration
/// structure.
#[derive(Clone, Debug, Default)]
pub struct World {
    objects: Vec<Shape>,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> World {
        Default::default()
    }

    /// Adds a shape centered at `origin` and scaled by `scale`, returning
    /// its id.
    pub fn add(&mut self, ty: ShapeType, origin: Vector4D, scale: Vector4D) -> usize {
        let id = self.objects.len();

        let mut shape = Shape::new(ty, id);
        shape.model.set_translation(origin);
        shape.model.set_scale(scale);
        self.objects.push(shape);

        id
    }

    pub fn add_sphere(&mut self, origin: Vector4D, scale: Vector4D) -> usize {
        self.add(ShapeType::Sphere, origin, scale)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Shape] {
        &self.objects
    }

    /// Looks up a shape by id.
    pub fn get_object(&self, index: usize) -> Result<&Shape> {
        let len = self.objects.len();
        self.objects.get(index)
            .ok_or(TracerError::ObjectOutOfRange { index, len })
    }

    /// Looks up a shape by id for modification.
    pub fn get_object_mut(&mut self, index: usize) -> Result<&mut Shape> {
        let len = self.objects.len();
        self.objects.get_mut(index)
            .ok_or(TracerError::ObjectOutOfRange { index, len })
    }

    /// Intersects a ray against every shape.
    ///
    /// Results are concatenated in shape insertion order, each shape's own
    /// intersections in the order it produced them. Nothing is sorted.
    pub fn get_intersections(&self, ray: Ray4D) -> Vec<Intersection> {
        self.objects.iter()
            .flat_map(|obj| obj.intersections(ray))
            .collect()
    }

    /// The nearest intersection in front of the ray origin, if any.
    pub fn get_visible_intersection(&self, ray: Ray4D) -> Option<Intersection> {
        Intersection::discard_occluded(&self.get_intersections(ray))
    }

    /// Whether the ray through pixel `(x, y)` hits anything.
    fn pixel_is_hit(&self, camera: &Camera, x: usize, y: usize,
        width: usize, height: usize) -> bool {
        let ray = camera.ray_for_pixel(x, y, width, height);
        self.get_visible_intersection(ray).is_some()
    }

    /// Renders a `width * height` visibility image, one ray per pixel.
    ///
    /// Pixels whose ray has a visible intersection are set to `HIT_COLOR`;
    /// the rest stay black.
    pub fn render(&self, width: usize, height: usize, camera: &Camera) -> Bitmap {
        log::debug!("rendering {}x{} against {} objects", width, height, self.len());
        let mut image = Bitmap::new(width, height);

        for y in 0..height {
            for x in 0..width {
                if self.pixel_is_hit(camera, x, y, width, height) {
                    image[(x, y)] = HIT_COLOR;
                }
            }
        }

        image
    }

    /// Renders like `render`, fanning rows out across the rayon thread pool.
    ///
    /// Each row writes only its own slice of the pre-sized pixel buffer, so
    /// no synchronization is needed. The output is identical to `render`.
    pub fn render_parallel(&self, width: usize, height: usize, camera: &Camera)
        -> Bitmap {
        log::debug!("rendering {}x{} against {} objects on {} threads",
            width, height, self.len(), rayon::current_num_threads());
        let mut image = Bitmap::new(width, height);

        // max(1) only guards zero-width images, which have no rows anyway.
        image.pixels_mut()
            .par_chunks_mut(width.max(1))
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    if self.pixel_is_hit(camera, x, y, width, height) {
                        *pixel = HIT_COLOR;
                    }
                }
            });

        image
    }
}

#[cfg(test)]
fn origin_ray() -> Ray4D {
    Ray4D::new(Vector4D::point(0.0, 0.0, 0.0), Vector4D::vector(0.0, 0.0, 1.0))
}

#[test]
fn add_assigns_sequential_ids() {
    let mut w = World::new();

    assert_eq!(w.add_sphere(Vector4D::point_splat(0.0), Vector4D::vector_splat(1.0)), 0);
    assert_eq!(w.add_sphere(Vector4D::point_splat(3.0), Vector4D::vector_splat(1.0)), 1);
    assert_eq!(w.len(), 2);
    assert_eq!(w.get_object(1).unwrap().id(), 1);
    assert_eq!(w.get_object(1).unwrap().model.translation(), Vector4D::point_splat(3.0));
}

#[test]
fn get_object_out_of_range() {
    let mut w = World::new();
    w.add_sphere(Vector4D::point_splat(0.0), Vector4D::vector_splat(1.0));

    assert!(matches!(w.get_object(1),
        Err(TracerError::ObjectOutOfRange { index: 1, len: 1 })));
    assert!(w.get_object_mut(5).is_err());
}

#[test]
fn single_sphere_around_origin() {
    let mut w = World::new();
    w.add_sphere(Vector4D::point(0.0, 0.0, 0.0), Vector4D::vector_splat(1.0));

    let xs = w.get_intersections(origin_ray());
    assert_eq!(xs.len(), 2);
    assert_eq!(xs[0].distance, -1.0);
    assert_eq!(xs[1].distance, 1.0);

    let hit = w.get_visible_intersection(origin_ray()).unwrap();
    assert_eq!(hit.distance, 1.0);
}

#[test]
fn intersections_keep_insertion_order() {
    let mut w = World::new();
    w.add_sphere(Vector4D::point(0.0, 0.0, 0.0), Vector4D::vector_splat(1.0));
    w.add_sphere(Vector4D::point(0.0, 0.0, 2.0), Vector4D::vector_splat(2.0));

    let xs = w.get_intersections(origin_ray());
    let ds: Vec<f64> = xs.iter().map(|i| i.distance).collect();
    let ids: Vec<usize> = xs.iter().map(|i| i.object_id).collect();
    assert_eq!(ds, vec![-1.0, 1.0, 0.0, 4.0]);
    assert_eq!(ids, vec![0, 0, 1, 1]);

    let hit = w.get_visible_intersection(origin_ray()).unwrap();
    assert_eq!(hit.distance, 0.0);
    assert_eq!(hit.object_id, 1);
}

#[test]
fn moved_object_changes_queries() {
    let mut w = World::new();
    let id = w.add_sphere(Vector4D::point(0.0, 0.0, 5.0), Vector4D::vector_splat(1.0));
    assert!(w.get_visible_intersection(origin_ray()).is_some());

    w.get_object_mut(id).unwrap().model.set_translation(Vector4D::point(0.0, 5.0, 5.0));
    assert!(w.get_visible_intersection(origin_ray()).is_none());
}

#[test]
fn empty_world_renders_black() {
    let w = World::new();
    let image = w.render(4, 3, &Camera::default());

    assert_eq!((image.width(), image.height()), (4, 3));
    assert!(image.pixels().iter().all(|p| *p == crate::color::Color::black()));
}

#[test]
fn render_marks_visible_sphere() {
    let mut w = World::new();
    w.add_sphere(Vector4D::point(0.0, 0.0, 5.0), Vector4D::vector_splat(1.0));
    let image = w.render(11, 11, &Camera::default());

    // Center pixel looks straight at the sphere, corners miss it.
    assert_eq!(image[(5, 5)], HIT_COLOR);
    assert_eq!(image[(0, 0)], crate::color::Color::black());
    assert_eq!(image[(10, 10)], crate::color::Color::black());
}

#[test]
fn sphere_behind_camera_is_invisible() {
    let mut w = World::new();
    w.add_sphere(Vector4D::point(0.0, 0.0, -5.0), Vector4D::vector_splat(1.0));
    let image = w.render(9, 9, &Camera::default());

    assert!(image.pixels().iter().all(|p| *p != HIT_COLOR));
}

#[test]
fn parallel_render_matches_serial() {
    let mut w = World::new();
    w.add_sphere(Vector4D::point(0.0, -1.0, 4.0), Vector4D::vector_splat(1.0));
    w.add_sphere(Vector4D::point(0.0, 2.0, 10.0), Vector4D::vector_splat(1.0));
    let camera = Camera::default();

    let serial = w.render(32, 24, &camera);
    let parallel = w.render_parallel(32, 24, &camera);
    assert_eq!(serial, parallel);
    assert!(serial.pixels().iter().any(|p| *p == HIT_COLOR));
}

#[test]
fn zero_sized_render() {
    let w = World::new();

    assert!(w.render_parallel(0, 4, &Camera::default()).pixels().is_empty());
    assert!(w.render(4, 0, &Camera::default()).pixels().is_empty());
}
