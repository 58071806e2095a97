use crate::feq;
use crate::ray::Ray4D;
use crate::vector::Vector4D;
use crate::consts::DEFAULT_FOV;

/// A pinhole camera.
///
/// The camera sits at `origin` looking along `forward`, with `up` marking the
/// top of the image. `field_of_view` is the vertical angle in radians. Neither
/// direction is normalized for you; the screen is laid out in whatever units
/// `forward` and `up` carry.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub origin: Vector4D,
    pub forward: Vector4D,
    pub up: Vector4D,
    pub field_of_view: f64,
}

impl PartialEq for Camera {
    fn eq(&self, other: &Camera) -> bool {
        self.origin == other.origin &&
            self.forward == other.forward &&
            self.up == other.up &&
            feq(self.field_of_view, other.field_of_view)
    }
}

impl Default for Camera {
    /// At the world origin, looking down +Z with +Y up.
    fn default() -> Camera {
        Camera::new(
            Vector4D::point(0.0, 0.0, 0.0),
            Vector4D::vector(0.0, 0.0, 1.0),
            Vector4D::vector(0.0, 1.0, 0.0),
            DEFAULT_FOV,
        )
    }
}

impl Camera {
    pub fn new(origin: Vector4D, forward: Vector4D, up: Vector4D,
        field_of_view: f64) -> Camera {
        Camera { origin, forward, up, field_of_view }
    }

    /// The distance from the eye to a screen one pixel per unit tall.
    pub fn screen_distance(&self, height: usize) -> f64 {
        (height as f64 / 2.0) / (self.field_of_view / 2.0).tan()
    }

    /// Generates the ray through pixel `(px, py)` of a `width * height`
    /// image.
    ///
    /// Pixel offsets are measured from `width / 2` and `height / 2` rounded
    /// down, so the ray through the middle pixel of an odd-sized image points
    /// straight along `forward`.
    pub fn ray_for_pixel(&self, px: usize, py: usize, width: usize, height: usize)
        -> Ray4D {
        let dx = px as f64 - (width / 2) as f64;
        let dy = py as f64 - (height / 2) as f64;
        let right = self.forward.cross(&self.up);

        let point_on_screen = self.forward * self.screen_distance(height)
            - self.up * dy
            + right * dx;

        Ray4D::new(self.origin, point_on_screen.normalize())
    }
}

#[test]
fn ray_through_center() {
    let c = Camera::default();
    let r = c.ray_for_pixel(100, 50, 201, 101);

    assert_eq!(r.origin, Vector4D::point(0.0, 0.0, 0.0));
    assert_eq!(r.direction, Vector4D::vector(0.0, 0.0, 1.0));
}

#[test]
fn ray_through_top_left() {
    // Square image, 90 degree field of view: the screen is as far away as
    // it is half-tall.
    let c = Camera::default();
    let r = c.ray_for_pixel(0, 0, 100, 100);

    // forward x up = (0,0,1) x (0,1,0) = (-1,0,0)
    let expected = Vector4D::vector(50.0, 50.0, 50.0).normalize();
    assert_eq!(r.direction, expected);
    assert!(r.direction.is_unit_vector());
}

#[test]
fn rows_below_center_point_down() {
    let c = Camera::default();
    let r = c.ray_for_pixel(5, 9, 11, 11);

    assert!(r.direction.y < 0.0);
    assert_eq!(r.direction.x, 0.0);
}

#[test]
fn camera_origin_is_preserved() {
    let c = Camera { origin: Vector4D::point(1.0, 2.0, -3.0), ..Default::default() };
    let r = c.ray_for_pixel(3, 3, 8, 8);

    assert_eq!(r.origin, Vector4D::point(1.0, 2.0, -3.0));
}

#[test]
fn screen_distance_from_fov() {
    let c = Camera::default();

    assert!((c.screen_distance(100) - 50.0).abs() < 1e-9);
}
