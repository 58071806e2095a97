use crate::ray::Ray4D;

/// An intersection between a ray and a shape.
///
/// `ray` is the ray as the shape saw it, i.e. already transformed into the
/// shape's object space. `distance` is the signed `t` along that ray; a
/// negative distance lies behind the ray origin. `object_id` is the id of the
/// intersected shape within its `World`.
///
/// Intersections carry no ordering of their own. Picking the visible one is
/// the job of `discard_occluded`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub ray: Ray4D,
    pub distance: f64,
    pub object_id: usize,
}

impl Intersection {
    pub fn new(ray: Ray4D, distance: f64, object_id: usize) -> Intersection {
        Intersection { ray, distance, object_id }
    }

    /// Picks the nearest intersection in front of the ray origin.
    ///
    /// Scans left to right keeping a `best` candidate. A candidate replaces
    /// `best` when `best` lies behind the origin and the candidate does not,
    /// or when the candidate's distance is less than or equal to `best`'s.
    /// Equal distances therefore resolve to the *later* candidate.
    ///
    /// Returns `None` for an empty slice, or when the final `best` lies behind
    /// the origin. Since a negative candidate smaller than a nonnegative
    /// `best` also replaces it, the result depends on order: shapes yield
    /// their roots in ascending order, which keeps single-shape queries
    /// exact.
    ///
    /// # Examples
    ///
    /// ```
    /// # use visibility_tracer::ray::Ray4D;
    /// # use visibility_tracer::intersect::Intersection;
    /// let r = Ray4D::default();
    /// let xs = [Intersection::new(r, -1.0, 0), Intersection::new(r, 1.0, 0)];
    /// assert_eq!(Intersection::discard_occluded(&xs).unwrap().distance, 1.0);
    /// ```
    pub fn discard_occluded(intersections: &[Intersection]) -> Option<Intersection> {
        let mut best = *intersections.first()?;

        for candidate in intersections {
            if (best.distance < 0.0 && candidate.distance >= 0.0)
                || candidate.distance <= best.distance {
                best = *candidate;
            }
        }

        if best.distance >= 0.0 {
            Some(best)
        } else {
            None
        }
    }
}

#[cfg(test)]
fn at(distance: f64, object_id: usize) -> Intersection {
    Intersection::new(Ray4D::default(), distance, object_id)
}

#[test]
fn nearest_positive_wins() {
    let hit = Intersection::discard_occluded(&[at(1.0, 0), at(2.0, 0)]);

    assert_eq!(hit, Some(at(1.0, 0)));
}

#[test]
fn negative_is_displaced_by_positive() {
    let hit = Intersection::discard_occluded(&[at(-1.0, 0), at(1.0, 1)]);

    assert_eq!(hit, Some(at(1.0, 1)));
}

#[test]
fn all_behind_origin_is_no_hit() {
    assert_eq!(Intersection::discard_occluded(&[at(-2.0, 0), at(-1.0, 0)]), None);
}

#[test]
fn empty_is_no_hit() {
    assert_eq!(Intersection::discard_occluded(&[]), None);
}

#[test]
fn zero_distance_is_visible() {
    let hit = Intersection::discard_occluded(&[at(0.0, 0), at(0.0, 0)]);

    assert_eq!(hit.map(|i| i.distance), Some(0.0));
}

#[test]
fn ties_resolve_to_later_candidate() {
    let hit = Intersection::discard_occluded(&[at(3.0, 0), at(1.0, 1), at(1.0, 2), at(2.0, 3)]);

    assert_eq!(hit.map(|i| i.object_id), Some(2));
}

#[test]
fn later_negative_displaces_positive() {
    // Only comparisons against `best` matter: a negative candidate that is
    // smaller than a nonnegative `best` still replaces it.
    assert_eq!(Intersection::discard_occluded(&[at(4.0, 0), at(-4.0, 1)]), None);

    let hit = Intersection::discard_occluded(&[at(6.0, 0), at(-4.0, 0), at(4.0, 1)]);
    assert_eq!(hit.map(|i| i.distance), Some(4.0));
}
