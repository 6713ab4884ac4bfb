//! Selection criteria for traversing a [`PointOctree`](crate::PointOctree).

use glam::DVec3;

use crate::{Aabb, Ray};

/// Decides which nodes are entered and which elements are yielded during a traversal
pub trait Query {
    /// Whether a node with `bounds` may contain accepted elements
    ///
    /// May return false positives, but a node rejected here is skipped along with its
    /// descendants.
    fn visit(&self, bounds: &Aabb) -> bool;

    /// Whether an element at `position` is part of the result
    fn accept(&self, position: DVec3) -> bool;
}

/// Every element in the tree
#[derive(Debug, Copy, Clone, Default)]
pub struct Everything;

impl Query for Everything {
    fn visit(&self, _: &Aabb) -> bool {
        true
    }

    fn accept(&self, _: DVec3) -> bool {
        true
    }
}

/// Elements no further than `max_distance` from `point`
#[derive(Debug, Copy, Clone)]
pub struct WithinDistance {
    point: DVec3,
    sqr_max_distance: f64,
}

impl WithinDistance {
    pub fn new(point: DVec3, max_distance: f64) -> Self {
        Self {
            point,
            sqr_max_distance: max_distance * max_distance,
        }
    }
}

impl Query for WithinDistance {
    fn visit(&self, bounds: &Aabb) -> bool {
        bounds.sqr_distance_to_point(self.point) <= self.sqr_max_distance
    }

    fn accept(&self, position: DVec3) -> bool {
        (position - self.point).length_squared() <= self.sqr_max_distance
    }
}

/// Elements no further than `max_distance` from the infinite line through a [`Ray`]
///
/// Elements behind the ray's origin are included.
#[derive(Debug, Copy, Clone)]
pub struct NearLine {
    ray: Ray,
    max_distance: f64,
}

impl NearLine {
    /// Only the magnitude of `max_distance` is used
    pub fn new(ray: Ray, max_distance: f64) -> Self {
        Self {
            ray,
            max_distance: max_distance.abs(),
        }
    }
}

impl Query for NearLine {
    fn visit(&self, bounds: &Aabb) -> bool {
        // Not a real distance check, but never rejects a node holding a match
        bounds
            .expanded(2.0 * self.max_distance)
            .intersects_line(&self.ray)
    }

    fn accept(&self, position: DVec3) -> bool {
        self.ray.sqr_distance_to_point(position) <= self.max_distance * self.max_distance
    }
}
