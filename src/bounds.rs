use core::fmt;

use glam::DVec3;

use crate::Ray;

/// An axis-aligned bounding box in world space
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    /// Smallest point inside the box
    pub min: DVec3,
    /// Largest point inside the box
    pub max: DVec3,
}

impl Aabb {
    /// Construct a cube with edges of length `size` centered on `center`
    pub fn from_center_size(center: DVec3, size: f64) -> Self {
        let half = DVec3::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths on each axis
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Whether `point` is inside the box or on its surface
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Grow the box by `amount` on every axis, keeping it centered
    ///
    /// Each face moves outwards by half of `amount`.
    pub fn expanded(&self, amount: f64) -> Self {
        let half = DVec3::splat(amount / 2.0);
        Self {
            min: self.min - half,
            max: self.max + half,
        }
    }

    /// Double the box on every axis, extending it from `center` towards `target`
    ///
    /// Returns the new box and its center. The new center is the old box's corner on the
    /// `target` side, and the old box stays exactly one octant of the new one.
    pub(crate) fn doubled_towards(&self, center: DVec3, target: DVec3) -> (Self, DVec3) {
        let high = target.cmpge(center);
        let size = self.size();
        let doubled = Self {
            min: DVec3::select(high, self.min, self.min - size),
            max: DVec3::select(high, self.max + size, self.max),
        };
        (doubled, DVec3::select(high, self.max, self.min))
    }

    /// The point in the box nearest to `point`
    pub fn closest_point(&self, point: DVec3) -> DVec3 {
        point.max(self.min).min(self.max)
    }

    /// Squared distance from `point` to the box, or 0 if it's inside
    pub fn sqr_distance_to_point(&self, point: DVec3) -> f64 {
        (self.closest_point(point) - point).length_squared()
    }

    /// Whether the infinite line through `ray` passes through the box
    pub fn intersects_line(&self, ray: &Ray) -> bool {
        let origin = ray.origin();
        let direction = ray.direction();
        // Slab method, unclamped in both directions
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for axis in 0..3 {
            if direction[axis] == 0.0 {
                // Parallel to this slab
                if origin[axis] < self.min[axis] || origin[axis] > self.max[axis] {
                    return false;
                }
                continue;
            }
            let t1 = (self.min[axis] - origin[axis]) / direction[axis];
            let t2 = (self.max[axis] - origin[axis]) / direction[axis];
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        }
        t_min <= t_max
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
