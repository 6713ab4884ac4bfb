use glam::DVec3;

use crate::OctreeError;

/// A half-line starting at `origin` and moving in a unit-length `direction`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Construct a ray starting at `origin` and moving in `direction`
    ///
    /// `direction` need not have unit length; it is normalized here.
    pub fn new(origin: DVec3, direction: DVec3) -> Result<Self, OctreeError> {
        if !origin.is_finite() {
            return Err(OctreeError::NonFinitePosition(origin));
        }
        let direction = direction
            .try_normalize()
            .ok_or(OctreeError::DegenerateRay)?;
        Ok(Self { origin, direction })
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Unit-length direction
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Squared distance from `point` to the infinite line through this ray
    ///
    /// Points behind `origin` are measured against the line's extension, not against `origin`.
    pub fn sqr_distance_to_point(&self, point: DVec3) -> f64 {
        self.direction.cross(point - self.origin).length_squared()
    }
}
