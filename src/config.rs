//! Sizing parameters for a [`PointOctree`](crate::PointOctree).

use glam::DVec3;

use crate::{OctreeError, MAX_DEPTH};

/// Largest supported ratio between a root's side length and the minimum node size
///
/// Keeps the number of levels that can hold children below [`MAX_DEPTH`].
pub(crate) const MAX_EXTENT_RATIO: f64 = (1u64 << (MAX_DEPTH - 2)) as f64;

/// Configuration of a [`PointOctree`](crate::PointOctree)
#[derive(Clone, Debug)]
pub struct OctreeConfig {
    /// Side length of the root cube before any growth
    ///
    /// The root never shrinks below this size.
    pub initial_size: f64,

    /// Nodes are not split if their children would have sides shorter than this
    pub min_size: f64,

    /// World-space center of the initial root cube
    pub center: DVec3,

    /// How many times a single insert may double the root before giving up
    pub max_grow_attempts: usize,
}

impl OctreeConfig {
    /// Check that the sizes describe a usable tree
    pub fn validate(&self) -> Result<(), OctreeError> {
        if !(self.initial_size.is_finite() && self.initial_size > 0.0) {
            return Err(OctreeError::InvalidSize(self.initial_size));
        }
        if !(self.min_size.is_finite() && self.min_size > 0.0) {
            return Err(OctreeError::InvalidMinSize(self.min_size));
        }
        if !self.center.is_finite() {
            return Err(OctreeError::NonFinitePosition(self.center));
        }
        check_extent(self.initial_size, self.min_size)
    }
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            initial_size: 16.0,
            min_size: 1.0,
            center: DVec3::ZERO,
            max_grow_attempts: 20,
        }
    }
}

/// Ensure a root of side length `size` can be traversed
pub(crate) fn check_extent(size: f64, min_size: f64) -> Result<(), OctreeError> {
    if size / min_size > MAX_EXTENT_RATIO {
        return Err(OctreeError::TooLarge { size, min_size });
    }
    Ok(())
}
