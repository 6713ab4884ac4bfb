use glam::DVec3;

/// Failures reported by [`PointOctree`](crate::PointOctree) and its geometry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OctreeError {
    #[error("octree size must be finite and positive, got {0}")]
    InvalidSize(f64),
    #[error("minimum node size must be finite and positive, got {0}")]
    InvalidMinSize(f64),
    #[error("position {0} is not finite")]
    NonFinitePosition(DVec3),
    #[error("ray direction must be finite and non-zero")]
    DegenerateRay,
    /// A node was given something other than a full set of children
    #[error("child node array must have exactly 8 nodes, got {0}")]
    ChildCount(usize),
    #[error("aborted insert after {0} attempts at growing the octree")]
    GrowLimit(usize),
    /// The tree would become too deep to traverse
    #[error("octree size {size} is too large relative to minimum node size {min_size}")]
    TooLarge { size: f64, min_size: f64 },
}
