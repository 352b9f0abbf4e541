use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Stable identifier for a stroke owned by a
/// [`BrickworkPipeline`](crate::session::BrickworkPipeline).
///
/// Handles are monotonically assigned and never reused, so a handle held
/// across a `clear()` simply stops resolving instead of aliasing a newer
/// stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StrokeHandle(pub(crate) u64);

/// One oriented brick in a wall layout.
///
/// World pose and size are ready for instanced upload; the `uv` fields
/// describe the brick in the wall's own (arc length, height fraction)
/// parameter space, and the row ids locate it on a half-row grid so that
/// vertically split bricks address the same granularity as full ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Total half-row count in the wall (two half-rows per course).
    pub row_count: u32,
    /// Half-row at the brick's bottom edge.
    pub row_id_bottom: u32,
    /// Half-row at the brick's top edge.
    pub row_id_top: u32,
    /// Pivot in wall parameter space: (arc-length u, height fraction v).
    pub pivot_uv: Vec2,
    /// Footprint in wall parameter space: (width as u span, height fraction).
    pub bounds_uv: Vec2,
    /// World-space size: (width, height, depth).
    pub scale: Vec3,
    /// World-space pivot position.
    pub position: Vec3,
    /// Orientation: width axis along the wall tangent, height axis up.
    pub rotation: Quat,
}
