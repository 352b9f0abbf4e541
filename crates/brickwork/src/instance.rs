//! GPU-ready instance data for brick rendering.
//!
//! Renderers draw a wall as one instanced box mesh; each brick contributes
//! a single world matrix with its non-uniform scale baked in. The struct
//! is bytemuck-compatible so a whole brick list can be uploaded with one
//! `cast_slice`.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::types::Brick;

/// Per-instance data for one brick: a column-major world matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BrickInstance {
    pub transform: [[f32; 4]; 4],
}

impl From<&Brick> for BrickInstance {
    fn from(brick: &Brick) -> Self {
        let matrix = Mat4::from_scale_rotation_translation(
            brick.scale,
            brick.rotation,
            brick.position,
        );
        Self {
            transform: matrix.to_cols_array_2d(),
        }
    }
}

/// Convert a brick list into upload-ready instance data.
pub fn instances(bricks: &[Brick]) -> Vec<BrickInstance> {
    bricks.iter().map(BrickInstance::from).collect()
}
