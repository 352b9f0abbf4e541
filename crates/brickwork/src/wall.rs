//! Deterministic brick layout along a curve.
//!
//! The builder extends the curve slightly past both endpoints, slices the
//! wall into courses of similar-but-not-identical height, slices each
//! course into brick slots with perturbed joints, and emits one oriented
//! [`Brick`] per slot. A slot in the cap course may be skipped entirely
//! (crenellation), and a slot in a lower course may be split into two
//! sub-bricks (running bond).
//!
//! The generator is reseeded with [`WALL_SEED`] on every build, so the
//! same curve geometry always yields a bit-identical brick list. Draw
//! order matters for that guarantee: gap roll, depth roll, split roll,
//! then split fraction.

use glam::{Mat3, Quat, Vec2, Vec3};
use tracing::debug;

use crate::constants::{
    BRICK_DEPTH, BRICK_DEPTH_VARIANCE, BRICK_HEIGHT, BRICK_HEIGHT_VARIANCE, BRICK_WIDTH,
    BRICK_WIDTH_VARIANCE, END_EXTENSION, SPLIT_FRACTION_MAX, SPLIT_FRACTION_MIN,
    SPLIT_PROBABILITY, WALL_HEIGHT, WALL_SEED,
};
use crate::curve::Curve;
use crate::rng::Lcg;
use crate::types::Brick;

/// Place `splits + 1` breakpoints at `i / splits`, perturbing the interior
/// ones by a bounded random offset. The first and last breakpoints stay
/// pinned at 0 and 1.
pub fn random_splits(splits: usize, variance: f32, rng: &mut Lcg) -> Vec<f32> {
    let mut out = Vec::with_capacity(splits + 1);
    for i in 0..=splits {
        let base = if splits == 0 {
            0.0
        } else {
            i as f32 / splits as f32
        };
        if i == 0 || i == splits {
            out.push(base);
        } else {
            out.push(base + (rng.next_f32() - 0.5) * variance);
        }
    }
    out
}

/// Lay out bricks along `curve_in`.
///
/// `gap_probability` is the chance that a cap-course slot stays empty;
/// pass 0 for closed loops so rings never show crenellation gaps.
/// Construction is a single deterministic pass: no retries, no partial
/// output.
pub fn build_wall(curve_in: &Curve, gap_probability: f32) -> Vec<Brick> {
    // Push the wall slightly past the stroke so the ends don't look cut off
    let start_extension = curve_in.position_at(0.0) - curve_in.tangent_at(0.0) * END_EXTENSION;
    let end_extension = curve_in.position_at(1.0) + curve_in.tangent_at(1.0) * END_EXTENSION;
    let mut extended = Vec::with_capacity(curve_in.points().len() + 2);
    extended.push(start_extension);
    extended.extend_from_slice(curve_in.points());
    extended.push(end_extension);
    let curve = match Curve::from_points(&extended) {
        Ok(c) => c,
        // Unreachable: the input curve already has at least two points
        Err(_) => return Vec::new(),
    };

    let mut rng = Lcg::new(WALL_SEED);
    let wall_length = curve.length();
    let row_count = ((WALL_HEIGHT / BRICK_HEIGHT).floor() as u32).max(1);
    let rows = random_splits(
        row_count as usize,
        BRICK_HEIGHT_VARIANCE / WALL_HEIGHT,
        &mut rng,
    );
    let bricks_per_row = ((wall_length / BRICK_WIDTH).floor() as usize).max(2);

    let mut bricks = Vec::new();
    for (row_index, &row_u) in rows.iter().enumerate() {
        // The final breakpoint starts a partial cap course with its own
        // randomized height; it is the only course that can have gaps.
        let is_cap = row_index == rows.len() - 1;
        let course_height = match rows.get(row_index + 1) {
            Some(&next_row_u) => (next_row_u - row_u) * WALL_HEIGHT,
            None => BRICK_HEIGHT + (rng.next_f32() - 0.5) * BRICK_HEIGHT_VARIANCE,
        };
        let course_height_v = course_height / WALL_HEIGHT;

        // Joints are re-randomized per course so they don't line up vertically
        let joints = random_splits(
            bricks_per_row,
            BRICK_WIDTH_VARIANCE / wall_length.max(0.0001),
            &mut rng,
        );

        let course_start = bricks.len();
        for slot in 0..joints.len() - 1 {
            if is_cap && rng.next_f32() < gap_probability {
                continue;
            }

            let slot_u = joints[slot];
            let next_u = joints[slot + 1];
            let width_u = next_u - slot_u;
            let width_world = width_u * wall_length;
            let pivot_u = (slot_u + next_u) * 0.5;
            let depth = BRICK_DEPTH + (rng.next_f32() - 0.5) * BRICK_DEPTH_VARIANCE;

            let mut emit = |height_v: f32, pivot_v: f32, row_id_bottom: u32, row_id_top: u32| {
                bricks.push(Brick {
                    row_count: row_count * 2,
                    row_id_bottom,
                    row_id_top,
                    pivot_uv: Vec2::new(pivot_u, pivot_v),
                    bounds_uv: Vec2::new(width_u, height_v),
                    scale: Vec3::new(width_world, height_v * WALL_HEIGHT, depth),
                    position: Vec3::new(pivot_u * wall_length, 0.0, 0.0),
                    rotation: Quat::IDENTITY,
                });
            };

            let half_row = row_index as u32 * 2;
            if rng.next_f32() < SPLIT_PROBABILITY && !is_cap {
                let split = SPLIT_FRACTION_MIN
                    + (SPLIT_FRACTION_MAX - SPLIT_FRACTION_MIN) * rng.next_f32();
                let lower_v = course_height_v * split;
                let upper_v = course_height_v - lower_v;
                emit(lower_v, row_u + lower_v / 2.0, half_row, half_row + 1);
                emit(
                    upper_v,
                    row_u + course_height_v - upper_v / 2.0,
                    half_row + 1,
                    half_row + 2,
                );
            } else {
                emit(
                    course_height_v,
                    row_u + course_height_v / 2.0,
                    half_row,
                    half_row + 2,
                );
            }
        }

        // Pose pass: sample the extended curve at each brick's pivot
        for brick in &mut bricks[course_start..] {
            let mut position = curve.position_at(brick.pivot_uv.x);
            let tangent = curve.tangent_at(brick.pivot_uv.x);
            let normal = tangent.cross(Vec3::Y).normalize_or_zero();
            position.y = brick.pivot_uv.y * WALL_HEIGHT;
            brick.position = position;
            brick.rotation = Quat::from_mat3(&Mat3::from_cols(tangent, Vec3::Y, normal));
        }
    }

    debug!(
        "build_wall: {} bricks over {} courses (length {:.2})",
        bricks.len(),
        rows.len(),
        wall_length
    );

    bricks
}
