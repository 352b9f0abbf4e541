//! Fixed tunables for the wall pipeline. These are compile-time constants,
//! not runtime settings.

/// Nominal brick width along the wall direction, world units.
pub const BRICK_WIDTH: f32 = 0.2;

/// Variance applied to horizontal joint positions (world units).
pub const BRICK_WIDTH_VARIANCE: f32 = 0.14;

/// Nominal brick (course) height, world units.
pub const BRICK_HEIGHT: f32 = 0.2;

/// Variance applied to course boundary positions (world units).
pub const BRICK_HEIGHT_VARIANCE: f32 = 0.09;

/// Nominal brick depth (wall thickness), world units.
pub const BRICK_DEPTH: f32 = 0.2;

/// Per-brick depth jitter range.
pub const BRICK_DEPTH_VARIANCE: f32 = 0.05;

/// Total wall height, world units.
pub const WALL_HEIGHT: f32 = 1.4;

/// Probability that a cap-course slot is left empty (crenellation).
pub const GAP_PROBABILITY: f32 = 0.35;

/// Probability that a slot is split vertically into two sub-bricks.
pub const SPLIT_PROBABILITY: f32 = 0.4;

/// Lower bound for the vertical split fraction.
pub const SPLIT_FRACTION_MIN: f32 = 0.3;

/// Upper bound for the vertical split fraction.
pub const SPLIT_FRACTION_MAX: f32 = 0.7;

/// Distance the wall extends past each stroke endpoint, world units.
pub const END_EXTENSION: f32 = 0.1;

/// Seed for the layout generator. Fixed so that rebuilding an unchanged
/// curve yields a bit-identical brick list.
pub const WALL_SEED: u32 = 0;

/// Relaxation passes applied to raw strokes before classification.
pub const SMOOTHING_STEPS: usize = 40;

/// Minimum distance between accepted stroke points, world units.
pub const MIN_POINT_SPACING: f32 = 0.025;

/// Minimum stroke length (in points) before shape classification runs.
pub const MIN_SNAP_POINTS: usize = 6;

/// Maximum start/end distance for a stroke to count as closed.
pub const CLOSURE_TOLERANCE: f32 = 0.35;

/// Maximum horizontal aspect deviation for a circle candidate.
pub const CIRCLE_ASPECT_TOLERANCE: f32 = 0.25;

/// Maximum horizontal aspect deviation for a square candidate.
pub const SQUARE_ASPECT_TOLERANCE: f32 = 0.20;

/// Minimum mean radius for a circle snap.
pub const CIRCLE_MIN_RADIUS: f32 = 0.25;

/// Maximum radial coefficient of variation (stdev / mean) for a round stroke.
pub const CIRCLE_MAX_RADIUS_SPREAD: f32 = 0.20;

/// Minimum footprint extent (larger of width/depth) for a square snap.
pub const SQUARE_MIN_EXTENT: f32 = 0.35;

/// Segments per side of an idealized square.
pub const SQUARE_SIDE_SEGMENTS: usize = 12;

/// Minimum segment count for an idealized circle.
pub const CIRCLE_MIN_SEGMENTS: usize = 32;

/// Segments per world unit of radius for an idealized circle.
pub const CIRCLE_SEGMENTS_PER_UNIT: f32 = 24.0;
