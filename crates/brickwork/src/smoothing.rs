//! Iterative polyline relaxation.
//!
//! Raw pointer strokes are jagged; each relaxation pass pulls every
//! interior point halfway toward the midpoint of its neighbors, leaving
//! the endpoints fixed. A handful of passes turns a hand-drawn polyline
//! into a smooth curve without changing its point count.

use glam::Vec3;

/// Smooth a point sequence with the given number of relaxation passes.
///
/// Each pass reads only the previous pass's points, so the result is
/// independent of iteration order. Sequences shorter than 3 points are
/// returned unchanged. Deterministic: identical input and step count
/// always produce identical output.
pub fn smooth_points(points: &[Vec3], steps: usize) -> Vec<Vec3> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut smoothed = points.to_vec();
    for _ in 0..steps {
        let mut current = smoothed.clone();
        for i in 1..smoothed.len() - 1 {
            let midpoint = (smoothed[i - 1] + smoothed[i + 1]) * 0.5;
            current[i] = smoothed[i].lerp(midpoint, 0.5);
        }
        smoothed = current;
    }
    smoothed
}
