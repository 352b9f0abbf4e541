//! Shape classification for closed-ish strokes.
//!
//! Two independent classifiers decide whether a smoothed stroke was meant
//! to be a perfect circle or a square. On a match the hand-drawn polyline
//! is replaced with an idealized closed one; "no match" is a normal
//! outcome and the stroke is used as drawn. Both classifiers are pure
//! functions of the input points and fixed thresholds.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CIRCLE_ASPECT_TOLERANCE, CIRCLE_MAX_RADIUS_SPREAD, CIRCLE_MIN_RADIUS, CIRCLE_MIN_SEGMENTS,
    CIRCLE_SEGMENTS_PER_UNIT, CLOSURE_TOLERANCE, MIN_SNAP_POINTS, SQUARE_ASPECT_TOLERANCE,
    SQUARE_MIN_EXTENT, SQUARE_SIDE_SEGMENTS,
};

/// An idealized closed polyline substituted for a matched stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SnappedShape {
    Circle {
        /// Closed circular polyline (first and last point coincide).
        points: Vec<Vec3>,
        center: Vec3,
        radius: f32,
    },
    Square {
        /// Closed square polyline (first and last point coincide).
        points: Vec<Vec3>,
        center: Vec3,
        /// Half the side length.
        half_extent: f32,
    },
}

impl SnappedShape {
    /// The idealized polyline.
    pub fn points(&self) -> &[Vec3] {
        match self {
            SnappedShape::Circle { points, .. } | SnappedShape::Square { points, .. } => points,
        }
    }

    /// Whether this is a closed circular ring.
    pub fn is_circle(&self) -> bool {
        matches!(self, SnappedShape::Circle { .. })
    }
}

/// Horizontal footprint statistics shared by both classifiers.
struct Footprint {
    centroid: Vec3,
    extent: Vec2,
}

fn footprint(points: &[Vec3]) -> Footprint {
    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    let mut sum = Vec3::ZERO;
    for p in points {
        min = min.min(Vec2::new(p.x, p.z));
        max = max.max(Vec2::new(p.x, p.z));
        sum += *p;
    }
    Footprint {
        centroid: sum / points.len() as f32,
        extent: max - min,
    }
}

/// How far the horizontal bounding box deviates from a square.
fn aspect_deviation(extent: Vec2) -> f32 {
    (extent.x - extent.y).abs() / extent.x.max(extent.y)
}

fn is_closed(points: &[Vec3]) -> bool {
    points[0].distance(points[points.len() - 1]) <= CLOSURE_TOLERANCE
}

/// Classify a stroke, trying the circle first. First match wins.
pub fn snap_shape(points: &[Vec3]) -> Option<SnappedShape> {
    snap_to_circle(points).or_else(|| snap_to_square(points))
}

/// Try to classify a stroke as a circle.
///
/// Requires a closed-ish, horizontally square-ish stroke whose per-point
/// radii from the centroid are large enough and spread tightly enough to
/// read as round. The emitted ring's segment count scales with radius so
/// large circles stay smooth.
pub fn snap_to_circle(points: &[Vec3]) -> Option<SnappedShape> {
    if points.len() < MIN_SNAP_POINTS || !is_closed(points) {
        return None;
    }
    let fp = footprint(points);
    if aspect_deviation(fp.extent) > CIRCLE_ASPECT_TOLERANCE {
        return None;
    }

    let radii: Vec<f32> = points
        .iter()
        .map(|p| Vec2::new(p.x - fp.centroid.x, p.z - fp.centroid.z).length())
        .collect();
    let mean = radii.iter().sum::<f32>() / radii.len() as f32;
    if mean < CIRCLE_MIN_RADIUS {
        return None;
    }
    let variance = radii.iter().map(|r| (r - mean) * (r - mean)).sum::<f32>() / radii.len() as f32;
    if variance.sqrt() / mean > CIRCLE_MAX_RADIUS_SPREAD {
        return None;
    }

    let segments = ((mean * CIRCLE_SEGMENTS_PER_UNIT).ceil() as usize).max(CIRCLE_MIN_SEGMENTS);
    let center = fp.centroid;
    let ring = (0..=segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            center + Vec3::new(angle.cos(), 0.0, angle.sin()) * mean
        })
        .collect();

    Some(SnappedShape::Circle {
        points: ring,
        center,
        radius: mean,
    })
}

/// Try to classify a stroke as a square.
///
/// In addition to the shared closure and aspect gates, the stroke must be
/// large enough and pass through all four angular quadrants around its
/// centroid: a nearly straight out-and-back scribble closes on itself but
/// is not a square.
pub fn snap_to_square(points: &[Vec3]) -> Option<SnappedShape> {
    if points.len() < MIN_SNAP_POINTS || !is_closed(points) {
        return None;
    }
    let fp = footprint(points);
    if aspect_deviation(fp.extent) > SQUARE_ASPECT_TOLERANCE {
        return None;
    }
    let side = fp.extent.x.max(fp.extent.y);
    if side < SQUARE_MIN_EXTENT {
        return None;
    }

    let mut quadrants = [false; 4];
    for p in points {
        let dx = p.x - fp.centroid.x;
        let dz = p.z - fp.centroid.z;
        let q = match (dx >= 0.0, dz >= 0.0) {
            (true, true) => 0,
            (false, true) => 1,
            (false, false) => 2,
            (true, false) => 3,
        };
        quadrants[q] = true;
    }
    if quadrants.contains(&false) {
        return None;
    }

    let half = side * 0.5;
    let center = fp.centroid;
    let corners = [
        center + Vec3::new(-half, 0.0, -half),
        center + Vec3::new(half, 0.0, -half),
        center + Vec3::new(half, 0.0, half),
        center + Vec3::new(-half, 0.0, half),
    ];
    let mut outline = Vec::with_capacity(4 * SQUARE_SIDE_SEGMENTS + 1);
    for side_index in 0..4 {
        let a = corners[side_index];
        let b = corners[(side_index + 1) % 4];
        for i in 0..SQUARE_SIDE_SEGMENTS {
            outline.push(a.lerp(b, i as f32 / SQUARE_SIDE_SEGMENTS as f32));
        }
    }
    outline.push(outline[0]);

    Some(SnappedShape::Square {
        points: outline,
        center,
        half_extent: half,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 40 points evenly spaced on a circle, start and end coincident.
    fn circle_stroke(radius_x: f32, radius_z: f32) -> Vec<Vec3> {
        (0..40)
            .map(|i| {
                let angle = i as f32 / 39.0 * TAU;
                Vec3::new(angle.cos() * radius_x, 0.0, angle.sin() * radius_z)
            })
            .collect()
    }

    /// Points traced around the perimeter of an axis-aligned square.
    fn square_stroke(half: f32) -> Vec<Vec3> {
        let corners = [
            Vec3::new(-half, 0.0, -half),
            Vec3::new(half, 0.0, -half),
            Vec3::new(half, 0.0, half),
            Vec3::new(-half, 0.0, half),
        ];
        let mut out = Vec::new();
        for s in 0..4 {
            let a = corners[s];
            let b = corners[(s + 1) % 4];
            for i in 0..5 {
                out.push(a.lerp(b, i as f32 / 5.0));
            }
        }
        out.push(out[0]);
        out
    }

    #[test]
    fn test_round_stroke_snaps_to_circle() {
        let snapped = snap_to_circle(&circle_stroke(1.0, 1.0)).expect("should classify");
        let SnappedShape::Circle {
            points,
            center,
            radius,
        } = &snapped
        else {
            panic!("expected circle");
        };
        assert!((radius - 1.0).abs() < 0.05);
        assert!(center.distance(Vec3::ZERO) < 0.05);
        // Closed ring, at least the minimum segment count
        assert!(points.len() >= CIRCLE_MIN_SEGMENTS + 1);
        assert!(points[0].distance(points[points.len() - 1]) < 1e-5);
        // Every emitted point sits on the recovered radius
        for p in points {
            let r = Vec2::new(p.x - center.x, p.z - center.z).length();
            assert!((r - radius).abs() < 1e-5);
        }
    }

    #[test]
    fn test_segment_count_scales_with_radius() {
        let big: Vec<Vec3> = circle_stroke(3.0, 3.0);
        let Some(SnappedShape::Circle { points, radius, .. }) = snap_to_circle(&big) else {
            panic!("expected circle");
        };
        // ~24 segments per unit radius, so well above the minimum
        assert!((radius - 3.0).abs() < 0.15);
        assert!(points.len() > CIRCLE_MIN_SEGMENTS + 1);
    }

    #[test]
    fn test_ellipse_rejected_by_both() {
        let ellipse = circle_stroke(2.0, 1.0);
        assert!(snap_to_circle(&ellipse).is_none());
        assert!(snap_to_square(&ellipse).is_none());
    }

    #[test]
    fn test_open_stroke_never_snaps() {
        // Half circle: start/end two radii apart
        let arc: Vec<Vec3> = (0..20)
            .map(|i| {
                let angle = i as f32 / 19.0 * (TAU / 2.0);
                Vec3::new(angle.cos(), 0.0, angle.sin())
            })
            .collect();
        assert!(snap_to_circle(&arc).is_none());
        assert!(snap_to_square(&arc).is_none());
    }

    #[test]
    fn test_too_few_points_rejected() {
        let tiny = circle_stroke(1.0, 1.0)[..5].to_vec();
        assert!(snap_to_circle(&tiny).is_none());
        assert!(snap_to_square(&tiny).is_none());
    }

    #[test]
    fn test_small_circle_rejected() {
        // Round and closed, but under the minimum radius
        assert!(snap_to_circle(&circle_stroke(0.1, 0.1)).is_none());
    }

    #[test]
    fn test_wobbly_radius_rejected() {
        let mut wobbly: Vec<Vec3> = (0..40)
            .map(|i| {
                let angle = i as f32 / 40.0 * TAU;
                let r = if i % 2 == 0 { 0.6 } else { 1.4 };
                Vec3::new(angle.cos() * r, 0.0, angle.sin() * r)
            })
            .collect();
        wobbly.push(wobbly[0]);
        assert!(snap_to_circle(&wobbly).is_none());
    }

    #[test]
    fn test_square_stroke_snaps_to_square() {
        let snapped = snap_to_square(&square_stroke(0.5)).expect("should classify");
        let SnappedShape::Square {
            points,
            center,
            half_extent,
        } = &snapped
        else {
            panic!("expected square");
        };
        assert!((half_extent - 0.5).abs() < 1e-4);
        // The repeated closing point biases the centroid slightly
        assert!(center.distance(Vec3::ZERO) < 0.05);
        assert_eq!(points.len(), 4 * SQUARE_SIDE_SEGMENTS + 1);
        assert_eq!(points[0], points[points.len() - 1]);
    }

    #[test]
    fn test_small_square_rejected() {
        assert!(snap_to_square(&square_stroke(0.1)).is_none());
    }

    #[test]
    fn test_out_and_back_rejected_by_quadrant_guard() {
        // A diagonal scribble out and back: closed, square-ish bounds,
        // large enough, but it only ever visits two quadrants.
        let mut path: Vec<Vec3> = (0..10)
            .map(|i| {
                let d = i as f32 * 0.06;
                Vec3::new(d, 0.0, d)
            })
            .collect();
        path.extend((0..10).rev().map(|i| {
            let d = i as f32 * 0.06;
            Vec3::new(d, 0.0, d)
        }));
        assert!(snap_to_square(&path).is_none());
    }

    #[test]
    fn test_circle_checked_first() {
        let round = circle_stroke(1.0, 1.0);
        assert!(matches!(
            snap_shape(&round),
            Some(SnappedShape::Circle { .. })
        ));
        // A crisp square outline satisfies both classifiers (its radial
        // spread is well under the circle gate), so the circle wins.
        let square = square_stroke(0.5);
        assert!(snap_to_square(&square).is_some());
        assert!(matches!(
            snap_shape(&square),
            Some(SnappedShape::Circle { .. })
        ));
    }
}
