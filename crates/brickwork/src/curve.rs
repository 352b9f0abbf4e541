//! Arc-length-parameterized curve.
//!
//! A [`Curve`] is built once from a finalized point sequence and never
//! mutates; recomputation means constructing a new curve. Positions and
//! tangents are sampled at a normalized arc-length parameter `u` in
//! `[0, 1]`, with out-of-range queries clamped to the end segments.

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("curve requires at least two points, got {0}")]
    TooFewPoints(usize),
}

/// Immutable polyline with a normalized arc-length parameterization.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Vec3>,
    points_u: Vec<f32>,
    length: f32,
}

impl Curve {
    /// Build a curve from an ordered point sequence.
    ///
    /// Each point is assigned the fraction of total path length traveled
    /// to reach it. A zero-length path gets an all-zero parameterization
    /// and its length floored at epsilon, so sampling never divides by
    /// zero.
    pub fn from_points(points_in: &[Vec3]) -> Result<Self, CurveError> {
        if points_in.len() < 2 {
            return Err(CurveError::TooFewPoints(points_in.len()));
        }

        let points = points_in.to_vec();
        let length: f32 = points.windows(2).map(|w| w[0].distance(w[1])).sum();

        let mut points_u = Vec::with_capacity(points.len());
        let mut traveled = 0.0_f32;
        for i in 0..points.len() {
            points_u.push(if length == 0.0 { 0.0 } else { traveled / length });
            if i + 1 < points.len() {
                traveled += points[i].distance(points[i + 1]);
            }
        }

        Ok(Self {
            points,
            points_u,
            length: length.max(f32::EPSILON),
        })
    }

    /// The curve's points.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Normalized arc-length position of each point (monotone, 0 to 1).
    pub fn points_u(&self) -> &[f32] {
        &self.points_u
    }

    /// Total path length, floored at epsilon.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Sample the position at normalized arc length `u`.
    ///
    /// `u` outside `[0, 1]` clamps to the first/last point.
    pub fn position_at(&self, u: f32) -> Vec3 {
        let (start, end) = self.segment_from_u(u);
        let seg_range = self.points_u[end] - self.points_u[start];
        let local = if seg_range == 0.0 {
            0.0
        } else {
            (u - self.points_u[start]) / seg_range
        };
        self.points[start].lerp(self.points[end], local.clamp(0.0, 1.0))
    }

    /// Direction of the segment bracketing `u`.
    ///
    /// The tangent field is piecewise constant: it does not interpolate
    /// across breakpoints. A zero-length segment yields the zero vector.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let (start, end) = self.segment_from_u(u);
        (self.points[end] - self.points[start]).normalize_or_zero()
    }

    /// Indices of the segment bracketing `u`: before the first breakpoint
    /// maps to the first segment, past the last to the last segment.
    fn segment_from_u(&self, u: f32) -> (usize, usize) {
        if u <= 0.0 {
            return (0, 1);
        }
        if u >= 1.0 {
            return (self.points.len() - 2, self.points.len() - 1);
        }
        for (i, &point_u) in self.points_u.iter().enumerate() {
            if u <= point_u {
                return (i.saturating_sub(1), i);
            }
        }
        (self.points.len() - 2, self.points.len() - 1)
    }
}
