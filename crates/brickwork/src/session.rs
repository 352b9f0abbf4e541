//! Stroke session management.
//!
//! The pipeline owns every in-progress stroke and its derived artifacts.
//! Point appends only mark a stroke dirty; the heavy work happens in
//! [`BrickworkPipeline::tick`], which re-runs smoothing, shape snapping,
//! curve construction, and wall layout for dirty strokes and replaces
//! their artifacts wholesale. Hosts call `tick` once per frame and read
//! the latest curve/brick list through the accessors.

use std::collections::HashMap;

use glam::Vec3;
use tracing::{debug, info};

use crate::constants::{GAP_PROBABILITY, SMOOTHING_STEPS};
use crate::curve::Curve;
use crate::smoothing::smooth_points;
use crate::snap::snap_shape;
use crate::types::{Brick, StrokeHandle};
use crate::wall::build_wall;

#[derive(Debug, Default)]
struct StrokeEntry {
    points: Vec<Vec3>,
    curve: Option<Curve>,
    bricks: Vec<Brick>,
    dirty: bool,
}

/// Owns all strokes and rebuilds their walls on demand.
///
/// Strokes are addressed by [`StrokeHandle`]s that stay valid until
/// `clear()`; handles are never reused, so a stale handle resolves to
/// nothing rather than to someone else's stroke. All work is synchronous
/// and single-threaded: a rebuild runs to completion inside `tick`.
#[derive(Debug, Default)]
pub struct BrickworkPipeline {
    entries: HashMap<StrokeHandle, StrokeEntry>,
    next_id: u64,
}

impl BrickworkPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke and return its handle.
    pub fn begin_stroke(&mut self) -> StrokeHandle {
        let handle = StrokeHandle(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            handle,
            StrokeEntry {
                dirty: true,
                ..Default::default()
            },
        );
        debug!("begin_stroke: {:?}", handle);
        handle
    }

    /// Append a raw input point to a stroke.
    ///
    /// Ignored when the handle is unknown or the point is within
    /// `min_spacing` of the last accepted point; pointer input arrives
    /// much denser than the pipeline needs.
    pub fn append_point(&mut self, handle: StrokeHandle, point: Vec3, min_spacing: f32) {
        let Some(entry) = self.entries.get_mut(&handle) else {
            debug!("append_point: unknown stroke {:?}, ignoring", handle);
            return;
        };
        if let Some(last) = entry.points.last() {
            if last.distance(point) <= min_spacing {
                return;
            }
        }
        entry.points.push(point);
        entry.dirty = true;
    }

    /// Rebuild artifacts for every dirty stroke.
    ///
    /// Strokes with fewer than two points are skipped (their previous
    /// artifacts, if any, stay valid). A circle snap suppresses cap-course
    /// gaps so closed rings never show crenellation.
    pub fn tick(&mut self) {
        for (handle, entry) in self.entries.iter_mut() {
            if !entry.dirty {
                continue;
            }
            entry.dirty = false;
            if entry.points.len() < 2 {
                continue;
            }

            let smoothed = smooth_points(&entry.points, SMOOTHING_STEPS);
            let snapped = snap_shape(&smoothed);
            let final_points = snapped.as_ref().map_or(&smoothed[..], |s| s.points());
            let curve = match Curve::from_points(final_points) {
                Ok(curve) => curve,
                // Unreachable with >= 2 points; keep the previous artifacts
                Err(_) => continue,
            };

            let gap_probability = match &snapped {
                Some(shape) if shape.is_circle() => 0.0,
                _ => GAP_PROBABILITY,
            };
            let bricks = build_wall(&curve, gap_probability);
            info!(
                "tick: rebuilt {:?} ({} raw points -> {} bricks{})",
                handle,
                entry.points.len(),
                bricks.len(),
                if snapped.is_some() { ", snapped" } else { "" }
            );

            entry.curve = Some(curve);
            entry.bricks = bricks;
        }
    }

    /// Drop all strokes and artifacts.
    pub fn clear(&mut self) {
        debug!("clear: dropping {} strokes", self.entries.len());
        self.entries.clear();
    }

    /// Latest curve for a stroke, if one has been built.
    pub fn curve(&self, handle: StrokeHandle) -> Option<&Curve> {
        self.entries.get(&handle).and_then(|e| e.curve.as_ref())
    }

    /// Latest brick list for a stroke (empty until the first rebuild).
    pub fn bricks(&self, handle: StrokeHandle) -> &[Brick] {
        self.entries
            .get(&handle)
            .map_or(&[], |e| e.bricks.as_slice())
    }

    /// Number of accepted raw points in a stroke.
    pub fn point_count(&self, handle: StrokeHandle) -> usize {
        self.entries.get(&handle).map_or(0, |e| e.points.len())
    }

    /// Number of live strokes.
    pub fn stroke_count(&self) -> usize {
        self.entries.len()
    }
}
