//! Muratura brickwork core - stroke-to-wall procedural geometry
//!
//! This crate turns freehand 3D strokes into brick wall layouts:
//! - [`smoothing`] - iterative polyline relaxation
//! - [`snap`] - circle/square classification of closed-ish strokes
//! - [`curve`] - immutable arc-length-parameterized curves
//! - [`wall`] - deterministic brick layout along a curve
//! - [`session`] - stroke ownership, dirty tracking, and per-tick rebuilds
//! - [`instance`] - GPU-ready per-brick instance data
//! - [`types`] - shared data model ([`types::Brick`], [`types::StrokeHandle`])
//! - [`constants`] - fixed tunables
//!
//! Rendering, input capture, and scene wiring are host concerns: the host
//! feeds raw world-space points in and reads brick lists and curves out.

pub mod constants;
pub mod curve;
pub mod instance;
pub mod rng;
pub mod session;
pub mod smoothing;
pub mod snap;
pub mod types;
pub mod wall;

pub use constants::*;
pub use curve::*;
pub use instance::*;
pub use rng::*;
pub use session::*;
pub use smoothing::*;
pub use snap::*;
pub use types::*;
pub use wall::*;
