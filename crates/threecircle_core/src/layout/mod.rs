//! Fixed-geometry diagram layout.
//!
//! # Responsibility
//! - Hold the single geometry/style record for the three-circle canvas.
//! - Turn a bucket set into a serializable scene graph.
//! - Serialize the scene graph to SVG for export surfaces.
//!
//! # Invariants
//! - No dynamic layout, collision avoidance or text measurement.
//! - Identical `(title, buckets, config)` input yields an identical diagram.

pub mod diagram;
pub mod geometry;
pub mod svg;
