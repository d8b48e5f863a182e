//! Numeric constants shared by outline construction and tiling.
//!
//! Policy
//! - Fixed constants; the rounding granularity is part of the output contract
//!   (downstream buffers compare bit-for-bit), so it is not a runtime knob.

/// Outline coordinates are rounded to the nearest `1 / ROUND_GRANULARITY`.
pub const ROUND_GRANULARITY: f64 = 100.0;
/// Degrees in a full traversal of the outline.
pub const FULL_TURN: f64 = 360.0;
/// Width of one quadrant band in degrees.
pub const QUADRANT: f64 = 90.0;
