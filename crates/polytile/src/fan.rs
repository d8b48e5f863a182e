//! Triangle-fan vertex buffers around a polygon center.
//!
//! Every triangle is laid out `(point, center, next_point)` as six flat values,
//! so the closed and the open builder produce the same winding.
//!
//! - `to_closed_fan`: one triangle per outline point, the last one wrapping
//!   back to the first point. Ready for triangle-list rasterization.
//! - `to_open_fan`: consecutive pairs only, no wrap (one triangle fewer).

use crate::outline::{build_outline, point_at, point_count};
use crate::Point;

/// Floats per emitted triangle.
pub const TRIANGLE_LEN: usize = 6;

/// One fan triangle `(a, center, b)`.
#[inline]
pub fn triangle(a: Point, b: Point, center: Point) -> [f64; TRIANGLE_LEN] {
    [a.x, a.y, center.x, center.y, b.x, b.y]
}

/// Closed fan over `outline`: `3 * outline.len()` floats.
///
/// An empty outline gives an empty buffer.
pub fn to_closed_fan(center: Point, outline: &[f64]) -> Vec<f64> {
    let n = point_count(outline);
    let mut out = vec![0.0; TRIANGLE_LEN * n];
    for (k, tri) in out.chunks_exact_mut(TRIANGLE_LEN).enumerate() {
        let a = point_at(k, outline);
        let b = point_at((k + 1) % n, outline);
        tri.copy_from_slice(&triangle(a, b, center));
    }
    out
}

/// Open fan over the consecutive point pairs of `coords`, without wrapping.
///
/// Reads `coords.len() / 2` whole points; a trailing odd coordinate is ignored.
pub fn to_open_fan(center: Point, coords: &[f64]) -> Vec<f64> {
    let n = point_count(coords).saturating_sub(1);
    let mut out = vec![0.0; TRIANGLE_LEN * n];
    for (k, tri) in out.chunks_exact_mut(TRIANGLE_LEN).enumerate() {
        tri.copy_from_slice(&triangle(
            point_at(k, coords),
            point_at(k + 1, coords),
            center,
        ));
    }
    out
}

/// Outline and closed fan in one call.
pub fn polygon_fan(center: Point, radii: Point, angle_step: f64) -> Vec<f64> {
    to_closed_fan(center, &build_outline(center, radii, angle_step))
}
