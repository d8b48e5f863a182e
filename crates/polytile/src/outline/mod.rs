//! Polygon outlines from a center, two radii, and an angular step.
//!
//! Model
//! - The traversal angle starts at 0 (topmost vertex) and grows by `angle_step`
//!   degrees per vertex, clockwise in a y-up frame.
//! - Each vertex is evaluated by one of four quadrant formulas, picked by the
//!   90° band the cumulative angle falls in. The formula uses the angle local to
//!   its band and always the original center.
//! - With `radii.x != radii.y` the result is a stretched polygon, not a true
//!   ellipse sample.
//!
//! Assumptions
//! - `angle_step` should divide 360; otherwise the outline is truncated to
//!   `floor(360 / angle_step)` vertices and does not close evenly.
//! - Coordinates are rounded to `1 / ROUND_GRANULARITY`.

mod index;

pub use index::{get_point, point_at, point_count};

use crate::angle::{round_to_granularity, to_radians};
use crate::cfg::{FULL_TURN, QUADRANT, ROUND_GRANULARITY};
use crate::Point;

/// One of the four 90° bands of the traversal, in visiting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// Top → right.
    First,
    /// Right → bottom.
    Second,
    /// Bottom → left.
    Third,
    /// Left → top.
    Fourth,
}

impl Quadrant {
    /// Band index in `0..4`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Quadrant::First => 0,
            Quadrant::Second => 1,
            Quadrant::Third => 2,
            Quadrant::Fourth => 3,
        }
    }

    /// Start angle of the band in degrees.
    #[inline]
    pub fn start(self) -> f64 {
        self.index() as f64 * QUADRANT
    }

    /// The band after `self`; the last band is sticky.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Quadrant::First => Quadrant::Second,
            Quadrant::Second => Quadrant::Third,
            Quadrant::Third | Quadrant::Fourth => Quadrant::Fourth,
        }
    }

    /// Unrounded vertex for `local` degrees into this band.
    pub fn vertex(self, center: Point, radii: Point, local: f64) -> Point {
        let (s, c) = to_radians(local).sin_cos();
        let (cx, cy) = (center.x, center.y);
        let (rx, ry) = (radii.x, radii.y);
        match self {
            Quadrant::First => Point::new(cx + s * rx, cy + c * ry),
            Quadrant::Second => Point::new(cx + c * rx, cy - s * ry),
            Quadrant::Third => Point::new(cx - s * rx, cy - c * ry),
            Quadrant::Fourth => Point::new(cx - c * rx, cy + s * ry),
        }
    }
}

/// Number of outline vertices for `angle_step`: `floor(360 / angle_step)`.
///
/// Zero for non-positive, zero, or non-finite steps.
#[inline]
pub fn side_count(angle_step: f64) -> usize {
    let n = (FULL_TURN / angle_step).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Build the flat outline `[x0, y0, x1, y1, ...]` starting at the top vertex.
///
/// The quadrant advances at most once per vertex, as soon as the cumulative
/// angle reaches the current band's upper bound; it never moves back.
pub fn build_outline(center: Point, radii: Point, angle_step: f64) -> Vec<f64> {
    let sides = side_count(angle_step);
    let mut out = vec![0.0; 2 * sides];
    let mut quadrant = Quadrant::First;
    let mut bound = QUADRANT;
    let mut cumulative = 0.0;
    for k in 0..sides {
        if cumulative >= bound {
            quadrant = quadrant.next();
            bound += QUADRANT;
        }
        let p = quadrant.vertex(center, radii, cumulative - quadrant.start());
        out[2 * k] = round_to_granularity(p.x, ROUND_GRANULARITY);
        out[2 * k + 1] = round_to_granularity(p.y, ROUND_GRANULARITY);
        cumulative += angle_step;
    }
    out
}
