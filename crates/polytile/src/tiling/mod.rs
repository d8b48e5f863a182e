//! Brick-style tiling of a rectangle with staggered polygons.
//!
//! Model
//! - Rows sit at `y = l * row_pitch` for `l = 0, 1, ...`; odd rows are
//!   "normal" (indented by `radii.x`), even rows start at `x = 0` and carry one
//!   extra column to cover the left overhang.
//! - The outline's horizontal radius is widened to `effective_radius_x` so that
//!   slanted edges of adjacent rows interlock.
//! - Columns advance by `2 * effective_radius_x - 2 * x_gap`.
//!
//! No overlap or gap check is performed beyond this arithmetic; `angle_step`
//! is expected to be a sensible divisor of 360 (see `guard`).

use crate::angle::{js_round, to_radians};
use crate::cfg::QUADRANT;
use crate::fan::to_closed_fan;
use crate::outline::build_outline;
use crate::Point;

/// One placed tile. Owned by the caller's collection; never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub center: Point,
    /// Flat outline, see [`build_outline`].
    pub vertices: Vec<f64>,
    /// Closed fan over `vertices`, see [`to_closed_fan`].
    pub vs_vertices: Vec<f64>,
}

impl Polygon {
    /// Build the outline and fan for a tile at `center`.
    pub fn new(center: Point, radii: Point, angle_step: f64) -> Self {
        let vertices = build_outline(center, radii, angle_step);
        let vs_vertices = to_closed_fan(center, &vertices);
        Self {
            center,
            vertices,
            vs_vertices,
        }
    }
}

/// Tiling request: plane size, tile radii, and angular step (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileCfg {
    pub width: f64,
    pub height: f64,
    pub radii: Point,
    pub angle_step: f64,
}

impl Default for TileCfg {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            radii: Point::new(1.0, 1.0),
            angle_step: 60.0,
        }
    }
}

impl TileCfg {
    #[inline]
    pub fn new(width: f64, height: f64, radii: Point, angle_step: f64) -> Self {
        Self {
            width,
            height,
            radii,
            angle_step,
        }
    }

    /// `radii.x / cos(90° - angle_step)`.
    #[inline]
    pub fn effective_radius_x(&self) -> f64 {
        self.radii.x / to_radians(QUADRANT - self.angle_step).cos()
    }

    /// `sin(90° - angle_step) * radii.y`.
    #[inline]
    pub fn row_rise(&self) -> f64 {
        to_radians(QUADRANT - self.angle_step).sin() * self.radii.y
    }

    /// Vertical distance between consecutive rows.
    #[inline]
    pub fn row_pitch(&self) -> f64 {
        self.radii.y + self.row_rise()
    }

    /// Horizontal overhang introduced by widening the outline.
    #[inline]
    pub fn x_gap(&self) -> f64 {
        self.effective_radius_x() - self.radii.x
    }

    /// `round(height / row_pitch) * 2 + 0.5`; half of it (rounded up) rows are placed.
    #[inline]
    pub fn row_count(&self) -> f64 {
        js_round(self.height / self.row_pitch()) * 2.0 + 0.5
    }

    /// Number of row iterations: `ceil(row_count / 2)`, 0 when not finite.
    pub fn rows(&self) -> usize {
        let rows = (self.row_count() / 2.0).ceil();
        if rows.is_finite() && rows > 0.0 {
            rows as usize
        } else {
            0
        }
    }

    /// Columns in a row: `ceil(width / radii.x / 2)`, plus one for offset rows.
    pub fn columns(&self, normal: bool) -> usize {
        let mut cols = (self.width / self.radii.x / 2.0).ceil();
        if !normal {
            cols += 1.0;
        }
        if cols.is_finite() && cols > 0.0 {
            cols as usize
        } else {
            0
        }
    }

    /// Total polygons a tiling of this configuration produces.
    pub fn polygon_count(&self) -> usize {
        (0..self.rows()).map(|l| self.columns(l % 2 == 1)).sum()
    }
}

/// Next column x-position.
#[inline]
fn next_column(x: f64, effective_radius_x: f64, x_gap: f64) -> f64 {
    x + 2.0 * effective_radius_x - x_gap * 2.0
}

/// Append one row of tiles at height `y` into `out`.
fn push_row(cfg: &TileCfg, y: f64, normal: bool, out: &mut Vec<Polygon>) {
    let hyp_x = cfg.effective_radius_x();
    let x_gap = cfg.x_gap();
    let radii = Point::new(hyp_x, cfg.radii.y);
    let cols = cfg.columns(normal);
    let mut x = if normal { cfg.radii.x } else { 0.0 };
    tracing::trace!(y, normal, cols, "row");
    for _ in 0..cols {
        out.push(Polygon::new(Point::new(x, y), radii, cfg.angle_step));
        x = next_column(x, hyp_x, x_gap);
    }
}

/// Tile `cfg` into the caller-supplied collection (appends, never clears).
pub fn tile_with(cfg: &TileCfg, out: &mut Vec<Polygon>) {
    let rows = cfg.rows();
    let pitch = cfg.row_pitch();
    out.reserve(cfg.polygon_count());
    let before = out.len();
    for l in 0..rows {
        push_row(cfg, l as f64 * pitch, l % 2 == 1, out);
    }
    tracing::debug!(
        width = cfg.width,
        height = cfg.height,
        angle_step = cfg.angle_step,
        rows,
        polygons = out.len() - before,
        "tile"
    );
}

/// Tile a `width × height` plane with polygons of the given radii and step.
pub fn tile(width: f64, height: f64, radii: Point, angle_step: f64) -> Vec<Polygon> {
    let cfg = TileCfg::new(width, height, radii, angle_step);
    let mut out = Vec::new();
    tile_with(&cfg, &mut out);
    out
}

/// Radius closest to `value` such that a whole number of `2 * radius` spans fills `total`.
#[inline]
pub fn fit_radius(value: f64, total: f64) -> f64 {
    let count = total / (value * 2.0);
    total / js_round(count) / 2.0
}
