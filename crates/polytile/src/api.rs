//! Curated re-exports for downstream callers (render layers, the CLI).
//!
//! Prefer these paths over reaching into submodules; submodule layout may move.

// Angles and rounding
pub use crate::angle::{js_round, round_to_granularity, to_radians};
pub use crate::cfg::{FULL_TURN, QUADRANT, ROUND_GRANULARITY};
// Outlines and flat-buffer access
pub use crate::outline::{build_outline, get_point, point_at, point_count, side_count, Quadrant};
// Fans
pub use crate::fan::{polygon_fan, to_closed_fan, to_open_fan, triangle, TRIANGLE_LEN};
// Tiling
pub use crate::tiling::{fit_radius, tile, tile_with, Polygon, TileCfg};
// Validation
pub use crate::guard::{
    check_angle_step, check_radii, check_tile_cfg, try_build_outline, try_tile, ShapeError,
};
// Helpers
pub use crate::util::{shuffle, unit_interval};
pub use crate::Point;
