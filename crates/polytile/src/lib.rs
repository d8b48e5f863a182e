//! Regular polygon outlines, triangle fans, and staggered hex tilings in 2D.
//!
//! Layers (leaves first)
//! - `angle`: degree→radian conversion and fixed-granularity rounding.
//! - `outline`: quadrant-based outline construction plus flat-array point access.
//! - `fan`: closed and open triangle-fan vertex buffers.
//! - `tiling`: brick-style row/column placement of polygons over a rectangle.
//!
//! Conventions
//! - Buffers are flat `Vec<f64>` with interleaved `x, y` values.
//! - Core functions trust their inputs; see `guard` for validated entry points.

pub mod angle;
pub mod api;
pub mod cfg;
pub mod fan;
pub mod guard;
pub mod outline;
pub mod tiling;
pub mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A point (or a radii pair) in the plane.
pub type Point = nalgebra::Vector2<f64>;

pub use outline::{build_outline, get_point, point_at};
pub use tiling::{tile, Polygon, TileCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{round_to_granularity, to_radians};
    pub use crate::fan::{polygon_fan, to_closed_fan, to_open_fan};
    pub use crate::guard::{try_build_outline, try_tile, ShapeError};
    pub use crate::outline::{build_outline, point_at};
    pub use crate::tiling::{tile, tile_with, Polygon, TileCfg};
    pub use crate::Point;
}
