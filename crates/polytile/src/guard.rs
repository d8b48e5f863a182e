//! Validated entry points.
//!
//! The core trusts its inputs and lets pathological values run into empty or
//! non-finite buffers. These wrappers fail fast instead and then delegate, so
//! output for well-formed input is identical.

use std::fmt;

use crate::cfg::FULL_TURN;
use crate::outline::build_outline;
use crate::tiling::{tile_with, Polygon, TileCfg};
use crate::Point;

/// Relative tolerance for "`angle_step` divides 360".
const DIVISOR_EPS: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    NonFinite { name: &'static str },
    NonPositiveAngle { angle_step: f64 },
    NonDivisorAngle { angle_step: f64 },
    NonPositiveDimension { name: &'static str, value: f64 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name } => write!(f, "{name} is not finite"),
            Self::NonPositiveAngle { angle_step } => {
                write!(f, "angle step must be positive, got {angle_step}")
            }
            Self::NonDivisorAngle { angle_step } => {
                write!(f, "angle step {angle_step} does not divide 360")
            }
            Self::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

fn finite(name: &'static str, v: f64) -> Result<f64, ShapeError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ShapeError::NonFinite { name })
    }
}

fn positive(name: &'static str, v: f64) -> Result<f64, ShapeError> {
    if finite(name, v)? > 0.0 {
        Ok(v)
    } else {
        Err(ShapeError::NonPositiveDimension { name, value: v })
    }
}

/// `angle_step` must be positive, finite, and divide 360 evenly.
pub fn check_angle_step(angle_step: f64) -> Result<(), ShapeError> {
    if finite("angle_step", angle_step)? <= 0.0 {
        return Err(ShapeError::NonPositiveAngle { angle_step });
    }
    let sides = FULL_TURN / angle_step;
    if (sides - sides.round()).abs() > DIVISOR_EPS * sides.max(1.0) || sides < 1.0 {
        return Err(ShapeError::NonDivisorAngle { angle_step });
    }
    Ok(())
}

/// Radii must be positive and finite.
pub fn check_radii(radii: Point) -> Result<(), ShapeError> {
    positive("radius_x", radii.x)?;
    positive("radius_y", radii.y)?;
    Ok(())
}

/// Full validation of a tiling request.
///
/// The widened radius and the row pitch must come out positive too, which
/// rules out steps of 180° and above.
pub fn check_tile_cfg(cfg: &TileCfg) -> Result<(), ShapeError> {
    positive("width", cfg.width)?;
    positive("height", cfg.height)?;
    check_radii(cfg.radii)?;
    check_angle_step(cfg.angle_step)?;
    positive("effective_radius_x", cfg.effective_radius_x())?;
    positive("row_pitch", cfg.row_pitch())?;
    Ok(())
}

/// [`build_outline`] after validating the center, radii, and step.
pub fn try_build_outline(
    center: Point,
    radii: Point,
    angle_step: f64,
) -> Result<Vec<f64>, ShapeError> {
    finite("center_x", center.x)?;
    finite("center_y", center.y)?;
    check_radii(radii)?;
    check_angle_step(angle_step)?;
    Ok(build_outline(center, radii, angle_step))
}

/// [`crate::tiling::tile`] after [`check_tile_cfg`].
pub fn try_tile(cfg: &TileCfg) -> Result<Vec<Polygon>, ShapeError> {
    check_tile_cfg(cfg)?;
    let mut out = Vec::new();
    tile_with(cfg, &mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::tile;

    #[test]
    fn divisor_angles_pass() {
        for a in [1.0, 10.0, 30.0, 45.0, 60.0, 72.0, 90.0, 120.0, 180.0, 360.0] {
            assert_eq!(check_angle_step(a), Ok(()), "angle {a}");
        }
    }

    #[test]
    fn bad_angles_fail() {
        assert_eq!(
            check_angle_step(70.0),
            Err(ShapeError::NonDivisorAngle { angle_step: 70.0 })
        );
        assert_eq!(
            check_angle_step(720.0),
            Err(ShapeError::NonDivisorAngle { angle_step: 720.0 })
        );
        assert_eq!(
            check_angle_step(0.0),
            Err(ShapeError::NonPositiveAngle { angle_step: 0.0 })
        );
        assert_eq!(
            check_angle_step(f64::NAN),
            Err(ShapeError::NonFinite { name: "angle_step" })
        );
    }

    #[test]
    fn guarded_output_is_unchanged() {
        let cfg = TileCfg::default();
        assert_eq!(
            try_tile(&cfg).unwrap(),
            tile(cfg.width, cfg.height, cfg.radii, cfg.angle_step)
        );
        assert_eq!(
            try_build_outline(Point::new(1.0, 1.0), Point::new(2.0, 1.0), 45.0).unwrap(),
            build_outline(Point::new(1.0, 1.0), Point::new(2.0, 1.0), 45.0)
        );
    }

    #[test]
    fn tile_cfg_rejects_bad_dimensions() {
        let mut cfg = TileCfg::default();
        cfg.width = 0.0;
        assert_eq!(
            check_tile_cfg(&cfg),
            Err(ShapeError::NonPositiveDimension {
                name: "width",
                value: 0.0
            })
        );
        let mut cfg = TileCfg::default();
        cfg.radii.y = -1.0;
        assert!(matches!(
            try_tile(&cfg),
            Err(ShapeError::NonPositiveDimension { name: "radius_y", .. })
        ));
        let mut cfg = TileCfg::default();
        cfg.angle_step = 360.0;
        assert!(matches!(
            check_tile_cfg(&cfg),
            Err(ShapeError::NonPositiveDimension {
                name: "effective_radius_x",
                ..
            })
        ));
        cfg.angle_step = 180.0;
        assert!(matches!(
            check_tile_cfg(&cfg),
            Err(ShapeError::NonPositiveDimension {
                name: "row_pitch",
                ..
            })
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ShapeError::NonDivisorAngle { angle_step: 70.0 }.to_string(),
            "angle step 70 does not divide 360"
        );
        assert_eq!(
            ShapeError::NonPositiveDimension {
                name: "width",
                value: -1.0
            }
            .to_string(),
            "width must be positive, got -1"
        );
    }
}
