use anyhow::{Context, Result};
use polytile::api::{Point, Polygon, TileCfg};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tiling parameters as read from a JSON config file and/or flags.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileParams {
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub ry: f64,
    pub angle: f64,
}

impl Default for TileParams {
    fn default() -> Self {
        Self::from(TileCfg::default())
    }
}

impl From<TileCfg> for TileParams {
    fn from(cfg: TileCfg) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            rx: cfg.radii.x,
            ry: cfg.radii.y,
            angle: cfg.angle_step,
        }
    }
}

impl From<TileParams> for TileCfg {
    fn from(p: TileParams) -> Self {
        TileCfg::new(p.width, p.height, Point::new(p.rx, p.ry), p.angle)
    }
}

/// Flag overrides; `None` keeps the config/default value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub angle: Option<f64>,
}

impl TileParams {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn apply(mut self, o: Overrides) -> Self {
        self.width = o.width.unwrap_or(self.width);
        self.height = o.height.unwrap_or(self.height);
        self.rx = o.rx.unwrap_or(self.rx);
        self.ry = o.ry.unwrap_or(self.ry);
        self.angle = o.angle.unwrap_or(self.angle);
        self
    }
}

/// JSON shape of one placed polygon.
#[derive(Debug, Serialize, Deserialize)]
pub struct PolygonRecord {
    pub center: [f64; 2],
    pub vertices: Vec<f64>,
    #[serde(rename = "vsVertices")]
    pub vs_vertices: Vec<f64>,
}

impl From<Polygon> for PolygonRecord {
    fn from(p: Polygon) -> Self {
        Self {
            center: [p.center.x, p.center.y],
            vertices: p.vertices,
            vs_vertices: p.vs_vertices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"width": 25.0, "angle": 30.0}"#).unwrap();
        let p = TileParams::load(&path).unwrap();
        assert_eq!(p.width, 25.0);
        assert_eq!(p.angle, 30.0);
        assert_eq!(p.height, TileParams::default().height);
        assert_eq!(p.rx, 1.0);
    }

    #[test]
    fn flags_override_config() {
        let p = TileParams::default().apply(Overrides {
            ry: Some(2.0),
            ..Overrides::default()
        });
        assert_eq!(p.ry, 2.0);
        assert_eq!(p.rx, 1.0);
        let cfg = TileCfg::from(p);
        assert_eq!(cfg.radii, Point::new(1.0, 2.0));
    }

    #[test]
    fn malformed_config_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ nope").unwrap();
        let err = TileParams::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn record_uses_vs_vertices_key() {
        let poly = Polygon::new(Point::zeros(), Point::new(1.0, 1.0), 90.0);
        let json = serde_json::to_value(PolygonRecord::from(poly)).unwrap();
        assert_eq!(json["center"], serde_json::json!([0.0, 0.0]));
        assert_eq!(json["vsVertices"].as_array().unwrap().len(), 24);
    }
}
