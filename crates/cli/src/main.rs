mod params;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use params::{Overrides, PolygonRecord, TileParams};
use polytile::api::{
    build_outline, fit_radius, polygon_fan, tile_with, to_closed_fan, try_build_outline, try_tile,
    Point, TileCfg,
};
use provenance::{ensure_parent, write_sidecar, Sidecar};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polytile")]
#[command(about = "Polygon outlines, triangle fans, and hex tilings as JSON")]
struct Cmd {
    /// Validate inputs (positive sizes, angle dividing 360) before computing
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct TileArgs {
    /// JSON file with any of {width, height, rx, ry, angle}; flags win
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    rx: Option<f64>,
    #[arg(long)]
    ry: Option<f64>,
    /// Angular step in degrees
    #[arg(long)]
    angle: Option<f64>,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Tile a plane and write polygons (plus a provenance sidecar)
    Tile(TileArgs),
    /// Print one outline, or its closed fan with --fan
    Outline {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        cx: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        cy: f64,
        #[arg(long, default_value_t = 1.0)]
        rx: f64,
        #[arg(long, default_value_t = 1.0)]
        ry: f64,
        #[arg(long, default_value_t = 60.0)]
        angle: f64,
        #[arg(long)]
        fan: bool,
    },
    /// Radius closest to VALUE that fills TOTAL with whole tiles
    Fit {
        #[arg(long)]
        value: f64,
        #[arg(long)]
        total: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Tile(args) => run_tile(args, cmd.strict),
        Action::Outline {
            cx,
            cy,
            rx,
            ry,
            angle,
            fan,
        } => outline(Point::new(cx, cy), Point::new(rx, ry), angle, fan, cmd.strict),
        Action::Fit { value, total } => fit(value, total),
        Action::Report => report(),
    }
}

fn resolve_params(args: &TileArgs) -> Result<TileParams> {
    let base = match &args.config {
        Some(path) => TileParams::load(path)?,
        None => TileParams::default(),
    };
    Ok(base.apply(Overrides {
        width: args.width,
        height: args.height,
        rx: args.rx,
        ry: args.ry,
        angle: args.angle,
    }))
}

fn run_tile(args: TileArgs, strict: bool) -> Result<()> {
    let params = resolve_params(&args)?;
    let cfg = TileCfg::from(params);
    tracing::info!(
        width = cfg.width,
        height = cfg.height,
        rx = cfg.radii.x,
        ry = cfg.radii.y,
        angle = cfg.angle_step,
        strict,
        "tile"
    );
    let polygons = if strict {
        try_tile(&cfg)?
    } else {
        let mut out = Vec::new();
        tile_with(&cfg, &mut out);
        out
    };
    let count = polygons.len();
    let records: Vec<PolygonRecord> = polygons.into_iter().map(PolygonRecord::from).collect();

    ensure_parent(&args.out)?;
    fs::write(&args.out, serde_json::to_vec(&records)?)
        .with_context(|| format!("writing {}", args.out.display()))?;

    let sidecar = Sidecar::new(
        serde_json::to_value(params)?,
        json!({ "rows": cfg.rows(), "polygons": count }),
    );
    let prov = write_sidecar(&args.out, sidecar)?;
    tracing::info!(polygons = count, out = %args.out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn outline(center: Point, radii: Point, angle: f64, fan: bool, strict: bool) -> Result<()> {
    tracing::info!(cx = center.x, cy = center.y, angle, fan, "outline");
    let coords = if strict {
        let v = try_build_outline(center, radii, angle)?;
        if fan {
            to_closed_fan(center, &v)
        } else {
            v
        }
    } else if fan {
        polygon_fan(center, radii, angle)
    } else {
        build_outline(center, radii, angle)
    };
    println!("{}", serde_json::to_string(&coords)?);
    Ok(())
}

fn fit(value: f64, total: f64) -> Result<()> {
    tracing::info!(value, total, "fit");
    println!("{}", fit_radius(value, total));
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": polytile::VERSION,
        "params": TileParams::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
