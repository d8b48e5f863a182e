//! Print tile centers of a small plane as a character grid.
//!
//! Usage:
//!   cargo run -p polytile --example ascii_grid -- [width] [height] [angle]
//!
//! Offset rows print `o`, indented rows print `x`.

use polytile::api::{tile, Point, TileCfg};

fn main() {
    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>().ok());
    let width = args.next().flatten().unwrap_or(12.0);
    let height = args.next().flatten().unwrap_or(8.0);
    let angle = args.next().flatten().unwrap_or(60.0);

    let cfg = TileCfg::new(width, height, Point::new(1.0, 1.0), angle);
    let hexes = tile(cfg.width, cfg.height, cfg.radii, cfg.angle_step);
    println!(
        "{} polygons in {} rows (pitch {:.3})",
        hexes.len(),
        cfg.rows(),
        cfg.row_pitch()
    );

    let cols = (width.ceil() as usize + 2).max(1);
    let rows = cfg.rows();
    let mut grid = vec![vec![' '; cols]; rows];
    for h in &hexes {
        let row = (h.center.y / cfg.row_pitch()).round() as usize;
        let col = h.center.x.round() as usize;
        if row < rows && col < cols {
            grid[row][col] = if row % 2 == 1 { 'x' } else { 'o' };
        }
    }
    for line in grid.iter().rev() {
        println!("{}", line.iter().collect::<String>());
    }
}
