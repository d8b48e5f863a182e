use crate::Point;

/// Number of whole points in a flat coordinate buffer.
#[inline]
pub fn point_count(coords: &[f64]) -> usize {
    coords.len() / 2
}

/// Point `index` of a flat `[x0, y0, x1, y1, ...]` buffer.
///
/// # Panics
/// If `2 * index + 1` is out of bounds. Use [`get_point`] when unsure.
#[inline]
pub fn point_at(index: usize, coords: &[f64]) -> Point {
    Point::new(coords[2 * index], coords[2 * index + 1])
}

/// Checked variant of [`point_at`].
#[inline]
pub fn get_point(index: usize, coords: &[f64]) -> Option<Point> {
    let i = index.checked_mul(2)?;
    match coords.get(i..i.checked_add(2)?) {
        Some(&[x, y]) => Some(Point::new(x, y)),
        _ => None,
    }
}
