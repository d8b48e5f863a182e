//! Small standalone helpers that sit next to the geometry (no shared state).

use rand::Rng;

/// In-place Fisher–Yates shuffle drawing from `rng`.
///
/// Walks from the back; each slot swaps with a uniformly drawn index at or
/// before it. Pass a seeded `StdRng` for reproducible orderings.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut current = items.len();
    while current != 0 {
        let pick = rng.gen_range(0..current);
        current -= 1;
        items.swap(current, pick);
    }
}

/// Map `value` linearly so that `start → 0` and `end → 1`.
///
/// Not clamped; `start == end` yields a non-finite result.
#[inline]
pub fn unit_interval(start: f64, end: f64, value: f64) -> f64 {
    (value - start) / (end - start)
}
