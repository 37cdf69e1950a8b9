//! Random draws used by the pop scheduler.

use rand::Rng;

/// Inclusive uniform integer in `[min, max]`. Bounds given in the wrong order are swapped.
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Uniform index in `[0, n)` that never repeats `last` when `n > 1`.
///
/// The draw is taken over the `n - 1` remaining slots and shifted past `last`,
/// so every other position stays equally likely without re-rolling.
/// `n` must be at least 1.
pub fn pick_position<R: Rng + ?Sized>(rng: &mut R, last: Option<usize>, n: usize) -> usize {
    debug_assert!(n > 0, "pick_position needs at least one position");
    if n <= 1 {
        return 0;
    }
    match last {
        Some(prev) if prev < n => {
            let idx = rng.gen_range(0..n - 1);
            if idx >= prev { idx + 1 } else { idx }
        }
        _ => rng.gen_range(0..n),
    }
}
