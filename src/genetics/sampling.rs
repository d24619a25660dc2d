//! Canonical weighted random draw
//!
//! Every weighted selection in the engine (rarity tier draws, mutation
//! trait picks) goes through [`weighted_pick`]: each candidate gets a
//! share proportional to its weight, a uniform real is drawn in
//! [0, total_weight), and the first candidate whose cumulative share
//! exceeds the draw wins. Exact-boundary ties therefore always resolve
//! to the first candidate in iteration order.

use rand::Rng;

/// Weighted draw over a slice of candidates
///
/// Returns `None` for an empty slice or a non-positive total weight.
/// Candidates with zero weight are never selected.
pub fn weighted_pick<'a, T, R, W>(rng: &mut R, candidates: &'a [T], weight: W) -> Option<&'a T>
where
    R: Rng,
    W: Fn(&T) -> f64,
{
    let total: f64 = candidates.iter().map(&weight).sum();
    if candidates.is_empty() || total <= 0.0 {
        return None;
    }

    let roll = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for candidate in candidates {
        cumulative += weight(candidate);
        if roll < cumulative {
            return Some(candidate);
        }
    }

    // Floating-point accumulation can leave roll a hair past the final
    // cumulative sum; the last positive-weight candidate takes it.
    candidates.iter().rev().find(|&c| weight(c) > 0.0)
}
