//! Weighted random selection (inverse-CDF sampling over one uniform draw).

use battle_core::RandomStream;

use crate::api::{Result, RuntimeError};

/// Normalizes `weights` into a probability distribution.
///
/// An all-zero vector is the documented "nothing stands out" case and becomes
/// uniform (`1/N` each). Otherwise every entry is divided by the sum.
pub fn normalize(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if weights.iter().all(|&weight| weight == 0.0) || total <= 0.0 {
        let uniform = 1.0 / weights.len() as f64;
        return vec![uniform; weights.len()];
    }
    weights.iter().map(|weight| weight / total).collect()
}

/// Picks an index for the uniform draw `r` in `[0, 1)`.
///
/// Walks the normalized distribution and returns the first index with
/// nonzero probability whose running total reaches `r`. If rounding keeps the
/// total below `r`, the last index with nonzero probability is returned.
///
/// # Errors
///
/// Returns `RuntimeError::EmptyCandidates` for an empty vector.
pub fn select_index(weights: &[f64], r: f64) -> Result<usize> {
    if weights.is_empty() {
        tracing::error!("Weighted selection requested over an empty candidate list");
        return Err(RuntimeError::EmptyCandidates);
    }

    let normalized = normalize(weights);
    let mut running_total = 0.0;
    let mut last_candidate = 0;
    for (index, &probability) in normalized.iter().enumerate() {
        if probability <= 0.0 {
            continue;
        }
        running_total += probability;
        last_candidate = index;
        if running_total >= r {
            return Ok(index);
        }
    }

    Ok(last_candidate)
}

/// Draws one uniform value from `rng` and selects an index with it.
///
/// An empty vector is rejected before drawing, so a contract violation does
/// not advance the stream.
///
/// # Errors
///
/// Returns `RuntimeError::EmptyCandidates` for an empty vector.
pub fn draw_index(weights: &[f64], rng: &mut dyn RandomStream) -> Result<usize> {
    if weights.is_empty() {
        return select_index(weights, 0.0);
    }
    let r = rng.next_uniform01();
    select_index(weights, r)
}
