//! Pure weighting functions.
//!
//! Each function is total over its documented domain and has no error cases.

/// Multiplier for Status moves given how many stat/condition-affecting moves
/// were already used this battle: `0.1 + 1 / (used + 0.25)`.
///
/// Strictly decreasing, starting at `4.1` and converging toward `0.1`.
pub fn status_move_weight(used: u32) -> f64 {
    0.1 + 1.0 / (f64::from(used) + 0.25)
}

/// Multiplier for damaging moves given their effectiveness multiplier:
/// `sqrt(effectiveness)`.
///
/// Immune matchups (`0`) yield `0`; the square root compresses the spread so
/// a 4x move is only twice as likely as a neutral one.
pub fn attack_move_weight(effectiveness: f64) -> f64 {
    effectiveness.max(0.0).sqrt()
}

/// Multiplier applied to every move slot given the user's health proportion.
///
/// `1` at or above half health, `5 - 4h` below it, growing to `5` at zero
/// health. Not clamped to `1`.
pub fn healing_move_weight(health_proportion: f64) -> f64 {
    if health_proportion < 0.5 {
        5.0 - 4.0 * health_proportion
    } else {
        1.0
    }
}
