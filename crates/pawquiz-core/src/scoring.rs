//! Percentage helpers shared by progress and score.

/// Round `100 * numerator / denominator` half-up to a whole percent.
///
/// A zero denominator is treated as 1 so an empty quiz never divides by
/// zero. Computed in integer arithmetic: `floor(100n/d + 1/2)` is
/// `(200n + d) / 2d`.
pub fn round_percent(numerator: usize, denominator: usize) -> u32 {
    let d = denominator.max(1) as u64;
    let n = numerator as u64;
    ((200 * n + d) / (2 * d)) as u32
}
