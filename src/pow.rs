//! Fixed-point fractional powers.
//!
//! Every table entry is `floor(n^(1/d) * SCALE)`, so consumers can look up
//! a root with five decimal digits of precision using integer math only.

/// Fixed-point scale applied to each root before flooring.
pub const SCALE: f64 = 100_000.0;

/// Smallest `n` written to hex tables. `0` and `1` are trivial roots.
pub const HEX_MIN_N: u32 = 2;

/// Compute `floor(n^(1/d) * 100000)`.
///
/// `d` must be strictly positive; callers validate this through
/// [`TableConfig::validate`](crate::TableConfig::validate).
pub fn compute_value(n: u32, d: f64) -> u64 {
    debug_assert!(d > 0.0, "divisor must be positive");
    if n == 0 {
        return 0;
    }
    let root = (n as f64).powf(1.0 / d);
    (root * SCALE).floor() as u64
}

/// Values in hex table order: `n = max_n, max_n - 1, ..., 2`.
pub fn hex_values(max_n: u32, d: f64) -> Vec<(u32, u64)> {
    (HEX_MIN_N..=max_n)
        .rev()
        .map(|n| (n, compute_value(n, d)))
        .collect()
}

/// Values in decimal list order: `n = 0, 1, ..., max_n - 1`.
pub fn decimal_values(max_n: u32, d: f64) -> Vec<u64> {
    (0..max_n).map(|n| compute_value(n, d)).collect()
}
