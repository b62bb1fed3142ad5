//! Pure summation over a sequence of integers.
//!
//! Elements are `i64` and the total is accumulated in `i128`. A slice would
//! need more than 2^64 elements before an `i128` accumulator could overflow,
//! so the result is exact for every input that fits in memory.

/// Sums `input`. The empty sequence sums to zero.
pub fn sum(input: &[i64]) -> i128 {
    input.iter().map(|&n| i128::from(n)).sum()
}
