// SPDX-License-Identifier: MIT

//! Deterministic input arrays with closed-form sums, so tests and benches
//! can verify strategy results without re-summing sequentially.

/// Builds the array `[1, 2, ..., len]`.
pub fn ascending_array(len: usize) -> Vec<i64> {
    (1..=len as i64).collect()
}

/// The sum of `ascending_array(len)`.
pub fn ascending_sum(len: usize) -> i64 {
    let n = len as i64;
    n * (n + 1) / 2
}

/// Builds an array alternating between `1` and `-1`, starting with `1`.
/// Sums to zero for even lengths and one for odd lengths.
pub fn alternating_array(len: usize) -> Vec<i64> {
    (0..len)
        .map(|i| if i % 2 == 0 { 1 } else { -1 })
        .collect()
}

/// The sum of `alternating_array(len)`.
pub fn alternating_sum(len: usize) -> i64 {
    (len % 2) as i64
}
