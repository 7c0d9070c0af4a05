//! The series itself: single terms and the running-sum iterator.

use std::iter::FusedIterator;

use crate::ApproximationPoint;

/// The k-th term of the series (k starts at 0): `4 * (1/(2k+1)) * (±1)`.
///
/// Evaluated in exactly that order so every caller sees the same rounding.
pub fn term(k: usize) -> f64 {
    let sign = if k % 2 == 1 { -1.0 } else { 1.0 };
    4.0 * (1.0 / (2 * k + 1) as f64) * sign
}

/// Unbounded iterator over the running approximation.
///
/// Each call to `next` adds exactly one term to the running sum and yields
/// the resulting point. Use `take(n)` for a finite sequence.
#[derive(Debug, Clone, Default)]
pub struct LeibnizSeries {
    /// Index of the next term to add
    next_term: usize,
    /// Sum of terms `0..next_term`
    sum: f64,
}

impl LeibnizSeries {
    /// Start a new series at zero terms.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for LeibnizSeries {
    type Item = ApproximationPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.next_term;
        self.sum += term(k);
        self.next_term = k + 1;
        Some(ApproximationPoint::new(self.next_term, self.sum))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for LeibnizSeries {}
