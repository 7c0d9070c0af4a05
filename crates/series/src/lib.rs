//! leibniz-series: Partial sums of the Leibniz series for π
//!
//! The Leibniz series `4 * (1 - 1/3 + 1/5 - 1/7 + ...)` converges to π, but
//! slowly. This crate produces the running partial sums together with the
//! reference value and the absolute error at every step, so that a host can
//! chart how the approximation oscillates around π.
//!
//! # Design
//!
//! - **Sequential**: every partial sum is accumulated term by term, term 0
//!   first, so results are bit-identical for identical inputs
//! - **Prefix-consistent**: `generate(m)` is always a prefix of `generate(n)`
//!   for `m < n`, because both are taken from the same iterator
//! - **Host-agnostic**: no rendering, no I/O; [`TermCount`] carries the bounds
//!   an interactive control uses
//!
//! # Example
//!
//! ```
//! use leibniz_series::generate;
//!
//! let points = generate(4);
//! assert_eq!(points.len(), 4);
//! assert_eq!(points[0].partial_sum, 4.0);
//! assert_eq!(points[1].partial_sum, 4.0 - 4.0 / 3.0);
//! assert!(points[3].absolute_error < points[0].absolute_error);
//! ```

mod series;
mod terms;

pub use series::{LeibnizSeries, term};
pub use terms::{DEFAULT_TERMS, MAX_TERMS, MIN_TERMS, TermCount, TermCountError};

/// The value every partial sum is compared against.
pub const REFERENCE: f64 = std::f64::consts::PI;

/// One step of the running approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ApproximationPoint {
    /// 1-based count of terms summed so far.
    pub term_index: usize,
    /// Value of the series after `term_index` terms.
    pub partial_sum: f64,
    /// π, constant across a sequence.
    pub reference: f64,
    /// `|partial_sum - reference|`.
    pub absolute_error: f64,
}

impl ApproximationPoint {
    /// Create a point for a partial sum, filling in the reference and error.
    pub fn new(term_index: usize, partial_sum: f64) -> Self {
        Self {
            term_index,
            partial_sum,
            reference: REFERENCE,
            absolute_error: (partial_sum - REFERENCE).abs(),
        }
    }

    /// `partial_sum - reference`: positive when the approximation overshoots π.
    pub fn signed_error(&self) -> f64 {
        self.partial_sum - self.reference
    }
}

/// Produce the first `term_count` points of the series.
///
/// Any positive count is accepted; a count of zero yields an empty sequence.
/// The sequence is recomputed from scratch on every call.
pub fn generate(term_count: usize) -> Vec<ApproximationPoint> {
    LeibnizSeries::new().take(term_count).collect()
}
