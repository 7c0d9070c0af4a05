//! Bounded term count for interactive controls.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Smallest term count a control may select.
pub const MIN_TERMS: usize = 1;

/// Largest term count a control may select.
pub const MAX_TERMS: usize = 50;

/// Term count a control starts at.
pub const DEFAULT_TERMS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermCountError {
    #[error("term count {value} is outside {min}..={max}")]
    OutOfRange {
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid term count: {0}")]
    Parse(String),
}

/// A term count within `MIN_TERMS..=MAX_TERMS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermCount(usize);

impl TermCount {
    /// Validate a term count.
    pub fn new(value: usize) -> Result<Self, TermCountError> {
        if (MIN_TERMS..=MAX_TERMS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TermCountError::OutOfRange {
                value,
                min: MIN_TERMS,
                max: MAX_TERMS,
            })
        }
    }

    /// Saturate any value into range.
    pub fn clamped(value: usize) -> Self {
        Self(value.clamp(MIN_TERMS, MAX_TERMS))
    }

    pub fn min() -> Self {
        Self(MIN_TERMS)
    }

    pub fn max() -> Self {
        Self(MAX_TERMS)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Move by `delta`, stopping at the bounds.
    pub fn step(self, delta: isize) -> Self {
        Self::clamped(self.0.saturating_add_signed(delta))
    }

    pub fn is_min(self) -> bool {
        self.0 == MIN_TERMS
    }

    pub fn is_max(self) -> bool {
        self.0 == MAX_TERMS
    }

    /// Position within the range as 0.0..=1.0 (for gauges).
    pub fn ratio(self) -> f64 {
        (self.0 - MIN_TERMS) as f64 / (MAX_TERMS - MIN_TERMS) as f64
    }
}

impl Default for TermCount {
    fn default() -> Self {
        Self(DEFAULT_TERMS)
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TermCount {
    type Err = TermCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<usize>()
            .map_err(|e| TermCountError::Parse(format!("'{}': {}", s, e)))?;
        Self::new(value)
    }
}
