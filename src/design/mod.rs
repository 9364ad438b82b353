//! Candidate designs and box constraints.
//!
//! A [`Design`] is an immutable vector of exposure levels in the closed
//! unit interval, one per experimental unit. [`Bounds`] describes the
//! per-dimension box a search strategy is allowed to explore; it must lie
//! inside the unit box so every candidate a strategy produces is a valid
//! design.

use rand::Rng;
use thiserror::Error;

/// Errors from constructing designs or bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// A design element lies outside the closed unit interval.
    #[error("design element {index} is {value}, outside [0, 1]")]
    OutOfRange {
        /// Index of the offending element.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Fewer than two design points.
    #[error("design must have at least 2 points, got {len}")]
    TooShort {
        /// Number of points supplied.
        len: usize,
    },

    /// Lower and upper bound vectors differ in length.
    #[error("bound vectors have mismatched lengths: {lower} vs {upper}")]
    DimensionMismatch {
        /// Length of the lower bound vector.
        lower: usize,
        /// Length of the upper bound vector.
        upper: usize,
    },

    /// A dimension's lower bound is not strictly below its upper bound,
    /// or a bound escapes the unit box.
    #[error("invalid bound [{lower}, {upper}] at dimension {index}")]
    InvalidBound {
        /// The offending dimension.
        index: usize,
        /// Lower bound at that dimension.
        lower: f64,
        /// Upper bound at that dimension.
        upper: f64,
    },
}

/// An immutable experimental design: exposure levels in `[0, 1]`.
///
/// Length is fixed at construction and must be at least 2 (the
/// information matrix of a one-point design is always singular).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Design {
    values: Vec<f64>,
}

impl Design {
    /// Creates a design, validating length and the unit-interval invariant.
    pub fn new(values: Vec<f64>) -> Result<Self, DesignError> {
        if values.len() < 2 {
            return Err(DesignError::TooShort { len: values.len() });
        }
        for (index, &value) in values.iter().enumerate() {
            // NaN fails the range check as well.
            if !(0.0..=1.0).contains(&value) {
                return Err(DesignError::OutOfRange { index, value });
            }
        }
        Ok(Self { values })
    }

    /// Number of design points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The exposure levels.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a copy with values in ascending order.
    ///
    /// Repeated stochastic runs produce the same design up to permutation;
    /// sorting gives them a canonical form for comparison and counting.
    pub fn sorted(&self) -> Design {
        let mut values = self.values.clone();
        values.sort_by(|a, b| a.partial_cmp(b).expect("design values are never NaN"));
        Design { values }
    }

    /// Rounded integer fingerprint at `decimals` decimal places.
    ///
    /// Two designs with the same signature are indistinguishable at that
    /// precision. Used by summaries to count convergence consensus.
    pub fn signature(&self, decimals: u32) -> Vec<i64> {
        let scale = 10f64.powi(decimals as i32);
        self.values.iter().map(|v| (v * scale).round() as i64).collect()
    }
}

/// Per-dimension box constraints inside the unit box.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// The full unit box `[0, 1]^dim`.
    ///
    /// # Panics
    /// Panics if `dim < 2`; one-point designs are always singular.
    pub fn unit(dim: usize) -> Self {
        assert!(dim >= 2, "bounds need at least 2 dimensions, got {dim}");
        Self {
            lower: vec![0.0; dim],
            upper: vec![1.0; dim],
        }
    }

    /// Creates bounds, validating shape, ordering, and unit-box containment.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, DesignError> {
        if lower.len() != upper.len() {
            return Err(DesignError::DimensionMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        if lower.len() < 2 {
            return Err(DesignError::TooShort { len: lower.len() });
        }
        for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            let ordered = lo < hi;
            let contained = (0.0..=1.0).contains(&lo) && (0.0..=1.0).contains(&hi);
            if !ordered || !contained {
                return Err(DesignError::InvalidBound {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Number of dimensions (design points).
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// Lower bound of dimension `i`.
    pub fn lower(&self, i: usize) -> f64 {
        self.lower[i]
    }

    /// Upper bound of dimension `i`.
    pub fn upper(&self, i: usize) -> f64 {
        self.upper[i]
    }

    /// Width of dimension `i`.
    pub fn span(&self, i: usize) -> f64 {
        self.upper[i] - self.lower[i]
    }

    /// Clamps `x` into dimension `i`'s interval.
    pub fn clamp(&self, i: usize, x: f64) -> f64 {
        x.clamp(self.lower[i], self.upper[i])
    }

    /// Samples a uniform random point inside the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.dim())
            .map(|i| rng.random_range(self.lower[i]..self.upper[i]))
            .collect()
    }
}
