//! Optimality criteria for simple linear regression designs.
//!
//! For an n-point design `x` the model matrix is `X = [1 | x]` and the
//! information matrix is the 2×2 matrix
//!
//! ```text
//! XᵀX = [ n    Σx  ]
//!       [ Σx   Σx² ]
//! ```
//!
//! with determinant `det = n·Σx² − (Σx)²`. Both criteria here are
//! functions of this matrix and are **minimized**:
//!
//! - [`AOptimality`]: trace of the inverse, `(n + Σx²) / det` — the sum of
//!   parameter variances.
//! - [`DOptimality`]: determinant of the inverse, `1 / det` — the
//!   generalized variance (minimizing it maximizes `det`).
//!
//! A design whose points are all equal has `det = 0`: the matrix is
//! singular and no criterion value exists.

use thiserror::Error;

/// Determinants at or below `tolerance · n` count as singular.
///
/// For unit-interval designs `det` tops out at `n²/4`, so this cut only
/// catches numerically degenerate designs.
const SINGULARITY_TOLERANCE: f64 = 1e-9;

/// Errors from evaluating a design against a criterion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriterionError {
    /// The information matrix is not invertible; the design needs at
    /// least two distinct exposure levels.
    #[error("information matrix is singular: design needs at least two distinct exposure levels")]
    SingularMatrix,

    /// Fewer than two design points.
    #[error("criterion needs at least 2 design points, got {len}")]
    TooFewPoints {
        /// Number of points supplied.
        len: usize,
    },
}

/// An optimality criterion over candidate design vectors.
///
/// Stateless and pure: the same slice always yields the same score.
/// Lower scores are better for every implementation.
///
/// Object-safe so strategies and runners can take `&dyn Criterion`.
pub trait Criterion: Send + Sync {
    /// Short name for reports, e.g. `"a-optimality"`.
    fn label(&self) -> &'static str;

    /// Scores a candidate design. Lower is better.
    ///
    /// Fails with [`CriterionError::SingularMatrix`] when the design is
    /// degenerate. No recovery is attempted here.
    fn score(&self, design: &[f64]) -> Result<f64, CriterionError>;

    /// Score with evaluation failure mapped to `f64::INFINITY`.
    ///
    /// Search loops use this so a degenerate candidate is rejected by
    /// comparison instead of aborting the whole run.
    fn penalized_score(&self, design: &[f64]) -> f64 {
        self.score(design).unwrap_or(f64::INFINITY)
    }
}

/// Sums needed by both criteria: `(n, Σx², det)`.
fn information_matrix(design: &[f64]) -> Result<(f64, f64, f64), CriterionError> {
    if design.len() < 2 {
        return Err(CriterionError::TooFewPoints { len: design.len() });
    }
    let n = design.len() as f64;
    let sum: f64 = design.iter().sum();
    let sum_sq: f64 = design.iter().map(|x| x * x).sum();
    let det = n * sum_sq - sum * sum;
    if det <= SINGULARITY_TOLERANCE * n {
        return Err(CriterionError::SingularMatrix);
    }
    Ok((n, sum_sq, det))
}

/// A-optimality: trace of the inverse information matrix.
///
/// Minimizes the average variance of the intercept and slope estimators.
#[derive(Debug, Clone, Copy, Default)]
pub struct AOptimality;

impl Criterion for AOptimality {
    fn label(&self) -> &'static str {
        "a-optimality"
    }

    fn score(&self, design: &[f64]) -> Result<f64, CriterionError> {
        let (n, sum_sq, det) = information_matrix(design)?;
        // inv([[a, b], [b, d]]) has trace (a + d) / det.
        Ok((n + sum_sq) / det)
    }
}

/// D-optimality: determinant of the inverse information matrix.
///
/// Minimizing `1/det` maximizes the determinant itself, shrinking the
/// joint confidence ellipsoid of the estimators. The global optimum for
/// an even n is known in closed form: half the points at 0, half at 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct DOptimality;

impl Criterion for DOptimality {
    fn label(&self) -> &'static str {
        "d-optimality"
    }

    fn score(&self, design: &[f64]) -> Result<f64, CriterionError> {
        let (_, _, det) = information_matrix(design)?;
        Ok(det.recip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// `n0` points at 0 followed by `n1` points at 1.
    fn two_level(n0: usize, n1: usize) -> Vec<f64> {
        let mut v = vec![0.0; n0];
        v.extend(std::iter::repeat(1.0).take(n1));
        v
    }

    /// 20 points spread evenly across [0, 1].
    fn spread_20() -> Vec<f64> {
        (0..20).map(|i| i as f64 / 19.0).collect()
    }

    #[test]
    fn test_d_optimal_bang_bang_beats_alternatives() {
        let d = DOptimality;
        let optimal = d.score(&two_level(10, 10)).unwrap();
        // det = 20·10 − 100 = 100, so 1/det = 0.01 exactly.
        assert!((optimal - 0.01).abs() < 1e-12);

        for other in [
            two_level(12, 8),
            two_level(8, 12),
            two_level(5, 15),
            spread_20(),
            vec![0.25; 10].into_iter().chain(vec![0.75; 10]).collect(),
        ] {
            let score = d.score(&other).unwrap();
            assert!(
                optimal <= score,
                "10/10 split should be D-optimal: {optimal} > {score}"
            );
        }
    }

    #[test]
    fn test_a_optimal_prefers_12_8_over_10_10() {
        let a = AOptimality;
        let split_12_8 = a.score(&two_level(12, 8)).unwrap();
        let split_8_12 = a.score(&two_level(8, 12)).unwrap();
        let split_10_10 = a.score(&two_level(10, 10)).unwrap();

        assert!(
            split_12_8 < split_10_10,
            "12/8 should beat 10/10 under A-optimality: {split_12_8} vs {split_10_10}"
        );
        // The 8/12 split is NOT symmetric to 12/8 here: the intercept
        // variance depends on how many points sit at zero.
        assert!(split_12_8 <= split_8_12);
        assert!(split_12_8 < a.score(&spread_20()).unwrap());
    }

    #[test]
    fn test_constant_design_is_singular() {
        for criterion in [&AOptimality as &dyn Criterion, &DOptimality] {
            assert_eq!(
                criterion.score(&[0.5; 20]).unwrap_err(),
                CriterionError::SingularMatrix
            );
            assert_eq!(
                criterion.score(&[0.0, 0.0]).unwrap_err(),
                CriterionError::SingularMatrix
            );
            assert_eq!(
                criterion.score(&[1.0, 1.0, 1.0]).unwrap_err(),
                CriterionError::SingularMatrix
            );
        }
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            AOptimality.score(&[0.5]).unwrap_err(),
            CriterionError::TooFewPoints { len: 1 }
        );
        assert_eq!(
            DOptimality.score(&[]).unwrap_err(),
            CriterionError::TooFewPoints { len: 0 }
        );
    }

    #[test]
    fn test_penalized_score_maps_failure_to_infinity() {
        assert_eq!(AOptimality.penalized_score(&[0.5; 20]), f64::INFINITY);
        assert!(AOptimality.penalized_score(&two_level(10, 10)).is_finite());
    }

    #[test]
    fn test_labels() {
        assert_eq!(AOptimality.label(), "a-optimality");
        assert_eq!(DOptimality.label(), "d-optimality");
    }

    proptest! {
        /// Any design with a decently spread pair of points scores finite
        /// and positive under both criteria.
        #[test]
        fn prop_non_degenerate_designs_score_finite(
            mut values in proptest::collection::vec(0.0f64..=1.0, 2..40)
        ) {
            values[0] = 0.0;
            let last = values.len() - 1;
            values[last] = 1.0;

            for criterion in [&AOptimality as &dyn Criterion, &DOptimality] {
                let score = criterion.score(&values).unwrap();
                prop_assert!(score.is_finite());
                prop_assert!(score > 0.0);
            }
        }

        /// `det ≤ n²/4` for unit-interval designs, so no design of length
        /// 20 can score below the bang-bang optimum under D-optimality.
        #[test]
        fn prop_d_score_never_beats_bang_bang(
            values in proptest::collection::vec(0.0f64..=1.0, 20)
        ) {
            let optimal = DOptimality.score(&two_level(10, 10)).unwrap();
            match DOptimality.score(&values) {
                Ok(score) => prop_assert!(score >= optimal - 1e-12),
                Err(CriterionError::SingularMatrix) => {}
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }
    }
}
