//! Least-squares continuation-value regression.
//!
//! Fits the quadratic basis `(1, S, S²)` to discounted future cashflows
//! by ordinary least squares (normal equations + LU solve).

use nalgebra::{DMatrix, DVector};

/// Minimum in-the-money observations for a meaningful quadratic fit.
///
/// Below this the least-squares system is underdetermined; the backward
/// induction skips the exercise decision for that step instead.
pub(crate) const MIN_REGRESSION_SAMPLES: usize = 3;

/// Fits `y ≈ a + b·x + c·x²` by ordinary least squares.
///
/// Returns `None` when there are fewer than
/// [`MIN_REGRESSION_SAMPLES`] observations, the normal equations are
/// singular, or the solution is non-finite — the callers treat every
/// failure mode as "no exercise decision this step".
pub(crate) fn fit_quadratic(x: &[f64], y: &[f64]) -> Option<[f64; 3]> {
    debug_assert_eq!(x.len(), y.len());

    if x.len() < MIN_REGRESSION_SAMPLES {
        return None;
    }

    let mut design = DMatrix::<f64>::zeros(x.len(), 3);
    let mut observations = DVector::<f64>::zeros(x.len());
    for (row, (&xi, &yi)) in x.iter().zip(y).enumerate() {
        design[(row, 0)] = 1.0;
        design[(row, 1)] = xi;
        design[(row, 2)] = xi * xi;
        observations[row] = yi;
    }

    let xtx = design.transpose() * &design;
    let xty = design.transpose() * &observations;
    let beta = xtx.lu().solve(&xty)?;

    if beta.iter().any(|b| !b.is_finite()) {
        return None;
    }

    Some([beta[0], beta[1], beta[2]])
}
