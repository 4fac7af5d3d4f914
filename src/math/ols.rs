//! Least squares solver.
//!
//! The fit engine repeatedly solves small linear regression problems of the
//! form:
//!
//! ```text
//! minimize ‖A·p − b‖²
//! ```
//!
//! Implementation choices:
//! - We solve the normal equations `(AᵗA)·p = Aᵗ·b` via a Cholesky
//!   factorization of `AᵗA`.
//! - The parameter dimension is tiny (2 columns per axis), so forming `AᵗA`
//!   explicitly is cheap and well within normal-equations conditioning limits.
//! - Singular systems are reported as a typed error, never a panic: the
//!   consensus selector fits many small random subsets and some of them are
//!   degenerate.

use nalgebra::{Cholesky, DMatrix, DVector};

use crate::error::FitError;

/// Solve a least squares problem via the normal equations.
///
/// Returns [`FitError::SingularMatrix`] when `AᵗA` is not invertible (i.e.,
/// the columns of `A` are linearly dependent) or the solution is non-finite.
pub fn solve_normal_equations(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, FitError> {
    let ata = a.transpose() * a;
    let atb = a.transpose() * b;

    let Some(chol) = Cholesky::new(ata) else {
        return Err(FitError::SingularMatrix);
    };
    let p = chol.solve(&atb);

    if p.iter().all(|v| v.is_finite()) {
        Ok(p)
    } else {
        Err(FitError::SingularMatrix)
    }
}
