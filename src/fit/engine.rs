//! Low-level fitting routine for the trajectory model.
//!
//! Given:
//! - observed positions `x_i`, `y_i`
//! - sample times `t_i`
//! - query times at which to evaluate the fitted model
//!
//! we solve one ordinary least squares problem per axis and evaluate the
//! resulting coefficients at the query times. The query times may differ from
//! the sample times: the consensus selector fits on a small subset and scores
//! the fit against the full sample set.

use nalgebra::{DMatrix, DVector};

use crate::domain::{TrajectoryCoefficients, TrajectoryFit};
use crate::error::FitError;
use crate::math::solve_normal_equations;
use crate::models::{evaluate, fill_design_row, GRAVITY};

/// Fit the trajectory model to the given samples.
///
/// Both axes share the design matrix `[1, t_i]`. The x axis regresses the
/// observed `x` directly. On the y axis the gravity term is known, so it is
/// moved to the left-hand side:
///
/// ```text
/// y(t) = y0 + vy·t − ½·g·t²
/// y(t) + ½·g·t² = y0 + vy·t
/// ```
///
/// and `y_i + ½·g·t_i²` is regressed on `[1, t]` to recover `(y0, vy)`.
///
/// # Errors
/// - [`FitError::LengthMismatch`] when `x`, `y`, `t` differ in length.
/// - [`FitError::InsufficientSamples`] when fewer than two distinct sample
///   times are supplied.
/// - [`FitError::SingularMatrix`] propagated unchanged from the solver.
pub fn fit_trajectory(
    x: &[f64],
    y: &[f64],
    t: &[f64],
    evaluate_t: &[f64],
) -> Result<TrajectoryFit, FitError> {
    if x.len() != y.len() || x.len() != t.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
            t: t.len(),
        });
    }

    let distinct = count_distinct(t);
    if distinct < 2 {
        return Err(FitError::InsufficientSamples {
            required: 2,
            actual: distinct,
        });
    }

    let n = t.len();
    let mut design = DMatrix::<f64>::zeros(n, 2);
    let mut bx = DVector::<f64>::zeros(n);
    let mut by = DVector::<f64>::zeros(n);
    let mut row = [0.0; 2];

    for i in 0..n {
        fill_design_row(t[i], &mut row);
        design[(i, 0)] = row[0];
        design[(i, 1)] = row[1];
        bx[i] = x[i];
        by[i] = y[i] + 0.5 * GRAVITY * t[i] * t[i];
    }

    let px = solve_normal_equations(&design, &bx)?;
    let py = solve_normal_equations(&design, &by)?;

    let coefficients = TrajectoryCoefficients {
        x0: px[0],
        vx: px[1],
        y0: py[0],
        vy: py[1],
    };
    let predicted = evaluate(&coefficients, evaluate_t);

    Ok(TrajectoryFit {
        coefficients,
        predicted,
    })
}

fn count_distinct(t: &[f64]) -> usize {
    let mut sorted: Vec<f64> = t.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted.dedup();
    sorted.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::predict_y;

    fn truth() -> TrajectoryCoefficients {
        TrajectoryCoefficients {
            x0: 1.0,
            vx: 2.0,
            y0: 3.0,
            vy: 4.0,
        }
    }

    fn on_curve(times: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let pairs = evaluate(&truth(), times);
        (
            pairs.iter().map(|p| p.0).collect(),
            pairs.iter().map(|p| p.1).collect(),
        )
    }

    #[test]
    fn recovers_exact_coefficients_from_noise_free_data() {
        let times: Vec<f64> = (0..10).map(|i| i as f64 * 0.3).collect();
        let (x, y) = on_curve(&times);

        let fit = fit_trajectory(&x, &y, &times, &times).unwrap();
        let c = fit.coefficients;
        let want = truth();
        assert!((c.x0 - want.x0).abs() < 1e-9, "x0 {}", c.x0);
        assert!((c.vx - want.vx).abs() < 1e-9, "vx {}", c.vx);
        assert!((c.y0 - want.y0).abs() < 1e-9, "y0 {}", c.y0);
        assert!((c.vy - want.vy).abs() < 1e-9, "vy {}", c.vy);
    }

    #[test]
    fn round_trips_noise_free_observations() {
        let times: Vec<f64> = (0..8).map(|i| i as f64 * 0.25).collect();
        let (x, y) = on_curve(&times);

        let fit = fit_trajectory(&x, &y, &times, &times).unwrap();
        assert_eq!(fit.predicted.len(), times.len());
        for (i, &(px, py)) in fit.predicted.iter().enumerate() {
            assert!((px - x[i]).abs() < 1e-9);
            assert!((py - y[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn evaluates_at_query_times_distinct_from_sample_times() {
        let times: Vec<f64> = vec![0.0, 0.5, 1.0, 1.5];
        let (x, y) = on_curve(&times);

        let query: Vec<f64> = vec![0.25, 0.75, 1.25, 2.0, 3.0];
        let fit = fit_trajectory(&x, &y, &times, &query).unwrap();

        assert_eq!(fit.predicted.len(), query.len());
        for (i, &t) in query.iter().enumerate() {
            assert!((fit.predicted[i].1 - predict_y(&truth(), t)).abs() < 1e-9);
        }
    }

    #[test]
    fn single_sample_is_insufficient() {
        let err = fit_trajectory(&[1.0], &[2.0], &[0.5], &[0.5]).unwrap_err();
        assert_eq!(
            err,
            FitError::InsufficientSamples {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn duplicate_times_are_insufficient() {
        // Three samples but only one distinct time.
        let err = fit_trajectory(&[1.0, 1.1, 0.9], &[2.0, 2.1, 1.9], &[0.5, 0.5, 0.5], &[0.5])
            .unwrap_err();
        assert_eq!(
            err,
            FitError::InsufficientSamples {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = fit_trajectory(&[1.0, 2.0], &[1.0], &[0.0, 1.0], &[]).unwrap_err();
        assert_eq!(err, FitError::LengthMismatch { x: 2, y: 1, t: 2 });
    }
}
