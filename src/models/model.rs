//! Model evaluation for the projectile trajectory.
//!
//! The fit engine relies on two primitive operations:
//! - build a design row for a given time (for the per-axis regression)
//! - predict `(x, y)` at a time given fitted coefficients (for residuals and
//!   query evaluation)
//!
//! Both axes share the same 2-parameter basis `[1, t]`: gravity is a fixed
//! constant, so the quadratic term in `y(t)` is known, not fitted.

use crate::domain::TrajectoryCoefficients;

/// Gravitational acceleration used by the model.
pub const GRAVITY: f64 = 9.81;

/// Fill a design row for one axis.
///
/// The row includes the constant term first (intercept), then the time term.
///
/// # Panics
/// Panics if `out` has length below 2. Callers should size the row correctly.
pub fn fill_design_row(t: f64, out: &mut [f64]) {
    out[0] = 1.0;
    out[1] = t;
}

/// Predict `x(t)`.
pub fn predict_x(c: &TrajectoryCoefficients, t: f64) -> f64 {
    c.x0 + c.vx * t
}

/// Predict `y(t)` including the fixed gravity term.
pub fn predict_y(c: &TrajectoryCoefficients, t: f64) -> f64 {
    c.y0 + c.vy * t - 0.5 * GRAVITY * t * t
}

/// Evaluate the trajectory at each query time.
///
/// Produces one `(x, y)` pair per input time, in input order.
pub fn evaluate(c: &TrajectoryCoefficients, times: &[f64]) -> Vec<(f64, f64)> {
    times.iter().map(|&t| (predict_x(c, t), predict_y(c, t))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_at_launch_returns_initial_position() {
        let c = TrajectoryCoefficients {
            x0: 1.5,
            vx: 3.0,
            y0: -2.0,
            vy: 8.0,
        };
        assert_eq!(predict_x(&c, 0.0), 1.5);
        assert_eq!(predict_y(&c, 0.0), -2.0);
    }

    #[test]
    fn predict_applies_fixed_gravity() {
        let c = TrajectoryCoefficients {
            x0: 0.0,
            vx: 1.0,
            y0: 0.0,
            vy: 10.0,
        };
        // y(1) = 10 - 0.5 * 9.81
        assert!((predict_y(&c, 1.0) - (10.0 - 4.905)).abs() < 1e-12);
        // y(2) = 20 - 0.5 * 9.81 * 4
        assert!((predict_y(&c, 2.0) - (20.0 - 19.62)).abs() < 1e-12);
    }

    #[test]
    fn evaluate_preserves_length_and_order() {
        let c = TrajectoryCoefficients {
            x0: 0.0,
            vx: 2.0,
            y0: 1.0,
            vy: 0.0,
        };
        let times = [0.0, 0.5, 1.0];
        let out = evaluate(&c, &times);
        assert_eq!(out.len(), times.len());
        for (i, &t) in times.iter().enumerate() {
            assert_eq!(out[i].0, predict_x(&c, t));
            assert_eq!(out[i].1, predict_y(&c, t));
        }
    }
}
