//! Random sample consensus over trajectory fits.
//!
//! Each trial draws a small random subset of the samples, fits the trajectory
//! model on it, and scores the fit by counting how many of the *full* set of
//! samples fall within a distance threshold of the predicted curve. The trial
//! with the most inliers wins; on equal counts the earliest trial wins.
//!
//! Trials are mutually independent, so they are evaluated in parallel. Two
//! things keep the result identical to a sequential run:
//!
//! - every trial's subset is drawn from the caller's RNG *before* the
//!   parallel stage, so RNG consumption never depends on scheduling
//! - outcomes are reduced in trial order

use rand::seq::index;
use rand::Rng;
use rayon::prelude::*;

use crate::domain::{ConsensusConfig, ConsensusFit, ConsensusSelection, TrajectoryFit};
use crate::error::FitError;
use crate::fit::engine::fit_trajectory;

struct TrialOutcome {
    idx: usize,
    fit: TrajectoryFit,
    inliers: usize,
}

/// Run the consensus search.
///
/// The RNG is owned by the caller; seeding it (e.g. `StdRng::seed_from_u64`)
/// makes the whole trial sequence reproducible.
///
/// A trial whose subset fails to fit (degenerate times, singular system) is
/// skipped and recorded in [`ConsensusSelection::skipped`]; it never aborts
/// the run. `best` is `None` when no trial reaches `min_inliers`.
///
/// # Errors
/// - [`FitError::LengthMismatch`] when `x`, `y`, `t` differ in length.
/// - [`FitError::InvalidConfig`] for zero trials, a subset size below 2, or a
///   non-positive/non-finite inlier threshold.
/// - [`FitError::InsufficientSamples`] when there are fewer points than
///   `sample_size`, so no trial could ever be drawn.
pub fn select_consensus<R: Rng + ?Sized>(
    x: &[f64],
    y: &[f64],
    t: &[f64],
    config: &ConsensusConfig,
    rng: &mut R,
) -> Result<ConsensusSelection, FitError> {
    if x.len() != y.len() || x.len() != t.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
            t: t.len(),
        });
    }
    if config.trials == 0 {
        return Err(FitError::InvalidConfig("Trial count must be > 0.".into()));
    }
    if config.sample_size < 2 {
        return Err(FitError::InvalidConfig(
            "Subset size must be >= 2 to determine the model.".into(),
        ));
    }
    if !(config.inlier_threshold.is_finite() && config.inlier_threshold > 0.0) {
        return Err(FitError::InvalidConfig(
            "Inlier threshold must be finite and > 0.".into(),
        ));
    }

    let n = x.len();
    if n < config.sample_size {
        return Err(FitError::InsufficientSamples {
            required: config.sample_size,
            actual: n,
        });
    }

    // Indices are drawn without replacement: a duplicated index would only
    // shrink the effective subset.
    let subsets: Vec<Vec<usize>> = (0..config.trials)
        .map(|_| index::sample(rng, n, config.sample_size).into_vec())
        .collect();

    let outcomes: Vec<Result<TrialOutcome, (usize, String)>> = subsets
        .par_iter()
        .enumerate()
        .map(|(idx, subset)| {
            let sx: Vec<f64> = subset.iter().map(|&i| x[i]).collect();
            let sy: Vec<f64> = subset.iter().map(|&i| y[i]).collect();
            let st: Vec<f64> = subset.iter().map(|&i| t[i]).collect();

            match fit_trajectory(&sx, &sy, &st, t) {
                Ok(fit) => {
                    let inliers = count_inliers(x, y, &fit.predicted, config.inlier_threshold);
                    Ok(TrialOutcome { idx, fit, inliers })
                }
                Err(e) => Err((idx, e.to_string())),
            }
        })
        .collect();

    // Ordered reduction: strict `>` keeps the earliest trial on ties.
    let mut best: Option<TrialOutcome> = None;
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(trial) => {
                if best.as_ref().is_none_or(|b| trial.inliers > b.inliers) {
                    best = Some(trial);
                }
            }
            Err((idx, reason)) => {
                tracing::debug!(trial = idx, reason = %reason, "trial skipped");
                skipped.push((idx, reason));
            }
        }
    }

    let best = best
        .filter(|b| b.inliers >= config.min_inliers)
        .map(|b| ConsensusFit {
            fit: b.fit,
            inlier_count: b.inliers,
            trial: b.idx,
        });

    Ok(ConsensusSelection { best, skipped })
}

/// Count full-set points within `threshold` (Euclidean) of the prediction.
fn count_inliers(x: &[f64], y: &[f64], predicted: &[(f64, f64)], threshold: f64) -> usize {
    let mut count = 0;
    for i in 0..x.len() {
        let (px, py) = predicted[i];
        let dx = x[i] - px;
        let dy = y[i] - py;
        if (dx * dx + dy * dy).sqrt() <= threshold {
            count += 1;
        }
    }
    count
}
