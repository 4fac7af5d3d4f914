//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use serde::{Deserialize, Serialize};

/// Fitted trajectory parameters.
///
/// The model is the standard projectile parameterization with a fixed
/// gravitational constant:
///
/// - `x(t) = x0 + vx·t`
/// - `y(t) = y0 + vy·t − ½·g·t²`
///
/// Gravity is a known constant, not a fitted coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryCoefficients {
    /// Initial x position.
    pub x0: f64,
    /// Initial x velocity.
    pub vx: f64,
    /// Initial y position.
    pub y0: f64,
    /// Initial y velocity.
    pub vy: f64,
}

/// Output of a single fit call: the coefficients plus the model evaluated at
/// the caller-supplied query times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryFit {
    pub coefficients: TrajectoryCoefficients,
    /// Predicted `(x, y)` pairs, one per query time, in query order.
    pub predicted: Vec<(f64, f64)>,
}

/// A winning consensus fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusFit {
    pub fit: TrajectoryFit,
    /// Number of full-set points within the inlier threshold of the fit.
    pub inlier_count: usize,
    /// Index of the trial that produced this fit. On equal inlier counts the
    /// earliest trial wins, so this is stable for a given seed.
    pub trial: usize,
}

/// Output of a consensus run.
///
/// `best` is `None` when no trial reached `min_inliers`. That is a valid
/// terminal outcome the caller must handle, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusSelection {
    pub best: Option<ConsensusFit>,
    /// Trials that were skipped and why (for diagnostics).
    pub skipped: Vec<(usize, String)>,
}

/// Configuration for a consensus run.
///
/// Values are validated once at the top of `select_consensus` and never
/// mutated mid-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusConfig {
    /// Number of random trials.
    pub trials: usize,
    /// Points drawn (without replacement) per trial.
    pub sample_size: usize,
    /// Euclidean distance below which a point counts as an inlier.
    pub inlier_threshold: f64,
    /// Minimum inlier count for a fit to be accepted as consensus.
    pub min_inliers: usize,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            trials: 10,
            sample_size: 5,
            inlier_threshold: 0.1,
            min_inliers: 10,
        }
    }
}
