//! `ballistic-fit` library crate.
//!
//! Robust fitting of projectile-style trajectories to noisy 2D samples:
//!
//! - a closed-form least-squares fit of the trajectory parameters
//!   (`fit::fit_trajectory`)
//! - a random sample consensus wrapper that tolerates gross outliers
//!   (`fit::select_consensus`)
//!
//! The crate exposes a pure computational API so that callers (plotting,
//! simulation, data pipelines) stay decoupled from the fitting internals.

pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod models;
