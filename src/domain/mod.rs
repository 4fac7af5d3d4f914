//! Domain types used throughout the fitting API.
//!
//! This module defines:
//!
//! - fitted trajectory outputs (`TrajectoryCoefficients`, `TrajectoryFit`)
//! - consensus outputs (`ConsensusFit`, `ConsensusSelection`)
//! - consensus configuration (`ConsensusConfig`)

pub mod types;

pub use types::*;
