//! Typed errors for the fitting API.
//!
//! The consensus selector needs to tell recoverable per-trial failures
//! (degenerate subset, singular system) apart from hard input errors, so the
//! error type is an enum callers can match on rather than a message wrapper.

/// Error type for fit and consensus calls.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Input sequences have different lengths.
    LengthMismatch { x: usize, y: usize, t: usize },
    /// Too few usable samples: fewer than two distinct parameter values for a
    /// fit, or fewer points than the subset size for a consensus run.
    InsufficientSamples { required: usize, actual: usize },
    /// The normal-equations matrix is not invertible.
    SingularMatrix,
    /// A configuration value failed validation.
    InvalidConfig(String),
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::LengthMismatch { x, y, t } => {
                write!(f, "Input lengths differ: x={x}, y={y}, t={t}.")
            }
            FitError::InsufficientSamples { required, actual } => {
                write!(f, "Insufficient samples: required {required}, got {actual}.")
            }
            FitError::SingularMatrix => {
                write!(f, "Normal-equations matrix is singular.")
            }
            FitError::InvalidConfig(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FitError {}
