//! Integration domains and their errors

use std::fmt;
use std::error::Error;

/// Why an integration range was rejected
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IntegrationError {
    /// The range was split into zero cells
    ZeroSteps,
    /// `lower >= upper`
    EmptyInterval { lower: f64, upper: f64 },
    /// One of the bounds is NaN or infinite
    NonFinite { lower: f64, upper: f64 },
    /// A log-scaled axis has a bound that is zero or negative
    NonPositiveLogBound { lower: f64, upper: f64 },
}

impl fmt::Display for IntegrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntegrationError::ZeroSteps => write!(f, "integration range must have at least one step"),
            IntegrationError::EmptyInterval { lower, upper } => write!(f, "integration range [{:e}, {:e}] is empty or reversed", lower, upper),
            IntegrationError::NonFinite { lower, upper } => write!(f, "integration range [{:e}, {:e}] has a non-finite bound", lower, upper),
            IntegrationError::NonPositiveLogBound { lower, upper } => write!(f, "log-scaled integration range [{:e}, {:e}] must be strictly positive", lower, upper),
        }
    }
}

impl Error for IntegrationError {}

/// One axis of integration: the interval `[lower, upper]`,
/// divided into `steps` cells.
///
/// The only way to obtain one is `IntegrationRange::new`,
/// so every range seen by an integrator is non-empty and
/// has at least one step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntegrationRange {
    lower: f64,
    upper: f64,
    steps: usize,
}

impl IntegrationRange {
    pub fn new(lower: f64, upper: f64, steps: usize) -> Result<Self, IntegrationError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntegrationError::NonFinite { lower, upper });
        }

        if lower >= upper {
            return Err(IntegrationError::EmptyInterval { lower, upper });
        }

        if steps == 0 {
            return Err(IntegrationError::ZeroSteps);
        }

        Ok(Self { lower, upper, steps })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Width of a single cell on a linear grid
    pub fn step_size(&self) -> f64 {
        (self.upper - self.lower) / (self.steps as f64)
    }

    /// Returns the bounds as `(log10(lower), log10(upper))`,
    /// checking they are positive.
    pub fn log10_bounds(&self) -> Result<(f64, f64), IntegrationError> {
        if self.lower <= 0.0 {
            Err(IntegrationError::NonPositiveLogBound { lower: self.lower, upper: self.upper })
        } else {
            Ok((self.lower.log10(), self.upper.log10()))
        }
    }
}
