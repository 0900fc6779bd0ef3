//! Sweeps the scattered photon energy over a logarithmic grid,
//! integrating the inverse Compton spectrum at each point

use std::fmt;
use std::error::Error;
use std::str::FromStr;

use slog::Logger;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ParallelProgressIterator};

use crate::ics::{Kernel, KernelMode};
use crate::particle::{cmb, ElectronSpectrum};
use crate::quadrature::{integrate_2d, IntegrationError, IntegrationRange};

/// Range of scattered photon energies, in eV
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EnergyRange {
    lower: f64,
    upper: f64,
}

impl EnergyRange {
    /// Returns `None` unless `0 < lower < upper`, both finite.
    pub fn new(lower: f64, upper: f64) -> Option<Self> {
        if lower.is_finite() && upper.is_finite() && lower > 0.0 && lower < upper {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }
}

/// Integration grid used at every point of the sweep
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepGrid {
    /// Incident photon energy bounds, in eV
    pub einit_lower: f64,
    pub einit_upper: f64,
    pub einit_steps: usize,
    /// Lorentz factor lower bound
    pub gamma_lower: f64,
    /// Lorentz factor upper bound, as a multiple of the cutoff
    pub gamma_upper_factor: f64,
    pub gamma_steps: usize,
    /// Spacing of the scattered photon energies, in decades
    pub stride: f64,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            einit_lower: 1.0e-15,
            einit_upper: 1.0e4,
            einit_steps: 500,
            gamma_lower: 10.0,
            gamma_upper_factor: 100.0,
            gamma_steps: 500,
            stride: 0.1,
        }
    }
}

/// What to do when the integrated flux at a point is not finite
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the sweep and return the error
    Abort,
    /// Log a warning and omit the point
    Skip,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::Abort
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            _ => Err(format!("'{}' is not a failure policy (expected 'abort' or 'skip')", s)),
        }
    }
}

/// Upper limit on the number of points in a sweep
pub const MAX_POINTS: usize = u32::MAX as usize;

/// Reasons a sweep fails
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SweepError {
    /// One of the integration ranges is invalid
    Range(IntegrationError),
    /// The energy stride is not a positive number of decades
    Stride(f64),
    /// The stride is so small that the sweep would have more than
    /// `MAX_POINTS` points
    TooManyPoints { stride: f64, decades: f64 },
    /// The integrated flux at the `index`th point is NaN or infinite
    NonFiniteFlux { index: usize, energy: f64 },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SweepError::Range(err) => write!(f, "invalid integration domain: {}", err),
            SweepError::Stride(stride) => write!(f, "energy stride must be positive and finite, not {}", stride),
            SweepError::TooManyPoints { stride, decades } => write!(f, "energy stride {:e} over {} decades gives more than {} points", stride, decades, MAX_POINTS),
            SweepError::NonFiniteFlux { index, energy } => write!(f, "integrated flux at point {} (E = {:e} eV) is not finite", index + 1, energy),
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SweepError::Range(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IntegrationError> for SweepError {
    fn from(err: IntegrationError) -> Self {
        SweepError::Range(err)
    }
}

/// Scattered photon energy (eV) and the flux integrated over
/// the photon and electron populations
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpectrumSample {
    pub energy: f64,
    pub flux: f64,
}

/// The integrand at fixed scattered photon energy `efin`: the product of
/// the CMB spectrum, the electron spectrum and the scattering kernel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IcsIntegrand {
    kernel: KernelMode,
    electrons: ElectronSpectrum,
    efin: f64,
}

impl IcsIntegrand {
    pub fn new(kernel: KernelMode, electrons: ElectronSpectrum, efin: f64) -> Self {
        Self { kernel, electrons, efin }
    }

    pub fn eval(&self, einit: f64, gamma: f64) -> f64 {
        cmb::flux(einit)
            * self.electrons.flux(gamma)
            * self.kernel.differential_flux(self.efin, einit, gamma)
    }
}

/// A validated sweep over scattered photon energy
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sweep {
    kernel: KernelMode,
    electrons: ElectronSpectrum,
    energies: EnergyRange,
    einit: IntegrationRange,
    gamma: IntegrationRange,
    stride: f64,
    policy: FailurePolicy,
}

impl Sweep {
    /// Checks the integration domain before any work is done:
    /// both axes are log-scaled, so their bounds must also be positive.
    pub fn new(kernel: KernelMode, electrons: ElectronSpectrum, energies: EnergyRange, grid: &SweepGrid, policy: FailurePolicy) -> Result<Self, SweepError> {
        if !grid.stride.is_finite() || grid.stride <= 0.0 {
            return Err(SweepError::Stride(grid.stride));
        }

        let decades = energies.upper().log10() - energies.lower().log10();
        let points = decades / grid.stride;
        if !points.is_finite() || points > MAX_POINTS as f64 {
            return Err(SweepError::TooManyPoints { stride: grid.stride, decades });
        }

        let einit = IntegrationRange::new(grid.einit_lower, grid.einit_upper, grid.einit_steps)?;
        let gamma = IntegrationRange::new(
            grid.gamma_lower,
            electrons.gamma_max() * grid.gamma_upper_factor,
            grid.gamma_steps
        )?;

        einit.log10_bounds()?;
        gamma.log10_bounds()?;

        Ok(Self { kernel, electrons, energies, einit, gamma, stride: grid.stride, policy })
    }

    /// Number of points in the sweep
    pub fn len(&self) -> usize {
        let decades = self.energies.upper().log10() - self.energies.lower().log10();
        (decades / self.stride).floor() as usize
    }

    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The scattered photon energies visited by the sweep, starting at the
    /// lower bound and stepping by `stride` decades. The upper bound itself
    /// is not included.
    pub fn target_energies(&self) -> Vec<f64> {
        let mut log_e = self.energies.lower().log10();
        let mut energies = Vec::with_capacity(self.len());
        for _i in 0..self.len() {
            energies.push(10f64.powf(log_e));
            log_e += self.stride;
        }
        energies
    }

    /// Integrates the scattered flux at the single energy `efin`
    pub fn evaluate(&self, efin: f64) -> Result<f64, IntegrationError> {
        let integrand = IcsIntegrand::new(self.kernel, self.electrons, efin);
        integrate_2d(|einit, gamma| integrand.eval(einit, gamma), &self.einit, &self.gamma)
    }

    /// Applies the failure policy to the flux at the `index`th point
    fn accept(&self, logger: &Logger, index: usize, energy: f64, flux: f64) -> Result<Option<SpectrumSample>, SweepError> {
        if flux.is_finite() {
            return Ok(Some(SpectrumSample { energy, flux }));
        }

        match self.policy {
            FailurePolicy::Abort => {
                error!(logger, "non-finite flux, aborting"; "index" => index, "energy" => energy, "flux" => flux);
                Err(SweepError::NonFiniteFlux { index, energy })
            },
            FailurePolicy::Skip => {
                warn!(logger, "non-finite flux, skipping"; "index" => index, "energy" => energy, "flux" => flux);
                Ok(None)
            },
        }
    }

    /// Evaluates each point in turn, passing it to `sink` with its index
    /// as soon as it is available. Returns the number of points emitted.
    pub fn run<S, E>(&self, logger: &Logger, mut sink: S) -> Result<usize, E>
    where S: FnMut(usize, SpectrumSample) -> Result<(), E>, E: From<SweepError> {
        let energies = self.target_energies();
        info!(logger, "starting sweep";
            "kernel" => self.kernel.to_string(), "points" => energies.len(),
            "lower" => self.energies.lower(), "upper" => self.energies.upper()
        );

        let mut emitted = 0;
        for (i, efin) in energies.into_iter().enumerate() {
            let flux = self.evaluate(efin).map_err(SweepError::from)?;
            debug!(logger, "integrated"; "index" => i, "energy" => efin, "flux" => flux);
            if let Some(sample) = self.accept(logger, i, efin, flux)? {
                sink(i, sample)?;
                emitted += 1;
            }
        }

        info!(logger, "sweep complete"; "emitted" => emitted);
        Ok(emitted)
    }

    /// As `run`, but the points are evaluated concurrently with a
    /// progress bar. Samples are passed to `sink` in energy order once
    /// all are complete, and are identical to those from `run`.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<S, E>(&self, logger: &Logger, mut sink: S) -> Result<usize, E>
    where S: FnMut(usize, SpectrumSample) -> Result<(), E>, E: From<SweepError> {
        let energies = self.target_energies();
        info!(logger, "starting parallel sweep";
            "kernel" => self.kernel.to_string(), "points" => energies.len(),
            "threads" => rayon::current_num_threads()
        );

        let pb = ProgressBar::new(energies.len() as u64);
        let fluxes: Vec<Result<f64, IntegrationError>> = energies.par_iter()
            .progress_with(pb.clone())
            .map(|efin| self.evaluate(*efin))
            .collect();
        pb.finish_and_clear();

        let mut emitted = 0;
        for (i, (efin, flux)) in energies.into_iter().zip(fluxes.into_iter()).enumerate() {
            let flux = flux.map_err(SweepError::from)?;
            if let Some(sample) = self.accept(logger, i, efin, flux)? {
                sink(i, sample)?;
                emitted += 1;
            }
        }

        info!(logger, "sweep complete"; "emitted" => emitted);
        Ok(emitted)
    }
}
