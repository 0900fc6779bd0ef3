//! The complete set of parameters for a run

use std::path::PathBuf;

use crate::ics::KernelMode;
use crate::particle::ElectronSpectrum;
use crate::spectrum::{EnergyRange, FailurePolicy, Sweep, SweepGrid};
use super::{Config, InputError};

/// Everything needed to set up and run a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct RunParams {
    pub kernel: KernelMode,
    pub electrons: ElectronSpectrum,
    pub energies: EnergyRange,
    pub grid: SweepGrid,
    pub policy: FailurePolicy,
    pub parallel: bool,
    pub output_dir: PathBuf,
}

impl RunParams {
    /// Parameters entered at the console: the kernel, electron spectrum and
    /// energy range. Everything else takes its default value.
    pub fn new(kernel: KernelMode, electrons: ElectronSpectrum, energies: EnergyRange) -> Self {
        Self {
            kernel,
            electrons,
            energies,
            grid: SweepGrid::default(),
            policy: FailurePolicy::default(),
            parallel: false,
            output_dir: PathBuf::from("."),
        }
    }

    /// Reads the parameters from a configuration file, which must
    /// already have had its context loaded.
    pub fn from_config(config: &Config) -> Result<Self, InputError> {
        let kernel: KernelMode = config.read("control:kernel")?;
        let parallel = config.read_or("control:parallel", false)?;
        let policy = config.read_or("control:on_failure", FailurePolicy::default())?;

        let norm: f64 = config.read("electrons:norm")?;
        let power: f64 = config.read("electrons:power")?;
        let gamma_max: f64 = config.read("electrons:gamma_max")?;
        let electrons = electron_spectrum(norm, power, gamma_max)?;

        let lower: f64 = config.read("spectrum:lower")?;
        let upper: f64 = config.read("spectrum:upper")?;
        let energies = energy_range(lower, upper)?;

        let default = SweepGrid::default();
        let grid = SweepGrid {
            einit_lower: config.read_or("integration:einit_lower", default.einit_lower)?,
            einit_upper: config.read_or("integration:einit_upper", default.einit_upper)?,
            einit_steps: config.read_or("integration:einit_steps", default.einit_steps)?,
            gamma_lower: config.read_or("integration:gamma_lower", default.gamma_lower)?,
            gamma_upper_factor: config.read_or("integration:gamma_upper_factor", default.gamma_upper_factor)?,
            gamma_steps: config.read_or("integration:gamma_steps", default.gamma_steps)?,
            stride: config.read_or("spectrum:stride", default.stride)?,
        };

        let output_dir: String = config.read_or("output:directory", ".".to_owned())?;

        Ok(Self {
            kernel,
            electrons,
            energies,
            grid,
            policy,
            parallel,
            output_dir: PathBuf::from(output_dir),
        })
    }

    /// Validates the integration domain, returning the sweep to run
    pub fn sweep(&self) -> Result<Sweep, InputError> {
        Sweep::new(self.kernel, self.electrons, self.energies, &self.grid, self.policy)
            .map_err(|e| InputError::invalid("integration", &e.to_string()))
    }
}

pub(super) fn electron_spectrum(norm: f64, power: f64, gamma_max: f64) -> Result<ElectronSpectrum, InputError> {
    ElectronSpectrum::new(norm, power, gamma_max)
        .ok_or_else(|| InputError::invalid(
            "electrons",
            &format!("N0 = {:e}, p = {:e}, rmax = {:e} must be finite, with rmax > 0", norm, power, gamma_max)
        ))
}

pub(super) fn energy_range(lower: f64, upper: f64) -> Result<EnergyRange, InputError> {
    EnergyRange::new(lower, upper)
        .ok_or_else(|| InputError::invalid(
            "spectrum",
            &format!("energy range [{:e}, {:e}] eV must satisfy 0 < lower < upper", lower, upper)
        ))
}
