//! Power-law electron populations with an exponential cutoff

/// Electron flux per unit Lorentz factor,
/// `norm * gamma^(-power) * exp(-gamma / gamma_max)`.
///
/// Zero unless both `gamma` and `gamma_max` are positive.
pub fn flux(gamma: f64, norm: f64, power: f64, gamma_max: f64) -> f64 {
    if !(gamma > 0.0) || !(gamma_max > 0.0) {
        return 0.0;
    }
    norm * gamma.powf(-power) * (-gamma / gamma_max).exp()
}

/// Parameters of the electron population, fixed for a run
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElectronSpectrum {
    norm: f64,
    power: f64,
    gamma_max: f64,
}

impl ElectronSpectrum {
    /// Returns `None` if any parameter is not finite, or if
    /// the cutoff Lorentz factor is not positive.
    pub fn new(norm: f64, power: f64, gamma_max: f64) -> Option<Self> {
        if !norm.is_finite() || !power.is_finite() || !gamma_max.is_finite() {
            None
        } else if gamma_max <= 0.0 {
            None
        } else {
            Some(Self { norm, power, gamma_max })
        }
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn gamma_max(&self) -> f64 {
        self.gamma_max
    }

    pub fn flux(&self, gamma: f64) -> f64 {
        flux(gamma, self.norm, self.power, self.gamma_max)
    }
}
