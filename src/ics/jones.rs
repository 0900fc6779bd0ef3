//! Inverse Compton spectrum including the Klein-Nishina correction

use std::f64::consts;

use crate::constants::*;
use super::Kernel;

/// The spectrum derived by Jones (1968), as given in eqs. 8 and 9
/// of Blumenthal & Gould, Rev. Mod. Phys. 42, 237 (1970).
///
/// Valid for `gamma >> 1`, at any `einit * gamma / (m c^2)`.
/// Down-scattering is treated in the head-on approximation.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Jones;

impl Kernel for Jones {
    fn differential_flux(&self, efin: f64, einit: f64, gamma: f64) -> f64 {
        if !efin.is_finite() || !einit.is_finite() || !gamma.is_finite() {
            return 0.0;
        }

        if gamma < 1.0 || einit <= 0.0 {
            return 0.0;
        }

        let gamma2 = gamma * gamma;
        let min = self.min_scattered_energy(einit, gamma);
        let max = self.max_scattered_energy(einit, gamma);

        if efin >= min && efin < einit {
            // energy loss
            consts::PI * CLASSICAL_ELECTRON_RADIUS.powi(2) * LIGHT_SPEED
                * (4.0 * gamma2 * efin / einit - 1.0)
                / (2.0 * gamma2 * gamma2 * einit)
        } else if efin >= einit && efin < max {
            // energy gain
            let q = efin / ((1.0 - efin / (gamma * ELECTRON_REST_ENERGY)) * 4.0 * einit * gamma2);
            let gq = 4.0 * einit * gamma * q / ELECTRON_REST_ENERGY;
            let f = 2.0 * q * q.ln()
                + (1.0 + 2.0 * q) * (1.0 - q)
                + 0.5 * gq * gq * (1.0 - q) / (1.0 + gq);
            f * 2.0 * consts::PI * CLASSICAL_ELECTRON_RADIUS.powi(2) * LIGHT_SPEED / (gamma2 * einit)
        } else {
            0.0
        }
    }

    fn min_scattered_energy(&self, einit: f64, gamma: f64) -> f64 {
        einit / (4.0 * gamma * gamma)
    }

    fn max_scattered_energy(&self, einit: f64, gamma: f64) -> f64 {
        4.0 * einit * gamma * gamma / (1.0 + 4.0 * gamma * einit / ELECTRON_REST_ENERGY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value() {
        let value = Jones.differential_flux(1.0e6, 1.0, 1000.0);
        let target = 6.4538787918269266e-21;
        let error = ((value - target) / target).abs();
        println!("jones(1 MeV, 1 eV, 1000) = {:.16e}, target = {:.16e}, error = {:.3e}", value, target, error);
        assert!(error < 1.0e-9);
    }

    #[test]
    fn branch_edges() {
        for &(einit, gamma) in &[(1.0e-3, 10.0), (1.0, 100.0), (1.0e-4, 2.0)] {
            let max = Jones.max_scattered_energy(einit, gamma);
            let min = Jones.min_scattered_energy(einit, gamma);
            let at_einit = Jones.differential_flux(einit, einit, gamma);
            let below_max = Jones.differential_flux(max * (1.0 - 1.0e-12), einit, gamma);
            let at_min = Jones.differential_flux(min, einit, gamma);
            println!(
                "einit = {:.3e}, gamma = {}: flux(min) = {:.6e}, flux(einit) = {:.6e}, flux(max-) = {:.6e}",
                einit, gamma, at_min, at_einit, below_max,
            );
            // upper edge is excluded
            assert_eq!(Jones.differential_flux(max, einit, gamma), 0.0);
            assert!(at_einit > 0.0);
            // the spectrum vanishes continuously at both edges
            assert!(below_max.abs() < 1.0e-6 * at_einit);
            assert!(at_min.abs() < 1.0e-12 * at_einit);
        }
    }

    #[test]
    fn electron_at_rest() {
        // finite at gamma = 1, with min < einit < max
        let einit = 1.0e-3;
        let min = Jones.min_scattered_energy(einit, 1.0);
        let max = Jones.max_scattered_energy(einit, 1.0);
        let loss = Jones.differential_flux(0.5 * einit, einit, 1.0);
        let gain = Jones.differential_flux(einit, einit, 1.0);
        println!("gamma = 1: min = {:.6e}, max = {:.6e}, flux(einit/2) = {:.6e}, flux(einit) = {:.6e}", min, max, loss, gain);
        assert!(min < einit && einit < max);
        assert!(loss > 0.0 && loss.is_finite());
        assert!(gain > 0.0 && gain.is_finite());
        assert_eq!(Jones.differential_flux(einit, einit, 1.0 - 1.0e-12), 0.0);
    }

    #[test]
    fn continuous_at_einit() {
        // loss and gain branches meet at efin = einit when
        // einit gamma / (m c^2) is negligible
        let einit = 1.0e-3;
        let gamma = 100.0;
        let below = Jones.differential_flux(einit * (1.0 - 1.0e-9), einit, gamma);
        let above = Jones.differential_flux(einit, einit, gamma);
        let error = ((below - above) / above).abs();
        println!("flux(einit-) = {:.6e}, flux(einit) = {:.6e}, diff = {:.3e}", below, above, error);
        assert!(error < 1.0e-3);
    }
}
