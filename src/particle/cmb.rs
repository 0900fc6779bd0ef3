//! The cosmic microwave background as a blackbody photon gas

use std::f64::consts;

use crate::constants::*;

/// Number density of CMB photons per unit energy, units of cm^-3 eV^-1,
/// at the photon energy `energy` (in eV).
///
/// Zero for non-positive energies, and for energies so far into the Wien
/// tail that the Boltzmann factor overflows.
pub fn flux(energy: f64) -> f64 {
    flux_at_temperature(energy, CMB_TEMPERATURE)
}

/// Blackbody photon number density per unit energy, at temperature `temperature` (in K)
pub fn flux_at_temperature(energy: f64, temperature: f64) -> f64 {
    if !(energy > 0.0) || !energy.is_finite() || !(temperature > 0.0) {
        return 0.0;
    }

    let hc = PLANCK_CONST * LIGHT_SPEED;
    let occupation = (energy / (BOLTZMANN_CONST * temperature)).exp_m1();
    let density = energy * energy / occupation / (consts::PI.powi(2) * hc.powi(3));

    if density.is_finite() {
        density
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanishes_outside_domain() {
        assert_eq!(flux(0.0), 0.0);
        assert_eq!(flux(-1.0e-3), 0.0);
        assert_eq!(flux(f64::NAN), 0.0);
        assert_eq!(flux(f64::INFINITY), 0.0);
        // Boltzmann factor overflows
        assert_eq!(flux(1.0), 0.0);
    }

    #[test]
    fn vanishes_at_low_energy() {
        // Rayleigh-Jeans tail: density ~ energy kT / (pi hc)^3
        let mut last = f64::INFINITY;
        for n in 4..20 {
            let energy = 10f64.powi(-n);
            let density = flux(energy);
            println!("energy = {:.3e} eV, density = {:.6e}", energy, density);
            assert!(density > 0.0);
            assert!(density < last);
            last = density;
        }
        assert!(flux(1.0e-30) < 1.0e-12 * flux(1.0e-4));
    }

    #[test]
    fn rayleigh_jeans_limit() {
        let energy = 1.0e-9;
        let kt = BOLTZMANN_CONST * CMB_TEMPERATURE;
        let hc = PLANCK_CONST * LIGHT_SPEED;
        let target = energy * kt / (consts::PI.powi(2) * hc.powi(3));
        let error = ((flux(energy) - target) / target).abs();
        println!("flux({:.3e}) = {:.6e}, target = {:.6e}, error = {:.3e}", energy, flux(energy), target, error);
        assert!(error < 1.0e-4);
    }

    #[test]
    fn unimodal() {
        let samples: Vec<(f64, f64)> = (0..=360)
            .map(|i| {
                let energy = 10f64.powf(-10.0 + 0.025 * (i as f64));
                (energy, flux(energy))
            })
            .collect();

        assert!(samples.iter().all(|(_, f)| *f > 0.0 && f.is_finite()));

        let peak = samples.iter()
            .enumerate()
            .fold(0, |best, (i, s)| if s.1 > samples[best].1 { i } else { best });

        let peak_energy = samples[peak].0;
        println!("peak of CMB number spectrum at {:.3e} eV", peak_energy);
        // x^2 / (e^x - 1) peaks at x = 1.5936
        let target = 1.5936 * BOLTZMANN_CONST * CMB_TEMPERATURE;
        assert!((peak_energy / target).log10().abs() < 0.025);

        assert!(samples[..=peak].windows(2).all(|w| w[1].1 > w[0].1));
        assert!(samples[peak..].windows(2).all(|w| w[1].1 < w[0].1));
    }
}
