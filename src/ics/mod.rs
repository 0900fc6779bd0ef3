//! Differential spectra for the inverse Compton scattering
//! of isotropic photons by relativistic electrons
//!
//! Two approximations are provided: the full Klein-Nishina result
//! of Jones (1968), in the form given by Blumenthal & Gould (1970),
//! and the relativistic Thomson limit. Both are expressed per unit
//! photon number density, so the result must be weighted by the
//! photon and electron spectra and integrated over both.

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use num_traits::Float;

mod jones;
mod thomson;

pub use self::jones::Jones;
pub use self::thomson::Thomson;

/// Kinematics and spectrum of photons with energy `einit` (in eV),
/// scattered by electrons with Lorentz factor `gamma` to energy `efin`.
#[enum_dispatch]
pub trait Kernel {
    /// Number of photons scattered into unit energy interval around `efin`,
    /// per unit time and per unit incident photon density,
    /// units of cm^3 s^-1 eV^-1.
    ///
    /// Zero outside the kinematically allowed window, or if `gamma < 1`
    /// or `einit <= 0`. The Thomson kernel also vanishes at `gamma = 1`,
    /// where its prefactor has `beta = 0`.
    fn differential_flux(&self, efin: f64, einit: f64, gamma: f64) -> f64;

    /// The smallest energy the photon can be scattered to
    fn min_scattered_energy(&self, einit: f64, gamma: f64) -> f64;

    /// The largest energy the photon can be scattered to
    fn max_scattered_energy(&self, einit: f64, gamma: f64) -> f64;
}

/// Selects which approximation to the scattering spectrum is used
#[enum_dispatch(Kernel)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum KernelMode {
    Jones,
    Thomson,
}

impl KernelMode {
    /// The code used to select this mode at the console prompt
    #[allow(unused)]
    pub fn code(&self) -> u32 {
        match self {
            KernelMode::Jones(_) => 1,
            KernelMode::Thomson(_) => 2,
        }
    }
}

impl fmt::Display for KernelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KernelMode::Jones(_) => write!(f, "jones"),
            KernelMode::Thomson(_) => write!(f, "thomson"),
        }
    }
}

/// Returned when a string names neither scattering kernel
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownKernel(pub String);

impl fmt::Display for UnknownKernel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' is not a scattering kernel (expected 'jones'/1 or 'thomson'/2)", self.0)
    }
}

impl std::error::Error for UnknownKernel {}

impl FromStr for KernelMode {
    type Err = UnknownKernel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jones" | "1" => Ok(Jones.into()),
            "thomson" | "2" => Ok(Thomson.into()),
            _ => Err(UnknownKernel(s.to_owned())),
        }
    }
}

/// Returns the speed, in units of c, of a particle with Lorentz factor `gamma`,
/// or `None` if `gamma` is less than one or not finite.
pub fn lorentz_beta<F: Float>(gamma: F) -> Option<F> {
    if !gamma.is_finite() || gamma < F::one() {
        None
    } else {
        Some((gamma + F::one()).sqrt() * (gamma - F::one()).sqrt() / gamma)
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand_xoshiro::Xoshiro256StarStar;
    use super::*;

    fn both() -> [KernelMode; 2] {
        [Jones.into(), Thomson.into()]
    }

    #[test]
    fn parse_modes() {
        assert_eq!("jones".parse::<KernelMode>(), Ok(KernelMode::Jones(Jones)));
        assert_eq!("Thomson".parse::<KernelMode>(), Ok(KernelMode::Thomson(Thomson)));
        assert_eq!(" 1\n".parse::<KernelMode>(), Ok(KernelMode::Jones(Jones)));
        assert_eq!("2".parse::<KernelMode>(), Ok(KernelMode::Thomson(Thomson)));
        assert!("3".parse::<KernelMode>().is_err());
        assert!("klein-nishina".parse::<KernelMode>().is_err());

        for mode in &both() {
            let name = mode.to_string();
            assert_eq!(name.parse::<KernelMode>().as_ref(), Ok(mode));
            assert_eq!(mode.code().to_string().parse::<KernelMode>().as_ref(), Ok(mode));
        }
    }

    #[test]
    fn beta() {
        assert_eq!(lorentz_beta(0.5), None);
        assert_eq!(lorentz_beta(f64::NAN), None);
        assert_eq!(lorentz_beta(f64::INFINITY), None);
        assert_eq!(lorentz_beta(1.0), Some(0.0));

        let gamma: f64 = 1.25;
        let target = (1.0 - 1.0 / gamma.powi(2)).sqrt();
        let beta = lorentz_beta(gamma).unwrap();
        println!("beta({}) = {:.16e}, target = {:.16e}", gamma, beta, target);
        assert!((beta - target).abs() < 1.0e-15);

        let beta = lorentz_beta(1.0e8_f64).unwrap();
        assert!(beta < 1.0 && beta > 1.0 - 1.0e-15);
    }

    #[test]
    fn kinematic_bounds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        for _i in 0..10_000 {
            let einit = 10f64.powf(-15.0 + 19.0 * rng.gen::<f64>());
            let gamma = 1.0 + 10f64.powf(-3.0 + 10.0 * rng.gen::<f64>());
            for mode in &both() {
                let min = mode.min_scattered_energy(einit, gamma);
                let max = mode.max_scattered_energy(einit, gamma);
                assert!(
                    min < einit && einit < max,
                    "{}: einit = {:e}, gamma = {:e} gives [{:e}, {:e}]", mode, einit, gamma, min, max,
                );
            }
        }
    }

    #[test]
    fn zero_outside_bounds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        for _i in 0..1000 {
            let einit = 10f64.powf(-8.0 + 8.0 * rng.gen::<f64>());
            let gamma = 1.0 + 10f64.powf(-2.0 + 7.0 * rng.gen::<f64>());
            let frac = 1.5 + 10.0 * rng.gen::<f64>();
            for mode in &both() {
                let min = mode.min_scattered_energy(einit, gamma);
                let max = mode.max_scattered_energy(einit, gamma);
                assert_eq!(mode.differential_flux(min / frac, einit, gamma), 0.0);
                assert_eq!(mode.differential_flux(max * frac, einit, gamma), 0.0);
                assert_eq!(mode.differential_flux(0.0, einit, gamma), 0.0);
                assert_eq!(mode.differential_flux(-einit, einit, gamma), 0.0);
            }
        }
    }

    #[test]
    fn zero_for_invalid_inputs() {
        for mode in &both() {
            for gamma in &[-2.0, 0.0, 0.5, 0.999] {
                assert_eq!(mode.differential_flux(1.0e-3, 1.0e-3, *gamma), 0.0);
            }
            for einit in &[0.0, -1.0e-3] {
                assert_eq!(mode.differential_flux(1.0e-3, *einit, 100.0), 0.0);
            }
            assert_eq!(mode.differential_flux(f64::NAN, 1.0e-3, 100.0), 0.0);
            assert_eq!(mode.differential_flux(1.0e-3, f64::NAN, 100.0), 0.0);
            assert_eq!(mode.differential_flux(1.0e-3, 1.0e-3, f64::NAN), 0.0);
            assert_eq!(mode.differential_flux(1.0e-3, 1.0e-3, f64::INFINITY), 0.0);
        }
        assert_eq!(Thomson.differential_flux(1.0e-3, 1.0e-3, 1.0), 0.0);
        assert!(Jones.differential_flux(1.0e-3, 1.0e-3, 1.0) > 0.0);
    }

    #[test]
    fn approximations_agree_in_thomson_regime() {
        // einit * gamma << m c^2, so Klein-Nishina corrections are negligible
        let einit = 1.0e-3;
        let gamma = 1.0e3;
        let jones = Jones;
        let thomson = Thomson;
        let max = jones.max_scattered_energy(einit, gamma);
        for frac in &[0.01, 0.1, 0.3, 0.5, 0.7] {
            let efin = frac * max;
            let j = jones.differential_flux(efin, einit, gamma);
            let t = thomson.differential_flux(efin, einit, gamma);
            let error = ((j - t) / t).abs();
            println!("efin = {:.3e}: jones = {:.6e}, thomson = {:.6e}, diff = {:.3e}", efin, j, t, error);
            assert!(error < 1.0e-2);
        }
    }
}
