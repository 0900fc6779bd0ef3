//! Inverse Compton spectrum in the relativistic Thomson limit

use std::f64::consts;

use num_traits::Float;

use crate::constants::*;
use super::{Kernel, lorentz_beta};

/// The exact spectrum for Thomson scattering of isotropic photons
/// by electrons of arbitrary speed, eqs. 23a and 23b of
/// Fargion, Konoplich & Salis (1997), astro-ph/9606126.
///
/// Neglects recoil, so it is valid for `einit * gamma << m c^2`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Thomson;

impl Kernel for Thomson {
    fn differential_flux(&self, efin: f64, einit: f64, gamma: f64) -> f64 {
        differential_flux(efin, einit, gamma)
    }

    fn min_scattered_energy(&self, einit: f64, gamma: f64) -> f64 {
        min_scattered_energy(einit, gamma)
    }

    fn max_scattered_energy(&self, einit: f64, gamma: f64) -> f64 {
        max_scattered_energy(einit, gamma)
    }
}

#[inline]
fn lit<F: Float>(x: f64) -> F {
    F::from(x).unwrap_or_else(F::nan)
}

/// Returns `(1 + beta, 1 - beta)`, evaluating the latter
/// without cancellation for `beta -> 1`.
#[inline]
fn beta_pair<F: Float>(gamma: F, beta: F) -> (F, F) {
    let opb = F::one() + beta;
    (opb, F::one() / (gamma * gamma * opb))
}

/// Smallest scattered energy, reached by a photon that catches up
/// with the electron from behind and leaves in the opposite direction.
/// Equal to `einit` if `gamma` is not a valid Lorentz factor.
pub fn min_scattered_energy<F: Float>(einit: F, gamma: F) -> F {
    match lorentz_beta(gamma) {
        Some(beta) => {
            let (opb, omb) = beta_pair(gamma, beta);
            einit * omb / opb
        },
        None => einit,
    }
}

/// Largest scattered energy, reached in a head-on collision
/// with the photon reflected forwards.
/// Equal to `einit` if `gamma` is not a valid Lorentz factor.
pub fn max_scattered_energy<F: Float>(einit: F, gamma: F) -> F {
    match lorentz_beta(gamma) {
        Some(beta) => {
            let (opb, omb) = beta_pair(gamma, beta);
            einit * opb / omb
        },
        None => einit,
    }
}

/// Differential flux, in units of cm^3 s^-1 eV^-1, at any floating-point width.
pub fn differential_flux<F: Float>(efin: F, einit: F, gamma: F) -> F {
    let zero = F::zero();
    let one = F::one();

    if !efin.is_finite() || !einit.is_finite() || !gamma.is_finite() {
        return zero;
    }

    if gamma <= one || einit <= zero {
        return zero;
    }

    let beta = match lorentz_beta(gamma) {
        Some(beta) => beta,
        None => return zero,
    };

    let (opb, omb) = beta_pair(gamma, beta);
    let min = einit * omb / opb;
    let max = einit * opb / omb;

    if efin < min || efin > max {
        return zero;
    }

    let two: F = lit(2.0);
    let beta2 = beta * beta;
    let beta6 = beta2 * beta2 * beta2;
    let gamma2 = gamma * gamma;
    let gamma4 = gamma2 * gamma2;

    let a = beta * (beta2 + lit(3.0));
    let b = (lit::<F>(9.0) - lit::<F>(4.0) * beta2) / gamma2;
    let ratio = efin / einit;
    let log_coeff = (lit::<F>(3.0) - beta2) * (one + ratio) * (two / gamma2);
    let back = einit / (gamma4 * efin);
    let forward = efin * efin / (gamma4 * einit * einit);

    let prefactor = lit::<F>(consts::PI * CLASSICAL_ELECTRON_RADIUS.powi(2) * LIGHT_SPEED)
        / (lit::<F>(4.0) * beta6 * gamma2 * einit);

    let bracket = if efin < einit {
        // energy loss
        (a + b) * opb * ratio
            + (a - b) * omb
            - (efin * opb / (einit * omb)).ln() * log_coeff
            - back
            + forward
    } else {
        // energy gain
        (a + b) * opb
            + (a - b) * omb * ratio
            - (einit * opb / (efin * omb)).ln() * log_coeff
            + back
            - forward
    };

    bracket * prefactor
}
