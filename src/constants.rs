//! Physical constants, in the cgs-eV system used throughout

/// Speed of light in vacuum, units of cm/s
pub const LIGHT_SPEED: f64 = 2.99792458e10;
/// Boltzmann constant, units of eV/K
pub const BOLTZMANN_CONST: f64 = 8.614e-5;
/// Reduced Planck constant, units of eV s
pub const PLANCK_CONST: f64 = 6.586e-16;
/// Classical electron radius, units of cm
pub const CLASSICAL_ELECTRON_RADIUS: f64 = 2.8179402894e-13;
/// Electron rest energy m c^2, units of eV
pub const ELECTRON_REST_ENERGY: f64 = 0.51099892601e6;
/// Temperature of the cosmic microwave background, units of K
pub const CMB_TEMPERATURE: f64 = 2.72;
