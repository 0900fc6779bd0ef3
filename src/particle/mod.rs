//! Spectral flux models for the particles taking part in the scattering:
//! the cosmic microwave background photons and the non-thermal electrons
//! that upscatter them.

pub mod cmb;
pub mod electron;

pub use electron::ElectronSpectrum;
