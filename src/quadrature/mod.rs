//! Fixed-grid numerical quadrature
//!
//! All the integrators take their integrand by reference, as any closure
//! of the appropriate arity, and one validated `IntegrationRange` per axis.

mod range;
mod trapezoidal;
mod simpson;

pub use range::*;
pub use trapezoidal::*;
pub use simpson::*;
