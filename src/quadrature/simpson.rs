//! Composite Simpson's rule

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::IntegrationRange;

/// Integrates `f` over `range` with Simpson's rule applied to each
/// of the `range.steps()` cells, weighting the cell start, midpoint
/// and end as 1:4:1.
///
/// The cells are independent, so with the `parallel` feature they are
/// summed as a rayon reduction. The order of the additions, and therefore
/// the last few bits of the result, then depends on the scheduling.
#[allow(unused)]
pub fn integrate_simpson_1d<F>(f: F, range: &IntegrationRange) -> f64
where F: Fn(f64) -> f64 + Sync {
    let dx = range.step_size();
    let lower = range.lower();

    let cell = |i: usize| -> f64 {
        let x = lower + dx * (i as f64);
        (f(x) + 4.0 * f(x + 0.5 * dx) + f(x + dx)) * dx / 6.0
    };

    #[cfg(feature = "parallel")]
    let integrated: f64 = (0..range.steps()).into_par_iter().map(cell).sum();

    #[cfg(not(feature = "parallel"))]
    let integrated: f64 = (0..range.steps()).map(cell).sum();

    integrated
}
