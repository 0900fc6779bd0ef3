//! Trapezoidal-rule integration in one, two and three dimensions
//!
//! The two- and three-dimensional rules are "two-corner" rules: each cell
//! contributes the average of the integrand at its lower-left and
//! upper-right corners, multiplied by the cell volume. They are not
//! bilinear averages over all corners.
//!
//! The loop bounds differ between the rules and are part of their
//! observable behaviour:
//! * `integrate_2d` walks each axis in log space while the accumulated
//!   coordinate is `<=` the upper bound. Depending on how the repeated
//!   addition of the log step rounds, the final cell may or may not be
//!   visited, and if it is, it extends past the upper bound.
//! * `integrate_3d` walks each axis in linear space, with `<` on the x axis
//!   but `<=` on the y and z axes.

use super::{IntegrationError, IntegrationRange};

/// Integrates `f` over `range` with the composite trapezoidal rule.
#[allow(unused)]
pub fn integrate_1d<F>(f: F, range: &IntegrationRange) -> f64
where F: Fn(f64) -> f64 {
    let dx = range.step_size();
    let mut x = range.lower();
    let mut integrated = 0.0;

    for _i in 0..range.steps() {
        integrated += (f(x) + f(x + dx)) * dx * 0.5;
        x += dx;
    }

    integrated
}

/// Integrates `f(x, y)` over the rectangle `range_x` by `range_y`,
/// using cells of equal width in `log10(x)` and `log10(y)`.
///
/// Fails if either range has a bound that is not strictly positive.
pub fn integrate_2d<F>(f: F, range_x: &IntegrationRange, range_y: &IntegrationRange) -> Result<f64, IntegrationError>
where F: Fn(f64, f64) -> f64 {
    let (logx_lower, logx_upper) = range_x.log10_bounds()?;
    let (logy_lower, logy_upper) = range_y.log10_bounds()?;

    let dlogx = (logx_upper - logx_lower) / (range_x.steps() as f64);
    let dlogy = (logy_upper - logy_lower) / (range_y.steps() as f64);

    let mut integrated = 0.0;
    let mut logx = logx_lower;

    while logx <= logx_upper {
        let x = 10f64.powf(logx);
        let dx = 10f64.powf(logx + dlogx) - x;

        let mut sum = 0.0;
        let mut logy = logy_lower;

        while logy <= logy_upper {
            let y = 10f64.powf(logy);
            let dy = 10f64.powf(logy + dlogy) - y;
            sum += (f(x, y) + f(x + dx, y + dy)) * dx * dy * 0.5;
            logy += dlogy;
        }

        integrated += sum;
        logx += dlogx;
    }

    Ok(integrated)
}

/// Integrates `f(x, y, z)` over the box `range_x` by `range_y` by `range_z`
/// on a linear grid.
#[allow(unused)]
pub fn integrate_3d<F>(f: F, range_x: &IntegrationRange, range_y: &IntegrationRange, range_z: &IntegrationRange) -> f64
where F: Fn(f64, f64, f64) -> f64 {
    let dx = range_x.step_size();
    let dy = range_y.step_size();
    let dz = range_z.step_size();

    let mut integrated = 0.0;
    let mut x = range_x.lower();

    while x < range_x.upper() {
        let mut sum_y = 0.0;
        let mut y = range_y.lower();

        while y <= range_y.upper() {
            let mut sum_z = 0.0;
            let mut z = range_z.lower();

            while z <= range_z.upper() {
                sum_z += (f(x, y, z) + f(x + dx, y + dy, z + dz)) * dx * dy * dz * 0.5;
                z += dz;
            }

            sum_y += sum_z;
            y += dy;
        }

        integrated += sum_y;
        x += dx;
    }

    integrated
}
