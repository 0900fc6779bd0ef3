//! Number formatting compatible with C's `printf`

use std::fmt;

use crate::spectrum::SpectrumSample;

/// Prints a float as `printf("%.8E")` does: eight decimal places,
/// and an exponent with an explicit sign and at least two digits,
/// e.g. `1.00000000E-03`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Exponential(pub f64);

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let x = self.0;

        if x.is_nan() {
            return write!(f, "NAN");
        } else if x.is_infinite() {
            return write!(f, "{}INF", if x < 0.0 {"-"} else {""});
        }

        let s = format!("{:.8E}", x);
        let (mantissa, exponent) = s.split_at(s.find('E').unwrap_or(s.len()));
        let exponent: i32 = exponent.trim_start_matches('E').parse().unwrap_or(0);
        let sign = if exponent < 0 {'-'} else {'+'};
        write!(f, "{}E{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// A line of the spectrum log: energy and flux
pub struct LogLine(pub SpectrumSample);

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", Exponential(self.0.energy), Exponential(self.0.flux))
    }
}

/// A progress line for the console, `[index/total] energy flux`,
/// with `index` counted from zero but printed from one.
pub struct ProgressLine {
    pub index: usize,
    pub total: usize,
    pub sample: SpectrumSample,
}

impl fmt::Display for ProgressLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:03}/{:03}] {}", self.index + 1, self.total, LogLine(self.sample))
    }
}
