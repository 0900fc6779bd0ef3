//! Interactive entry of the run parameters, used when no input file is given

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::ics::KernelMode;
use super::{InputError, RunParams};
use super::params::{electron_spectrum, energy_range};

/// Reads whitespace-separated values from `input`, writing the
/// prompts for each to `output`.
pub struct Prompt<R: BufRead, W: Write> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, pending: VecDeque::new() }
    }

    fn say(&mut self, text: &str) -> Result<(), InputError> {
        self.output.write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|_| InputError::invalid("console", "could not write prompt"))
    }

    /// Returns the next token, reading more lines as necessary
    fn token(&mut self, name: &str) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let n = self.input.read_line(&mut line)
                .map_err(|_| InputError::invalid(name, "could not read from console"))?;

            if n == 0 {
                return Err(InputError::invalid(name, "unexpected end of input"));
            }

            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn number(&mut self, name: &str) -> Result<f64, InputError> {
        let token = self.token(name)?;
        token.parse::<f64>()
            .map_err(|_| InputError::conversion(name, &token))
    }

    pub fn kernel_mode(&mut self) -> Result<KernelMode, InputError> {
        self.say("Enter the ICS calculation mode (1 or 2).\n")?;
        self.say("  1 : ICS flux on CMB and non-thermal electron using Jones Approximation\n")?;
        self.say("  2 : ICS flux on CMB and non-thermal electron using Thomson Approximation\n")?;
        self.say("[User's Operation] Mode = ")?;
        let token = self.token("mode")?;
        self.say("\n")?;

        token.parse::<KernelMode>()
            .map_err(|_| InputError::invalid("mode", "select 1 (Jones) or 2 (Thomson)"))
    }

    /// Returns `(N0, p, rmax)`
    pub fn electron_spectrum(&mut self) -> Result<(f64, f64, f64), InputError> {
        self.say("Enter the electron spectrum factors.\n")?;
        self.say("Where the spectrum equation is E(r) = N0 r^(-p) exp(- r / rmax),\n")?;
        self.say("  r    : Lorentz factor\n")?;
        self.say("  N0   : Normalization factor\n")?;
        self.say("  p    : Power\n")?;
        self.say("  rmax : Maximum Lorentz factor\n")?;

        self.say("[User's Operation] N0   = ")?;
        let norm = self.number("N0")?;
        self.say("[User's Operation] p    = ")?;
        let power = self.number("p")?;
        self.say("[User's Operation] rmax = ")?;
        let gamma_max = self.number("rmax")?;
        self.say("\n")?;

        Ok((norm, power, gamma_max))
    }

    /// Returns `(lower, upper)`, in eV
    pub fn energy_range(&mut self) -> Result<(f64, f64), InputError> {
        self.say("Enter the energy range to calculate the ICS Flux [eV]\n")?;
        self.say("[User's Operation] Lower= ")?;
        let lower = self.number("Lower")?;
        self.say("[User's Operation] Upper= ")?;
        let upper = self.number("Upper")?;
        self.say("\n")?;

        Ok((lower, upper))
    }

    /// Asks for the kernel, electron spectrum and energy range in turn
    pub fn run_params(&mut self) -> Result<RunParams, InputError> {
        let kernel = self.kernel_mode()?;
        let (norm, power, gamma_max) = self.electron_spectrum()?;
        let electrons = electron_spectrum(norm, power, gamma_max)?;
        let (lower, upper) = self.energy_range()?;
        let energies = energy_range(lower, upper)?;
        Ok(RunParams::new(kernel, electrons, energies))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::ics::Jones;
    use crate::input::InputErrorKind;
    use super::*;

    #[test]
    fn console_session() {
        let input = Cursor::new("1\n1.0 2.0\n1.0E+04\n1e-3\n1e3\n");
        let mut output: Vec<u8> = Vec::new();
        let params = Prompt::new(input, &mut output).run_params().unwrap();

        assert_eq!(params.kernel, KernelMode::Jones(Jones));
        assert_eq!(params.electrons.norm(), 1.0);
        assert_eq!(params.electrons.power(), 2.0);
        assert_eq!(params.electrons.gamma_max(), 1.0e4);
        assert_eq!(params.energies.lower(), 1.0e-3);
        assert_eq!(params.energies.upper(), 1.0e3);
        assert!(!params.parallel);

        let transcript = String::from_utf8(output).unwrap();
        println!("{}", transcript);
        assert!(transcript.starts_with("Enter the ICS calculation mode (1 or 2).\n"));
        assert!(transcript.contains("[User's Operation] Mode = \n"));
        assert!(transcript.contains("[User's Operation] rmax = "));
        assert!(transcript.ends_with("[User's Operation] Lower= [User's Operation] Upper= \n"));
    }

    #[test]
    fn rejects_bad_mode() {
        let input = Cursor::new("3\n");
        let err = Prompt::new(input, Vec::new()).kernel_mode().unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Invalid);
        assert_eq!(err.path(), "mode");
    }

    #[test]
    fn rejects_bad_numbers() {
        let input = Cursor::new("2\nfoo 2.0 1e4\n");
        let err = Prompt::new(input, Vec::new()).run_params().unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Conversion);

        let input = Cursor::new("2\n1.0 2.0 -1e4\n1e-3 1e3\n");
        let err = Prompt::new(input, Vec::new()).run_params().unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Invalid);
        assert_eq!(err.path(), "electrons");

        let input = Cursor::new("2\n1.0 2.0 1e4\n1e3 1e-3\n");
        let err = Prompt::new(input, Vec::new()).run_params().unwrap_err();
        assert_eq!(err.path(), "spectrum");

        // input ends early
        let input = Cursor::new("2\n1.0 2.0\n");
        let err = Prompt::new(input, Vec::new()).run_params().unwrap_err();
        assert_eq!(err.path(), "rmax");
    }
}
