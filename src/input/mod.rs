//! Parse the run parameters, from an input file or the console

use std::path::Path;
use yaml_rust::{YamlLoader, yaml::Yaml};
use evalexpr::*;

use crate::constants::*;

mod error;
mod types;
mod timing;
mod params;
mod prompt;

pub use error::*;
use types::*;
pub use timing::*;
pub use params::*;
pub use prompt::*;

/// Represents the input configuration, which defines values
/// for the run parameters, and any named constants used
/// to express them.
pub struct Config {
    input: Yaml,
    ctx: HashMapContext,
}

impl Config {
    /// Loads a configuration file.
    /// Fails if the file cannot be opened or if it is not
    /// YAML-formatted.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let name = path.display().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|_| InputError::file(&name))?;
        Self::from_string(&contents)
            .map_err(|_| InputError::file(&name))
    }

    /// Loads a YAML configuration from a string.
    /// Fails if the string is not formatted correctly.
    pub fn from_string(s: &str) -> Result<Self, InputError> {
        let input = YamlLoader::load_from_str(s)
            .map_err(|_| InputError::file("<string>"))?;
        let input = input.first()
            .ok_or_else(|| InputError::file("<string>"))?;

        Ok(Config {
            input: input.clone(),
            ctx: HashMapContext::new(),
        })
    }

    /// Loads automatic values for constants, energy units
    /// and elementary functions.
    /// Also loads and evaluates mathematical expressions
    /// that are given in the specified `section`.
    pub fn with_context(&mut self, section: &str) -> Result<&mut Self, InputError> {
        use helper::context_function;

        // Energies are in eV throughout
        let mut ctx = context_map! {
            "pi" => std::f64::consts::PI,
            "me" => ELECTRON_REST_ENERGY,
            "kB" => BOLTZMANN_CONST,
            "Tcmb" => CMB_TEMPERATURE,
            "meV" => 1.0e-3,
            "eV" => 1.0,
            "keV" => 1.0e3,
            "MeV" => 1.0e6,
            "GeV" => 1.0e9,
            "TeV" => 1.0e12,
        }.map_err(|_| InputError::conversion(section, "default constants"))?;

        context_function!(ctx, section, "sqrt",  f64::sqrt);
        context_function!(ctx, section, "abs",   f64::abs);
        context_function!(ctx, section, "exp",   f64::exp);
        context_function!(ctx, section, "ln",    f64::ln);
        context_function!(ctx, section, "log10", f64::log10);

        self.ctx = ctx;

        // Read in from 'constants' block if it exists
        let block = match self.input[section].as_hash() {
            Some(block) => block,
            None => return Ok(self),
        };

        for (a, b) in block {
            let key = match a {
                Yaml::String(k) => k,
                _ => continue,
            };

            // grab the value, if possible
            let value = match b {
                Yaml::Integer(i) => Some(*i as f64),
                Yaml::Real(s) => s.parse::<f64>().ok(),
                Yaml::String(s) => eval_number_with_context(s, &self.ctx).ok(),
                _ => None,
            };

            // insert it into the context so it's available for the next read
            match value {
                Some(v) => self.ctx.set_value(key.clone(), Value::from(v))
                    .map_err(|_| InputError::conversion(section, key))?,
                None => return Err(InputError::conversion(section, key)),
            }
        }

        Ok(self)
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse the value as the specified type.
    /// The path to the key-value pair is specified by a string of colon-separated
    /// sections, e.g. `'section:subsection:key'`.
    pub fn read<T, S>(&self, path: S) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let address: Vec<&str> = path.split(':').collect();
        let value = address.iter()
            .try_fold(&self.input, |y, s| {
                if y[*s].is_badvalue() {
                    Err(InputError::location(path, s))
                } else {
                    Ok(&y[*s])
                }
            })?;
        let last = address.last().copied().unwrap_or(path);
        T::from_yaml(value.clone(), &self.ctx)
            .map_err(|_| InputError::conversion(path, last))
    }

    /// Like `Config::read`, but returns `default` if the key-value pair
    /// is absent. A value that is present but cannot be parsed is
    /// still an error.
    pub fn read_or<T, S>(&self, path: S, default: T) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        match self.read(path) {
            Err(e) if e.kind() == InputErrorKind::Location => Ok(default),
            other => other,
        }
    }

    /// Parses a string argument and evaluates it using the default context. Extends
    /// ```ignore
    /// let arg = "2.0";
    /// let val = arg.parse::<f64>().unwrap();
    /// ```
    /// to handle mathematical expressions, e.g.
    /// ```ignore
    /// let arg = "2.0 * G / 1.0e4";
    /// let val = input.evaluate(arg).unwrap();
    /// ```
    /// where 'G' is specified in the input file.
    #[allow(unused)]
    pub fn evaluate<S: AsRef<str>>(&self, arg: S) -> Option<f64> {
        eval_number_with_context(arg.as_ref(), &self.ctx).ok()
    }
}

mod helper {
    macro_rules! context_function {
        ($ctx:expr, $section:expr, $name:literal, $func:expr) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let x = arg.as_number()?;
                    Ok(Value::Float($func(x)))
                })
            ).map_err(|_| InputError::conversion($section, $name))?
        };
    }

    pub(super) use context_function;
}
