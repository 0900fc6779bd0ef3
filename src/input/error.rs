//! Input parsing errors

use std::fmt;
use std::error::Error;

/// Why did reading the run parameters fail?
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum InputErrorKind {
    File,
    Location,
    Conversion,
    Invalid,
}

/// Error returned when the run parameters cannot be read,
/// from either the input file or the console.
pub struct InputError {
    kind: InputErrorKind,
    path: String,
    cause: String,
}

impl fmt::Debug for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let help_msg = "Usage: ics-flux [input-file]";
        match self.kind {
            InputErrorKind::File => write!(f, "Unable to open configuration file \"{}\".\n{}", self.path, help_msg),
            InputErrorKind::Location => write!(f, "Failed to follow specified path \"{}\": component \"{}\" is missing.\n{}", self.path, self.cause, help_msg),
            InputErrorKind::Conversion => write!(f, "Could not convert field \"{}\" to target type.\n{}", self.cause, help_msg),
            InputErrorKind::Invalid => write!(f, "Invalid value for \"{}\": {}.\n{}", self.path, self.cause, help_msg),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for InputError {}

impl InputError {
    pub fn file(path: &str) -> Self {
        Self {
            kind: InputErrorKind::File,
            path: path.to_owned(),
            cause: String::new(),
        }
    }

    pub fn location(path: &str, cause: &str) -> Self {
        Self {
            kind: InputErrorKind::Location,
            path: path.to_owned(),
            cause: cause.to_owned(),
        }
    }

    pub fn conversion(path: &str, cause: &str) -> Self {
        Self {
            kind: InputErrorKind::Conversion,
            path: path.to_owned(),
            cause: cause.to_owned(),
        }
    }

    /// The value was read, but is outside the allowed domain
    pub fn invalid(path: &str, cause: &str) -> Self {
        Self {
            kind: InputErrorKind::Invalid,
            path: path.to_owned(),
            cause: cause.to_owned(),
        }
    }

    pub fn kind(&self) -> InputErrorKind {
        self.kind
    }

    #[allow(unused)]
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = InputError::location("electrons:norm", "electrons");
        let msg = err.to_string();
        println!("{}", msg);
        assert_eq!(err.kind(), InputErrorKind::Location);
        assert!(msg.starts_with("Failed to follow specified path \"electrons:norm\": component \"electrons\" is missing."));
        assert!(msg.ends_with("Usage: ics-flux [input-file]"));

        let err = InputError::invalid("spectrum", "lower bound must be positive");
        assert_eq!(err.path(), "spectrum");
        assert!(err.to_string().starts_with("Invalid value for \"spectrum\": lower bound must be positive."));
    }
}
