//! Output-related errors

use std::fmt;
use std::error::Error;

pub enum OutputError {
    /// The log file (first field) could not be created, because of the second
    Create(String, String),
    /// Writing to the log file failed
    Write(String),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputError::Create(s, cause) => write!(f, "failed to create spectrum log '{}': {}", s, cause),
            OutputError::Write(s) => write!(f, "failed to write spectrum to '{}'", s),
        }
    }
}

impl fmt::Debug for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Error for OutputError {}

impl OutputError {
    pub fn create(path: &str, cause: &std::io::Error) -> Self {
        Self::Create(path.to_owned(), cause.to_string())
    }

    pub fn write(path: &str) -> Self {
        Self::Write(path.to_owned())
    }
}
