//! Writes the integrated spectrum to the console and to file

mod error;
mod format;
mod log;

pub use error::*;
pub use format::*;
pub use log::*;
