//! The two-column spectrum log

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::ics::KernelMode;
use crate::spectrum::SpectrumSample;
use super::{LogLine, OutputError};

/// Name of the log for a run with the given kernel, started at `time`:
/// `ics_jones_YYYYMMDDhhmmss.log` or `ics_thomson_YYYYMMDDhhmmss.log`.
pub fn log_file_name<Tz: TimeZone>(kernel: KernelMode, time: &DateTime<Tz>) -> String
where Tz::Offset: std::fmt::Display {
    format!("ics_{}_{}.log", kernel, time.format("%Y%m%d%H%M%S"))
}

/// Writes one line per sample, `energy flux`, to a file
pub struct SpectrumLog {
    path: PathBuf,
    file: BufWriter<File>,
}

impl SpectrumLog {
    /// Creates the log file in `directory`, creating that first if necessary.
    pub fn create<Tz: TimeZone>(directory: &Path, kernel: KernelMode, time: &DateTime<Tz>) -> Result<Self, OutputError>
    where Tz::Offset: std::fmt::Display {
        let path = directory.join(log_file_name(kernel, time));
        let name = path.display().to_string();

        fs::create_dir_all(directory)
            .map_err(|e| OutputError::create(&name, &e))?;

        let file = File::create(&path)
            .map_err(|e| OutputError::create(&name, &e))?;

        Ok(Self { path, file: BufWriter::new(file) })
    }

    #[allow(unused)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&mut self, sample: SpectrumSample) -> Result<(), OutputError> {
        writeln!(self.file, "{}", LogLine(sample))
            .map_err(|_| OutputError::write(&self.path.display().to_string()))
    }

    /// Flushes any buffered lines, returning the path to the log
    pub fn finish(mut self) -> Result<PathBuf, OutputError> {
        self.file.flush()
            .map_err(|_| OutputError::write(&self.path.display().to_string()))?;
        Ok(self.path)
    }
}
