//! The two value sinks a run writes to: raw temperatures and their moving average.

use crate::processor::error::ProcessorError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const DEFAULT_TEMPERATURE_FILE: &str = "temp_f.txt";
pub const DEFAULT_AVERAGE_FILE: &str = "avg.txt";

#[derive(Debug)]
pub struct Outputs<W: Write> {
    temperature: W,
    average: W,
}

impl Outputs<BufWriter<File>> {
    /// Creates (or truncates) both output files.
    pub fn create(temperature_path: &Path, average_path: &Path) -> Result<Self, ProcessorError> {
        let open = |path: &Path| {
            File::create(path)
                .map(BufWriter::new)
                .map_err(|e| ProcessorError::OutputCreation(path.to_path_buf(), e))
        };
        Ok(Self::new(open(temperature_path)?, open(average_path)?))
    }
}

impl<W: Write> Outputs<W> {
    pub fn new(temperature: W, average: W) -> Self {
        Self {
            temperature,
            average,
        }
    }

    /// Writes one line to each sink and flushes both, so values land on disk as they arrive.
    pub fn record(&mut self, temperature: f64, average: f64) -> io::Result<()> {
        writeln!(self.temperature, "{:?}", temperature)?;
        writeln!(self.average, "{:?}", average)?;
        self.temperature.flush()?;
        self.average.flush()
    }

    pub fn into_inner(self) -> (W, W) {
        (self.temperature, self.average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_record_writes_one_value_per_line() {
        let mut outputs = Outputs::new(Vec::new(), Vec::new());
        outputs.record(71.6, 71.6).unwrap();
        outputs.record(60.0, 65.8).unwrap();
        let (temperature, average) = outputs.into_inner();
        assert_eq!(String::from_utf8(temperature).unwrap(), "71.6\n60.0\n");
        assert_eq!(String::from_utf8(average).unwrap(), "71.6\n65.8\n");
    }

    #[test]
    fn test_create_truncates_existing_files() {
        let dir = tempdir().unwrap();
        let temperature_path = dir.path().join(DEFAULT_TEMPERATURE_FILE);
        let average_path = dir.path().join(DEFAULT_AVERAGE_FILE);
        fs::write(&temperature_path, "stale\nstale\n").unwrap();

        let mut outputs = Outputs::create(&temperature_path, &average_path).unwrap();
        outputs.record(50.5, 50.5).unwrap();

        assert_eq!(fs::read_to_string(&temperature_path).unwrap(), "50.5\n");
        assert_eq!(fs::read_to_string(&average_path).unwrap(), "50.5\n");
    }

    #[test]
    fn test_create_in_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing").join(DEFAULT_TEMPERATURE_FILE);
        let result = Outputs::create(&missing, &dir.path().join(DEFAULT_AVERAGE_FILE));
        assert!(matches!(
            result,
            Err(ProcessorError::OutputCreation(path, _)) if path == missing
        ));
    }
}
