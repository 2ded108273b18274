//! Main Taster builder and taste methods.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::encoding::strip_bom;
use crate::error::{Result, TasterError};
use crate::infer::infer_column_types;
use crate::report::TypeReport;
use crate::reservoir::ReservoirSampler;

/// Column type taster for delimited files.
///
/// Streams the input once, keeps a uniform reservoir sample of the data
/// records, and infers one type per column from the sample.
///
/// # Example
///
/// ```no_run
/// use csv_taster::Taster;
///
/// let mut taster = Taster::new();
/// taster.sample_size(500).delimiter(b';');
///
/// let report = taster.taste_path("data.csv").unwrap();
/// print!("{}", report);
/// ```
#[derive(Debug, Clone)]
pub struct Taster {
    /// Reservoir capacity.
    sample_size: usize,
    /// Field delimiter.
    delimiter: u8,
    /// Whether the first record is a header.
    has_header: bool,
    /// Fixed RNG seed for reproducible sampling.
    seed: Option<u64>,
}

impl Default for Taster {
    fn default() -> Self {
        Self::new()
    }
}

impl Taster {
    /// Create a new Taster with default settings.
    pub fn new() -> Self {
        Self {
            sample_size: 1000,
            delimiter: b',',
            has_header: true,
            seed: None,
        }
    }

    /// Set the number of rows to sample.
    pub fn sample_size(&mut self, sample_size: usize) -> &mut Self {
        self.sample_size = sample_size;
        self
    }

    /// Set the field delimiter.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the first record is treated as a header.
    pub fn has_header(&mut self, has_header: bool) -> &mut Self {
        self.has_header = has_header;
        self
    }

    /// Fix the sampler seed for reproducible runs.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Taste a delimited file at the given path.
    pub fn taste_path<P: AsRef<Path>>(&self, path: P) -> Result<TypeReport> {
        let file = File::open(path.as_ref())?;
        self.taste_reader(BufReader::new(file))
    }

    /// Taste delimited data from a reader in a single pass.
    pub fn taste_reader<D: Read>(&self, input: D) -> Result<TypeReport> {
        if self.sample_size == 0 {
            return Err(TasterError::InvalidConfig(
                "sample size must be at least 1".to_string(),
            ));
        }

        let input = strip_bom(input)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut sampler = match self.seed {
            Some(seed) => ReservoirSampler::seeded(self.sample_size, seed),
            None => ReservoirSampler::new(self.sample_size),
        };

        let mut header: Option<Vec<String>> = None;
        let mut rows_skipped: u64 = 0;
        let mut record = csv::StringRecord::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(true) => {
                    let row: Vec<String> = record.iter().map(ToString::to_string).collect();
                    if self.has_header && header.is_none() {
                        header = Some(row);
                    } else {
                        sampler.offer(row);
                    }
                }
                Ok(false) => break, // EOF
                Err(err) => {
                    // read_record leaves the reader past the failed record,
                    // so a skip never rereads it. Only I/O failures abort.
                    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
                        return Err(err.into());
                    }
                    rows_skipped += 1;
                }
            }
        }

        if sampler.is_empty() {
            return Err(TasterError::EmptyInput);
        }

        let rows_seen = sampler.seen();
        let rows = sampler.into_items();
        let types = infer_column_types(&rows);
        let fields = match header {
            Some(names) => column_names(&names, types.len()),
            None => (0..types.len()).map(|i| i.to_string()).collect(),
        };

        Ok(TypeReport {
            sample_target: self.sample_size,
            rows_sampled: rows.len(),
            rows_seen,
            rows_skipped,
            fields,
            types,
        })
    }

    /// Taste delimited data from an in-memory byte slice.
    pub fn taste_bytes(&self, data: &[u8]) -> Result<TypeReport> {
        self.taste_reader(data)
    }
}

/// Column names from the header, clamped to the inferred column count and
/// padded with numeric indices when the header is narrower.
fn column_names(header: &[String], num_columns: usize) -> Vec<String> {
    (0..num_columns)
        .map(|i| header.get(i).cloned().unwrap_or_else(|| i.to_string()))
        .collect()
}
