//! csv-taster: column type inference for delimited files
//!
//! Streams a CSV file once, keeps a uniform random sample of its rows via
//! reservoir sampling, and reports the narrowest type every column
//! consistently satisfies.
//!
//! # Quick Start
//!
//! ```no_run
//! use csv_taster::Taster;
//!
//! // Create a taster with default settings
//! let mut taster = Taster::new();
//!
//! // Optionally configure sampling
//! taster.sample_size(500).delimiter(b';');
//!
//! // Taste a file
//! let report = taster.taste_path("data.csv").unwrap();
//!
//! for (name, column_type) in report.columns() {
//!     println!("{}: {}", name, column_type);
//! }
//! ```
//!
//! # How it works
//!
//! The input is read exactly once, in order:
//! 1. Every data record is offered to a reservoir sampler of capacity `k`
//!    (Algorithm R), so each of the `n` records lands in the sample with
//!    probability `k/n` without buffering the file.
//! 2. Each sampled value is classified by a fixed ladder of parse attempts,
//!    narrowest type first: int32, int64, float32, float64, timestamp,
//!    string. Matching is exact; values are never trimmed.
//! 3. The per-value tags of each column are unified. Agreeing values keep
//!    the type, empty values carry no evidence, and two conflicting types
//!    settle the column as `unknown`.
//!
//! Memory use is bounded by the sample size, not the file size, so tasting
//! a multi-gigabyte file with the default capacity of 1000 rows stays cheap.

mod detect;
mod encoding;
mod error;
mod field_type;
mod infer;
mod report;
mod reservoir;
mod taster;
mod timestamp;

// Re-export public API
pub use error::{Result, TasterError};
pub use field_type::Type;
pub use report::TypeReport;
pub use reservoir::ReservoirSampler;
pub use taster::Taster;

// Re-export for advanced usage
pub use detect::detect_value_type;
pub use infer::{infer_column_type, infer_column_types};
