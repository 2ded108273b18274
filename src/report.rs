//! The inference report handed back to callers.

use std::fmt;

use crate::field_type::Type;

/// Everything learned from one pass over the input.
///
/// `fields` and `types` are parallel vectors, one entry per column of the
/// first sampled row. The `Display` impl renders the human-readable report
/// printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReport {
    /// Reservoir capacity the run was configured with.
    pub sample_target: usize,
    /// Rows held in the final sample, `min(rows_seen, sample_target)`.
    pub rows_sampled: usize,
    /// Data records offered to the sampler. Excludes the header and any
    /// skipped records.
    pub rows_seen: u64,
    /// Malformed records dropped by the read loop.
    pub rows_skipped: u64,
    /// Column names from the header, or numeric indices without one.
    pub fields: Vec<String>,
    /// Inferred type per column.
    pub types: Vec<Type>,
}

impl TypeReport {
    /// Number of inferred columns.
    pub fn num_columns(&self) -> usize {
        self.types.len()
    }

    /// Iterate over `(name, type)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, Type)> {
        self.fields
            .iter()
            .map(String::as_str)
            .zip(self.types.iter().copied())
    }
}

impl fmt::Display for TypeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sampling up to {} rows", self.sample_target)?;
        writeln!(f, "Sampled {} of {} rows", self.rows_sampled, self.rows_seen)?;
        if self.rows_skipped > 0 {
            writeln!(f, "Skipped {} unreadable rows", self.rows_skipped)?;
        }
        for (name, column_type) in self.columns() {
            writeln!(f, "Column {}: {}", name, column_type)?;
        }
        Ok(())
    }
}
