use std::fmt;

/// Data type inferred for a column value.
///
/// Variants are declared in detection order: integers are tried before
/// floats, all numeric and temporal parsers before the `String` fallback.
/// `Unknown` stands for a missing value and acts as a wildcard during
/// unification; it is also the verdict for an inconsistent column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// Missing/empty value, or an inconsistent column.
    #[default]
    Unknown,
    /// Signed integer fitting in 32 bits.
    Int32,
    /// Signed integer fitting in 64 bits.
    Int64,
    /// Floating point number fitting the 32-bit range.
    Float32,
    /// Floating point number fitting the 64-bit range.
    Float64,
    /// Value matching one of the accepted date/time layouts.
    Timestamp,
    /// Text value (fallback type).
    String,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unknown => write!(f, "unknown"),
            Type::Int32 => write!(f, "int32"),
            Type::Int64 => write!(f, "int64"),
            Type::Float32 => write!(f, "float32"),
            Type::Float64 => write!(f, "float64"),
            Type::Timestamp => write!(f, "timestamp"),
            Type::String => write!(f, "string"),
        }
    }
}
