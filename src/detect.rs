//! Single-value type detection.
//!
//! Each sampled cell is classified independently by a fixed ladder of parse
//! attempts ordered narrowest first. Integers run before floats so `"5"` is
//! never reported as a float, and every numeric and timestamp parser runs
//! before the universal `string` fallback.

use crate::field_type::Type;
use crate::timestamp::is_timestamp;

/// Determine the narrowest type a single cell value satisfies.
///
/// The value is matched exactly as it appears in the record. No trimming is
/// applied, so `" 42"` is a string. The empty string carries no evidence and
/// maps to [`Type::Unknown`].
pub fn detect_value_type(value: &str) -> Type {
    if value.is_empty() {
        return Type::Unknown;
    }
    if value.parse::<i32>().is_ok() {
        return Type::Int32;
    }
    if value.parse::<i64>().is_ok() {
        return Type::Int64;
    }
    if let Ok(number) = value.parse::<f64>() {
        // `f64::from_str` saturates out-of-range magnitudes to infinity
        // instead of failing, and accepts spelled-out specials. Only a
        // finite parse counts as numeric.
        if number.is_finite() {
            return if (number as f32).is_finite() {
                Type::Float32
            } else {
                Type::Float64
            };
        }
    }
    if is_timestamp(value) {
        return Type::Timestamp;
    }
    Type::String
}
