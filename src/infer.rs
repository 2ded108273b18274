//! Per-column type unification over sampled rows.

use crate::detect::detect_value_type;
use crate::field_type::Type;

/// Infer one type per column from the sampled rows.
///
/// The column count is taken from the first sampled row. Ragged rows are
/// clamped to it: extra cells are ignored and a missing cell carries no
/// evidence.
pub fn infer_column_types(rows: &[Vec<String>]) -> Vec<Type> {
    let num_columns = rows.first().map_or(0, Vec::len);
    (0..num_columns)
        .map(|column| infer_column_type(rows, column))
        .collect()
}

/// Unify the detected types of every sampled value in one column.
///
/// Empty cells are skipped and equal observations keep the running type.
/// Two disagreeing concrete types settle the column as [`Type::Unknown`]
/// at once; later rows cannot heal a conflict. There is no numeric
/// widening, so a column mixing `int32` and `int64` evidence is `unknown`.
pub fn infer_column_type(rows: &[Vec<String>], column: usize) -> Type {
    let mut unified = Type::Unknown;
    for row in rows {
        let Some(value) = row.get(column) else {
            continue;
        };
        let detected = detect_value_type(value);
        if detected == Type::Unknown || detected == unified {
            continue;
        }
        if unified == Type::Unknown {
            unified = detected;
            continue;
        }
        return Type::Unknown;
    }
    unified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_uniform_column() {
        let sample = rows(&[&["1"], &["2"], &["3"]]);
        assert_eq!(infer_column_types(&sample), vec![Type::Int32]);
    }

    #[test]
    fn test_no_rows_yields_no_columns() {
        assert_eq!(infer_column_types(&[]), Vec::new());
    }

    #[test]
    fn test_all_empty_cells_stay_unknown() {
        let sample = rows(&[&[""], &[""]]);
        assert_eq!(infer_column_types(&sample), vec![Type::Unknown]);
    }

    #[test]
    fn test_empty_cells_are_skipped() {
        let sample = rows(&[&[""], &["42"], &[""]]);
        assert_eq!(infer_column_types(&sample), vec![Type::Int32]);
    }

    #[test]
    fn test_mismatch_is_terminal() {
        // A conflict settles the column even when later rows agree again.
        let sample = rows(&[&["1"], &["hello"], &["2"], &["3"]]);
        assert_eq!(infer_column_types(&sample), vec![Type::Unknown]);

        let sample = rows(&[&["hello"], &["1"]]);
        assert_eq!(infer_column_types(&sample), vec![Type::Unknown]);
    }

    #[test]
    fn test_no_numeric_widening() {
        let sample = rows(&[&["42"], &["9999999999999"]]);
        assert_eq!(infer_column_types(&sample), vec![Type::Unknown]);

        let sample = rows(&[&["3.14"], &["1e39"]]);
        assert_eq!(infer_column_types(&sample), vec![Type::Unknown]);
    }

    #[test]
    fn test_ragged_rows_clamp_to_first_row_width() {
        let sample = rows(&[&["1", "a"], &["2"], &["3", "b", "extra"]]);
        assert_eq!(infer_column_types(&sample), vec![Type::Int32, Type::String]);
    }

    #[test]
    fn test_mixed_columns() {
        let sample = rows(&[
            &["1", "3.5", "2024-01-01"],
            &["2", "4.0", "2024-01-02"],
            &["3", "", "2024-01-03"],
        ]);
        assert_eq!(
            infer_column_types(&sample),
            vec![Type::Int32, Type::Float32, Type::Timestamp]
        );
    }
}
