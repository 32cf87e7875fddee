//! Per-pass option set computation.
//!
//! Option sets are functions of the current dataset schema and the
//! other controls' resolved values, recomputed on every pass and never
//! cached. This is what makes a dependent control (the iris y-axis)
//! self-healing: the set it clamps against is always derived from the
//! primary control's current value.

use tde_frame::DataFrame;

/// Numeric column names offered to an axis control.
pub fn numeric_columns(frame: &DataFrame) -> Vec<String> {
    frame.numeric_column_names()
}

/// Numeric column names minus the one another control already claimed.
pub fn numeric_columns_excluding(frame: &DataFrame, taken: &str) -> Vec<String> {
    frame
        .numeric_column_names()
        .into_iter()
        .filter(|name| name != taken)
        .collect()
}

/// Distinct values of a categorical column, first-appearance order.
pub fn category_values(frame: &DataFrame, column: &str) -> anyhow::Result<Vec<String>> {
    frame.unique(column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tde_frame::Column;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::numeric("a", vec![1.0]),
            Column::numeric("b", vec![2.0]),
            Column::categorical("c", vec!["x"]),
        ])
        .unwrap()
    }

    #[test]
    fn excluding_removes_exactly_the_taken_column() {
        assert_eq!(numeric_columns(&frame()), vec!["a", "b"]);
        assert_eq!(numeric_columns_excluding(&frame(), "a"), vec!["b"]);
        // excluding a non-member changes nothing
        assert_eq!(numeric_columns_excluding(&frame(), "c"), vec!["a", "b"]);
    }
}
