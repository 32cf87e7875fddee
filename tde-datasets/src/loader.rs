//! CSV parsing with column type inference.

use anyhow::bail;
use tde_frame::{Column, DataFrame};

/// Parse a headered CSV string into a frame.
///
/// Every column starts as candidate-numeric; the first non-empty cell
/// that fails to parse as `f64` demotes it to categorical. Empty cells
/// are missing values under either type. Cells are trimmed before
/// inspection, matching how the fixture files are formatted.
pub fn load_csv(data: &str) -> anyhow::Result<DataFrame> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(data.as_bytes());

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() {
        bail!("CSV has no header row");
    }

    // flexible(false) makes the reader itself reject ragged rows
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        for (i, field) in record.iter().enumerate() {
            let field = field.trim();
            cells[i].push(if field.is_empty() {
                None
            } else {
                Some(field.to_string())
            });
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, col)| build_column(name, col))
        .collect();
    DataFrame::new(columns)
}

fn build_column(name: String, cells: Vec<Option<String>>) -> Column {
    let all_numeric = cells
        .iter()
        .flatten()
        .all(|c| c.parse::<f64>().is_ok())
        && cells.iter().any(|c| c.is_some());

    if all_numeric {
        Column::numeric_opt(
            &name,
            cells
                .into_iter()
                .map(|c| c.and_then(|s| s.parse::<f64>().ok()))
                .collect(),
        )
    } else {
        Column::categorical_opt(&name, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_numeric_and_categorical_columns() {
        let df = load_csv("a,b\n1,alpha\n2.5,beta\n").unwrap();
        assert_eq!(df.numeric_column_names(), vec!["a"]);
        assert_eq!(df.categorical_column_names(), vec!["b"]);
        assert_eq!(df.numeric_values("a").unwrap(), &[Some(1.0), Some(2.5)]);
    }

    #[test]
    fn one_bad_cell_demotes_a_column_to_categorical() {
        let df = load_csv("v\n1\ntwo\n3\n").unwrap();
        assert_eq!(df.categorical_column_names(), vec!["v"]);
    }

    #[test]
    fn empty_cells_stay_missing_under_both_types() {
        let df = load_csv("n,c\n1,\n,x\n").unwrap();
        assert_eq!(df.numeric_values("n").unwrap(), &[Some(1.0), None]);
        assert_eq!(
            df.categorical_values("c").unwrap(),
            &[None, Some("x".to_string())]
        );
    }

    #[test]
    fn all_empty_column_is_categorical() {
        let df = load_csv("a,b\n1,\n2,\n").unwrap();
        assert_eq!(df.categorical_column_names(), vec!["b"]);
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(load_csv("a,b\n1\n").is_err());
    }
}
