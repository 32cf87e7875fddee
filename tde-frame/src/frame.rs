//! The `DataFrame` type and its derived views.

use anyhow::{anyhow, bail};

/// Cell storage for one column. Missing values are `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    /// Numeric column from plain values (no missing cells).
    pub fn numeric(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            data: ColumnData::Numeric(values.into_iter().map(Some).collect()),
        }
    }

    /// Numeric column that may contain missing cells.
    pub fn numeric_opt(name: &str, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.to_string(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Categorical column from plain string values.
    pub fn categorical(name: &str, values: Vec<&str>) -> Self {
        Self {
            name: name.to_string(),
            data: ColumnData::Categorical(
                values.into_iter().map(|s| Some(s.to_string())).collect(),
            ),
        }
    }

    /// Categorical column that may contain missing cells.
    pub fn categorical_opt(name: &str, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.to_string(),
            data: ColumnData::Categorical(values),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Numeric(_))
    }

    /// Text rendering of one cell, empty string for missing values.
    pub fn cell_text(&self, row: usize) -> String {
        match &self.data {
            ColumnData::Numeric(v) => match v.get(row).copied().flatten() {
                // Trim trailing ".0" noise for integral values
                Some(x) if x.fract() == 0.0 && x.abs() < 1e15 => format!("{}", x as i64),
                Some(x) => format!("{}", x),
                None => String::new(),
            },
            ColumnData::Categorical(v) => v
                .get(row)
                .and_then(|c| c.clone())
                .unwrap_or_default(),
        }
    }
}

/// An immutable table of named, typed columns of equal length.
///
/// All view methods return fresh owned frames; the receiver is never
/// modified.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Build a frame, validating that columns are non-duplicated and of
    /// equal length.
    pub fn new(columns: Vec<Column>) -> anyhow::Result<Self> {
        if let Some(first) = columns.first() {
            let n = first.data.len();
            for col in &columns {
                if col.data.len() != n {
                    bail!(
                        "ragged frame: column '{}' has {} rows, expected {}",
                        col.name,
                        col.data.len(),
                        n
                    );
                }
            }
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == col.name) {
                bail!("duplicate column name '{}'", col.name);
            }
        }
        Ok(Self { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Names of numeric columns, in declaration order.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    /// Names of categorical columns, in declaration order.
    pub fn categorical_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| !c.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    /// Cells of a numeric column.
    pub fn numeric_values(&self, name: &str) -> anyhow::Result<&[Option<f64>]> {
        match self.column(name) {
            Some(Column {
                data: ColumnData::Numeric(v),
                ..
            }) => Ok(v),
            Some(_) => bail!("column '{}' is not numeric", name),
            None => bail!("no column named '{}'", name),
        }
    }

    /// Cells of a categorical column.
    pub fn categorical_values(&self, name: &str) -> anyhow::Result<&[Option<String>]> {
        match self.column(name) {
            Some(Column {
                data: ColumnData::Categorical(v),
                ..
            }) => Ok(v),
            Some(_) => bail!("column '{}' is not categorical", name),
            None => bail!("no column named '{}'", name),
        }
    }

    /// Distinct non-missing values of a categorical column, in
    /// first-appearance order.
    pub fn unique(&self, name: &str) -> anyhow::Result<Vec<String>> {
        let cells = self.categorical_values(name)?;
        let mut out: Vec<String> = Vec::new();
        for cell in cells.iter().flatten() {
            if !out.iter().any(|v| v == cell) {
                out.push(cell.clone());
            }
        }
        Ok(out)
    }

    fn take_rows(&self, keep: &[usize]) -> DataFrame {
        let columns = self
            .columns
            .iter()
            .map(|col| Column {
                name: col.name.clone(),
                data: match &col.data {
                    ColumnData::Numeric(v) => {
                        ColumnData::Numeric(keep.iter().map(|&i| v[i]).collect())
                    }
                    ColumnData::Categorical(v) => {
                        ColumnData::Categorical(keep.iter().map(|&i| v[i].clone()).collect())
                    }
                },
            })
            .collect();
        DataFrame { columns }
    }

    /// Rows where the categorical column equals `value`.
    pub fn filter_eq(&self, name: &str, value: &str) -> anyhow::Result<DataFrame> {
        let cells = self.categorical_values(name)?;
        let keep: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.as_deref() == Some(value))
            .map(|(i, _)| i)
            .collect();
        Ok(self.take_rows(&keep))
    }

    /// A frame containing only the named columns, in the given order.
    pub fn select(&self, names: &[&str]) -> anyhow::Result<DataFrame> {
        let columns = names
            .iter()
            .map(|name| {
                self.column(name)
                    .cloned()
                    .ok_or_else(|| anyhow!("no column named '{}'", name))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(DataFrame { columns })
    }

    /// The frame without the named column.
    pub fn drop_column(&self, name: &str) -> anyhow::Result<DataFrame> {
        if self.column(name).is_none() {
            bail!("no column named '{}'", name);
        }
        Ok(DataFrame {
            columns: self
                .columns
                .iter()
                .filter(|c| c.name != name)
                .cloned()
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Column::numeric("x", vec![1.0, 2.0, 3.0, 4.0]),
            Column::numeric("y", vec![10.0, 20.0, 30.0, 40.0]),
            Column::categorical("group", vec!["a", "b", "a", "b"]),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_ragged_columns() {
        let result = DataFrame::new(vec![
            Column::numeric("x", vec![1.0, 2.0]),
            Column::numeric("y", vec![1.0]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = DataFrame::new(vec![
            Column::numeric("x", vec![1.0]),
            Column::numeric("x", vec![2.0]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn schema_inspection_splits_by_type() {
        let df = sample();
        assert_eq!(df.numeric_column_names(), vec!["x", "y"]);
        assert_eq!(df.categorical_column_names(), vec!["group"]);
    }

    #[test]
    fn filter_eq_keeps_matching_rows() {
        let df = sample();
        let a = df.filter_eq("group", "a").unwrap();
        assert_eq!(a.n_rows(), 2);
        assert_eq!(a.numeric_values("x").unwrap(), &[Some(1.0), Some(3.0)]);
        // parent untouched
        assert_eq!(df.n_rows(), 4);
    }

    #[test]
    fn drop_column_removes_only_that_column() {
        let df = sample().drop_column("x").unwrap();
        assert_eq!(df.column_names(), vec!["y", "group"]);
        assert!(sample().drop_column("nope").is_err());
    }

    #[test]
    fn select_reorders_columns() {
        let df = sample().select(&["group", "x"]).unwrap();
        assert_eq!(df.column_names(), vec!["group", "x"]);
    }

    #[test]
    fn unique_preserves_first_appearance_order() {
        let df = DataFrame::new(vec![Column::categorical(
            "g",
            vec!["II", "I", "II", "III"],
        )])
        .unwrap();
        assert_eq!(df.unique("g").unwrap(), vec!["II", "I", "III"]);
    }

    #[test]
    fn cell_text_formats_integral_floats_without_fraction() {
        let df = sample();
        assert_eq!(df.column("x").unwrap().cell_text(0), "1");
        let df = DataFrame::new(vec![Column::numeric("v", vec![1.5])]).unwrap();
        assert_eq!(df.column("v").unwrap().cell_text(0), "1.5");
    }

    #[test]
    fn missing_cells_render_empty() {
        let df = DataFrame::new(vec![Column::numeric_opt("v", vec![None, Some(2.0)])]).unwrap();
        assert_eq!(df.column("v").unwrap().cell_text(0), "");
    }
}
