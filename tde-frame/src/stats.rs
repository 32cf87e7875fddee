//! Summary statistics over data frames.
//!
//! `describe` mirrors the familiar eight-row summary (count, mean, std,
//! min, quartiles, max); `corr` produces a Pearson correlation matrix
//! over the numeric columns. Both come in grouped variants keyed by one
//! categorical column. Results are themselves frames so the apps can
//! display them with the same table renderer as raw data.

use crate::frame::{Column, ColumnData, DataFrame};
use anyhow::bail;

/// Row labels of the `describe` output, in emission order.
pub const DESCRIBE_STATS: [&str; 8] =
    ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().copied().flatten().collect()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Quantile by linear interpolation between order statistics.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// The eight summary values for one column's present cells.
fn summarize(values: &[Option<f64>]) -> [Option<f64>; 8] {
    let cells = present(values);
    let mut sorted = cells.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    [
        Some(cells.len() as f64),
        mean(&cells),
        std_dev(&cells),
        sorted.first().copied(),
        quantile(&sorted, 0.25),
        quantile(&sorted, 0.50),
        quantile(&sorted, 0.75),
        sorted.last().copied(),
    ]
}

/// Pearson correlation over pairwise-complete observations.
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in &pairs {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx) * (x - mx);
        syy += (y - my) * (y - my);
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some(sxy / (sxx * syy).sqrt())
}

/// Least-squares fit y = slope * x + intercept over (x, y) pairs.
///
/// Returns `None` when fewer than two points remain or all x values
/// coincide.
pub fn linear_fit(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mx = points.iter().map(|p| p.0).sum::<f64>() / n;
    let my = points.iter().map(|p| p.1).sum::<f64>() / n;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (x, y) in points {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx) * (x - mx);
    }
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, my - slope * mx))
}

impl DataFrame {
    /// Eight-row summary of every numeric column.
    ///
    /// The result has a categorical `statistic` column followed by one
    /// numeric column per numeric column of `self`.
    pub fn describe(&self) -> anyhow::Result<DataFrame> {
        let numeric = self.numeric_column_names();
        if numeric.is_empty() {
            bail!("describe: frame has no numeric columns");
        }
        let mut columns = vec![Column::categorical(
            "statistic",
            DESCRIBE_STATS.to_vec(),
        )];
        for name in &numeric {
            let summary = summarize(self.numeric_values(name)?);
            columns.push(Column::numeric_opt(name, summary.to_vec()));
        }
        DataFrame::new(columns)
    }

    /// `describe` computed per group of a categorical column.
    ///
    /// Emits eight rows per group value, groups in first-appearance
    /// order, with the grouping column first.
    pub fn describe_by(&self, by: &str) -> anyhow::Result<DataFrame> {
        let groups = self.unique(by)?;
        let numeric = self.numeric_column_names();
        if numeric.is_empty() {
            bail!("describe: frame has no numeric columns");
        }

        let mut group_cells: Vec<&str> = Vec::new();
        let mut stat_cells: Vec<&str> = Vec::new();
        let mut value_cells: Vec<Vec<Option<f64>>> = vec![Vec::new(); numeric.len()];
        for group in &groups {
            let sub = self.filter_eq(by, group)?;
            for (i, name) in numeric.iter().enumerate() {
                value_cells[i].extend(summarize(sub.numeric_values(name)?));
            }
            group_cells.extend(std::iter::repeat(group.as_str()).take(DESCRIBE_STATS.len()));
            stat_cells.extend(DESCRIBE_STATS);
        }

        let mut columns = vec![
            Column::categorical(by, group_cells),
            Column::categorical("statistic", stat_cells),
        ];
        for (name, cells) in numeric.iter().zip(value_cells) {
            columns.push(Column::numeric_opt(name, cells));
        }
        DataFrame::new(columns)
    }

    /// Pearson correlation matrix over the numeric columns.
    ///
    /// The result has a categorical `variable` column naming each row,
    /// followed by one numeric column per variable. Undefined entries
    /// (zero variance, fewer than two complete pairs) are missing.
    pub fn corr(&self) -> anyhow::Result<DataFrame> {
        let numeric = self.numeric_column_names();
        if numeric.is_empty() {
            bail!("corr: frame has no numeric columns");
        }
        let mut columns = vec![Column::categorical(
            "variable",
            numeric.iter().map(|s| s.as_str()).collect(),
        )];
        for col_name in &numeric {
            let col_values = self.numeric_values(col_name)?;
            let cells = numeric
                .iter()
                .map(|row_name| {
                    if row_name == col_name {
                        Some(1.0)
                    } else {
                        pearson(self.numeric_values(row_name).ok()?, col_values)
                    }
                })
                .collect();
            columns.push(Column::numeric_opt(col_name, cells));
        }
        DataFrame::new(columns)
    }

    /// `corr` computed per group of a categorical column.
    pub fn corr_by(&self, by: &str) -> anyhow::Result<DataFrame> {
        let groups = self.unique(by)?;
        let numeric = self.numeric_column_names();
        if numeric.is_empty() {
            bail!("corr: frame has no numeric columns");
        }

        let mut group_cells: Vec<&str> = Vec::new();
        let mut var_cells: Vec<&str> = Vec::new();
        let mut value_cells: Vec<Vec<Option<f64>>> = vec![Vec::new(); numeric.len()];
        for group in &groups {
            let sub = self.filter_eq(by, group)?;
            let sub_corr = sub.corr()?;
            for (i, name) in numeric.iter().enumerate() {
                value_cells[i].extend_from_slice(sub_corr.numeric_values(name)?);
            }
            group_cells.extend(std::iter::repeat(group.as_str()).take(numeric.len()));
            var_cells.extend(numeric.iter().map(|s| s.as_str()));
        }

        let mut columns = vec![
            Column::categorical(by, group_cells),
            Column::categorical("variable", var_cells),
        ];
        for (name, cells) in numeric.iter().zip(value_cells) {
            columns.push(Column::numeric_opt(name, cells));
        }
        DataFrame::new(columns)
    }
}
