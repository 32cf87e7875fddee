//! The intro walkthrough: markdown prose plus one constructed table.
//!
//! No controls; the pass is constant.

use crate::{Artifact, TableArtifact};
use tde_frame::{Column, DataFrame};

/// Build the intro app's artifact list.
pub fn render_pass() -> anyhow::Result<Vec<Artifact>> {
    let x1: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
    let x2: Vec<f64> = x1.iter().map(|v| v * 10.0).collect();
    let frame = DataFrame::new(vec![Column::numeric("x1", x1), Column::numeric("x2", x2)])?;

    Ok(vec![
        Artifact::markdown(
            "# My first explorer app\n\n\
             ## a section header\n\n\
             ### sub header\n\n\
             Here's a data frame.",
        ),
        Artifact::Table(TableArtifact::new(frame)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_prose_then_one_table() {
        let artifacts = render_pass().unwrap();
        assert_eq!(artifacts.len(), 2);
        assert!(matches!(artifacts[0], Artifact::Markdown(_)));
        let Artifact::Table(table) = &artifacts[1] else {
            panic!("expected a table artifact");
        };
        assert_eq!(table.frame.n_rows(), 4);
        assert_eq!(table.frame.column_names(), vec!["x1", "x2"]);
        assert_eq!(
            table.frame.numeric_values("x2").unwrap(),
            &[Some(10.0), Some(20.0), Some(30.0), Some(40.0)]
        );
    }

    #[test]
    fn pass_is_idempotent() {
        assert_eq!(render_pass().unwrap(), render_pass().unwrap());
    }
}
