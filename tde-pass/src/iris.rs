//! The iris explorer: pick the scatter axes, optionally color by
//! species.
//!
//! The y-axis option set depends on the x-axis choice, which makes this
//! the app that exercises the dependent-option rule: both sets are
//! recomputed from the schema and the resolved x on every pass.

use crate::options;
use crate::{Artifact, ChartArtifact, ChartSpec, Control, Selections, Toggle};
use tde_frame::DataFrame;

const SPECIES_COLUMN: &str = "Species";

pub const X_SELECT: &str = "x-axis";
pub const Y_SELECT: &str = "y-axis";
pub const COLOR_TOGGLE: &str = "color-by-species";

/// X-axis select box over all numeric columns.
pub fn x_control(frame: &DataFrame) -> Control {
    Control::new(
        X_SELECT,
        "Select x-axis variable:",
        options::numeric_columns(frame),
    )
}

/// Y-axis select box over the numeric columns not claimed by x.
pub fn y_control(frame: &DataFrame, resolved_x: &str) -> Control {
    Control::new(
        Y_SELECT,
        "Select y-axis variable:",
        options::numeric_columns_excluding(frame, resolved_x),
    )
}

pub fn color_toggle() -> Toggle {
    Toggle::new(COLOR_TOGGLE, "Color by Species?")
}

/// Build the iris app's artifact list for one selection snapshot.
pub fn render_pass(iris: &DataFrame, selections: &Selections) -> anyhow::Result<Vec<Artifact>> {
    let x = x_control(iris).resolve(selections)?;
    let y = y_control(iris, &x).resolve(selections)?;
    let colored = color_toggle().resolve(selections);

    let spec = if colored {
        ChartSpec::scatter(&x, &y).with_hue(SPECIES_COLUMN)
    } else {
        ChartSpec::scatter(&x, &y)
    };

    Ok(vec![
        Artifact::markdown(
            "# Iris explore\n\n\
             This app lets you explore the `iris` data set. \
             Select the x and y variables for the scatter plot using \
             the controls in the sidebar.",
        ),
        Artifact::Chart(ChartArtifact::build(
            iris,
            &format!("{} vs {}", y, x),
            spec,
        )?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tde_datasets::BuiltinDataset;

    fn iris() -> DataFrame {
        BuiltinDataset::Iris.load().unwrap()
    }

    fn chart(artifacts: &[Artifact]) -> &ChartArtifact {
        artifacts
            .iter()
            .find_map(|a| match a {
                Artifact::Chart(c) => Some(c),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn y_options_exclude_the_chosen_x() {
        let iris = iris();
        let y = y_control(&iris, "Sepal.Length");
        assert_eq!(
            y.options,
            vec!["Sepal.Width", "Petal.Length", "Petal.Width"]
        );
    }

    #[test]
    fn y_options_track_a_changed_x() {
        let iris = iris();
        for x in x_control(&iris).options {
            let y = y_control(&iris, &x);
            assert!(!y.options.contains(&x));
            assert_eq!(y.options.len(), 3);
        }
    }

    #[test]
    fn default_pass_plots_first_two_numeric_columns() {
        let artifacts = render_pass(&iris(), &Selections::new()).unwrap();
        let c = chart(&artifacts);
        assert_eq!(c.x_label, "Sepal.Length");
        assert_eq!(c.y_label, "Sepal.Width");
        assert_eq!(c.points.len(), 150);
        assert!(!c.colored);
    }

    #[test]
    fn color_toggle_switches_to_the_hued_variant() {
        let sel = Selections::new().with_toggle(COLOR_TOGGLE, true);
        let artifacts = render_pass(&iris(), &sel).unwrap();
        let c = chart(&artifacts);
        assert!(c.colored);
        assert!(c.points.iter().all(|p| p.hue.is_some()));
    }

    #[test]
    fn stale_y_equal_to_new_x_is_clamped_within_the_pass() {
        // user had y = Sepal.Width, then moved x onto the same column
        let sel = Selections::new()
            .with_choice(X_SELECT, "Sepal.Width")
            .with_choice(Y_SELECT, "Sepal.Width");
        let artifacts = render_pass(&iris(), &sel).unwrap();
        let c = chart(&artifacts);
        assert_eq!(c.x_label, "Sepal.Width");
        assert_eq!(c.y_label, "Sepal.Length");
    }

    #[test]
    fn pass_is_idempotent_for_a_fixed_snapshot() {
        let sel = Selections::new()
            .with_choice(X_SELECT, "Petal.Length")
            .with_choice(Y_SELECT, "Petal.Width")
            .with_toggle(COLOR_TOGGLE, true);
        assert_eq!(
            render_pass(&iris(), &sel).unwrap(),
            render_pass(&iris(), &sel).unwrap()
        );
    }
}
