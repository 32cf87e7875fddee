//! The Anscombe walkthrough: basic plots, faceting, summary stats, and
//! a group-selection input over the quartet.

use crate::options;
use crate::{Artifact, ChartArtifact, ChartSpec, Control, Selections, TableArtifact, Toggle};
use tde_frame::DataFrame;

/// Categorical column that splits the quartet into groups I-IV.
const GROUP_COLUMN: &str = "dataset";

pub const GROUP_SELECT: &str = "display-group";
pub const GROUP_STATS_TOGGLE: &str = "group-stats";
pub const GROUP_CORR_TOGGLE: &str = "group-corr";

/// Select box over the quartet's group labels.
pub fn group_control(frame: &DataFrame) -> anyhow::Result<Control> {
    Ok(Control::new(
        GROUP_SELECT,
        "Which dataset do you want to display below?",
        options::category_values(frame, GROUP_COLUMN)?,
    ))
}

pub fn group_stats_toggle() -> Toggle {
    Toggle::new(GROUP_STATS_TOGGLE, "Show variable summary stats per group?")
}

pub fn group_corr_toggle() -> Toggle {
    Toggle::new(GROUP_CORR_TOGGLE, "Show correlation coefficient per group?")
}

/// Build the Anscombe app's artifact list for one selection snapshot.
pub fn render_pass(anscombe: &DataFrame, selections: &Selections) -> anyhow::Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    artifacts.push(Artifact::markdown(
        "# Anscombe explorer\n\n\
         ## Some basic plots\n\n\
         Use the first Anscombe data set as the primary example. \
         The dataset is printed as a reminder below.",
    ));
    let group_one = anscombe.filter_eq(GROUP_COLUMN, "I")?;
    artifacts.push(Artifact::Table(TableArtifact::new(group_one.clone())));

    artifacts.push(Artifact::markdown("## Scatter plot"));
    artifacts.push(Artifact::Chart(ChartArtifact::build(
        &group_one,
        "Anscombe I",
        ChartSpec::scatter("x", "y"),
    )?));

    artifacts.push(Artifact::markdown("## Line chart"));
    artifacts.push(Artifact::Chart(ChartArtifact::build(
        &group_one,
        "Anscombe I as a line",
        ChartSpec::line("x", "y"),
    )?));

    artifacts.push(Artifact::markdown(
        "## Facet over the quartet\n\n\
         All four groups share nearly identical summary statistics but \
         look nothing alike.",
    ));
    artifacts.push(Artifact::Chart(ChartArtifact::build(
        anscombe,
        "The full quartet",
        ChartSpec::scatter("x", "y").with_facet(GROUP_COLUMN),
    )?));

    artifacts.push(Artifact::markdown(
        "Or, include a fitted trend line per group.",
    ));
    artifacts.push(Artifact::Chart(ChartArtifact::build(
        anscombe,
        "The full quartet, with trend lines",
        ChartSpec::scatter("x", "y")
            .with_facet(GROUP_COLUMN)
            .with_hue(GROUP_COLUMN)
            .with_trend(),
    )?));

    artifacts.push(Artifact::markdown(
        "# Add reactivity\n\nSummary stats for the `x` and `y` variables:",
    ));
    artifacts.push(Artifact::Table(TableArtifact::new(anscombe.describe()?)));
    if group_stats_toggle().resolve(selections) {
        artifacts.push(Artifact::Table(TableArtifact::titled(
            "Summary stats per group",
            anscombe.describe_by(GROUP_COLUMN)?,
        )));
    }

    artifacts.push(Artifact::markdown(
        "The correlation coefficient between `x` and `y`:",
    ));
    artifacts.push(Artifact::Table(TableArtifact::new(anscombe.corr()?)));
    if group_corr_toggle().resolve(selections) {
        artifacts.push(Artifact::Table(TableArtifact::titled(
            "Correlation per group",
            anscombe.corr_by(GROUP_COLUMN)?,
        )));
    }

    artifacts.push(Artifact::markdown(
        "# Select input\n\n\
         Pick which group of the quartet to print to the screen.",
    ));
    let group = group_control(anscombe)?.resolve(selections)?;
    let filtered = anscombe.filter_eq(GROUP_COLUMN, &group)?;
    artifacts.push(Artifact::Table(TableArtifact::titled(
        &format!("Group {}", group),
        filtered.select(&["x", "y"])?,
    )));

    artifacts.push(Artifact::markdown(
        "Or, show the filtered data set as a plot.",
    ));
    artifacts.push(Artifact::Chart(ChartArtifact::build(
        &filtered,
        &format!("Anscombe {}", group),
        ChartSpec::scatter("x", "y"),
    )?));

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tde_datasets::BuiltinDataset;

    fn anscombe() -> DataFrame {
        BuiltinDataset::Anscombe.load().unwrap()
    }

    fn tables(artifacts: &[Artifact]) -> Vec<&TableArtifact> {
        artifacts
            .iter()
            .filter_map(|a| match a {
                Artifact::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn default_pass_shows_group_one_first() {
        let artifacts = render_pass(&anscombe(), &Selections::new()).unwrap();
        let first_table = tables(&artifacts)[0];
        assert_eq!(first_table.frame.n_rows(), 11);
        let Artifact::Chart(chart) = &artifacts[3] else {
            panic!("expected the group I scatter chart");
        };
        assert_eq!(chart.points.len(), 11);
    }

    #[test]
    fn toggles_append_grouped_tables() {
        let base = render_pass(&anscombe(), &Selections::new()).unwrap();
        let with_stats = render_pass(
            &anscombe(),
            &Selections::new().with_toggle(GROUP_STATS_TOGGLE, true),
        )
        .unwrap();
        assert_eq!(with_stats.len(), base.len() + 1);

        let with_both = render_pass(
            &anscombe(),
            &Selections::new()
                .with_toggle(GROUP_STATS_TOGGLE, true)
                .with_toggle(GROUP_CORR_TOGGLE, true),
        )
        .unwrap();
        assert_eq!(with_both.len(), base.len() + 2);
    }

    #[test]
    fn group_select_filters_the_final_table_and_chart() {
        let sel = Selections::new().with_choice(GROUP_SELECT, "IV");
        let artifacts = render_pass(&anscombe(), &sel).unwrap();
        let last_table = *tables(&artifacts).last().unwrap();
        assert_eq!(last_table.title.as_deref(), Some("Group IV"));
        assert_eq!(last_table.frame.n_rows(), 11);
        assert_eq!(last_table.frame.column_names(), vec!["x", "y"]);
        let Some(Artifact::Chart(chart)) = artifacts.last() else {
            panic!("expected a trailing chart");
        };
        assert_eq!(chart.title, "Anscombe IV");
    }

    #[test]
    fn stale_group_choice_falls_back_to_group_one() {
        let sel = Selections::new().with_choice(GROUP_SELECT, "V");
        let artifacts = render_pass(&anscombe(), &sel).unwrap();
        let last_table = *tables(&artifacts).last().unwrap();
        assert_eq!(last_table.title.as_deref(), Some("Group I"));
    }

    #[test]
    fn quartet_facet_chart_fits_four_trends() {
        let artifacts = render_pass(&anscombe(), &Selections::new()).unwrap();
        let trend_chart = artifacts
            .iter()
            .find_map(|a| match a {
                Artifact::Chart(c) if !c.trends.is_empty() => Some(c),
                _ => None,
            })
            .unwrap();
        assert!(trend_chart.faceted);
        assert_eq!(trend_chart.trends.len(), 4);
        // the quartet's shared fit is roughly y = 0.5x + 3
        for seg in &trend_chart.trends {
            let slope = (seg.y1 - seg.y0) / (seg.x1 - seg.x0);
            assert!((slope - 0.5).abs() < 0.01, "slope {} off", slope);
        }
    }

    #[test]
    fn pass_is_idempotent_for_a_fixed_snapshot() {
        let sel = Selections::new()
            .with_choice(GROUP_SELECT, "II")
            .with_toggle(GROUP_STATS_TOGGLE, true);
        let a = render_pass(&anscombe(), &sel).unwrap();
        let b = render_pass(&anscombe(), &sel).unwrap();
        assert_eq!(a, b);
    }
}
