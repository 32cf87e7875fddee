//! Dataset switching: two ways to route a selection to a frame.
//!
//! Approach 1 resolves a radio choice with a plain `if/else` chain over
//! the dataset ids. Approach 2 resolves a select-box choice by lookup
//! in the [`DatasetCatalog`]. Both display the chosen dataset
//! unmodified.

use crate::{Artifact, Control, Selections, TableArtifact};
use anyhow::anyhow;
use tde_datasets::{BuiltinDataset, DatasetCatalog};
use tde_frame::DataFrame;

pub const RADIO_SELECT: &str = "dataset-radio";
pub const BOX_SELECT: &str = "dataset-box";

/// The three datasets offered by the original walkthrough.
const CHOICES: [BuiltinDataset; 3] = [
    BuiltinDataset::Penguins,
    BuiltinDataset::Iris,
    BuiltinDataset::Planets,
];

fn choice_ids() -> Vec<String> {
    CHOICES.iter().map(|d| d.id().to_string()).collect()
}

/// Radio group for approach 1.
pub fn radio_control() -> Control {
    Control::new(RADIO_SELECT, "Select data set:", choice_ids())
}

/// Select box for approach 2.
pub fn box_control() -> Control {
    Control::new(BOX_SELECT, "Select data set from list below:", choice_ids())
}

/// Build the switcher app's artifact list for one selection snapshot.
pub fn render_pass(
    catalog: &DatasetCatalog,
    selections: &Selections,
) -> anyhow::Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    artifacts.push(Artifact::markdown(
        "# Dynamically select data sets\n\n\
         This app demonstrates two ways to let a user switch the \
         displayed data set: branching on the selected name, and using \
         the name as a catalog key.",
    ));

    // Approach 1: branch on the radio value.
    artifacts.push(Artifact::markdown(
        "## Approach 1\n\nThe radio buttons select one of three data sets.",
    ));
    let radio_choice = radio_control().resolve(selections)?;
    let frame_1: DataFrame = if radio_choice == "penguins" {
        catalog.frame(BuiltinDataset::Penguins)?.clone()
    } else if radio_choice == "iris" {
        catalog.frame(BuiltinDataset::Iris)?.clone()
    } else {
        catalog.frame(BuiltinDataset::Planets)?.clone()
    };
    artifacts.push(Artifact::Table(TableArtifact::titled(&radio_choice, frame_1)));

    // Approach 2: treat the select value as a catalog key.
    artifacts.push(Artifact::markdown(
        "## Approach 2\n\n\
         The selected name is used as the key into a catalog of frames. \
         A select box is used here, but a radio button works just as well.",
    ));
    let box_choice = box_control().resolve(selections)?;
    let frame_2 = catalog
        .get(&box_choice)
        .ok_or_else(|| anyhow!("dataset '{}' missing from catalog", box_choice))?;
    artifacts.push(Artifact::Table(TableArtifact::titled(
        &box_choice,
        frame_2.clone(),
    )));

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DatasetCatalog {
        DatasetCatalog::load_all().unwrap()
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
    fn defaults_show_penguins_on_both_paths() {
        let catalog = catalog();
        let artifacts = render_pass(&catalog, &Selections::new()).unwrap();
        let tables = tables(&artifacts);
        assert_eq!(tables.len(), 2);
        for t in &tables {
            assert_eq!(t.title.as_deref(), Some("penguins"));
            assert_eq!(&t.frame, catalog.frame(BuiltinDataset::Penguins).unwrap());
        }
    }

    #[test]
    fn selected_planets_table_is_the_dataset_unmodified() {
        let catalog = catalog();
        let sel = Selections::new().with_choice(BOX_SELECT, "planets");
        let artifacts = render_pass(&catalog, &sel).unwrap();
        let planets_table = tables(&artifacts)[1];
        assert_eq!(planets_table.title.as_deref(), Some("planets"));
        assert_eq!(
            &planets_table.frame,
            catalog.frame(BuiltinDataset::Planets).unwrap()
        );
    }

    #[test]
    fn radio_and_box_switch_independently() {
        let catalog = catalog();
        let sel = Selections::new()
            .with_choice(RADIO_SELECT, "iris")
            .with_choice(BOX_SELECT, "planets");
        let artifacts = render_pass(&catalog, &sel).unwrap();
        let tables = tables(&artifacts);
        assert_eq!(tables[0].title.as_deref(), Some("iris"));
        assert_eq!(tables[1].title.as_deref(), Some("planets"));
    }

    #[test]
    fn anscombe_is_not_offered_by_the_switcher() {
        assert!(!radio_control().options.contains(&"anscombe".to_string()));
        // a stale anscombe choice clamps back to the first offering
        let sel = Selections::new().with_choice(RADIO_SELECT, "anscombe");
        let artifacts = render_pass(&catalog(), &sel).unwrap();
        assert_eq!(tables(&artifacts)[0].title.as_deref(), Some("penguins"));
    }

    #[test]
    fn pass_is_idempotent_for_a_fixed_snapshot() {
        let catalog = catalog();
        let sel = Selections::new().with_choice(RADIO_SELECT, "planets");
        assert_eq!(
            render_pass(&catalog, &sel).unwrap(),
            render_pass(&catalog, &sel).unwrap()
        );
    }
}
