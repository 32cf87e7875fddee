//! Bundled example datasets for the explorer apps.
//!
//! The four CSV fixtures live under `data/` and are embedded into the
//! binary with `include_str!`, so the apps carry their data with them
//! and loading is pure in-memory parsing with no I/O at runtime.
//!
//! - `anscombe`: Anscombe's quartet, 44 rows, groups I-IV
//! - `iris`: the R iris measurements, 150 rows, 4 numeric + Species
//! - `penguins`: Palmer penguins excerpt, includes missing cells
//! - `planets`: exoplanet discoveries excerpt, heavily gappy by design
//!
//! Column types are inferred while parsing: a column whose non-empty
//! cells all parse as floats is numeric, anything else is categorical.
//! Empty cells become missing values in either case.

mod loader;

pub use loader::load_csv;

use anyhow::anyhow;
use tde_frame::DataFrame;

const ANSCOMBE_CSV: &str = include_str!("../data/anscombe.csv");
const IRIS_CSV: &str = include_str!("../data/iris.csv");
const PENGUINS_CSV: &str = include_str!("../data/penguins.csv");
const PLANETS_CSV: &str = include_str!("../data/planets.csv");

/// The datasets shipped with the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinDataset {
    Anscombe,
    Iris,
    Penguins,
    Planets,
}

impl BuiltinDataset {
    pub const ALL: [BuiltinDataset; 4] = [
        BuiltinDataset::Anscombe,
        BuiltinDataset::Iris,
        BuiltinDataset::Penguins,
        BuiltinDataset::Planets,
    ];

    /// Stable identifier used as control option values.
    pub fn id(&self) -> &'static str {
        match self {
            BuiltinDataset::Anscombe => "anscombe",
            BuiltinDataset::Iris => "iris",
            BuiltinDataset::Penguins => "penguins",
            BuiltinDataset::Planets => "planets",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BuiltinDataset::Anscombe => "Anscombe's quartet",
            BuiltinDataset::Iris => "Iris measurements",
            BuiltinDataset::Penguins => "Palmer penguins",
            BuiltinDataset::Planets => "Exoplanet discoveries",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.id() == id)
    }

    fn csv(&self) -> &'static str {
        match self {
            BuiltinDataset::Anscombe => ANSCOMBE_CSV,
            BuiltinDataset::Iris => IRIS_CSV,
            BuiltinDataset::Penguins => PENGUINS_CSV,
            BuiltinDataset::Planets => PLANETS_CSV,
        }
    }

    /// Parse the embedded CSV into a frame.
    pub fn load(&self) -> anyhow::Result<DataFrame> {
        let frame = load_csv(self.csv())?;
        log::info!(
            "[TDE Debug] datasets: loaded '{}' ({} rows x {} cols)",
            self.id(),
            frame.n_rows(),
            frame.n_cols()
        );
        Ok(frame)
    }
}

/// All builtin datasets loaded once, keyed by id.
///
/// Entries keep the declaration order of [`BuiltinDataset::ALL`] so
/// control option lists derived from the catalog are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetCatalog {
    entries: Vec<(BuiltinDataset, DataFrame)>,
}

impl DatasetCatalog {
    pub fn load_all() -> anyhow::Result<Self> {
        let entries = BuiltinDataset::ALL
            .iter()
            .map(|d| Ok((*d, d.load()?)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&DataFrame> {
        self.entries
            .iter()
            .find(|(d, _)| d.id() == id)
            .map(|(_, f)| f)
    }

    pub fn frame(&self, dataset: BuiltinDataset) -> anyhow::Result<&DataFrame> {
        self.get(dataset.id())
            .ok_or_else(|| anyhow!("dataset '{}' missing from catalog", dataset.id()))
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(d, _)| d.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anscombe_has_four_groups_of_eleven() {
        let df = BuiltinDataset::Anscombe.load().unwrap();
        assert_eq!(df.n_rows(), 44);
        assert_eq!(df.column_names(), vec!["dataset", "x", "y"]);
        for group in ["I", "II", "III", "IV"] {
            assert_eq!(df.filter_eq("dataset", group).unwrap().n_rows(), 11);
        }
    }

    #[test]
    fn iris_schema_matches_r_dataset() {
        let df = BuiltinDataset::Iris.load().unwrap();
        assert_eq!(df.n_rows(), 150);
        assert_eq!(
            df.numeric_column_names(),
            vec!["Sepal.Length", "Sepal.Width", "Petal.Length", "Petal.Width"]
        );
        assert_eq!(df.categorical_column_names(), vec!["Species"]);
        assert_eq!(
            df.unique("Species").unwrap(),
            vec!["setosa", "versicolor", "virginica"]
        );
    }

    #[test]
    fn penguins_keeps_missing_cells() {
        let df = BuiltinDataset::Penguins.load().unwrap();
        // row 3 of the source data is all-missing apart from species/island
        let bills = df.numeric_values("bill_length_mm").unwrap();
        assert!(bills.contains(&None));
        let sexes = df.categorical_values("sex").unwrap();
        assert!(sexes.contains(&None));
    }

    #[test]
    fn planets_numeric_columns_include_year() {
        let df = BuiltinDataset::Planets.load().unwrap();
        assert_eq!(
            df.numeric_column_names(),
            vec!["number", "orbital_period", "mass", "distance", "year"]
        );
        assert_eq!(df.categorical_column_names(), vec!["method"]);
    }

    #[test]
    fn catalog_resolves_ids_in_declaration_order() {
        let catalog = DatasetCatalog::load_all().unwrap();
        assert_eq!(catalog.ids(), vec!["anscombe", "iris", "penguins", "planets"]);
        assert!(catalog.get("planets").is_some());
        assert!(catalog.get("mtcars").is_none());
    }

    #[test]
    fn from_id_round_trips() {
        for d in BuiltinDataset::ALL {
            assert_eq!(BuiltinDataset::from_id(d.id()), Some(d));
        }
        assert_eq!(BuiltinDataset::from_id(""), None);
    }
}
