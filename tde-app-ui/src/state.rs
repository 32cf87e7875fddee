//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The control-value signals are the
//! host-owned Selection State: they persist across passes, and the pass
//! effect reads them through [`AppState::snapshot`], which is also what
//! subscribes the effect to changes.

use dioxus::prelude::*;
use tde_datasets::DatasetCatalog;
use tde_pass::{anscombe, iris, switcher, Artifact, Selections};

use crate::components::ErrorStage;

/// Shared application state for all explorer apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset catalog (None until the mount effect finishes)
    pub catalog: Signal<Option<DatasetCatalog>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// The failed stage and its error, if something went wrong
    pub error_msg: Signal<Option<(ErrorStage, String)>>,
    /// Artifacts produced by the most recent pass
    pub artifacts: Signal<Vec<Artifact>>,

    // Control values. Empty string means "not touched yet"; the pass
    // resolves an untouched control to its first option.
    /// Anscombe: which quartet group to display
    pub group_choice: Signal<String>,
    /// Anscombe: show per-group summary stats
    pub show_group_stats: Signal<bool>,
    /// Anscombe: show per-group correlation
    pub show_group_corr: Signal<bool>,
    /// Iris: x-axis column
    pub x_choice: Signal<String>,
    /// Iris: y-axis column
    pub y_choice: Signal<String>,
    /// Iris: color points by species
    pub color_by_species: Signal<bool>,
    /// Switcher: radio-selected dataset id
    pub radio_dataset: Signal<String>,
    /// Switcher: select-box dataset id
    pub box_dataset: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            catalog: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            artifacts: Signal::new(Vec::new()),
            group_choice: Signal::new(String::new()),
            show_group_stats: Signal::new(false),
            show_group_corr: Signal::new(false),
            x_choice: Signal::new(String::new()),
            y_choice: Signal::new(String::new()),
            color_by_species: Signal::new(false),
            radio_dataset: Signal::new(String::new()),
            box_dataset: Signal::new(String::new()),
        }
    }

    /// Snapshot every control signal into an immutable [`Selections`].
    ///
    /// Reading the signals here is what subscribes the calling effect
    /// to control changes, so the pass re-runs from the top whenever
    /// any value moves.
    pub fn snapshot(&self) -> Selections {
        let mut sel = Selections::new();
        let choices = [
            (anscombe::GROUP_SELECT, (self.group_choice)()),
            (iris::X_SELECT, (self.x_choice)()),
            (iris::Y_SELECT, (self.y_choice)()),
            (switcher::RADIO_SELECT, (self.radio_dataset)()),
            (switcher::BOX_SELECT, (self.box_dataset)()),
        ];
        for (id, value) in choices {
            if !value.is_empty() {
                sel.set_choice(id, &value);
            }
        }
        sel.set_toggle(anscombe::GROUP_STATS_TOGGLE, (self.show_group_stats)());
        sel.set_toggle(anscombe::GROUP_CORR_TOGGLE, (self.show_group_corr)());
        sel.set_toggle(iris::COLOR_TOGGLE, (self.color_by_species)());
        sel
    }
}
