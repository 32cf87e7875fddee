//! Dataset Switcher
//!
//! Demonstrates two ways to let the user swap the displayed dataset
//! among penguins, iris, and planets: branching on a radio value, and
//! using a select-box value as a catalog key. Both tables show the
//! chosen dataset unmodified.

use dioxus::prelude::*;
use tde_app_ui::components::{
    AppHeader, ArtifactList, ErrorDisplay, ErrorStage, LoadingSpinner, RadioGroup, SelectBox,
};
use tde_app_ui::state::AppState;
use tde_datasets::DatasetCatalog;
use tde_pass::switcher;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("table-dataset-switch-root"))
        .launch(App);
}

/// The two dataset pickers.
fn controls_view(mut state: AppState) -> Element {
    let selections = state.snapshot();
    let radio = switcher::radio_control();
    let select = switcher::box_control();
    let (radio_selected, box_selected) =
        match (radio.resolve(&selections), select.resolve(&selections)) {
            (Ok(r), Ok(b)) => (r, b),
            (r, b) => {
                log::warn!("Dataset controls unavailable: {:?} / {:?}", r.err(), b.err());
                return rsx! {};
            }
        };

    rsx! {
        div {
            style: "display: flex; gap: 32px; align-items: flex-start; flex-wrap: wrap; padding: 4px 8px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            RadioGroup {
                id: radio.id.to_string(),
                prompt: radio.prompt.to_string(),
                options: radio.options.clone(),
                selected: radio_selected,
                on_select: move |v| state.radio_dataset.set(v),
            }
            SelectBox {
                id: select.id.to_string(),
                prompt: select.prompt.to_string(),
                options: select.options.clone(),
                selected: box_selected,
                on_select: move |v| state.box_dataset.set(v),
            }
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded datasets on mount
    use_effect(move || match DatasetCatalog::load_all() {
        Ok(catalog) => {
            state.catalog.set(Some(catalog));
            state.loading.set(false);
        }
        Err(e) => {
            log::error!("Failed to load datasets: {}", e);
            state
                .error_msg
                .set(Some((ErrorStage::DatasetLoad, e.to_string())));
            state.loading.set(false);
        }
    });

    // Re-run the whole pass whenever either picker changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }
        let selections = state.snapshot();
        let catalog = state.catalog.read();
        let Some(catalog) = catalog.as_ref() else {
            return;
        };
        match switcher::render_pass(catalog, &selections) {
            Ok(artifacts) => {
                log::info!(
                    "[TDE Debug] table-dataset-switch: pass emitted {} artifacts",
                    artifacts.len()
                );
                state.artifacts.set(artifacts);
            }
            Err(e) => {
                log::error!("Render pass failed: {}", e);
                state.error_msg.set(Some((ErrorStage::RenderPass, e.to_string())));
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            AppHeader {
                title: "Dataset Switcher".to_string(),
                subtitle: "Swap the displayed dataset via radio buttons or a select box.".to_string(),
            }

            if let Some((stage, message)) = (state.error_msg)() {
                ErrorDisplay { stage, message }
            } else if (state.loading)() {
                LoadingSpinner { label: "Parsing penguins, iris and planets...".to_string() }
            } else {
                {controls_view(state)}
                ArtifactList {
                    artifacts: (state.artifacts)(),
                    id_prefix: "table-dataset-switch".to_string(),
                }
            }
        }
    }
}
