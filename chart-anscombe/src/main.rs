//! Anscombe Quartet Explorer
//!
//! The full scripted walkthrough over Anscombe's quartet: the group I
//! table and charts, facet charts over all four groups, summary stats
//! and correlation tables with per-group checkboxes, and a select box
//! that filters the displayed group.
//!
//! Data flow:
//! 1. `tde-datasets` embeds the quartet CSV and parses it on mount.
//! 2. Every control change re-runs the pure `anscombe::render_pass`
//!    from the top with a fresh selection snapshot.
//! 3. Table and prose artifacts render as RSX; chart artifacts are
//!    drawn into their containers by D3 via `js_bridge`.

use dioxus::prelude::*;
use tde_app_ui::components::{
    AppHeader, ArtifactList, CheckboxToggle, ErrorDisplay, ErrorStage, LoadingSpinner, SelectBox,
};
use tde_app_ui::js_bridge;
use tde_app_ui::state::AppState;
use tde_datasets::{BuiltinDataset, DatasetCatalog};
use tde_pass::anscombe;

/// Prefix for this app's chart container DOM ids.
const APP_ID: &str = "chart-anscombe";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("chart-anscombe-root"))
        .launch(App);
}

/// Control panel: the two stats checkboxes and the group select box.
fn controls_view(mut state: AppState) -> Element {
    let catalog = state.catalog.read();
    let Some(catalog) = catalog.as_ref() else {
        return rsx! {};
    };
    let (options, selected) = match catalog
        .frame(BuiltinDataset::Anscombe)
        .and_then(anscombe::group_control)
        .and_then(|ctl| {
            let resolved = ctl.resolve(&state.snapshot())?;
            Ok((ctl.options, resolved))
        }) {
        Ok(pair) => pair,
        Err(e) => {
            log::warn!("Group control unavailable: {}", e);
            return rsx! {};
        }
    };

    let stats_toggle = anscombe::group_stats_toggle();
    let corr_toggle = anscombe::group_corr_toggle();

    rsx! {
        div {
            style: "display: flex; gap: 24px; align-items: center; flex-wrap: wrap; padding: 4px 8px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            CheckboxToggle {
                id: stats_toggle.id.to_string(),
                prompt: stats_toggle.prompt.to_string(),
                checked: (state.show_group_stats)(),
                on_toggle: move |v| state.show_group_stats.set(v),
            }
            CheckboxToggle {
                id: corr_toggle.id.to_string(),
                prompt: corr_toggle.prompt.to_string(),
                checked: (state.show_group_corr)(),
                on_toggle: move |v| state.show_group_corr.set(v),
            }
            SelectBox {
                id: anscombe::GROUP_SELECT.to_string(),
                prompt: "Which dataset do you want to display below?".to_string(),
                options: options,
                selected: selected,
                on_select: move |v| state.group_choice.set(v),
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

    // Re-run the whole pass whenever any control value changes
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
        let result = catalog
            .frame(BuiltinDataset::Anscombe)
            .and_then(|frame| anscombe::render_pass(frame, &selections));
        match result {
            Ok(artifacts) => {
                log::info!(
                    "[TDE Debug] chart-anscombe: pass emitted {} artifacts",
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

    // Draw chart artifacts after their containers commit
    use_effect(move || {
        let artifacts = (state.artifacts)();
        if artifacts.is_empty() {
            return;
        }
        js_bridge::init_charts();
        js_bridge::render_artifact_charts(APP_ID, &artifacts);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            AppHeader {
                title: "Anscombe Quartet Explorer".to_string(),
                subtitle: "Four data sets with near-identical summary statistics and very different shapes.".to_string(),
            }

            if let Some((stage, message)) = (state.error_msg)() {
                ErrorDisplay { stage, message }
            } else if (state.loading)() {
                LoadingSpinner { label: "Parsing the Anscombe quartet...".to_string() }
            } else {
                {controls_view(state)}
                ArtifactList {
                    artifacts: (state.artifacts)(),
                    id_prefix: APP_ID.to_string(),
                }
            }
        }
    }
}
