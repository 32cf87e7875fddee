//! Iris Scatter Explorer
//!
//! Lets the user pick the x and y variables for a scatter plot over the
//! iris measurements and toggle coloring by species. The y-axis option
//! set excludes whichever column x currently claims, and both sets are
//! recomputed on every pass, so moving x onto the current y heals
//! itself on the next pass instead of plotting a column against itself.

use dioxus::prelude::*;
use tde_app_ui::components::{
    AppHeader, ArtifactList, CheckboxToggle, ErrorDisplay, ErrorStage, LoadingSpinner, SelectBox,
};
use tde_app_ui::js_bridge;
use tde_app_ui::state::AppState;
use tde_datasets::{BuiltinDataset, DatasetCatalog};
use tde_pass::iris;
use wasm_bindgen::JsValue;

/// Prefix for this app's chart container DOM ids.
const APP_ID: &str = "chart-iris";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("chart-iris-root"))
        .launch(App);
}

/// Sidebar controls: x select, dependent y select, color checkbox.
fn controls_view(mut state: AppState) -> Element {
    let catalog = state.catalog.read();
    let Some(catalog) = catalog.as_ref() else {
        return rsx! {};
    };
    let resolved = catalog.frame(BuiltinDataset::Iris).and_then(|frame| {
        let selections = state.snapshot();
        let x_ctl = iris::x_control(frame);
        let x = x_ctl.resolve(&selections)?;
        let y_ctl = iris::y_control(frame, &x);
        let y = y_ctl.resolve(&selections)?;
        Ok((x_ctl, x, y_ctl, y))
    });
    let (x_ctl, x, y_ctl, y) = match resolved {
        Ok(r) => r,
        Err(e) => {
            log::warn!("Axis controls unavailable: {}", e);
            return rsx! {};
        }
    };
    let color_toggle = iris::color_toggle();

    rsx! {
        div {
            style: "min-width: 220px; padding: 8px 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            SelectBox {
                id: x_ctl.id.to_string(),
                prompt: x_ctl.prompt.to_string(),
                options: x_ctl.options.clone(),
                selected: x,
                on_select: move |v: String| {
                    web_sys::console::log_1(&JsValue::from_str(&format!(
                        "[TDE Debug] chart-iris: x-axis -> {}",
                        v
                    )));
                    state.x_choice.set(v);
                },
            }
            SelectBox {
                id: y_ctl.id.to_string(),
                prompt: y_ctl.prompt.to_string(),
                options: y_ctl.options.clone(),
                selected: y,
                on_select: move |v| state.y_choice.set(v),
            }
            CheckboxToggle {
                id: color_toggle.id.to_string(),
                prompt: color_toggle.prompt.to_string(),
                checked: (state.color_by_species)(),
                on_toggle: move |v| state.color_by_species.set(v),
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
            .frame(BuiltinDataset::Iris)
            .and_then(|frame| iris::render_pass(frame, &selections));
        match result {
            Ok(artifacts) => state.artifacts.set(artifacts),
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
                title: "Iris Explore".to_string(),
                subtitle: "Pick the scatter axes; optionally color the points by species.".to_string(),
            }

            if let Some((stage, message)) = (state.error_msg)() {
                ErrorDisplay { stage, message }
            } else if (state.loading)() {
                LoadingSpinner { label: "Parsing iris measurements...".to_string() }
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",
                    {controls_view(state)}
                    div {
                        style: "flex: 1;",
                        ArtifactList {
                            artifacts: (state.artifacts)(),
                            id_prefix: APP_ID.to_string(),
                        }
                    }
                }
            }
        }
    }
}
