//! Intro Walkthrough
//!
//! The smallest explorer app: a few markdown blocks and one constructed
//! data frame, no controls. One render pass on mount is all that ever
//! happens; the app mostly demonstrates the artifact plumbing the other
//! apps build on.

use dioxus::prelude::*;
use tde_app_ui::components::{AppHeader, ArtifactList, ErrorDisplay, ErrorStage};
use tde_app_ui::state::AppState;
use tde_pass::intro;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("table-intro-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // The pass has no inputs, so it runs once on mount.
    use_effect(move || {
        match intro::render_pass() {
            Ok(artifacts) => {
                log::info!("[TDE Debug] table-intro: pass emitted {} artifacts", artifacts.len());
                state.artifacts.set(artifacts);
            }
            Err(e) => {
                log::error!("Render pass failed: {}", e);
                state.error_msg.set(Some((ErrorStage::RenderPass, e.to_string())));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            AppHeader {
                title: "Intro Walkthrough".to_string(),
                subtitle: "A minimal scripted page: prose plus one table.".to_string(),
            }

            if let Some((stage, message)) = (state.error_msg)() {
                ErrorDisplay { stage, message }
            } else {
                ArtifactList {
                    artifacts: (state.artifacts)(),
                    id_prefix: "table-intro".to_string(),
                }
            }
        }
    }
}
