//! Error panel shown when dataset parsing or a render pass aborts.

use dioxus::prelude::*;

const PANEL_STYLE: &str = "padding: 14px 18px; margin: 10px 0; background: #FDF3F4; \
    color: #8C2F39; border-left: 4px solid #B23A48; border-radius: 2px;";
const HINT_STYLE: &str = "margin-top: 6px; font-size: 13px; color: #A05C63;";

/// Which stage of an app run failed.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ErrorStage {
    /// The embedded CSV data could not be parsed on mount.
    DatasetLoad,
    /// A pass bailed partway through; no artifacts were committed.
    RenderPass,
}

impl ErrorStage {
    pub fn headline(self) -> &'static str {
        match self {
            ErrorStage::DatasetLoad => "Failed to load datasets",
            ErrorStage::RenderPass => "Render pass failed",
        }
    }

    /// Guidance under the message. Control values survive an aborted
    /// pass, so for pass errors a control change is enough to rerun.
    pub fn hint(self) -> &'static str {
        match self {
            ErrorStage::DatasetLoad => "Reload the page to parse the bundled data again.",
            ErrorStage::RenderPass => {
                "Your selections are kept; change any control to run the pass again."
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub stage: ErrorStage,
    /// What went wrong, as reported by the loader or the aborted pass.
    pub message: String,
}

/// Displays the failure headline, the underlying error, and a recovery
/// hint for the stage that failed.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: PANEL_STYLE,
            strong { "{props.stage.headline()}: " }
            "{props.message}"
            div { style: HINT_STYLE, "{props.stage.hint()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_failure_hint_points_at_the_controls() {
        assert_eq!(ErrorStage::RenderPass.headline(), "Render pass failed");
        assert!(ErrorStage::RenderPass.hint().contains("selections are kept"));
        assert!(ErrorStage::RenderPass.hint().contains("control"));
    }

    #[test]
    fn load_failure_hint_points_at_a_reload() {
        assert_eq!(ErrorStage::DatasetLoad.headline(), "Failed to load datasets");
        assert!(ErrorStage::DatasetLoad.hint().contains("Reload"));
    }
}
