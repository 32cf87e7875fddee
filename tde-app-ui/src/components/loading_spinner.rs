//! Inline progress note covering the embedded-CSV parse window on mount.

use dioxus::prelude::*;

const SPINNER_STYLE: &str = "display: flex; justify-content: center; align-items: center; \
    gap: 8px; padding: 48px 0; color: #78909C; font-size: 14px;";
const DOT_STYLE: &str = "width: 8px; height: 8px; border-radius: 50%; background: #90A4AE;";

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Which datasets the app is waiting on.
    #[props(default = String::from("Parsing bundled datasets..."))]
    pub label: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: SPINNER_STYLE,
            span { style: DOT_STYLE }
            "{props.label}"
        }
    }
}
