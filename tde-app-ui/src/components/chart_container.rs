//! Target div the deferred D3 draw renders into.

use dioxus::prelude::*;

const FRAME_STYLE: &str = "position: relative; width: 100%; margin: 8px 0;";
const PLACEHOLDER_STYLE: &str = "position: absolute; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); color: #B0BEC5; font-size: 13px;";

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the chart renderer looks up.
    pub id: String,
    /// Chart caption, shown in the placeholder so the slot is
    /// identifiable before the draw lands.
    #[props(default)]
    pub title: Option<String>,
    #[props(default = 340)]
    pub min_height: u32,
}

/// Reserves layout space for one chart artifact.
///
/// The draw is deferred until the chart scripts finish loading, so the
/// container starts out with a placeholder note. The renderer clears
/// the container's children before drawing, which removes it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let placeholder = match &props.title {
        Some(t) => format!("Drawing {}...", t),
        None => String::from("Drawing chart..."),
    };

    rsx! {
        div {
            style: "min-height: {props.min_height}px; {FRAME_STYLE}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
                span { style: PLACEHOLDER_STYLE, "{placeholder}" }
            }
        }
    }
}
