//! App header component with title and an optional subtitle line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AppHeaderProps {
    /// App title
    pub title: String,
    /// One-line description under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header shown at the top of every explorer app.
#[component]
pub fn AppHeader(props: AppHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
