//! Minimal markdown rendering for pass prose artifacts.
//!
//! The passes only emit `#`/`##`/`###` headings and plain paragraphs,
//! so a line-oriented renderer is all that is needed. Inline markup is
//! shown verbatim.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MarkdownBlockProps {
    pub source: String,
}

fn block_view(block: String) -> Element {
    if let Some(text) = block.strip_prefix("### ") {
        let text = text.to_string();
        rsx! { h4 { style: "margin: 8px 0 4px 0;", "{text}" } }
    } else if let Some(text) = block.strip_prefix("## ") {
        let text = text.to_string();
        rsx! { h3 { style: "margin: 10px 0 4px 0;", "{text}" } }
    } else if let Some(text) = block.strip_prefix("# ") {
        let text = text.to_string();
        rsx! { h2 { style: "margin: 12px 0 4px 0;", "{text}" } }
    } else {
        rsx! { p { style: "margin: 4px 0; font-size: 14px;", "{block}" } }
    }
}

/// Render one markdown artifact as headings and paragraphs.
#[component]
pub fn MarkdownBlock(props: MarkdownBlockProps) -> Element {
    // Blank lines separate blocks; within a paragraph, lines join with
    // a space.
    let blocks: Vec<String> = props
        .source
        .split("\n\n")
        .map(|b| b.trim().replace('\n', " "))
        .filter(|b| !b.is_empty())
        .collect();

    rsx! {
        div {
            style: "margin: 8px 0;",
            for block in blocks {
                {block_view(block)}
            }
        }
    }
}
