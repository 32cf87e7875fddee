//! Render a pass's artifact list in emission order.

use crate::chart_dom_id;
use crate::components::{ChartContainer, DataTable, MarkdownBlock};
use dioxus::prelude::*;
use tde_pass::Artifact;

#[derive(Props, Clone, PartialEq)]
pub struct ArtifactListProps {
    /// Artifacts from the most recent pass
    pub artifacts: Vec<Artifact>,
    /// Prefix for chart container DOM ids, unique per app
    pub id_prefix: String,
}

fn artifact_view(prefix: &str, index: usize, artifact: &Artifact) -> Element {
    match artifact {
        Artifact::Markdown(source) => rsx! {
            MarkdownBlock { source: source.clone() }
        },
        Artifact::Table(table) => rsx! {
            DataTable { title: table.title.clone(), frame: table.frame.clone() }
        },
        Artifact::Chart(chart) => rsx! {
            ChartContainer {
                id: chart_dom_id(prefix, index),
                title: Some(chart.title.clone()),
            }
        },
    }
}

/// The ordered display artifacts of one pass.
///
/// Chart containers are emitted empty; the hosting app draws into them
/// through `js_bridge::render_artifact_charts` with the same id prefix
/// after the DOM commits.
#[component]
pub fn ArtifactList(props: ArtifactListProps) -> Element {
    rsx! {
        div {
            for (index, artifact) in props.artifacts.iter().enumerate() {
                {artifact_view(&props.id_prefix, index, artifact)}
            }
        }
    }
}
