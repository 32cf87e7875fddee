//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart renderer lives in `assets/js/*.js` and is evaluated
//! as globals (no ES modules) exposed via `window.*`. This module
//! embeds those scripts at compile time and provides safe Rust wrappers
//! that serialize chart payloads and call the globals.

use crate::chart_dom_id;
use tde_pass::Artifact;

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('TDE JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. To
/// ensure they become globally accessible (not block-scoped inside the
/// setInterval callback), they are evaluated at global scope via
/// indirect eval once D3 is ready and then explicitly promoted to
/// `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, SCATTER_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope.
    let store_js = format!(
        "window.__tdeChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__tdeChartsReady) { delete window.__tdeChartScripts; return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__tdeChartScripts);
                    delete window.__tdeChartScripts;
                    if (typeof renderTdeChart !== 'undefined') window.renderTdeChart = renderTdeChart;
                    if (typeof destroyTdeChart !== 'undefined') window.destroyTdeChart = destroyTdeChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__tdeChartsReady = true;
                    console.log('TDE charts initialized');
                }
            }, 50);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render one chart payload into the container with the given DOM id.
///
/// Defers until the chart scripts have finished their waitForD3 init.
pub fn render_chart(container_id: &str, payload_json: &str) {
    let code = format!(
        r#"
        (function() {{
            var draw = function() {{
                if (window.__tdeChartsReady && document.getElementById('{id}')) {{
                    window.renderTdeChart('{id}', {payload});
                }} else {{
                    setTimeout(draw, 50);
                }}
            }};
            draw();
        }})();
        "#,
        id = container_id,
        payload = payload_json,
    );
    call_js(&code);
}

/// Clear a previously rendered chart container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyTdeChart) window.destroyTdeChart('{}');",
        container_id
    ));
}

/// `(container id, payload)` pairs for the chart artifacts in a pass
/// output.
///
/// Ids follow [`chart_dom_id`] keyed by artifact position, matching the
/// containers the artifact list component emitted for the same pass.
pub fn chart_render_plan(prefix: &str, artifacts: &[Artifact]) -> Vec<(String, String)> {
    artifacts
        .iter()
        .enumerate()
        .filter_map(|(index, artifact)| match artifact {
            Artifact::Chart(chart) => Some((chart_dom_id(prefix, index), chart.payload_json())),
            _ => None,
        })
        .collect()
}

/// Render every chart artifact in the list into its container.
///
/// Containers keep their DOM ids across passes, so each one is torn
/// down before the new payload is drawn into it.
pub fn render_artifact_charts(prefix: &str, artifacts: &[Artifact]) {
    let plan = chart_render_plan(prefix, artifacts);
    for (container_id, payload) in &plan {
        destroy_chart(container_id);
        render_chart(container_id, payload);
    }
    log::info!("[TDE Debug] js_bridge: rendered {} charts", plan.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tde_frame::{Column, DataFrame};
    use tde_pass::{ChartArtifact, ChartSpec};

    fn chart_artifact() -> Artifact {
        let df = DataFrame::new(vec![
            Column::numeric("x", vec![1.0, 2.0]),
            Column::numeric("y", vec![3.0, 4.0]),
        ])
        .unwrap();
        Artifact::Chart(ChartArtifact::build(&df, "pair", ChartSpec::scatter("x", "y")).unwrap())
    }

    #[test]
    fn plan_keeps_artifact_positions_for_chart_ids() {
        let artifacts = vec![
            Artifact::Markdown("## heading".into()),
            chart_artifact(),
            Artifact::Markdown("prose".into()),
            chart_artifact(),
        ];
        let plan = chart_render_plan("demo", &artifacts);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].0, "demo-chart-1");
        assert_eq!(plan[1].0, "demo-chart-3");
        assert!(plan[0].1.contains("\"kind\""));
    }

    #[test]
    fn plan_is_empty_without_charts() {
        let artifacts = vec![Artifact::Markdown("only prose".into())];
        assert!(chart_render_plan("demo", &artifacts).is_empty());
    }
}
