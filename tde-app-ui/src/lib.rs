//! Shared Dioxus components and D3.js bridge for the explorer apps.
//!
//! This crate provides:
//! - `state`: reactive `AppState` with Dioxus Signals, one field per
//!   control across all apps, plus the pass-snapshot conversion
//! - `components`: reusable RSX components (controls, tables, chart
//!   containers, artifact list)
//! - `js_bridge`: Rust wrappers for the D3.js chart renderer via
//!   `js_sys::eval()`

pub mod components;
pub mod js_bridge;
pub mod state;

/// DOM id for the chart container of artifact `index`.
///
/// Shared by the artifact list renderer and the JS bridge so the D3
/// renderer always finds the container the list emitted.
pub fn chart_dom_id(prefix: &str, index: usize) -> String {
    format!("{}-chart-{}", prefix, index)
}
