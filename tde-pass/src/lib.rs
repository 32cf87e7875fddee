//! The selection-driven render pass shared by every explorer app.
//!
//! Each app's display logic is one pure function of
//! `(datasets, selections) -> Vec<Artifact>`, re-evaluated from the top
//! whenever the hosting UI reports a changed control value. Nothing is
//! cached between passes: control option sets, derived frames, and
//! chart payloads are all recomputed from the current dataset schema
//! and the current selection snapshot, so a stale selection can never
//! outlive a single pass.
//!
//! The hosting runtime (the Dioxus apps in this workspace) owns the
//! selection values across passes; this crate only reads a snapshot and
//! emits an ordered artifact list for the host to display.

mod artifact;
mod control;
pub mod options;

pub mod anscombe;
pub mod intro;
pub mod iris;
pub mod switcher;

pub use artifact::{
    Artifact, ChartArtifact, ChartKind, ChartSpec, PlotPoint, TableArtifact, TrendSegment,
};
pub use control::{Control, Selections, Toggle};
