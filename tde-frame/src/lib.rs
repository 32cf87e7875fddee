//! Immutable, column-typed data frames for the explorer apps.
//!
//! This crate provides the in-memory table model shared by every app:
//! - [`DataFrame`]: a fixed set of named columns, each numeric or
//!   categorical, with `None` for missing cells
//! - derived views (`filter_eq`, `select`, `drop_column`) that return
//!   fresh owned frames, never references into the parent
//! - summary statistics (`describe`, `corr`, grouped variants) and a
//!   least-squares fit used for chart trend lines
//!
//! Frames are never mutated after construction. Each render pass
//! recomputes whatever derived views it needs from the base frames and
//! discards them at the end of the pass.

mod frame;
mod stats;

pub use frame::{Column, ColumnData, DataFrame};
pub use stats::linear_fit;
