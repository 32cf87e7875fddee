//! Reusable Dioxus RSX components for the explorer apps.

mod app_header;
mod artifact_list;
mod chart_container;
mod checkbox_toggle;
mod data_table;
mod error_display;
mod loading_spinner;
mod markdown_block;
mod radio_group;
mod select_box;

pub use app_header::AppHeader;
pub use artifact_list::ArtifactList;
pub use chart_container::ChartContainer;
pub use checkbox_toggle::CheckboxToggle;
pub use data_table::DataTable;
pub use error_display::{ErrorDisplay, ErrorStage};
pub use loading_spinner::LoadingSpinner;
pub use markdown_block::MarkdownBlock;
pub use radio_group::RadioGroup;
pub use select_box::SelectBox;
