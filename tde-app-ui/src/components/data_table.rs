//! HTML table renderer for frame artifacts.

use dioxus::prelude::*;
use tde_frame::DataFrame;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// Optional caption above the table
    #[props(default = None)]
    pub title: Option<String>,
    /// The frame to display
    pub frame: DataFrame,
}

/// Render a frame as a row/column grid.
///
/// Numeric cells are shown to at most six significant digits; missing
/// cells render as empty. The whole frame is rendered, so callers are
/// expected to hand over the small frames these apps work with.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let headers = props.frame.column_names();
    let n_rows = props.frame.n_rows();

    let cell_style = "border: 1px solid #E0E0E0; padding: 3px 8px; font-size: 13px;";
    let rows: Vec<Vec<String>> = (0..n_rows)
        .map(|row| {
            props
                .frame
                .columns()
                .iter()
                .map(|col| format_cell(&col.cell_text(row)))
                .collect()
        })
        .collect();

    rsx! {
        div {
            style: "margin: 8px 0; overflow-x: auto;",
            if let Some(title) = props.title {
                div {
                    style: "font-weight: bold; font-size: 13px; margin-bottom: 4px;",
                    "{title}"
                }
            }
            table {
                style: "border-collapse: collapse;",
                thead {
                    tr {
                        for header in headers {
                            th {
                                style: "{cell_style} background: #F5F5F5; text-align: left;",
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    for cells in rows {
                        tr {
                            for cell in cells {
                                td { style: "{cell_style}", "{cell}" }
                            }
                        }
                    }
                }
            }
            div {
                style: "font-size: 11px; color: #999; margin-top: 2px;",
                "{n_rows} rows"
            }
        }
    }
}

/// Shorten long fractional values for display.
fn format_cell(text: &str) -> String {
    match text.parse::<f64>() {
        Ok(v) if text.contains('.') && text.len() > 8 => format!("{:.4}", v),
        _ => text.to_string(),
    }
}
