//! Dropdown selector bound to one control.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectBoxProps {
    /// Control id, used as the DOM id
    pub id: String,
    /// Prompt label shown next to the select
    pub prompt: String,
    /// The option set computed for this pass
    pub options: Vec<String>,
    /// The resolved current choice
    pub selected: String,
    /// Fires with the newly chosen option value
    pub on_select: EventHandler<String>,
}

/// A select box over a fixed option set.
///
/// The option list is a prop rather than component state: the pass
/// recomputes it every run, which is what keeps dependent option sets
/// (like the iris y-axis) fresh.
#[component]
pub fn SelectBox(props: SelectBoxProps) -> Element {
    let SelectBoxProps {
        id,
        prompt,
        options,
        selected,
        on_select,
    } = props;
    let on_change = move |evt: Event<FormData>| {
        on_select.call(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{prompt} "
            }
            select {
                id: "{id}",
                onchange: on_change,
                for option_value in options {
                    option {
                        value: "{option_value}",
                        selected: option_value == selected,
                        "{option_value}"
                    }
                }
            }
        }
    }
}
