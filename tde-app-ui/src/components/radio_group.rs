//! Radio button group bound to one control.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RadioGroupProps {
    /// Control id, used as the radio group name
    pub id: String,
    /// Prompt label shown above the group
    pub prompt: String,
    /// The option set computed for this pass
    pub options: Vec<String>,
    /// The resolved current choice
    pub selected: String,
    /// Fires with the newly chosen option value
    pub on_select: EventHandler<String>,
}

/// One radio button per option, horizontally laid out.
#[component]
pub fn RadioGroup(props: RadioGroupProps) -> Element {
    let RadioGroupProps {
        id,
        prompt,
        options,
        selected,
        on_select,
    } = props;

    let items = options.into_iter().map(|option_value| {
        let value = option_value.clone();
        let checked = option_value == selected;
        let name = id.clone();
        rsx! {
            label {
                style: "font-size: 14px;",
                input {
                    r#type: "radio",
                    name: "{name}",
                    value: "{option_value}",
                    checked: checked,
                    onchange: move |_| on_select.call(value.clone()),
                }
                " {option_value}"
            }
        }
    });

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "{prompt}"
            }
            div {
                style: "display: flex; gap: 16px;",
                {items}
            }
        }
    }
}
