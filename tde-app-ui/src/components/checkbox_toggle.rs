//! Checkbox bound to one boolean toggle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxToggleProps {
    /// Toggle id, used as the DOM id
    pub id: String,
    /// Prompt label shown next to the checkbox
    pub prompt: String,
    /// Current value
    pub checked: bool,
    /// Fires with the new value
    pub on_toggle: EventHandler<bool>,
}

/// A labelled checkbox.
#[component]
pub fn CheckboxToggle(props: CheckboxToggleProps) -> Element {
    let CheckboxToggleProps {
        id,
        prompt,
        checked,
        on_toggle,
    } = props;
    let on_change = move |evt: Event<FormData>| {
        on_toggle.call(evt.checked());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{id}",
                style: "font-size: 14px;",
                input {
                    id: "{id}",
                    r#type: "checkbox",
                    checked: checked,
                    onchange: on_change,
                }
                " {prompt}"
            }
        }
    }
}
