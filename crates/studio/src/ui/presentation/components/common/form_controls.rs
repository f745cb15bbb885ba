//! Form controls shared by the tool pages

use copydeck_domain::ClosedEnum;
use dioxus::prelude::*;

/// Build `(wire value, display label)` pairs for a closed option enum,
/// in declaration order.
pub fn enum_options<T: ClosedEnum>() -> Vec<(String, String)> {
    T::ALL
        .iter()
        .map(|variant| (variant.as_str().to_string(), variant.label().to_string()))
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectFieldProps {
    pub label: String,
    /// Currently selected wire value
    pub value: String,
    /// `(wire value, display label)` pairs, typically from [`enum_options`]
    pub options: Vec<(String, String)>,
    pub onchange: EventHandler<String>,
}

#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let SelectFieldProps {
        label,
        value,
        options,
        onchange,
    } = props;

    rsx! {
        div { class: "form-field",
            label { class: "form-label", "{label}" }
            select {
                class: "form-control",
                value: "{value}",
                onchange: move |event| onchange.call(event.value()),
                for (wire, display) in options {
                    option {
                        value: "{wire}",
                        selected: wire == value,
                        "{display}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    pub oninput: EventHandler<String>,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let TextFieldProps {
        label,
        value,
        placeholder,
        oninput,
    } = props;

    rsx! {
        div { class: "form-field",
            label { class: "form-label", "{label}" }
            input {
                r#type: "text",
                class: "form-control",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |event| oninput.call(event.value()),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = 4)]
    pub rows: u32,
    pub oninput: EventHandler<String>,
}

#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    let TextAreaFieldProps {
        label,
        value,
        placeholder,
        rows,
        oninput,
    } = props;

    rsx! {
        div { class: "form-field",
            label { class: "form-label", "{label}" }
            textarea {
                class: "form-control",
                rows: "{rows}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |event| oninput.call(event.value()),
            }
        }
    }
}
