use dioxus::prelude::*;

/// Decorative glyph shown in front of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIcon {
    Location,
    Link,
}

impl FieldIcon {
    fn glyph(self) -> &'static str {
        match self {
            FieldIcon::Location => "📍",
            FieldIcon::Link => "🔗",
        }
    }
}

/// Virtual keyboard hint for touch devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyboardHint {
    #[default]
    Text,
    Numeric,
    Url,
}

impl KeyboardHint {
    fn input_mode(self) -> &'static str {
        match self {
            KeyboardHint::Text => "text",
            KeyboardHint::Numeric => "numeric",
            KeyboardHint::Url => "url",
        }
    }
}

/// Single- or multi-line text input. The value is owned by the caller;
/// every keystroke is reported through `on_change`.
#[component]
pub fn TextField(
    placeholder: String,
    value: String,
    on_change: EventHandler<String>,
    #[props(default)] multiline: bool,
    height: Option<u32>,
    leading_icon: Option<FieldIcon>,
    #[props(default)] keyboard: KeyboardHint,
    #[props(default = true)] auto_capitalize: bool,
) -> Element {
    let class = if leading_icon.is_some() {
        "text-field text-field--with-icon"
    } else {
        "text-field"
    };
    let size_style = height
        .map(|px| format!("height: {px}px;"))
        .unwrap_or_default();
    let capitalize = if auto_capitalize { "sentences" } else { "none" };
    let input_mode = keyboard.input_mode();

    rsx! {
        div { class: "{class}",
            if let Some(icon) = leading_icon {
                span { class: "text-field__icon", aria_hidden: "true", "{icon.glyph()}" }
            }
            if multiline {
                textarea {
                    class: "text-field__control text-field__control--multiline",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    style: "{size_style}",
                    "autocapitalize": "{capitalize}",
                    oninput: move |evt: FormEvent| on_change.call(evt.value()),
                }
            } else {
                input {
                    class: "text-field__control",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    style: "{size_style}",
                    "inputmode": "{input_mode}",
                    "autocapitalize": "{capitalize}",
                    oninput: move |evt: FormEvent| on_change.call(evt.value()),
                }
            }
        }
    }
}
