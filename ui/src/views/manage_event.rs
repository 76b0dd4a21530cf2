use dioxus::prelude::*;

use crate::events::BasicEventInfo;

#[component]
pub fn ManageEvent() -> Element {
    // Re-render when the locale changes elsewhere (e.g. from the navbar).
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        // Hidden marker node retains reactive dependency on language signal.
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-manage-event",
            BasicEventInfo {}
        }
    }
}
