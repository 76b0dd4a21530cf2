use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    tracing::debug!(lang = %lang_current, "Home render");

    let cta_label = crate::t!("home-cta");
    let cta = nav_link(NavTarget::ManageEvent, &cta_label);

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__features",
                li { {crate::t!("home-feature-details")} }
                li { {crate::t!("home-feature-location")} }
                li { {crate::t!("home-feature-publish")} }
            }
            p { class: "page-home__cta",
                if let Some(link) = cta {
                    {link}
                } else {
                    "{cta_label}"
                }
            }
        }
    }
}
