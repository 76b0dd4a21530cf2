use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` that produces their own router `Link`s,
/// so `ui` never needs to know each platform's `Route` enum.
///
/// Each function receives the localized label and must return an element
/// that already contains it, e.g.:
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     manage_event: |label| rsx!( Link { class: "navbar__link", to: Route::ManageEvent {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder the navbar renders only its brand and the
/// locale switcher, and in-page links fall back to plain text.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub manage_event: fn(label: &str) -> Element,
}

/// Destinations the shared views can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    ManageEvent,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered; keeping the first one");
    }
}

/// Platform link to `target` labelled `label`, if the platform registered one.
pub fn nav_link(target: NavTarget, label: &str) -> Option<Element> {
    NAV_BUILDER.get().map(|builder| match target {
        NavTarget::Home => (builder.home)(label),
        NavTarget::ManageEvent => (builder.manage_event)(label),
    })
}

/// Locale shown in the switcher on first render: the shared language code
/// when the platform provides one, otherwise whatever the loader serves.
fn initial_locale(shared: Option<String>) -> String {
    shared.unwrap_or_else(i18n::current_language)
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(move || initial_locale(lang_code_ctx.map(|c| c.peek().clone())));
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    tracing::debug!(lang = %lang_marker, "AppNavbar render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, %err, "language switch failed"),
        }
    };

    let home = nav_link(NavTarget::Home, &t!("nav-home"));
    let manage = nav_link(NavTarget::ManageEvent, &t!("nav-manage-event"));

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps a reactive dependency on the language signal.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Eventdeck" }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    if let Some(link) = home {
                        {link}
                    }
                    if let Some(link) = manage {
                        {link}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switcher_starts_on_shared_language() {
        assert_eq!(initial_locale(Some("fi-FI".into())), "fi-FI");
    }

    #[test]
    fn switcher_without_shared_language_uses_loader() {
        let available = i18n::available_languages();
        assert!(available.contains(&initial_locale(None)));
    }
}
