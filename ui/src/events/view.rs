use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::components::event_map::EventMap;
use crate::components::text_field::{FieldIcon, KeyboardHint, TextField};
use crate::t;

use super::actions::{DraftAction, SinkHandle};
use super::draft::{location_fields, DraftField, DraftPatch, EventDraft, EventType, LocationField};
use super::form::FormState;
use super::tabs::{FormTab, TabContent};

/// "Basic information" editor: title, description, schedule, capacity and
/// location of an event draft.
///
/// Preview / save / publish buttons forward the draft to the `SinkHandle`
/// found in context (logging sink when none is provided).
#[component]
pub fn BasicEventInfo() -> Element {
    let mut form = use_signal(FormState::new);
    let provided_sink = try_use_context::<SinkHandle>();
    let sink = use_signal(move || provided_sink.unwrap_or_default());

    // Subscribe to the shared language code so labels re-render in place;
    // the draft signal survives a locale switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let state = form();
    let active_tab = state.active_tab();

    let back_label = t!("manage-back");
    let back = nav_link(NavTarget::Home, &back_label);

    rsx! {
        div { class: "manage-event", "data-lang": "{lang_marker}",
            header { class: "manage-event__header",
                div { class: "manage-event__heading",
                    div { class: "manage-event__back",
                        if let Some(link) = back {
                            {link}
                        } else {
                            span { "{back_label}" }
                        }
                    }

                    div { class: "manage-event__tabs", role: "tablist",
                        for tab in FormTab::ALL {
                            button {
                                key: "{tab.index()}",
                                r#type: "button",
                                role: "tab",
                                class: tab_class(tab == active_tab),
                                aria_selected: tab == active_tab,
                                onclick: move |_| form.with_mut(|state| state.select_tab(tab)),
                                {tab_label(tab)}
                            }
                        }
                    }
                }

                div { class: "manage-event__actions",
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| dispatch(form, sink, DraftAction::Preview),
                        span { class: "button__icon", aria_hidden: "true", "👁" }
                        {t!("action-preview")}
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| dispatch(form, sink, DraftAction::SaveDraft),
                        span { class: "button__icon", aria_hidden: "true", "💾" }
                        {t!("action-save-draft")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| dispatch(form, sink, DraftAction::Publish),
                        {t!("action-publish")}
                    }
                }
            }

            match state.content() {
                TabContent::EventDetails => rsx! {
                    {basic_information_card(form, state.draft())}
                    {location_card(form, sink, state.draft())}
                },
                TabContent::NotYetImplemented(tab) => rsx! {
                    section { class: "card card--placeholder",
                        h2 { class: "card__title", {tab_label(tab)} }
                        p { class: "card__placeholder", {t!("tab-not-ready")} }
                    }
                },
            }
        }
    }
}

fn basic_information_card(form: Signal<FormState>, draft: &EventDraft) -> Element {
    rsx! {
        section { class: "card",
            h2 { class: "card__title", {t!("section-basic-information")} }

            div { class: "field",
                label { class: "field__label", {t!("field-title")} }
                TextField {
                    placeholder: t!("field-title-placeholder"),
                    value: draft.title.clone(),
                    on_change: text_handler(form, DraftField::Title),
                }
            }

            div { class: "field",
                label { class: "field__label", {t!("field-description")} }
                TextField {
                    placeholder: t!("field-description-placeholder"),
                    value: draft.description.clone(),
                    on_change: text_handler(form, DraftField::Description),
                    multiline: true,
                    height: 140,
                }
            }

            div { class: "field-row",
                div { class: "field field-row__item",
                    label { class: "field__label", {t!("field-date-time")} }
                    TextField {
                        placeholder: t!("field-date-time-placeholder"),
                        value: draft.date_time.clone(),
                        on_change: text_handler(form, DraftField::DateTime),
                    }
                }
                div { class: "field field-row__item",
                    label { class: "field__label", {t!("field-capacity")} }
                    TextField {
                        placeholder: t!("field-capacity-placeholder"),
                        value: draft.capacity.clone(),
                        on_change: text_handler(form, DraftField::Capacity),
                        keyboard: KeyboardHint::Numeric,
                    }
                }
            }
        }
    }
}

fn location_card(mut form: Signal<FormState>, sink: Signal<SinkHandle>, draft: &EventDraft) -> Element {
    let is_venue = draft.is_venue();
    let is_online = !is_venue;
    let fields = location_fields(draft.event_type);

    rsx! {
        section { class: "card",
            h2 { class: "card__title", {t!("section-location")} }

            div { class: "field",
                span { class: "field__label", {t!("field-event-type")} }
                span { class: "field__helper", {t!("field-event-type-helper")} }

                div { class: "event-type", role: "radiogroup",
                    button {
                        r#type: "button",
                        role: "radio",
                        class: event_type_class(is_venue),
                        aria_checked: is_venue,
                        onclick: move |_| form.with_mut(|state| state.set_event_type(EventType::Venue)),
                        span { class: radio_class(is_venue) }
                        span { class: "event-type__text",
                            span { class: "event-type__title", {t!("event-type-venue")} }
                            span { class: "event-type__subtitle", {t!("event-type-venue-subtitle")} }
                        }
                    }
                    button {
                        r#type: "button",
                        role: "radio",
                        class: event_type_class(is_online),
                        aria_checked: is_online,
                        onclick: move |_| form.with_mut(|state| state.set_event_type(EventType::Online)),
                        span { class: radio_class(is_online) }
                        span { class: "event-type__text",
                            span { class: "event-type__title", {t!("event-type-online")} }
                            span { class: "event-type__subtitle", {t!("event-type-online-subtitle")} }
                        }
                    }
                }
            }

            for field in fields.iter().copied() {
                {location_field(form, draft, field)}
            }

            div { class: "manage-event__footer-actions",
                div { class: "manage-event__footer-secondary",
                    button {
                        r#type: "button",
                        class: "button button--small",
                        onclick: move |_| dispatch(form, sink, DraftAction::Preview),
                        {t!("action-preview")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--small",
                        onclick: move |_| dispatch(form, sink, DraftAction::SaveDraft),
                        {t!("action-save-draft-short")}
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--small button--accent",
                    onclick: move |_| dispatch(form, sink, DraftAction::SaveChanges),
                    {t!("action-save-changes")}
                }
            }
        }
    }
}

fn location_field(form: Signal<FormState>, draft: &EventDraft, field: LocationField) -> Element {
    match field {
        LocationField::VenueName => rsx! {
            div { class: "field",
                label { class: "field__label", {t!("field-venue-name")} }
                TextField {
                    placeholder: t!("field-venue-name-placeholder"),
                    value: draft.venue_name.clone(),
                    on_change: text_handler(form, DraftField::VenueName),
                }
            }
        },
        LocationField::Address => rsx! {
            div { class: "field",
                label { class: "field__label", {t!("field-address")} }
                TextField {
                    placeholder: t!("field-address-placeholder"),
                    value: draft.address.clone(),
                    on_change: text_handler(form, DraftField::Address),
                    leading_icon: FieldIcon::Location,
                }
            }
        },
        LocationField::Map => {
            let address = draft.address.clone();
            rsx! {
                div { class: "manage-event__map",
                    EventMap { address }
                }
            }
        }
        LocationField::MeetingLink => rsx! {
            div { class: "field",
                label { class: "field__label", {t!("field-meeting-link")} }
                TextField {
                    placeholder: t!("field-meeting-link-placeholder"),
                    value: draft.meeting_link.clone(),
                    on_change: text_handler(form, DraftField::MeetingLink),
                    leading_icon: FieldIcon::Link,
                    keyboard: KeyboardHint::Url,
                    auto_capitalize: false,
                }
            }
        },
    }
}

fn text_handler(mut form: Signal<FormState>, field: DraftField) -> impl FnMut(String) + 'static {
    move |text: String| form.with_mut(|state| state.patch(DraftPatch::text(field, text)))
}

fn dispatch(form: Signal<FormState>, sink: Signal<SinkHandle>, action: DraftAction) {
    form.read().trigger(action, &sink.read());
}

fn tab_label(tab: FormTab) -> String {
    match tab {
        FormTab::EventDetails => t!("tab-event-details"),
        FormTab::Attendees => t!("tab-attendees"),
        FormTab::Settings => t!("tab-settings"),
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "manage-event__tab manage-event__tab--active"
    } else {
        "manage-event__tab"
    }
}

fn event_type_class(active: bool) -> &'static str {
    if active {
        "event-type__option event-type__option--active"
    } else {
        "event-type__option"
    }
}

fn radio_class(active: bool) -> &'static str {
    if active {
        "event-type__radio event-type__radio--active"
    } else {
        "event-type__radio"
    }
}
