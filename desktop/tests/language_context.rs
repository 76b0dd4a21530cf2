#![cfg(test)]
//! Locale switches must re-render the routed pages in place. Keying the
//! router by language would remount the manage-event screen and drop the
//! unsaved draft.

const LAUNCHERS: [(&str, &str); 3] = [
    (
        "desktop",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs")),
    ),
    (
        "mobile",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../mobile/src/main.rs")),
    ),
    (
        "web",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/src/main.rs")),
    ),
];

const DRAFT_VIEW: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/src/events/view.rs"
));

#[test]
fn router_is_not_keyed_by_language() {
    for (name, source) in LAUNCHERS {
        assert!(
            !source.contains("key: \"{lang_code()}\""),
            "{name} launcher remounts the router on locale change"
        );
    }
}

#[test]
fn every_launcher_shares_the_language_signal() {
    for (name, source) in LAUNCHERS {
        assert!(
            source.contains("use_context_provider(|| lang_code)"),
            "{name} launcher does not provide the language code context"
        );
        assert!(
            source.contains("use_signal(ui::i18n::current_language)"),
            "{name} launcher does not start from the loader's language"
        );
    }
}

#[test]
fn draft_editor_subscribes_to_language_changes() {
    let component = DRAFT_VIEW
        .split("pub fn BasicEventInfo()")
        .nth(1)
        .and_then(|rest| rest.split("\nfn ").next())
        .expect("BasicEventInfo component present");
    assert!(component.contains("try_use_context::<Signal<String>>()"));
    assert!(component.contains("\"data-lang\": \"{lang_marker}\""));
}
