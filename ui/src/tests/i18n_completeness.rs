//! Every `t!("...")` key used in `src/` must exist in the fallback locale.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "eventdeck-ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message IDs defined in a Fluent file (terms, attributes and comments skipped).
fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!(` invocations in `*.rs` files under `dir`.
fn referenced_keys(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in source.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if !key.is_empty() && key.chars().all(is_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
}

fn locale_dirs(i18n_root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn source_keys_exist_in_fallback() {
    let root = crate_root();
    let fallback = fs::read_to_string(root.join("i18n/en-US").join(FTL_FILENAME))
        .expect("fallback FTL file readable");
    let defined = ftl_keys(&fallback);
    assert!(!defined.is_empty(), "fallback FTL defines no messages");

    let mut used = BTreeSet::new();
    referenced_keys(&root.join("src"), &mut used);
    assert!(!used.is_empty(), "no t! usages found under src/");

    let missing: Vec<_> = used.difference(&defined).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in source but missing from en-US:\n{}",
        missing.join("\n")
    );

    let unused: Vec<_> = defined.difference(&used).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: unused fallback keys: {}", unused.join(", "));
    }
}

#[test]
fn every_locale_matches_fallback_keys() {
    let i18n_root = crate_root().join("i18n");
    let fallback = ftl_keys(
        &fs::read_to_string(i18n_root.join("en-US").join(FTL_FILENAME))
            .expect("fallback FTL file readable"),
    );

    for dir in locale_dirs(&i18n_root) {
        let file = dir.join(FTL_FILENAME);
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|err| panic!("locale file {file:?} unreadable: {err}"));
        let keys = ftl_keys(&content);

        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback).cloned().collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{dir:?}: missing {missing:?}, not in fallback {extra:?}"
        );
    }
}
