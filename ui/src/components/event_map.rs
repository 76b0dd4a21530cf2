use dioxus::prelude::*;

use crate::core::map::{GeoPoint, MapConfig, MapProvider, PlatformMapOptions, DEFAULT_HEIGHT_PX};
use crate::t;

/// Map preview with a single pin for the event location.
#[component]
pub fn EventMap(
    address: String,
    coordinates: Option<GeoPoint>,
    title: Option<String>,
    height: Option<u32>,
    provider: Option<MapProvider>,
    platform: Option<PlatformMapOptions>,
) -> Element {
    let title = title.unwrap_or_else(|| t!("map-default-title"));
    let height = height.unwrap_or(DEFAULT_HEIGHT_PX);
    let config = event_map_config(address, coordinates, title.clone(), provider, platform);

    let url = config.embed_url();
    let caption = config
        .markers
        .first()
        .map(|marker| marker.description.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "event-map", style: "height: {height}px;",
            iframe {
                class: "event-map__frame",
                src: "{url}",
                title: "{title}",
                "loading": "lazy",
            }
            span { class: "event-map__caption", "{caption}" }
        }
    }
}

fn event_map_config(
    address: String,
    coordinates: Option<GeoPoint>,
    title: String,
    provider: Option<MapProvider>,
    platform: Option<PlatformMapOptions>,
) -> MapConfig {
    let config =
        MapConfig::for_event(coordinates, title, address).with_provider(provider.unwrap_or_default());
    match platform {
        Some(platform) => config.with_platform(platform),
        None => config,
    }
}
