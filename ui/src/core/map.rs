//! Typed configuration for the embedded map preview.

use serde::{Deserialize, Serialize};

/// Default map center: Helsinki city centre.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    latitude: 60.1699,
    longitude: 24.9384,
};

/// Default region extent in degrees (both axes).
pub const DEFAULT_DELTA: f64 = 0.01;

/// Default preview height in px.
pub const DEFAULT_HEIGHT_PX: u32 = 300;

/// Marker description used when the event has no address yet.
pub const FALLBACK_ADDRESS: &str = "Helsinki";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        DEFAULT_CENTER
    }
}

/// Visible area: a center plus the latitude/longitude span around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn around(center: GeoPoint) -> Self {
        Self {
            center,
            latitude_delta: DEFAULT_DELTA,
            longitude_delta: DEFAULT_DELTA,
        }
    }

    /// `(min_lon, min_lat, max_lon, max_lat)`
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let half_lat = self.latitude_delta / 2.0;
        let half_lon = self.longitude_delta / 2.0;
        (
            self.center.longitude - half_lon,
            self.center.latitude - half_lat,
            self.center.longitude + half_lon,
            self.center.latitude + half_lat,
        )
    }

    /// Slippy-map zoom level that shows roughly `longitude_delta` degrees.
    pub fn zoom_level(&self) -> u8 {
        if self.longitude_delta <= 0.0 || !self.longitude_delta.is_finite() {
            return 20;
        }
        (360.0 / self.longitude_delta).log2().round().clamp(1.0, 20.0) as u8
    }
}

impl Default for MapRegion {
    fn default() -> Self {
        Self::around(DEFAULT_CENTER)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub coordinate: GeoPoint,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapProvider {
    #[default]
    OpenStreetMap,
    Google,
}

/// Platform-specific provider settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformMapOptions {
    /// Browser key for the Google Maps Embed API.
    pub web_api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub region: MapRegion,
    pub markers: Vec<MapMarker>,
    pub provider: MapProvider,
    pub platform: Option<PlatformMapOptions>,
}

impl MapConfig {
    pub fn new(region: MapRegion) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    /// Region centered on `coordinate` (Helsinki when absent) with a single
    /// marker describing the event. Only an empty address is replaced by the
    /// fallback; whitespace is kept as typed.
    pub fn for_event(
        coordinate: Option<GeoPoint>,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        let center = coordinate.unwrap_or(DEFAULT_CENTER);
        let mut address = address.into();
        if address.is_empty() {
            address = FALLBACK_ADDRESS.to_string();
        }

        Self::new(MapRegion::around(center)).with_marker(MapMarker {
            coordinate: center,
            title: title.into(),
            description: address,
        })
    }

    pub fn with_marker(mut self, marker: MapMarker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_provider(mut self, provider: MapProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_platform(mut self, platform: PlatformMapOptions) -> Self {
        self.platform = Some(platform);
        self
    }

    /// URL for the provider's embeddable map view. Only the first marker is
    /// pinned; embed endpoints support one.
    pub fn embed_url(&self) -> String {
        match self.provider {
            MapProvider::OpenStreetMap => self.openstreetmap_url(),
            MapProvider::Google => self.google_url(),
        }
    }

    fn openstreetmap_url(&self) -> String {
        let (min_lon, min_lat, max_lon, max_lat) = self.region.bounding_box();
        let mut url = format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={min_lon:.6}%2C{min_lat:.6}%2C{max_lon:.6}%2C{max_lat:.6}&layer=mapnik"
        );
        if let Some(marker) = self.markers.first() {
            url.push_str(&format!(
                "&marker={:.6}%2C{:.6}",
                marker.coordinate.latitude, marker.coordinate.longitude
            ));
        }
        url
    }

    fn google_url(&self) -> String {
        let center = self
            .markers
            .first()
            .map(|marker| marker.coordinate)
            .unwrap_or(self.region.center);
        let zoom = self.region.zoom_level();
        let api_key = self
            .platform
            .as_ref()
            .and_then(|platform| platform.web_api_key.as_deref())
            .filter(|key| !key.is_empty());

        match api_key {
            Some(key) => format!(
                "https://www.google.com/maps/embed/v1/place?key={key}&q={:.6},{:.6}&zoom={zoom}",
                center.latitude, center.longitude
            ),
            None => format!(
                "https://maps.google.com/maps?q={:.6},{:.6}&z={zoom}&output=embed",
                center.latitude, center.longitude
            ),
        }
    }
}
