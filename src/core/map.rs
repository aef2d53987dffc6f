//! Map widget state machine and provider abstraction
//!
//! The third-party map library sits behind [`MapProvider`]. The widget itself
//! is a three-state machine (`Loading`, `Error`, `Ready`) plus an independent
//! flag for the marker's info popup. `Error` is terminal: there is no retry.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use super::business::{BusinessProfile, GeoPoint};

pub const DEFAULT_ZOOM: u8 = 16;

/// SVG path of the location pin drawn as the marker
pub const PIN_PATH: &str = "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";

/// Point-of-interest categories hidden from the base map
pub const HIDDEN_POI_FEATURES: [&str; 3] = ["poi.business", "poi.medical", "poi.school"];

/// Path of the endpoint serving [`PublicSiteConfig`]
pub const SITE_CONFIG_PATH: &str = "/api/site-config";

/// Browser-safe settings served at [`SITE_CONFIG_PATH`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSiteConfig {
    pub maps_api_key: Option<String>,
}

impl PublicSiteConfig {
    /// The maps key, or [`MapLoadError::MissingApiKey`] when absent or blank
    pub fn require_maps_key(&self) -> Result<&str, MapLoadError> {
        match self.maps_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(MapLoadError::MissingApiKey),
        }
    }
}

/// Reasons the map could not be shown
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapLoadError {
    #[error("Maps API key is not configured")]
    MissingApiKey,

    #[error("Failed to fetch site configuration: {0}")]
    Config(String),

    #[error("Failed to load maps script: {0}")]
    Script(String),

    #[error("Failed to initialise map widget: {0}")]
    Widget(String),
}

/// Observable widget state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapState {
    Loading,
    Error(MapLoadError),
    Ready,
}

/// Latitude/longitude as the maps library expects it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeoPoint> for LatLng {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Styler {
    pub visibility: &'static str,
}

/// A map style rule, serialised as `{ featureType, stylers }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    pub feature_type: &'static str,
    pub stylers: Vec<Styler>,
}

/// Options passed to the map constructor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub styles: Vec<FeatureStyle>,
    #[serde(rename = "disableDefaultUI")]
    pub disable_default_ui: bool,
    pub zoom_control: bool,
    pub map_type_control: bool,
    pub scale_control: bool,
    pub street_view_control: bool,
    pub rotate_control: bool,
    pub fullscreen_control: bool,
}

impl MapOptions {
    /// Map centred on `center` with POI clutter hidden and only zoom and fullscreen controls
    pub fn centered_on(center: GeoPoint) -> Self {
        Self {
            center: center.into(),
            zoom: DEFAULT_ZOOM,
            styles: HIDDEN_POI_FEATURES
                .into_iter()
                .map(|feature_type| FeatureStyle {
                    feature_type,
                    stylers: vec![Styler { visibility: "off" }],
                })
                .collect(),
            disable_default_ui: true,
            zoom_control: true,
            map_type_control: false,
            scale_control: false,
            street_view_control: false,
            rotate_control: false,
            fullscreen_control: true,
        }
    }
}

/// Marker icon drawn from an SVG path; the anchor point is set by the provider
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinIcon {
    pub path: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub stroke_weight: f64,
    pub scale: f64,
    #[serde(skip)]
    pub anchor: (f64, f64),
}

impl Default for PinIcon {
    fn default() -> Self {
        Self {
            path: PIN_PATH,
            fill_color: "#000000",
            fill_opacity: 1.0,
            stroke_weight: 0.0,
            scale: 1.5,
            anchor: (12.0, 24.0),
        }
    }
}

/// Everything needed to place the business marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLng,
    pub icon: PinIcon,
    pub info_html: String,
}

impl MarkerSpec {
    pub fn for_business(profile: &BusinessProfile) -> Self {
        Self {
            position: profile.location.into(),
            icon: PinIcon::default(),
            info_html: info_window_html(profile),
        }
    }
}

/// Markup for the marker's info popup
pub fn info_window_html(profile: &BusinessProfile) -> String {
    let stars = "★".repeat(5);
    format!(
        r#"<div class="p-3 max-w-xs"><h4 class="font-medium text-gray-900 mb-1">{name}</h4><p class="text-sm text-gray-600 mb-1">{street}</p><p class="text-sm text-gray-600 mb-2">{locality}</p><div class="flex items-center mb-2"><span class="text-yellow-400 text-xs">{stars}</span><span class="text-xs text-gray-500 ml-1">{rating}</span></div><a href="{tel}" class="inline-flex items-center text-xs bg-black text-white px-3 py-1 rounded-full">Call Now</a></div>"#,
        name = profile.name,
        street = profile.street,
        locality = profile.locality_line(),
        stars = stars,
        rating = profile.rating_summary(),
        tel = profile.tel_href(),
    )
}

/// Adapter over a host-provided map library
#[allow(async_fn_in_trait)]
pub trait MapProvider {
    /// Loads the library and creates the map
    async fn load(&self, options: &MapOptions) -> Result<(), MapLoadError>;

    fn render_marker(&self, marker: &MarkerSpec) -> Result<(), MapLoadError>;

    fn show_info(&self);

    fn hide_info(&self);
}

/// Loads the map and places the business marker
pub async fn load_map<P: MapProvider>(provider: &P, profile: &BusinessProfile) -> Result<(), MapLoadError> {
    provider
        .load(&MapOptions::centered_on(profile.location))
        .await?;
    provider.render_marker(&MarkerSpec::for_business(profile))
}

/// Widget state plus the info popup flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapWidget {
    state: MapState,
    info_open: bool,
}

impl MapWidget {
    pub fn new() -> Self {
        Self {
            state: MapState::Loading,
            info_open: false,
        }
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    pub fn is_info_open(&self) -> bool {
        self.info_open
    }

    /// Applies the load outcome; only the first outcome counts
    pub fn finish_load(&mut self, outcome: Result<(), MapLoadError>) -> bool {
        if self.state != MapState::Loading {
            return false;
        }
        self.state = match outcome {
            Ok(()) => MapState::Ready,
            Err(err) => MapState::Error(err),
        };
        true
    }

    pub fn marker_clicked<P: MapProvider>(&mut self, provider: &P) {
        if self.state == MapState::Ready && !self.info_open {
            self.info_open = true;
            provider.show_info();
        }
    }

    pub fn info_closed<P: MapProvider>(&mut self, provider: &P) {
        if self.info_open {
            self.info_open = false;
            provider.hide_info();
        }
    }
}

impl Default for MapWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared flag telling a pending task whether its component still exists
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Marks the owner as torn down; every clone observes it
    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `outcome` to `widget` only if the owner is still alive
pub fn apply_if_alive(
    liveness: &Liveness,
    widget: &mut MapWidget,
    outcome: Result<(), MapLoadError>,
) -> bool {
    liveness.is_alive() && widget.finish_load(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::business::SALON;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeProvider {
        fail_load: Option<MapLoadError>,
        load_calls: Cell<u32>,
        markers: RefCell<Vec<MarkerSpec>>,
        info_visible: Cell<bool>,
    }

    impl MapProvider for FakeProvider {
        async fn load(&self, _options: &MapOptions) -> Result<(), MapLoadError> {
            self.load_calls.set(self.load_calls.get() + 1);
            match &self.fail_load {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn render_marker(&self, marker: &MarkerSpec) -> Result<(), MapLoadError> {
            self.markers.borrow_mut().push(marker.clone());
            Ok(())
        }

        fn show_info(&self) {
            self.info_visible.set(true);
        }

        fn hide_info(&self) {
            self.info_visible.set(false);
        }
    }

    #[tokio::test]
    async fn test_successful_load_renders_marker() {
        let provider = FakeProvider::default();
        let mut widget = MapWidget::new();

        let outcome = load_map(&provider, &SALON).await;
        assert!(widget.finish_load(outcome));

        assert_eq!(widget.state(), &MapState::Ready);
        let markers = provider.markers.borrow();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].position, LatLng { lat: 18.6478, lng: 73.7637 });
    }

    #[tokio::test]
    async fn test_failed_load_is_terminal() {
        let provider = FakeProvider {
            fail_load: Some(MapLoadError::Script("network".to_string())),
            ..Default::default()
        };
        let mut widget = MapWidget::new();

        let outcome = load_map(&provider, &SALON).await;
        widget.finish_load(outcome);

        assert_eq!(
            widget.state(),
            &MapState::Error(MapLoadError::Script("network".to_string()))
        );
        assert!(provider.markers.borrow().is_empty());
        assert_eq!(provider.load_calls.get(), 1);

        // A later success cannot revive it
        assert!(!widget.finish_load(Ok(())));
        assert!(matches!(widget.state(), MapState::Error(_)));
        assert_eq!(provider.load_calls.get(), 1);
    }

    #[test]
    fn test_info_popup_toggles_only_when_ready() {
        let provider = FakeProvider::default();
        let mut widget = MapWidget::new();

        widget.marker_clicked(&provider);
        assert!(!widget.is_info_open());

        widget.finish_load(Ok(()));
        widget.marker_clicked(&provider);
        assert!(widget.is_info_open());
        assert!(provider.info_visible.get());
        assert_eq!(widget.state(), &MapState::Ready);

        widget.info_closed(&provider);
        assert!(!widget.is_info_open());
        assert!(!provider.info_visible.get());
        assert_eq!(widget.state(), &MapState::Ready);
    }

    #[test]
    fn test_revoked_liveness_drops_outcome() {
        let liveness = Liveness::new();
        let task_handle = liveness.clone();
        let mut widget = MapWidget::new();

        liveness.revoke();

        assert!(!apply_if_alive(&task_handle, &mut widget, Ok(())));
        assert_eq!(widget.state(), &MapState::Loading);
    }

    #[test]
    fn test_live_owner_receives_outcome() {
        let liveness = Liveness::new();
        let mut widget = MapWidget::new();

        assert!(apply_if_alive(&liveness, &mut widget, Err(MapLoadError::MissingApiKey)));
        assert_eq!(widget.state(), &MapState::Error(MapLoadError::MissingApiKey));
    }

    #[test]
    fn test_map_options_serialise_for_maps_api() {
        let options = MapOptions::centered_on(SALON.location);
        let json = serde_json::to_value(&options).unwrap();

        assert_eq!(json["zoom"], 16);
        assert_eq!(json["center"]["lat"], 18.6478);
        assert_eq!(json["disableDefaultUI"], true);
        assert_eq!(json["zoomControl"], true);
        assert_eq!(json["fullscreenControl"], true);
        assert_eq!(json["streetViewControl"], false);
        assert_eq!(json["styles"][1]["featureType"], "poi.medical");
        assert_eq!(json["styles"][1]["stylers"][0]["visibility"], "off");
    }

    #[test]
    fn test_pin_icon_serialisation_skips_anchor() {
        let json = serde_json::to_value(PinIcon::default()).unwrap();
        assert_eq!(json["fillColor"], "#000000");
        assert_eq!(json["scale"], 1.5);
        assert!(json.get("anchor").is_none());
    }

    #[test]
    fn test_blank_maps_key_is_missing() {
        let config = PublicSiteConfig {
            maps_api_key: Some("   ".to_string()),
        };
        assert_eq!(config.require_maps_key(), Err(MapLoadError::MissingApiKey));
        assert_eq!(
            PublicSiteConfig::default().require_maps_key(),
            Err(MapLoadError::MissingApiKey)
        );

        let config = PublicSiteConfig {
            maps_api_key: Some("abc123".to_string()),
        };
        assert_eq!(config.require_maps_key(), Ok("abc123"));
    }

    #[test]
    fn test_info_window_contains_call_action() {
        let html = info_window_html(&SALON);
        assert!(html.contains("Seven The Hair and Beauty Salon"));
        assert!(html.contains("Pradhikaran, Pune 411044"));
        assert!(html.contains("4.8 (320)"));
        assert!(html.contains(r#"href="tel:+919112664990""#));
    }
}
