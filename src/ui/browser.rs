//! Browser-side implementations of the core seams: scrolling, mail handoff
//! and fetching the public site configuration

use gloo_net::http::Request;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::core::map::{MapLoadError, PublicSiteConfig, SITE_CONFIG_PATH};
use crate::core::{HandoffError, MailHandoff, Viewport};

/// Scrolls the live document
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to(&self, element_id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(element_id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Hands a `mailto:` URI to the browser by navigating to it
pub struct WindowMailHandoff;

impl MailHandoff for WindowMailHandoff {
    fn open(&self, uri: &str) -> Result<(), HandoffError> {
        let window = web_sys::window().ok_or(HandoffError::NoWindow)?;
        window
            .location()
            .set_href(uri)
            .map_err(|err| HandoffError::Navigation(format!("{:?}", err)))
    }
}

/// Current vertical scroll offset, 0 when unavailable
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Fetches the browser-safe configuration from the server
pub async fn fetch_site_config() -> Result<PublicSiteConfig, MapLoadError> {
    let response = Request::get(SITE_CONFIG_PATH)
        .send()
        .await
        .map_err(|err| MapLoadError::Config(err.to_string()))?;

    if !response.ok() {
        return Err(MapLoadError::Config(format!(
            "unexpected status {}",
            response.status()
        )));
    }

    response
        .json::<PublicSiteConfig>()
        .await
        .map_err(|err| MapLoadError::Config(err.to_string()))
}
