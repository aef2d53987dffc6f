//! Google Maps JavaScript API behind the [`MapProvider`] seam
//!
//! The API script is injected once per page; every provider awaits the same
//! load promise. Options are serialised with `serde_wasm_bindgen` and handed
//! to thin `wasm_bindgen` bindings for `google.maps.*`.

use std::cell::RefCell;

use js_sys::{Function, Object, Promise, Reflect};
use leptos::prelude::{Callable, Callback};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlScriptElement};

use crate::core::map::{MapLoadError, MapOptions, MapProvider, MarkerSpec};

const SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    type GoogleMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    fn new(element: &HtmlElement, options: &JsValue) -> Result<GoogleMap, JsValue>;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    type Marker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"])]
    fn new(options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Marker, map: Option<&GoogleMap>);

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &Marker, event: &str, handler: &Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    type InfoWindow;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"])]
    fn new(options: &JsValue) -> Result<InfoWindow, JsValue>;

    #[wasm_bindgen(method)]
    fn open(this: &InfoWindow, map: &GoogleMap, anchor: &Marker);

    #[wasm_bindgen(method)]
    fn close(this: &InfoWindow);

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &InfoWindow, event: &str, handler: &Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    type Point;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    fn new(x: f64, y: f64) -> Point;

    #[wasm_bindgen(js_namespace = ["google", "maps", "event"], js_name = clearInstanceListeners)]
    fn clear_instance_listeners(instance: &JsValue);
}

thread_local! {
    static SCRIPT_LOAD: RefCell<Option<Promise>> = const { RefCell::new(None) };
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, MapLoadError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| MapLoadError::Widget(err.to_string()))
}

fn set_field(target: &JsValue, key: &str, value: &JsValue) -> Result<(), MapLoadError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| MapLoadError::Widget(describe(err)))
}

/// `window.google.maps` is already defined
fn maps_namespace_present() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("google"))
        .ok()
        .filter(|google| google.is_object())
        .and_then(|google| Reflect::get(&google, &JsValue::from_str("maps")).ok())
        .is_some_and(|maps| maps.is_object())
}

/// Appends the API `<script>` to `<head>` and resolves once it has run
fn inject_script(api_key: &str) -> Result<Promise, MapLoadError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| MapLoadError::Script("no document".to_string()))?;
    let head = document
        .head()
        .ok_or_else(|| MapLoadError::Script("no <head> element".to_string()))?;

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|err| MapLoadError::Script(describe(err)))?
        .unchecked_into();
    script.set_src(&format!(
        "{}?key={}",
        SCRIPT_URL,
        urlencoding::encode(api_key)
    ));
    script.set_async(true);

    let promise = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script)
        .map_err(|err| MapLoadError::Script(describe(err)))?;

    Ok(promise)
}

/// Loads the Maps API once per page
async fn load_script(api_key: &str) -> Result<(), MapLoadError> {
    if maps_namespace_present() {
        return Ok(());
    }

    let pending = SCRIPT_LOAD.with(|slot| slot.borrow().clone());
    let promise = match pending {
        Some(promise) => promise,
        None => {
            let promise = inject_script(api_key)?;
            SCRIPT_LOAD.with(|slot| *slot.borrow_mut() = Some(promise.clone()));
            promise
        }
    };

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| MapLoadError::Script("maps script failed to load".to_string()))?;

    if maps_namespace_present() {
        Ok(())
    } else {
        Err(MapLoadError::Script("google.maps missing after load".to_string()))
    }
}

/// Map drawn into a container element with a single marker and info popup
pub struct GoogleMapsProvider {
    container: HtmlElement,
    api_key: String,
    on_marker_click: Callback<()>,
    on_info_close: Callback<()>,
    map: RefCell<Option<GoogleMap>>,
    marker: RefCell<Option<Marker>>,
    info: RefCell<Option<InfoWindow>>,
    listeners: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl GoogleMapsProvider {
    pub fn new(
        container: HtmlElement,
        api_key: String,
        on_marker_click: Callback<()>,
        on_info_close: Callback<()>,
    ) -> Self {
        Self {
            container,
            api_key,
            on_marker_click,
            on_info_close,
            map: RefCell::new(None),
            marker: RefCell::new(None),
            info: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    fn listener(&self, callback: Callback<()>) -> Function {
        let closure = Closure::<dyn FnMut()>::new(move || callback.run(()));
        let function = closure.as_ref().unchecked_ref::<Function>().clone();
        self.listeners.borrow_mut().push(closure);
        function
    }
}

impl MapProvider for GoogleMapsProvider {
    async fn load(&self, options: &MapOptions) -> Result<(), MapLoadError> {
        load_script(&self.api_key).await?;

        let options = to_js(options)?;
        let map = GoogleMap::new(&self.container, &options)
            .map_err(|err| MapLoadError::Widget(describe(err)))?;
        *self.map.borrow_mut() = Some(map);
        Ok(())
    }

    fn render_marker(&self, marker_spec: &MarkerSpec) -> Result<(), MapLoadError> {
        let map_slot = self.map.borrow();
        let map = map_slot
            .as_ref()
            .ok_or_else(|| MapLoadError::Widget("marker rendered before map".to_string()))?;

        let icon = to_js(&marker_spec.icon)?;
        let (anchor_x, anchor_y) = marker_spec.icon.anchor;
        set_field(&icon, "anchor", &Point::new(anchor_x, anchor_y))?;

        let marker_options: JsValue = Object::new().into();
        set_field(&marker_options, "position", &to_js(&marker_spec.position)?)?;
        set_field(&marker_options, "map", map)?;
        set_field(&marker_options, "icon", &icon)?;
        let marker =
            Marker::new(&marker_options).map_err(|err| MapLoadError::Widget(describe(err)))?;

        let info_options: JsValue = Object::new().into();
        set_field(&info_options, "content", &JsValue::from_str(&marker_spec.info_html))?;
        let info =
            InfoWindow::new(&info_options).map_err(|err| MapLoadError::Widget(describe(err)))?;

        marker.add_listener("click", &self.listener(self.on_marker_click));
        info.add_listener("closeclick", &self.listener(self.on_info_close));

        *self.marker.borrow_mut() = Some(marker);
        *self.info.borrow_mut() = Some(info);
        Ok(())
    }

    fn show_info(&self) {
        let map = self.map.borrow();
        let marker = self.marker.borrow();
        let info = self.info.borrow();
        if let (Some(map), Some(marker), Some(info)) = (map.as_ref(), marker.as_ref(), info.as_ref()) {
            info.open(map, marker);
        }
    }

    fn hide_info(&self) {
        if let Some(info) = self.info.borrow().as_ref() {
            info.close();
        }
    }
}

impl Drop for GoogleMapsProvider {
    fn drop(&mut self) {
        // Detach before the Rust closures behind the listeners are freed
        if let Some(info) = self.info.get_mut().take() {
            info.close();
            clear_instance_listeners(&info);
        }
        if let Some(marker) = self.marker.get_mut().take() {
            clear_instance_listeners(&marker);
            marker.set_map(None);
        }
    }
}
