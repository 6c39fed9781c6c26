//! Bindings of the Naver Maps JavaScript API.

use anyhow::anyhow;
use js_sys::{Array, Function, Object, Promise, Reflect};
use leptos::{document, window};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlScriptElement};

use sf_core::geo::GeoPoint;

const SCRIPT_URL: &str = "https://oapi.map.naver.com/openapi/v3/maps.js";
const DEFAULT_ZOOM: u8 = 16;
const ROUTE_COLOR: &str = "#16E0B4";
const ROUTE_BOUNDS_PADDING: u8 = 50;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    type LatLng;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(lat: f64, lng: f64) -> LatLng;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"], js_name = LatLngBounds)]
    type LatLngBounds;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"], js_class = "LatLngBounds")]
    fn new(sw: &LatLng, ne: &LatLng) -> LatLngBounds;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"], js_name = Map)]
    #[derive(Clone)]
    type NaverMap;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"], js_class = "Map")]
    fn new(element: &HtmlElement, options: &JsValue) -> NaverMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &NaverMap, bounds: &LatLngBounds, margin: &JsValue);

    #[wasm_bindgen(method)]
    fn destroy(this: &NaverMap);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    #[derive(Clone)]
    type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(options: &JsValue) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    #[derive(Clone)]
    type InfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(options: &JsValue) -> InfoWindow;

    #[wasm_bindgen(method)]
    fn open(this: &InfoWindow, map: &NaverMap, anchor: &Marker);

    #[wasm_bindgen(method)]
    fn close(this: &InfoWindow);

    #[wasm_bindgen(method, js_name = getMap)]
    fn get_map(this: &InfoWindow) -> JsValue;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    type Polyline;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(options: &JsValue) -> Polyline;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Polyline, map: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps", "Event"], js_name = addListener)]
    fn add_listener(target: &JsValue, event: &str, listener: &Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["naver", "maps", "Event"])]
    fn trigger(target: &JsValue, event: &str);
}

impl From<GeoPoint> for LatLng {
    fn from(GeoPoint { lat, lng }: GeoPoint) -> Self {
        LatLng::new(lat, lng)
    }
}

fn is_loaded() -> bool {
    Reflect::get(&window(), &"naver".into())
        .ok()
        .filter(|naver| !naver.is_undefined())
        .and_then(|naver| Reflect::get(&naver, &"maps".into()).ok())
        .is_some_and(|maps| !maps.is_undefined())
}

/// Injects the Naver Maps script once.
pub async fn load_script(client_id: &str) -> anyhow::Result<()> {
    if is_loaded() {
        return Ok(());
    }
    let script: HtmlScriptElement = document()
        .create_element("script")
        .map_err(|err| anyhow!("Unable to create script element: {err:?}"))?
        .unchecked_into();
    script.set_src(&format!("{SCRIPT_URL}?ncpKeyId={client_id}"));
    script.set_async(true);
    let loaded = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });
    document()
        .head()
        .ok_or_else(|| anyhow!("Missing document head"))?
        .append_child(&script)
        .map_err(|err| anyhow!("Unable to append script: {err:?}"))?;
    JsFuture::from(loaded)
        .await
        .map_err(|_| anyhow!("Unable to load the Naver Maps script"))?;
    log::debug!("Loaded Naver Maps");
    Ok(())
}

fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        _ = Reflect::set(&obj, &(*key).into(), value);
    }
    obj.into()
}

/// Minimal escaping for text placed into the info window markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn info_window_content(title: &str, address: &str) -> String {
    format!(
        r#"<div style="padding: 15px; min-width: 200px;">
  <h4 style="margin: 0 0 8px 0; font-size: 14px; font-weight: bold; color: #0D1B2A;">{}</h4>
  <p style="margin: 0; font-size: 12px; color: #8B9DA9; line-height: 1.4;">{}</p>
</div>"#,
        escape_html(title),
        escape_html(address)
    )
}

/// A map centered on a single facility.
pub struct FacilityMap {
    map: NaverMap,
    position: GeoPoint,
    route: Option<Polyline>,
    // Keeps the click listener alive as long as the map.
    _on_marker_click: Closure<dyn FnMut()>,
}

impl FacilityMap {
    #[must_use]
    pub fn new(element: &HtmlElement, position: GeoPoint, title: &str, address: &str) -> Self {
        let center: JsValue = LatLng::from(position).into();
        let map = NaverMap::new(
            element,
            &options(&[
                ("center", center.clone()),
                ("zoom", DEFAULT_ZOOM.into()),
                ("zoomControl", true.into()),
            ]),
        );
        let marker = Marker::new(&options(&[
            ("position", center),
            ("map", map.clone().into()),
            ("title", title.into()),
        ]));
        let info_window = InfoWindow::new(&options(&[(
            "content",
            info_window_content(title, address).into(),
        )]));
        info_window.open(&map, &marker);

        let on_marker_click = {
            let map = map.clone();
            let marker = marker.clone();
            let info_window = info_window.clone();
            Closure::<dyn FnMut()>::new(move || {
                if info_window.get_map().is_truthy() {
                    info_window.close();
                } else {
                    info_window.open(&map, &marker);
                }
            })
        };
        add_listener(&marker, "click", on_marker_click.as_ref().unchecked_ref());

        // Tiles are not rendered if the container was resized while loading.
        let resize_target: JsValue = map.clone().into();
        leptos::set_timeout(
            move || trigger(&resize_target, "resize"),
            std::time::Duration::from_millis(100),
        );

        Self {
            map,
            position,
            route: None,
            _on_marker_click: on_marker_click,
        }
    }

    /// Draws a route and fits both ends into the view.
    pub fn show_route(&mut self, start: GeoPoint, path: &[GeoPoint]) {
        self.clear_route();
        let path: Array = path.iter().map(|p| JsValue::from(LatLng::from(*p))).collect();
        let polyline = Polyline::new(&options(&[
            ("map", self.map.clone().into()),
            ("path", path.into()),
            ("strokeColor", ROUTE_COLOR.into()),
            ("strokeWeight", 5.into()),
            ("strokeOpacity", 0.8.into()),
        ]));
        self.route = Some(polyline);
        let bounds = LatLngBounds::new(&start.into(), &self.position.into());
        self.map.fit_bounds(
            &bounds,
            &options(&[("padding", ROUTE_BOUNDS_PADDING.into())]),
        );
    }

    pub fn clear_route(&mut self) {
        if let Some(route) = self.route.take() {
            route.set_map(&JsValue::NULL);
        }
    }
}

impl Drop for FacilityMap {
    fn drop(&mut self) {
        self.map.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_info_window_text() {
        assert_eq!(
            escape_html(r#"<b>"A & B's"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&#39;s&quot;&lt;/b&gt;"
        );
        assert!(info_window_content("체육관", "서울").contains("<h4"));
    }
}
