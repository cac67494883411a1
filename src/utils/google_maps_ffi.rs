// ============================================================================
// GOOGLE MAPS FFI - Bindings de google.maps.Map / google.maps.Marker
// ============================================================================
// Solo wrappers para clases JS - Sin estado, sin lógica
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;
use crate::models::{Coordinate, MarkerDescriptor, MarkerIcon};
use super::constants::{SELF_MARKER_SVG, VENUE_MARKER_SVG};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(container: &web_sys::Element, options: &JsValue) -> GoogleMap;

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &GoogleMap, center: &JsValue);

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &GoogleMap, zoom: f64);

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    pub type GoogleMarker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Marker")]
    pub fn new(options: &JsValue) -> GoogleMarker;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &GoogleMarker, map: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &GoogleMarker, event: &str, handler: &js_sys::Function);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: Coordinate,
    zoom: f64,
    disable_default_ui: bool,
    zoom_control: bool,
    street_view_control: bool,
    map_type_control: bool,
    fullscreen_control: bool,
    styles: Vec<MapStyleRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapStyleRule {
    feature_type: &'static str,
    element_type: &'static str,
    stylers: Vec<Visibility>,
}

#[derive(Serialize)]
struct Visibility {
    visibility: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkerOptions<'a> {
    position: Coordinate,
    title: &'a str,
    icon: String,
    clickable: bool,
    z_index: i32,
}

/// Serializa como objeto JS plano (no `Map`)
fn to_js_object<T: Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Error serializando opciones: {}", e))
}

pub fn coordinate_to_js(coordinate: Coordinate) -> Result<JsValue, String> {
    to_js_object(&coordinate)
}

/// Crea el mapa en el contenedor. Se ocultan las etiquetas de puntos de interés.
pub fn create_map(container: &web_sys::Element, center: Coordinate, zoom: f64) -> Result<GoogleMap, String> {
    let options = MapOptions {
        center,
        zoom,
        disable_default_ui: false,
        zoom_control: true,
        street_view_control: false,
        map_type_control: false,
        fullscreen_control: true,
        styles: vec![MapStyleRule {
            feature_type: "poi",
            element_type: "labels",
            stylers: vec![Visibility { visibility: "off" }],
        }],
    };
    Ok(GoogleMap::new(container, &to_js_object(&options)?))
}

fn icon_url(icon: MarkerIcon) -> String {
    let svg = match icon {
        MarkerIcon::Venue => VENUE_MARKER_SVG,
        MarkerIcon::SelfLocation => SELF_MARKER_SVG,
    };
    let encoded: String = js_sys::encode_uri_component(svg).into();
    format!("data:image/svg+xml;charset=UTF-8,{}", encoded)
}

/// Crea un marcador ya agregado al mapa
pub fn create_marker(map: &GoogleMap, descriptor: &MarkerDescriptor) -> Result<GoogleMarker, String> {
    let options = MarkerOptions {
        position: descriptor.position,
        title: &descriptor.title,
        icon: icon_url(descriptor.icon),
        clickable: !descriptor.is_self(),
        // El marcador propio queda por encima de las canchas
        z_index: if descriptor.is_self() { 1000 } else { 1 },
    };
    let marker = GoogleMarker::new(&to_js_object(&options)?);
    marker.set_map(map);
    Ok(marker)
}

pub fn remove_marker(marker: &GoogleMarker) {
    marker.set_map(&JsValue::NULL);
}
