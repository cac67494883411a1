// ============================================================================
// MAPS LOADER - Inyección del script de Google Maps
// ============================================================================

use url::form_urlencoded;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;
use crate::models::MapLoadError;

const MAPS_SCRIPT_ID: &str = "google-maps-script";
const MAPS_SCRIPT_BASE: &str = "https://maps.googleapis.com/maps/api/js";

pub fn maps_script_url(api_key: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("key", api_key)
        .append_pair("libraries", "places")
        .finish();
    format!("{}?{}", MAPS_SCRIPT_BASE, query)
}

/// `window.google.maps` ya está disponible
pub fn is_maps_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("google"))
        .ok()
        .filter(|google| google.is_object())
        .and_then(|google| js_sys::Reflect::get(&google, &JsValue::from_str("maps")).ok())
        .map(|maps| maps.is_object())
        .unwrap_or(false)
}

/// Carga el script una sola vez. En un reintento se reemplaza el tag fallido.
pub async fn load_google_maps(api_key: &str) -> Result<(), MapLoadError> {
    if is_maps_available() {
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapLoadError::ScriptLoad("No document".to_string()))?;

    if let Some(previous) = document.get_element_by_id(MAPS_SCRIPT_ID) {
        previous.remove();
    }

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| MapLoadError::ScriptLoad(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| MapLoadError::ScriptLoad("Invalid script element".to_string()))?;
    script.set_id(MAPS_SCRIPT_ID);
    script.set_src(&maps_script_url(api_key));
    script.set_async(true);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    document
        .head()
        .ok_or_else(|| MapLoadError::ScriptLoad("No <head> element".to_string()))?
        .append_child(&script)
        .map_err(|e| MapLoadError::ScriptLoad(format!("{:?}", e)))?;

    log::info!("🗺️ [MAPS] Cargando script de Google Maps...");
    JsFuture::from(promise)
        .await
        .map_err(|_| MapLoadError::ScriptLoad("Error de red al cargar el script".to_string()))?;

    if !is_maps_available() {
        return Err(MapLoadError::ScriptLoad("google.maps no disponible".to_string()));
    }

    log::info!("✅ [MAPS] Google Maps cargado");
    Ok(())
}

/// Registra `window.gm_authFailure`, que Google invoca cuando rechaza la API key.
/// Se registra una sola vez por app.
pub fn on_auth_failure<F>(callback: F) -> Result<(), JsValue>
where
    F: Fn() + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(move || {
        log::error!("❌ [MAPS] Google Maps rechazó la API key (gm_authFailure)");
        callback();
    }) as Box<dyn Fn()>);

    js_sys::Reflect::set(&window, &JsValue::from_str("gm_authFailure"), closure.as_ref())?;
    // El listener vive mientras viva la página
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_url_encodes_key() {
        assert_eq!(
            maps_script_url("ab c&d"),
            "https://maps.googleapis.com/maps/api/js?key=ab+c%26d&libraries=places"
        );
    }
}
