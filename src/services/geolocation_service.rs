// ============================================================================
// GEOLOCATION SERVICE - Posición del navegador como operación async única
// ============================================================================

use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError, PositionOptions};
use crate::models::Coordinate;
use crate::utils::constants::{GEOLOCATION_MAX_AGE_MS, GEOLOCATION_TIMEOUT_MS};

/// Opciones de la consulta al dispositivo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeolocationOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub max_cache_age_ms: u32,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: GEOLOCATION_TIMEOUT_MS,
            max_cache_age_ms: GEOLOCATION_MAX_AGE_MS,
        }
    }
}

impl GeolocationOptions {
    fn to_position_options(self) -> PositionOptions {
        let options = PositionOptions::new();
        options.set_enable_high_accuracy(self.high_accuracy);
        options.set_timeout(self.timeout_ms);
        options.set_maximum_age(self.max_cache_age_ms);
        options
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationError {
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Other(String),
}

impl GeolocationError {
    /// Códigos de PositionError (1, 2, 3)
    pub fn from_code(code: u16, message: String) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::PositionUnavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Other(message),
        }
    }

    fn from_js(value: JsValue) -> Self {
        match value.dyn_into::<PositionError>() {
            Ok(err) => Self::from_code(err.code(), err.message()),
            Err(other) => GeolocationError::Other(format!("{:?}", other)),
        }
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::Unsupported => write!(f, "Geolocation not supported"),
            GeolocationError::PermissionDenied => write!(f, "Permission denied"),
            GeolocationError::PositionUnavailable => write!(f, "Position unavailable"),
            GeolocationError::Timeout => write!(f, "Timeout"),
            GeolocationError::Other(msg) => write!(f, "Geolocation error: {}", msg),
        }
    }
}

impl std::error::Error for GeolocationError {}

/// Pide una única posición al navegador. El timeout lo aplica el propio navegador.
pub async fn current_position(options: GeolocationOptions) -> Result<Coordinate, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let position_options = options.to_position_options();
    let mut request_error = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &position_options,
        ) {
            request_error = Some(e);
        }
    });
    if let Some(e) = request_error {
        return Err(GeolocationError::Other(format!("{:?}", e)));
    }

    let value = JsFuture::from(promise).await.map_err(GeolocationError::from_js)?;
    let position: Position = value
        .dyn_into()
        .map_err(|_| GeolocationError::Other("Unexpected position value".to_string()))?;

    let coords = position.coords();
    Ok(Coordinate::new(coords.latitude(), coords.longitude()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_platform_contract() {
        let options = GeolocationOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout_ms, 10_000);
        assert_eq!(options.max_cache_age_ms, 300_000);
    }

    #[test]
    fn error_codes_are_classified() {
        assert_eq!(GeolocationError::from_code(1, String::new()), GeolocationError::PermissionDenied);
        assert_eq!(GeolocationError::from_code(2, String::new()), GeolocationError::PositionUnavailable);
        assert_eq!(GeolocationError::from_code(3, String::new()), GeolocationError::Timeout);
        assert_eq!(
            GeolocationError::from_code(9, "boom".to_string()),
            GeolocationError::Other("boom".to_string())
        );
    }
}
