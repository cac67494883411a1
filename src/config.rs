use serde::{Deserialize, Serialize};
use crate::models::{Coordinate, MapLoadError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub search_debounce_ms: u32,
    pub map_config: MapConfig,
    pub google_maps_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "https://api.canchas.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            search_debounce_ms: 300,
            map_config: MapConfig::default(),
            google_maps_api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    /// Zoom cuando se conoce la ubicación del usuario
    pub zoom_with_location: f64,
    /// Zoom más amplio cuando no se conoce
    pub zoom_without_location: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Centro de Cali, Colombia
            default_center_lat: 3.4516,
            default_center_lng: -76.5320,
            zoom_with_location: 13.0,
            zoom_without_location: 11.0,
        }
    }
}

impl MapConfig {
    pub fn default_center(&self) -> Coordinate {
        Coordinate::new(self.default_center_lat, self.default_center_lng)
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = MapConfig::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:5000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.canchas.example.com").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            search_debounce_ms: option_env!("SEARCH_DEBOUNCE_MS")
                .unwrap_or("300").parse().unwrap_or(300),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.default_center_lat),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.default_center_lng),
                ..defaults
            },
            google_maps_api_key: option_env!("GOOGLE_MAPS_API_KEY").map(|s| s.to_string()),
        }
    }

    /// URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// API key de Google Maps validada: vacía o ausente es un error de configuración
    pub fn maps_api_key(&self) -> Result<&str, MapLoadError> {
        self.google_maps_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(MapLoadError::MissingApiKey)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_api_key_is_configuration_error() {
        let mut config = AppConfig::default();
        assert_eq!(config.maps_api_key(), Err(MapLoadError::MissingApiKey));

        config.google_maps_api_key = Some("   ".to_string());
        assert_eq!(config.maps_api_key(), Err(MapLoadError::MissingApiKey));

        config.google_maps_api_key = Some(" abc123 ".to_string());
        assert_eq!(config.maps_api_key(), Ok("abc123"));
    }

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:5000");
        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.canchas.example.com");
    }

    #[test]
    fn default_center_is_cali() {
        assert_eq!(MapConfig::default().default_center(), Coordinate::new(3.4516, -76.5320));
    }
}
