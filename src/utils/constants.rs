// Claves de localStorage
pub const STORAGE_KEY_FILTERS: &str = "canchaFinder_filters";

/// Endpoint de búsqueda de canchas (relativo a la URL del backend)
pub const SEARCH_ENDPOINT: &str = "/api/canchas";

/// Tiempo máximo de espera de la geolocalización del navegador
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;
/// Antigüedad máxima aceptada de una posición cacheada (5 minutos)
pub const GEOLOCATION_MAX_AGE_MS: u32 = 300_000;

/// Contenedor DOM del mapa
pub const MAP_CONTAINER_ID: &str = "canchas-map";

pub const SELF_MARKER_TITLE: &str = "Tu ubicación";

/// Tipos de cancha: (valor enviado al backend, etiqueta)
pub const FIELD_TYPES: &[(&str, &str)] = &[
    ("soccer", "Fútbol"),
    ("futsal", "Fútbol sala"),
    ("tennis", "Tenis"),
    ("basketball", "Baloncesto"),
    ("volleyball", "Voleibol"),
    ("padel", "Pádel"),
];

pub const TIME_SLOT_OPTIONS: &[(&str, &str)] = &[
    ("morning", "Mañana"),
    ("afternoon", "Tarde"),
    ("night", "Noche"),
];

pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("parking", "Parqueadero"),
    ("showers", "Duchas"),
    ("lighting", "Iluminación"),
    ("locker_rooms", "Vestuarios"),
    ("cafeteria", "Cafetería"),
];

pub const RADIUS_OPTIONS_KM: &[f64] = &[2.0, 5.0, 10.0, 20.0, 50.0];

/// Etiqueta legible de un valor de filtro (o el valor si no se conoce)
pub fn option_label<'a>(options: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

// Iconos SVG de los marcadores
pub const VENUE_MARKER_SVG: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="16" cy="16" r="12" fill="#10B981" stroke="white" stroke-width="2"/><path d="M16 8L18.5 13H23L19.5 16.5L21 22L16 19L11 22L12.5 16.5L9 13H13.5L16 8Z" fill="white"/></svg>"##;
pub const SELF_MARKER_SVG: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="8" fill="#3B82F6" stroke="white" stroke-width="2"/><circle cx="12" cy="12" r="3" fill="white"/></svg>"##;
