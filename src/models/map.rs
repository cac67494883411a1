use std::fmt;
use super::coordinate::Coordinate;

/// Icono de un marcador del mapa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    Venue,
    SelfLocation,
}

/// Descriptor de marcador: posición + icono + título (+ cancha asociada)
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptor {
    pub key: String,
    pub position: Coordinate,
    pub icon: MarkerIcon,
    pub title: String,
    /// `None` para el marcador de la ubicación del usuario (no clickeable)
    pub venue_id: Option<String>,
}

impl MarkerDescriptor {
    pub fn is_self(&self) -> bool {
        self.icon == MarkerIcon::SelfLocation
    }
}

/// Error de carga del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapLoadError {
    /// No hay API key configurada (error de configuración persistente)
    MissingApiKey,
    /// Google rechazó la API key (gm_authFailure)
    Rejected(String),
    /// Falló la carga del script o la red (transitorio, reintentable)
    ScriptLoad(String),
}

impl MapLoadError {
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, MapLoadError::MissingApiKey | MapLoadError::Rejected(_))
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, MapLoadError::ScriptLoad(_))
    }
}

impl fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapLoadError::MissingApiKey => {
                write!(f, "Falta la API key de Google Maps (GOOGLE_MAPS_API_KEY)")
            }
            MapLoadError::Rejected(msg) => write!(f, "Google Maps rechazó la API key: {}", msg),
            MapLoadError::ScriptLoad(msg) => write!(f, "No se pudo cargar Google Maps: {}", msg),
        }
    }
}

impl std::error::Error for MapLoadError {}

/// Estado de carga de la plataforma de mapas
#[derive(Debug, Clone, PartialEq)]
pub enum MapStatus {
    Loading,
    Ready,
    Failed(MapLoadError),
}

/// Origen de la coordenada resuelta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    External,
    Device,
}

/// Estado de la geolocalización del usuario
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationState {
    Unresolved,
    Resolved { coordinate: Coordinate, source: LocationSource },
}

impl LocationState {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            LocationState::Unresolved => None,
            LocationState::Resolved { coordinate, .. } => Some(*coordinate),
        }
    }

    pub fn source(&self) -> Option<LocationSource> {
        match self {
            LocationState::Unresolved => None,
            LocationState::Resolved { source, .. } => Some(*source),
        }
    }
}
