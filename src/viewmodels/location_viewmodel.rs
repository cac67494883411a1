// ============================================================================
// LOCATION VIEWMODEL - Transiciones de la ubicación del usuario
// ============================================================================
// Unresolved -> Resolved(coordenada). La coordenada externa siempre gana.
// ============================================================================

use crate::models::{Coordinate, LocationSource, LocationState};
use crate::services::GeolocationError;

/// Cuándo se consulta el dispositivo sin coordenada externa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Al montar el proveedor
    OnMount,
    /// Solo cuando se pide explícitamente (botón "cerca de mí", abrir el mapa)
    OnDemand,
}

pub struct LocationViewModel;

impl LocationViewModel {
    /// Adopta la coordenada externa si existe. Sin ella se conserva el estado actual.
    pub fn adopt_external(current: LocationState, external: Option<Coordinate>) -> LocationState {
        match external {
            Some(coordinate) => LocationState::Resolved {
                coordinate,
                source: LocationSource::External,
            },
            None => current,
        }
    }

    /// Consulta automática: solo en modo OnMount, sin coordenada externa ni ubicación resuelta
    pub fn needs_device_lookup(
        current: LocationState,
        external: Option<Coordinate>,
        mode: LookupMode,
    ) -> bool {
        mode == LookupMode::OnMount && external.is_none() && current == LocationState::Unresolved
    }

    /// Aplica el resultado de la consulta al dispositivo.
    /// Los errores no se muestran al usuario: el mapa usa el centro por defecto.
    pub fn apply_device_result(
        current: LocationState,
        result: Result<Coordinate, GeolocationError>,
    ) -> LocationState {
        if current.source() == Some(LocationSource::External) {
            log::debug!("📍 [GEO] Posición del dispositivo descartada: hay coordenada externa");
            return current;
        }

        match result {
            Ok(coordinate) => {
                log::info!("📍 [GEO] Ubicación del usuario: ({}, {})", coordinate.lat, coordinate.lng);
                LocationState::Resolved {
                    coordinate,
                    source: LocationSource::Device,
                }
            }
            Err(e) => {
                log::warn!("⚠️ [GEO] No se pudo obtener la ubicación: {}", e);
                current
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTERNAL: Coordinate = Coordinate::new(3.0, -76.0);
    const DEVICE: Coordinate = Coordinate::new(3.5, -76.5);

    #[test]
    fn external_coordinate_skips_device_lookup() {
        let state = LocationViewModel::adopt_external(LocationState::Unresolved, Some(EXTERNAL));
        assert_eq!(state.coordinate(), Some(EXTERNAL));
        assert!(!LocationViewModel::needs_device_lookup(state, Some(EXTERNAL), LookupMode::OnMount));
    }

    #[test]
    fn unresolved_without_external_requests_device() {
        assert!(LocationViewModel::needs_device_lookup(LocationState::Unresolved, None, LookupMode::OnMount));
    }

    #[test]
    fn on_demand_provider_never_looks_up_by_itself() {
        assert!(!LocationViewModel::needs_device_lookup(LocationState::Unresolved, None, LookupMode::OnDemand));

        let resolved = LocationViewModel::apply_device_result(LocationState::Unresolved, Ok(DEVICE));
        assert!(!LocationViewModel::needs_device_lookup(resolved, None, LookupMode::OnMount));
    }

    #[test]
    fn device_success_resolves() {
        let state = LocationViewModel::apply_device_result(LocationState::Unresolved, Ok(DEVICE));
        assert_eq!(state.coordinate(), Some(DEVICE));
        assert_eq!(state.source(), Some(LocationSource::Device));
    }

    #[test]
    fn device_failure_stays_unresolved_until_external_arrives() {
        let state = LocationViewModel::apply_device_result(
            LocationState::Unresolved,
            Err(GeolocationError::PermissionDenied),
        );
        assert_eq!(state, LocationState::Unresolved);

        let state = LocationViewModel::adopt_external(state, Some(EXTERNAL));
        assert_eq!(state.coordinate(), Some(EXTERNAL));
    }

    #[test]
    fn late_device_fix_does_not_override_external() {
        let state = LocationViewModel::adopt_external(LocationState::Unresolved, Some(EXTERNAL));
        let state = LocationViewModel::apply_device_result(state, Ok(DEVICE));
        assert_eq!(state.coordinate(), Some(EXTERNAL));
    }

    #[test]
    fn external_is_re_adopted_on_every_change() {
        let device = LocationViewModel::apply_device_result(LocationState::Unresolved, Ok(DEVICE));
        let state = LocationViewModel::adopt_external(device, Some(EXTERNAL));
        let moved = Coordinate::new(4.0, -75.0);
        let state = LocationViewModel::adopt_external(state, Some(moved));
        assert_eq!(state.coordinate(), Some(moved));
        assert_eq!(state.source(), Some(LocationSource::External));
    }
}
