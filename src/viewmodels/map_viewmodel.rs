// ============================================================================
// MAP VIEWMODEL - Centro, zoom, marcadores y selección
// ============================================================================
// Funciones puras: los hooks memorizan sus resultados con use_memo
// ============================================================================

use yew::Callback;
use crate::config::{MapConfig, CONFIG};
use crate::models::{Coordinate, MarkerDescriptor, MarkerIcon, Venue};
use crate::utils::constants::SELF_MARKER_TITLE;

/// Clave fija del marcador del usuario
pub const SELF_MARKER_KEY: &str = "__self__";

pub struct MapViewModel {
    config: MapConfig,
}

impl MapViewModel {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    pub fn from_app_config() -> Self {
        Self::new(CONFIG.map_config.clone())
    }

    /// Ubicación resuelta o el centro por defecto (Cali)
    pub fn compute_center(&self, resolved: Option<Coordinate>) -> Coordinate {
        resolved.unwrap_or_else(|| self.config.default_center())
    }

    /// Vista más cercana si conocemos la ubicación del usuario
    pub fn zoom_for(&self, resolved: Option<Coordinate>) -> f64 {
        if resolved.is_some() {
            self.config.zoom_with_location
        } else {
            self.config.zoom_without_location
        }
    }

    /// Un marcador por cancha con coordenadas válidas (en orden de entrada),
    /// más el marcador propio si hay ubicación resuelta.
    pub fn build_markers(venues: &[Venue], resolved: Option<Coordinate>) -> Vec<MarkerDescriptor> {
        let self_marker = resolved.map(|position| MarkerDescriptor {
            key: SELF_MARKER_KEY.to_string(),
            position,
            icon: MarkerIcon::SelfLocation,
            title: SELF_MARKER_TITLE.to_string(),
            venue_id: None,
        });

        let venue_markers = venues.iter().filter_map(|venue| {
            let position = venue.coordinate.filter(Coordinate::is_finite)?;
            Some(MarkerDescriptor {
                key: venue.id.clone(),
                position,
                icon: MarkerIcon::Venue,
                title: venue.name.clone(),
                venue_id: Some(venue.id.clone()),
            })
        });

        let markers: Vec<_> = self_marker.into_iter().chain(venue_markers).collect();
        log::debug!("📍 [MAP] {} marcadores para {} canchas", markers.len(), venues.len());
        markers
    }
}

/// Cancha seleccionada en el mapa (como máximo una)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    selected: Option<Venue>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<&Venue> {
        self.selected.as_ref()
    }

    /// Selecciona y notifica al padre si registró un callback
    pub fn select(&mut self, venue: Venue, on_select: Option<&Callback<Venue>>) {
        log::info!("🏟️ [MAP] Cancha seleccionada: {}", venue.id);
        if let Some(callback) = on_select {
            callback.emit(venue.clone());
        }
        self.selected = Some(venue);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Mantiene la selección solo si la cancha sigue en la lista (refrescando sus datos)
    pub fn reconcile(&mut self, venues: &[Venue]) {
        if let Some(current) = &self.selected {
            self.selected = venues.iter().find(|v| v.id == current.id).cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn venue(id: &str, coordinate: Option<Coordinate>) -> Venue {
        Venue {
            id: id.to_string(),
            name: format!("Cancha {}", id),
            coordinate,
            address: String::new(),
            rating: None,
            price_per_hour: 50.0,
            images: Vec::new(),
            time_slots: Vec::new(),
        }
    }

    fn view_model() -> MapViewModel {
        MapViewModel::new(MapConfig::default())
    }

    #[test]
    fn center_falls_back_to_default() {
        let vm = view_model();
        assert_eq!(vm.compute_center(None), Coordinate::new(3.4516, -76.5320));

        let here = Coordinate::new(4.6, -74.08);
        assert_eq!(vm.compute_center(Some(here)), here);
    }

    #[test]
    fn zoom_depends_on_resolved_location() {
        let vm = view_model();
        assert_eq!(vm.zoom_for(None), 11.0);
        assert_eq!(vm.zoom_for(Some(Coordinate::new(0.0, 0.0))), 13.0);
    }

    #[test]
    fn geolocation_denied_uses_cali_and_wide_zoom() {
        let vm = view_model();
        let resolved = None;
        assert_eq!(vm.compute_center(resolved), Coordinate::new(3.4516, -76.5320));
        assert_eq!(vm.zoom_for(resolved), 11.0);
    }

    #[test]
    fn markers_skip_venues_without_coordinate() {
        let venues = vec![
            venue("a", Some(Coordinate::new(1.0, 2.0))),
            venue("b", None),
        ];
        let markers = MapViewModel::build_markers(&venues, Some(Coordinate::new(0.0, 0.0)));

        assert_eq!(markers.len(), 2);
        assert_eq!(markers.iter().filter(|m| m.is_self()).count(), 1);
        let venue_marker = markers.iter().find(|m| !m.is_self()).unwrap();
        assert_eq!(venue_marker.venue_id.as_deref(), Some("a"));
        assert_eq!(venue_marker.icon, MarkerIcon::Venue);
    }

    #[test]
    fn marker_count_is_valid_plus_optional_self() {
        let venues = vec![
            venue("a", Some(Coordinate::new(1.0, 2.0))),
            venue("b", Some(Coordinate::new(f64::NAN, 2.0))),
            venue("c", Some(Coordinate::new(3.0, 4.0))),
            venue("d", None),
        ];

        let without_self = MapViewModel::build_markers(&venues, None);
        assert_eq!(without_self.len(), 2);
        assert!(without_self.iter().all(|m| !m.is_self()));

        let with_self = MapViewModel::build_markers(&venues, Some(Coordinate::new(5.0, 5.0)));
        assert_eq!(with_self.len(), 3);
    }

    #[test]
    fn venue_markers_preserve_input_order() {
        let venues = vec![
            venue("z", Some(Coordinate::new(1.0, 1.0))),
            venue("m", Some(Coordinate::new(2.0, 2.0))),
            venue("a", Some(Coordinate::new(3.0, 3.0))),
        ];
        let ids: Vec<_> = MapViewModel::build_markers(&venues, Some(Coordinate::new(0.0, 0.0)))
            .into_iter()
            .filter_map(|m| m.venue_id)
            .collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }

    #[test]
    fn select_notifies_and_clear_resets() {
        let notified = Rc::new(RefCell::new(Vec::new()));
        let on_select = {
            let notified = notified.clone();
            Callback::from(move |v: Venue| notified.borrow_mut().push(v.id))
        };

        let mut selection = SelectionState::default();
        selection.select(venue("a", None), Some(&on_select));
        selection.select(venue("b", None), None);
        assert_eq!(selection.selected().map(|v| v.id.as_str()), Some("b"));
        assert_eq!(*notified.borrow(), vec!["a".to_string()]);

        selection.clear();
        assert_eq!(selection.selected(), None);
        selection.clear();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn reconcile_drops_missing_selection() {
        let mut selection = SelectionState::default();
        selection.select(venue("a", None), None);

        selection.reconcile(&[venue("a", Some(Coordinate::new(1.0, 1.0))), venue("b", None)]);
        assert_eq!(
            selection.selected().and_then(|v| v.coordinate),
            Some(Coordinate::new(1.0, 1.0))
        );

        selection.reconcile(&[venue("b", None)]);
        assert_eq!(selection.selected(), None);
    }
}
